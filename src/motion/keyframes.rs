use crate::models::{round_to, Easing, Repeat, Transition};

use super::spring::Spring;

/// Points used to approximate a spring with CSS `linear()`
const SPRING_SAMPLES: usize = 32;

impl Transition {
    /// Render as the value of a CSS `animation` property for `@keyframes name`.
    ///
    /// Spring easings are sampled into a `linear()` timing function and take
    /// their duration from the spring's settle time.
    pub fn to_css(&self, name: &str) -> String {
        let (duration, easing) = match self.easing {
            Easing::Linear => (self.duration_secs, "linear".to_string()),
            Easing::EaseOut => (self.duration_secs, "ease-out".to_string()),
            Easing::Spring { stiffness, damping } => match Spring::new(stiffness, damping) {
                Ok(spring) => {
                    let (curve, secs) = spring.sample_curve(SPRING_SAMPLES);
                    (secs, linear_easing(&curve))
                }
                Err(err) => {
                    tracing::warn!(%err, "falling back to ease-out");
                    (self.duration_secs.max(0.5), "ease-out".to_string())
                }
            },
        };

        let iterations = match self.repeat {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        };

        format!(
            "{name} {}s {easing} {}s {iterations} both",
            round_to(duration, 3),
            round_to(self.delay_secs, 3)
        )
    }
}

fn linear_easing(curve: &[f64]) -> String {
    let stops: Vec<String> = curve
        .iter()
        .map(|v| round_to(*v, 4).to_string())
        .collect();
    format!("linear({})", stops.join(", "))
}
