use crate::models::MotionError;

/// Framer-style defaults for pointer smoothing
pub const DEFAULT_STIFFNESS: f64 = 100.0;
pub const DEFAULT_DAMPING: f64 = 10.0;

const REST_DELTA: f64 = 0.001;
const REST_SPEED: f64 = 0.01;
const MAX_SUBSTEP: f64 = 1.0 / 240.0;
const MAX_CURVE_SECS: f64 = 10.0;

/// Damped harmonic oscillator with unit mass.
///
/// Owned by exactly one animated value. `step` is driven by the caller's frame
/// loop; nothing here keeps time on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    position: f64,
    velocity: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            position: 0.0,
            velocity: 0.0,
        }
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Result<Self, MotionError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(stiffness) || !valid(damping) {
            return Err(MotionError::InvalidSpring { stiffness, damping });
        }
        Ok(Self {
            stiffness,
            damping,
            ..Default::default()
        })
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Jump to `value` and drop any momentum.
    pub fn snap(&mut self, value: f64) {
        self.position = value;
        self.velocity = 0.0;
    }

    pub fn settled(&self, target: f64) -> bool {
        (target - self.position).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance by `dt` seconds towards `target` and return the new position.
    pub fn step(&mut self, dt: f64, target: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 {
            return self.position;
        }

        // Semi-implicit Euler, sub-stepped so long frames stay stable
        let dt = dt.min(MAX_CURVE_SECS);
        let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / steps as f64;
        for _ in 0..steps {
            let accel = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if self.settled(target) {
            self.snap(target);
        }
        self.position
    }

    /// Unit step response (0 → 1) sampled at `samples` evenly spaced instants
    /// between release and rest. Returns the samples and the settle time.
    pub fn sample_curve(&self, samples: usize) -> (Vec<f64>, f64) {
        let dt = 1.0 / 120.0;
        let mut probe = Spring {
            position: 0.0,
            velocity: 0.0,
            ..*self
        };

        let mut trace = vec![0.0];
        let mut elapsed = 0.0;
        while !probe.settled(1.0) && elapsed < MAX_CURVE_SECS {
            trace.push(probe.step(dt, 1.0));
            elapsed += dt;
        }

        let samples = samples.max(2);
        let last = trace.len() - 1;
        let curve = (0..samples)
            .map(|i| {
                let t = i as f64 / (samples - 1) as f64 * last as f64;
                let lo = t.floor() as usize;
                let hi = (lo + 1).min(last);
                let frac = t - lo as f64;
                trace[lo] + (trace[hi] - trace[lo]) * frac
            })
            .collect();

        (curve, elapsed)
    }
}
