use leptos::prelude::*;

use crate::models::{Direction, Transition};
use crate::motion::path_field::{
    self, CURVES_PER_FIELD, FIELD_VIEW_BOX, GRADIENT_SWEEP, GRADIENT_SWEEP_SECS,
};

/// One layer of slowly flowing background curves.
#[component]
pub fn FloatingPaths(direction: Direction) -> impl IntoView {
    let curves = path_field::generate(
        CURVES_PER_FIELD,
        direction,
        &mut path_field::field_rng(direction),
    );

    let gradient_id = match direction {
        Direction::Forward => "path-gradient-forward",
        Direction::Backward => "path-gradient-backward",
    };
    let stroke = format!("url(#{gradient_id})");

    view! {
        <div class="floating-paths">
            <svg class="floating-paths-svg" viewBox=FIELD_VIEW_BOX fill="none" aria-hidden="true">
                <defs>
                    <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="0%">
                        {GRADIENT_SWEEP
                            .iter()
                            .map(|(attribute, values)| {
                                view! {
                                    <animate
                                        attributeName=*attribute
                                        values=*values
                                        dur=format!("{GRADIENT_SWEEP_SECS}s")
                                        repeatCount="indefinite"
                                    />
                                }
                            })
                            .collect_view()}
                        <stop class="gradient-stop-start" offset="0%"/>
                        <stop class="gradient-stop-end" offset="100%"/>
                    </linearGradient>
                </defs>
                {curves
                    .into_iter()
                    .map(|curve| {
                        let animation = Transition::linear_loop(curve.duration_secs)
                            .to_css("path-flow");
                        view! {
                            <path
                                class="floating-path"
                                d=curve.path
                                stroke=stroke.clone()
                                stroke-width=format!("{:.2}", curve.width)
                                stroke-opacity=format!("{:.2}", curve.stroke.a)
                                pathLength="1"
                                style=format!("animation: {animation}")
                            />
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
