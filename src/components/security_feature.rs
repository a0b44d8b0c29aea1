use leptos::prelude::*;

use crate::models::{SecurityFeature, Transition};

#[component]
pub fn SecurityFeatureCard(feature: SecurityFeature, index: usize) -> impl IntoView {
    let reveal = Transition::fade_in(index as f64 * 0.1, 0.6).to_css("rise-in");

    view! {
        <div class="security-feature" style=format!("animation: {reveal}")>
            <div class="security-icon">
                <span>{feature.icon}</span>
            </div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
