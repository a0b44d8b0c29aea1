use leptos::prelude::*;

use crate::components::{FeatureCard, FloatingPaths, Hero, SecurityFeatureCard, SiteFooter};
use crate::content::{DEFAULT_TITLE, FEATURES, SECURITY_BLURB, SECURITY_FEATURES, SECURITY_HEADING};
use crate::models::{Direction, Transition};

#[component]
pub fn LandingPage(#[prop(into, optional)] title: Option<String>) -> impl IntoView {
    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let page_fade = Transition::fade_in(0.0, 2.0).to_css("fade-in");

    view! {
        <div class="landing-page">
            <div class="background-fields">
                <FloatingPaths direction=Direction::Forward/>
                <FloatingPaths direction=Direction::Backward/>
            </div>

            <div class="landing-content">
                <div class="landing-inner" style=format!("animation: {page_fade}")>
                    <Hero title=title/>

                    <section class="features">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index/> })
                            .collect_view()}
                    </section>

                    <section class="security">
                        <div class="security-header">
                            <h2>{SECURITY_HEADING}</h2>
                            <p>{SECURITY_BLURB}</p>
                        </div>
                        <div class="security-grid">
                            {SECURITY_FEATURES
                                .iter()
                                .enumerate()
                                .map(|(index, feature)| {
                                    view! { <SecurityFeatureCard feature=*feature index=index/> }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>
            </div>

            <SiteFooter/>
        </div>
    }
}
