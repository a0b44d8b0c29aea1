use leptos::prelude::*;

use crate::content::{CTA_FORM_URL, CTA_LABEL, HERO_BLURB, PRODUCT_NAME, VIDEO_EMBED_URL};

use super::AnimatedTitle;

#[component]
pub fn Hero(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="hero">
            <AnimatedTitle title=title/>
            <p class="hero-blurb">{HERO_BLURB}</p>
            <CallToAction/>
            <VideoEmbed/>
        </section>
    }
}

/// Opens the signup form in a new tab.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <div class="cta-buttons">
            <div class="cta-frame">
                <a class="btn btn-cta" href=CTA_FORM_URL target="_blank" rel="noopener noreferrer">
                    <span class="cta-label">{CTA_LABEL}</span>
                    <span class="cta-arrow">"→"</span>
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn VideoEmbed() -> impl IntoView {
    view! {
        <div class="video-embed">
            <iframe
                src=VIDEO_EMBED_URL
                title=format!("{PRODUCT_NAME} product walkthrough")
                allowfullscreen=true
            ></iframe>
        </div>
    }
}

#[cfg(test)]
mod tests {
    const STYLESHEET: &str = include_str!("../../style/main.css");

    #[test]
    fn video_frame_border_comes_from_the_stylesheet() {
        let rule = STYLESHEET
            .lines()
            .find(|line| line.starts_with(".video-embed iframe"))
            .expect("iframe rule");
        assert!(rule.contains("border: 0;"), "{rule}");
    }
}
