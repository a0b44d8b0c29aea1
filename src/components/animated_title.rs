use leptos::prelude::*;

use crate::models::Transition;
use crate::motion::title::{self, LETTER_DAMPING, LETTER_STIFFNESS};

/// Hero heading whose letters spring into place one after another.
#[component]
pub fn AnimatedTitle(#[prop(into)] title: String) -> impl IntoView {
    let units = title::sequence(&title);

    let words = title::words(&units)
        .into_iter()
        .map(|word| {
            let letters = word
                .iter()
                .map(|unit| {
                    let animation = Transition::spring(unit.delay_secs, LETTER_STIFFNESS, LETTER_DAMPING)
                        .to_css("letter-in");
                    view! {
                        <span class="title-letter" style=format!("animation: {animation}")>
                            {unit.glyph.to_string()}
                        </span>
                    }
                })
                .collect_view();
            view! { <span class="title-word">{letters}</span> }
        })
        .collect_view();

    view! {
        <h1 class="hero-title" aria-label=title.clone()>
            {words}
        </h1>
    }
}
