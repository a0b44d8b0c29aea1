use leptos::prelude::*;
use leptos::web_sys;

use crate::content::PLACEHOLDER_IMAGE;
use crate::models::{Feature, TiltAngles, Transition};
use crate::motion::TiltTransform;

/// Spring step per animation frame
#[cfg(feature = "hydrate")]
const FRAME_SECS: f64 = 1.0 / 60.0;

#[component]
pub fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    // Each card owns its own smoothing state
    let tilt = StoredValue::new(TiltTransform::new());
    let running = StoredValue::new(false);
    let (transform, set_transform) = signal(TiltAngles::default().to_css());

    #[allow(unused_variables)]
    let handle_mouse_move = move |ev: web_sys::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::models::Rect;
            use wasm_bindgen::JsCast;

            let Some(card) = ev
                .current_target()
                .and_then(|target| target.dyn_into::<::web_sys::Element>().ok())
            else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());

            tilt.update_value(|t| {
                t.update(ev.client_x() as f64, ev.client_y() as f64, &rect);
            });
            start_frames(tilt, running, set_transform);
        }
        let _ = ev;
    };

    #[allow(unused_variables)]
    let handle_mouse_leave = move |ev: web_sys::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            tilt.update_value(|t| {
                t.reset();
            });
            start_frames(tilt, running, set_transform);
        }
        let _ = ev;
    };

    let reveal = Transition::fade_in(index as f64 * 0.2, 0.6).to_css("rise-in");
    let image_url = if feature.image_url.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        feature.image_url
    };

    view! {
        <div class="feature-reveal" style=format!("animation: {reveal}")>
            <div
                class="feature-card"
                on:mousemove=handle_mouse_move
                on:mouseleave=handle_mouse_leave
                style=move || format!("transform: {}; transform-style: preserve-3d;", transform.get())
            >
                <div class="feature-card-body">
                    <div class="feature-media">
                        <img
                            src=image_url
                            alt=feature.title
                            width="500"
                            height="500"
                            loading="lazy"
                        />
                    </div>
                    <div class="feature-text">
                        <div class="feature-heading">
                            <h3>{feature.title}</h3>
                            <p class="feature-description">{feature.description}</p>
                        </div>
                        <div class="sub-features">
                            {feature
                                .sub_features
                                .iter()
                                .map(|sub| {
                                    view! {
                                        <div class="sub-feature">
                                            <h4>{sub.heading}</h4>
                                            <p>{sub.text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Begin stepping the springs on animation frames unless a loop is already live.
#[cfg(feature = "hydrate")]
fn start_frames(
    tilt: StoredValue<TiltTransform>,
    running: StoredValue<bool>,
    set_transform: WriteSignal<String>,
) {
    if running.get_value() {
        return;
    }
    running.set_value(true);
    request_animation_frame(move || drive_frame(tilt, running, set_transform));
}

#[cfg(feature = "hydrate")]
fn drive_frame(
    tilt: StoredValue<TiltTransform>,
    running: StoredValue<bool>,
    set_transform: WriteSignal<String>,
) {
    // The card may have been unmounted between frames
    let Some((angles, animating)) =
        tilt.try_update_value(|t| (t.step(FRAME_SECS), t.is_animating()))
    else {
        return;
    };
    set_transform.set(angles.to_css());

    if animating {
        request_animation_frame(move || drive_frame(tilt, running, set_transform));
    } else {
        running.set_value(false);
    }
}
