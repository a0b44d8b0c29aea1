use leptos::prelude::*;

use crate::content::{COPYRIGHT, FOOTER_LINKS};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="copyright">{COPYRIGHT}</div>
                <nav class="footer-links">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </footer>
    }
}
