use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::content::{DEFAULT_TITLE, META_DESCRIPTION, PRODUCT_NAME};
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/support3.css"/>
        <Title text=format!("{PRODUCT_NAME} - {DEFAULT_TITLE}")/>
        <Meta name="description" content=META_DESCRIPTION/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <LandingPage/> }/>
                </Routes>
            </main>
        </Router>
    }
}
