//! Dogcatdang web client: saved-animal browsing and the shelter article
//! board, rendered client-side with Yew.

mod api;
mod components;
mod config;
mod i18n;
mod logging;
mod models;
mod pages;
mod query_context;
mod router;
mod session;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    yew::Renderer::<App>::new().render();
}
