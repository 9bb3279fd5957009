use yew::prelude::*;

use crate::i18n::current::not_found as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-5xl", "px-4", "py-10")}>
            <h2 class={classes!("text-xl", "font-bold")}>{ t::TITLE }</h2>
            <p>{ t::BODY }</p>
        </main>
    }
}
