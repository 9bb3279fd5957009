use dogcatdang_shared::{AnimalSummary, QueryKey};
use yew::prelude::*;

use crate::{
    api::fetch_saved_animals,
    components::{loading_spinner::LoadingSpinner, save_animal_card::SaveAnimalCard},
    i18n::current::save_animals_page as t,
    query_context::use_query_generation,
};

#[function_component(SaveAnimalsPage)]
pub fn save_animals_page() -> Html {
    let animals = use_state(Vec::<AnimalSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let generation = use_query_generation(QueryKey::AnimalList);

    {
        let animals = animals.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(generation, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_saved_animals().await {
                    Ok(data) => {
                        animals.set(data);
                        error.set(None);
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch saved animals: {}", e).into(),
                        );
                        error.set(Some(e.to_string()));
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Keep the grid mounted while re-fetching after a like.
    let body = if *loading && animals.is_empty() {
        html! { <LoadingSpinner /> }
    } else if let Some(message) = (*error).clone() {
        html! { <p class={classes!("text-red-600")} role="alert">{ message }</p> }
    } else if animals.is_empty() {
        html! { <p>{ t::EMPTY }</p> }
    } else {
        html! {
            <div class={classes!("grid", "grid-cols-2", "gap-4", "md:grid-cols-4")}>
                { for animals.iter().map(|animal| html! {
                    <SaveAnimalCard key={animal.animal_id} animal={animal.clone()} />
                }) }
            </div>
        }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-5xl", "px-4", "py-6")}>
            <h2 class={classes!("mb-4", "text-xl", "font-bold")}>{ t::TITLE }</h2>
            { body }
        </main>
    }
}
