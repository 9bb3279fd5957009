use dogcatdang_shared::{AnimalRoute, AnimalSummary};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_saved_animal,
    components::loading_spinner::LoadingSpinner,
    i18n::{
        current::{common as common_text, save_animal_card as card_text, save_animal_detail as t},
        fill_one,
    },
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct SaveAnimalDetailProps {
    pub id: u64,
}

#[function_component(SaveAnimalDetailPage)]
pub fn save_animal_detail_page(props: &SaveAnimalDetailProps) -> Html {
    let animal = use_state(|| None::<AnimalSummary>);
    let loading = use_state(|| true);

    {
        let animal = animal.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_saved_animal(id).await {
                    Ok(data) => animal.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch animal {}: {}", id, e).into(),
                        );
                        animal.set(None);
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(animal) = (*animal).clone() {
        let rows = [
            (t::CODE, animal.code.clone()),
            (t::TYPE, animal.animal_type.clone()),
            (t::WEIGHT, animal.weight.clone()),
            (t::RESCUE_DATE, animal.rescue_date.clone()),
            (t::RESCUE_LOCATION, animal.rescue_location.clone()),
            (t::FEATURE, animal.feature.clone()),
            (t::STATE, animal.state.clone()),
            (t::DETAIL, animal.detail_info.clone()),
        ];
        html! {
            <article class={classes!("space-y-4")}>
                <img src={animal.img_url.clone()} alt={card_text::IMAGE_ALT} class={classes!("max-w-full", "rounded-lg")} />
                <h2 class={classes!("text-xl", "font-bold")}>
                    { animal.breed_label() }
                    { " | " }
                    { fill_one(card_text::AGE_TEMPLATE, &animal.age) }
                </h2>
                <p>{ &animal.gender }{ " | " }{ animal.neuter_label() }</p>
                <p class={classes!("text-sm")}>{ fill_one(card_text::SHELTER_TEMPLATE, &animal.user_nickname) }</p>
                <p class={classes!("text-sm")}>{ fill_one(card_text::APPLICANTS_TEMPLATE, animal.adoption_applicant_count) }</p>
                <dl class={classes!("grid", "grid-cols-[8rem_1fr]", "gap-2", "text-sm")}>
                    { for rows.into_iter().map(|(label, value)| html! {
                        <>
                            <dt class={classes!("font-semibold")}>{ label }</dt>
                            <dd>{ value }</dd>
                        </>
                    }) }
                </dl>
            </article>
        }
    } else {
        html! { <p>{ t::NOT_FOUND }</p> }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-6")}>
            <Link<Route> to={Route::from(AnimalRoute::List)} classes={classes!("mb-4", "inline-block", "text-sm")}>
                { common_text::BACK }
            </Link<Route>>
            { body }
        </main>
    }
}
