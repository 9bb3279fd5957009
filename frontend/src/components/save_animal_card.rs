use dogcatdang_shared::{AnimalRoute, AnimalSummary, LikeState};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    components::like_button::LikeButton,
    i18n::{current::save_animal_card as t, fill_one},
    router::Route,
};

#[derive(Properties, PartialEq, Clone)]
pub struct SaveAnimalCardProps {
    pub animal: AnimalSummary,
}

#[function_component(SaveAnimalCard)]
pub fn save_animal_card(props: &SaveAnimalCardProps) -> Html {
    let animal = &props.animal;
    let navigator = use_navigator();
    let trigger = use_force_update();
    let like_state = use_mut_ref(|| LikeState::new(animal.like));

    // Server truth wins as soon as the parent hands us a different value.
    like_state.borrow_mut().sync(animal.like);
    let liked = like_state.borrow().displayed();

    let goto_detail = {
        let id = animal.animal_id;
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::from(AnimalRoute::Detail {
                    id,
                }));
            }
        })
    };

    let on_toggle_like = {
        let like_state = like_state.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            like_state.borrow_mut().toggle();
            trigger.force_update();
        })
    };

    html! {
        <article
            class={classes!(
                "save-animal-card",
                "relative",
                "rounded-[10px]",
                "border",
                "border-[#ccc]",
                "bg-white",
                "px-5",
                "pt-1",
                "pb-4",
                "shadow-[2px_2px_2px_rgba(45,45,45,0.4)]"
            )}
        >
            <div
                class={classes!(
                    "absolute",
                    "right-[10%]",
                    "top-[10%]",
                    "border",
                    "border-white",
                    "bg-[#ff8331]",
                    "p-1",
                    "text-[8px]",
                    "text-white"
                )}
            >
                { fill_one(t::APPLICANTS_TEMPLATE, animal.adoption_applicant_count) }
            </div>
            <div class={classes!("cursor-pointer")} onclick={goto_detail}>
                <div class={classes!("text-[10px]")}>
                    { fill_one(t::SHELTER_TEMPLATE, &animal.user_nickname) }
                </div>
                <img
                    src={animal.img_url.clone()}
                    alt={t::IMAGE_ALT}
                    loading="lazy"
                    class={classes!("border", "border-[#ccc]")}
                />
                <div>
                    <strong>{ animal.breed_label() }</strong>
                    { " | " }
                    <strong>{ fill_one(t::AGE_TEMPLATE, &animal.age) }</strong>
                </div>
                <p class={classes!("text-[13px]")}>
                    { &animal.gender }
                    { " | " }
                    { animal.neuter_label() }
                </p>
                <p class={classes!("text-[10px]", "opacity-70")}>
                    { fill_one(t::LOCATION_TEMPLATE, animal.short_location()) }
                </p>
            </div>
            <div class={classes!("absolute", "right-[8%]", "bottom-[4%]")}>
                <LikeButton
                    animal_id={animal.animal_id}
                    is_active={liked}
                    on_toggle={on_toggle_like}
                />
            </div>
        </article>
    }
}
