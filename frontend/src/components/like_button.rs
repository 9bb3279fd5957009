use dogcatdang_shared::LikeRequest;
use yew::prelude::*;

use crate::{
    api::set_animal_like, i18n::current::like_button as t, query_context::use_invalidate_query,
};

#[derive(Properties, PartialEq)]
pub struct LikeButtonProps {
    pub animal_id: u64,
    pub is_active: bool,
    pub on_toggle: Callback<()>,
}

/// Heart toggle. Flips the owner's state right away and persists the new
/// value in the background; clicks are ignored until that request ends.
#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let request = use_mut_ref(LikeRequest::default);
    let invalidate_query = use_invalidate_query();

    let onclick = {
        let animal_id = props.animal_id;
        let is_active = props.is_active;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(next) = request.borrow_mut().begin(is_active) else {
                return;
            };
            on_toggle.emit(());

            let request = request.clone();
            let invalidate_query = invalidate_query.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = set_animal_like(animal_id, next).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(
                        &format!("Failed to update like for animal {}: {}", animal_id, e).into(),
                    );
                }
                if let Some(key) = request.borrow_mut().finish(result.is_ok()) {
                    invalidate_query.emit(key);
                }
            });
        })
    };

    let label = if props.is_active { t::UNLIKE } else { t::LIKE };
    let icon_style = if props.is_active { "fas" } else { "far" };

    html! {
        <button
            type="button"
            class={classes!(
                "inline-flex",
                "h-9",
                "w-9",
                "items-center",
                "justify-center",
                "rounded-full",
                "bg-transparent",
                "transition-transform",
                "duration-150",
                "hover:scale-110"
            )}
            aria-label={label}
            title={label}
            aria-pressed={props.is_active.to_string()}
            {onclick}
        >
            <i
                class={classes!(icon_style, "fa-heart", "fa-lg", "text-[#ff8331]")}
                aria-hidden="true"
            ></i>
        </button>
    }
}
