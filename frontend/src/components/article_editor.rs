use dogcatdang_shared::{EditorConfig, EditorState, SubmitFailure, SubmitOutcome};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    api::request_article,
    components::{
        alert_modal::AlertModal,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        preview_modal::PreviewModal,
        rich_text_editor::RichTextEditor,
    },
    i18n::current::article_editor as t,
    query_context::use_invalidate_query,
    router::Route,
    session,
};

#[derive(Properties, PartialEq)]
pub struct ArticleEditorProps {
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub content: Option<String>,
    /// Board being edited; absent when writing a new article.
    #[prop_or_default]
    pub board_id: Option<u64>,
}

#[function_component(ArticleEditor)]
pub fn article_editor(props: &ArticleEditorProps) -> Html {
    let editor = {
        let (title, content, board_id) =
            (props.title.clone(), props.content.clone(), props.board_id);
        use_mut_ref(move || EditorState::new(title, content, board_id))
    };
    let config = use_memo((), |_| EditorConfig::article());
    let trigger = use_force_update();
    let navigator = use_navigator();
    let invalidate_query = use_invalidate_query();

    let on_title_input = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            editor.borrow_mut().set_title(input.value());
            trigger.force_update();
        })
    };

    let on_body_change = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        Callback::from(move |html: String| {
            editor.borrow_mut().set_body(html);
            trigger.force_update();
        })
    };

    let toggle_preview = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            editor.borrow_mut().toggle_preview();
            trigger.force_update();
        })
    };

    let close_alert = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: ()| {
            editor.borrow_mut().dismiss_alert();
            trigger.force_update();
        })
    };

    let submit = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        let navigator = navigator.clone();
        let invalidate_query = invalidate_query.clone();
        Callback::from(move |saved: bool| {
            let nickname = session::user_info().nickname;
            let Some(submission) = editor.borrow_mut().begin_submit(saved, &nickname) else {
                return;
            };
            trigger.force_update();

            let editor = editor.clone();
            let trigger = trigger.clone();
            let navigator = navigator.clone();
            let invalidate_query = invalidate_query.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = request_article(&submission).await.map_err(|e| {
                    web_sys::console::error_1(&format!("Failed to submit article: {}", e).into());
                    SubmitFailure::from(e)
                });

                let outcome = editor.borrow_mut().finish_submit(result);
                if let SubmitOutcome::Completed {
                    invalidate,
                    navigate_to,
                } = outcome
                {
                    for key in invalidate {
                        invalidate_query.emit(key);
                    }
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::from(navigate_to));
                    }
                }
                trigger.force_update();
            });
        })
    };

    let state = editor.borrow().clone();
    let (preview_title, preview_body) = state.preview();

    let controls = if state.controls_visible() {
        let on_draft = {
            let submit = submit.clone();
            Callback::from(move |_: MouseEvent| submit.emit(false))
        };
        let on_preview = {
            let toggle_preview = toggle_preview.clone();
            Callback::from(move |_: MouseEvent| toggle_preview.emit(()))
        };
        let on_submit = {
            let submit = submit.clone();
            Callback::from(move |_: MouseEvent| submit.emit(true))
        };
        html! {
            <div class={classes!("mt-6", "flex", "justify-end", "gap-2")}>
                <button type="button" class="btn-secondary" onclick={on_draft}>{ t::SAVE_DRAFT }</button>
                <button type="button" class="btn-secondary" onclick={on_preview}>{ t::PREVIEW }</button>
                <button type="button" class="btn-primary" onclick={on_submit}>{ t::SUBMIT }</button>
            </div>
        }
    } else {
        html! { <LoadingSpinner size={SpinnerSize::Small} /> }
    };

    html! {
        <>
            <PreviewModal
                open={state.preview_open()}
                title={AttrValue::from(preview_title.to_string())}
                content={AttrValue::from(preview_body.to_string())}
                on_close={toggle_preview}
            />
            {
                if let Some(alert) = state.alert() {
                    html! {
                        <AlertModal
                            title={AttrValue::from(alert.name.clone())}
                            content={AttrValue::from(alert.message.clone())}
                            on_close={close_alert}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <label for="title" class={classes!("mt-8", "mb-2", "block", "text-lg", "font-bold", "text-gray-800")}>
                { t::TITLE_LABEL }
            </label>
            <input
                id="title"
                type="text"
                class={classes!("w-full", "rounded-lg", "border", "border-[#ccc]", "px-3", "py-2")}
                value={state.draft().title.clone()}
                oninput={on_title_input}
            />
            <label for="content" class={classes!("mt-8", "mb-2", "block", "text-lg", "font-bold", "text-gray-800")}>
                { t::CONTENT_LABEL }
            </label>
            <RichTextEditor
                id={AttrValue::from("content")}
                value={AttrValue::from(state.draft().body.clone())}
                on_change={on_body_change}
                config={(*config).clone()}
            />
            { controls }
        </>
    }
}
