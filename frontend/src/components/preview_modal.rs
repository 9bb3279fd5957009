use yew::prelude::*;

use crate::{components::article_body::ArticleBody, i18n::current::preview_modal as t};

#[derive(Properties, PartialEq)]
pub struct PreviewModalProps {
    pub open: bool,
    pub title: AttrValue,
    /// Editor HTML exactly as typed.
    pub content: AttrValue,
    pub on_close: Callback<()>,
}

#[function_component(PreviewModal)]
pub fn preview_modal(props: &PreviewModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let title = if props.title.trim().is_empty() {
        AttrValue::from(t::EMPTY_TITLE)
    } else {
        props.title.clone()
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[100]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/60",
                "p-4",
                "backdrop-blur-sm"
            )}
            role="dialog"
            aria-modal="true"
            aria-label={t::TITLE}
            onclick={close.clone()}
        >
            <div
                class={classes!(
                    "w-full",
                    "max-w-3xl",
                    "max-h-[90vh]",
                    "overflow-y-auto",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-xl"
                )}
                onclick={keep_open}
            >
                <div class={classes!("mb-4", "flex", "items-center", "justify-between")}>
                    <span class={classes!("text-sm", "font-semibold", "text-[var(--muted)]")}>{ t::TITLE }</span>
                    <button type="button" class="btn-secondary" onclick={close}>{ t::CLOSE }</button>
                </div>
                <h1 class={classes!("mb-6", "text-2xl", "font-bold", "break-words")}>{ title.as_str() }</h1>
                <ArticleBody html={props.content.clone()} />
            </div>
        </div>
    }
}
