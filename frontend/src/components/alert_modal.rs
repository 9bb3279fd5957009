use yew::prelude::*;

use crate::i18n::current::alert_modal as t;

#[derive(Properties, PartialEq)]
pub struct AlertModalProps {
    pub title: AttrValue,
    pub content: AttrValue,
    pub on_close: Callback<()>,
}

/// Blocking alert that stays open until the user dismisses it.
#[function_component(AlertModal)]
pub fn alert_modal(props: &AlertModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "inset-0",
                "z-[110]",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/50",
                "p-4"
            )}
            onkeydown={on_keydown}
        >
            <div
                class={classes!(
                    "w-full",
                    "max-w-md",
                    "rounded-2xl",
                    "bg-[var(--surface)]",
                    "p-6",
                    "shadow-xl",
                    "space-y-3"
                )}
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="alert-modal-title"
            >
                <div class={classes!("flex", "items-start", "gap-3")}>
                    <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
                    <div class={classes!("flex-1", "space-y-1")}>
                        <p id="alert-modal-title" class={classes!("font-semibold", "text-base")}>
                            { props.title.as_str() }
                        </p>
                        <p class={classes!("text-sm", "break-words")}>{ props.content.as_str() }</p>
                    </div>
                    <button
                        type="button"
                        class={classes!(
                            "inline-flex",
                            "h-8",
                            "w-8",
                            "items-center",
                            "justify-center",
                            "rounded-full",
                            "text-lg",
                            "hover:bg-black/10"
                        )}
                        aria-label={t::CLOSE_ARIA}
                        onclick={close.clone()}
                    >
                        {"×"}
                    </button>
                </div>
                <div class={classes!("flex", "justify-end")}>
                    <button type="button" class="btn-primary" onclick={close}>
                        { t::CONFIRM }
                    </button>
                </div>
            </div>
        </div>
    }
}
