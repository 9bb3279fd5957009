use std::{cell::RefCell, rc::Rc};

use dogcatdang_shared::{
    editor_config::{EditorCommand, ToolbarItem},
    EditorConfig,
};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, HtmlElement, HtmlInputElement, Range};
use yew::prelude::*;

use crate::{api::upload_image, i18n::current::rich_text_editor as t};

#[derive(Properties, PartialEq)]
pub struct RichTextEditorProps {
    /// Current HTML; the widget is controlled.
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub config: EditorConfig,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

type SavedRange = Rc<RefCell<Option<Range>>>;

fn current_range() -> Option<Range> {
    let selection = window()?.get_selection().ok().flatten()?;
    if selection.range_count() == 0 {
        return None;
    }
    selection.get_range_at(0).ok()
}

fn caret_at_end(editor: &HtmlElement) -> Option<Range> {
    let range = editor.owner_document()?.create_range().ok()?;
    range.select_node_contents(editor).ok()?;
    range.collapse_with_to_start(false);
    Some(range)
}

/// Focus the editor and put the selection back where the user left it.
/// Falls back to the end of the content when the last selection was
/// outside the editor.
fn restore_selection(editor: &HtmlElement, saved: &SavedRange) {
    let _ = editor.focus();
    let Some(selection) = window().and_then(|win| win.get_selection().ok().flatten()) else {
        return;
    };

    let inside_editor = |range: &Range| {
        range
            .common_ancestor_container()
            .map(|node| editor.contains(Some(&node)))
            .unwrap_or(false)
    };
    let range = saved
        .borrow()
        .clone()
        .filter(inside_editor)
        .or_else(|| caret_at_end(editor));

    if let Some(range) = range {
        let _ = selection.remove_all_ranges();
        let _ = selection.add_range(&range);
    }
}

fn exec_command(command: &EditorCommand) -> bool {
    let Some(document) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
    else {
        return false;
    };

    document
        .exec_command_with_show_ui_and_value(
            command.name,
            false,
            command.value.as_deref().unwrap_or(""),
        )
        .unwrap_or(false)
}

fn short_label(item: ToolbarItem) -> String {
    match item {
        ToolbarItem::Header(Some(level)) => format!("H{}", level),
        ToolbarItem::Header(None) => "P".to_string(),
        _ => item.label().to_string(),
    }
}

/// Contenteditable rich-text widget driven entirely by its
/// [`EditorConfig`]: toolbar layout, and render rules for inserted images.
#[function_component(RichTextEditor)]
pub fn rich_text_editor(props: &RichTextEditorProps) -> Html {
    let editor_ref = use_node_ref();
    let file_input_ref = use_node_ref();
    let saved_range: SavedRange = use_mut_ref(|| None);
    let uploading = use_state(|| false);

    // Only push outside changes into the DOM so typing keeps the caret.
    {
        let editor_ref = editor_ref.clone();
        use_effect_with(props.value.clone(), move |value| {
            if let Some(editor) = editor_ref.cast::<HtmlElement>() {
                if editor.inner_html() != value.as_str() {
                    editor.set_inner_html(value.as_str());
                }
            }
            || ()
        });
    }

    let emit_change = {
        let editor_ref = editor_ref.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: ()| {
            if let Some(editor) = editor_ref.cast::<HtmlElement>() {
                on_change.emit(editor.inner_html());
            }
        })
    };

    let remember_selection = {
        let saved_range = saved_range.clone();
        Callback::from(move |_: ()| {
            if let Some(range) = current_range() {
                *saved_range.borrow_mut() = Some(range);
            }
        })
    };

    let run_item = {
        let editor_ref = editor_ref.clone();
        let saved_range = saved_range.clone();
        let emit_change = emit_change.clone();
        let remember_selection = remember_selection.clone();
        Callback::from(move |(item, value): (ToolbarItem, Option<String>)| {
            let Some(command) = item.command(value.as_deref()) else {
                return;
            };
            let Some(editor) = editor_ref.cast::<HtmlElement>() else {
                return;
            };
            restore_selection(&editor, &saved_range);
            if !exec_command(&command) {
                web_sys::console::error_1(
                    &format!("Editor command `{}` was not applied", command.name).into(),
                );
            }
            remember_selection.emit(());
            emit_change.emit(());
        })
    };

    let oninput = {
        let emit_change = emit_change.clone();
        let remember_selection = remember_selection.clone();
        Callback::from(move |_: InputEvent| {
            remember_selection.emit(());
            emit_change.emit(());
        })
    };
    let onkeyup = {
        let remember_selection = remember_selection.clone();
        Callback::from(move |_: KeyboardEvent| remember_selection.emit(()))
    };
    let onmouseup = {
        let remember_selection = remember_selection.clone();
        Callback::from(move |_: MouseEvent| remember_selection.emit(()))
    };

    let on_file_change = {
        let editor_ref = editor_ref.clone();
        let saved_range = saved_range.clone();
        let emit_change = emit_change.clone();
        let uploading = uploading.clone();
        let config = props.config.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            let editor_ref = editor_ref.clone();
            let saved_range = saved_range.clone();
            let emit_change = emit_change.clone();
            let uploading = uploading.clone();
            let config = config.clone();
            uploading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match upload_image(&file).await {
                    Ok(url) => {
                        if let Some(editor) = editor_ref.cast::<HtmlElement>() {
                            restore_selection(&editor, &saved_range);
                            let command = EditorCommand {
                                name: "insertHTML",
                                value: Some(config.render_image(&url, t::IMAGE_ALT)),
                            };
                            if exec_command(&command) {
                                emit_change.emit(());
                            }
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Image upload failed: {}", e).into());
                    },
                }
                uploading.set(false);
            });
        })
    };

    // Keep the editor selection when toolbar buttons are pressed.
    let keep_focus = Callback::from(|e: MouseEvent| e.prevent_default());

    let render_item = |item: ToolbarItem| -> Html {
        let label = item.label();
        let content = match item.icon() {
            Some(icon) => html! { <i class={classes!("fas", icon)} aria-hidden="true"></i> },
            None => html! { <span class={classes!("text-xs", "font-bold")}>{ short_label(item) }</span> },
        };

        match item {
            ToolbarItem::Color => {
                let run_item = run_item.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    run_item.emit((ToolbarItem::Color, Some(input.value())));
                });
                html! {
                    <label class="editor-tool" title={label} aria-label={label}>
                        { content }
                        <input type="color" class="sr-only" {oninput} />
                    </label>
                }
            },
            ToolbarItem::Link => {
                let run_item = run_item.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    let url = window()
                        .and_then(|win| win.prompt_with_message(t::LINK_PROMPT).ok().flatten());
                    run_item.emit((ToolbarItem::Link, url));
                });
                html! {
                    <button type="button" class="editor-tool" title={label} aria-label={label}
                        onmousedown={keep_focus.clone()} {onclick}>
                        { content }
                    </button>
                }
            },
            ToolbarItem::Image => {
                let file_input_ref = file_input_ref.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                        input.click();
                    }
                });
                html! {
                    <button type="button" class="editor-tool" title={label} aria-label={label}
                        disabled={*uploading} onmousedown={keep_focus.clone()} {onclick}>
                        { content }
                    </button>
                }
            },
            _ => {
                let run_item = run_item.clone();
                let onclick = Callback::from(move |_: MouseEvent| run_item.emit((item, None)));
                html! {
                    <button type="button" class="editor-tool" title={label} aria-label={label}
                        onmousedown={keep_focus.clone()} {onclick}>
                        { content }
                    </button>
                }
            },
        }
    };

    html! {
        <div class={classes!("rich-text-editor", "w-full", "rounded-lg", "border", "border-[#ccc]", "bg-white")}>
            <div
                class={classes!("flex", "flex-wrap", "items-center", "gap-2", "border-b", "border-[#ccc]", "p-2")}
                role="toolbar"
            >
                { for props.config.toolbar.iter().map(|group| html! {
                    <span class={classes!("flex", "items-center", "gap-1", "pr-2")}>
                        { for group.iter().copied().map(&render_item) }
                    </span>
                }) }
                if *uploading {
                    <span class={classes!("text-xs", "text-[var(--muted)]")}>{ t::UPLOADING }</span>
                }
            </div>
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                class="hidden"
                onchange={on_file_change}
            />
            <div
                ref={editor_ref}
                id={props.id.clone()}
                class={classes!("min-h-[300px]", "p-4", "outline-none", "article-content")}
                contenteditable="true"
                role="textbox"
                aria-multiline="true"
                {oninput}
                {onkeyup}
                {onmouseup}
            />
        </div>
    }
}
