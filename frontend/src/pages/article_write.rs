use dogcatdang_shared::Article;
use yew::prelude::*;

use crate::{
    api::fetch_article,
    components::{article_editor::ArticleEditor, loading_spinner::LoadingSpinner},
    i18n::current::{article_detail as detail_text, article_write as t},
};

#[function_component(ArticleWritePage)]
pub fn article_write_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-6")}>
            <h2 class={classes!("text-xl", "font-bold")}>{ t::WRITE_TITLE }</h2>
            <ArticleEditor />
        </main>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleEditProps {
    pub id: u64,
}

/// Loads the article, then mounts the editor pre-filled with it.
#[function_component(ArticleEditPage)]
pub fn article_edit_page(props: &ArticleEditProps) -> Html {
    let article = use_state(|| None::<Article>);
    let loading = use_state(|| true);

    {
        let article = article.clone();
        let loading = loading.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_article(id).await {
                    Ok(data) => article.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to load article {} for editing: {}", id, e).into(),
                        );
                        article.set(None);
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(article) = (*article).clone() {
        html! {
            <ArticleEditor
                key={article.board_id}
                title={Some(article.title)}
                content={Some(article.content)}
                board_id={Some(article.board_id)}
            />
        }
    } else {
        html! { <p>{ detail_text::NOT_FOUND }</p> }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-6")}>
            <h2 class={classes!("text-xl", "font-bold")}>{ t::EDIT_TITLE }</h2>
            { body }
        </main>
    }
}
