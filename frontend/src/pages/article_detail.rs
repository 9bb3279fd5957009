use dogcatdang_shared::{sanitize_article_html, Article, ArticleRoute, QueryKey};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_article,
    components::{article_body::ArticleBody, loading_spinner::LoadingSpinner},
    i18n::current::article_detail as t,
    query_context::use_query_generation,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub id: u64,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let article = use_state(|| None::<Article>);
    let loading = use_state(|| true);
    let generation = use_query_generation(QueryKey::ArticleDetail(props.id));

    {
        let article = article.clone();
        let loading = loading.clone();
        use_effect_with((props.id, generation), move |(id, _)| {
            let id = *id;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_article(id).await {
                    Ok(data) => article.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch article {}: {}", id, e).into(),
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
        // Stored content is injected as HTML, so it goes through the
        // sanitizer again regardless of what the server holds.
        let content = AttrValue::from(sanitize_article_html(&article.content));
        html! {
            <article>
                <h1 class={classes!("mb-2", "text-2xl", "font-bold", "break-words")}>{ &article.title }</h1>
                <p class={classes!("mb-6", "text-sm", "text-[var(--muted)]")}>
                    { &article.nickname }
                    { article.created_date.as_deref().map(|date| format!(" · {}", date)).unwrap_or_default() }
                </p>
                <ArticleBody html={content} />
                <div class={classes!("mt-8", "flex", "justify-end", "gap-2")}>
                    <Link<Route> to={Route::from(ArticleRoute::Edit { id: article.board_id })} classes={classes!("btn-secondary")}>
                        { t::EDIT }
                    </Link<Route>>
                    <Link<Route> to={Route::from(ArticleRoute::default_list())} classes={classes!("btn-secondary")}>
                        { t::TO_LIST }
                    </Link<Route>>
                </div>
            </article>
        }
    } else {
        html! { <p>{ t::NOT_FOUND }</p> }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-6")}>
            { body }
        </main>
    }
}
