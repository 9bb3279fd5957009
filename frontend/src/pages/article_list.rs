use dogcatdang_shared::{ArticleListPage as ArticleListing, ArticleRoute, QueryKey};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::fetch_articles,
    components::loading_spinner::LoadingSpinner,
    i18n::{current::article_list as t, fill_one},
    query_context::use_query_generation,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleListProps {
    pub page: u32,
}

#[function_component(ArticleListPage)]
pub fn article_list_page(props: &ArticleListProps) -> Html {
    let page = props.page.max(1);
    let listing = use_state(ArticleListing::default);
    let loading = use_state(|| true);
    // Re-fetch whenever a submission invalidates the listing.
    let generation = use_query_generation(QueryKey::ArticleList);

    {
        let listing = listing.clone();
        let loading = loading.clone();
        use_effect_with((page, generation), move |(page, _)| {
            let page = *page;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_articles(page).await {
                    Ok(data) => listing.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch articles: {}", e).into(),
                        );
                        listing.set(ArticleListing::default());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let total_pages = listing.total_pages.max(1);

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if listing.articles.is_empty() {
        html! { <p>{ t::EMPTY }</p> }
    } else {
        html! {
            <ul class={classes!("divide-y", "divide-[var(--border)]")}>
                { for listing.articles.iter().map(|item| {
                    let detail = Route::from(ArticleRoute::Detail { id: item.board_id });
                    html! {
                        <li key={item.board_id} class={classes!("flex", "items-center", "justify-between", "py-3")}>
                            <Link<Route> to={detail} classes={classes!("font-semibold", "hover:text-[var(--primary)]")}>
                                { &item.title }
                            </Link<Route>>
                            <span class={classes!("text-xs", "text-[var(--muted)]")}>
                                { &item.nickname }
                                { item.created_date.as_deref().map(|date| format!(" · {}", date)).unwrap_or_default() }
                            </span>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-6")}>
            <div class={classes!("mb-4", "flex", "items-center", "justify-between")}>
                <h2 class={classes!("text-xl", "font-bold")}>{ t::TITLE }</h2>
                <Link<Route> to={Route::from(ArticleRoute::Write)} classes={classes!("btn-primary")}>
                    { t::WRITE }
                </Link<Route>>
            </div>
            { body }
            <nav class={classes!("mt-6", "flex", "items-center", "justify-center", "gap-4", "text-sm")}>
                if page > 1 {
                    <Link<Route> to={Route::from(ArticleRoute::List { page: page - 1 })}>{ t::PREV }</Link<Route>>
                }
                <span>{ fill_one(t::PAGE_TEMPLATE, page) }</span>
                if page < total_pages {
                    <Link<Route> to={Route::from(ArticleRoute::List { page: page + 1 })}>{ t::NEXT }</Link<Route>>
                }
            </nav>
        </main>
    }
}
