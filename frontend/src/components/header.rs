use dogcatdang_shared::ArticleRoute;
use yew::prelude::*;
use yew_router::prelude::{use_route, Link};

use crate::{i18n::current::header as t, router::Route};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let in_articles = matches!(
        route,
        Some(
            Route::ArticleList { .. }
                | Route::ArticleDetail { .. }
                | Route::ArticleWrite
                | Route::ArticleEdit { .. }
        )
    );

    let link_classes = |active: bool| {
        let mut classes = classes!(
            "px-3",
            "py-2",
            "rounded-lg",
            "text-sm",
            "font-semibold",
            "transition-colors",
            "duration-150",
            "hover:text-[var(--primary)]"
        );
        if active {
            classes.push("text-[var(--primary)]");
        } else {
            classes.push("text-[var(--text)]");
        }
        classes
    };

    html! {
        <header class={classes!(
            "sticky",
            "top-0",
            "z-30",
            "border-b",
            "border-[var(--border)]",
            "bg-[var(--surface)]"
        )}>
            <nav class={classes!("mx-auto", "flex", "max-w-5xl", "items-center", "gap-2", "px-4", "h-14")}>
                <Link<Route> to={Route::Home} classes={classes!("mr-4", "text-lg", "font-bold", "text-[var(--text)]")}>
                    { t::BRAND }
                </Link<Route>>
                <Link<Route> to={Route::SaveAnimals} classes={link_classes(!in_articles)}>
                    { t::ANIMALS }
                </Link<Route>>
                <Link<Route> to={Route::from(ArticleRoute::default_list())} classes={link_classes(in_articles)}>
                    { t::ARTICLES }
                </Link<Route>>
            </nav>
        </header>
    }
}
