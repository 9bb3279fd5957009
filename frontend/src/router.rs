use dogcatdang_shared::{AnimalRoute, ArticleRoute};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::header::Header,
    pages,
    query_context::QueryCacheProvider,
};

// Paths must stay identical to `AnimalRoute::path` / `ArticleRoute::path`.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/save-animals")]
    SaveAnimals,

    #[at("/save-animals/:id")]
    SaveAnimalDetail { id: u64 },

    #[at("/articles/new")]
    ArticleWrite,

    #[at("/articles/edit/:id")]
    ArticleEdit { id: u64 },

    #[at("/articles/detail/:id")]
    ArticleDetail { id: u64 },

    #[at("/articles/:page")]
    ArticleList { page: u32 },

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AnimalRoute> for Route {
    fn from(route: AnimalRoute) -> Self {
        match route {
            AnimalRoute::List => Route::SaveAnimals,
            AnimalRoute::Detail {
                id,
            } => Route::SaveAnimalDetail {
                id,
            },
        }
    }
}

impl From<ArticleRoute> for Route {
    fn from(route: ArticleRoute) -> Self {
        match route {
            ArticleRoute::List {
                page,
            } => Route::ArticleList {
                page,
            },
            ArticleRoute::Detail {
                id,
            } => Route::ArticleDetail {
                id,
            },
            ArticleRoute::Write => Route::ArticleWrite,
            ArticleRoute::Edit {
                id,
            } => Route::ArticleEdit {
                id,
            },
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::SaveAnimals => {
            html! { <pages::save_animals::SaveAnimalsPage /> }
        },
        Route::SaveAnimalDetail {
            id,
        } => {
            html! { <pages::save_animal_detail::SaveAnimalDetailPage id={id} /> }
        },
        Route::ArticleWrite => html! { <pages::article_write::ArticleWritePage /> },
        Route::ArticleEdit {
            id,
        } => {
            html! { <pages::article_write::ArticleEditPage id={id} /> }
        },
        Route::ArticleDetail {
            id,
        } => {
            html! { <pages::article_detail::ArticleDetailPage id={id} /> }
        },
        Route::ArticleList {
            page,
        } => {
            html! { <pages::article_list::ArticleListPage page={page} /> }
        },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <QueryCacheProvider>
                <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                    <Header />
                    <div class="flex-1 pt-[var(--space-sm)]">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </QueryCacheProvider>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use dogcatdang_shared::{AnimalRoute, ArticleRoute};
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn router_paths_match_route_tables() {
        let article_routes = [
            ArticleRoute::default_list(),
            ArticleRoute::List {
                page: 3,
            },
            ArticleRoute::Detail {
                id: 5,
            },
            ArticleRoute::Write,
            ArticleRoute::Edit {
                id: 9,
            },
        ];
        for route in article_routes {
            assert_eq!(Route::from(route).to_path(), route.path());
        }

        for route in [AnimalRoute::List, AnimalRoute::Detail {
            id: 42,
        }] {
            assert_eq!(Route::from(route).to_path(), route.path());
        }
    }

    #[test]
    fn article_paths_resolve_to_their_routes() {
        assert_eq!(Route::recognize("/articles/new"), Some(Route::ArticleWrite));
        assert_eq!(
            Route::recognize("/articles/detail/5"),
            Some(Route::ArticleDetail {
                id: 5
            })
        );
        assert_eq!(
            Route::recognize("/articles/1"),
            Some(Route::ArticleList {
                page: 1
            })
        );
    }
}
