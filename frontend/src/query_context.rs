use std::rc::Rc;

use dogcatdang_shared::{QueryCache, QueryKey};
use yew::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCacheState {
    pub cache: QueryCache,
}

pub enum QueryCacheAction {
    Invalidate(QueryKey),
}

impl Reducible for QueryCacheState {
    type Action = QueryCacheAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QueryCacheAction::Invalidate(key) => {
                next.cache.invalidate(key);
            },
        }
        Rc::new(next)
    }
}

pub type QueryCacheContext = UseReducerHandle<QueryCacheState>;

#[derive(Properties, PartialEq)]
pub struct QueryCacheProviderProps {
    pub children: Html,
}

#[function_component(QueryCacheProvider)]
pub fn query_cache_provider(props: &QueryCacheProviderProps) -> Html {
    let state = use_reducer(QueryCacheState::default);
    html! {
        <ContextProvider<QueryCacheContext> context={state}>
            {props.children.clone()}
        </ContextProvider<QueryCacheContext>>
    }
}

/// Generation of `key`; put it in a fetch effect's dependencies to re-fetch
/// after invalidation.
#[hook]
pub fn use_query_generation(key: QueryKey) -> u64 {
    use_context::<QueryCacheContext>()
        .map(|ctx| ctx.cache.generation(key))
        .unwrap_or(0)
}

/// Callback that marks a cached resource stale.
#[hook]
pub fn use_invalidate_query() -> Callback<QueryKey> {
    let ctx = use_context::<QueryCacheContext>();
    Callback::from(move |key: QueryKey| {
        if let Some(ctx) = ctx.as_ref() {
            ctx.dispatch(QueryCacheAction::Invalidate(key));
        }
    })
}
