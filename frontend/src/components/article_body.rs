use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleBodyProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render article HTML into a host element that Yew does not diff.
///
/// The markup is injected as-is; callers decide whether it has been
/// sanitized.
#[function_component(ArticleBody)]
pub fn article_body(props: &ArticleBodyProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(next_html.as_str());
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={classes!("article-content", props.class.clone())} />
    }
}
