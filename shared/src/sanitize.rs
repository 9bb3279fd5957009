//! HTML sanitization applied to article bodies before they leave the browser.

use std::{borrow::Cow, collections::HashSet};

use ammonia::Builder;
use tracing::debug;

/// Tags the rich-text editor can emit on top of ammonia's defaults.
const EDITOR_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "p", "br", "span", "u", "s", "strike"];

/// Attributes the editor uses on any tag for alignment, indentation and
/// inline formatting.
const EDITOR_ATTRIBUTES: &[&str] = &["class", "style"];

/// Inline style properties that survive sanitization.
const STYLE_PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "text-align",
    "display",
    "max-width",
    "height",
];

/// Schemes of images embedded by the editor itself: pasted or legacy
/// base64 images, and local object URLs from the mock upload.
const EMBEDDED_IMAGE_SCHEMES: &[&str] = &["data", "blob"];

fn embedded_scheme(value: &str) -> Option<&'static str> {
    let (scheme, _) = value.trim_start().split_once(':')?;
    EMBEDDED_IMAGE_SCHEMES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(scheme))
}

/// Embedded schemes are allowed globally so ammonia's URL check keeps them;
/// this filter then restricts them to `img[src]`, and `data:` further to
/// `image/*` payloads.
fn embedded_image_filter<'u>(
    element: &str,
    attribute: &str,
    value: &'u str,
) -> Option<Cow<'u, str>> {
    match embedded_scheme(value) {
        None => Some(Cow::Borrowed(value)),
        Some(_) if element != "img" || attribute != "src" => None,
        Some("data") => {
            let payload = value.trim_start()["data:".len()..].trim_start();
            payload
                .get(.."image/".len())
                .filter(|prefix| prefix.eq_ignore_ascii_case("image/"))
                .map(|_| Cow::Borrowed(value))
        },
        Some(_) => Some(Cow::Borrowed(value)),
    }
}

fn article_sanitizer() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .add_tags(EDITOR_TAGS)
        .add_generic_attributes(EDITOR_ATTRIBUTES)
        .filter_style_properties(STYLE_PROPERTIES.iter().copied().collect::<HashSet<_>>())
        .add_url_schemes(EMBEDDED_IMAGE_SCHEMES)
        .attribute_filter(embedded_image_filter);
    builder
}

/// Strip executable markup (scripts, event handlers, `javascript:` URLs)
/// from editor HTML while keeping its structural and formatting markup.
pub fn sanitize_article_html(dirty: &str) -> String {
    if dirty.trim().is_empty() {
        return String::new();
    }

    let clean = article_sanitizer().clean(dirty).to_string();
    if clean.len() != dirty.len() {
        debug!(
            before = dirty.len(),
            after = clean.len(),
            "sanitizer removed markup from article body"
        );
    }
    clean
}

#[cfg(test)]
mod tests {
    use super::sanitize_article_html;

    #[test]
    fn removes_script_blocks() {
        let clean = sanitize_article_html("<p>hi</p><script>alert('x')</script>");
        assert!(!clean.contains("<script"));
        assert!(!clean.contains("alert"));
        assert!(clean.contains("<p>hi</p>"));
    }

    #[test]
    fn removes_event_handlers_and_script_urls() {
        let clean = sanitize_article_html(
            r#"<img src="https://img.example.com/a.png" onerror="alert(1)"><a href="javascript:alert(1)">x</a>"#,
        );
        assert!(!clean.contains("onerror"));
        assert!(!clean.contains("javascript:"));
        assert!(clean.contains(r#"src="https://img.example.com/a.png""#));
    }

    #[test]
    fn keeps_formatting_markup() {
        let dirty = "<h2>제목</h2><p><strong>굵게</strong> <em>기울임</em> <u>밑줄</u> <s>취소</s></p>\
                     <ol><li>하나</li></ol><ul><li>둘</li></ul><blockquote>인용</blockquote>";
        let clean = sanitize_article_html(dirty);
        for tag in ["<h2>", "<strong>", "<em>", "<u>", "<s>", "<ol>", "<ul>", "<li>", "<blockquote>"] {
            assert!(clean.contains(tag), "missing {tag} in {clean}");
        }
    }

    #[test]
    fn keeps_editor_classes_and_allowed_styles() {
        let clean = sanitize_article_html(
            r#"<p class="ql-align-center"><span style="color: red; position: fixed">빨강</span></p>"#,
        );
        assert!(clean.contains("ql-align-center"));
        assert!(clean.contains("color"));
        assert!(!clean.contains("position"));
    }

    #[test]
    fn keeps_block_image_style() {
        let clean = sanitize_article_html(
            r#"<img src="https://img.example.com/a.png" style="display: block; max-width: 100%; height: auto;">"#,
        );
        assert!(clean.contains("display"));
        assert!(clean.contains("max-width"));
    }

    #[test]
    fn keeps_embedded_images() {
        let clean = sanitize_article_html(
            r#"<img src="data:image/png;base64,iVBORw0KGgo=" style="display: block; max-width: 100%; height: auto;">"#,
        );
        assert!(clean.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#), "{clean}");
        assert!(clean.contains("max-width"));

        let clean = sanitize_article_html(r#"<img src="blob:http://localhost:8080/5f1c-42">"#);
        assert!(clean.contains(r#"src="blob:http://localhost:8080/5f1c-42""#), "{clean}");
    }

    #[test]
    fn embedded_urls_are_limited_to_image_sources() {
        let clean = sanitize_article_html(
            r#"<a href="data:text/html,<script>alert(1)</script>">x</a><a href="javascript:alert(1)">y</a>"#,
        );
        assert!(!clean.contains("data:"), "{clean}");
        assert!(!clean.contains("javascript:"), "{clean}");
        assert!(clean.contains(">x</a>"));

        let clean = sanitize_article_html(r#"<img src="data:text/html;base64,PHNjcmlwdD4=">"#);
        assert!(!clean.contains("data:"), "{clean}");
    }

    #[test]
    fn blank_input_yields_empty_output() {
        assert_eq!(sanitize_article_html("   "), "");
    }
}
