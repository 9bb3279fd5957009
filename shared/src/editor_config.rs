//! Construction-time configuration of the rich-text widget.
//!
//! The widget receives an [`EditorConfig`] and nothing else: which toolbar
//! buttons to show, which formats are allowed and how inserted content is
//! rendered. Swapping the widget only requires honoring this value.

/// Text alignment offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align left.
    Left,
    /// Center.
    Center,
    /// Align right.
    Right,
    /// Justify.
    Justify,
}

/// One toolbar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarItem {
    /// Heading level 1 to 4, or `None` for normal text.
    Header(Option<u8>),
    /// Text color.
    Color,
    /// Paragraph alignment.
    Align(Alignment),
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Underline.
    Underline,
    /// Strikethrough.
    Strike,
    /// Hyperlink.
    Link,
    /// Image upload and insertion.
    Image,
}

/// A browser editing command with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    /// Command name understood by `document.execCommand`.
    pub name: &'static str,
    /// Command argument, if any.
    pub value: Option<String>,
}

impl EditorCommand {
    fn bare(name: &'static str) -> Self {
        Self {
            name,
            value: None,
        }
    }

    fn with(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }
}

impl ToolbarItem {
    /// Whether the control asks the user for a value (color, URL) first.
    pub fn needs_value(&self) -> bool {
        matches!(self, ToolbarItem::Color | ToolbarItem::Link)
    }

    /// Editing command for this control. `value` is the user-provided
    /// argument for controls that need one.
    ///
    /// Returns `None` for [`ToolbarItem::Image`], which the widget handles
    /// through an upload, and when a required value is missing or blank.
    pub fn command(&self, value: Option<&str>) -> Option<EditorCommand> {
        let value = value.map(str::trim).filter(|v| !v.is_empty());
        match self {
            ToolbarItem::Header(Some(level @ 1..=4)) => {
                Some(EditorCommand::with("formatBlock", format!("h{level}")))
            },
            ToolbarItem::Header(_) => Some(EditorCommand::with("formatBlock", "p")),
            ToolbarItem::Color => value.map(|color| EditorCommand::with("foreColor", color)),
            ToolbarItem::Align(alignment) => Some(EditorCommand::bare(match alignment {
                Alignment::Left => "justifyLeft",
                Alignment::Center => "justifyCenter",
                Alignment::Right => "justifyRight",
                Alignment::Justify => "justifyFull",
            })),
            ToolbarItem::Bold => Some(EditorCommand::bare("bold")),
            ToolbarItem::Italic => Some(EditorCommand::bare("italic")),
            ToolbarItem::Underline => Some(EditorCommand::bare("underline")),
            ToolbarItem::Strike => Some(EditorCommand::bare("strikeThrough")),
            ToolbarItem::Link => value.map(|url| EditorCommand::with("createLink", url)),
            ToolbarItem::Image => None,
        }
    }

    /// Accessible label.
    pub fn label(&self) -> &'static str {
        match self {
            ToolbarItem::Header(Some(1)) => "제목 1",
            ToolbarItem::Header(Some(2)) => "제목 2",
            ToolbarItem::Header(Some(3)) => "제목 3",
            ToolbarItem::Header(Some(4)) => "제목 4",
            ToolbarItem::Header(_) => "본문",
            ToolbarItem::Color => "글자 색",
            ToolbarItem::Align(Alignment::Left) => "왼쪽 정렬",
            ToolbarItem::Align(Alignment::Center) => "가운데 정렬",
            ToolbarItem::Align(Alignment::Right) => "오른쪽 정렬",
            ToolbarItem::Align(Alignment::Justify) => "양쪽 정렬",
            ToolbarItem::Bold => "굵게",
            ToolbarItem::Italic => "기울임",
            ToolbarItem::Underline => "밑줄",
            ToolbarItem::Strike => "취소선",
            ToolbarItem::Link => "링크",
            ToolbarItem::Image => "이미지",
        }
    }

    /// Font Awesome icon class, `None` for text-labelled controls.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            ToolbarItem::Header(_) => None,
            ToolbarItem::Color => Some("fa-palette"),
            ToolbarItem::Align(Alignment::Left) => Some("fa-align-left"),
            ToolbarItem::Align(Alignment::Center) => Some("fa-align-center"),
            ToolbarItem::Align(Alignment::Right) => Some("fa-align-right"),
            ToolbarItem::Align(Alignment::Justify) => Some("fa-align-justify"),
            ToolbarItem::Bold => Some("fa-bold"),
            ToolbarItem::Italic => Some("fa-italic"),
            ToolbarItem::Underline => Some("fa-underline"),
            ToolbarItem::Strike => Some("fa-strikethrough"),
            ToolbarItem::Link => Some("fa-link"),
            ToolbarItem::Image => Some("fa-image"),
        }
    }
}

/// Content formats the widget may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Headings.
    Header,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Underline.
    Underline,
    /// Strikethrough.
    Strike,
    /// Block quotes.
    Blockquote,
    /// Ordered lists.
    List,
    /// Bulleted lists.
    Bullet,
    /// Indentation.
    Indent,
    /// Hyperlinks.
    Link,
    /// Images.
    Image,
    /// Alignment.
    Align,
    /// Text color.
    Color,
    /// Background color.
    Background,
}

/// Named rule applied when the widget renders inserted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderRule {
    /// Render images as full-width blocks with intrinsic height instead of
    /// inline elements.
    BlockImage,
}

impl RenderRule {
    fn image_style(&self) -> Option<&'static str> {
        match self {
            RenderRule::BlockImage => Some("display: block; max-width: 100%; height: auto;"),
        }
    }
}

/// Toolbar, formats and render rules handed to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Toolbar controls, grouped visually.
    pub toolbar: Vec<Vec<ToolbarItem>>,
    /// Formats the widget may produce.
    pub formats: Vec<Format>,
    /// Rules applied to inserted content.
    pub render_rules: Vec<RenderRule>,
}

impl EditorConfig {
    /// Configuration of the article editor.
    pub fn article() -> Self {
        Self {
            toolbar: vec![
                vec![
                    ToolbarItem::Header(Some(1)),
                    ToolbarItem::Header(Some(2)),
                    ToolbarItem::Header(Some(3)),
                    ToolbarItem::Header(Some(4)),
                    ToolbarItem::Header(None),
                ],
                vec![
                    ToolbarItem::Color,
                    ToolbarItem::Align(Alignment::Left),
                    ToolbarItem::Align(Alignment::Center),
                    ToolbarItem::Align(Alignment::Right),
                    ToolbarItem::Align(Alignment::Justify),
                ],
                vec![
                    ToolbarItem::Bold,
                    ToolbarItem::Italic,
                    ToolbarItem::Underline,
                    ToolbarItem::Strike,
                ],
                vec![ToolbarItem::Link, ToolbarItem::Image],
            ],
            formats: vec![
                Format::Header,
                Format::Bold,
                Format::Italic,
                Format::Underline,
                Format::Strike,
                Format::Blockquote,
                Format::List,
                Format::Bullet,
                Format::Indent,
                Format::Link,
                Format::Image,
                Format::Align,
                Format::Color,
                Format::Background,
            ],
            render_rules: vec![RenderRule::BlockImage],
        }
    }

    /// Whether `format` is enabled.
    pub fn allows(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    /// Markup for an inserted image with every render rule applied.
    pub fn render_image(&self, url: &str, alt: &str) -> String {
        let style = self
            .render_rules
            .iter()
            .filter_map(RenderRule::image_style)
            .collect::<Vec<_>>()
            .join(" ");

        let mut markup = format!(r#"<img src="{}" alt="{}""#, escape_attr(url), escape_attr(alt));
        if !style.is_empty() {
            markup.push_str(&format!(r#" style="{}""#, escape_attr(&style)));
        }
        markup.push('>');
        markup
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::article()
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_toolbar_has_expected_controls() {
        let config = EditorConfig::article();
        let items: Vec<ToolbarItem> = config.toolbar.iter().flatten().copied().collect();
        for level in 1..=4 {
            assert!(items.contains(&ToolbarItem::Header(Some(level))));
        }
        for item in [
            ToolbarItem::Color,
            ToolbarItem::Bold,
            ToolbarItem::Italic,
            ToolbarItem::Underline,
            ToolbarItem::Strike,
            ToolbarItem::Link,
            ToolbarItem::Image,
        ] {
            assert!(items.contains(&item), "missing {item:?}");
        }
        assert!(config.allows(Format::Image));
        assert!(config.render_rules.contains(&RenderRule::BlockImage));
    }

    #[test]
    fn commands_map_to_browser_names() {
        assert_eq!(
            ToolbarItem::Header(Some(2)).command(None),
            Some(EditorCommand::with("formatBlock", "h2"))
        );
        assert_eq!(
            ToolbarItem::Header(None).command(None),
            Some(EditorCommand::with("formatBlock", "p"))
        );
        assert_eq!(ToolbarItem::Strike.command(None), Some(EditorCommand::bare("strikeThrough")));
        assert_eq!(
            ToolbarItem::Align(Alignment::Center).command(None),
            Some(EditorCommand::bare("justifyCenter"))
        );
        assert_eq!(ToolbarItem::Image.command(None), None);
    }

    #[test]
    fn value_commands_require_a_value() {
        assert!(ToolbarItem::Link.needs_value());
        assert_eq!(ToolbarItem::Link.command(Some("  ")), None);
        assert_eq!(
            ToolbarItem::Link.command(Some("https://example.com")),
            Some(EditorCommand::with("createLink", "https://example.com"))
        );
        assert_eq!(
            ToolbarItem::Color.command(Some("#ff8331")),
            Some(EditorCommand::with("foreColor", "#ff8331"))
        );
    }

    #[test]
    fn block_image_rule_styles_inserted_images() {
        let markup = EditorConfig::article().render_image("https://img.example.com/a.png", "강아지");
        assert_eq!(
            markup,
            r#"<img src="https://img.example.com/a.png" alt="강아지" style="display: block; max-width: 100%; height: auto;">"#
        );
    }

    #[test]
    fn images_render_inline_without_rules() {
        let config = EditorConfig {
            render_rules: Vec::new(),
            ..EditorConfig::article()
        };
        let markup = config.render_image(r#"https://x.test/a.png?q="1""#, "");
        assert_eq!(markup, r#"<img src="https://x.test/a.png?q=&quot;1&quot;" alt="">"#);
    }
}
