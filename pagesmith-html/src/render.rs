//! Block-to-HTML rendering. Pure string production: every block kind has a
//! match arm, unknown kinds render a visible placeholder, and nothing in
//! here can fail.

use serde_json::{Map, Value};

use crate::block::{Alignment, Block, Button, ButtonVariant, Footer, Header, Hero, Image, Text};
use crate::style::{inline_css, utility_classes, StyleMode};

// Fixed visual treatments for button-like elements, per variant.
const PRIMARY_STYLE: &str = "background: #007bff; color: #fff";
const SECONDARY_STYLE: &str = "background: #6c757d; color: #fff";
const OUTLINE_STYLE: &str = "background: transparent; color: #007bff; border: 2px solid #007bff";
const PRIMARY_CLASSES: &str = "bg-primary text-white";
const SECONDARY_CLASSES: &str = "bg-secondary text-white";
const OUTLINE_CLASSES: &str = "bg-transparent text-primary border-2 border-primary";

/// Escapes text for embedding in element bodies and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Accumulates the `class`/`style` attributes of a rendered element.
struct Attrs {
    classes: Vec<String>,
    styles: Vec<String>,
}

impl Attrs {
    fn new(base: &str) -> Self {
        Self {
            classes: vec![base.to_string()],
            styles: Vec::new(),
        }
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    fn style(mut self, declaration: impl Into<String>) -> Self {
        let declaration = declaration.into();
        if !declaration.is_empty() {
            self.styles.push(declaration);
        }
        self
    }

    /// Attaches the block's style mapping in the configured mode.
    fn block_styles(self, styles: &Map<String, Value>, mode: StyleMode) -> Self {
        match mode {
            StyleMode::Inline => self.style(inline_css(styles)),
            StyleMode::Utility => self.class(utility_classes(styles)),
        }
    }

    fn render(self) -> String {
        let mut out = format!(" class=\"{}\"", self.classes.join(" "));
        if !self.styles.is_empty() {
            out.push_str(&format!(" style=\"{}\"", self.styles.join("; ")));
        }
        out
    }
}

/// Renders one block to an HTML fragment. `styles` is the block's raw style
/// mapping; how it attaches depends on `mode`.
pub fn render_block(block: &Block, styles: &Map<String, Value>, mode: StyleMode) -> String {
    match block {
        Block::Hero(hero) => render_hero(hero, styles, mode),
        Block::Text(text) => render_text(text, styles, mode),
        Block::Image(image) => render_image(image, styles, mode),
        Block::Button(button) => render_button(button, styles, mode),
        Block::Header(header) => render_header(header, styles, mode),
        Block::Footer(footer) => render_footer(footer, styles, mode),
        Block::Unknown(kind) => render_unknown(kind, styles, mode),
    }
}

fn render_hero(hero: &Hero, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = Attrs::new("hero").block_styles(styles, mode).render();
    let mut out = format!("<section{}>\n", attrs);
    if !hero.image.is_empty() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Hero\" class=\"hero-image\">\n",
            escape_html(&hero.image)
        ));
    }
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&hero.title)));
    out.push_str(&format!(
        "<p class=\"subtitle\">{}</p>\n",
        escape_html(&hero.subtitle)
    ));
    if !hero.cta_text.is_empty() {
        let cta_attrs = variant_attrs(Attrs::new("cta"), ButtonVariant::Primary, mode).render();
        out.push_str(&format!(
            "<a href=\"{}\"{}>{}</a>\n",
            escape_html(&hero.cta_link),
            cta_attrs,
            escape_html(&hero.cta_text)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn render_text(text: &Text, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = match mode {
        StyleMode::Inline => Attrs::new("text-section")
            .style(format!("text-align: {}", text.alignment.as_str()))
            .block_styles(styles, mode),
        StyleMode::Utility => Attrs::new("text-section")
            .class(alignment_class(text.alignment))
            .block_styles(styles, mode),
    }
    .render();
    // The text body is pre-formatted markup from the page editor and is the
    // one deliberate raw embed; everything else on this page is escaped.
    format!(
        "<section{}>\n<div class=\"text-inner\">{}</div>\n</section>\n",
        attrs, text.text
    )
}

fn alignment_class(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "text-left",
        Alignment::Center => "text-center",
        Alignment::Right => "text-right",
    }
}

fn render_image(image: &Image, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = Attrs::new("image-section").block_styles(styles, mode).render();
    let mut out = format!(
        "<section{}>\n<img src=\"{}\" alt=\"{}\">\n",
        attrs,
        escape_html(&image.src),
        escape_html(&image.alt)
    );
    if !image.caption.is_empty() {
        out.push_str(&format!(
            "<p class=\"caption\">{}</p>\n",
            escape_html(&image.caption)
        ));
    }
    out.push_str("</section>\n");
    out
}

fn render_button(button: &Button, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = Attrs::new("button-section")
        .block_styles(styles, mode)
        .render();
    let anchor = variant_attrs(Attrs::new("btn"), button.variant, mode).render();
    format!(
        "<section{}>\n<a href=\"{}\"{}>{}</a>\n</section>\n",
        attrs,
        escape_html(&button.link),
        anchor,
        escape_html(&button.text)
    )
}

fn variant_attrs(attrs: Attrs, variant: ButtonVariant, mode: StyleMode) -> Attrs {
    match mode {
        StyleMode::Inline => attrs.style(match variant {
            ButtonVariant::Primary => PRIMARY_STYLE,
            ButtonVariant::Secondary => SECONDARY_STYLE,
            ButtonVariant::Outline => OUTLINE_STYLE,
        }),
        StyleMode::Utility => attrs.class(match variant {
            ButtonVariant::Primary => PRIMARY_CLASSES,
            ButtonVariant::Secondary => SECONDARY_CLASSES,
            ButtonVariant::Outline => OUTLINE_CLASSES,
        }),
    }
}

fn render_header(header: &Header, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = Attrs::new("site-header").block_styles(styles, mode).render();
    let mut out = format!("<header{}>\n<div class=\"brand\">\n", attrs);
    if !header.logo.is_empty() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Logo\" class=\"logo\">\n",
            escape_html(&header.logo)
        ));
    }
    out.push_str(&format!("<h1>{}</h1>\n</div>\n", escape_html(&header.title)));
    if !header.menu_items.is_empty() {
        out.push_str("<nav>");
        for item in &header.menu_items {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&item.link),
                escape_html(&item.text)
            ));
        }
        out.push_str("</nav>\n");
    }
    out.push_str("</header>\n");
    out
}

fn render_footer(footer: &Footer, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let attrs = Attrs::new("site-footer").block_styles(styles, mode).render();
    let mut out = format!("<footer{}>\n<p>{}</p>\n", attrs, escape_html(&footer.text));
    if !footer.links.is_empty() {
        out.push_str("<div class=\"footer-links\">");
        for link in &footer.links {
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&link.url),
                escape_html(&link.text)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</footer>\n");
    out
}

fn render_unknown(kind: &str, styles: &Map<String, Value>, mode: StyleMode) -> String {
    let escaped = escape_html(kind);
    let attrs = Attrs::new(&format!("component-{}", escaped))
        .block_styles(styles, mode)
        .render();
    format!(
        "<div{}>Component not implemented: {}</div>\n",
        attrs, escaped
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn render(kind: &str, content: Value, styles: Value, mode: StyleMode) -> String {
        let content = obj(content);
        let styles = obj(styles);
        render_block(&Block::from_parts(kind, &content), &styles, mode)
    }

    #[test]
    fn hero_renders_all_fields() {
        let html = render(
            "hero",
            json!({
                "title": "Test Hero",
                "subtitle": "Test subtitle",
                "image": "https://example.com/image.jpg",
                "cta_text": "Click me",
                "cta_link": "/test"
            }),
            json!({"backgroundColor": "#000000"}),
            StyleMode::Inline,
        );
        assert!(html.contains("Test Hero"));
        assert!(html.contains("Test subtitle"));
        assert!(html.contains("https://example.com/image.jpg"));
        assert!(html.contains("href=\"/test\""));
        assert!(html.contains("background-color: #000000"));
    }

    #[test]
    fn hero_omits_optional_parts() {
        let html = render("hero", json!({"title": "Just Title"}), json!({}), StyleMode::Inline);
        assert!(html.contains("Just Title"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("href"));
    }

    #[test]
    fn hero_title_is_escaped() {
        let html = render(
            "hero",
            json!({"title": "<script>alert('xss')</script>"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn text_keeps_markup_and_aligns() {
        let html = render(
            "text",
            json!({"text": "<p>Test content</p>", "alignment": "center"}),
            json!({"color": "red"}),
            StyleMode::Inline,
        );
        assert!(html.contains("<p>Test content</p>"));
        assert!(html.contains("text-align: center"));
        assert!(html.contains("color: red"));
    }

    #[test]
    fn image_caption_is_optional() {
        let with = render(
            "image",
            json!({"src": "/a.jpg", "alt": "A", "caption": "Cap"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(with.contains("class=\"caption\""));
        let without = render("image", json!({"src": "/a.jpg"}), json!({}), StyleMode::Inline);
        assert!(!without.contains("class=\"caption\""));
    }

    #[test]
    fn button_variants_have_fixed_treatments() {
        let primary = render("button", json!({"text": "Go"}), json!({}), StyleMode::Inline);
        assert!(primary.contains("#007bff"));
        let secondary = render(
            "button",
            json!({"text": "Go", "variant": "secondary"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(secondary.contains("#6c757d"));
        let outline = render(
            "button",
            json!({"text": "Go", "variant": "outline"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(outline.contains("transparent"));
        let unknown = render(
            "button",
            json!({"text": "Go", "variant": "ghost"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(unknown.contains("#007bff"));
    }

    #[test]
    fn button_defaults() {
        let html = render("button", json!({}), json!({}), StyleMode::Inline);
        assert!(html.contains("Click me"));
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn header_renders_menu_in_order() {
        let html = render(
            "header",
            json!({
                "title": "Test Site",
                "logo": "https://example.com/logo.png",
                "menu_items": [
                    {"text": "Home", "link": "/"},
                    {"text": "About", "link": "/about"}
                ]
            }),
            json!({}),
            StyleMode::Inline,
        );
        assert!(html.contains("Test Site"));
        assert!(html.contains("logo.png"));
        let home = html.find("Home").unwrap();
        let about = html.find("About").unwrap();
        assert!(home < about);
    }

    #[test]
    fn footer_links_render() {
        let html = render(
            "footer",
            json!({
                "text": "© 2024 Test Company",
                "links": [
                    {"text": "Privacy", "url": "/privacy"},
                    {"text": "Terms", "url": "/terms"}
                ]
            }),
            json!({}),
            StyleMode::Inline,
        );
        assert!(html.contains("© 2024 Test Company"));
        assert!(html.contains("href=\"/privacy\""));
        assert!(html.contains("Terms"));
    }

    #[test]
    fn unknown_kind_renders_placeholder() {
        let html = render("carousel", json!({}), json!({}), StyleMode::Inline);
        assert!(html.contains("Component not implemented: carousel"));
        assert!(html.contains("component-carousel"));
    }

    #[test]
    fn utility_mode_emits_classes_not_styles() {
        let html = render(
            "button",
            json!({"text": "Go"}),
            json!({"textAlign": "center"}),
            StyleMode::Utility,
        );
        assert!(html.contains("text-center"));
        assert!(html.contains("bg-primary"));
        assert!(!html.contains("style=\""));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = render(
            "image",
            json!({"src": "x\" onerror=\"alert(1)", "alt": "a"}),
            json!({}),
            StyleMode::Inline,
        );
        assert!(!html.contains("src=\"x\" onerror"));
        assert!(html.contains("&quot;"));
    }
}
