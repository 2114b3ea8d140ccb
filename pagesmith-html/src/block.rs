//! Typed view over a component's free-form content mapping.
//!
//! The storage layer keeps block content as JSON; rendering dispatches over
//! a closed enum instead of string comparisons, with one variant per known
//! block kind and an explicit `Unknown` catch-all. Adding a block kind means
//! adding a variant here and a match arm in the renderer, and the compiler
//! points at every site that needs updating.

use serde_json::{Map, Value};

/// Root block type - one variant per supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(Hero),
    Text(Text),
    Image(Image),
    Button(Button),
    Header(Header),
    Footer(Footer),
    /// Any kind the renderer does not implement. Carries the original kind
    /// string so the placeholder can name it.
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub text: String,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Unrecognized values fall back to left alignment.
    pub fn parse(value: &str) -> Self {
        match value {
            "center" => Alignment::Center,
            "right" => Alignment::Right,
            _ => Alignment::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub text: String,
    pub link: String,
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    /// Unrecognized variants fall back to primary.
    pub fn parse(value: &str) -> Self {
        match value {
            "secondary" => ButtonVariant::Secondary,
            "outline" => ButtonVariant::Outline,
            _ => ButtonVariant::Primary,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub title: String,
    pub logo: String,
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItem {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer {
    pub text: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

impl Block {
    /// Builds the typed block for `kind` from a content mapping.
    ///
    /// Extraction is lenient: absent or mistyped fields take their defaults
    /// rather than failing, so a half-filled block still renders.
    pub fn from_parts(kind: &str, content: &Map<String, Value>) -> Block {
        match kind {
            "hero" => Block::Hero(Hero {
                title: str_field(content, "title", ""),
                subtitle: str_field(content, "subtitle", ""),
                image: str_field(content, "image", ""),
                cta_text: str_field(content, "cta_text", ""),
                cta_link: str_field(content, "cta_link", "#"),
            }),
            "text" => Block::Text(Text {
                text: str_field(content, "text", ""),
                alignment: Alignment::parse(&str_field(content, "alignment", "left")),
            }),
            "image" => Block::Image(Image {
                src: str_field(content, "src", ""),
                alt: str_field(content, "alt", ""),
                caption: str_field(content, "caption", ""),
            }),
            "button" => Block::Button(Button {
                text: str_field(content, "text", "Click me"),
                link: str_field(content, "link", "#"),
                variant: ButtonVariant::parse(&str_field(content, "variant", "primary")),
            }),
            "header" => Block::Header(Header {
                title: str_field(content, "title", ""),
                logo: str_field(content, "logo", ""),
                menu_items: entry_list(content, "menu_items", "text", "link")
                    .into_iter()
                    .map(|(text, link)| MenuItem { text, link })
                    .collect(),
            }),
            "footer" => Block::Footer(Footer {
                text: str_field(content, "text", ""),
                links: entry_list(content, "links", "text", "url")
                    .into_iter()
                    .map(|(text, url)| FooterLink { text, url })
                    .collect(),
            }),
            other => Block::Unknown(other.to_string()),
        }
    }
}

/// Reads a string field, stringifying bare numbers and booleans the way a
/// loosely-typed content editor produces them. Defaults on anything else.
fn str_field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    match map.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Reads an ordered list of `{label, target}` objects (menu items, footer
/// links). Entries that are not objects are dropped; a non-array value
/// yields the empty list.
fn entry_list(
    map: &Map<String, Value>,
    key: &str,
    label_key: &str,
    target_key: &str,
) -> Vec<(String, String)> {
    let Some(Value::Array(items)) = map.get(key) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(entry) => Some((
                str_field(entry, label_key, ""),
                str_field(entry, target_key, "#"),
            )),
            _ => None,
        })
        .collect()
}
