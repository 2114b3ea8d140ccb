//! Style translation: a block's free-form style mapping becomes either an
//! inline CSS string or a set of utility class names, depending on the
//! configured render mode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How block styles are attached to rendered markup.
///
/// `Inline` emits `style="…"` attributes; `Utility` maps each declaration
/// through the fixed class table and emits class names, relying on the
/// shipped `assets/style.css` bundle for the definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    #[default]
    Inline,
    Utility,
}

/// Declaration → utility class. Pairs not listed here have no utility
/// equivalent and are dropped in utility mode; that is a defined outcome,
/// not an error.
const UTILITY_TABLE: &[(&str, &str)] = &[
    ("background-color: #007bff", "bg-primary"),
    ("background-color: #6c757d", "bg-secondary"),
    ("background-color: #28a745", "bg-success"),
    ("background-color: #dc3545", "bg-danger"),
    ("color: white", "text-white"),
    ("color: #333", "text-gray-900"),
    ("color: #666", "text-gray-600"),
    ("text-align: center", "text-center"),
    ("text-align: left", "text-left"),
    ("text-align: right", "text-right"),
    ("padding: 20px", "p-5"),
    ("padding: 40px 20px", "py-10 px-5"),
    ("margin-bottom: 20px", "mb-5"),
    ("margin-top: 20px", "mt-5"),
    ("font-weight: bold", "font-bold"),
    ("font-size: 1.5rem", "text-2xl"),
    ("font-size: 3rem", "text-5xl"),
    ("font-size: 1.2rem", "text-xl"),
    ("border-radius: 5px", "rounded"),
    ("border-radius: 8px", "rounded-lg"),
    ("display: flex", "flex"),
    ("justify-content: space-between", "justify-between"),
    ("align-items: center", "items-center"),
];

/// Resolves a single `"property: value"` declaration to its utility class.
pub fn utility_class_for(declaration: &str) -> Option<&'static str> {
    UTILITY_TABLE
        .iter()
        .find(|(decl, _)| *decl == declaration)
        .map(|(_, class)| *class)
}

/// Renders a style mapping as an inline CSS string.
///
/// Property names arrive in the editor's camelCase form and are converted
/// to kebab-case. Empty property names and non-scalar values are skipped;
/// there is no failure mode — a mapping full of junk yields an empty
/// string and the block renders unstyled.
pub fn inline_css(styles: &Map<String, Value>) -> String {
    declarations(styles).join("; ")
}

/// Renders a style mapping as utility class names, dropping declarations
/// with no table entry.
pub fn utility_classes(styles: &Map<String, Value>) -> String {
    declarations(styles)
        .iter()
        .filter_map(|decl| utility_class_for(decl))
        .collect::<Vec<_>>()
        .join(" ")
}

fn declarations(styles: &Map<String, Value>) -> Vec<String> {
    styles
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .filter_map(|(key, value)| {
            scalar(value).map(|v| format!("{}: {}", to_kebab_case(key), v))
        })
        .collect()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `backgroundColor` → `background-color`. A leading uppercase letter does
/// not produce a leading hyphen.
fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out.trim_start_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn styles(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn camel_case_is_converted() {
        let map = styles(json!({
            "backgroundColor": "#ffffff",
            "fontSize": "16px",
            "marginTop": "20px"
        }));
        assert_eq!(
            inline_css(&map),
            "background-color: #ffffff; font-size: 16px; margin-top: 20px"
        );
    }

    #[test]
    fn empty_keys_are_skipped() {
        let map = styles(json!({"": "orphan", "color": "red"}));
        assert_eq!(inline_css(&map), "color: red");
    }

    #[test]
    fn non_scalar_values_are_skipped() {
        let map = styles(json!({"padding": {"top": 4}, "color": "red"}));
        assert_eq!(inline_css(&map), "color: red");
    }

    #[test]
    fn numeric_values_pass_through() {
        let map = styles(json!({"opacity": 0.5}));
        assert_eq!(inline_css(&map), "opacity: 0.5");
    }

    #[test]
    fn leading_uppercase_has_no_leading_hyphen() {
        let map = styles(json!({"Color": "red"}));
        assert_eq!(inline_css(&map), "color: red");
    }

    #[test]
    fn utility_lookup_hits() {
        assert_eq!(utility_class_for("text-align: center"), Some("text-center"));
        assert_eq!(
            utility_class_for("background-color: #007bff"),
            Some("bg-primary")
        );
    }

    #[test]
    fn utility_lookup_misses_are_dropped() {
        let map = styles(json!({
            "textAlign": "center",
            "backgroundImage": "url(x.png)"
        }));
        assert_eq!(utility_classes(&map), "text-center");
    }

    #[test]
    fn empty_mapping_translates_to_nothing() {
        assert_eq!(inline_css(&Map::new()), "");
        assert_eq!(utility_classes(&Map::new()), "");
    }
}
