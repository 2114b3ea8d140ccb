use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One content block inside a page, as handed over by the storage layer.
///
/// `content` and `styles` are free-form JSON mappings; the typed view over
/// `content` is built at render time (see [`crate::block::Block`]). `kind`
/// stays an open string here so unknown block types survive the trip to the
/// renderer, where they become a visible placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub styles: Value,
    pub position: i32,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Component {
    pub fn new(id: i64, kind: impl Into<String>, position: i32) -> Self {
        Self {
            id,
            kind: kind.into(),
            content: Value::Null,
            styles: Value::Null,
            position,
            is_visible: true,
        }
    }

    pub fn with_content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn with_styles(mut self, styles: Value) -> Self {
        self.styles = styles;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}
