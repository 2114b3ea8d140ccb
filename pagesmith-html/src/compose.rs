//! Page composition: ordered, visibility-filtered blocks in, one finished
//! HTML document out.

use serde_json::{Map, Value};

use crate::component::Component;
use crate::error::{ComposeError, RenderResult};
use crate::render::{escape_html, render_block};
use crate::style::StyleMode;
use crate::theme::Theme;
use crate::Block;

/// Shell data for one page: everything the document head needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub theme: Theme,
}

/// Turns a page's component list into a complete HTML document.
///
/// The render mode is fixed at construction and threaded through every
/// render call; there is no process-wide toggle.
#[derive(Debug, Clone)]
pub struct Compositor {
    mode: StyleMode,
}

impl Compositor {
    pub fn new(mode: StyleMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> StyleMode {
        self.mode
    }

    /// Composes the final document. All-or-nothing: any structurally
    /// unusable component fails the whole page rather than shipping a
    /// partial one.
    pub fn compose(&self, meta: &PageMeta, components: &[Component]) -> RenderResult<String> {
        let mut visible: Vec<&Component> = components.iter().filter(|c| c.is_visible).collect();
        // Stable sort: equal positions keep storage order.
        visible.sort_by_key(|c| c.position);

        let mut body = String::new();
        for component in visible {
            let content = as_object(&component.content, component.id, "content")?;
            let styles = as_object(&component.styles, component.id, "styles")?;
            let block = Block::from_parts(&component.kind, &content);
            body.push_str(&render_block(&block, &styles, self.mode));
        }

        Ok(self.shell(meta, &body))
    }

    fn shell(&self, meta: &PageMeta, body: &str) -> String {
        let stylesheet = match self.mode {
            StyleMode::Inline => "",
            StyleMode::Utility => "<link rel=\"stylesheet\" href=\"assets/style.css\">\n",
        };
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{}</title>\n\
             <meta name=\"description\" content=\"{}\">\n\
             {}<style>\n{}\n</style>\n\
             </head>\n\
             <body>\n{}</body>\n\
             </html>\n",
            escape_html(&meta.title),
            escape_html(&meta.description),
            stylesheet,
            meta.theme.css(),
            body
        )
    }
}

/// Content and style mappings must be JSON objects (null counts as empty).
/// Anything else is unusable and fails composition.
fn as_object(
    value: &Value,
    id: i64,
    field: &'static str,
) -> RenderResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::Null => Ok(Map::new()),
        other => Err(ComposeError::InvalidContent {
            id,
            field,
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
