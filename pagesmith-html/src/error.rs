use thiserror::Error;

pub type RenderResult<T> = Result<T, ComposeError>;

/// Errors raised while composing a full page.
///
/// Per-component problems (missing fields, unknown kinds, unknown style
/// declarations) never surface here; they degrade to defaults or
/// placeholders at render time. Composition fails only when a record is
/// structurally unusable, so a broken page is never written out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComposeError {
    #[error("component {id}: `{field}` must be a JSON object, got {found}")]
    InvalidContent {
        id: i64,
        field: &'static str,
        found: &'static str,
    },
}
