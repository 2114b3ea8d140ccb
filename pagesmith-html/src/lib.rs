//! # pagesmith-html
//!
//! Rendering core of the pagesmith site builder: turns a page's typed
//! content blocks into a single self-contained HTML document.
//!
//! ## Features
//! - Closed block enum with an explicit `Unknown` catch-all — unknown kinds
//!   render a visible placeholder instead of failing the build
//! - Style translation in two modes: inline CSS strings or fixed-table
//!   utility classes
//! - Theme system (`default`, `dark`, `modern`, `minimal`) with a shared
//!   responsive rule set
//! - Position-ordered, visibility-filtered page composition
//!
//! ## Example
//! ```
//! use pagesmith_html::{Component, Compositor, PageMeta, StyleMode, Theme};
//! use serde_json::json;
//!
//! let components = vec![
//!     Component::new(1, "hero", 1).with_content(json!({"title": "Welcome"})),
//! ];
//! let meta = PageMeta {
//!     title: "Home".to_string(),
//!     description: "Landing page".to_string(),
//!     theme: Theme::Modern,
//! };
//! let html = Compositor::new(StyleMode::Inline)
//!     .compose(&meta, &components)
//!     .expect("compose");
//! assert!(html.contains("Welcome"));
//! ```

pub mod block;
pub mod component;
pub mod compose;
pub mod error;
pub mod render;
pub mod style;
pub mod theme;

// --- Core types ---
pub use block::Block;
pub use component::Component;
pub use compose::{Compositor, PageMeta};
pub use error::{ComposeError, RenderResult};
pub use style::StyleMode;
pub use theme::Theme;

/// Compose a page in one call with an explicit render mode.
pub fn render_page(
    meta: &PageMeta,
    components: &[Component],
    mode: StyleMode,
) -> RenderResult<String> {
    Compositor::new(mode).compose(meta, components)
}
