use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use pagesmith_html::{PageMeta, Theme};

pub use pagesmith_html::Component;

/// One deployable page. The (subdomain, slug) pair is unique across all
/// pages; the storage layer enforces that, not this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Path segment under the subdomain. Empty or `"root"` means this page
    /// is the subdomain's own index.
    pub slug: String,
    pub subdomain: String,
    /// Free-form page configuration; `"theme"` selects the shell theme.
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// True when this page occupies the subdomain's own index instead of a
    /// nested path.
    pub fn is_root(&self) -> bool {
        self.slug.is_empty() || self.slug == "root"
    }

    /// The configured theme, falling back to `default` when the config has
    /// no usable `theme` entry.
    pub fn theme(&self) -> Theme {
        self.theme_or(Theme::Default)
    }

    /// The configured theme, falling back to `fallback` when absent.
    pub fn theme_or(&self, fallback: Theme) -> Theme {
        match self.config.get("theme").and_then(Value::as_str) {
            Some(name) => Theme::parse(name),
            None => fallback,
        }
    }

    /// Shell data for the compositor.
    pub fn meta_with_theme(&self, theme: Theme) -> PageMeta {
        PageMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            theme,
        }
    }
}
