//! Seam to the (out-of-scope) persistence layer: the deployment pipeline
//! only ever reads pages and their components, so the trait is read-only.
//! The in-memory implementation backs the CLI and tests.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::{Component, Page};

#[async_trait]
pub trait PageStore: Send + Sync {
    async fn page(&self, id: i64) -> Option<Page>;

    async fn published_pages(&self) -> Vec<Page>;

    /// Components of a page, in storage order. Render order is re-derived
    /// from `position` by the compositor.
    async fn components(&self, page_id: i64) -> Vec<Component>;
}

#[derive(Default)]
pub struct MemoryStore {
    pages: DashMap<i64, Page>,
    components: DashMap<i64, Vec<Component>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, page: Page, components: Vec<Component>) {
        self.components.insert(page.id, components);
        self.pages.insert(page.id, page);
    }

    /// Loads a site file: a YAML document listing pages with their
    /// components inline. See `demos/site.yaml` for the format.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SiteFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::new();
        for entry in file.pages {
            store.insert(entry.page, entry.components);
        }
        Ok(store)
    }
}

#[async_trait]
impl PageStore for MemoryStore {
    async fn page(&self, id: i64) -> Option<Page> {
        self.pages.get(&id).map(|p| p.value().clone())
    }

    async fn published_pages(&self) -> Vec<Page> {
        let mut pages: Vec<Page> = self
            .pages
            .iter()
            .filter(|p| p.is_published)
            .map(|p| p.value().clone())
            .collect();
        pages.sort_by_key(|p| p.id);
        pages
    }

    async fn components(&self, page_id: i64) -> Vec<Component> {
        self.components
            .get(&page_id)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct SiteFile {
    pages: Vec<SitePage>,
}

#[derive(Deserialize)]
struct SitePage {
    #[serde(flatten)]
    page: Page,
    #[serde(default)]
    components: Vec<Component>,
}
