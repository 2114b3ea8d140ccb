//! Filesystem deployment: materialize a composed page under the output
//! root, copy and verify the shared asset bundle, and take it all down
//! again. Directory presence is the only deployment state there is.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;

use pagesmith_html::{Compositor, Theme};

use crate::config::CoreConfig;
use crate::error::{DeployError, DeployResult};
use crate::model::{Component, Page};

/// Canonical slug for pages that occupy the subdomain index.
const ROOT_SLUG: &str = "root";

/// A live page on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployedSite {
    pub subdomain: String,
    pub slug: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeployStatus {
    pub deployed: bool,
    pub subdomain: String,
    pub slug: String,
    pub path: PathBuf,
}

/// Deploys composed pages into `<output_root>/<subdomain>[/<slug>]/`.
///
/// Web serving maps subdomains onto these directories, so the layout is a
/// contract: nested pages get their own directory, root pages write
/// directly into the subdomain directory, and undeploying a root page must
/// never remove the subdomain directory out from under its nested
/// siblings.
pub struct SiteDeployer {
    output_root: PathBuf,
    asset_source: Option<PathBuf>,
    compositor: Compositor,
    default_theme: Theme,
    // Serializes deploy/undeploy per placement so two deploys of the same
    // page cannot interleave the remove-then-copy asset window.
    locks: DashMap<(String, String), Arc<Mutex<()>>>,
}

impl SiteDeployer {
    pub fn new(output_root: impl Into<PathBuf>, compositor: Compositor) -> Self {
        Self {
            output_root: output_root.into(),
            asset_source: None,
            compositor,
            default_theme: Theme::Default,
            locks: DashMap::new(),
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        let mut deployer = Self::new(&config.output_root, Compositor::new(config.style_mode));
        deployer.asset_source = config.asset_source.clone();
        deployer.default_theme = Theme::parse(&config.default_theme);
        deployer
    }

    pub fn with_assets(mut self, source: impl Into<PathBuf>) -> Self {
        self.asset_source = Some(source.into());
        self
    }

    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Composes and writes a page. The publish gate is the caller's job;
    /// this method deploys whatever it is handed.
    ///
    /// All-or-nothing from the caller's perspective: a composition error
    /// writes nothing, and an asset copy that fails verification reports
    /// the failure instead of success.
    pub async fn deploy(
        &self,
        page: &Page,
        components: &[Component],
    ) -> DeployResult<DeployedSite> {
        let lock = self.placement_lock(&page.subdomain, &page.slug);
        let _guard = lock.lock().await;

        // Compose before touching the filesystem.
        let meta = page.meta_with_theme(page.theme_or(self.default_theme));
        let html = self.compositor.compose(&meta, components)?;

        let target = self.target_dir(&page.subdomain, &page.slug);
        fs::create_dir_all(&target)
            .await
            .map_err(|e| DeployError::io("create directory", &target, e))?;

        let index = target.join("index.html");
        fs::write(&index, html.as_bytes())
            .await
            .map_err(|e| DeployError::io("write", &index, e))?;

        if let Some(source) = &self.asset_source {
            self.install_assets(source, &target).await?;
        }

        Ok(DeployedSite {
            subdomain: page.subdomain.clone(),
            slug: canonical_slug(&page.slug),
            path: target,
        })
    }

    /// Removes a deployed page. Nested pages lose their whole directory;
    /// root pages lose only `index.html` so sibling pages under the same
    /// subdomain stay live. Returns whether anything was actually removed —
    /// undeploying an absent page is a no-op, not an error.
    pub async fn undeploy(&self, subdomain: &str, slug: &str) -> DeployResult<bool> {
        let lock = self.placement_lock(subdomain, slug);
        let _guard = lock.lock().await;

        if is_root_slug(slug) {
            let index = self.output_root.join(subdomain).join("index.html");
            match fs::remove_file(&index).await {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
                Err(e) => Err(DeployError::io("remove", &index, e)),
            }
        } else {
            let dir = self.output_root.join(subdomain).join(slug);
            match fs::remove_dir_all(&dir).await {
                Ok(()) => Ok(true),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
                Err(e) => Err(DeployError::io("remove", &dir, e)),
            }
        }
    }

    /// Liveness is the presence of `index.html` at the resolved path;
    /// nothing else is consulted.
    pub async fn status(&self, subdomain: &str, slug: &str) -> DeployStatus {
        let path = self.target_dir(subdomain, slug);
        let deployed = fs::try_exists(path.join("index.html"))
            .await
            .unwrap_or(false);
        DeployStatus {
            deployed,
            subdomain: subdomain.to_string(),
            slug: canonical_slug(slug),
            path,
        }
    }

    /// Every live page under the output root, subdomain indexes included.
    pub async fn list_deployed(&self) -> DeployResult<Vec<DeployedSite>> {
        let mut sites = Vec::new();
        let mut root = match fs::read_dir(&self.output_root).await {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(sites),
            Err(e) => return Err(DeployError::io("read", &self.output_root, e)),
        };

        while let Some(entry) = root
            .next_entry()
            .await
            .map_err(|e| DeployError::io("read", &self.output_root, e))?
        {
            let subdomain_dir = entry.path();
            if !subdomain_dir.is_dir() {
                continue;
            }
            let Some(subdomain) = file_name(&subdomain_dir) else {
                continue;
            };

            if subdomain_dir.join("index.html").is_file() {
                sites.push(DeployedSite {
                    subdomain: subdomain.clone(),
                    slug: ROOT_SLUG.to_string(),
                    path: subdomain_dir.clone(),
                });
            }

            let mut nested = fs::read_dir(&subdomain_dir)
                .await
                .map_err(|e| DeployError::io("read", &subdomain_dir, e))?;
            while let Some(child) = nested
                .next_entry()
                .await
                .map_err(|e| DeployError::io("read", &subdomain_dir, e))?
            {
                let page_dir = child.path();
                if page_dir.is_dir() && page_dir.join("index.html").is_file() {
                    let Some(slug) = file_name(&page_dir) else {
                        continue;
                    };
                    sites.push(DeployedSite {
                        subdomain: subdomain.clone(),
                        slug,
                        path: page_dir,
                    });
                }
            }
        }

        sites.sort_by(|a, b| (&a.subdomain, &a.slug).cmp(&(&b.subdomain, &b.slug)));
        Ok(sites)
    }

    /// Re-copies the asset bundle into every deployed site that already
    /// carries one, after the bundle itself was rebuilt. Sites deployed
    /// without assets are left alone. Returns the number refreshed.
    pub async fn refresh_assets(&self) -> DeployResult<usize> {
        let Some(source) = self.asset_source.clone() else {
            return Ok(0);
        };
        let mut refreshed = 0;
        for site in self.list_deployed().await? {
            if fs::try_exists(site.path.join("assets")).await.unwrap_or(false) {
                let lock = self.placement_lock(&site.subdomain, &site.slug);
                let _guard = lock.lock().await;
                self.install_assets(&source, &site.path).await?;
                refreshed += 1;
            }
        }
        Ok(refreshed)
    }

    /// Root pages resolve to the subdomain directory itself; everything
    /// else gets a nested directory.
    fn target_dir(&self, subdomain: &str, slug: &str) -> PathBuf {
        let subdomain_dir = self.output_root.join(subdomain);
        if is_root_slug(slug) {
            subdomain_dir
        } else {
            subdomain_dir.join(slug)
        }
    }

    fn placement_lock(&self, subdomain: &str, slug: &str) -> Arc<Mutex<()>> {
        let key = (subdomain.to_string(), canonical_slug(slug));
        self.locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Full replace: the old copy is removed before the new one lands, so
    /// files deleted from the bundle do not linger in deployed sites.
    async fn install_assets(&self, source: &Path, target_dir: &Path) -> DeployResult<()> {
        if !fs::try_exists(source).await.unwrap_or(false) {
            return Err(DeployError::MissingAssets {
                path: source.to_path_buf(),
            });
        }

        let target = target_dir.join("assets");
        match fs::remove_dir_all(&target).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(DeployError::io("remove", &target, e)),
        }

        copy_tree(source, &target).await?;
        verify_tree(source, &target).await
    }
}

fn is_root_slug(slug: &str) -> bool {
    slug.is_empty() || slug == ROOT_SLUG
}

fn canonical_slug(slug: &str) -> String {
    if is_root_slug(slug) {
        ROOT_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
}

/// Recursive directory copy, iteratively (no async recursion).
async fn copy_tree(source: &Path, target: &Path) -> DeployResult<()> {
    let mut stack = vec![(source.to_path_buf(), target.to_path_buf())];
    while let Some((src, dst)) = stack.pop() {
        fs::create_dir_all(&dst)
            .await
            .map_err(|e| DeployError::io("create directory", &dst, e))?;
        let mut entries = fs::read_dir(&src)
            .await
            .map_err(|e| DeployError::io("read", &src, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DeployError::io("read", &src, e))?
        {
            let from = entry.path();
            let to = dst.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| DeployError::io("stat", &from, e))?;
            if file_type.is_dir() {
                stack.push((from, to));
            } else {
                fs::copy(&from, &to)
                    .await
                    .map_err(|e| DeployError::io("copy", &from, e))?;
            }
        }
    }
    Ok(())
}

/// Confirms every source file landed in the target with the same byte
/// length. Runs after every copy; a mismatch means the deploy must not be
/// reported as success.
async fn verify_tree(source: &Path, target: &Path) -> DeployResult<()> {
    let mut stack = vec![(source.to_path_buf(), target.to_path_buf())];
    while let Some((src, dst)) = stack.pop() {
        let mut entries = fs::read_dir(&src)
            .await
            .map_err(|e| DeployError::io("read", &src, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DeployError::io("read", &src, e))?
        {
            let from = entry.path();
            let to = dst.join(entry.file_name());
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| DeployError::io("stat", &from, e))?;
            if file_type.is_dir() {
                stack.push((from, to));
                continue;
            }
            let expected = entry
                .metadata()
                .await
                .map_err(|e| DeployError::io("stat", &from, e))?
                .len();
            let actual = match fs::metadata(&to).await {
                Ok(meta) => meta.len(),
                Err(_) => {
                    return Err(DeployError::VerifyFailed {
                        path: to,
                        reason: "file missing after copy".to_string(),
                    })
                }
            };
            if actual != expected {
                return Err(DeployError::VerifyFailed {
                    path: to,
                    reason: format!("expected {} bytes, found {}", expected, actual),
                });
            }
        }
    }
    Ok(())
}
