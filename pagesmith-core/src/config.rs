use std::path::{Path, PathBuf};

use serde::Deserialize;

use pagesmith_html::StyleMode;

use crate::error::ConfigError;

/// Backend configuration, loaded from `pagesmith.yaml`.
///
/// The render mode lives here and is threaded into the compositor at
/// construction; nothing reads it from the process environment.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Directory the web server serves subdomain sites from.
    pub output_root: PathBuf,
    /// Shared static-asset bundle copied next to every deployed page.
    /// Absent means "this installation ships no assets".
    #[serde(default)]
    pub asset_source: Option<PathBuf>,
    #[serde(default)]
    pub style_mode: StyleMode,
    /// Theme applied to pages whose config carries no `theme` entry.
    #[serde(default)]
    pub default_theme: String,
}

impl CoreConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The asset bundle shipped with this crate (used when the config does
    /// not point elsewhere).
    pub fn bundled_assets() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("sites"),
            asset_source: Some(Self::bundled_assets()),
            style_mode: StyleMode::default(),
            default_theme: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_config_gets_defaults() {
        let config: CoreConfig = serde_yaml::from_str("output_root: /var/www/sites\n").unwrap();
        assert_eq!(config.output_root, PathBuf::from("/var/www/sites"));
        assert_eq!(config.asset_source, None);
        assert_eq!(config.style_mode, StyleMode::Inline);
        assert_eq!(config.default_theme, "");
    }

    #[test]
    fn full_config_parses() {
        let yaml = "\
output_root: /var/www/sites
asset_source: /opt/pagesmith/assets
style_mode: utility
default_theme: modern
";
        let config: CoreConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.style_mode, StyleMode::Utility);
        assert_eq!(config.default_theme, "modern");
        assert_eq!(
            config.asset_source,
            Some(PathBuf::from("/opt/pagesmith/assets"))
        );
    }
}
