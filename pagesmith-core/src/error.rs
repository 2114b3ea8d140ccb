use std::path::PathBuf;

use thiserror::Error;

pub use pagesmith_html::ComposeError;

pub type DeployResult<T> = Result<T, DeployError>;

/// Failures of the deployment pipeline, distinguishable by phase: a
/// composition failure means nothing was written; everything else is a
/// filesystem-side failure after composition succeeded.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset source directory not found: {path}")]
    MissingAssets { path: PathBuf },

    #[error("asset verification failed for {path}: {reason}")]
    VerifyFailed { path: PathBuf, reason: String },

    #[error("page {id} not found in store")]
    PageNotFound { id: i64 },

    #[error("page {id} is not published")]
    NotPublished { id: i64 },
}

impl DeployError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
