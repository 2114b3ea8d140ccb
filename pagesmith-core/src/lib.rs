//! # pagesmith-core
//!
//! Deployment backend of the pagesmith site builder: takes page and
//! component records from the storage seam, composes them with
//! [`pagesmith_html`], and materializes each page as a static bundle under
//! a per-subdomain directory tree.
//!
//! The pipeline is deliberately stateless about deployments: a page is
//! live exactly when its `index.html` exists at the resolved path. Deploys
//! run off the request path on a worker task, with results recorded in an
//! outcome store for later polling.

pub mod config;
pub mod deploy;
pub mod error;
pub mod model;
pub mod queue;
pub mod store;

pub use config::CoreConfig;
pub use deploy::{DeployStatus, DeployedSite, SiteDeployer};
pub use error::{ConfigError, DeployError, DeployResult};
pub use model::{Component, Page};
pub use queue::{DeployOutcome, DeployQueue};
pub use store::{MemoryStore, PageStore};
