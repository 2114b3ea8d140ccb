//! Off-request deployment: deploy requests are acknowledged immediately and
//! run on a worker task. The original caller never sees the result
//! directly; it lands in an outcome store keyed by page id and is read back
//! through a status query.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::deploy::{DeployedSite, SiteDeployer};
use crate::error::{DeployError, DeployResult};
use crate::store::PageStore;

const QUEUE_DEPTH: usize = 64;

/// Where a requested deployment currently stands. Terminal states carry a
/// timestamp so pollers can tell a fresh result from a stale one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeployOutcome {
    Queued,
    Running,
    Succeeded {
        path: std::path::PathBuf,
        finished_at: DateTime<Utc>,
    },
    Failed {
        error: String,
        finished_at: DateTime<Utc>,
    },
}

impl DeployOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DeployOutcome::Succeeded { .. } | DeployOutcome::Failed { .. }
        )
    }
}

/// Handle to the deploy worker. Cloneable; all clones share the worker and
/// the outcome store.
#[derive(Clone)]
pub struct DeployQueue {
    tx: mpsc::Sender<i64>,
    outcomes: Arc<DashMap<i64, DeployOutcome>>,
}

impl DeployQueue {
    /// Starts the worker task and returns the handle.
    pub fn spawn(deployer: Arc<SiteDeployer>, store: Arc<dyn PageStore>) -> Self {
        let (tx, mut rx) = mpsc::channel::<i64>(QUEUE_DEPTH);
        let outcomes: Arc<DashMap<i64, DeployOutcome>> = Arc::new(DashMap::new());

        // One task per page: deployments of different pages run in
        // parallel; same-placement deploys serialize on the deployer's
        // per-page lock.
        let worker_outcomes = outcomes.clone();
        tokio::spawn(async move {
            while let Some(page_id) = rx.recv().await {
                let deployer = deployer.clone();
                let store = store.clone();
                let outcomes = worker_outcomes.clone();
                tokio::spawn(async move {
                    outcomes.insert(page_id, DeployOutcome::Running);
                    match run_one(&deployer, store.as_ref(), page_id).await {
                        Ok(site) => {
                            info!(page_id, path = %site.path.display(), "page deployed");
                            outcomes.insert(
                                page_id,
                                DeployOutcome::Succeeded {
                                    path: site.path,
                                    finished_at: Utc::now(),
                                },
                            );
                        }
                        Err(err) => {
                            error!(page_id, %err, "deployment failed");
                            outcomes.insert(
                                page_id,
                                DeployOutcome::Failed {
                                    error: err.to_string(),
                                    finished_at: Utc::now(),
                                },
                            );
                        }
                    }
                });
            }
        });

        Self { tx, outcomes }
    }

    /// Accepts a deployment request. Returns `true` when the request was
    /// queued; the actual result must be polled via [`DeployQueue::outcome`].
    pub async fn enqueue(&self, page_id: i64) -> bool {
        self.outcomes.insert(page_id, DeployOutcome::Queued);
        self.tx.send(page_id).await.is_ok()
    }

    /// Queues every published page (after an asset-bundle rebuild, say).
    /// Returns how many were queued.
    pub async fn rebuild_all(&self, store: &dyn PageStore) -> usize {
        let mut queued = 0;
        for page in store.published_pages().await {
            if self.enqueue(page.id).await {
                queued += 1;
            }
        }
        queued
    }

    pub fn outcome(&self, page_id: i64) -> Option<DeployOutcome> {
        self.outcomes.get(&page_id).map(|o| o.value().clone())
    }
}

async fn run_one(
    deployer: &SiteDeployer,
    store: &dyn PageStore,
    page_id: i64,
) -> DeployResult<DeployedSite> {
    // Re-fetch: the page may have changed (or vanished) since enqueue.
    let page = store
        .page(page_id)
        .await
        .ok_or(DeployError::PageNotFound { id: page_id })?;
    if !page.is_published {
        return Err(DeployError::NotPublished { id: page_id });
    }
    let components = store.components(page_id).await;
    deployer.deploy(&page, &components).await
}
