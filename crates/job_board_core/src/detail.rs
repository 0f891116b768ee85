//! crates/job_board_core/src/detail.rs
//!
//! The detail view of one listing and its similar jobs.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::context::ClientContext;
use crate::domain::JobDetail;
use crate::lifecycle::{with_timeout, LifecycleState, RequestLifecycle};
use crate::navigation::job_path;

struct DetailState {
    job_id: Option<String>,
    lifecycle: RequestLifecycle<JobDetail>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSnapshot {
    pub job_id: Option<String>,
    pub detail: LifecycleState<JobDetail>,
}

pub struct DetailController {
    ctx: ClientContext,
    state: Mutex<DetailState>,
}

impl DetailController {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(DetailState {
                job_id: None,
                lifecycle: RequestLifecycle::new(),
            }),
        }
    }

    /// Shows `job_id`. A different id than the current one starts from a fresh
    /// lifecycle, so nothing of the previous listing is ever shown for it.
    pub async fn open(&self, job_id: &str) {
        {
            let mut state = self.state.lock().await;
            if state.job_id.as_deref() != Some(job_id) {
                state.lifecycle.reset();
                state.job_id = Some(job_id.to_string());
            }
        }
        self.fetch().await;
    }

    /// Refetches whichever listing is active now.
    pub async fn retry(&self) {
        self.fetch().await;
    }

    /// Navigates to one of the similar jobs.
    pub fn view_similar(&self, job_id: &str) {
        self.ctx.navigator.push(&job_path(job_id));
    }

    pub async fn snapshot(&self) -> DetailSnapshot {
        let state = self.state.lock().await;
        DetailSnapshot {
            job_id: state.job_id.clone(),
            detail: state.lifecycle.state().clone(),
        }
    }

    async fn fetch(&self) {
        let (ticket, job_id) = {
            let mut state = self.state.lock().await;
            let Some(job_id) = state.job_id.clone() else {
                warn!("No listing is open; nothing to fetch.");
                return;
            };
            (state.lifecycle.start(), job_id)
        };

        let result = match self.ctx.bearer() {
            Ok(token) => {
                with_timeout(
                    self.ctx.request_timeout,
                    self.ctx.api.fetch_job(&token, &job_id),
                )
                .await
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(detail) => info!(
                %job_id,
                similar = detail.similar_jobs.len(),
                "Listing detail fetched."
            ),
            Err(err) => warn!(%job_id, error = %err, "Listing detail fetch failed."),
        }

        self.state
            .lock()
            .await
            .lifecycle
            .complete(ticket, result, |_| false);
    }
}
