//! crates/job_board_core/src/search.rs
//!
//! The jobs view: the profile card, the filter panel, and the listings.
//!
//! Every filter command updates the filters and issues the refetch in one step,
//! reading the query from the state it just wrote. The lock is released before
//! the network call, so other commands can run while a fetch is outstanding;
//! the lifecycle's ticket check keeps a superseded response from landing.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::context::ClientContext;
use crate::domain::{EmploymentType, JobListing, Profile, SalaryFloor};
use crate::filters::{FilterSelection, FilterState};
use crate::lifecycle::{with_timeout, LifecycleState, RequestLifecycle, RequestTicket};
use crate::navigation::job_path;

struct SearchState {
    filters: FilterState,
    profile: RequestLifecycle<Profile>,
    jobs: RequestLifecycle<Vec<JobListing>>,
}

/// A point-in-time copy of everything the jobs view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    pub filters: FilterSelection,
    pub profile: LifecycleState<Profile>,
    pub jobs: LifecycleState<Vec<JobListing>>,
}

pub struct JobSearchController {
    ctx: ClientContext,
    state: Mutex<SearchState>,
}

impl JobSearchController {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(SearchState {
                filters: FilterState::new(),
                profile: RequestLifecycle::new(),
                jobs: RequestLifecycle::new(),
            }),
        }
    }

    /// Issues the profile and listings fetches once, with default filters.
    pub async fn mount(&self) {
        tokio::join!(self.fetch_profile(), self.fetch_jobs());
    }

    pub async fn toggle_employment_type(&self, employment_type: EmploymentType) {
        self.refetch_after(|filters| filters.toggle_employment_type(employment_type))
            .await;
    }

    pub async fn set_salary_floor(&self, floor: SalaryFloor) {
        self.refetch_after(|filters| filters.set_salary_floor(floor))
            .await;
    }

    /// Edits the search text without fetching; see [`Self::submit_search`].
    pub async fn set_search_text(&self, text: &str) {
        self.state.lock().await.filters.set_search_text(text);
    }

    pub async fn submit_search(&self) {
        self.fetch_jobs().await;
    }

    pub async fn retry_profile(&self) {
        self.fetch_profile().await;
    }

    pub async fn retry_jobs(&self) {
        self.fetch_jobs().await;
    }

    /// Navigates to a listing's detail view.
    pub fn open_listing(&self, job_id: &str) {
        self.ctx.navigator.push(&job_path(job_id));
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.lock().await;
        SearchSnapshot {
            filters: state.filters.snapshot(),
            profile: state.profile.state().clone(),
            jobs: state.jobs.state().clone(),
        }
    }

    async fn refetch_after(&self, command: impl FnOnce(&mut FilterState)) {
        let (ticket, query) = {
            let mut state = self.state.lock().await;
            command(&mut state.filters);
            (state.jobs.start(), state.filters.snapshot())
        };
        self.run_jobs_fetch(ticket, query).await;
    }

    async fn fetch_jobs(&self) {
        let (ticket, query) = {
            let mut state = self.state.lock().await;
            (state.jobs.start(), state.filters.snapshot())
        };
        self.run_jobs_fetch(ticket, query).await;
    }

    async fn run_jobs_fetch(&self, ticket: RequestTicket, query: FilterSelection) {
        let result = match self.ctx.bearer() {
            Ok(token) => {
                with_timeout(
                    self.ctx.request_timeout,
                    self.ctx.api.search_jobs(&token, &query),
                )
                .await
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(jobs) => info!(
                request = ticket.sequence(),
                count = jobs.len(),
                employment_type = %query.employment_type_csv(),
                "Listings fetched."
            ),
            Err(err) => warn!(request = ticket.sequence(), error = %err, "Listings fetch failed."),
        }

        self.state
            .lock()
            .await
            .jobs
            .complete(ticket, result, |jobs| jobs.is_empty());
    }

    async fn fetch_profile(&self) {
        let ticket = self.state.lock().await.profile.start();

        let result = match self.ctx.bearer() {
            Ok(token) => {
                with_timeout(self.ctx.request_timeout, self.ctx.api.fetch_profile(&token)).await
            }
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            warn!(request = ticket.sequence(), error = %err, "Profile fetch failed.");
        }

        self.state
            .lock()
            .await
            .profile
            .complete(ticket, result, |_| false);
    }
}
