//! crates/job_board_core/src/ports.rs
//!
//! Defines the service contracts (traits) the controllers depend on.
//! These traits form the boundary of the hexagonal architecture: the remote
//! job-listing API, the persisted session, and the navigation surface are all
//! injected, so the core can run against in-memory fakes.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{Credentials, JobDetail, JobListing, Profile, SessionToken};
use crate::filters::FilterSelection;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from the transport (HTTP, JSON, timers).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    /// The server refused the credentials and said why.
    #[error("{0}")]
    Rejected(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Unexpected response status: {0}")]
    Status(u16),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The remote job-listing API.
#[async_trait]
pub trait JobBoardService: Send + Sync {
    /// Exchanges credentials for a session token.
    async fn login(&self, credentials: &Credentials) -> PortResult<SessionToken>;

    async fn fetch_profile(&self, token: &SessionToken) -> PortResult<Profile>;

    /// Returns one page of listings matching the filter selection.
    async fn search_jobs(
        &self,
        token: &SessionToken,
        filters: &FilterSelection,
    ) -> PortResult<Vec<JobListing>>;

    async fn fetch_job(&self, token: &SessionToken, job_id: &str) -> PortResult<JobDetail>;
}

/// Holds the single persisted session token.
///
/// Implementations never fail: a missing, expired, or unreadable token is `None`.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<SessionToken>;
    fn set(&self, token: SessionToken, ttl_days: i64);
    fn clear(&self);
}

/// The "navigate to path" surface of the routing layer.
pub trait Navigator: Send + Sync {
    /// Adds a history entry.
    fn push(&self, path: &str);
    /// Replaces the current history entry, so back-navigation skips it.
    fn replace(&self, path: &str);
}
