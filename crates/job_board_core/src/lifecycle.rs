//! crates/job_board_core/src/lifecycle.rs
//!
//! A generic status tracker for one asynchronous fetch.
//!
//! The state is a single enum, so exactly one status holds at a time and data
//! exists only in `Success`. Every `start()` hands out a [`RequestTicket`];
//! completions carrying anything but the latest ticket are discarded, so a slow
//! response can never overwrite the outcome of a request issued after it.

use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::ports::{PortError, PortResult};

/// The exhaustive, mutually exclusive phase of one fetch, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleState<T> {
    Initial,
    Loading,
    Success(T),
    Failure(String),
    /// A valid response with nothing in it.
    Empty,
}

/// The payload-free projection of [`LifecycleState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Initial,
    Loading,
    Success,
    Failure,
    Empty,
}

impl<T> LifecycleState<T> {
    pub fn status(&self) -> Status {
        match self {
            LifecycleState::Initial => Status::Initial,
            LifecycleState::Loading => Status::Loading,
            LifecycleState::Success(_) => Status::Success,
            LifecycleState::Failure(_) => Status::Failure,
            LifecycleState::Empty => Status::Empty,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LifecycleState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LifecycleState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request. Only the most recent ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a request ticket is needed to complete the request"]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct RequestLifecycle<T> {
    state: LifecycleState<T>,
    issued: u64,
}

impl<T> Default for RequestLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestLifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Initial,
            issued: 0,
        }
    }

    pub fn state(&self) -> &LifecycleState<T> {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// Enters `Loading` from any state and supersedes every earlier ticket.
    pub fn start(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = LifecycleState::Loading;
        RequestTicket(self.issued)
    }

    /// Records a response. Returns `false` if the ticket was superseded.
    pub fn succeed(
        &mut self,
        ticket: RequestTicket,
        value: T,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state = if is_empty(&value) {
            LifecycleState::Empty
        } else {
            LifecycleState::Success(value)
        };
        true
    }

    /// Records a failure. Returns `false` if the ticket was superseded.
    pub fn fail(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.state = LifecycleState::Failure(message.into());
        true
    }

    /// Applies a fetch result: `Ok` goes through [`Self::succeed`], `Err` through [`Self::fail`].
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: PortResult<T>,
        is_empty: impl FnOnce(&T) -> bool,
    ) -> bool {
        match result {
            Ok(value) => self.succeed(ticket, value, is_empty),
            Err(err) => self.fail(ticket, err.to_string()),
        }
    }

    /// Back to `Initial`, as a freshly created lifecycle. Outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.issued += 1;
        self.state = LifecycleState::Initial;
    }

    fn accepts(&self, ticket: RequestTicket) -> bool {
        let current = ticket.0 == self.issued && self.state.status() == Status::Loading;
        if !current {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding completion for a superseded request."
            );
        }
        current
    }
}

/// Runs a port call under a deadline; expiry becomes [`PortError::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, call: F) -> PortResult<T>
where
    F: Future<Output = PortResult<T>>,
{
    tokio::time::timeout(limit, call)
        .await
        .unwrap_or(Err(PortError::Timeout(limit)))
}
