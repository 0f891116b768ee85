//! crates/job_board_core/src/view.rs
//!
//! Maps each lifecycle state to exactly one rendering outcome.

use crate::lifecycle::LifecycleState;

/// Which fetch a failure panel's retry button reissues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryTarget {
    Profile,
    Jobs,
    Detail,
}

#[derive(Debug, PartialEq)]
pub enum Panel<'a, T> {
    /// Nothing requested yet.
    Blank,
    Loader,
    Content(&'a T),
    NoResults,
    Failure { message: &'a str, retry: RetryTarget },
}

pub fn panel<T>(state: &LifecycleState<T>, retry: RetryTarget) -> Panel<'_, T> {
    match state {
        LifecycleState::Initial => Panel::Blank,
        LifecycleState::Loading => Panel::Loader,
        LifecycleState::Success(value) => Panel::Content(value),
        LifecycleState::Empty => Panel::NoResults,
        LifecycleState::Failure(message) => Panel::Failure { message, retry },
    }
}
