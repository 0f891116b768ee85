//! crates/job_board_core/src/navigation.rs
//!
//! Routes of the client and an in-memory history stack implementing `Navigator`.

use std::sync::Mutex;
use tracing::debug;

use crate::ports::Navigator;

pub const HOME_PATH: &str = "/";
pub const JOBS_PATH: &str = "/jobs";
pub const LOGIN_PATH: &str = "/login";
pub const NOT_FOUND_PATH: &str = "/not-found";

/// A view of the client, resolved from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Jobs,
    JobDetail(String),
    Login,
    NotFound,
    /// Any path that matches no view.
    Unmatched(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        match path {
            HOME_PATH => Route::Home,
            JOBS_PATH => Route::Jobs,
            LOGIN_PATH => Route::Login,
            NOT_FOUND_PATH => Route::NotFound,
            _ => match path.strip_prefix("/jobs/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::JobDetail(id.to_string())
                }
                _ => Route::Unmatched(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => HOME_PATH.to_string(),
            Route::Jobs => JOBS_PATH.to_string(),
            Route::JobDetail(id) => job_path(id),
            Route::Login => LOGIN_PATH.to_string(),
            Route::NotFound => NOT_FOUND_PATH.to_string(),
            Route::Unmatched(path) => path.clone(),
        }
    }

    /// Protected views render only while a session token is present.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Home | Route::Jobs | Route::JobDetail(_))
    }
}

pub fn job_path(id: &str) -> String {
    format!("{JOBS_PATH}/{id}")
}

/// A browser-like history: `push` appends, `replace` overwrites the top entry.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Mutex::new(vec![start.to_string()]),
        }
    }

    pub fn current(&self) -> String {
        self.lock().last().cloned().unwrap_or_else(|| HOME_PATH.to_string())
    }

    /// Pops the top entry. Returns `false` when already at the first entry.
    pub fn back(&self) -> bool {
        let mut entries = self.lock();
        if entries.len() > 1 {
            entries.pop();
            true
        } else {
            false
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&self, path: &str) {
        debug!(path, "history push");
        self.lock().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        debug!(path, "history replace");
        let mut entries = self.lock();
        entries.pop();
        entries.push(path.to_string());
    }
}
