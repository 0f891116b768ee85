//! crates/job_board_core/src/guard.rs
//!
//! Access decisions for every view, based solely on session-token presence.

use std::sync::Arc;
use tracing::info;

use crate::navigation::{Route, HOME_PATH, LOGIN_PATH, NOT_FOUND_PATH};
use crate::ports::{Navigator, SessionStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Render,
    RedirectToLogin,
    /// A session is already active, so the login form is skipped.
    RedirectToHome,
    RedirectToNotFound,
}

impl Access {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Access::Render => None,
            Access::RedirectToLogin => Some(LOGIN_PATH),
            Access::RedirectToHome => Some(HOME_PATH),
            Access::RedirectToNotFound => Some(NOT_FOUND_PATH),
        }
    }
}

#[derive(Clone)]
pub struct AuthGuard {
    session: Arc<dyn SessionStore>,
}

impl AuthGuard {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    pub fn authorize(&self, route: &Route) -> Access {
        let signed_in = self.session.get().is_some();
        match route {
            Route::Unmatched(_) => Access::RedirectToNotFound,
            Route::Login if signed_in => Access::RedirectToHome,
            r if r.is_protected() && !signed_in => Access::RedirectToLogin,
            _ => Access::Render,
        }
    }

    /// Resolves `path` to a renderable route, or performs the redirect and returns `None`.
    pub fn enter(&self, path: &str, navigator: &dyn Navigator) -> Option<Route> {
        let route = Route::parse(path);
        let access = self.authorize(&route);
        match access.redirect_target() {
            None => Some(route),
            Some(target) => {
                info!(from = path, to = target, "Redirecting.");
                navigator.replace(target);
                None
            }
        }
    }
}
