//! crates/job_board_core/src/context.rs
//!
//! The collaborators every controller is built from.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::SessionToken;
use crate::ports::{JobBoardService, Navigator, PortError, PortResult, SessionStore};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared handles injected into controllers, created once at startup.
#[derive(Clone)]
pub struct ClientContext {
    pub api: Arc<dyn JobBoardService>,
    pub session: Arc<dyn SessionStore>,
    pub navigator: Arc<dyn Navigator>,
    pub request_timeout: Duration,
}

impl ClientContext {
    pub fn new(
        api: Arc<dyn JobBoardService>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// The bearer credential for an outbound request.
    pub(crate) fn bearer(&self) -> PortResult<SessionToken> {
        self.session.get().ok_or(PortError::Unauthorized)
    }
}
