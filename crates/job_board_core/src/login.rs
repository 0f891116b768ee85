//! crates/job_board_core/src/login.rs
//!
//! The credential-exchange flow and logout.

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::context::ClientContext;
use crate::domain::Credentials;
use crate::lifecycle::with_timeout;
use crate::navigation::{HOME_PATH, LOGIN_PATH};
use crate::ports::{Navigator, PortError, SessionStore};
use crate::session::SESSION_TTL_DAYS;

/// Shown when the login request fails without a message from the server.
pub const GENERIC_LOGIN_ERROR: &str = "Something went wrong. Please try again.";

/// There is no success state: success navigates away and resets to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStatus {
    Idle,
    Submitting,
    Failed { message: String },
}

/// What the login form currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub status: LoginStatus,
}

pub struct LoginController {
    ctx: ClientContext,
    form: Mutex<LoginForm>,
}

impl LoginController {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            form: Mutex::new(LoginForm {
                username: String::new(),
                password: String::new(),
                status: LoginStatus::Idle,
            }),
        }
    }

    pub async fn form(&self) -> LoginForm {
        self.form.lock().await.clone()
    }

    pub async fn status(&self) -> LoginStatus {
        self.form.lock().await.status.clone()
    }

    /// Exchanges the credentials for a token. On success the token is persisted
    /// and history is replaced with the home view; on failure the form keeps its
    /// fields and shows the error.
    pub async fn submit(&self, username: &str, password: &str) -> LoginStatus {
        let credentials = Credentials::new(username, password);
        {
            let mut form = self.form.lock().await;
            form.username = credentials.username.clone();
            form.password = credentials.password.clone();
            form.status = LoginStatus::Submitting;
        }

        let result = with_timeout(self.ctx.request_timeout, self.ctx.api.login(&credentials)).await;

        let status = match result {
            Ok(token) => {
                info!(username = %credentials.username, "Login succeeded.");
                self.ctx.session.set(token, SESSION_TTL_DAYS);
                self.ctx.navigator.replace(HOME_PATH);
                LoginStatus::Idle
            }
            Err(PortError::Rejected(message)) => {
                warn!(username = %credentials.username, %message, "Login rejected.");
                LoginStatus::Failed { message }
            }
            Err(err) => {
                warn!(username = %credentials.username, error = %err, "Login request failed.");
                LoginStatus::Failed {
                    message: GENERIC_LOGIN_ERROR.to_string(),
                }
            }
        };

        self.form.lock().await.status = status.clone();
        status
    }
}

/// Ends the session and replaces history with the login view.
pub fn logout(session: &dyn SessionStore, navigator: &dyn Navigator) {
    session.clear();
    navigator.replace(LOGIN_PATH);
    info!("Logged out.");
}
