//! services/client/src/shell/state.rs
//!
//! Defines the shell's shared state and the per-view state.

use crate::config::Config;
use job_board_core::{
    ClientContext, DetailController, HistoryNavigator, JobBoardService, JobSearchController,
    LoginController, Route, SessionStore,
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Views)
//=========================================================================================

/// The shared application state, created once at startup and passed to every view.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ctx: ClientContext,
    /// The same navigator as `ctx.navigator`, with its history readable.
    pub history: Arc<HistoryNavigator>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        api: Arc<dyn JobBoardService>,
        session: Arc<dyn SessionStore>,
        start_path: &str,
    ) -> Self {
        let history = Arc::new(HistoryNavigator::new(start_path));
        let ctx = ClientContext::new(api, session, history.clone())
            .with_request_timeout(config.request_timeout);
        Self {
            config,
            ctx,
            history,
        }
    }
}

//=========================================================================================
// ActiveView (The One Mounted View)
//=========================================================================================

/// The view currently on screen. Leaving a view drops its controller and every
/// lifecycle it owned; entering one builds a fresh controller.
pub enum ActiveView {
    Unmounted,
    Home,
    Login(LoginController),
    Jobs(JobSearchController),
    Detail(DetailController),
    NotFound,
}

impl ActiveView {
    /// Whether `route` is already the mounted view.
    pub fn shows(&self, route: &Route) -> bool {
        matches!(
            (self, route),
            (ActiveView::Home, Route::Home)
                | (ActiveView::Login(_), Route::Login)
                | (ActiveView::Jobs(_), Route::Jobs)
                | (ActiveView::NotFound, Route::NotFound)
        )
    }
}
