//! services/client/src/shell/runner.rs
//!
//! The main control loop of the terminal client. It reads one command per line,
//! applies it to the mounted view, resolves the current path through the guard
//! and prints the result.
//!
//! Input keeps being read while a command waits on the network. Editing the
//! search text, reprinting the view and help are applied at once; any other
//! command is queued and runs, in order, after the pending one completes.

use crate::error::ClientError;
use crate::shell::{
    protocol::{ShellCommand, HELP},
    render,
    state::{ActiveView, AppState},
};
use job_board_core::{
    logout, AuthGuard, DetailController, JobSearchController, LoginController, RetryTarget, Route,
};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// More redirects than this while resolving one path means the routes form a loop.
const MAX_REDIRECTS: usize = 4;

/// What the loop does after a command has been applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Resolve the current path and print the mounted view.
    Render,
    /// Print a message and leave the view as it is.
    Notice(String),
    Quit,
}

fn notice(message: impl Into<String>) -> Outcome {
    Outcome::Notice(message.into())
}

/// Commands that never navigate, so they may run beside a pending one.
fn runs_while_busy(command: &ShellCommand) -> bool {
    matches!(
        command,
        ShellCommand::Text(_) | ShellCommand::Show | ShellCommand::Help
    )
}

pub struct Shell {
    state: AppState,
    guard: AuthGuard,
    // Swapped as a whole on navigation; the lock is never held across an await.
    view: Mutex<Arc<ActiveView>>,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        let guard = AuthGuard::new(state.ctx.session.clone());
        Self {
            state,
            guard,
            view: Mutex::new(Arc::new(ActiveView::Unmounted)),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    async fn current_view(&self) -> Arc<ActiveView> {
        self.view.lock().await.clone()
    }

    /// Runs until `quit` or end of input. On end of input, queued commands
    /// still run before returning.
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<(), ClientError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.sync_route().await?;
        self.render(out).await?;

        let mut lines = input.lines();
        let mut queued: VecDeque<ShellCommand> = VecDeque::new();
        let mut input_open = true;

        loop {
            let command = match queued.pop_front() {
                Some(command) => command,
                None if !input_open => break,
                None => {
                    write!(out, "> ")?;
                    out.flush()?;
                    let Some(line) = lines.next_line().await? else {
                        writeln!(out)?;
                        break;
                    };
                    match parse_line(&line, out)? {
                        Some(command) => command,
                        None => continue,
                    }
                }
            };

            let outcome = {
                let pending = self.apply(command);
                tokio::pin!(pending);
                loop {
                    tokio::select! {
                        biased;
                        outcome = &mut pending => break outcome?,
                        line = lines.next_line(), if input_open => match line? {
                            None => input_open = false,
                            Some(line) => match parse_line(&line, out)? {
                                Some(ShellCommand::Show) => self.render(out).await?,
                                Some(command) if runs_while_busy(&command) => {
                                    let outcome = self.dispatch(command).await;
                                    self.report(outcome, out).await?;
                                }
                                Some(command) => queued.push_back(command),
                                None => {}
                            },
                        },
                    }
                }
            };

            if outcome == Outcome::Quit {
                break;
            }
            self.report(outcome, out).await?;
        }

        info!("Shell closed.");
        Ok(())
    }

    /// Dispatches `command` and, when it may have navigated, resolves the new path.
    async fn apply(&self, command: ShellCommand) -> Result<Outcome, ClientError> {
        let outcome = self.dispatch(command).await;
        if outcome == Outcome::Render {
            self.sync_route().await?;
        }
        Ok(outcome)
    }

    async fn report<W: Write>(&self, outcome: Outcome, out: &mut W) -> Result<(), ClientError> {
        match outcome {
            Outcome::Render => self.render(out).await,
            Outcome::Notice(message) => Ok(writeln!(out, "{message}")?),
            Outcome::Quit => Ok(()),
        }
    }

    /// Applies one command to the mounted view.
    pub async fn dispatch(&self, command: ShellCommand) -> Outcome {
        let navigator = self.state.ctx.navigator.as_ref();
        let view = self.current_view().await;
        match command {
            ShellCommand::Go(path) => {
                navigator.push(&path);
                Outcome::Render
            }
            ShellCommand::Back => {
                if self.state.history.back() {
                    Outcome::Render
                } else {
                    notice("Already at the first page.")
                }
            }
            ShellCommand::Login { username, password } => match view.as_ref() {
                ActiveView::Login(controller) => {
                    controller.submit(&username, &password).await;
                    Outcome::Render
                }
                _ => notice("Go to /login to sign in."),
            },
            ShellCommand::Logout => {
                logout(self.state.ctx.session.as_ref(), navigator);
                Outcome::Render
            }
            ShellCommand::ToggleType(employment_type) => match view.as_ref() {
                ActiveView::Jobs(controller) => {
                    controller.toggle_employment_type(employment_type).await;
                    Outcome::Render
                }
                _ => notice("Filters are only available on /jobs."),
            },
            ShellCommand::Salary(floor) => match view.as_ref() {
                ActiveView::Jobs(controller) => {
                    controller.set_salary_floor(floor).await;
                    Outcome::Render
                }
                _ => notice("Filters are only available on /jobs."),
            },
            ShellCommand::Text(text) => match view.as_ref() {
                ActiveView::Jobs(controller) => {
                    controller.set_search_text(&text).await;
                    notice(format!("Search text set to \"{text}\". Type 'search' to apply it."))
                }
                _ => notice("Search is only available on /jobs."),
            },
            ShellCommand::Search => match view.as_ref() {
                ActiveView::Jobs(controller) => {
                    controller.submit_search().await;
                    Outcome::Render
                }
                _ => notice("Search is only available on /jobs."),
            },
            ShellCommand::Retry(target) => match (view.as_ref(), target) {
                (ActiveView::Jobs(controller), RetryTarget::Profile) => {
                    controller.retry_profile().await;
                    Outcome::Render
                }
                (ActiveView::Jobs(controller), RetryTarget::Jobs) => {
                    controller.retry_jobs().await;
                    Outcome::Render
                }
                (ActiveView::Detail(controller), RetryTarget::Detail) => {
                    controller.retry().await;
                    Outcome::Render
                }
                _ => notice("Nothing to retry here."),
            },
            ShellCommand::Open(job_id) => match view.as_ref() {
                ActiveView::Jobs(controller) => {
                    controller.open_listing(&job_id);
                    Outcome::Render
                }
                ActiveView::Detail(controller) => {
                    controller.view_similar(&job_id);
                    Outcome::Render
                }
                _ => notice("Open a listing from /jobs."),
            },
            ShellCommand::Show => Outcome::Render,
            ShellCommand::Help => notice(HELP),
            ShellCommand::Quit => Outcome::Quit,
        }
    }

    /// Resolves the current path through the guard, following redirects, and
    /// mounts the resulting view.
    pub async fn sync_route(&self) -> Result<(), ClientError> {
        for _ in 0..MAX_REDIRECTS {
            let path = self.state.history.current();
            if let Some(route) = self.guard.enter(&path, self.state.ctx.navigator.as_ref()) {
                self.mount(route).await;
                return Ok(());
            }
        }
        Err(ClientError::Internal(format!(
            "Too many redirects while resolving '{}'",
            self.state.history.current()
        )))
    }

    /// Installs the view for `route` before fetching, so commands typed while
    /// the fetch is pending already reach the new view.
    async fn mount(&self, route: Route) {
        let current = self.current_view().await;
        if current.shows(&route) {
            return;
        }
        // A detail view following a similar-job link keeps its controller.
        if let (ActiveView::Detail(controller), Route::JobDetail(job_id)) =
            (current.as_ref(), &route)
        {
            if controller.snapshot().await.job_id.as_deref() != Some(job_id.as_str()) {
                controller.open(job_id).await;
            }
            return;
        }

        let ctx = self.state.ctx.clone();
        let next = Arc::new(match &route {
            Route::Home => ActiveView::Home,
            Route::Login => ActiveView::Login(LoginController::new(ctx)),
            Route::Jobs => ActiveView::Jobs(JobSearchController::new(ctx)),
            Route::JobDetail(_) => ActiveView::Detail(DetailController::new(ctx)),
            Route::NotFound | Route::Unmatched(_) => ActiveView::NotFound,
        });
        *self.view.lock().await = next.clone();

        match (next.as_ref(), &route) {
            (ActiveView::Jobs(controller), _) => controller.mount().await,
            (ActiveView::Detail(controller), Route::JobDetail(job_id)) => {
                controller.open(job_id).await
            }
            _ => {}
        }
    }

    async fn render<W: Write>(&self, out: &mut W) -> Result<(), ClientError> {
        match self.current_view().await.as_ref() {
            ActiveView::Unmounted => {}
            ActiveView::Home => render::home(out)?,
            ActiveView::Login(controller) => render::login(out, &controller.form().await)?,
            ActiveView::Jobs(controller) => render::jobs(out, &controller.snapshot().await)?,
            ActiveView::Detail(controller) => render::detail(out, &controller.snapshot().await)?,
            ActiveView::NotFound => render::not_found(out)?,
        }
        Ok(())
    }
}

/// Parses one input line. Blank lines yield `None`; parse errors are printed
/// and also yield `None`.
fn parse_line<W: Write>(line: &str, out: &mut W) -> Result<Option<ShellCommand>, ClientError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    match line.parse::<ShellCommand>() {
        Ok(command) => {
            debug!(
                command = line.split_whitespace().next().unwrap_or_default(),
                "Dispatching command."
            );
            Ok(Some(command))
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(None)
        }
    }
}
