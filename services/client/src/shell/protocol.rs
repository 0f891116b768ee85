//! services/client/src/shell/protocol.rs
//!
//! Defines the commands a user can type into the shell, one per line.

use job_board_core::domain::{EmploymentType, SalaryFloor, UnknownFilterValue};
use job_board_core::view::RetryTarget;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  go <path>                 navigate to /, /jobs, /jobs/<id> or /login
  back                      return to the previous view
  login <username> <password>
  logout
  type <FULLTIME|PARTTIME|FREELANCE|INTERNSHIP>   toggle an employment type
  salary <1000000|2000000|3000000|4000000>        choose a salary range
  text <words>              edit the search text (does not search)
  search                    search with the current filters
  retry <profile|jobs|detail>
  open <job id>             view a listing
  show                      print the current view again
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Go(String),
    Back,
    Login { username: String, password: String },
    Logout,
    ToggleType(EmploymentType),
    Salary(SalaryFloor),
    /// Replaces the search text; empty clears it.
    Text(String),
    Search,
    Retry(RetryTarget),
    Open(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),
    #[error("'{command}' needs {argument}.")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] UnknownFilterValue),
    #[error("Nothing to retry called '{0}'. Use profile, jobs or detail.")]
    UnknownRetryTarget(String),
}

impl FromStr for ShellCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, argument: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, argument })
            } else {
                Ok(rest)
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "go" => Ok(ShellCommand::Go(required("go", "a path")?.to_string())),
            "back" => Ok(ShellCommand::Back),
            "login" => {
                let mut parts = required("login", "a username and a password")?.split_whitespace();
                match (parts.next(), parts.next()) {
                    (Some(username), Some(password)) => Ok(ShellCommand::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err(CommandError::MissingArgument {
                        command: "login",
                        argument: "a username and a password",
                    }),
                }
            }
            "logout" => Ok(ShellCommand::Logout),
            "type" => Ok(ShellCommand::ToggleType(
                required("type", "an employment type")?.parse()?,
            )),
            "salary" => Ok(ShellCommand::Salary(
                required("salary", "a salary range")?.parse()?,
            )),
            "text" => Ok(ShellCommand::Text(rest.to_string())),
            "search" => Ok(ShellCommand::Search),
            "retry" => match required("retry", "what to retry")?.to_ascii_lowercase().as_str() {
                "profile" => Ok(ShellCommand::Retry(RetryTarget::Profile)),
                "jobs" => Ok(ShellCommand::Retry(RetryTarget::Jobs)),
                "detail" | "job" => Ok(ShellCommand::Retry(RetryTarget::Detail)),
                other => Err(CommandError::UnknownRetryTarget(other.to_string())),
            },
            "open" => Ok(ShellCommand::Open(required("open", "a job id")?.to_string())),
            "show" => Ok(ShellCommand::Show),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
