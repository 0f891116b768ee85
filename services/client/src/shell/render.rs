//! services/client/src/shell/render.rs
//!
//! Prints each view as plain text. Layout is deliberately minimal; what matters
//! is that every lifecycle state produces exactly one recognisable block.

use job_board_core::domain::{EmploymentType, JobListing, SalaryFloor};
use job_board_core::view::{panel, Panel, RetryTarget};
use job_board_core::{DetailSnapshot, LoginForm, LoginStatus, SearchSnapshot};
use std::io::{self, Write};

pub const LOADER: &str = "Loading...";
pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const NO_JOBS_HEADING: &str = "No Jobs Found";

fn retry_hint(target: RetryTarget) -> &'static str {
    match target {
        RetryTarget::Profile => "retry profile",
        RetryTarget::Jobs => "retry jobs",
        RetryTarget::Detail => "retry detail",
    }
}

fn failure(out: &mut dyn Write, message: &str, retry: RetryTarget) -> io::Result<()> {
    writeln!(out, "{FAILURE_HEADING}")?;
    writeln!(out, "We cannot seem to find the page you are looking for ({message}).")?;
    writeln!(out, "[{}]", retry_hint(retry))
}

pub fn login(out: &mut dyn Write, form: &LoginForm) -> io::Result<()> {
    writeln!(out, "== Login ==")?;
    if !form.username.is_empty() {
        writeln!(out, "USERNAME: {}", form.username)?;
    }
    match &form.status {
        LoginStatus::Idle => writeln!(out, "Type: login <username> <password>"),
        LoginStatus::Submitting => writeln!(out, "{LOADER}"),
        LoginStatus::Failed { message } => writeln!(out, "*{message}"),
    }
}

pub fn home(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "== Find The Job That Fits Your Life ==")?;
    writeln!(
        out,
        "Millions of people are searching for jobs, salary information, company reviews."
    )?;
    writeln!(out, "Type 'go /jobs' to find jobs.")
}

pub fn not_found(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "== Page Not Found ==")?;
    writeln!(out, "We are sorry, the page you requested could not be found.")
}

fn listing(out: &mut dyn Write, job: &JobListing) -> io::Result<()> {
    writeln!(out, "- [{}] {} (rating {})", job.id, job.title, job.rating)?;
    write!(out, "  {} | {}", job.location, job.employment_type)?;
    match &job.package_per_annum {
        Some(package) => writeln!(out, " | {package}")?,
        None => writeln!(out)?,
    }
    writeln!(out, "  {}", job.job_description)
}

pub fn jobs(out: &mut dyn Write, snapshot: &SearchSnapshot) -> io::Result<()> {
    writeln!(out, "== Jobs ==")?;

    match panel(&snapshot.profile, RetryTarget::Profile) {
        Panel::Blank => {}
        Panel::Loader => writeln!(out, "{LOADER}")?,
        Panel::Content(profile) => {
            writeln!(out, "{}", profile.name)?;
            writeln!(out, "{}", profile.short_bio)?;
        }
        Panel::NoResults => {}
        Panel::Failure { retry, .. } => writeln!(out, "[{}]", retry_hint(retry))?,
    }

    writeln!(out, "Type of Employment:")?;
    for employment_type in EmploymentType::ALL {
        let mark = if snapshot.filters.employment_types.contains(&employment_type) {
            "x"
        } else {
            " "
        };
        writeln!(
            out,
            "  [{mark}] {} ({})",
            employment_type.label(),
            employment_type.id()
        )?;
    }
    writeln!(out, "Salary Range:")?;
    for floor in SalaryFloor::ALL {
        let mark = if snapshot.filters.salary_floor == Some(floor) {
            "o"
        } else {
            " "
        };
        writeln!(out, "  ({mark}) {} ({})", floor.label(), floor.amount())?;
    }
    writeln!(out, "Search: \"{}\"", snapshot.filters.search_text)?;

    match panel(&snapshot.jobs, RetryTarget::Jobs) {
        Panel::Blank => Ok(()),
        Panel::Loader => writeln!(out, "{LOADER}"),
        Panel::Content(listings) => {
            for job in listings {
                listing(out, job)?;
            }
            Ok(())
        }
        Panel::NoResults => {
            writeln!(out, "{NO_JOBS_HEADING}")?;
            writeln!(out, "We could not find any jobs. Try other filters.")
        }
        Panel::Failure { message, retry } => failure(out, message, retry),
    }
}

pub fn detail(out: &mut dyn Write, snapshot: &DetailSnapshot) -> io::Result<()> {
    writeln!(out, "== Job {} ==", snapshot.job_id.as_deref().unwrap_or("?"))?;

    match panel(&snapshot.detail, RetryTarget::Detail) {
        Panel::Blank | Panel::NoResults => Ok(()),
        Panel::Loader => writeln!(out, "{LOADER}"),
        Panel::Failure { message, retry } => failure(out, message, retry),
        Panel::Content(detail) => {
            let job = &detail.listing;
            writeln!(out, "{} (rating {})", job.title, job.rating)?;
            writeln!(
                out,
                "{} | {} | {}",
                job.location,
                job.employment_type,
                job.package_per_annum.as_deref().unwrap_or("-")
            )?;
            writeln!(out, "Visit: {}", detail.company_website_url)?;
            writeln!(out, "Description:\n  {}", job.job_description)?;
            let skills: Vec<&str> = detail.skills.iter().map(|s| s.name.as_str()).collect();
            writeln!(out, "Skills: {}", skills.join(", "))?;
            writeln!(out, "Life at Company:\n  {}", detail.life_at_company.description)?;
            writeln!(out, "Similar Jobs:")?;
            for similar in &detail.similar_jobs {
                listing(out, similar)?;
            }
            Ok(())
        }
    }
}
