//! crates/job_board_core/src/domain.rs
//!
//! Defines the pure, core data structures for the job board client.
//! These structs are independent of the remote API's wire format; the HTTP
//! adapter translates into them once at the boundary.

use std::fmt;
use std::str::FromStr;

//=========================================================================================
// Session & Credentials
//=========================================================================================

/// An opaque credential proving an authenticated identity to the remote API.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Username and password submitted by the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

//=========================================================================================
// Filter Vocabulary
//=========================================================================================

/// Error returned when a filter value is outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownFilterValue {
    pub kind: &'static str,
    pub value: String,
}

/// One option of the employment-type multi-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// The identifier sent in the `employment_type` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = UnknownFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmploymentType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownFilterValue {
                kind: "employment type",
                value: s.to_string(),
            })
    }
}

/// One option of the salary-range single-select: a minimum annual package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryFloor {
    Lpa10,
    Lpa20,
    Lpa30,
    Lpa40,
}

impl SalaryFloor {
    pub const ALL: [SalaryFloor; 4] = [
        SalaryFloor::Lpa10,
        SalaryFloor::Lpa20,
        SalaryFloor::Lpa30,
        SalaryFloor::Lpa40,
    ];

    /// Annual amount in the smallest currency unit, as sent in `minimum_package`.
    pub fn amount(self) -> u64 {
        match self {
            SalaryFloor::Lpa10 => 1_000_000,
            SalaryFloor::Lpa20 => 2_000_000,
            SalaryFloor::Lpa30 => 3_000_000,
            SalaryFloor::Lpa40 => 4_000_000,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryFloor::Lpa10 => "10 LPA and above",
            SalaryFloor::Lpa20 => "20 LPA and above",
            SalaryFloor::Lpa30 => "30 LPA and above",
            SalaryFloor::Lpa40 => "40 LPA and above",
        }
    }
}

impl FromStr for SalaryFloor {
    type Err = UnknownFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownFilterValue {
            kind: "salary range",
            value: s.to_string(),
        };
        let amount: u64 = s.trim().parse().map_err(|_| unknown())?;
        SalaryFloor::ALL
            .into_iter()
            .find(|floor| floor.amount() == amount)
            .ok_or_else(unknown)
    }
}

//=========================================================================================
// Listings, Details & Profile
//=========================================================================================

/// A job listing as shown in the search results and the "similar jobs" list.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    /// Absent for entries of the similar-jobs collection.
    pub package_per_annum: Option<String>,
    pub rating: f64,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

/// Everything the detail view shows for one listing, including recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub listing: JobListing,
    pub company_website_url: String,
    pub life_at_company: LifeAtCompany,
    pub skills: Vec<Skill>,
    pub similar_jobs: Vec<JobListing>,
}

/// The signed-in user's profile card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}
