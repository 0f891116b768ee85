//! services/client/src/adapters/jobs_api.rs
//!
//! This module contains the HTTP adapter for the remote job-listing API.
//! It implements the `JobBoardService` port from the `core` crate using `reqwest`,
//! and is the only place that knows the API's wire field names.

use async_trait::async_trait;
use job_board_core::domain::{
    Credentials, JobDetail, JobListing, LifeAtCompany, Profile, SessionToken, Skill,
};
use job_board_core::filters::FilterSelection;
use job_board_core::ports::{JobBoardService, PortError, PortResult};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `JobBoardService` over HTTP.
#[derive(Clone)]
pub struct HttpJobBoardAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpJobBoardAdapter {
    /// Creates a new `HttpJobBoardAdapter`. `base_url` has no trailing slash.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds the `reqwest` client used by the adapter, bounded by `timeout`.
    pub fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(timeout).build()
    }

    /// Appends `segments` to the base URL. Each segment is percent-encoded, so an
    /// id containing `#`, `?` or `/` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> PortResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            PortError::Unexpected(format!("invalid base URL '{}': {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                PortError::Unexpected(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends an authorized GET and decodes a 2xx body; every other status is a failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        token: &SessionToken,
        query: &[(&str, String)],
    ) -> PortResult<T> {
        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(token.as_str())
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        debug!(%url, status = %response.status(), elapsed = ?start.elapsed(), "GET completed");

        match response.status() {
            status if status.is_success() => decode(response).await,
            StatusCode::UNAUTHORIZED => Err(PortError::Unauthorized),
            status => Err(PortError::Status(status.as_u16())),
        }
    }
}

fn transport_error(err: reqwest::Error) -> PortError {
    PortError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> PortResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| PortError::Unexpected(format!("malformed response body: {e}")))
}

//=========================================================================================
// "Impure" Wire Record Structs
//=========================================================================================

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginSuccessRecord {
    jwt_token: String,
}

#[derive(Deserialize)]
struct LoginFailureRecord {
    error_msg: String,
}

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile_details: ProfileRecord,
}

#[derive(Deserialize)]
struct ProfileRecord {
    name: String,
    profile_image_url: String,
    short_bio: String,
}
impl ProfileRecord {
    fn to_domain(self) -> Profile {
        Profile {
            name: self.name,
            profile_image_url: self.profile_image_url,
            short_bio: self.short_bio,
        }
    }
}

#[derive(Deserialize)]
struct JobsEnvelope {
    jobs: Vec<JobRecord>,
}

#[derive(Deserialize)]
struct JobRecord {
    id: String,
    title: String,
    company_logo_url: String,
    employment_type: String,
    location: String,
    #[serde(default)]
    package_per_annum: Option<String>,
    rating: f64,
    job_description: String,
}
impl JobRecord {
    fn to_domain(self) -> JobListing {
        JobListing {
            id: self.id,
            title: self.title,
            company_logo_url: self.company_logo_url,
            employment_type: self.employment_type,
            location: self.location,
            package_per_annum: self.package_per_annum,
            rating: self.rating,
            job_description: self.job_description,
        }
    }
}

#[derive(Deserialize)]
struct JobDetailEnvelope {
    job_details: JobDetailRecord,
    #[serde(default)]
    similar_jobs: Vec<JobRecord>,
}

#[derive(Deserialize)]
struct JobDetailRecord {
    #[serde(flatten)]
    job: JobRecord,
    company_website_url: String,
    life_at_company: LifeAtCompanyRecord,
    #[serde(default)]
    skills: Vec<SkillRecord>,
}

#[derive(Deserialize)]
struct LifeAtCompanyRecord {
    description: String,
    image_url: String,
}

#[derive(Deserialize)]
struct SkillRecord {
    name: String,
    image_url: String,
}

impl JobDetailEnvelope {
    fn to_domain(self) -> JobDetail {
        let details = self.job_details;
        JobDetail {
            listing: details.job.to_domain(),
            company_website_url: details.company_website_url,
            life_at_company: LifeAtCompany {
                description: details.life_at_company.description,
                image_url: details.life_at_company.image_url,
            },
            skills: details
                .skills
                .into_iter()
                .map(|skill| Skill {
                    name: skill.name,
                    image_url: skill.image_url,
                })
                .collect(),
            similar_jobs: self
                .similar_jobs
                .into_iter()
                .map(JobRecord::to_domain)
                .collect(),
        }
    }
}

//=========================================================================================
// `JobBoardService` Trait Implementation
//=========================================================================================

#[async_trait]
impl JobBoardService for HttpJobBoardAdapter {
    /// `POST /login`. A non-2xx answer carrying `error_msg` is a rejection with
    /// that message; anything else unsuccessful is reported by status.
    async fn login(&self, credentials: &Credentials) -> PortResult<SessionToken> {
        let url = self.endpoint(&["login"])?;
        let response = self
            .client
            .post(url.clone())
            .json(&LoginRequest {
                username: &credentials.username,
                password: &credentials.password,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        debug!(%url, %status, "Login response received");
        if status.is_success() {
            let body: LoginSuccessRecord = decode(response).await?;
            return Ok(SessionToken::new(body.jwt_token));
        }

        match response.json::<LoginFailureRecord>().await {
            Ok(body) => Err(PortError::Rejected(body.error_msg)),
            Err(_) => Err(PortError::Status(status.as_u16())),
        }
    }

    async fn fetch_profile(&self, token: &SessionToken) -> PortResult<Profile> {
        let url = self.endpoint(&["profile"])?;
        let envelope: ProfileEnvelope = self.get_json(url, token, &[]).await?;
        Ok(envelope.profile_details.to_domain())
    }

    async fn search_jobs(
        &self,
        token: &SessionToken,
        filters: &FilterSelection,
    ) -> PortResult<Vec<JobListing>> {
        let query = filters.query_pairs();
        let url = self.endpoint(&["jobs"])?;
        let envelope: JobsEnvelope = self.get_json(url, token, &query).await?;
        Ok(envelope.jobs.into_iter().map(JobRecord::to_domain).collect())
    }

    async fn fetch_job(&self, token: &SessionToken, job_id: &str) -> PortResult<JobDetail> {
        let url = self.endpoint(&["jobs", job_id])?;
        let envelope: JobDetailEnvelope = self.get_json(url, token, &[]).await?;
        Ok(envelope.to_domain())
    }
}
