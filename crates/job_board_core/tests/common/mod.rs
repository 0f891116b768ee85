#![allow(dead_code)]

use async_trait::async_trait;
use job_board_core::{
    ClientContext, Credentials, FilterSelection, HistoryNavigator, JobBoardService, JobDetail,
    JobListing, LifeAtCompany, MemorySessionStore, PortError, PortResult, Profile, SessionToken,
    Skill,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

/// A scripted reply: either available immediately or released later by the test.
pub enum Reply<T> {
    Ready(PortResult<T>),
    Deferred(oneshot::Receiver<PortResult<T>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> PortResult<T> {
        match self {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx
                .await
                .unwrap_or_else(|_| Err(PortError::Transport("reply dropped".into()))),
        }
    }
}

/// Creates a deferred reply plus the sender that releases it.
pub fn deferred<T>() -> (oneshot::Sender<PortResult<T>>, Reply<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Deferred(rx))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login(String, String),
    Profile(String),
    Jobs(String, FilterSelection),
    Job(String, String),
}

/// An in-memory `JobBoardService` that replays scripted replies in order and
/// records every call. An unscripted call fails with `Unexpected`.
#[derive(Default)]
pub struct FakeJobBoard {
    login: Mutex<VecDeque<Reply<SessionToken>>>,
    profile: Mutex<VecDeque<Reply<Profile>>>,
    jobs: Mutex<VecDeque<Reply<Vec<JobListing>>>>,
    job: Mutex<VecDeque<Reply<JobDetail>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeJobBoard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_login(&self, reply: Reply<SessionToken>) {
        self.login.lock().unwrap().push_back(reply);
    }

    pub fn script_profile(&self, reply: Reply<Profile>) {
        self.profile.lock().unwrap().push_back(reply);
    }

    pub fn script_jobs(&self, reply: Reply<Vec<JobListing>>) {
        self.jobs.lock().unwrap().push_back(reply);
    }

    pub fn script_job(&self, reply: Reply<JobDetail>) {
        self.job.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn job_queries(&self) -> Vec<FilterSelection> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Jobs(_, query) => Some(query),
                _ => None,
            })
            .collect()
    }

    pub fn detail_ids(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Job(_, id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn profile_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Profile(_)))
            .count()
    }

    fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Reply<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Reply::Ready(Err(PortError::Unexpected("unscripted call".into()))))
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl JobBoardService for FakeJobBoard {
    async fn login(&self, credentials: &Credentials) -> PortResult<SessionToken> {
        self.record(Call::Login(
            credentials.username.clone(),
            credentials.password.clone(),
        ));
        Self::next(&self.login).resolve().await
    }

    async fn fetch_profile(&self, token: &SessionToken) -> PortResult<Profile> {
        self.record(Call::Profile(token.as_str().to_string()));
        Self::next(&self.profile).resolve().await
    }

    async fn search_jobs(
        &self,
        token: &SessionToken,
        filters: &FilterSelection,
    ) -> PortResult<Vec<JobListing>> {
        self.record(Call::Jobs(token.as_str().to_string(), filters.clone()));
        Self::next(&self.jobs).resolve().await
    }

    async fn fetch_job(&self, token: &SessionToken, job_id: &str) -> PortResult<JobDetail> {
        self.record(Call::Job(token.as_str().to_string(), job_id.to_string()));
        Self::next(&self.job).resolve().await
    }
}

pub struct Harness {
    pub api: Arc<FakeJobBoard>,
    pub session: Arc<MemorySessionStore>,
    pub history: Arc<HistoryNavigator>,
    pub ctx: ClientContext,
}

/// A context over fresh fakes. `token` pre-populates the session store.
pub fn harness(start_path: &str, token: Option<&str>) -> Harness {
    let api = FakeJobBoard::new();
    let session = Arc::new(match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::new(),
    });
    let history = Arc::new(HistoryNavigator::new(start_path));
    let ctx = ClientContext::new(api.clone(), session.clone(), history.clone());
    Harness {
        api,
        session,
        history,
        ctx,
    }
}

pub fn listing(id: &str) -> JobListing {
    JobListing {
        id: id.to_string(),
        title: format!("Engineer {id}"),
        company_logo_url: format!("https://cdn.example/{id}.png"),
        employment_type: "Full Time".to_string(),
        location: "Hyderabad".to_string(),
        package_per_annum: Some("14 LPA".to_string()),
        rating: 4.0,
        job_description: "Build things.".to_string(),
    }
}

pub fn detail(id: &str, similar: &[&str]) -> JobDetail {
    JobDetail {
        listing: listing(id),
        company_website_url: "https://example.com".to_string(),
        life_at_company: LifeAtCompany {
            description: "Friendly.".to_string(),
            image_url: "https://cdn.example/life.png".to_string(),
        },
        skills: vec![Skill {
            name: "Rust".to_string(),
            image_url: "https://cdn.example/rust.png".to_string(),
        }],
        similar_jobs: similar
            .iter()
            .map(|id| JobListing {
                package_per_annum: None,
                ..listing(id)
            })
            .collect(),
    }
}

pub fn profile() -> Profile {
    Profile {
        name: "Rahul Attuluri".to_string(),
        profile_image_url: "https://cdn.example/rahul.png".to_string(),
        short_bio: "Lead Software Developer and AI-ML expert".to_string(),
    }
}
