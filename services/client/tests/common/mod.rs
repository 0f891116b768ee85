#![allow(dead_code)]

//! A local stand-in for the remote job-listing API, served by axum on an
//! ephemeral port.

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "abc123";
pub const REJECTION: &str = "username and password didn't match";

/// What the server has received, in order: `/jobs` query strings and decoded
/// `/jobs/{id}` ids.
#[derive(Clone, Default)]
pub struct Recorded {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    job_ids: Arc<Mutex<Vec<String>>>,
}

impl Recorded {
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }

    pub fn job_ids(&self) -> Vec<String> {
        self.job_ids.lock().unwrap().clone()
    }
}

pub struct MockApi {
    pub addr: SocketAddr,
    pub recorded: Recorded,
}

impl MockApi {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn spawn_mock_api() -> MockApi {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/login", post(login))
        .route("/profile", get(profile))
        .route("/jobs", get(jobs))
        .route("/jobs/{id}", get(job))
        .with_state(recorded.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockApi { addr, recorded }
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error_msg": "Invalid JWT Token" })),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "rahul" && body["password"] == "rahul@2021" {
        Json(json!({ "jwt_token": TOKEN })).into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "error_msg": REJECTION }))).into_response()
    }
}

async fn profile(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "profile_details": {
            "name": "Rahul Attuluri",
            "profile_image_url": "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png",
            "short_bio": "Lead Software Developer and AI-ML expert"
        }
    }))
    .into_response()
}

async fn jobs(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    recorded.queries.lock().unwrap().push(params);
    Json(json!({ "jobs": [job_json("job-1", "Devops Engineer"), job_json("job-2", "Backend Engineer")], "total": 2 }))
        .into_response()
}

async fn job(
    State(recorded): State<Recorded>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    recorded.job_ids.lock().unwrap().push(id.clone());
    match id.as_str() {
        "job-1" => {
            let mut details = job_json("job-1", "Devops Engineer");
            details["company_website_url"] = json!("https://about.netflix.com/en");
            details["life_at_company"] = json!({
                "description": "Our core philosophy is people over process.",
                "image_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/life-netflix-img.png"
            });
            details["skills"] = json!([
                { "name": "Docker", "image_url": "https://assets.ccbp.in/docker-img.png" },
                { "name": "Kubernetes", "image_url": "https://assets.ccbp.in/kubernetes-img.png" }
            ]);
            Json(json!({
                "job_details": details,
                "similar_jobs": [job_json("job-3", "Site Reliability Engineer")]
            }))
            .into_response()
        }
        "garbled" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

fn job_json(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/netflix-img.png",
        "employment_type": "Full Time",
        "location": "Delhi",
        "package_per_annum": "10 LPA",
        "rating": 4,
        "job_description": "We are looking for a DevOps Engineer with a minimum of 5 years of industry experience."
    })
}
