//! services/client/src/adapters/session_file.rs
//!
//! A `SessionStore` persisted as a small JSON file, playing the part of the
//! browser cookie: it survives restarts until it expires or the user logs out.

use chrono::{DateTime, Utc};
use job_board_core::domain::SessionToken;
use job_board_core::ports::SessionStore;
use job_board_core::session::{expiry_from, is_live};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Serialize, Deserialize)]
struct SessionRecord {
    jwt_token: String,
    expires_at: DateTime<Utc>,
}

/// Reads the file on every `get`, so a logout from another process is seen at once.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<SessionRecord> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read session file.");
                return None;
            }
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed session file.");
            })
            .ok()
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<SessionToken> {
        self.read()
            .filter(|record| is_live(record.expires_at, Utc::now()))
            .map(|record| SessionToken::new(record.jwt_token))
    }

    fn set(&self, token: SessionToken, ttl_days: i64) {
        let record = SessionRecord {
            jwt_token: token.as_str().to_string(),
            expires_at: expiry_from(Utc::now(), ttl_days),
        };
        let written = serde_json::to_vec_pretty(&record)
            .map_err(std::io::Error::other)
            .and_then(|bytes| std::fs::write(&self.path, bytes));
        if let Err(e) = written {
            warn!(path = %self.path.display(), error = %e, "Could not persist session token.");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not remove session file.")
            }
        }
    }
}
