//! crates/job_board_core/src/session.rs
//!
//! Session token policy and the in-memory `SessionStore`.

use chrono::{DateTime, Days, Utc};
use std::sync::RwLock;

use crate::domain::SessionToken;
use crate::ports::SessionStore;

/// How long a token stays valid after login.
pub const SESSION_TTL_DAYS: i64 = 30;

/// The persisted key holding the token.
pub const SESSION_KEY: &str = "jwt_token";

/// Computes the expiry instant for a token stored at `now`. Saturates at the
/// representable range instead of overflowing.
pub fn expiry_from(now: DateTime<Utc>, ttl_days: i64) -> DateTime<Utc> {
    let days = Days::new(ttl_days.unsigned_abs());
    if ttl_days >= 0 {
        now.checked_add_days(days).unwrap_or(DateTime::<Utc>::MAX_UTC)
    } else {
        now.checked_sub_days(days).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A token stays readable strictly before its expiry instant.
pub fn is_live(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now < expires_at
}

/// A process-local `SessionStore`. Lost when the process exits.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<(SessionToken, DateTime<Utc>)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a live token.
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(SessionToken::new(token), SESSION_TTL_DAYS);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionToken> {
        let slot = self.slot.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        slot.as_ref()
            .filter(|(_, expires_at)| is_live(*expires_at, Utc::now()))
            .map(|(token, _)| token.clone())
    }

    fn set(&self, token: SessionToken, ttl_days: i64) {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some((token, expiry_from(Utc::now(), ttl_days)));
    }

    fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = None;
    }
}
