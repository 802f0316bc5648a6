use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use uuid::Uuid;

pub const SESSION_COOKIE: &str = "kbspdf_auth";

/// Issues and checks opaque admin session tokens.
pub trait SessionStore: Send + Sync {
    fn issue(&self) -> String;

    fn is_valid(&self, token: &str) -> bool;

    /// Drops expired tokens; returns how many were removed.
    fn purge_expired(&self) -> usize;

    fn ttl(&self) -> Duration;
}

/// Process-lifetime token map with a fixed time-to-live.
/// Expired tokens are rejected on lookup and purged on every issue.
pub struct InMemorySessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Instant>>,
}

impl InMemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn expired(&self, created: Instant, now: Instant) -> bool {
        now.saturating_duration_since(created) >= self.ttl
    }
}

impl SessionStore for InMemorySessionStore {
    fn issue(&self) -> String {
        self.purge_expired();
        let token = Uuid::new_v4().simple().to_string();
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), Instant::now());
        token
    }

    fn is_valid(&self, token: &str) -> bool {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match sessions.get(token) {
            Some(created) if !self.expired(*created, now) => true,
            Some(_) => {
                sessions.remove(token);
                false
            }
            None => false,
        }
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, created| !self.expired(*created, now));
        before - sessions.len()
    }

    fn ttl(&self) -> Duration {
        self.ttl
    }
}
