//! Per-browser finder sessions.
//!
//! Each browser gets its own [`FinderSession`], keyed by a random UUID
//! carried in the page URL. Sessions expire after a period of inactivity.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::finder::FinderSession;

/// A session shared between concurrent requests from the same browser.
pub type SharedSession = Arc<Mutex<FinderSession>>;

/// Default cap on live sessions.
const DEFAULT_MAX_SESSIONS: u64 = 10_000;

/// Store of live sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: MokaCache<Uuid, SharedSession>,
}

impl SessionStore {
    /// Create a store whose sessions expire after `idle_ttl` without use.
    pub fn new(idle_ttl: Duration) -> Self {
        Self::with_capacity(idle_ttl, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_capacity(idle_ttl: Duration, max_capacity: u64) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(idle_ttl)
            .max_capacity(max_capacity)
            .build();

        Self { sessions }
    }

    /// Start a new session in the tracking state.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(FinderSession::new())))
            .await;
        id
    }

    /// Look up a live session.
    pub async fn get(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    /// Approximate number of live sessions (for logging).
    pub fn entry_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
