//! In-memory session store.
//!
//! Sessions hold the chat transcript and the last search's ranking. They
//! expire after a period of inactivity; nothing survives a restart.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ChatMessage;
use crate::recommend::ScoredStation;

/// Opaque session identifier handed to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id previously issued by `SessionStore::create`.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-session state.
///
/// The transcript is append-only; the recommendations are replaced wholesale
/// by each search.
#[derive(Debug)]
pub struct Session {
    pub transcript: Vec<ChatMessage>,
    pub recommendations: Vec<ScoredStation>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            recommendations: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// Idle time after which a session is dropped.
    pub idle_ttl: Duration,

    /// Maximum number of live sessions.
    pub max_capacity: u64,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
            max_capacity: 10_000,
        }
    }
}

/// TTL-bounded in-memory session store.
#[derive(Clone)]
pub struct SessionStore {
    sessions: MokaCache<SessionId, Arc<RwLock<Session>>>,
}

impl SessionStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &SessionStoreConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.idle_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { sessions }
    }

    /// Create a fresh session and return its id.
    pub async fn create(&self) -> SessionId {
        let id = SessionId::new();
        self.sessions
            .insert(id, Arc::new(RwLock::new(Session::new())))
            .await;
        id
    }

    /// Look up a session. Expired or unknown ids yield `None`.
    pub async fn get(&self, id: &SessionId) -> Option<Arc<RwLock<Session>>> {
        self.sessions.get(id).await
    }

    /// Number of live sessions (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.sessions.entry_count()
    }
}
