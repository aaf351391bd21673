// ABOUTME: Anonymous session store binding a generated user id and CSRF token to each browser session
// ABOUTME: Bounded LRU storage with idle expiry and a background cleanup task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Identity
//!
//! Visitors are anonymous. The first request without a live session cookie
//! gets a fresh session; the first time a handler asks for the user id, a
//! UUID v4 is generated and bound to that session for its lifetime.
//!
//! Sessions live in memory only and are dropped after the idle timeout or
//! when the LRU bound is reached.

use crate::config::SessionConfig;
use crate::security::csrf::{generate_csrf_token, generate_random_token};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Session id length in bytes
const SESSION_ID_LENGTH: usize = 32;

/// Server-side session data
#[derive(Debug, Clone)]
struct SessionRecord {
    user_id: Option<String>,
    csrf_token: String,
    last_seen: Instant,
}

impl SessionRecord {
    fn new(csrf_token: String) -> Self {
        Self {
            user_id: None,
            csrf_token,
            last_seen: Instant::now(),
        }
    }

    fn is_expired(&self, idle_timeout: Duration) -> bool {
        self.last_seen.elapsed() >= idle_timeout
    }
}

/// In-memory store of live sessions
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<LruCache<String, SessionRecord>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    /// Fallback capacity when configured with zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store holding at most `max_sessions` sessions
    #[must_use]
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_sessions).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            sessions: Arc::new(RwLock::new(LruCache::new(capacity))),
            idle_timeout,
        }
    }

    /// Create a store from session configuration
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.max_sessions, config.idle_timeout)
    }

    /// Load the session named by the cookie, or start a new one
    ///
    /// Unknown or expired ids are never adopted; a new id is issued instead.
    pub async fn load_or_create(&self, session_id: Option<&str>) -> SessionContext {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = session_id {
            if let Some(record) = sessions.get_mut(id) {
                if !record.is_expired(self.idle_timeout) {
                    record.last_seen = Instant::now();
                    return SessionContext {
                        session_id: id.to_owned(),
                        csrf_token: record.csrf_token.clone(),
                        is_new: false,
                        store: self.clone(),
                    };
                }
                sessions.pop(id);
                debug!("Expired session discarded");
            }
        }

        let session_id = generate_random_token(SESSION_ID_LENGTH);
        let csrf_token = generate_csrf_token();
        sessions.push(session_id.clone(), SessionRecord::new(csrf_token.clone()));
        drop(sessions);

        SessionContext {
            session_id,
            csrf_token,
            is_new: true,
            store: self.clone(),
        }
    }

    /// Return the user id bound to a session, binding a new one if absent
    async fn resolve_user_id(&self, session_id: &str, csrf_token: &str) -> String {
        let mut sessions = self.sessions.write().await;

        if let Some(record) = sessions.get_mut(session_id) {
            record.last_seen = Instant::now();
            if let Some(user_id) = &record.user_id {
                return user_id.clone();
            }
            let user_id = Uuid::new_v4().to_string();
            record.user_id = Some(user_id.clone());
            debug!(user.id = %user_id, "Bound new user id to session");
            return user_id;
        }

        // Evicted between middleware and handler: re-create under the same id
        let user_id = Uuid::new_v4().to_string();
        let mut record = SessionRecord::new(csrf_token.to_owned());
        record.user_id = Some(user_id.clone());
        sessions.push(session_id.to_owned(), record);
        user_id
    }

    /// Number of sessions currently held (including not-yet-swept expired ones)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove every session idle for longer than the timeout
    pub async fn cleanup_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;

        let expired_ids: Vec<String> = sessions
            .iter()
            .filter(|(_, record)| record.is_expired(self.idle_timeout))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired_ids {
            sessions.pop(id);
        }
        drop(sessions);

        if !expired_ids.is_empty() {
            debug!("Cleaned up {} expired sessions", expired_ids.len());
        }
        expired_ids.len()
    }

    /// Periodically sweep expired sessions until the runtime shuts down
    #[must_use]
    pub fn spawn_cleanup_task(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                store.cleanup_expired().await;
            }
        })
    }
}

/// Per-request view of the caller's session, inserted by the session middleware
#[derive(Clone)]
pub struct SessionContext {
    session_id: String,
    csrf_token: String,
    is_new: bool,
    store: SessionStore,
}

impl SessionContext {
    /// Opaque session id carried in the cookie
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// CSRF token that state-changing requests must echo back
    #[must_use]
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// True when this request started the session
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    /// The anonymous user id for this session, generated on first use
    pub async fn resolve_user_id(&self) -> String {
        self.store
            .resolve_user_id(&self.session_id, &self.csrf_token)
            .await
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("is_new", &self.is_new)
            .finish_non_exhaustive()
    }
}
