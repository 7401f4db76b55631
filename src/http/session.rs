//! Session lifecycle: at most one live `reqwest::Client` per SDK client.
//!
//! `open()` and `close()` are idempotent. Clones of a [`SessionManager`]
//! share the same slot, so every clone of the high-level client sees the
//! same session.

use crate::error::{SdkError, SdkResult, UsageError};

use async_lock::RwLock;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Transport settings applied to every session the manager creates.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Request timeout. `None` keeps the transport default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Headers sent on every request, in addition to `Authorization`.
    pub default_headers: HeaderMap,
}

/// A live session: the underlying connection pool plus an identifier for logs.
#[derive(Debug, Clone)]
pub struct Session {
    id: u64,
    client: Client,
}

impl Session {
    /// Sequence number of this session within its manager, starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

/// Owns the session slot.
#[derive(Debug, Clone)]
pub struct SessionManager {
    slot: Arc<RwLock<Option<Session>>>,
    created: Arc<AtomicU64>,
    config: Arc<SessionConfig>,
}

impl SessionManager {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            created: Arc::new(AtomicU64::new(0)),
            config: Arc::new(config),
        }
    }

    /// Create a session if none is live. Returns the live session either way.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`] if the HTTP client cannot be initialized.
    pub async fn open(&self) -> SdkResult<Session> {
        let mut slot = self.slot.write().await;
        if let Some(session) = slot.as_ref() {
            return Ok(session.clone());
        }

        let session = Session {
            id: self.created.fetch_add(1, Ordering::Relaxed) + 1,
            client: self.build_client()?,
        };
        tracing::debug!(session_id = session.id, "Session opened");
        *slot = Some(session.clone());
        Ok(session)
    }

    /// Release the live session, if any. Returns whether a session was closed.
    ///
    /// Requests already in flight keep their own handle to the connection
    /// pool and run to completion.
    pub async fn close(&self) -> bool {
        let closed = self.slot.write().await.take();
        Self::log_closed(closed.as_ref());
        closed.is_some()
    }

    /// Synchronous [`close`](Self::close) for drop guards.
    pub(crate) fn close_blocking(&self) -> bool {
        let closed = self.slot.write_blocking().take();
        Self::log_closed(closed.as_ref());
        closed.is_some()
    }

    pub async fn is_open(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// The live session.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NoSession`] if no session is open.
    pub async fn current(&self) -> SdkResult<Session> {
        self.slot
            .read()
            .await
            .clone()
            .ok_or(SdkError::Usage(UsageError::NoSession))
    }

    /// Number of sessions created over the manager's lifetime.
    pub fn sessions_created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    pub(crate) fn slot(&self) -> Arc<RwLock<Option<Session>>> {
        self.slot.clone()
    }

    fn build_client(&self) -> SdkResult<Client> {
        let mut builder = Client::builder().default_headers(self.config.default_headers.clone());
        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ua) = &self.config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        Ok(builder.build()?)
    }

    fn log_closed(session: Option<&Session>) {
        if let Some(s) = session {
            tracing::debug!(session_id = s.id, "Session closed");
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_is_idempotent() {
        let manager = SessionManager::default();
        let first = manager.open().await.unwrap();
        let second = manager.open().await.unwrap();
        assert_eq!(first.id(), second.id());
        assert_eq!(manager.sessions_created(), 1);
        assert!(manager.is_open().await);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let manager = SessionManager::default();
        manager.open().await.unwrap();
        assert!(manager.close().await);
        assert!(!manager.close().await);
        assert!(!manager.is_open().await);
    }

    #[tokio::test]
    async fn test_current_without_session() {
        let manager = SessionManager::default();
        let err = manager.current().await.unwrap_err();
        assert!(matches!(err, SdkError::Usage(UsageError::NoSession)));
    }

    #[tokio::test]
    async fn test_reopen_creates_new_session() {
        let manager = SessionManager::default();
        let first = manager.open().await.unwrap();
        manager.close().await;
        let second = manager.open().await.unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(manager.sessions_created(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let manager = SessionManager::default();
        let other = manager.clone();
        manager.open().await.unwrap();
        assert!(other.is_open().await);
        other.close().await;
        assert!(!manager.is_open().await);
    }

    #[test]
    fn test_close_blocking() {
        let manager = SessionManager::default();
        tokio_test::block_on(manager.open()).unwrap();
        assert!(manager.close_blocking());
        assert!(!manager.close_blocking());
    }
}
