//! High-level client: `AmethysteClient` with sub-client accessors and the
//! session lifecycle surface.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, lifecycle methods, and accessors.

use crate::domain::generate::client::Generate;
use crate::domain::meta::client::Meta;
use crate::error::{SdkError, SdkResult};
use crate::http::{AmethysteHttp, SessionConfig, SessionManager};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::future::Future;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::generate::client::Generate as GenerateClient;
pub use crate::domain::meta::client::Meta as MetaClient;

/// The primary entry point for the Améthyste SDK.
///
/// Cheap to clone; clones share one session. No session exists until
/// [`open`](Self::open) or [`scoped`](Self::scoped) is called, unless the
/// client was built with [`auto_open`](AmethysteClientBuilder::auto_open).
///
/// Do not call [`close`](Self::close) while requests are in flight on another
/// task; those requests finish, but later calls fail with
/// [`UsageError::NoSession`](crate::error::UsageError::NoSession).
#[derive(Debug, Clone)]
pub struct AmethysteClient {
    pub(crate) http: AmethysteHttp,
}

impl AmethysteClient {
    pub fn builder() -> AmethysteClientBuilder {
        AmethysteClientBuilder::default()
    }

    /// Client for the default API URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] if `api_key` cannot be sent as a header.
    pub fn new(api_key: &str) -> SdkResult<Self> {
        Self::builder().api_key(api_key).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn generate(&self) -> Generate<'_> {
        Generate { client: self }
    }

    pub fn meta(&self) -> Meta<'_> {
        Meta { client: self }
    }

    /// The low-level dispatcher, for calls outside the typed surface.
    pub fn http(&self) -> &AmethysteHttp {
        &self.http
    }

    // ── Session lifecycle ────────────────────────────────────────────────

    /// Open the session. Calling it again while open is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Transport`] if the HTTP client cannot be initialized.
    pub async fn open(&self) -> SdkResult<()> {
        self.http.sessions().open().await.map(|_| ())
    }

    /// Close the session. Calling it again while closed is a no-op.
    pub async fn close(&self) {
        self.http.sessions().close().await;
    }

    pub async fn is_open(&self) -> bool {
        self.http.sessions().is_open().await
    }

    /// Open the session, run `body`, then close the session.
    ///
    /// The session is closed whether `body` succeeds, fails, panics, or is
    /// dropped before completion.
    ///
    /// ```rust,ignore
    /// let png = client
    ///     .scoped(|c| async move { c.generate().crush("https://example.com/a.png").await })
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Whatever `body` returns, or the error from opening the session.
    pub async fn scoped<F, Fut, T>(&self, body: F) -> SdkResult<T>
    where
        F: FnOnce(AmethysteClient) -> Fut,
        Fut: Future<Output = SdkResult<T>>,
    {
        self.open().await?;
        let mut guard = CloseOnDrop::new(self.http.sessions().clone());
        let result = body(self.clone()).await;
        self.close().await;
        guard.disarm();
        result
    }
}

/// Closes the session when a scope unwinds or is cancelled.
struct CloseOnDrop {
    sessions: SessionManager,
    armed: bool,
}

impl CloseOnDrop {
    fn new(sessions: SessionManager) -> Self {
        Self {
            sessions,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        if self.armed {
            self.sessions.close_blocking();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AmethysteClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    headers: Vec<(String, String)>,
    auto_open: bool,
}

impl Default for AmethysteClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: concat!("amethyste-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: Vec::new(),
            auto_open: false,
        }
    }
}

impl AmethysteClientBuilder {
    /// Builder seeded from `AMETHYSTE_API_KEY` and, if set, `AMETHYSTE_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::Config`] if `AMETHYSTE_API_KEY` is unset.
    pub fn from_env() -> SdkResult<Self> {
        let api_key = std::env::var(crate::network::API_KEY_ENV).map_err(|e| {
            SdkError::Config(format!("{}: {}", crate::network::API_KEY_ENV, e))
        })?;
        let mut builder = Self::default().api_key(&api_key);
        if let Ok(url) = std::env::var(crate::network::API_URL_ENV) {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Unset by default, which keeps the transport's.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Open a session on first use instead of failing with `NoSession`.
    pub fn auto_open(mut self, enabled: bool) -> Self {
        self.auto_open = enabled;
        self
    }

    pub fn build(self) -> SdkResult<AmethysteClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Config("API key is required".to_string()))?;
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| SdkError::Config("API key contains invalid header characters".to_string()))?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| SdkError::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let header_value = HeaderValue::from_str(&value)
                .map_err(|e| SdkError::Config(format!("Invalid header value for '{}': {}", name, e)))?;
            default_headers.insert(header_name, header_value);
        }

        let sessions = SessionManager::new(SessionConfig {
            timeout: self.timeout,
            user_agent: Some(self.user_agent),
            default_headers,
        });

        Ok(AmethysteClient {
            http: AmethysteHttp::new(&self.base_url, &api_key, sessions, self.auto_open),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = AmethysteClient::new("key").unwrap();
        assert_eq!(client.http().base_url(), "https://v1.api.amethyste.moe");
    }

    #[test]
    fn test_client_builder() {
        let client = AmethysteClient::builder()
            .api_key("key")
            .base_url("http://localhost:8080/v1/")
            .timeout(Duration::from_secs(60))
            .header("X-Custom", "test")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.http().base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_builder_requires_api_key() {
        let err = AmethysteClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_bad_key() {
        let err = AmethysteClient::new("line\nbreak").unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_builder_rejects_bad_header() {
        let err = AmethysteClient::builder()
            .api_key("key")
            .header("bad header", "v")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[tokio::test]
    async fn test_new_client_has_no_session() {
        let client = AmethysteClient::new("key").unwrap();
        assert!(!client.is_open().await);
    }

    #[tokio::test]
    async fn test_scoped_cancelled_while_closing_still_closes() {
        let client = AmethysteClient::new("key").unwrap();
        let slot = client.http.sessions().slot();

        // The body returns a read guard, so the closing write lock waits on it.
        let result = tokio::time::timeout(
            Duration::from_millis(50),
            client.scoped(move |_c| async move { Ok(slot.read_arc().await) }),
        )
        .await;

        assert!(result.is_err());
        assert!(!client.is_open().await);
    }

    #[tokio::test]
    async fn test_clones_share_session() {
        let client = AmethysteClient::new("key").unwrap();
        let other = client.clone();
        client.open().await.unwrap();
        assert!(other.is_open().await);
        other.close().await;
        assert!(!client.is_open().await);
    }
}
