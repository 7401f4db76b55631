//! Low-level HTTP client: `AmethysteHttp`.
//!
//! Every remote call goes through [`AmethysteHttp::dispatch`]: omitted
//! parameters are filtered out, the bearer header is attached, and the
//! response is decoded by its declared content type. Internal to the SDK in
//! spirit; the high-level client wraps it.

use crate::endpoints::{EndpointDescriptor, HttpMethod, ReturnShape};
use crate::error::{HttpError, SdkError, SdkResult, UsageError};
use crate::http::session::{Session, SessionManager};
use crate::shared::Params;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// A decoded success response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The response declared a JSON content type.
    Json(Value),
    /// Anything else, typically PNG or GIF data.
    Bytes(Vec<u8>),
}

impl ApiResponse {
    pub fn shape(&self) -> ReturnShape {
        match self {
            Self::Json(_) => ReturnShape::Json,
            Self::Bytes(_) => ReturnShape::Bytes,
        }
    }

    /// # Errors
    ///
    /// Returns [`UsageError::UnexpectedResponse`] if the response was JSON.
    pub fn into_bytes(self) -> SdkResult<Vec<u8>> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(unexpected(ReturnShape::Bytes, other.shape())),
        }
    }

    /// # Errors
    ///
    /// Returns [`UsageError::UnexpectedResponse`] if the response was binary.
    pub fn into_json(self) -> SdkResult<Value> {
        match self {
            Self::Json(v) => Ok(v),
            other => Err(unexpected(ReturnShape::Json, other.shape())),
        }
    }
}

fn unexpected(expected: ReturnShape, found: ReturnShape) -> SdkError {
    SdkError::Usage(UsageError::UnexpectedResponse {
        expected: expected.as_str(),
        found: found.as_str(),
    })
}

/// Low-level HTTP client for the Améthyste REST API.
#[derive(Clone)]
pub struct AmethysteHttp {
    base_url: String,
    /// Bearer credential. NEVER exposed publicly.
    api_key: Arc<str>,
    sessions: SessionManager,
    auto_open: bool,
}

impl std::fmt::Debug for AmethysteHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmethysteHttp")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("auto_open", &self.auto_open)
            .finish()
    }
}

impl AmethysteHttp {
    pub fn new(base_url: &str, api_key: &str, sessions: SessionManager, auto_open: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Arc::from(api_key),
            sessions,
            auto_open,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    // ── Calls ────────────────────────────────────────────────────────────

    /// Send one request and decode the response.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NoSession`] if no session is open and `auto_open` is off.
    /// - [`SdkError::Http`] for any non-success status.
    /// - [`SdkError::Transport`] for network failures.
    /// - [`SdkError::Decode`] if a parameter failed to serialize or a JSON
    ///   response is malformed. A bad parameter fails before any request.
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        route: &str,
        params: &Params,
    ) -> SdkResult<ApiResponse> {
        let body = params.to_body()?;
        let session = self.session().await?;
        let url = format!("{}{}", self.base_url, route);

        let mut req = session
            .client()
            .request(method.into(), &url)
            .bearer_auth(&*self.api_key);
        if method != HttpMethod::Get || !body.is_empty() {
            req = req.json(&body);
        }

        let started = Instant::now();
        let resp = req.send().await?;
        let status = resp.status();
        let json = is_json(resp.headers());
        let raw = resp.bytes().await?;

        tracing::debug!(
            session_id = session.id(),
            method = method.as_str(),
            route,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );

        if !status.is_success() {
            return Err(HttpError::from_body(status.as_u16(), &raw).into());
        }

        if json {
            Ok(ApiResponse::Json(serde_json::from_slice(&raw)?))
        } else {
            Ok(ApiResponse::Bytes(raw.to_vec()))
        }
    }

    /// `POST /generate/<name>`, expecting image data back.
    ///
    /// # Errors
    ///
    /// Everything [`dispatch`](Self::dispatch) returns, plus
    /// [`UsageError::UnexpectedResponse`] if the server answered with JSON.
    pub async fn generate(&self, name: &str, params: &Params) -> SdkResult<Vec<u8>> {
        let route = format!("/generate/{}", urlencoding::encode(name));
        self.dispatch(HttpMethod::Post, &route, params)
            .await?
            .into_bytes()
    }

    /// Validate `params` against `endpoint`, then dispatch to its route.
    ///
    /// Validation happens before any network activity.
    ///
    /// # Errors
    ///
    /// [`UsageError::MissingParameter`] or [`UsageError::UnknownParameter`]
    /// on a bad parameter set, [`UsageError::UnexpectedResponse`] if the
    /// response shape differs from the descriptor, and everything
    /// [`dispatch`](Self::dispatch) returns.
    pub async fn call(
        &self,
        endpoint: &EndpointDescriptor,
        params: &Params,
    ) -> SdkResult<ApiResponse> {
        params.check()?;
        endpoint.validate(params)?;
        let resp = self.dispatch(endpoint.method, endpoint.route, params).await?;
        if resp.shape() != endpoint.returns {
            return Err(unexpected(endpoint.returns, resp.shape()));
        }
        Ok(resp)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn session(&self) -> SdkResult<Session> {
        if self.auto_open {
            self.sessions.open().await
        } else {
            self.sessions.current().await
        }
    }
}

/// `application/json` or any `+json` structured syntax suffix.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
