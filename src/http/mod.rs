//! HTTP client layer: session lifecycle and the request dispatcher.

pub mod client;
pub mod session;

pub use client::{AmethysteHttp, ApiResponse};
pub use session::{Session, SessionConfig, SessionManager};
