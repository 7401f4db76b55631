//! # Améthyste SDK
//!
//! An async Rust client for the Améthyste image generation API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Errors, the omission sentinel, the endpoint descriptor table
//! 2. **HTTP API**: `SessionManager` and the `AmethysteHttp` dispatcher
//! 3. **High-Level Client**: `AmethysteClient` with `generate()` and `meta()` sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use amethyste::prelude::*;
//!
//! let client = AmethysteClient::new("api_key")?;
//!
//! let png = client
//!     .scoped(|c| async move { c.generate().crush("https://example.com/a.png").await })
//!     .await?;
//!
//! client.open().await?;
//! let gif = client
//!     .generate()
//!     .triggered("https://example.com/a.png", TriggeredOptions::new().sepia(true))
//!     .await?;
//! let free = client.meta().free_endpoints().await?;
//! client.close().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: the omission sentinel and parameter maps.
pub mod shared;

/// Endpoint descriptors for every remote operation.
pub mod endpoints;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Session lifecycle and request dispatch.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `AmethysteClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Omissible, Params};

    // Domain types
    pub use crate::domain::generate::{
        HypesquadHouse, Orientation, TriggeredOptions, TrinityType, VersusColor,
    };
    pub use crate::domain::meta::EndpointLists;

    // Errors
    pub use crate::error::{HttpError, HttpErrorKind, SdkError, SdkResult, UsageError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{AmethysteClient, AmethysteClientBuilder, GenerateClient, MetaClient};
    pub use crate::endpoints::{EndpointDescriptor, HttpMethod, ReturnShape};
    pub use crate::http::ApiResponse;
}
