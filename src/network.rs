//! Network URL constants for the Améthyste SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://v1.api.amethyste.moe";

/// Environment variable holding the API key, read by
/// [`AmethysteClientBuilder::from_env`](crate::client::AmethysteClientBuilder::from_env).
pub const API_KEY_ENV: &str = "AMETHYSTE_API_KEY";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "AMETHYSTE_API_URL";
