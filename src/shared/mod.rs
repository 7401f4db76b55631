//! Shared types used across the HTTP layer and the domain modules.

pub mod omit;

pub use omit::{Omissible, Params};
