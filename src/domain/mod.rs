//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain types and enumerated choices
//! - `wire.rs`: Raw serde structs matching backend responses
//! - `client.rs`: Sub-client with one method per remote operation

pub mod generate;
pub mod meta;
