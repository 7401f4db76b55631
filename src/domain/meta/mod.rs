//! Metadata domain: endpoint listings and wallpapers.

pub mod client;
pub mod wire;

pub use wire::EndpointLists;
