/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # kops client
//!
//! Typed client for the `kops` API group. A [`application::client::KopsClient`]
//! is built from a [`application::config::RestConfig`] and hands out
//! namespace-scoped sub-clients for the group's resources:
//!
//! - `Cluster`
//! - `Federation`
//! - `InstanceGroup`
//! - `Keyset`
//! - `SshCredential`
//!
//! ## Example
//!
//! ```ignore
//! use kops_client::prelude::*;
//!
//! let config = RestConfig::new("https://api.example.com");
//! let client = new_for_config(&config)?;
//! let clusters = client.clusters("default").list(&ListOptions::default()).await?;
//! for cluster in clusters.items {
//!     info!("cluster {}", cluster.metadata.name);
//! }
//! ```

/// Client construction, configuration, rate limiting and typed sub-clients
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by the whole crate
pub mod error;
/// API types, scheme registry, codecs and the REST transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
