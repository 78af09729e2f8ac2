/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # kops client prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ## Usage
//!
//! ```rust
//! use kops_client::prelude::*;
//!
//! let mut config = RestConfig::new("https://api.example.com");
//! set_config_defaults(&mut config, &REGISTRY).unwrap();
//! assert_eq!(config.api_path, "/apis");
//! ```

// ============================================================================
// CLIENT CONSTRUCTION
// ============================================================================

/// Kops group client and constructors
pub use crate::application::client::{
    KopsClient, new_for_config, new_for_config_or_die, new_for_config_with_registry,
    rest_client_of, set_config_defaults,
};

/// Configuration
pub use crate::application::config::{Credentials, RestConfig, default_user_agent};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// INTERFACES AND TYPED CLIENTS
// ============================================================================

/// Client and transport traits
pub use crate::application::interfaces::kops::KopsInterface;
pub use crate::application::interfaces::rest::RestInterface;

/// Typed sub-clients
pub use crate::application::typed::{
    Clusters, Federations, InstanceGroups, Keysets, ResourceClient, SshCredentials, WatchStream,
};

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// MODELS
// ============================================================================

/// Resources of the kops group
pub use crate::model::kops::{
    Cluster, ClusterSpec, Federation, FederationSpec, InstanceGroup, InstanceGroupRole,
    InstanceGroupSpec, Keyset, KeysetItem, KeysetSpec, KeysetType, Resource, SshCredential,
    SshCredentialSpec,
};

/// Metadata and options
pub use crate::model::meta::{
    DeleteOptions, ListMeta, ListOptions, ObjectList, ObjectMeta, PatchType, PropagationPolicy,
    Status, TypeMeta, WatchEvent,
};

/// Transport, request builder and retry
pub use crate::model::http::RestClient;
pub use crate::model::request::Request;
pub use crate::model::retry::RetryConfig;

/// Scheme
pub use crate::model::scheme::{CodecFactory, GroupVersion, REGISTRY, Registry, codecs};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
