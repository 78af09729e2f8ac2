/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Client for the kops API group
//!
//! # Example
//! ```ignore
//! use kops_client::prelude::*;
//!
//! let config = RestConfig::new("https://api.example.com").with_bearer_token(token);
//! let client = new_for_config(&config)?;
//! let nodes = client.instance_groups("prod").get("nodes").await?;
//! ```

use crate::application::config::{RestConfig, default_user_agent};
use crate::application::interfaces::kops::KopsInterface;
use crate::application::interfaces::rest::RestInterface;
use crate::application::typed::{
    Clusters, Federations, InstanceGroups, Keysets, ResourceClient, SshCredentials,
};
use crate::constants::{DEFAULT_API_PATH, DEFAULT_BURST, DEFAULT_QPS, GROUP_NAME};
use crate::error::AppError;
use crate::model::http::RestClient;
use crate::model::scheme::{REGISTRY, Registry, codecs};
use std::sync::Arc;
use tracing::{debug, info};

/// Used to interact with the resources of the kops group
#[derive(Clone)]
pub struct KopsClient {
    rest_client: Arc<dyn RestInterface>,
}

impl KopsClient {
    /// Wraps an already built transport, without validation
    pub fn new(rest_client: Arc<dyn RestInterface>) -> Self {
        Self { rest_client }
    }
}

impl KopsInterface for KopsClient {
    fn rest_client(&self) -> Arc<dyn RestInterface> {
        self.rest_client.clone()
    }

    fn clusters(&self, namespace: &str) -> Clusters {
        ResourceClient::new(self.rest_client.clone(), namespace)
    }

    fn federations(&self, namespace: &str) -> Federations {
        ResourceClient::new(self.rest_client.clone(), namespace)
    }

    fn instance_groups(&self, namespace: &str) -> InstanceGroups {
        ResourceClient::new(self.rest_client.clone(), namespace)
    }

    fn keysets(&self, namespace: &str) -> Keysets {
        ResourceClient::new(self.rest_client.clone(), namespace)
    }

    fn ssh_credentials(&self, namespace: &str) -> SshCredentials {
        ResourceClient::new(self.rest_client.clone(), namespace)
    }
}

impl std::fmt::Debug for KopsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KopsClient")
            .field("api_version", &self.rest_client.api_version().to_string())
            .finish()
    }
}

/// Transport of a possibly absent client
///
/// Returns `None` for a missing client instead of failing.
pub fn rest_client_of(client: Option<&KopsClient>) -> Option<Arc<dyn RestInterface>> {
    client.map(|client| client.rest_client())
}

/// Creates a new client for the given config
///
/// The config is copied and defaulted; the caller's value is left untouched.
///
/// # Returns
/// * `Ok(KopsClient)` - client ready to use
/// * `Err(AppError::GroupNotRegistered)` - if the kops group is unknown
/// * `Err(AppError)` - if the transport cannot be built from the config
pub fn new_for_config(config: &RestConfig) -> Result<KopsClient, AppError> {
    new_for_config_with_registry(config, &REGISTRY)
}

/// Same as [`new_for_config`], resolving the group against `registry`
pub fn new_for_config_with_registry(
    config: &RestConfig,
    registry: &Registry,
) -> Result<KopsClient, AppError> {
    let mut config = config.clone();
    set_config_defaults(&mut config, registry)?;
    let client = RestClient::for_config(&config)?;
    info!(
        "Created kops client for {} ({})",
        config.host,
        client.api_version()
    );
    Ok(KopsClient::new(Arc::new(client)))
}

/// Creates a new client for the given config and panics if the config is unusable
pub fn new_for_config_or_die(config: &RestConfig) -> KopsClient {
    match new_for_config(config) {
        Ok(client) => client,
        Err(e) => panic!("failed to create kops client: {e}"),
    }
}

/// Fills unset connection settings of `config` for the kops group
///
/// | Field | Default when unset |
/// |---|---|
/// | `api_path` | `/apis` |
/// | `user_agent` | [`default_user_agent`] |
/// | `group_version` | the group's preferred group-version, unless the group already matches |
/// | `negotiated_serializer` | the group's codec factory |
/// | `qps` | 5 |
/// | `burst` | 10 |
pub fn set_config_defaults(config: &mut RestConfig, registry: &Registry) -> Result<(), AppError> {
    let group = registry.group(GROUP_NAME)?;

    if config.api_path.is_empty() {
        config.api_path = DEFAULT_API_PATH.to_string();
    }
    if config.user_agent.is_empty() {
        config.user_agent = default_user_agent();
    }
    let group_matches = config
        .group_version
        .as_ref()
        .is_some_and(|gv| gv.group == group.group_version.group);
    if !group_matches {
        debug!("Using group-version {}", group.group_version);
        config.group_version = Some(group.group_version.clone());
    }
    if config.negotiated_serializer.is_none() {
        config.negotiated_serializer = Some(codecs());
    }
    if config.qps == 0.0 {
        config.qps = DEFAULT_QPS;
    }
    if config.burst == 0 {
        config.burst = DEFAULT_BURST;
    }

    Ok(())
}
