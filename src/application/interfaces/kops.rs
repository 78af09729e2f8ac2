use crate::application::interfaces::rest::RestInterface;
use crate::application::typed::{Clusters, Federations, InstanceGroups, Keysets, SshCredentials};
use std::sync::Arc;

/// Interface of the kops group client
///
/// Every accessor hands out a sub-client bound to `namespace`; an empty
/// namespace addresses the cluster scoped collection.
pub trait KopsInterface: Send + Sync {
    /// Transport shared by every sub-client
    fn rest_client(&self) -> Arc<dyn RestInterface>;

    /// Client for `Cluster` objects
    fn clusters(&self, namespace: &str) -> Clusters;

    /// Client for `Federation` objects
    fn federations(&self, namespace: &str) -> Federations;

    /// Client for `InstanceGroup` objects
    fn instance_groups(&self, namespace: &str) -> InstanceGroups;

    /// Client for `Keyset` objects
    fn keysets(&self, namespace: &str) -> Keysets;

    /// Client for `SSHCredential` objects
    fn ssh_credentials(&self, namespace: &str) -> SshCredentials;
}
