/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Resources of the kops API group

use crate::model::meta::{ObjectMeta, TypeMeta};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A persisted object of the kops group that a typed client can manage
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Kind written to the `kind` field
    const KIND: &'static str;
    /// Lower-case plural used in request paths
    const PLURAL: &'static str;

    /// Type information of the object
    fn types_mut(&mut self) -> &mut TypeMeta;
    /// Object metadata
    fn metadata(&self) -> &ObjectMeta;
}

macro_rules! impl_resource {
    ($ty:ty, $kind:literal, $plural:literal) => {
        impl Resource for $ty {
            const KIND: &'static str = $kind;
            const PLURAL: &'static str = $plural;

            fn types_mut(&mut self) -> &mut TypeMeta {
                &mut self.types
            }

            fn metadata(&self) -> &ObjectMeta {
                &self.metadata
            }
        }
    };
}

/// A kubernetes cluster managed by kops
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Type information
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state
    #[serde(default)]
    pub spec: ClusterSpec,
}

/// Desired state of a cluster
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Channel the cluster follows for component versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Base location of the cluster's configuration in the state store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_base: Option<String>,
    /// Cloud provider, e.g. `aws` or `gce`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    /// Kubernetes version to install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
    /// DNS name of the API endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_public_name: Option<String>,
    /// CIDR of the cluster network
    #[serde(default, rename = "networkCIDR", skip_serializing_if = "Option::is_none")]
    pub network_cidr: Option<String>,
    /// Existing network to install into
    #[serde(default, rename = "networkID", skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    /// DNS zone records are published in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_zone: Option<String>,
    /// Subnets the cluster spans
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<ClusterSubnetSpec>,
    /// Public or private layout of masters and nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<TopologySpec>,
    /// CIDRs allowed to reach SSH
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_access: Vec<String>,
    /// CIDRs allowed to reach the API
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kubernetes_api_access: Vec<String>,
    /// etcd clusters backing the control plane
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub etcd_clusters: Vec<EtcdClusterSpec>,
}

/// Kind of a cluster subnet
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SubnetType {
    /// Routed to an internet gateway
    Public,
    /// Routed through NAT
    Private,
    /// Public subnet used for NAT and load balancers of private topologies
    Utility,
}

/// One subnet of a cluster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSubnetSpec {
    /// Subnet name referenced by instance groups
    pub name: String,
    /// Availability zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    /// Address range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    /// Routing kind
    #[serde(rename = "type")]
    pub subnet_type: SubnetType,
}

/// Network layout of masters and nodes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopologySpec {
    /// `public` or `private`
    pub masters: String,
    /// `public` or `private`
    pub nodes: String,
}

/// An etcd cluster of the control plane
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EtcdClusterSpec {
    /// Cluster name, usually `main` or `events`
    pub name: String,
    /// Members, one per master
    #[serde(default)]
    pub etcd_members: Vec<EtcdMemberSpec>,
}

/// One member of an etcd cluster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EtcdMemberSpec {
    /// Member name
    pub name: String,
    /// Instance group hosting the member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_group: Option<String>,
    /// Whether the data volume is encrypted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_volume: Option<bool>,
}

/// A federation of clusters
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Federation {
    /// Type information
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state
    #[serde(default)]
    pub spec: FederationSpec,
}

/// Desired state of a federation
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FederationSpec {
    /// Clusters running the federation control plane
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controllers: Vec<String>,
    /// Clusters joined to the federation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
    /// DNS zone used for federated services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_zone: Option<String>,
    /// Namespace the control plane runs in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A group of identically configured instances
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroup {
    /// Type information
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state
    #[serde(default)]
    pub spec: InstanceGroupSpec,
}

/// Role instances of a group play in the cluster
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceGroupRole {
    /// Control plane
    Master,
    /// Worker
    #[default]
    Node,
    /// SSH jump host
    Bastion,
}

/// A taint applied to nodes of a group
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Taint {
    /// Taint key
    pub key: String,
    /// Taint value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// `NoSchedule`, `PreferNoSchedule` or `NoExecute`
    pub effect: String,
}

/// Desired state of an instance group
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceGroupSpec {
    /// Role of the instances
    #[serde(default)]
    pub role: InstanceGroupRole,
    /// Machine image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Minimum number of instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    /// Maximum number of instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    /// Machine type, e.g. `t2.medium`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,
    /// Root volume size in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_volume_size: Option<i32>,
    /// Cluster subnets the instances are placed in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnets: Vec<String>,
    /// Labels applied to the kubernetes nodes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_labels: BTreeMap<String, String>,
    /// Tags applied to the cloud instances
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cloud_labels: BTreeMap<String, String>,
    /// Taints applied to the kubernetes nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<Taint>,
    /// Whether instances get a public IP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associate_public_ip: Option<bool>,
    /// Maximum spot price, when using spot instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

/// A set of keys or secrets stored by kops
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Keyset {
    /// Type information
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state
    #[serde(default)]
    pub spec: KeysetSpec,
}

/// What the items of a keyset are
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeysetType {
    /// Certificate and private key pairs
    #[default]
    Keypair,
    /// Opaque secrets
    Secret,
}

/// Desired state of a keyset
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeysetSpec {
    /// Kind of item held
    #[serde(default, rename = "type")]
    pub keyset_type: KeysetType,
    /// Items, one per key rotation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeysetItem>,
}

/// One key of a keyset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeysetItem {
    /// Identifier of the item
    pub id: String,
    /// Base64 encoded public material, e.g. a certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_material: Option<String>,
    /// Base64 encoded private material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_material: Option<String>,
}

/// An SSH public key installed on the cluster's instances
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SshCredential {
    /// Type information
    #[serde(flatten)]
    pub types: TypeMeta,
    /// Object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// Desired state
    #[serde(default)]
    pub spec: SshCredentialSpec,
}

/// Desired state of an SSH credential
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SshCredentialSpec {
    /// Public key in OpenSSH authorized_keys format
    #[serde(default)]
    pub public_key: String,
}

impl_resource!(Cluster, "Cluster", "clusters");
impl_resource!(Federation, "Federation", "federations");
impl_resource!(InstanceGroup, "InstanceGroup", "instancegroups");
impl_resource!(Keyset, "Keyset", "keysets");
impl_resource!(SshCredential, "SSHCredential", "sshcredentials");
