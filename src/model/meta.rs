/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Object metadata, list envelopes, options and status shared by every
//! resource of the group

use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `apiVersion` and `kind` of a serialized object
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// Group-version of the object, e.g. `kops/v1alpha2`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    /// Kind of the object, e.g. `Cluster`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// Metadata every persisted object carries
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Unique name within the namespace
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Prefix the server uses to generate a name when `name` is empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generate_name: String,
    /// Namespace the object lives in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Server-assigned unique identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    /// Opaque version used for optimistic concurrency
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    /// Sequence number of the desired state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
    /// Time the object was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    /// Time the object was marked for deletion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<DateTime<Utc>>,
    /// Labels used for selection
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Non-identifying annotations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Metadata with only the name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Metadata of a list response
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Version of the collection at the time of the list
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    /// Token for fetching the next page
    #[serde(default, rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continue_token: Option<String>,
}

/// List envelope returned by collection endpoints
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectList<K> {
    /// Type information of the list itself
    #[serde(flatten)]
    pub types: TypeMeta,
    /// List metadata
    #[serde(default)]
    pub metadata: ListMeta,
    /// Items of the collection
    #[serde(default = "Vec::new")]
    pub items: Vec<K>,
}

/// Failure description returned by the API server
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// `Success` or `Failure`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Human readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine readable reason, e.g. `NotFound` or `AlreadyExists`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// HTTP status code
    #[serde(default)]
    pub code: u16,
}

/// Query options of list and watch calls
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Label selector, e.g. `role=node`
    pub label_selector: Option<String>,
    /// Field selector, e.g. `metadata.name=prod`
    pub field_selector: Option<String>,
    /// Version to list or watch from
    pub resource_version: Option<String>,
    /// Server side timeout for the call
    pub timeout_seconds: Option<u64>,
    /// Maximum number of items per page
    pub limit: Option<u32>,
    /// Continue token from a previous page
    pub continue_token: Option<String>,
}

impl ListOptions {
    /// Query parameters in the form the API server expects
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(selector) = &self.label_selector {
            query.push(("labelSelector".to_string(), selector.clone()));
        }
        if let Some(selector) = &self.field_selector {
            query.push(("fieldSelector".to_string(), selector.clone()));
        }
        if let Some(version) = &self.resource_version {
            query.push(("resourceVersion".to_string(), version.clone()));
        }
        if let Some(timeout) = self.timeout_seconds {
            query.push(("timeoutSeconds".to_string(), timeout.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(token) = &self.continue_token {
            query.push(("continue".to_string(), token.clone()));
        }
        query
    }
}

/// Cascade policy applied to dependents on delete
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PropagationPolicy {
    /// Leave dependents alone
    Orphan,
    /// Delete dependents in the background
    Background,
    /// Delete dependents before the owner
    Foreground,
}

/// Guards evaluated by the server before deleting
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preconditions {
    /// Expected UID of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Expected resource version of the object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
}

/// Body of delete calls
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOptions {
    /// Seconds before the object is deleted; zero means immediately
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grace_period_seconds: Option<i64>,
    /// Conditions the object must still meet for the delete to proceed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preconditions: Option<Preconditions>,
    /// How dependents are handled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propagation_policy: Option<PropagationPolicy>,
}

/// Kind of patch document sent to a patch call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchType {
    /// RFC 6902 JSON patch
    Json,
    /// RFC 7386 JSON merge patch
    Merge,
    /// Kubernetes strategic merge patch
    StrategicMerge,
}

impl PatchType {
    /// Media type sent as `Content-Type`
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self {
            PatchType::Json => "application/json-patch+json",
            PatchType::Merge => "application/merge-patch+json",
            PatchType::StrategicMerge => "application/strategic-merge-patch+json",
        }
    }
}

/// One event of a watch stream
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", content = "object")]
pub enum WatchEvent<K> {
    /// Object was created
    #[serde(rename = "ADDED")]
    Added(K),
    /// Object was changed
    #[serde(rename = "MODIFIED")]
    Modified(K),
    /// Object was deleted
    #[serde(rename = "DELETED")]
    Deleted(K),
    /// Progress marker carrying only a resource version
    #[serde(rename = "BOOKMARK")]
    Bookmark(serde_json::Value),
    /// The server ended the watch with an error
    #[serde(rename = "ERROR")]
    Error(Status),
}
