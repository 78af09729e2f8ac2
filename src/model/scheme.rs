/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Group registry and codecs
//!
//! The registry answers which API groups this client knows about and which
//! group-version each of them prefers. The codec factory is the negotiated
//! serializer handed to the REST transport: it decides the media type sent
//! in `Accept`/`Content-Type` and encodes and decodes bodies.

use crate::constants::{
    CONTENT_TYPE_JSON, GROUP_LEGACY_VERSION, GROUP_NAME, GROUP_PREFERRED_VERSION,
};
use crate::error::AppError;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// API group name paired with a version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersion {
    /// Group name, empty for the legacy core group
    pub group: String,
    /// Version string, e.g. `v1alpha2`
    pub version: String,
}

impl GroupVersion {
    /// Creates a group-version from its parts
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

impl FromStr for GroupVersion {
    type Err = AppError;

    /// Parses `group/version`, or a bare `version` for the core group
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::InvalidInput("empty group-version".to_string()));
        }
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(version), None, None) => Ok(Self::new("", version)),
            (Some(group), Some(version), None) if !group.is_empty() && !version.is_empty() => {
                Ok(Self::new(group, version))
            }
            _ => Err(AppError::InvalidInput(format!(
                "unexpected group-version string: {s}"
            ))),
        }
    }
}

impl Serialize for GroupVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GroupVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Registration of one API group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMeta {
    /// Preferred group-version
    pub group_version: GroupVersion,
    /// Every version the group serves, preferred first
    pub group_versions: Vec<GroupVersion>,
}

/// Known API groups
#[derive(Debug, Clone, Default)]
pub struct Registry {
    groups: HashMap<String, GroupMeta>,
}

impl Registry {
    /// An empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group with its versions, the first one being preferred
    ///
    /// Registering the same group twice replaces the earlier entry.
    pub fn register(&mut self, group: &str, versions: &[&str]) -> Result<(), AppError> {
        let group_versions: Vec<GroupVersion> = versions
            .iter()
            .map(|version| GroupVersion::new(group, *version))
            .collect();
        let group_version = group_versions.first().cloned().ok_or_else(|| {
            AppError::InvalidInput(format!("group {group} registered without versions"))
        })?;
        self.groups.insert(
            group.to_string(),
            GroupMeta {
                group_version,
                group_versions,
            },
        );
        Ok(())
    }

    /// Looks a group up by name
    pub fn group(&self, name: &str) -> Result<&GroupMeta, AppError> {
        self.groups
            .get(name)
            .ok_or_else(|| AppError::GroupNotRegistered(name.to_string()))
    }

    /// Whether the group is known
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }
}

/// Process-wide registry with the kops group installed
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    let _ = registry.register(GROUP_NAME, &[GROUP_PREFERRED_VERSION, GROUP_LEGACY_VERSION]);
    registry
});

/// One wire encoding a codec factory can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerInfo {
    /// Media type, e.g. `application/json`
    pub media_type: &'static str,
}

/// Negotiated serializer: picks a wire encoding by media type and
/// encodes or decodes bodies with it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecFactory {
    serializers: Vec<SerializerInfo>,
}

impl Default for CodecFactory {
    fn default() -> Self {
        Self {
            serializers: vec![SerializerInfo {
                media_type: CONTENT_TYPE_JSON,
            }],
        }
    }
}

impl CodecFactory {
    /// Media types this factory can encode and decode
    pub fn supported_media_types(&self) -> Vec<&'static str> {
        self.serializers.iter().map(|info| info.media_type).collect()
    }

    /// Picks the serializer matching an `Accept`/`Content-Type` value
    ///
    /// Accepts comma separated lists, media type parameters and the
    /// `*/*` and `type/*` wildcards. An empty value selects the default.
    pub fn negotiate(&self, accept: &str) -> Option<&SerializerInfo> {
        if accept.trim().is_empty() {
            return self.serializers.first();
        }
        accept
            .split(',')
            .map(|candidate| {
                candidate
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase()
            })
            .find_map(|wanted| {
                self.serializers
                    .iter()
                    .find(|info| media_type_matches(&wanted, info.media_type))
            })
    }

    /// Encodes a body with the serializer selected by `media_type`
    pub fn encode<T: Serialize>(&self, media_type: &str, value: &T) -> Result<Vec<u8>, AppError> {
        self.negotiate(media_type)
            .ok_or_else(|| AppError::UnsupportedMediaType(media_type.to_string()))?;
        Ok(serde_json::to_vec(value)?)
    }

    /// Decodes a body with the serializer selected by `media_type`
    pub fn decode<T: DeserializeOwned>(&self, media_type: &str, body: &[u8]) -> Result<T, AppError> {
        self.negotiate(media_type)
            .ok_or_else(|| AppError::UnsupportedMediaType(media_type.to_string()))?;
        Ok(serde_json::from_slice(body)?)
    }
}

fn media_type_matches(wanted: &str, offered: &str) -> bool {
    if wanted == "*/*" || wanted == offered {
        return true;
    }
    match wanted.strip_suffix("/*") {
        Some(kind) => offered.split('/').next() == Some(kind),
        None => false,
    }
}

/// Codec factory of the kops group
#[must_use]
pub fn codecs() -> CodecFactory {
    CodecFactory::default()
}
