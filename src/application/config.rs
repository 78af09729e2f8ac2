use crate::constants::{CLIENT_VERSION, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS};
use crate::model::retry::RetryConfig;
use crate::model::scheme::{CodecFactory, GroupVersion};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
/// Credentials sent with every request
pub struct Credentials {
    /// Bearer token, takes precedence over basic auth
    #[serde(default, skip_serializing)]
    pub bearer_token: Option<String>,
    /// Basic auth username
    #[serde(default)]
    pub username: Option<String>,
    /// Basic auth password
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Connection settings for the API server
///
/// Zero values (`qps == 0.0`, `burst == 0`, empty `api_path`/`user_agent`)
/// and `None` mean unset; they are filled in by
/// [`crate::application::client::set_config_defaults`].
pub struct RestConfig {
    /// Scheme, host and optional port of the API server
    pub host: String,
    /// Path prefix of the API, e.g. `/apis`
    #[serde(default)]
    pub api_path: String,
    /// Group-version requests are routed to
    #[serde(default)]
    pub group_version: Option<GroupVersion>,
    /// Wire encoding selector
    #[serde(skip)]
    pub negotiated_serializer: Option<CodecFactory>,
    /// Media type of request bodies and preferred responses, empty = serializer default
    #[serde(default)]
    pub content_type: String,
    /// `User-Agent` header value
    #[serde(default)]
    pub user_agent: String,
    /// Sustained requests per second; negative disables rate limiting
    #[serde(default)]
    pub qps: f32,
    /// Requests allowed above the sustained rate
    #[serde(default)]
    pub burst: u32,
    /// Request timeout in seconds, 0 disables the timeout
    #[serde(default)]
    pub timeout: u64,
    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,
    /// Authentication
    #[serde(default)]
    pub credentials: Credentials,
    /// Retry behaviour on 429/503
    #[serde(skip)]
    pub retry: Option<RetryConfig>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RestConfig {
    /// Config for `host` with every defaultable field left unset
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_path: String::new(),
            group_version: None,
            negotiated_serializer: None,
            content_type: String::new(),
            user_agent: String::new(),
            qps: 0.0,
            burst: 0,
            timeout: DEFAULT_TIMEOUT_SECS,
            insecure: false,
            credentials: Credentials::default(),
            retry: None,
        }
    }

    /// Config read from the environment, after loading `.env` if present
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `KOPS_API_HOST` | `host` |
    /// | `KOPS_API_PATH` | `api_path` |
    /// | `KOPS_API_GROUP_VERSION` | `group_version` |
    /// | `KOPS_API_USER_AGENT` | `user_agent` |
    /// | `KOPS_API_QPS` | `qps` |
    /// | `KOPS_API_BURST` | `burst` |
    /// | `KOPS_API_TIMEOUT` | `timeout` |
    /// | `KOPS_API_INSECURE` | `insecure` |
    /// | `KOPS_API_TOKEN` | `credentials.bearer_token` |
    /// | `KOPS_API_USERNAME` | `credentials.username` |
    /// | `KOPS_API_PASSWORD` | `credentials.password` |
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Self {
            host: get_env_or_default("KOPS_API_HOST", String::from(DEFAULT_HOST)),
            api_path: get_env_or_default("KOPS_API_PATH", String::new()),
            group_version: get_env_or_none("KOPS_API_GROUP_VERSION"),
            negotiated_serializer: None,
            content_type: String::new(),
            user_agent: get_env_or_default("KOPS_API_USER_AGENT", String::new()),
            qps: get_env_or_default("KOPS_API_QPS", 0.0),
            burst: get_env_or_default("KOPS_API_BURST", 0),
            timeout: get_env_or_default("KOPS_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            insecure: get_env_or_default("KOPS_API_INSECURE", false),
            credentials: Credentials {
                bearer_token: get_env_or_none("KOPS_API_TOKEN"),
                username: get_env_or_none("KOPS_API_USERNAME"),
                password: get_env_or_none("KOPS_API_PASSWORD"),
            },
            retry: None,
        }
    }

    /// Sets a bearer token
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.bearer_token = Some(token.into());
        self
    }

    /// Sets basic auth credentials
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.username = Some(username.into());
        self.credentials.password = Some(password.into());
        self
    }

    /// Sets the retry behaviour
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

/// User agent sent when the config does not set one
///
/// Format: `{binary}/{version} ({os}/{arch}) kops-client`
#[must_use]
pub fn default_user_agent() -> String {
    let binary = env::args()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| String::from("unknown"));
    format!(
        "{}/{} ({}/{}) kops-client",
        binary,
        CLIENT_VERSION,
        env::consts::OS,
        env::consts::ARCH
    )
}
