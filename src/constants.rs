/// Name of the API group served by this client
pub const GROUP_NAME: &str = "kops";
/// Preferred version of the kops API group
pub const GROUP_PREFERRED_VERSION: &str = "v1alpha2";
/// Older version of the kops API group still served by the API server
pub const GROUP_LEGACY_VERSION: &str = "v1alpha1";
/// Path prefix for named API groups
pub const DEFAULT_API_PATH: &str = "/apis";
/// Default sustained queries per second applied when the config leaves it unset
pub const DEFAULT_QPS: f32 = 5.0;
/// Default burst applied when the config leaves it unset
pub const DEFAULT_BURST: u32 = 10;
/// Default API server address used when `KOPS_API_HOST` is not set
pub const DEFAULT_HOST: &str = "http://127.0.0.1:8080";
/// Default request timeout in seconds (0 disables the timeout)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Media type for JSON request and response bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Maximum number of retries when the server answers 429 or 503
pub const DEFAULT_MAX_RETRIES: u32 = 10;
/// Delay in seconds between retries when the server sends no `Retry-After`
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
/// Upper bound in seconds on a server supplied `Retry-After`
pub const MAX_RETRY_AFTER_SECS: u64 = 60;
/// Longest interval in seconds between two rate limiter tokens
pub const MAX_RATE_LIMIT_PERIOD_SECS: u64 = 3600;
/// Version reported in the default user agent
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
