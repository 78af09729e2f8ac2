/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::config::{Credentials, RestConfig, default_user_agent};
use crate::application::interfaces::rest::RestInterface;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::MAX_RATE_LIMIT_PERIOD_SECS;
use crate::error::AppError;
use crate::model::meta::Status;
use crate::model::request::Request;
use crate::model::retry::RetryConfig;
use crate::model::scheme::{CodecFactory, GroupVersion};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Method, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, error, warn};

/// REST transport for one group-version of the API server
///
/// Built from a fully defaulted [`RestConfig`]; every request waits on the
/// shared rate limiter, carries the configured credentials and is retried
/// while the server throttles.
pub struct RestClient {
    base_url: String,
    api_path: String,
    group_version: GroupVersion,
    codecs: CodecFactory,
    content_type: String,
    credentials: Credentials,
    http_client: Client,
    rate_limiter: Option<RateLimiter>,
    retry: RetryConfig,
}

impl RestClient {
    /// Builds a transport from a config
    ///
    /// # Returns
    /// * `Ok(RestClient)` - transport ready to use
    /// * `Err(AppError::InvalidConfig)` - if the host is not an absolute URL,
    ///   the group-version or serializer is missing, the QPS is not a number
    ///   or the content type cannot be negotiated
    pub fn for_config(config: &RestConfig) -> Result<Self, AppError> {
        let host = config.host.trim();
        let url = Url::parse(host)
            .map_err(|e| AppError::InvalidConfig(format!("host {host:?} is not a valid URL: {e}")))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidConfig(format!(
                "host {host:?} must be an http or https URL"
            )));
        }
        let group_version = config
            .group_version
            .clone()
            .ok_or_else(|| AppError::InvalidConfig("group_version is required".to_string()))?;
        let codecs = config.negotiated_serializer.clone().ok_or_else(|| {
            AppError::InvalidConfig("negotiated_serializer is required".to_string())
        })?;
        if !config.qps.is_finite() {
            return Err(AppError::InvalidConfig(format!(
                "qps must be a finite number, got {}",
                config.qps
            )));
        }
        if config.qps > 0.0 && f64::from(config.qps) * (MAX_RATE_LIMIT_PERIOD_SECS as f64) < 1.0 {
            return Err(AppError::InvalidConfig(format!(
                "qps {} allows less than one request every {MAX_RATE_LIMIT_PERIOD_SECS}s",
                config.qps
            )));
        }
        let content_type = match codecs.negotiate(&config.content_type) {
            Some(info) => info.media_type.to_string(),
            None => {
                return Err(AppError::InvalidConfig(format!(
                    "content type {:?} is not supported by the serializer (supported: {})",
                    config.content_type,
                    codecs.supported_media_types().join(", ")
                )));
            }
        };

        let user_agent = if config.user_agent.is_empty() {
            default_user_agent()
        } else {
            config.user_agent.clone()
        };
        let mut builder = Client::builder()
            .user_agent(user_agent)
            .danger_accept_invalid_certs(config.insecure);
        if config.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout));
        }
        let http_client = builder.build()?;

        let rate_limiter = if config.qps < 0.0 {
            debug!("Client-side rate limiting disabled");
            None
        } else {
            Some(RateLimiter::from_qps(config.qps, config.burst))
        };

        Ok(Self {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            api_path: config.api_path.clone(),
            group_version,
            codecs,
            content_type,
            credentials: config.credentials.clone(),
            http_client,
            rate_limiter,
            retry: config.retry.clone().unwrap_or_default(),
        })
    }

    /// Absolute URL a request resolves to
    pub fn url_for(&self, request: &Request) -> Result<Url, AppError> {
        let path = request.path(&self.api_path, &self.group_version)?;
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| AppError::InvalidInput(format!("cannot build request URL: {e}")))?;
        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query());
        }
        Ok(url)
    }

    async fn send(&self, request: &Request) -> Result<Response, AppError> {
        let url = self.url_for(request)?;
        let body_type = request
            .content_type_override()
            .unwrap_or(self.content_type.as_str());
        let mut headers = vec![(ACCEPT.as_str(), self.content_type.as_str())];
        if request.payload().is_some() {
            headers.push((CONTENT_TYPE.as_str(), body_type));
        }

        make_http_request(
            &self.http_client,
            self.rate_limiter.as_ref(),
            request.verb().clone(),
            url,
            headers,
            &self.credentials,
            request.payload(),
            &self.retry,
        )
        .await
    }
}

#[async_trait]
impl RestInterface for RestClient {
    fn api_version(&self) -> &GroupVersion {
        &self.group_version
    }

    fn codecs(&self) -> &CodecFactory {
        &self.codecs
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn rate_limiter(&self) -> Option<RateLimiter> {
        self.rate_limiter.clone()
    }

    async fn execute(&self, request: Request) -> Result<Vec<u8>, AppError> {
        let response = self.send(&request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn stream(&self, request: Request) -> Result<Response, AppError> {
        self.send(&request).await
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("api_path", &self.api_path)
            .field("group_version", &self.group_version)
            .field("content_type", &self.content_type)
            .field("rate_limiter", &self.rate_limiter)
            .finish()
    }
}

/// Makes an HTTP request with client-side rate limiting and retry on throttling
///
/// Throttled (429) and unavailable (503) responses are retried, waiting the
/// server's `Retry-After` seconds or the configured delay, until the retry
/// budget is spent. Other failures are turned into [`AppError`]s: 401 into
/// `Unauthorized`, a `Status` body into `Api`, anything else into `Unexpected`.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Token bucket to wait on before every attempt
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `credentials` - Bearer token or basic auth to attach
/// * `body` - Optional encoded body
/// * `retry_config` - Retry budget and delay
#[allow(clippy::too_many_arguments)]
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Option<&RateLimiter>,
    method: Method,
    url: Url,
    headers: Vec<(&str, &str)>,
    credentials: &Credentials,
    body: Option<&[u8]>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count = 0;
    let max_retries = retry_config.max_retries();

    loop {
        if let Some(limiter) = rate_limiter {
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url.clone());
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(token) = &credentials.bearer_token {
            request = request.bearer_auth(token);
        } else if let Some(username) = &credentials.username {
            request = request.basic_auth(username, credentials.password.as_deref());
        }
        if let Some(b) = body {
            request = request.body(b.to_vec());
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
                if retry_count < max_retries =>
            {
                retry_count += 1;
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.trim().parse::<u64>().ok());
                let delay = retry_config.delay(retry_after);
                warn!(
                    "{} {} returned {} (attempt {}/{}), retrying in {:?}",
                    method, url, status, retry_count, max_retries, delay
                );
                tokio::time::sleep(delay).await;
            }
            StatusCode::TOO_MANY_REQUESTS => {
                error!(
                    "Rate limit exceeded after {} retries for {} {}",
                    retry_count, method, url
                );
                return Err(AppError::RateLimitExceeded);
            }
            StatusCode::UNAUTHORIZED => {
                let body_text = response.text().await.unwrap_or_default();
                error!("Unauthorized: {}", body_text);
                return Err(AppError::Unauthorized);
            }
            _ => {
                let body = response.bytes().await.unwrap_or_default();
                return Err(error_from_body(status, &body));
            }
        }
    }
}

/// Turns a failed response body into an error, preferring a `Status` object
fn error_from_body(status: StatusCode, body: &[u8]) -> AppError {
    let decoded = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .filter(|value| value.get("kind").and_then(|kind| kind.as_str()) == Some("Status"))
        .and_then(|value| serde_json::from_value::<Status>(value).ok());

    match decoded {
        Some(mut api_status) => {
            if api_status.code == 0 {
                api_status.code = status.as_u16();
            }
            debug!(
                "Request failed with status {}: {:?}",
                status, api_status.message
            );
            AppError::Api(Box::new(api_status))
        }
        None => {
            error!(
                "Request failed with status {}: {}",
                status,
                String::from_utf8_lossy(body)
            );
            AppError::Unexpected(status)
        }
    }
}
