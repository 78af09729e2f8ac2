use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::request::Request;
use crate::model::scheme::{CodecFactory, GroupVersion};
use async_trait::async_trait;

/// Transport that issues requests against one group-version of the API server
#[async_trait]
pub trait RestInterface: Send + Sync {
    /// Group-version requests are routed to
    fn api_version(&self) -> &GroupVersion;

    /// Serializer used to encode request bodies and decode responses
    fn codecs(&self) -> &CodecFactory;

    /// Media type used for bodies sent and received
    fn content_type(&self) -> &str;

    /// Client-side rate limiter, `None` when rate limiting is disabled
    fn rate_limiter(&self) -> Option<RateLimiter>;

    /// Sends the request and returns the body of a successful response
    async fn execute(&self, request: Request) -> Result<Vec<u8>, AppError>;

    /// Sends the request and hands back the open response for streaming
    async fn stream(&self, request: Request) -> Result<reqwest::Response, AppError>;
}
