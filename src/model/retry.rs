/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS, MAX_RETRY_AFTER_SECS};
use crate::utils::config::get_env_or_none;
use std::time::Duration;

/// Retry behaviour for throttled (429) and unavailable (503) responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries (None = use the default of 10)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds when the server sends no `Retry-After` (None = 1 second)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Retry configuration read from `KOPS_MAX_RETRY_COUNT` and `KOPS_RETRY_DELAY_SECS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Never retries; the first throttled response is returned as an error
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_max_retries_and_delay(0, 0)
    }

    /// Retries up to `max_retries` times with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Retries up to `max_retries` times waiting `delay_secs` when no `Retry-After` is sent
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Effective maximum number of retries
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(DEFAULT_MAX_RETRIES)
    }

    /// Delay before the next attempt, preferring the server's `Retry-After` seconds
    ///
    /// `Retry-After` is capped at [`MAX_RETRY_AFTER_SECS`].
    #[must_use]
    pub fn delay(&self, retry_after: Option<u64>) -> Duration {
        match retry_after {
            Some(secs) => Duration::from_secs(secs.min(MAX_RETRY_AFTER_SECS)),
            None => Duration::from_secs(self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_count: get_env_or_none("KOPS_MAX_RETRY_COUNT"),
            retry_delay_secs: get_env_or_none("KOPS_RETRY_DELAY_SECS"),
        }
    }
}
