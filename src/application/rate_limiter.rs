/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Rate limiter module for client-side request throttling
//!
//! This module provides a token bucket using the `governor` crate, sized
//! from the QPS and burst of a REST config.

use crate::constants::{DEFAULT_BURST, DEFAULT_QPS, MAX_RATE_LIMIT_PERIOD_SECS};
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Token bucket shared by every request of one transport
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
    qps: f32,
    burst: u32,
}

impl RateLimiter {
    /// Creates a limiter refilling `qps` tokens per second with room for `burst`
    ///
    /// Non-positive or non-finite `qps` falls back to the default of 5 and a
    /// zero `burst` to the default of 10. The interval between tokens is
    /// capped at [`MAX_RATE_LIMIT_PERIOD_SECS`].
    ///
    /// # Example
    ///
    /// ```ignore
    /// use kops_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::from_qps(5.0, 10);
    /// limiter.wait().await;
    /// ```
    #[must_use]
    pub fn from_qps(qps: f32, burst: u32) -> Self {
        let qps = if qps.is_finite() && qps > 0.0 {
            qps
        } else {
            DEFAULT_QPS
        };
        let burst_size = NonZeroU32::new(burst)
            .unwrap_or_else(|| NonZeroU32::new(DEFAULT_BURST).unwrap_or(NonZeroU32::MIN));

        // One token every 1/qps seconds; governor rejects a zero period.
        let max_period = Duration::from_secs(MAX_RATE_LIMIT_PERIOD_SECS);
        let period = Duration::try_from_secs_f64(1.0 / f64::from(qps))
            .unwrap_or(max_period)
            .clamp(Duration::from_nanos(1), max_period);
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            qps,
            burst: burst_size.get(),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a token if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }

    /// Sustained requests per second
    #[must_use]
    pub fn qps(&self) -> f32 {
        self.qps
    }

    /// Requests allowed above the sustained rate
    #[must_use]
    pub fn burst(&self) -> u32 {
        self.burst
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("qps", &self.qps)
            .field("burst", &self.burst)
            .finish()
    }
}
