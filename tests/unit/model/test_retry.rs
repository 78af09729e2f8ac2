use kops_client::model::retry::RetryConfig;
use std::time::Duration;

#[test]
fn test_retry_defaults() {
    let config = RetryConfig {
        max_retry_count: None,
        retry_delay_secs: None,
    };
    assert_eq!(config.max_retries(), 10);
    assert_eq!(config.delay(None), Duration::from_secs(1));
}

#[test]
fn test_retry_after_wins_over_configured_delay() {
    let config = RetryConfig::with_max_retries_and_delay(3, 7);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay(None), Duration::from_secs(7));
    assert_eq!(config.delay(Some(2)), Duration::from_secs(2));
}

#[test]
fn test_retry_disabled() {
    let config = RetryConfig::disabled();
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay(None), Duration::ZERO);
}

#[test]
fn test_retry_with_max_retries_keeps_default_delay() {
    let config = RetryConfig::with_max_retries(4);
    assert_eq!(config.max_retries(), 4);
    assert_eq!(config.delay(None), Duration::from_secs(1));
}

#[test]
fn test_retry_after_is_capped() {
    let config = RetryConfig::with_max_retries_and_delay(3, 1);
    assert_eq!(config.delay(Some(999_999_999)), Duration::from_secs(60));
    assert_eq!(config.delay(Some(60)), Duration::from_secs(60));
    assert_eq!(config.delay(Some(59)), Duration::from_secs(59));
}
