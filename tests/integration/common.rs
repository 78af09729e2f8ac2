// Common utilities for integration tests

use kops_client::prelude::*;

/// Client pointed at a mock server, without client-side throttling
pub fn create_test_client(server_url: &str) -> KopsClient {
    setup_logger();
    let mut config = RestConfig::new(server_url)
        .with_bearer_token("test-token")
        .with_retry(RetryConfig::with_max_retries_and_delay(2, 0));
    config.qps = -1.0;
    new_for_config(&config).expect("Failed to create client")
}

/// Status body as the API server returns it
pub fn status_body(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}
