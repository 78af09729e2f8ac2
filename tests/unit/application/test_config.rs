use kops_client::application::config::RestConfig;
use kops_client::model::scheme::GroupVersion;
use std::env;

#[test]
fn test_rest_config_from_env() {
    unsafe {
        env::set_var("KOPS_API_HOST", "https://kops.example.com:8443");
        env::set_var("KOPS_API_GROUP_VERSION", "kops/v1alpha1");
        env::set_var("KOPS_API_QPS", "12.5");
        env::set_var("KOPS_API_BURST", "25");
        env::set_var("KOPS_API_INSECURE", "true");
        env::set_var("KOPS_API_TOKEN", "token-123");
        env::set_var("KOPS_API_TIMEOUT", "not-a-number");
    }

    let config = RestConfig::from_env();

    unsafe {
        for var in [
            "KOPS_API_HOST",
            "KOPS_API_GROUP_VERSION",
            "KOPS_API_QPS",
            "KOPS_API_BURST",
            "KOPS_API_INSECURE",
            "KOPS_API_TOKEN",
            "KOPS_API_TIMEOUT",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.host, "https://kops.example.com:8443");
    assert_eq!(
        config.group_version,
        Some(GroupVersion::new("kops", "v1alpha1"))
    );
    assert_eq!(config.qps, 12.5);
    assert_eq!(config.burst, 25);
    assert!(config.insecure);
    assert_eq!(config.credentials.bearer_token.as_deref(), Some("token-123"));
    assert_eq!(config.timeout, 30);
    assert!(config.api_path.is_empty());
}

#[test]
fn test_rest_config_serialization_round_trip() {
    let mut config = RestConfig::new("https://api.example.com").with_basic_auth("admin", "pw");
    config.group_version = Some(GroupVersion::new("kops", "v1alpha2"));
    config.qps = 3.0;

    let json = serde_json::to_string(&config).unwrap();
    let restored: RestConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.host, config.host);
    assert_eq!(restored.group_version, config.group_version);
    assert_eq!(restored.qps, 3.0);
    assert_eq!(restored.credentials.username.as_deref(), Some("admin"));
    assert_eq!(restored.credentials.password, None);
    assert!(restored.negotiated_serializer.is_none());
}

#[test]
fn test_rest_config_display() {
    let config = RestConfig::new("https://api.example.com");
    let shown = format!("{config}");
    assert!(shown.contains("https://api.example.com"));
}
