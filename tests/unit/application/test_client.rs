use kops_client::application::client::{
    KopsClient, new_for_config, new_for_config_or_die, new_for_config_with_registry,
    rest_client_of, set_config_defaults,
};
use kops_client::application::config::RestConfig;
use kops_client::application::interfaces::kops::KopsInterface;
use kops_client::application::interfaces::rest::RestInterface;
use kops_client::error::AppError;
use kops_client::model::scheme::{GroupVersion, REGISTRY, Registry};
use std::sync::Arc;

const HOST: &str = "https://api.example.com";

#[test]
fn effective_qps_and_burst_default_when_unset() {
    let client = new_for_config(&RestConfig::new(HOST)).expect("client");
    let limiter = client.rest_client().rate_limiter().expect("rate limiter");
    assert_eq!(limiter.qps(), 5.0);
    assert_eq!(limiter.burst(), 10);
}

#[test]
fn explicit_qps_and_burst_reach_the_transport() {
    let mut config = RestConfig::new(HOST);
    config.qps = 20.0;
    config.burst = 40;
    let client = new_for_config(&config).expect("client");
    let limiter = client.rest_client().rate_limiter().expect("rate limiter");
    assert_eq!(limiter.qps(), 20.0);
    assert_eq!(limiter.burst(), 40);
}

#[test]
fn preset_user_agent_is_preserved() {
    let mut config = RestConfig::new(HOST);
    config.user_agent = "kops/1.8.0 (linux/amd64)".to_string();
    set_config_defaults(&mut config, &REGISTRY).unwrap();
    assert_eq!(config.user_agent, "kops/1.8.0 (linux/amd64)");
}

#[test]
fn group_version_of_target_group_is_untouched() {
    let client = {
        let mut config = RestConfig::new(HOST);
        config.group_version = Some(GroupVersion::new("kops", "v1alpha1"));
        new_for_config(&config).expect("client")
    };
    assert_eq!(
        client.rest_client().api_version(),
        &GroupVersion::new("kops", "v1alpha1")
    );
}

#[test]
fn group_version_of_other_group_is_overwritten() {
    let mut config = RestConfig::new(HOST);
    config.group_version = Some(GroupVersion::new("extensions", "v1beta1"));
    let client = new_for_config(&config).expect("client");
    assert_eq!(
        client.rest_client().api_version(),
        &GroupVersion::new("kops", "v1alpha2")
    );
}

#[test]
fn caller_config_is_not_mutated() {
    let config = RestConfig::new(HOST);
    let _client = new_for_config(&config).expect("client");
    assert!(config.api_path.is_empty());
    assert_eq!(config.qps, 0.0);
    assert!(config.group_version.is_none());
}

#[test]
fn unregistered_group_returns_error_and_no_client() {
    let result = new_for_config_with_registry(&RestConfig::new(HOST), &Registry::new());
    match result {
        Err(AppError::GroupNotRegistered(group)) => assert_eq!(group, "kops"),
        other => panic!("Unexpected result: {:?}", other.map(|_| ())),
    }
}

#[test]
fn invalid_host_fails_transport_construction() {
    let err = new_for_config(&RestConfig::new("api.example.com")).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfig(_)));
}

#[test]
#[should_panic(expected = "failed to create kops client")]
fn or_die_panics_on_invalid_config() {
    let _ = new_for_config_or_die(&RestConfig::new("::not a url::"));
}

#[test]
fn or_die_returns_client_for_valid_config() {
    let client = new_for_config_or_die(&RestConfig::new(HOST));
    assert!(rest_client_of(Some(&client)).is_some());
}

#[test]
fn rest_client_of_absent_client_is_none() {
    assert!(rest_client_of(None).is_none());
}

#[test]
fn new_wraps_existing_transport() {
    let built = new_for_config(&RestConfig::new(HOST)).expect("client");
    let transport = built.rest_client();
    let wrapped = KopsClient::new(transport.clone());
    assert!(Arc::ptr_eq(&wrapped.rest_client(), &transport));
}

#[test]
fn sub_clients_are_bound_to_namespace() {
    let client = new_for_config(&RestConfig::new(HOST)).expect("client");
    assert_eq!(client.clusters("prod").namespace(), "prod");
    assert_eq!(client.federations("").namespace(), "");
    assert_eq!(client.instance_groups("prod").namespace(), "prod");
    assert_eq!(client.keysets("staging").namespace(), "staging");
    assert_eq!(client.ssh_credentials("prod").namespace(), "prod");
}

#[test]
fn tiny_positive_qps_is_a_config_error() {
    let mut config = RestConfig::new(HOST);
    config.qps = 1e-20;
    let result = std::panic::catch_unwind(|| new_for_config(&config));
    match result {
        Ok(Err(AppError::InvalidConfig(_))) => {}
        Ok(other) => panic!("Unexpected result: {:?}", other.map(|_| ())),
        Err(_) => panic!("client construction panicked"),
    }
}
