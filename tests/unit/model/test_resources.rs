use assert_json_diff::assert_json_eq;
use kops_client::model::kops::{
    Cluster, ClusterSpec, ClusterSubnetSpec, Keyset, KeysetItem, KeysetSpec, KeysetType,
    SshCredential, SshCredentialSpec, SubnetType, TopologySpec,
};
use kops_client::model::meta::{
    DeleteOptions, ObjectList, ObjectMeta, Preconditions, PropagationPolicy, TypeMeta,
};
use serde_json::json;

#[test]
fn test_cluster_serializes_camel_case_and_skips_unset() {
    let cluster = Cluster {
        types: TypeMeta {
            api_version: "kops/v1alpha2".to_string(),
            kind: "Cluster".to_string(),
        },
        metadata: ObjectMeta::named("prod.example.com"),
        spec: ClusterSpec {
            cloud_provider: Some("aws".to_string()),
            kubernetes_version: Some("1.8.4".to_string()),
            network_cidr: Some("172.20.0.0/16".to_string()),
            subnets: vec![ClusterSubnetSpec {
                name: "us-east-1a".to_string(),
                zone: Some("us-east-1a".to_string()),
                cidr: Some("172.20.32.0/19".to_string()),
                subnet_type: SubnetType::Private,
            }],
            topology: Some(TopologySpec {
                masters: "private".to_string(),
                nodes: "private".to_string(),
            }),
            ..ClusterSpec::default()
        },
    };

    assert_json_eq!(
        serde_json::to_value(&cluster).unwrap(),
        json!({
            "apiVersion": "kops/v1alpha2",
            "kind": "Cluster",
            "metadata": { "name": "prod.example.com" },
            "spec": {
                "cloudProvider": "aws",
                "kubernetesVersion": "1.8.4",
                "networkCIDR": "172.20.0.0/16",
                "subnets": [{
                    "name": "us-east-1a",
                    "zone": "us-east-1a",
                    "cidr": "172.20.32.0/19",
                    "type": "Private"
                }],
                "topology": { "masters": "private", "nodes": "private" }
            }
        })
    );
}

#[test]
fn test_cluster_network_cidr_field_name() {
    let cluster = Cluster {
        spec: ClusterSpec {
            network_cidr: Some("10.0.0.0/16".to_string()),
            ..ClusterSpec::default()
        },
        ..Cluster::default()
    };
    let value = serde_json::to_value(&cluster).unwrap();
    assert_eq!(value["spec"]["networkCIDR"], "10.0.0.0/16");
    assert!(value.get("apiVersion").is_none());
}

#[test]
fn test_keyset_round_trips_items() {
    let raw = json!({
        "apiVersion": "kops/v1alpha2",
        "kind": "Keyset",
        "metadata": { "name": "ca", "namespace": "prod" },
        "spec": {
            "type": "Keypair",
            "keys": [{ "id": "6480420960431512837", "publicMaterial": "LS0tLS1CRUdJTg==" }]
        }
    });
    let keyset: Keyset = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(
        keyset.spec,
        KeysetSpec {
            keyset_type: KeysetType::Keypair,
            keys: vec![KeysetItem {
                id: "6480420960431512837".to_string(),
                public_material: Some("LS0tLS1CRUdJTg==".to_string()),
                private_material: None,
            }],
        }
    );
    assert_json_eq!(serde_json::to_value(&keyset).unwrap(), raw);
}

#[test]
fn test_ssh_credential_list_decodes() {
    let raw = json!({
        "apiVersion": "kops/v1alpha2",
        "kind": "SSHCredentialList",
        "metadata": { "resourceVersion": "42", "continue": "next-page" },
        "items": [{
            "metadata": { "name": "admin" },
            "spec": { "publicKey": "ssh-rsa AAAAB3Nza admin@example.com" }
        }]
    });
    let list: ObjectList<SshCredential> = serde_json::from_value(raw).unwrap();
    assert_eq!(list.types.kind, "SSHCredentialList");
    assert_eq!(list.metadata.resource_version, "42");
    assert_eq!(list.metadata.continue_token.as_deref(), Some("next-page"));
    assert_eq!(
        list.items[0].spec,
        SshCredentialSpec {
            public_key: "ssh-rsa AAAAB3Nza admin@example.com".to_string()
        }
    );
}

#[test]
fn test_list_without_items_is_empty() {
    let list: ObjectList<Cluster> =
        serde_json::from_value(json!({ "kind": "ClusterList", "metadata": {} })).unwrap();
    assert!(list.items.is_empty());
}

#[test]
fn test_delete_options_wire_format() {
    let options = DeleteOptions {
        grace_period_seconds: Some(0),
        preconditions: Some(Preconditions {
            uid: Some("1234".to_string()),
            resource_version: None,
        }),
        propagation_policy: Some(PropagationPolicy::Foreground),
    };
    assert_json_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({
            "gracePeriodSeconds": 0,
            "preconditions": { "uid": "1234" },
            "propagationPolicy": "Foreground"
        })
    );
    assert_json_eq!(
        serde_json::to_value(DeleteOptions::default()).unwrap(),
        json!({})
    );
}
