use crate::common::create_test_client;
use kops_client::prelude::*;
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_list_instance_groups_with_selector() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/apis/kops/v1alpha2/namespaces/prod/instancegroups")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("labelSelector".into(), "role=node".into()),
            Matcher::UrlEncoded("limit".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "apiVersion": "kops/v1alpha2",
                "kind": "InstanceGroupList",
                "metadata": { "resourceVersion": "88" },
                "items": [
                    { "metadata": { "name": "nodes" }, "spec": { "role": "Node", "minSize": 2, "maxSize": 4 } },
                    { "metadata": { "name": "master-us-east-1a" }, "spec": { "role": "Master", "minSize": 1, "maxSize": 1 } }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let options = ListOptions {
        label_selector: Some("role=node".to_string()),
        limit: Some(50),
        ..ListOptions::default()
    };
    let list = client
        .instance_groups("prod")
        .list(&options)
        .await
        .expect("list instance groups");

    mock.assert_async().await;
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[1].spec.role, InstanceGroupRole::Master);
}

#[tokio::test]
async fn test_update_instance_group() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/apis/kops/v1alpha2/namespaces/prod/instancegroups/nodes")
        .match_body(Matcher::PartialJson(json!({
            "kind": "InstanceGroup",
            "metadata": { "name": "nodes", "resourceVersion": "88" },
            "spec": { "maxSize": 10 }
        })))
        .with_status(200)
        .with_body(r#"{"metadata":{"name":"nodes","resourceVersion":"89"},"spec":{"role":"Node","maxSize":10}}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let mut group = InstanceGroup {
        metadata: ObjectMeta::named("nodes"),
        ..InstanceGroup::default()
    };
    group.metadata.resource_version = "88".to_string();
    group.spec.max_size = Some(10);

    let updated = client
        .instance_groups("prod")
        .update(&group)
        .await
        .expect("update instance group");

    mock.assert_async().await;
    assert_eq!(updated.metadata.resource_version, "89");
}

#[tokio::test]
async fn test_stale_update_is_conflict() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("PUT", "/apis/kops/v1alpha2/namespaces/prod/instancegroups/nodes")
        .with_status(409)
        .with_body(crate::common::status_body(409, "Conflict", "object has been modified"))
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let err = client
        .instance_groups("prod")
        .update(&InstanceGroup {
            metadata: ObjectMeta::named("nodes"),
            ..InstanceGroup::default()
        })
        .await
        .unwrap_err();

    assert!(err.is_conflict());
}

#[tokio::test]
async fn test_patch_instance_group() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/apis/kops/v1alpha2/namespaces/prod/instancegroups/nodes")
        .match_header("content-type", "application/merge-patch+json")
        .match_body(r#"{"spec":{"minSize":3}}"#)
        .with_status(200)
        .with_body(r#"{"metadata":{"name":"nodes"},"spec":{"role":"Node","minSize":3}}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let patched = client
        .instance_groups("prod")
        .patch("nodes", PatchType::Merge, br#"{"spec":{"minSize":3}}"#)
        .await
        .expect("patch instance group");

    mock.assert_async().await;
    assert_eq!(patched.spec.min_size, Some(3));
}

#[tokio::test]
async fn test_delete_keyset_and_collection() {
    let mut server = mockito::Server::new_async().await;
    let delete_one = server
        .mock("DELETE", "/apis/kops/v1alpha2/namespaces/prod/keysets/ca")
        .match_body(Matcher::Json(json!({ "propagationPolicy": "Background" })))
        .with_status(200)
        .with_body(r#"{"kind":"Status","status":"Success","code":200}"#)
        .create_async()
        .await;
    let delete_all = server
        .mock("DELETE", "/apis/kops/v1alpha2/namespaces/prod/sshcredentials")
        .match_query(Matcher::UrlEncoded("labelSelector".into(), "owner=ci".into()))
        .with_status(200)
        .with_body(r#"{"kind":"Status","status":"Success","code":200}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let options = DeleteOptions {
        propagation_policy: Some(PropagationPolicy::Background),
        ..DeleteOptions::default()
    };
    client
        .keysets("prod")
        .delete("ca", &options)
        .await
        .expect("delete keyset");
    client
        .ssh_credentials("prod")
        .delete_collection(
            &DeleteOptions::default(),
            &ListOptions {
                label_selector: Some("owner=ci".to_string()),
                ..ListOptions::default()
            },
        )
        .await
        .expect("delete ssh credentials");

    delete_one.assert_async().await;
    delete_all.assert_async().await;
}

#[tokio::test]
async fn test_federation_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/apis/kops/v1alpha2/namespaces/default/federations/global")
        .with_status(200)
        .with_body(r#"{"metadata":{"name":"global"},"spec":{"controllers":["c1"],"members":["c1","c2"],"dnsZone":"example.com"}}"#)
        .create_async()
        .await;

    let client = create_test_client(&server.url());
    let federation = client
        .federations("default")
        .get("global")
        .await
        .expect("get federation");

    assert_eq!(federation.spec.members, vec!["c1", "c2"]);
    assert_eq!(federation.spec.dns_zone.as_deref(), Some("example.com"));
}
