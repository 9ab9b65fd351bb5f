#![cfg(feature = "review")]

use kube::core::{conversion::ConversionReview, response::StatusSummary};
use rstest::rstest;
use serde_json::{Value, json};
use vm_operator_api::{SCHEME, review};

const UID: &str = "705ab4f5-6393-11e8-b7cc-42010a800002";

fn request(desired_api_version: &str, objects: Vec<Value>) -> ConversionReview {
    serde_json::from_value(json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "ConversionReview",
        "request": {
            "uid": UID,
            "desiredAPIVersion": desired_api_version,
            "objects": objects,
        }
    }))
    .expect("failed to parse ConversionReview")
}

fn class(api_version: &str) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": "VirtualMachineClass",
        "metadata": {"name": "best-effort-small"},
        "spec": {
            "hardware": {
                "cpus": 4,
                "memory": "4Gi",
                "devices": {"vgpuDevices": [{"profileName": "profile-1"}]},
            },
        },
    })
}

#[rstest]
#[case::upgrade("vmoperator.vmware.com/v1alpha1", "vmoperator.vmware.com/v1alpha2")]
#[case::downgrade("vmoperator.vmware.com/v1alpha2", "vmoperator.vmware.com/v1alpha1")]
#[case::same_version("vmoperator.vmware.com/v1alpha2", "vmoperator.vmware.com/v1alpha2")]
fn pass(#[case] from: &str, #[case] to: &str) {
    let response = review::try_convert(&SCHEME, request(to, vec![class(from)]))
        .response
        .expect("ConversionReview had no response!");

    assert_eq!(response.result.status, Some(StatusSummary::Success));
    assert_eq!(response.uid, UID);

    assert_eq!(response.converted_objects.len(), 1);

    let converted = &response.converted_objects[0];
    assert_eq!(converted["apiVersion"], to);
    assert_eq!(converted["kind"], "VirtualMachineClass");
    assert_eq!(converted["metadata"]["name"], "best-effort-small");
    assert_eq!(converted["spec"]["hardware"]["cpus"], 4);
    assert_eq!(converted["spec"]["hardware"]["memory"], "4Gi");
    assert_eq!(
        converted["spec"]["hardware"]["devices"]["vgpuDevices"][0]["profileName"],
        "profile-1"
    );
}

#[test]
fn downgrade_drops_hub_only_fields() {
    let mut object = class("vmoperator.vmware.com/v1alpha2");
    object["spec"]["description"] = json!("small class");
    object["spec"]["controllerName"] = json!("vmoperator.vmware.com/vsphere");

    let response = review::try_convert(
        &SCHEME,
        request("vmoperator.vmware.com/v1alpha1", vec![object]),
    )
    .response
    .expect("ConversionReview had no response!");

    assert_eq!(response.result.status, Some(StatusSummary::Success));

    let spec = &response.converted_objects[0]["spec"];
    assert!(spec.get("description").is_none());
    assert!(spec.get("controllerName").is_none());
}

#[test]
fn mixed_versions_convert_in_order() {
    let objects = vec![
        class("vmoperator.vmware.com/v1alpha1"),
        json!({
            "apiVersion": "vmoperator.vmware.com/v1alpha2",
            "kind": "ContentLibraryProvider",
            "metadata": {"name": "library"},
            "spec": {"uuid": "1234-uuid"},
        }),
    ];

    let response = review::try_convert(&SCHEME, request("vmoperator.vmware.com/v1alpha1", objects))
        .response
        .expect("ConversionReview had no response!");

    assert_eq!(response.result.status, Some(StatusSummary::Success));

    let kinds: Vec<_> = response
        .converted_objects
        .iter()
        .map(|object| object["kind"].as_str())
        .collect();
    assert_eq!(kinds, [Some("VirtualMachineClass"), Some("ContentLibraryProvider")]);
    assert_eq!(response.converted_objects[1]["spec"]["uuid"], "1234-uuid");
}

#[rstest]
#[case::unknown_kind(json!({
    "apiVersion": "vmoperator.vmware.com/v1alpha1",
    "kind": "VirtualMachine",
    "metadata": {"name": "vm"},
}))]
#[case::missing_kind(json!({"apiVersion": "vmoperator.vmware.com/v1alpha1"}))]
#[case::invalid_field(json!({
    "apiVersion": "vmoperator.vmware.com/v1alpha1",
    "kind": "ContentLibraryProvider",
    "metadata": {"name": "library"},
    "spec": {"uuid": 1234},
}))]
fn fail(#[case] object: Value) {
    // The first object is valid, but the whole review fails nonetheless.
    let objects = vec![class("vmoperator.vmware.com/v1alpha1"), object];

    let response = review::try_convert(&SCHEME, request("vmoperator.vmware.com/v1alpha2", objects))
        .response
        .expect("ConversionReview had no response!");

    assert_eq!(response.result.status, Some(StatusSummary::Failure));
    assert_eq!(response.result.code, 400);
    assert!(response.result.message.starts_with("failed to decode object at index 1"));
    assert_eq!(response.uid, UID);
    assert!(response.converted_objects.is_empty());
}

#[test]
fn review_without_request_fails() {
    let review: ConversionReview = serde_json::from_value(json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "ConversionReview",
    }))
    .expect("failed to parse ConversionReview");

    let response = review::try_convert(&SCHEME, review)
        .response
        .expect("ConversionReview had no response!");

    assert_eq!(response.result.status, Some(StatusSummary::Failure));
    assert!(response.converted_objects.is_empty());
}
