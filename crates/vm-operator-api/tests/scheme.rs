use std::{sync::Arc, thread};

use indoc::indoc;
use rstest::rstest;
use serde_json::json;
use vm_operator_api::{
    Object, SCHEME, Scheme, TypeIdentity,
    gvk::{GroupKind, GroupVersionKind},
    scheme::RegistrationError,
    v1alpha1, v1alpha2,
};

#[rstest]
#[case("ContentLibraryProvider")]
#[case("ContentLibraryProviderList")]
#[case("ContentSource")]
#[case("ContentSourceBinding")]
#[case("VirtualMachineClass")]
#[case("VirtualMachineClassBindingList")]
fn every_kind_is_served_in_both_versions(#[case] kind: &str) {
    let group_kind = GroupKind {
        group: vm_operator_api::GROUP.to_owned(),
        kind: kind.to_owned(),
    };

    assert_eq!(SCHEME.versions(&group_kind), ["v1alpha1", "v1alpha2"]);
    assert_eq!(SCHEME.hub_version(&group_kind), Some(v1alpha2::VERSION));
}

#[test]
fn registering_a_version_twice_fails() {
    let mut builder = Scheme::builder();
    v1alpha1::add_to_scheme(&mut builder).expect("first registration succeeds");

    let err = v1alpha1::add_to_scheme(&mut builder).expect_err("second registration fails");
    assert_eq!(
        err,
        RegistrationError::DuplicateKind {
            gvk: GroupVersionKind::from_static(
                vm_operator_api::GROUP,
                "v1alpha1",
                "ContentLibraryProvider"
            ),
        }
    );
}

#[test]
fn yaml_manifest_round_trips_through_the_hub() {
    let manifest = indoc! {"
        apiVersion: vmoperator.vmware.com/v1alpha1
        kind: VirtualMachineClassBinding
        metadata:
          name: small-binding
          namespace: workloads
          labels:
            team: platform
        classRef:
          apiVersion: vmoperator.vmware.com/v1alpha1
          kind: VirtualMachineClass
          name: small
    "};

    let value: serde_json::Value = serde_yaml::from_str(manifest).expect("manifest is valid YAML");
    let object = SCHEME.from_json_value(value).expect("binding is registered");

    let hub = SCHEME
        .convert(object.as_ref(), v1alpha2::VERSION)
        .expect("binding converts to the hub");
    assert_eq!(
        hub.group_version_kind(),
        <v1alpha2::VirtualMachineClassBinding as TypeIdentity>::gvk()
    );

    let back: v1alpha1::VirtualMachineClassBinding = SCHEME
        .convert_to(hub.as_ref())
        .expect("hub converts back to v1alpha1");
    let original = object
        .downcast_ref::<v1alpha1::VirtualMachineClassBinding>()
        .expect("decoded object is a v1alpha1 binding");

    assert_eq!(&back, original);
    assert_eq!(back.class_ref.name, "small");
    assert_eq!(
        back.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get("team"))
            .map(String::as_str),
        Some("platform")
    );
}

#[test]
fn dynamic_list_conversion_keeps_order() {
    let list = v1alpha1::ContentSourceList {
        items: ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                v1alpha1::ContentSource::new(
                    name,
                    v1alpha1::ContentSourceSpec {
                        provider_ref: v1alpha1::ContentProviderReference {
                            kind: "ContentLibraryProvider".to_owned(),
                            name: format!("{name}-library"),
                            ..Default::default()
                        },
                    },
                )
            })
            .collect(),
        ..Default::default()
    };

    let hub: v1alpha2::ContentSourceList = SCHEME.convert_to(&list).expect("list converts");

    let providers: Vec<_> = hub
        .items
        .iter()
        .map(|item| item.spec.provider_ref.name.as_str())
        .collect();
    assert_eq!(providers, ["a-library", "b-library", "c-library"]);
}

#[test]
fn conversions_agree_across_threads() {
    let class = Arc::new(v1alpha1::VirtualMachineClass::new(
        "small",
        v1alpha1::VirtualMachineClassSpec {
            hardware: v1alpha1::VirtualMachineClassHardware {
                cpus: 2,
                ..Default::default()
            },
            ..Default::default()
        },
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let class = Arc::clone(&class);
            thread::spawn(move || {
                SCHEME
                    .convert_to::<v1alpha2::VirtualMachineClass>(&*class)
                    .expect("class converts")
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread completes"))
        .collect();

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0], v1alpha2::VirtualMachineClass::from((*class).clone()));
}

#[test]
fn bindings_serialize_type_meta() {
    let binding = v1alpha1::ContentSourceBinding {
        metadata: k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta {
            name: Some("library-binding".to_owned()),
            ..Default::default()
        },
        content_source_ref: v1alpha1::ContentSourceReference {
            name: "library-source".to_owned(),
            ..Default::default()
        },
    };

    let encoded = serde_json::to_value(&binding).expect("binding serializes");
    assert_eq!(
        encoded,
        json!({
            "apiVersion": "vmoperator.vmware.com/v1alpha1",
            "kind": "ContentSourceBinding",
            "metadata": {"name": "library-binding"},
            "contentSourceRef": {"name": "library-source"},
        })
    );

    let list = v1alpha2::VirtualMachineClassBindingList {
        items: vec![v1alpha2::VirtualMachineClassBinding {
            class_ref: v1alpha2::ClassReference {
                name: "small".to_owned(),
                ..Default::default()
            },
            ..Default::default()
        }],
        ..Default::default()
    };

    let encoded = list.to_json_value().expect("list serializes");
    assert_eq!(encoded["kind"], "VirtualMachineClassBindingList");
    assert_eq!(
        encoded["items"][0],
        json!({
            "apiVersion": "vmoperator.vmware.com/v1alpha2",
            "kind": "VirtualMachineClassBinding",
            "metadata": {},
            "classRef": {"name": "small"},
        })
    );
}

#[test]
fn bindings_decode_with_type_meta() {
    let binding = v1alpha2::VirtualMachineClassBinding {
        class_ref: v1alpha2::ClassReference {
            name: "small".to_owned(),
            ..Default::default()
        },
        ..Default::default()
    };

    let encoded = serde_json::to_value(&binding).expect("binding serializes");
    let decoded: v1alpha2::VirtualMachineClassBinding =
        serde_json::from_value(encoded).expect("binding deserializes");

    assert_eq!(decoded, binding);
}

#[test]
fn unset_scalars_are_omitted() {
    let provider = v1alpha1::ContentLibraryProvider::new("library", Default::default());
    let encoded = serde_json::to_value(&provider).expect("provider serializes");
    assert_eq!(encoded["spec"], json!({}));
    assert!(encoded.get("status").is_none());

    let class = v1alpha2::VirtualMachineClass::new("empty", Default::default());
    let encoded = serde_json::to_value(&class).expect("class serializes");
    assert!(encoded["spec"]["hardware"].get("cpus").is_none());
}
