use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{macros::impl_object, v1alpha2};

/// Describes a vSphere content library, identified by its UUID.
#[derive(
    Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[kube(
    group = "vmoperator.vmware.com",
    version = "v1alpha1",
    kind = "ContentLibraryProvider",
    derive = "Default",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Content Library UUID", "type":"string", "jsonPath":".spec.uuid", "description":"UUID of the vSphere content library"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ContentLibraryProviderSpec {
    /// The unique identifier of a vSphere content library.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContentLibraryProviderList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<ContentLibraryProvider>,
}

impl_object!(
    ContentLibraryProvider,
    version = super::VERSION,
    kind = "ContentLibraryProvider",
    spoke of v1alpha2::ContentLibraryProvider
);
impl_object!(
    ContentLibraryProviderList,
    version = super::VERSION,
    kind = "ContentLibraryProviderList",
    spoke of v1alpha2::ContentLibraryProviderList
);
