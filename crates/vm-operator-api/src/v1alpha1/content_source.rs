use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{macros::impl_object, v1alpha2};

/// Locates the provider object which describes where content originates.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentProviderReference {
    /// API version of the referent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind of the referent.
    pub kind: String,

    /// Name of the referent.
    pub name: String,

    /// Namespace of the referent. A cluster scoped referent is assumed if
    /// not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// A source of VM images, backed by a provider.
#[derive(
    Clone, CustomResource, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
#[kube(
    group = "vmoperator.vmware.com",
    version = "v1alpha1",
    kind = "ContentSource",
    derive = "Default",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct ContentSourceSpec {
    #[serde(default)]
    pub provider_ref: ContentProviderReference,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContentSourceList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<ContentSource>,
}

impl_object!(
    ContentSource,
    version = super::VERSION,
    kind = "ContentSource",
    spoke of v1alpha2::ContentSource
);
impl_object!(
    ContentSourceList,
    version = super::VERSION,
    kind = "ContentSourceList",
    spoke of v1alpha2::ContentSourceList
);
