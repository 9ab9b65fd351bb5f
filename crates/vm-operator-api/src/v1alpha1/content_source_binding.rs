use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    macros::{impl_namespaced_resource, impl_object},
    v1alpha2,
};

/// Locates a ContentSource object.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSourceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub name: String,
}

/// Maps a ContentSource to the namespace the binding lives in.
///
/// Printed columns: `ContentSource` (`.contentSourceRef.name`).
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSourceBinding {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub content_source_ref: ContentSourceReference,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContentSourceBindingList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<ContentSourceBinding>,
}

impl_namespaced_resource!(
    ContentSourceBinding,
    version = super::VERSION,
    kind = "ContentSourceBinding",
    plural = "contentsourcebindings",
    fields = [content_source_ref => "contentSourceRef"]
);

impl_object!(
    ContentSourceBinding,
    version = super::VERSION,
    kind = "ContentSourceBinding",
    spoke of v1alpha2::ContentSourceBinding
);
impl_object!(
    ContentSourceBindingList,
    version = super::VERSION,
    kind = "ContentSourceBindingList",
    spoke of v1alpha2::ContentSourceBindingList
);
