use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::macros::{impl_namespaced_resource, impl_object};

/// Locates a VirtualMachineClass object.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassReference {
    /// API version of the referent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind of the referent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Name of the referent.
    pub name: String,
}

/// Makes a VirtualMachineClass available in the namespace the binding
/// lives in.
///
/// Short name `vmclassbinding`. Printed columns: `VirtualMachineClass`
/// (`.classRef.name`) and `Age`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineClassBinding {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub class_ref: ClassReference,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VirtualMachineClassBindingList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<VirtualMachineClassBinding>,
}

impl_namespaced_resource!(
    VirtualMachineClassBinding,
    version = super::VERSION,
    kind = "VirtualMachineClassBinding",
    plural = "virtualmachineclassbindings",
    fields = [class_ref => "classRef"]
);

impl_object!(
    VirtualMachineClassBinding,
    version = super::VERSION,
    kind = "VirtualMachineClassBinding",
    hub
);
impl_object!(
    VirtualMachineClassBindingList,
    version = super::VERSION,
    kind = "VirtualMachineClassBindingList",
    hub
);
