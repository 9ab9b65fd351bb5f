use k8s_openapi::apimachinery::pkg::{api::resource::Quantity, apis::meta::v1::ListMeta};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::macros::impl_object;

/// A vGPU device, identified by its profile name.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VgpuDevice {
    pub profile_name: String,
}

/// A Dynamic DirectPath I/O device, identified by its vendor and device ID.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicDirectPathIoDevice {
    #[serde(rename = "vendorID")]
    pub vendor_id: i64,

    #[serde(rename = "deviceID")]
    pub device_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_label: Option<String>,
}

/// The virtual devices attached to VMs of a class.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDevices {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vgpu_devices: Vec<VgpuDevice>,

    #[serde(
        default,
        rename = "dynamicDirectPathIODevices",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub dynamic_direct_path_io_devices: Vec<DynamicDirectPathIoDevice>,
}

/// The virtual hardware of VMs of a class.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineClassHardware {
    #[serde(default, skip_serializing_if = "crate::is_zero")]
    pub cpus: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Quantity>,

    #[serde(default)]
    pub devices: VirtualDevices,
}

/// A CPU and memory quantity pair.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineResourceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Quantity>,
}

/// Resource reservations (requests) and limits of VMs of a class.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineClassResources {
    #[serde(default)]
    pub requests: VirtualMachineResourceSpec,

    #[serde(default)]
    pub limits: VirtualMachineResourceSpec,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineClassPolicies {
    #[serde(default)]
    pub resources: VirtualMachineClassResources,
}

/// A VirtualMachineClass is an immutable policy and configuration resource,
/// which defines the virtual hardware and resource policies of the VMs
/// referencing it.
#[derive(
    Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize,
)]
#[kube(
    group = "vmoperator.vmware.com",
    version = "v1alpha2",
    kind = "VirtualMachineClass",
    status = "VirtualMachineClassStatus",
    shortname = "vmclass",
    derive = "Default",
    derive = "PartialEq",
    printcolumn = r#"{"name":"CPU", "type":"string", "jsonPath":".spec.hardware.cpus"}"#,
    printcolumn = r#"{"name":"Memory", "type":"string", "jsonPath":".spec.hardware.memory"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineClassSpec {
    /// The controller responsible for VMs using this class. Only known to
    /// the hub version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_name: Option<String>,

    /// Virtual hardware characteristics of VMs using this class.
    #[serde(default)]
    pub hardware: VirtualMachineClassHardware,

    /// Infrastructure policies, like resource reservations and limits.
    #[serde(default)]
    pub policies: VirtualMachineClassPolicies,

    /// Human readable description. Only known to the hub version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque, vendor specific VM configuration. Only known to the hub
    /// version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_spec: Option<serde_json::Value>,
}

/// Classes are immutable, so the status is currently unused.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct VirtualMachineClassStatus {}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VirtualMachineClassList {
    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<VirtualMachineClass>,
}

impl_object!(VirtualMachineClass, version = super::VERSION, kind = "VirtualMachineClass", hub);
impl_object!(
    VirtualMachineClassList,
    version = super::VERSION,
    kind = "VirtualMachineClassList",
    hub
);
