//! Upgrades from `v1alpha1` to the `v1alpha2` hub and downgrades back.
//!
//! All fields of `v1alpha1` exist unchanged in the hub. The hub-only fields
//! of [`v1alpha2::VirtualMachineClassSpec`] are left unset on upgrade and
//! dropped on downgrade.
use crate::{conversion::convert_items, v1alpha1, v1alpha2};

/// Implements both directions for a custom resource with a spec and, if
/// named, a status. The metadata is copied verbatim.
macro_rules! impl_resource_conversion {
    ($kind:ident $(, $status:ident)?) => {
        impl From<v1alpha1::$kind> for v1alpha2::$kind {
            fn from(value: v1alpha1::$kind) -> Self {
                Self {
                    metadata: value.metadata,
                    spec: value.spec.into(),
                    $($status: value.$status.map(Into::into),)?
                }
            }
        }

        impl From<v1alpha2::$kind> for v1alpha1::$kind {
            fn from(value: v1alpha2::$kind) -> Self {
                Self {
                    metadata: value.metadata,
                    spec: value.spec.into(),
                    $($status: value.$status.map(Into::into),)?
                }
            }
        }
    };
}

/// Implements both directions for list kinds, mapping items element-wise.
macro_rules! impl_list_conversion {
    ($($list:ident),+ $(,)?) => {
        $(
            impl From<v1alpha1::$list> for v1alpha2::$list {
                fn from(value: v1alpha1::$list) -> Self {
                    Self {
                        metadata: value.metadata,
                        items: convert_items(value.items),
                    }
                }
            }

            impl From<v1alpha2::$list> for v1alpha1::$list {
                fn from(value: v1alpha2::$list) -> Self {
                    Self {
                        metadata: value.metadata,
                        items: convert_items(value.items),
                    }
                }
            }
        )+
    };
}

impl_resource_conversion!(ContentLibraryProvider);
impl_resource_conversion!(ContentSource);
impl_resource_conversion!(VirtualMachineClass, status);

impl_list_conversion!(
    ContentLibraryProviderList,
    ContentSourceList,
    ContentSourceBindingList,
    VirtualMachineClassList,
    VirtualMachineClassBindingList,
);

// ContentLibraryProvider

impl From<v1alpha1::ContentLibraryProviderSpec> for v1alpha2::ContentLibraryProviderSpec {
    fn from(value: v1alpha1::ContentLibraryProviderSpec) -> Self {
        Self { uuid: value.uuid }
    }
}

impl From<v1alpha2::ContentLibraryProviderSpec> for v1alpha1::ContentLibraryProviderSpec {
    fn from(value: v1alpha2::ContentLibraryProviderSpec) -> Self {
        Self { uuid: value.uuid }
    }
}

// ContentSource

impl From<v1alpha1::ContentProviderReference> for v1alpha2::ContentProviderReference {
    fn from(value: v1alpha1::ContentProviderReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
            namespace: value.namespace,
        }
    }
}

impl From<v1alpha2::ContentProviderReference> for v1alpha1::ContentProviderReference {
    fn from(value: v1alpha2::ContentProviderReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
            namespace: value.namespace,
        }
    }
}

impl From<v1alpha1::ContentSourceSpec> for v1alpha2::ContentSourceSpec {
    fn from(value: v1alpha1::ContentSourceSpec) -> Self {
        Self {
            provider_ref: value.provider_ref.into(),
        }
    }
}

impl From<v1alpha2::ContentSourceSpec> for v1alpha1::ContentSourceSpec {
    fn from(value: v1alpha2::ContentSourceSpec) -> Self {
        Self {
            provider_ref: value.provider_ref.into(),
        }
    }
}

// ContentSourceBinding

impl From<v1alpha1::ContentSourceReference> for v1alpha2::ContentSourceReference {
    fn from(value: v1alpha1::ContentSourceReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
        }
    }
}

impl From<v1alpha2::ContentSourceReference> for v1alpha1::ContentSourceReference {
    fn from(value: v1alpha2::ContentSourceReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
        }
    }
}

impl From<v1alpha1::ContentSourceBinding> for v1alpha2::ContentSourceBinding {
    fn from(value: v1alpha1::ContentSourceBinding) -> Self {
        Self {
            metadata: value.metadata,
            content_source_ref: value.content_source_ref.into(),
        }
    }
}

impl From<v1alpha2::ContentSourceBinding> for v1alpha1::ContentSourceBinding {
    fn from(value: v1alpha2::ContentSourceBinding) -> Self {
        Self {
            metadata: value.metadata,
            content_source_ref: value.content_source_ref.into(),
        }
    }
}

// VirtualMachineClass

impl From<v1alpha1::VirtualMachineClassStatus> for v1alpha2::VirtualMachineClassStatus {
    fn from(_: v1alpha1::VirtualMachineClassStatus) -> Self {
        Self {}
    }
}

impl From<v1alpha2::VirtualMachineClassStatus> for v1alpha1::VirtualMachineClassStatus {
    fn from(_: v1alpha2::VirtualMachineClassStatus) -> Self {
        Self {}
    }
}

impl From<v1alpha1::VgpuDevice> for v1alpha2::VgpuDevice {
    fn from(value: v1alpha1::VgpuDevice) -> Self {
        Self {
            profile_name: value.profile_name,
        }
    }
}

impl From<v1alpha2::VgpuDevice> for v1alpha1::VgpuDevice {
    fn from(value: v1alpha2::VgpuDevice) -> Self {
        Self {
            profile_name: value.profile_name,
        }
    }
}

impl From<v1alpha1::DynamicDirectPathIoDevice> for v1alpha2::DynamicDirectPathIoDevice {
    fn from(value: v1alpha1::DynamicDirectPathIoDevice) -> Self {
        Self {
            vendor_id: value.vendor_id,
            device_id: value.device_id,
            custom_label: value.custom_label,
        }
    }
}

impl From<v1alpha2::DynamicDirectPathIoDevice> for v1alpha1::DynamicDirectPathIoDevice {
    fn from(value: v1alpha2::DynamicDirectPathIoDevice) -> Self {
        Self {
            vendor_id: value.vendor_id,
            device_id: value.device_id,
            custom_label: value.custom_label,
        }
    }
}

impl From<v1alpha1::VirtualDevices> for v1alpha2::VirtualDevices {
    fn from(value: v1alpha1::VirtualDevices) -> Self {
        Self {
            vgpu_devices: convert_items(value.vgpu_devices),
            dynamic_direct_path_io_devices: convert_items(value.dynamic_direct_path_io_devices),
        }
    }
}

impl From<v1alpha2::VirtualDevices> for v1alpha1::VirtualDevices {
    fn from(value: v1alpha2::VirtualDevices) -> Self {
        Self {
            vgpu_devices: convert_items(value.vgpu_devices),
            dynamic_direct_path_io_devices: convert_items(value.dynamic_direct_path_io_devices),
        }
    }
}

impl From<v1alpha1::VirtualMachineClassHardware> for v1alpha2::VirtualMachineClassHardware {
    fn from(value: v1alpha1::VirtualMachineClassHardware) -> Self {
        Self {
            cpus: value.cpus,
            memory: value.memory,
            devices: value.devices.into(),
        }
    }
}

impl From<v1alpha2::VirtualMachineClassHardware> for v1alpha1::VirtualMachineClassHardware {
    fn from(value: v1alpha2::VirtualMachineClassHardware) -> Self {
        Self {
            cpus: value.cpus,
            memory: value.memory,
            devices: value.devices.into(),
        }
    }
}

impl From<v1alpha1::VirtualMachineResourceSpec> for v1alpha2::VirtualMachineResourceSpec {
    fn from(value: v1alpha1::VirtualMachineResourceSpec) -> Self {
        Self {
            cpu: value.cpu,
            memory: value.memory,
        }
    }
}

impl From<v1alpha2::VirtualMachineResourceSpec> for v1alpha1::VirtualMachineResourceSpec {
    fn from(value: v1alpha2::VirtualMachineResourceSpec) -> Self {
        Self {
            cpu: value.cpu,
            memory: value.memory,
        }
    }
}

impl From<v1alpha1::VirtualMachineClassResources> for v1alpha2::VirtualMachineClassResources {
    fn from(value: v1alpha1::VirtualMachineClassResources) -> Self {
        Self {
            requests: value.requests.into(),
            limits: value.limits.into(),
        }
    }
}

impl From<v1alpha2::VirtualMachineClassResources> for v1alpha1::VirtualMachineClassResources {
    fn from(value: v1alpha2::VirtualMachineClassResources) -> Self {
        Self {
            requests: value.requests.into(),
            limits: value.limits.into(),
        }
    }
}

impl From<v1alpha1::VirtualMachineClassPolicies> for v1alpha2::VirtualMachineClassPolicies {
    fn from(value: v1alpha1::VirtualMachineClassPolicies) -> Self {
        Self {
            resources: value.resources.into(),
        }
    }
}

impl From<v1alpha2::VirtualMachineClassPolicies> for v1alpha1::VirtualMachineClassPolicies {
    fn from(value: v1alpha2::VirtualMachineClassPolicies) -> Self {
        Self {
            resources: value.resources.into(),
        }
    }
}

impl From<v1alpha1::VirtualMachineClassSpec> for v1alpha2::VirtualMachineClassSpec {
    fn from(value: v1alpha1::VirtualMachineClassSpec) -> Self {
        Self {
            controller_name: None,
            hardware: value.hardware.into(),
            policies: value.policies.into(),
            description: None,
            config_spec: None,
        }
    }
}

impl From<v1alpha2::VirtualMachineClassSpec> for v1alpha1::VirtualMachineClassSpec {
    // controller_name, description and config_spec have no v1alpha1
    // counterpart and are lost.
    fn from(value: v1alpha2::VirtualMachineClassSpec) -> Self {
        Self {
            hardware: value.hardware.into(),
            policies: value.policies.into(),
        }
    }
}

// VirtualMachineClassBinding

impl From<v1alpha1::ClassReference> for v1alpha2::ClassReference {
    fn from(value: v1alpha1::ClassReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
        }
    }
}

impl From<v1alpha2::ClassReference> for v1alpha1::ClassReference {
    fn from(value: v1alpha2::ClassReference) -> Self {
        Self {
            api_version: value.api_version,
            kind: value.kind,
            name: value.name,
        }
    }
}

impl From<v1alpha1::VirtualMachineClassBinding> for v1alpha2::VirtualMachineClassBinding {
    fn from(value: v1alpha1::VirtualMachineClassBinding) -> Self {
        Self {
            metadata: value.metadata,
            class_ref: value.class_ref.into(),
        }
    }
}

impl From<v1alpha2::VirtualMachineClassBinding> for v1alpha1::VirtualMachineClassBinding {
    fn from(value: v1alpha2::VirtualMachineClassBinding) -> Self {
        Self {
            metadata: value.metadata,
            class_ref: value.class_ref.into(),
        }
    }
}
