//! The `v1alpha2` schema version. This is the hub version of every kind.
use crate::{SchemeBuilder, scheme::RegistrationError};

mod content_library_provider;
mod content_source;
mod content_source_binding;
mod virtual_machine_class;
mod virtual_machine_class_binding;

pub use content_library_provider::*;
pub use content_source::*;
pub use content_source_binding::*;
pub use virtual_machine_class::*;
pub use virtual_machine_class_binding::*;

pub const VERSION: &str = "v1alpha2";

/// Registers all `v1alpha2` kinds and their list kinds.
pub fn add_to_scheme(builder: &mut SchemeBuilder) -> Result<(), RegistrationError> {
    builder
        .register::<ContentLibraryProvider, ContentLibraryProviderList>()?
        .register::<ContentSource, ContentSourceList>()?
        .register::<ContentSourceBinding, ContentSourceBindingList>()?
        .register::<VirtualMachineClass, VirtualMachineClassList>()?
        .register::<VirtualMachineClassBinding, VirtualMachineClassBindingList>()?;

    Ok(())
}
