//! The `v1alpha1` schema version. A spoke which converts to and from the
//! [`v1alpha2`](crate::v1alpha2) hub.
use crate::{SchemeBuilder, scheme::RegistrationError};

mod content_library_provider;
mod content_source;
mod content_source_binding;
mod conversion;
mod virtual_machine_class;
mod virtual_machine_class_binding;

pub use content_library_provider::*;
pub use content_source::*;
pub use content_source_binding::*;
pub use virtual_machine_class::*;
pub use virtual_machine_class_binding::*;

pub const VERSION: &str = "v1alpha1";

/// Registers all `v1alpha1` kinds and their list kinds.
pub fn add_to_scheme(builder: &mut SchemeBuilder) -> Result<(), RegistrationError> {
    builder
        .register::<ContentLibraryProvider, ContentLibraryProviderList>()?
        .register::<ContentSource, ContentSourceList>()?
        .register::<ContentSourceBinding, ContentSourceBindingList>()?
        .register::<VirtualMachineClass, VirtualMachineClassList>()?
        .register::<VirtualMachineClassBinding, VirtualMachineClassBindingList>()?;

    Ok(())
}
