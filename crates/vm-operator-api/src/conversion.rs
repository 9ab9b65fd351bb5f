//! The hub-and-spoke conversion protocol.
//!
//! Every kind has exactly one hub version. Spoke versions implement two
//! directional mappings per kind (and per list kind):
//!
//! - upgrade: `impl From<spoke::X> for hub::X`
//! - downgrade: `impl From<hub::X> for spoke::X`
//!
//! Fields present in both versions are copied by direct assignment. Fields
//! that only exist in the hub are left at their default on upgrade and are
//! dropped on downgrade. A field that is renamed or restructured between
//! versions needs a bespoke expression inside the `From` impl, documenting
//! which version's semantics win.
//!
//! Generic infrastructure holds objects as `dyn Object` and uses the
//! [`Convertible`] capability, which downcasts to the concrete hub type only
//! inside the implementation.
use snafu::Snafu;

use crate::{
    gvk::{GroupKind, GroupVersionKind},
    object::Object,
};

#[derive(Debug, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConversionError {
    #[snafu(display("expected an object of type {expected}, but got {found}"))]
    TypeMismatch {
        expected: GroupVersionKind,
        found: GroupVersionKind,
    },

    #[snafu(display("type {gvk} is not registered"))]
    UnregisteredKind { gvk: GroupVersionKind },

    #[snafu(display("no hub version is registered for {group_kind}"))]
    NoHub { group_kind: GroupKind },

    #[snafu(display("type {gvk} does not support conversion to and from its hub"))]
    NotConvertible { gvk: GroupVersionKind },
}

/// The capability of a spoke type to convert itself to and from its hub.
///
/// Both methods write nothing if the supplied object is not of the expected
/// hub type. In that case [`ConversionError::TypeMismatch`] is returned.
pub trait Convertible: Object {
    /// Writes the hub representation of `self` into `hub`.
    fn convert_to(&self, hub: &mut dyn Object) -> Result<(), ConversionError>;

    /// Replaces `self` with the spoke representation of `hub`.
    fn convert_from(&mut self, hub: &dyn Object) -> Result<(), ConversionError>;
}

/// Maps list items element-wise, preserving their order and count.
pub(crate) fn convert_items<S, D>(items: Vec<S>) -> Vec<D>
where
    D: From<S>,
{
    items.into_iter().map(D::from).collect()
}

/// Implements [`Convertible`] for a spoke type by forwarding to its `From`
/// impls from and to the hub type.
macro_rules! impl_convertible {
    ($spoke:ty => $hub:ty) => {
        // Spokes only ever convert to and from a hub.
        const _: fn() = || {
            fn assert_hub<H: $crate::object::Hub>() {}
            assert_hub::<$hub>();
        };

        impl $crate::conversion::Convertible for $spoke {
            fn convert_to(
                &self,
                hub: &mut dyn $crate::object::Object,
            ) -> ::std::result::Result<(), $crate::conversion::ConversionError> {
                let found = hub.group_version_kind();
                let hub = hub.downcast_mut::<$hub>().ok_or_else(|| {
                    $crate::conversion::ConversionError::TypeMismatch {
                        expected: <$hub as $crate::object::TypeIdentity>::gvk(),
                        found,
                    }
                })?;

                *hub = <$hub>::from(self.clone());
                Ok(())
            }

            fn convert_from(
                &mut self,
                hub: &dyn $crate::object::Object,
            ) -> ::std::result::Result<(), $crate::conversion::ConversionError> {
                let hub = hub.downcast_ref::<$hub>().ok_or_else(|| {
                    $crate::conversion::ConversionError::TypeMismatch {
                        expected: <$hub as $crate::object::TypeIdentity>::gvk(),
                        found: hub.group_version_kind(),
                    }
                })?;

                *self = <$spoke>::from(hub.clone());
                Ok(())
            }
        }
    };
}

pub(crate) use impl_convertible;
