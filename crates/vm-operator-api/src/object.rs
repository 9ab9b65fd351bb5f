//! The dynamic object model shared by the scheme and the conversion protocol.
//!
//! Generic infrastructure (the scheme, the conversion review handler) only
//! ever sees `dyn Object`. Concrete types are recovered by downcasting, which
//! only happens inside conversion implementations and the helpers below.
use std::{any::Any, fmt::Debug};

use crate::{
    conversion::{ConversionError, Convertible, TypeMismatchSnafu},
    gvk::GroupVersionKind,
};

/// Static identity of a versioned resource type (or its list type).
pub trait TypeIdentity {
    const GROUP: &'static str;
    const VERSION: &'static str;
    const KIND: &'static str;

    /// Whether this version is the hub version of its kind.
    const HUB: bool;

    fn gvk() -> GroupVersionKind {
        GroupVersionKind::from_static(Self::GROUP, Self::VERSION, Self::KIND)
    }

    fn api_version() -> String {
        format!("{}/{}", Self::GROUP, Self::VERSION)
    }
}

/// Marker for types stored in the hub version. Every other version converts
/// to and from the hub, never directly to another spoke.
pub trait Hub: Object {}

/// An opaque, typed instance of a registered resource (or list) type.
pub trait Object: Any + Debug + Send + Sync {
    fn group_version_kind(&self) -> GroupVersionKind;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_object(&self) -> Box<dyn Object>;

    /// Encodes the object, including its `apiVersion` and `kind` fields.
    fn to_json_value(&self) -> Result<serde_json::Value, serde_json::Error>;

    fn as_convertible(&self) -> Option<&dyn Convertible> {
        None
    }

    fn as_convertible_mut(&mut self) -> Option<&mut dyn Convertible> {
        None
    }
}

impl dyn Object {
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    /// Takes ownership of the concrete value, failing with
    /// [`ConversionError::TypeMismatch`] if the object is not a `T`.
    pub fn downcast<T>(self: Box<Self>) -> Result<Box<T>, ConversionError>
    where
        T: Object + TypeIdentity,
    {
        let found = self.group_version_kind();

        self.into_any().downcast::<T>().map_err(|_| {
            TypeMismatchSnafu {
                expected: T::gvk(),
                found,
            }
            .build()
        })
    }
}

impl Clone for Box<dyn Object> {
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

/// Encodes a value and sets the `apiVersion` and `kind` fields of the
/// resulting JSON object.
pub(crate) fn encode_with_type_meta<T>(
    value: &T,
    gvk: &GroupVersionKind,
) -> Result<serde_json::Value, serde_json::Error>
where
    T: serde::Serialize,
{
    let mut encoded = serde_json::to_value(value)?;

    if let Some(object) = encoded.as_object_mut() {
        object.insert(
            "apiVersion".to_owned(),
            serde_json::Value::String(gvk.api_version()),
        );
        object.insert(
            "kind".to_owned(),
            serde_json::Value::String(gvk.kind.clone()),
        );
    }

    Ok(encoded)
}
