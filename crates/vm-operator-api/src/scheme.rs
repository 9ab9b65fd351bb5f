//! The scheme: a write-once table of every registered resource type.
//!
//! Types are registered on a [`SchemeBuilder`] during startup. Building the
//! scheme freezes the table into an immutable [`Scheme`], which can then be
//! shared between any number of threads without locking. Entries are never
//! removed.
//!
//! ```
//! use vm_operator_api::{Scheme, v1alpha1, v1alpha2};
//!
//! let mut builder = Scheme::builder();
//! v1alpha1::add_to_scheme(&mut builder).expect("types register once");
//! v1alpha2::add_to_scheme(&mut builder).expect("types register once");
//! let scheme = builder.build();
//!
//! let class = v1alpha1::VirtualMachineClass::default();
//! let hub: v1alpha2::VirtualMachineClass = scheme
//!     .convert_to(&class)
//!     .expect("v1alpha1 converts to the hub");
//! ```
use std::collections::{BTreeMap, btree_map::Entry};

use serde::de::DeserializeOwned;
use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::{debug, instrument, trace};

use crate::{
    conversion::{
        ConversionError, NoHubSnafu, NotConvertibleSnafu,
        UnregisteredKindSnafu as UnregisteredConversionKindSnafu,
    },
    gvk::{GroupKind, GroupVersion, GroupVersionKind, ParseApiVersionError},
    object::{Object, TypeIdentity},
};

type NewFn = fn() -> Box<dyn Object>;
type DecodeFn = fn(serde_json::Value) -> Result<Box<dyn Object>, serde_json::Error>;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum RegistrationError {
    #[snafu(display("type {gvk} is already registered"))]
    DuplicateKind { gvk: GroupVersionKind },

    #[snafu(display(
        "{group_kind} already has hub version {existing:?}, cannot register {version:?} as hub"
    ))]
    ConflictingHub {
        group_kind: GroupKind,
        existing: String,
        version: String,
    },
}

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("the object has no {field:?} field"))]
    MissingField { field: &'static str },

    #[snafu(display("the {field:?} field of the object isn't a string"))]
    FieldNotString { field: &'static str },

    #[snafu(display("failed to parse the apiVersion of the object"))]
    ParseApiVersion { source: ParseApiVersionError },

    #[snafu(display("type {gvk} is not registered"))]
    UnregisteredKind { gvk: GroupVersionKind },

    #[snafu(display("failed to deserialize object of type {gvk}"))]
    Deserialize {
        source: serde_json::Error,
        gvk: GroupVersionKind,
    },
}

#[derive(Clone, Copy, Debug)]
struct Registration {
    new: NewFn,
    decode: DecodeFn,
}

fn new_object<T>() -> Box<dyn Object>
where
    T: Object + Default,
{
    Box::new(T::default())
}

fn decode_object<T>(value: serde_json::Value) -> Result<Box<dyn Object>, serde_json::Error>
where
    T: Object + DeserializeOwned,
{
    Ok(Box::new(serde_json::from_value::<T>(value)?))
}

/// Collects type registrations during startup. See [`Scheme`].
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    types: BTreeMap<GroupVersionKind, Registration>,
    hubs: BTreeMap<GroupKind, String>,
}

impl SchemeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the kind `K` together with its list kind `L`.
    ///
    /// Nothing is recorded if either of the two identities is already taken
    /// or if a different hub version is already registered for them.
    pub fn register<K, L>(&mut self) -> Result<&mut Self, RegistrationError>
    where
        K: Object + TypeIdentity + Default + DeserializeOwned,
        L: Object + TypeIdentity + Default + DeserializeOwned,
    {
        self.check::<K>()?;
        self.check::<L>()?;

        self.insert::<K>();
        self.insert::<L>();

        Ok(self)
    }

    /// Freezes the registrations into an immutable [`Scheme`].
    pub fn build(self) -> Scheme {
        Scheme {
            types: self.types,
            hubs: self.hubs,
        }
    }

    fn check<T>(&self) -> Result<(), RegistrationError>
    where
        T: TypeIdentity,
    {
        let gvk = T::gvk();
        ensure!(!self.types.contains_key(&gvk), DuplicateKindSnafu { gvk });

        if T::HUB {
            if let Some(existing) = self.hubs.get(&gvk.group_kind()) {
                return ConflictingHubSnafu {
                    group_kind: gvk.group_kind(),
                    existing,
                    version: gvk.version,
                }
                .fail();
            }
        }

        Ok(())
    }

    fn insert<T>(&mut self)
    where
        T: Object + TypeIdentity + Default + DeserializeOwned,
    {
        let gvk = T::gvk();

        if T::HUB {
            if let Entry::Vacant(entry) = self.hubs.entry(gvk.group_kind()) {
                entry.insert(gvk.version.clone());
            }
        }

        debug!(
            k8s.group = T::GROUP,
            k8s.version = T::VERSION,
            k8s.kind = T::KIND,
            hub = T::HUB,
            "registered type"
        );

        self.types.insert(gvk, Registration {
            new: new_object::<T>,
            decode: decode_object::<T>,
        });
    }
}

/// An immutable table mapping type identities to constructors and decoders,
/// plus the hub version of every registered kind.
#[derive(Debug)]
pub struct Scheme {
    types: BTreeMap<GroupVersionKind, Registration>,
    hubs: BTreeMap<GroupKind, String>,
}

impl Scheme {
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::new()
    }

    pub fn is_registered(&self, gvk: &GroupVersionKind) -> bool {
        self.types.contains_key(gvk)
    }

    /// Returns all registered identities, sorted by group, version and kind.
    pub fn kinds(&self) -> impl Iterator<Item = &GroupVersionKind> {
        self.types.keys()
    }

    /// Returns all registered versions of `group_kind`, sorted.
    pub fn versions(&self, group_kind: &GroupKind) -> Vec<&str> {
        self.types
            .keys()
            .filter(|gvk| gvk.group == group_kind.group && gvk.kind == group_kind.kind)
            .map(|gvk| gvk.version.as_str())
            .collect()
    }

    pub fn hub_version(&self, group_kind: &GroupKind) -> Option<&str> {
        self.hubs.get(group_kind).map(String::as_str)
    }

    /// Constructs a blank instance of the type registered as `gvk`.
    pub fn new_object(&self, gvk: &GroupVersionKind) -> Option<Box<dyn Object>> {
        self.types.get(gvk).map(|registration| (registration.new)())
    }

    /// Decodes an opaque value into the type named by its `apiVersion` and
    /// `kind` fields.
    pub fn from_json_value(
        &self,
        value: serde_json::Value,
    ) -> Result<Box<dyn Object>, DecodeError> {
        let api_version = string_field(&value, "apiVersion")?;
        let kind = string_field(&value, "kind")?;

        let gvk = api_version
            .parse::<GroupVersion>()
            .context(ParseApiVersionSnafu)?
            .with_kind(kind);

        let registration = self
            .types
            .get(&gvk)
            .context(UnregisteredKindSnafu { gvk: gvk.clone() })?;

        (registration.decode)(value).context(DeserializeSnafu { gvk })
    }

    /// Converts `object` into `version` of the same group and kind.
    ///
    /// Spokes are routed through the hub: spoke to hub, then hub to the
    /// target spoke. If the object already is in the target version, a copy
    /// is returned. The source object is never modified.
    #[instrument(
        skip_all,
        fields(
            k8s.crd.conversion.api_version = %object.group_version_kind().api_version(),
            k8s.crd.conversion.desired_version = version,
            k8s.crd.kind = %object.group_version_kind().kind,
        )
    )]
    pub fn convert(
        &self,
        object: &dyn Object,
        version: &str,
    ) -> Result<Box<dyn Object>, ConversionError> {
        let source = object.group_version_kind();
        let target = source.with_version(version);

        ensure!(
            self.is_registered(&source),
            UnregisteredConversionKindSnafu { gvk: source }
        );

        let target_registration = self
            .types
            .get(&target)
            .context(UnregisteredConversionKindSnafu {
                gvk: target.clone(),
            })?;

        if source == target {
            return Ok(object.clone_object());
        }

        let group_kind = source.group_kind();
        let hub_version = self
            .hub_version(&group_kind)
            .context(NoHubSnafu { group_kind })?;

        let hub = if source.version == hub_version {
            object.clone_object()
        } else {
            let hub_gvk = source.with_version(hub_version);
            let mut hub = self
                .new_object(&hub_gvk)
                .context(UnregisteredConversionKindSnafu { gvk: hub_gvk })?;

            object
                .as_convertible()
                .context(NotConvertibleSnafu {
                    gvk: source.clone(),
                })?
                .convert_to(hub.as_mut())?;

            hub
        };

        let converted = if target.version == hub_version {
            hub
        } else {
            let mut converted = (target_registration.new)();

            converted
                .as_convertible_mut()
                .context(NotConvertibleSnafu {
                    gvk: target.clone(),
                })?
                .convert_from(hub.as_ref())?;

            converted
        };

        trace!(
            k8s.crd.conversion.api_version = %source.api_version(),
            k8s.crd.conversion.desired_api_version = %target.api_version(),
            k8s.crd.kind = %source.kind,
            "successfully converted object"
        );

        Ok(converted)
    }

    /// Converts `object` into the concrete type `T`, which must be a version
    /// of the same group and kind.
    pub fn convert_to<T>(&self, object: &dyn Object) -> Result<T, ConversionError>
    where
        T: Object + TypeIdentity,
    {
        let converted = self.convert(object, T::VERSION)?;
        Ok(*converted.downcast::<T>()?)
    }
}

fn string_field<'a>(
    value: &'a serde_json::Value,
    field: &'static str,
) -> Result<&'a str, DecodeError> {
    value
        .get(field)
        .context(MissingFieldSnafu { field })?
        .as_str()
        .context(FieldNotStringSnafu { field })
}
