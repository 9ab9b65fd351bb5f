/// Implements [`TypeIdentity`][1] and [`Object`][2] for a versioned type.
///
/// Hub types additionally get the [`Hub`][3] marker. Spoke types get a
/// [`Convertible`][4] implementation which forwards to their `From` impls
/// from and to the given hub type.
///
/// [1]: crate::object::TypeIdentity
/// [2]: crate::object::Object
/// [3]: crate::object::Hub
/// [4]: crate::conversion::Convertible
macro_rules! impl_object {
    (@identity $ty:ty, $version:expr, $kind:literal, $hub:literal) => {
        impl $crate::object::TypeIdentity for $ty {
            const GROUP: &'static str = $crate::GROUP;
            const VERSION: &'static str = $version;
            const KIND: &'static str = $kind;
            const HUB: bool = $hub;
        }
    };

    (@methods $ty:ty) => {
        fn group_version_kind(&self) -> $crate::gvk::GroupVersionKind {
            <$ty as $crate::object::TypeIdentity>::gvk()
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }

        fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
            self
        }

        fn clone_object(&self) -> ::std::boxed::Box<dyn $crate::object::Object> {
            ::std::boxed::Box::new(::std::clone::Clone::clone(self))
        }

        fn to_json_value(&self) -> ::std::result::Result<::serde_json::Value, ::serde_json::Error> {
            $crate::object::encode_with_type_meta(
                self,
                &<$ty as $crate::object::TypeIdentity>::gvk(),
            )
        }
    };

    ($ty:ty, version = $version:expr, kind = $kind:literal, hub) => {
        $crate::macros::impl_object!(@identity $ty, $version, $kind, true);

        impl $crate::object::Object for $ty {
            $crate::macros::impl_object!(@methods $ty);
        }

        impl $crate::object::Hub for $ty {}
    };

    ($ty:ty, version = $version:expr, kind = $kind:literal, spoke of $hub:ty) => {
        $crate::macros::impl_object!(@identity $ty, $version, $kind, false);

        impl $crate::object::Object for $ty {
            $crate::macros::impl_object!(@methods $ty);

            fn as_convertible(
                &self,
            ) -> ::std::option::Option<&dyn $crate::conversion::Convertible> {
                ::std::option::Option::Some(self)
            }

            fn as_convertible_mut(
                &mut self,
            ) -> ::std::option::Option<&mut dyn $crate::conversion::Convertible> {
                ::std::option::Option::Some(self)
            }
        }

        $crate::conversion::impl_convertible!($ty => $hub);
    };
}

/// Implements the `k8s-openapi` [`Resource`][1] and [`Metadata`][2] traits
/// for kinds which carry their fields at the top level instead of in a
/// `spec`. These cannot use the `CustomResource` derive. `kube` picks the
/// implementations up through its blanket [`kube::Resource`] impl.
///
/// It also implements [`Serialize`][3], which writes `apiVersion`, `kind` and
/// `metadata` followed by the listed fields under their JSON names. Fields
/// must not be skipped, because the field count is fixed up front.
///
/// [1]: k8s_openapi::Resource
/// [2]: k8s_openapi::Metadata
/// [3]: serde::Serialize
macro_rules! impl_namespaced_resource {
    (
        $ty:ty,
        version = $version:expr,
        kind = $kind:literal,
        plural = $plural:literal,
        fields = [$($field:ident => $name:literal),* $(,)?]
    ) => {
        impl ::k8s_openapi::Resource for $ty {
            type Scope = ::k8s_openapi::NamespaceResourceScope;

            const API_VERSION: &'static str =
                ::const_format::concatcp!($crate::GROUP, "/", $version);
            const GROUP: &'static str = $crate::GROUP;
            const KIND: &'static str = $kind;
            const URL_PATH_SEGMENT: &'static str = $plural;
            const VERSION: &'static str = $version;
        }

        impl ::k8s_openapi::Metadata for $ty {
            type Ty = ::k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

            fn metadata(&self) -> &Self::Ty {
                &self.metadata
            }

            fn metadata_mut(&mut self) -> &mut Self::Ty {
                &mut self.metadata
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                use ::serde::ser::SerializeStruct as _;

                let len = 3 + <[&str]>::len(&[$($name),*]);
                let mut state = serializer.serialize_struct($kind, len)?;
                state.serialize_field(
                    "apiVersion",
                    <Self as ::k8s_openapi::Resource>::API_VERSION,
                )?;
                state.serialize_field("kind", <Self as ::k8s_openapi::Resource>::KIND)?;
                state.serialize_field("metadata", &self.metadata)?;
                $(state.serialize_field($name, &self.$field)?;)*
                state.end()
            }
        }
    };
}

pub(crate) use impl_namespaced_resource;
pub(crate) use impl_object;
