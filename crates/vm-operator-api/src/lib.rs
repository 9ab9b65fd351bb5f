//! Versioned resource schemas of the VM operator API group
//! (`vmoperator.vmware.com`) and the conversion between their versions.
//!
//! ## Versions
//!
//! - [`v1alpha1`]: the original schema version, a spoke.
//! - [`v1alpha2`]: the hub version. Every other version converts only to and
//!   from the hub, never directly to another spoke.
//!
//! ## Conversion
//!
//! Typed conversions are plain `From` impls between the spoke and the hub
//! types. Generic infrastructure, which doesn't know the concrete types at
//! compile time, uses the [`SCHEME`] to decode opaque values and route them
//! through the hub:
//!
//! ```
//! use vm_operator_api::{SCHEME, v1alpha1, v1alpha2};
//!
//! let class = v1alpha1::VirtualMachineClass::new("best-effort-small", Default::default());
//! let hub: v1alpha2::VirtualMachineClass = SCHEME
//!     .convert_to(&class)
//!     .expect("v1alpha1 converts to the hub");
//!
//! // Which is the same as the typed conversion
//! assert_eq!(hub, v1alpha2::VirtualMachineClass::from(class));
//! ```
//!
//! Fields which only exist in the hub are dropped when downgrading. This is
//! expected and not reported.
//!
//! ## Crate Features
//!
//! - `review` (default) enables handling of Kubernetes `ConversionReview`s in
//!   the [`review`] module.
use std::sync::LazyLock;

mod macros;

pub mod conversion;
pub mod gvk;
pub mod object;
#[cfg(feature = "review")]
pub mod review;
pub mod scheme;
pub mod v1alpha1;
pub mod v1alpha2;

pub use conversion::{ConversionError, Convertible};
pub use object::{Hub, Object, TypeIdentity};
pub use scheme::{Scheme, SchemeBuilder};

// External re-exports
pub use k8s_openapi;
pub use kube;

/// The API group all resources of this crate belong to.
pub const GROUP: &str = "vmoperator.vmware.com";

// serde hands fields to skip_serializing_if by reference.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// The process-wide scheme containing every version of every kind.
///
/// It is built on first access and read-only afterwards.
pub static SCHEME: LazyLock<Scheme> = LazyLock::new(|| {
    let mut builder = Scheme::builder();

    v1alpha1::add_to_scheme(&mut builder).expect("v1alpha1 types must register exactly once");
    v1alpha2::add_to_scheme(&mut builder).expect("v1alpha2 types must register exactly once");

    builder.build()
});
