//! Strongly-typed identities of versioned resource types.
//!
//! A type is identified by its group, its version and its kind. The group and
//! version together form the API version, which uses the `<GROUP>/<VERSION>`
//! format, for example `vmoperator.vmware.com/v1alpha2`.
//!
//! ```
//! use vm_operator_api::gvk::GroupVersion;
//!
//! let group_version: GroupVersion = "vmoperator.vmware.com/v1alpha1"
//!     .parse()
//!     .expect("valid API version");
//!
//! assert_eq!(group_version.group(), "vmoperator.vmware.com");
//! assert_eq!(group_version.version(), "v1alpha1");
//! ```
use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use snafu::{ResultExt, Snafu, ensure};

const MAX_GROUP_LENGTH: usize = 253;
const MAX_VERSION_LENGTH: usize = 63;

static API_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:[a-z0-9][a-z0-9-]{0,61}[a-z0-9])\.?)+$")
        .expect("failed to compile API group regex")
});

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v[0-9]+(?:(?:alpha|beta)[0-9]+)?$").expect("failed to compile version regex")
});

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseGroupError {
    #[snafu(display("group must not be empty"))]
    EmptyGroup,

    #[snafu(display("group must not be longer than 253 characters"))]
    GroupTooLong,

    #[snafu(display("group {group:?} must be a valid DNS subdomain"))]
    InvalidGroup { group: String },
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseVersionError {
    #[snafu(display("version must not be longer than 63 characters"))]
    VersionTooLong,

    #[snafu(display(
        "version {version:?} must use the v<MAJOR>(alpha|beta<LEVEL>) format"
    ))]
    InvalidVersion { version: String },
}

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum ParseApiVersionError {
    #[snafu(display("API version {input:?} is missing the group"))]
    MissingGroup { input: String },

    #[snafu(display("failed to parse group"))]
    ParseGroup { source: ParseGroupError },

    #[snafu(display("failed to parse version"))]
    ParseVersion { source: ParseVersionError },
}

/// Validates a group string, which must be a lower case DNS subdomain.
pub fn validate_group(group: &str) -> Result<(), ParseGroupError> {
    ensure!(!group.is_empty(), EmptyGroupSnafu);
    ensure!(group.len() <= MAX_GROUP_LENGTH, GroupTooLongSnafu);
    ensure!(API_GROUP_REGEX.is_match(group), InvalidGroupSnafu { group });

    Ok(())
}

/// Validates a version string like `v1`, `v1beta2` or `v1alpha1`.
pub fn validate_version(version: &str) -> Result<(), ParseVersionError> {
    ensure!(version.len() <= MAX_VERSION_LENGTH, VersionTooLongSnafu);
    ensure!(VERSION_REGEX.is_match(version), InvalidVersionSnafu { version });

    Ok(())
}

/// A validated API version with the `<GROUP>/<VERSION>` format.
///
/// Core (group-less) API versions like `v1` are not supported, because every
/// resource handled by this crate lives in a named group.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupVersion {
    group: String,
    version: String,
}

impl GroupVersion {
    pub fn try_new(
        group: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, ParseApiVersionError> {
        let (group, version) = (group.into(), version.into());

        validate_group(&group).context(ParseGroupSnafu)?;
        validate_version(&version).context(ParseVersionSnafu)?;

        Ok(Self { group, version })
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Attaches a kind to this API version.
    pub fn with_kind(&self, kind: impl Into<String>) -> GroupVersionKind {
        GroupVersionKind {
            group: self.group.clone(),
            version: self.version.clone(),
            kind: kind.into(),
        }
    }
}

impl FromStr for GroupVersion {
    type Err = ParseApiVersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let Some((group, version)) = input.split_once('/') else {
            return MissingGroupSnafu { input }.fail();
        };

        Self::try_new(group, version)
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.version)
    }
}

/// A group and kind without a version. All versions of one resource share
/// the same [`GroupKind`].
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.group)
    }
}

/// The full identity of a resource type in one version.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    /// Creates a new identity from static parts without validation. Used for
    /// the compiled-in type identities.
    pub fn from_static(group: &str, version: &str, kind: &str) -> Self {
        Self {
            group: group.to_owned(),
            version: version.to_owned(),
            kind: kind.to_owned(),
        }
    }

    /// Returns the `<GROUP>/<VERSION>` string as used in the `apiVersion`
    /// field of objects.
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    pub fn group_kind(&self) -> GroupKind {
        GroupKind {
            group: self.group.clone(),
            kind: self.kind.clone(),
        }
    }

    /// Returns the same group and kind in another version.
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            group: self.group.clone(),
            version: version.into(),
            kind: self.kind.clone(),
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("vmoperator.vmware.com/v1alpha1", "vmoperator.vmware.com", "v1alpha1")]
    #[case("vmoperator.vmware.com/v1alpha2", "vmoperator.vmware.com", "v1alpha2")]
    #[case("apiextensions.k8s.io/v1", "apiextensions.k8s.io", "v1")]
    #[case("extensions/v1beta1", "extensions", "v1beta1")]
    fn valid_group_version(#[case] input: &str, #[case] group: &str, #[case] version: &str) {
        let group_version: GroupVersion = input.parse().expect("valid API version");

        assert_eq!(group_version.group(), group);
        assert_eq!(group_version.version(), version);
        assert_eq!(group_version.to_string(), input);
    }

    #[rstest]
    #[case("v1alpha1", ParseApiVersionError::MissingGroup { input: "v1alpha1".to_owned() })]
    #[case("/v1alpha1", ParseApiVersionError::ParseGroup { source: ParseGroupError::EmptyGroup })]
    #[case("VMOperator/v1", ParseApiVersionError::ParseGroup { source: ParseGroupError::InvalidGroup { group: "VMOperator".to_owned() } })]
    #[case("vmoperator.vmware.com/1alpha1", ParseApiVersionError::ParseVersion { source: ParseVersionError::InvalidVersion { version: "1alpha1".to_owned() } })]
    #[case("vmoperator.vmware.com/v1gamma1", ParseApiVersionError::ParseVersion { source: ParseVersionError::InvalidVersion { version: "v1gamma1".to_owned() } })]
    fn invalid_group_version(#[case] input: &str, #[case] expected: ParseApiVersionError) {
        let err = input
            .parse::<GroupVersion>()
            .expect_err("invalid API version");

        assert_eq!(err, expected);
    }

    #[test]
    fn group_too_long() {
        let group = "a".repeat(MAX_GROUP_LENGTH + 1);
        assert_eq!(validate_group(&group), Err(ParseGroupError::GroupTooLong));
    }

    #[test]
    fn gvk_display() {
        let gvk = GroupVersionKind::from_static(
            "vmoperator.vmware.com",
            "v1alpha1",
            "VirtualMachineClass",
        );

        assert_eq!(
            gvk.to_string(),
            "vmoperator.vmware.com/v1alpha1, Kind=VirtualMachineClass"
        );
        assert_eq!(gvk.api_version(), "vmoperator.vmware.com/v1alpha1");
        assert_eq!(
            gvk.group_kind().to_string(),
            "VirtualMachineClass.vmoperator.vmware.com"
        );
        assert_eq!(gvk.with_version("v1alpha2").version, "v1alpha2");
    }
}
