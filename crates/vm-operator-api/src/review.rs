//! Handling of `ConversionReview`s sent by the Kubernetes API server.
//!
//! The API server sends a batch of objects together with the desired API
//! version. Every object is decoded via the [`Scheme`], routed through the
//! hub and encoded again. A single failing object fails the whole review.
use std::{error::Error as _, fmt::Write};

use kube::core::{
    conversion::{ConversionRequest, ConversionResponse, ConversionReview},
    response::{Status, StatusSummary},
};
use snafu::{ResultExt, Snafu, ensure};
use tracing::{Span, debug, field::Empty, instrument, warn};

use crate::{
    conversion::ConversionError,
    gvk::{GroupVersion, GroupVersionKind, ParseApiVersionError},
    scheme::{DecodeError, Scheme},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to parse desired apiVersion {api_version:?}"))]
    ParseDesiredApiVersion {
        source: ParseApiVersionError,
        api_version: String,
    },

    #[snafu(display("failed to decode object at index {index}"))]
    DecodeObject { source: DecodeError, index: usize },

    #[snafu(display("cannot convert {gvk} into a different group {desired_group:?}"))]
    GroupMismatch {
        gvk: GroupVersionKind,
        desired_group: String,
    },

    #[snafu(display("failed to convert object at index {index}"))]
    ConvertObject {
        source: ConversionError,
        index: usize,
    },

    #[snafu(display("failed to encode converted object of type {gvk}"))]
    EncodeObject {
        source: serde_json::Error,
        gvk: GroupVersionKind,
    },
}

impl Error {
    /// The HTTP status code reported back to the API server.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::ParseDesiredApiVersion { .. } => 400,
            Self::DecodeObject { .. } => 400,
            Self::GroupMismatch { .. } => 400,
            Self::ConvertObject { source, .. } => match source {
                ConversionError::UnregisteredKind { .. } => 400,
                ConversionError::TypeMismatch { .. }
                | ConversionError::NoHub { .. }
                | ConversionError::NotConvertible { .. } => 500,
            },
            Self::EncodeObject { .. } => 500,
        }
    }

    /// Renders this error followed by all of its sources, separated by
    /// colons.
    pub fn join_errors(&self) -> String {
        let mut message = self.to_string();

        let mut source = self.source();
        while let Some(err) = source {
            write!(message, ": {err}").expect("writing to a String can not fail");
            source = err.source();
        }

        message
    }
}

/// Converts all objects of the [`ConversionReview`] into the desired API
/// version, using the given `scheme`.
///
/// The returned review either indicates success, carrying the converted
/// objects in their original order, or a failure, carrying no objects at all.
/// Both keep the `uid` of the request. A review without a request is answered
/// with a failure status.
#[instrument(
    skip_all,
    fields(
        k8s.crd.conversion.uid = Empty,
        k8s.crd.conversion.desired_api_version = Empty,
        k8s.crd.conversion.object_count = Empty,
    )
)]
pub fn try_convert(scheme: &Scheme, review: ConversionReview) -> ConversionReview {
    let request = match ConversionRequest::from_review(review) {
        Ok(request) => request,
        Err(err) => {
            warn!(error = %err, "received invalid conversion review");

            return ConversionResponse::invalid(Status {
                status: Some(StatusSummary::Failure),
                code: 400,
                message: format!("the ConversionReview did not include a request: {err}"),
                reason: "ConversionReview request missing".to_owned(),
                metadata: None,
                details: None,
            })
            .into_review();
        }
    };

    let span = Span::current();
    span.record("k8s.crd.conversion.uid", request.uid.as_str());
    span.record(
        "k8s.crd.conversion.desired_api_version",
        request.desired_api_version.as_str(),
    );
    span.record("k8s.crd.conversion.object_count", request.objects.len());

    let converted = convert_objects(scheme, &request.objects, &request.desired_api_version);
    let response = ConversionResponse::for_request(request);

    let response = match converted {
        Ok(converted_objects) => {
            debug!("successfully converted objects");
            response.success(converted_objects)
        }
        Err(err) => {
            let message = err.join_errors();
            warn!(error = %message, "failed to convert objects");

            response.failure(Status {
                status: Some(StatusSummary::Failure),
                code: err.http_status_code(),
                message: message.clone(),
                reason: message,
                metadata: None,
                details: None,
            })
        }
    };

    response.into_review()
}

fn convert_objects(
    scheme: &Scheme,
    objects: &[serde_json::Value],
    desired_api_version: &str,
) -> Result<Vec<serde_json::Value>, Error> {
    let desired = desired_api_version
        .parse::<GroupVersion>()
        .context(ParseDesiredApiVersionSnafu {
            api_version: desired_api_version,
        })?;

    let mut converted_objects = Vec::with_capacity(objects.len());

    for (index, object) in objects.iter().enumerate() {
        let object = scheme
            .from_json_value(object.clone())
            .context(DecodeObjectSnafu { index })?;
        let gvk = object.group_version_kind();

        ensure!(
            gvk.group == desired.group(),
            GroupMismatchSnafu {
                gvk,
                desired_group: desired.group(),
            }
        );

        let converted = scheme
            .convert(object.as_ref(), desired.version())
            .context(ConvertObjectSnafu { index })?;

        let encoded = converted.to_json_value().context(EncodeObjectSnafu {
            gvk: converted.group_version_kind(),
        })?;

        converted_objects.push(encoded);
    }

    Ok(converted_objects)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{SCHEME, gvk::GroupKind};

    fn review(desired_api_version: &str, objects: Vec<serde_json::Value>) -> ConversionReview {
        serde_json::from_value(json!({
            "apiVersion": "apiextensions.k8s.io/v1",
            "kind": "ConversionReview",
            "request": {
                "uid": "705ab4f5-6393-11e8-b7cc-42010a800002",
                "desiredAPIVersion": desired_api_version,
                "objects": objects,
            }
        }))
        .expect("review fixture is valid")
    }

    #[test]
    fn objects_keep_their_order() {
        let objects: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                json!({
                    "apiVersion": "vmoperator.vmware.com/v1alpha1",
                    "kind": "ContentSourceBinding",
                    "metadata": {"name": name, "namespace": "default"},
                    "contentSourceRef": {"name": "source"},
                })
            })
            .collect();

        let converted = convert_objects(&SCHEME, &objects, "vmoperator.vmware.com/v1alpha2")
            .expect("bindings convert to the hub");

        let names: Vec<_> = converted
            .iter()
            .map(|object| object["metadata"]["name"].as_str())
            .collect();
        assert_eq!(names, [Some("a"), Some("b"), Some("c")]);
        assert!(
            converted
                .iter()
                .all(|object| object["apiVersion"] == "vmoperator.vmware.com/v1alpha2")
        );
    }

    #[rstest]
    #[case::not_a_group_version("v1alpha2", 400)]
    #[case::unknown_version("vmoperator.vmware.com/v1", 400)]
    #[case::other_group("other.example.com/v1alpha2", 400)]
    fn invalid_desired_api_version_fails(#[case] desired_api_version: &str, #[case] code: u16) {
        let objects = vec![json!({
            "apiVersion": "vmoperator.vmware.com/v1alpha1",
            "kind": "ContentLibraryProvider",
            "metadata": {"name": "library"},
            "spec": {"uuid": "1234-uuid"},
        })];

        let err = convert_objects(&SCHEME, &objects, desired_api_version)
            .expect_err("desired apiVersion cannot be served");
        assert_eq!(err.http_status_code(), code);
    }

    #[test]
    fn error_message_contains_sources() {
        let objects = vec![json!({"kind": "VirtualMachineClass"})];

        let err = convert_objects(&SCHEME, &objects, "vmoperator.vmware.com/v1alpha2")
            .expect_err("object has no apiVersion");

        assert_eq!(
            err.join_errors(),
            r#"failed to decode object at index 0: the object has no "apiVersion" field"#
        );
    }

    #[test]
    fn missing_hub_is_a_server_error() {
        let err = Error::ConvertObject {
            source: ConversionError::NoHub {
                group_kind: GroupKind {
                    group: "vmoperator.vmware.com".to_owned(),
                    kind: "VirtualMachineClass".to_owned(),
                },
            },
            index: 0,
        };

        assert_eq!(err.http_status_code(), 500);
    }

    #[test]
    fn failure_keeps_uid() {
        let review = review(
            "vmoperator.vmware.com/v1alpha1",
            vec![json!({"apiVersion": "vmoperator.vmware.com/v1alpha1", "kind": "VirtualMachine"})],
        );

        let response = try_convert(&SCHEME, review)
            .response
            .expect("review has a response");

        assert_eq!(response.uid, "705ab4f5-6393-11e8-b7cc-42010a800002");
        assert_eq!(response.result.status, Some(StatusSummary::Failure));
        assert!(response.converted_objects.is_empty());
    }
}
