// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Patch assessment results and the service's error envelope.
//!
//! These are response-only types: they are produced by decoding and expose
//! nothing but getters.

use compute_types::{lenient, timestamp, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PatchOperationStatus;
use crate::validate::{self, Validate, ValidationError};

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBase {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    code: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    target: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    message: Option<String>,
}

impl ApiErrorBase {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Validate for ApiErrorBase {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// An error reported by the service, possibly with per-target details.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object_list"
    )]
    details: Option<Vec<ApiErrorBase>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    code: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    target: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    message: Option<String>,
}

impl ApiError {
    pub fn details(&self) -> Option<&[ApiErrorBase]> {
        self.details.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Validate for ApiError {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::each("details", &self.details)
    }
}

/// Summary of the most recent patch assessment on a virtual machine.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePatchSummary {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    status: Option<PatchOperationStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    assessment_activity_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    reboot_pending: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    critical_and_security_patch_count: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    other_patch_count: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize",
        deserialize_with = "timestamp::deserialize"
    )]
    start_time: Option<Timestamp>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize",
        deserialize_with = "timestamp::deserialize"
    )]
    last_modified_time: Option<Timestamp>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    error: Option<ApiError>,
}

impl AvailablePatchSummary {
    /// Overall outcome of the assessment. `CompletedWithWarnings` means
    /// some patches could not be assessed.
    pub fn status(&self) -> Option<PatchOperationStatus> {
        self.status
    }

    /// Correlates this assessment with the service's logs.
    pub fn assessment_activity_id(&self) -> Option<&str> {
        self.assessment_activity_id.as_deref()
    }

    pub fn reboot_pending(&self) -> Option<bool> {
        self.reboot_pending
    }

    pub fn critical_and_security_patch_count(&self) -> Option<i32> {
        self.critical_and_security_patch_count
    }

    pub fn other_patch_count(&self) -> Option<i32> {
        self.other_patch_count
    }

    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    pub fn last_modified_time(&self) -> Option<Timestamp> {
        self.last_modified_time
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

impl Validate for AvailablePatchSummary {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::nested("error", &self.error)
    }
}


#[cfg(test)]
mod test {
    use super::strategy::*;
    use super::*;
    use crate::codec::{decode, encode};
    use proptest::prelude::*;

    const SUMMARY: &str = r#"{
        "status": "CompletedWithWarnings",
        "assessmentActivityId": "68f8b292-dfc2-4646-9781-33cc88631968",
        "rebootPending": true,
        "criticalAndSecurityPatchCount": 1,
        "otherPatchCount": 2,
        "startTime": "2024-01-01T00:00:00Z",
        "lastModifiedTime": "not a timestamp",
        "error": {
            "code": "PatchAssessmentWarnings",
            "details": [
                {"code": "KB5031356", "message": "skipped", "target": "kb"}
            ],
            "innererror": {"exceptiontype": "Unknown"}
        }
    }"#;

    #[test]
    fn decodes_every_field() {
        let summary: AvailablePatchSummary =
            decode(SUMMARY).unwrap().unwrap();
        assert_eq!(
            summary.status(),
            Some(PatchOperationStatus::COMPLETED_WITH_WARNINGS)
        );
        assert_eq!(
            summary.assessment_activity_id(),
            Some("68f8b292-dfc2-4646-9781-33cc88631968")
        );
        assert_eq!(summary.reboot_pending(), Some(true));
        assert_eq!(summary.critical_and_security_patch_count(), Some(1));
        assert_eq!(summary.other_patch_count(), Some(2));
        assert_eq!(
            summary.start_time().map(|t| timestamp::format(&t)),
            Some("2024-01-01T00:00:00Z".to_owned())
        );
        assert_eq!(summary.last_modified_time(), None);

        let error = summary.error().unwrap();
        assert_eq!(error.code(), Some("PatchAssessmentWarnings"));
        let details = error.details().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].code(), Some("KB5031356"));
        assert_eq!(details[0].target(), Some("kb"));
        assert!(summary.validate().is_ok());
    }

    #[test]
    fn absent_fields_are_omitted() {
        assert_eq!(encode(&AvailablePatchSummary::default()).unwrap(), "{}");
        let summary: AvailablePatchSummary =
            decode(r#"{"otherPatchCount":0,"lastModifiedTime":null}"#)
                .unwrap()
                .unwrap();
        assert_eq!(encode(&summary).unwrap(), r#"{"otherPatchCount":0}"#);
    }

    #[test]
    fn re_encoding_is_stable() {
        let summary: AvailablePatchSummary =
            decode(SUMMARY).unwrap().unwrap();
        let json = encode(&summary).unwrap();
        let again: AvailablePatchSummary = decode(&json).unwrap().unwrap();
        assert_eq!(again, summary);
        assert_eq!(encode(&again).unwrap(), json);
        assert!(json.starts_with(r#"{"status":"CompletedWithWarnings","#));
        assert!(!json.contains("innererror"));
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let summary: AvailablePatchSummary = decode(
            r#"{"otherPatchCount":1,"status":"Failed","otherPatchCount":3}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(summary.other_patch_count(), Some(3));
        assert_eq!(summary.status(), Some(PatchOperationStatus::FAILED));
    }

    #[test]
    fn mistyped_fields_are_absent() {
        let summary: AvailablePatchSummary = decode(
            r#"{
                "rebootPending": "true",
                "otherPatchCount": -1.5,
                "status": ["Succeeded"],
                "error": {"details": [null, {"code": 4}, "x", {"code": "E"}]}
            }"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(summary.reboot_pending(), None);
        assert_eq!(summary.other_patch_count(), None);
        assert_eq!(summary.status(), None);

        let details = summary.error().and_then(ApiError::details).unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0], ApiErrorBase::default());
        assert_eq!(details[1].code(), Some("E"));
    }

    proptest! {
        #[test]
        fn api_error_base_round_trips(base in api_error_base()) {
            let json = encode(&base).unwrap();
            prop_assert_eq!(
                decode::<ApiErrorBase>(&json).unwrap(),
                Some(base)
            );
        }

        #[test]
        fn api_error_round_trips(error in api_error()) {
            let json = encode(&error).unwrap();
            prop_assert_eq!(decode::<ApiError>(&json).unwrap(), Some(error));
        }

        #[test]
        fn summary_round_trips(summary in available_patch_summary()) {
            let json = encode(&summary).unwrap();
            let decoded: AvailablePatchSummary =
                decode(&json).unwrap().unwrap();

            // Timestamps compare by instant; the offset must survive too.
            let offsets = |s: &AvailablePatchSummary| {
                [s.start_time(), s.last_modified_time()]
                    .map(|t| t.map(|t| t.offset().local_minus_utc()))
            };
            prop_assert_eq!(offsets(&decoded), offsets(&summary));
            prop_assert_eq!(decoded, summary);
        }
    }
}
