// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime view of a virtual machine as reported by the service.

use compute_types::{expandable_enum, lenient, timestamp, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StatusLevelTypes;
use crate::patch::AvailablePatchSummary;
use crate::validate::{self, Validate, ValidationError};

expandable_enum! {
    /// Power state of a virtual machine, as carried in the `code` of one of
    /// its instance-view statuses.
    pub struct PowerState {
        STARTING = "PowerState/starting",
        RUNNING = "PowerState/running",
        STOPPING = "PowerState/stopping",
        STOPPED = "PowerState/stopped",
        DEALLOCATING = "PowerState/deallocating",
        DEALLOCATED = "PowerState/deallocated",
        UNKNOWN = "PowerState/unknown",
    }
}

const POWER_STATE_PREFIX: &str = "PowerState/";

impl PowerState {
    /// Picks the power state out of an instance view's statuses: the first
    /// status whose code starts with `PowerState/`.
    pub fn from_instance_view(
        view: &VirtualMachineInstanceView,
    ) -> Option<PowerState> {
        view.statuses()
            .into_iter()
            .flatten()
            .filter_map(InstanceViewStatus::code)
            .find(|code| code.starts_with(POWER_STATE_PREFIX))
            .map(PowerState::from_string)
    }
}

/// A single status entry in an instance view.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct InstanceViewStatus {
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
    level: Option<StatusLevelTypes>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    display_status: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize",
        deserialize_with = "timestamp::deserialize"
    )]
    time: Option<Timestamp>,
}

impl InstanceViewStatus {
    /// Machine-readable code, e.g. `ProvisioningState/succeeded`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn level(&self) -> Option<StatusLevelTypes> {
        self.level
    }

    pub fn display_status(&self) -> Option<&str> {
        self.display_status.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn time(&self) -> Option<Timestamp> {
        self.time
    }
}

impl Validate for InstanceViewStatus {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachinePatchStatus {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    available_patch_summary: Option<AvailablePatchSummary>,
}

impl VirtualMachinePatchStatus {
    pub fn available_patch_summary(&self) -> Option<&AvailablePatchSummary> {
        self.available_patch_summary.as_ref()
    }
}

impl Validate for VirtualMachinePatchStatus {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::nested(
            "availablePatchSummary",
            &self.available_patch_summary,
        )
    }
}

/// The instance view of a virtual machine.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineInstanceView {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    computer_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    os_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    os_version: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object_list"
    )]
    statuses: Option<Vec<InstanceViewStatus>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    patch_status: Option<VirtualMachinePatchStatus>,
}

impl VirtualMachineInstanceView {
    pub fn computer_name(&self) -> Option<&str> {
        self.computer_name.as_deref()
    }

    pub fn os_name(&self) -> Option<&str> {
        self.os_name.as_deref()
    }

    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    pub fn statuses(&self) -> Option<&[InstanceViewStatus]> {
        self.statuses.as_deref()
    }

    pub fn patch_status(&self) -> Option<&VirtualMachinePatchStatus> {
        self.patch_status.as_ref()
    }

    /// Shorthand for [`PowerState::from_instance_view`].
    pub fn power_state(&self) -> Option<PowerState> {
        PowerState::from_instance_view(self)
    }
}

impl Validate for VirtualMachineInstanceView {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::each("statuses", &self.statuses)?;
        validate::nested("patchStatus", &self.patch_status)
    }
}
