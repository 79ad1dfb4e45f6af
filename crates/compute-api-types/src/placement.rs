// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use compute_types::lenient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ZonePlacementPolicyType;
use crate::validate::{Validate, ValidationError};

/// Zone placement constraints for a virtual machine.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    zone_placement_policy: Option<ZonePlacementPolicyType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::list"
    )]
    include_zones: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::list"
    )]
    exclude_zones: Option<Vec<String>>,
}

impl Placement {
    pub fn zone_placement_policy(&self) -> Option<ZonePlacementPolicyType> {
        self.zone_placement_policy
    }

    /// Zones the platform may choose from. Only meaningful with a
    /// placement policy of `Any`.
    pub fn include_zones(&self) -> Option<&[String]> {
        self.include_zones.as_deref()
    }

    /// Zones the platform must not choose.
    pub fn exclude_zones(&self) -> Option<&[String]> {
        self.exclude_zones.as_deref()
    }

    pub fn with_zone_placement_policy(
        mut self,
        policy: ZonePlacementPolicyType,
    ) -> Self {
        self.zone_placement_policy = Some(policy);
        self
    }

    pub fn with_include_zones(mut self, zones: Vec<String>) -> Self {
        self.include_zones = Some(zones);
        self
    }

    pub fn with_exclude_zones(mut self, zones: Vec<String>) -> Self {
        self.exclude_zones = Some(zones);
        self
    }
}

impl Validate for Placement {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
