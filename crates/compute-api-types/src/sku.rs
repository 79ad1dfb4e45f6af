// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use compute_types::lenient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ComputeSkuTier;
use crate::validate::{Validate, ValidationError};

/// A SKU offered by the compute resource provider in some region.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSku {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    resource_type: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    tier: Option<ComputeSkuTier>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    size: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    family: Option<String>,
}

impl ResourceSku {
    /// e.g. `virtualMachines` or `disks`.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn tier(&self) -> Option<ComputeSkuTier> {
        self.tier
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }
}

impl Validate for ResourceSku {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::strategy;
    use proptest::prelude::*;

    #[test]
    fn decodes_listing_entry() {
        let sku: ResourceSku = decode(
            r#"{
                "resourceType": "virtualMachines",
                "name": "Standard_D2s_v5",
                "tier": "Standard",
                "size": "D2s_v5",
                "family": "standardDSv5Family",
                "locations": ["eastus"],
                "capabilities": [{"name": "vCPUs", "value": "2"}]
            }"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sku.tier(), Some(ComputeSkuTier::STANDARD));
        assert_eq!(sku.size(), Some("D2s_v5"));
        assert_eq!(sku.family(), Some("standardDSv5Family"));
    }

    #[test]
    fn unexpected_tier_is_kept_verbatim() {
        let sku: ResourceSku =
            decode(r#"{"tier":"Spot"}"#).unwrap().unwrap();
        assert_eq!(sku.tier().map(|t| t.as_str()), Some("Spot"));
    }

    #[test]
    fn mistyped_fields_are_absent() {
        let sku: ResourceSku = decode(
            r#"{"name":"Standard_B1s","tier":{"name":"Standard"},"size":1}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(sku.name(), Some("Standard_B1s"));
        assert_eq!(sku.tier(), None);
        assert_eq!(sku.size(), None);
    }

    fn resource_sku() -> impl Strategy<Value = ResourceSku> {
        (
            strategy::text(),
            strategy::text(),
            prop::option::of(strategy::expandable(ComputeSkuTier::KNOWN)),
            strategy::text(),
            strategy::text(),
        )
            .prop_map(|(resource_type, name, tier, size, family)| {
                ResourceSku { resource_type, name, tier, size, family }
            })
    }

    proptest! {
        #[test]
        fn round_trips(sku in resource_sku()) {
            let json = encode(&sku).unwrap();
            prop_assert_eq!(decode::<ResourceSku>(&json).unwrap(), Some(sku));
        }
    }
}
