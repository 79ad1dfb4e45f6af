// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name-based access to the model types and enumeration families, for
//! tooling that picks a type at runtime.

use std::fmt;

use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec;
use crate::validate::Validate;
use crate::Error;
use crate::*;

/// Type-erased operations over one model type.
struct Ops {
    normalize: fn(Value, bool) -> Result<String, Error>,
    validate: fn(Value) -> Result<(), Error>,
    schema: fn() -> RootSchema,
}

impl Ops {
    fn of<T>() -> Self
    where
        T: DeserializeOwned + Serialize + Validate + JsonSchema,
    {
        Self {
            normalize: normalize::<T>,
            validate: validate::<T>,
            schema: || schemars::schema_for!(T),
        }
    }
}

fn normalize<T>(value: Value, pretty: bool) -> Result<String, Error>
where
    T: DeserializeOwned + Serialize,
{
    let model = codec::decode_value::<T>(value)?;
    if pretty {
        codec::encode_pretty(&model)
    } else {
        codec::encode(&model)
    }
}

fn validate<T>(value: Value) -> Result<(), Error>
where
    T: DeserializeOwned + Validate,
{
    match codec::decode_value::<T>(value)? {
        Some(model) => Ok(model.validate()?),
        None => Ok(()),
    }
}

macro_rules! model_kinds {
    ($($kind:ident),* $(,)?) => {
        /// A model type, selectable by its name.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ModelKind {
            $($kind,)*
        }

        impl ModelKind {
            pub const ALL: &'static [ModelKind] = &[$(ModelKind::$kind,)*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(ModelKind::$kind => stringify!($kind),)*
                }
            }

            fn ops(&self) -> Ops {
                match self {
                    $(ModelKind::$kind => Ops::of::<$kind>(),)*
                }
            }
        }
    };
}

model_kinds! {
    ApiError,
    ApiErrorBase,
    AvailablePatchSummary,
    CreationData,
    DiskEncryptionSetParameters,
    DiskSku,
    ImageDisk,
    ImageDiskReference,
    InstanceViewStatus,
    Placement,
    ResourceSku,
    SubResource,
    UefiKey,
    UefiKeySignatures,
    VirtualMachineInstanceView,
    VirtualMachinePatchStatus,
}

impl ModelKind {
    /// Decodes `value` as this model and re-encodes it as JSON text:
    /// unknown fields and values of the wrong kind dropped, fields in
    /// declaration order. Anything but a JSON object becomes `null`.
    pub fn normalize(
        &self,
        value: Value,
        pretty: bool,
    ) -> Result<String, Error> {
        (self.ops().normalize)(value, pretty)
    }

    /// Decodes `value` as this model and validates it. A JSON `null` is
    /// accepted.
    pub fn validate(&self, value: Value) -> Result<(), Error> {
        (self.ops().validate)(value)
    }

    pub fn schema(&self) -> RootSchema {
        (self.ops().schema)()
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ModelKind {
    type Err = UnknownName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownName::new("model", s, Self::ALL))
    }
}

/// A model or enumeration family name that isn't recognized.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown {what} '{name}', expected one of: {expected}")]
pub struct UnknownName {
    what: &'static str,
    name: String,
    expected: String,
}

impl UnknownName {
    fn new<T: fmt::Display>(
        what: &'static str,
        name: &str,
        all: &[T],
    ) -> Self {
        let expected = all
            .iter()
            .map(|n| format!("'{n}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self { what, name: name.to_owned(), expected }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An open enumeration family, selectable by its type name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumFamily {
    AvailabilitySetSkuTypes,
    CachingTypes,
    ComputeSkuTier,
    DiskCreateOption,
    DiskSkuTypes,
    DiskStorageAccountTypes,
    EncryptionStatus,
    PatchOperationStatus,
    PowerState,
    StatusLevelTypes,
    UefiKeyType,
    ZonePlacementPolicyType,
}

fn strings<T: ExpandableEnum>() -> Vec<&'static str> {
    T::values().iter().map(T::as_str).collect()
}

impl EnumFamily {
    pub const ALL: &'static [EnumFamily] = &[
        Self::AvailabilitySetSkuTypes,
        Self::CachingTypes,
        Self::ComputeSkuTier,
        Self::DiskCreateOption,
        Self::DiskSkuTypes,
        Self::DiskStorageAccountTypes,
        Self::EncryptionStatus,
        Self::PatchOperationStatus,
        Self::PowerState,
        Self::StatusLevelTypes,
        Self::UefiKeyType,
        Self::ZonePlacementPolicyType,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AvailabilitySetSkuTypes => "AvailabilitySetSkuTypes",
            Self::CachingTypes => "CachingTypes",
            Self::ComputeSkuTier => "ComputeSkuTier",
            Self::DiskCreateOption => "DiskCreateOption",
            Self::DiskSkuTypes => "DiskSkuTypes",
            Self::DiskStorageAccountTypes => "DiskStorageAccountTypes",
            Self::EncryptionStatus => "EncryptionStatus",
            Self::PatchOperationStatus => "PatchOperationStatus",
            Self::PowerState => "PowerState",
            Self::StatusLevelTypes => "StatusLevelTypes",
            Self::UefiKeyType => "UefiKeyType",
            Self::ZonePlacementPolicyType => "ZonePlacementPolicyType",
        }
    }

    /// Registers `value` in this family, as if it had been decoded.
    pub fn register(&self, value: &str) {
        match self {
            Self::AvailabilitySetSkuTypes => {
                AvailabilitySetSkuTypes::from_string(value);
            }
            Self::CachingTypes => {
                CachingTypes::from_string(value);
            }
            Self::ComputeSkuTier => {
                ComputeSkuTier::from_string(value);
            }
            Self::DiskCreateOption => {
                DiskCreateOption::from_string(value);
            }
            Self::DiskSkuTypes => {
                DiskSkuTypes::from_storage_account_type(
                    DiskStorageAccountTypes::from_string(value),
                );
            }
            Self::DiskStorageAccountTypes => {
                DiskStorageAccountTypes::from_string(value);
            }
            Self::EncryptionStatus => {
                EncryptionStatus::from_string(value);
            }
            Self::PatchOperationStatus => {
                PatchOperationStatus::from_string(value);
            }
            Self::PowerState => {
                PowerState::from_string(value);
            }
            Self::StatusLevelTypes => {
                StatusLevelTypes::from_string(value);
            }
            Self::UefiKeyType => {
                UefiKeyType::from_string(value);
            }
            Self::ZonePlacementPolicyType => {
                ZonePlacementPolicyType::from_string(value);
            }
        }
    }

    /// The canonical strings registered in this family so far, in no
    /// particular order.
    pub fn values(&self) -> Vec<&'static str> {
        match self {
            Self::AvailabilitySetSkuTypes => {
                strings::<AvailabilitySetSkuTypes>()
            }
            Self::CachingTypes => strings::<CachingTypes>(),
            Self::ComputeSkuTier => strings::<ComputeSkuTier>(),
            Self::DiskCreateOption => strings::<DiskCreateOption>(),
            Self::DiskSkuTypes => DiskSkuTypes::values()
                .iter()
                .map(|sku| sku.account_type().as_str())
                .collect(),
            Self::DiskStorageAccountTypes => {
                strings::<DiskStorageAccountTypes>()
            }
            Self::EncryptionStatus => strings::<EncryptionStatus>(),
            Self::PatchOperationStatus => strings::<PatchOperationStatus>(),
            Self::PowerState => strings::<PowerState>(),
            Self::StatusLevelTypes => strings::<StatusLevelTypes>(),
            Self::UefiKeyType => strings::<UefiKeyType>(),
            Self::ZonePlacementPolicyType => {
                strings::<ZonePlacementPolicyType>()
            }
        }
    }
}

impl fmt::Display for EnumFamily {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for EnumFamily {
    type Err = UnknownName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownName::new("enum family", s, Self::ALL))
    }
}
