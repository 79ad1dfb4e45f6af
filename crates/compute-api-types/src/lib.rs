// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Definitions for model types exchanged with the compute management API.
//!
//! Every model is a tree of independently optional fields. Decoding ignores
//! fields this crate doesn't know about so that older clients keep working
//! when the service grows new properties, and enumeration-valued fields
//! accept strings that aren't in any of the known constants (see
//! [`compute_types::expandable`]). A field holding a value of the wrong JSON
//! kind decodes as absent instead of failing the whole object (see
//! [`compute_types::lenient`]).

use thiserror::Error;

pub mod codec;
pub mod creation_source;
pub mod disk;
pub mod enums;
pub mod image;
pub mod instance_view;
pub mod model;
pub mod patch;
pub mod placement;
pub mod sku;
pub mod uefi;
pub mod validate;

#[cfg(test)]
mod strategy;

pub use compute_types::{ExpandableEnum, Timestamp};
pub use creation_source::{CreationSource, CreationSourceType};
pub use disk::{CreationData, DiskSku, DiskSkuTypes, ImageDiskReference};
pub use enums::*;
pub use image::{DiskEncryptionSetParameters, ImageDisk, SubResource};
pub use instance_view::{
    InstanceViewStatus, PowerState, VirtualMachineInstanceView,
    VirtualMachinePatchStatus,
};
pub use model::{EnumFamily, ModelKind, UnknownName};
pub use patch::{ApiError, ApiErrorBase, AvailablePatchSummary};
pub use placement::Placement;
pub use sku::ResourceSku;
pub use uefi::{UefiKey, UefiKeySignatures};
pub use validate::{Validate, ValidationError};

/// Errors returned by the codec and validation entry points.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed JSON: {0}")]
    Format(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
