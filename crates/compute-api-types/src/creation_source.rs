// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Where a disk or snapshot came from.
//!
//! [`CreationSource`] is a read-only view over a [`CreationData`] that
//! classifies it by which of its optional fields are populated. It stores
//! nothing of its own.

use std::fmt;

use compute_types::resource_id;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::disk::CreationData;
use crate::enums::DiskCreateOption;

/// The provenance of a disk or snapshot.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreationSourceType {
    FromOsDiskImage,
    FromDataDiskImage,
    ImportedFromVhd,
    CopiedFromDisk,
    CopiedFromSnapshot,
    Empty,
    Unknown,
}

impl fmt::Display for CreationSourceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::FromOsDiskImage => "FROM_OS_DISK_IMAGE",
            Self::FromDataDiskImage => "FROM_DATA_DISK_IMAGE",
            Self::ImportedFromVhd => "IMPORTED_FROM_VHD",
            Self::CopiedFromDisk => "COPIED_FROM_DISK",
            Self::CopiedFromSnapshot => "COPIED_FROM_SNAPSHOT",
            Self::Empty => "EMPTY",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

const DISKS: &str = "disks";
const SNAPSHOTS: &str = "snapshots";

/// Returned by [`CreationSource::source_data_disk_image_lun`] when the
/// source is not a data disk image.
pub const NO_LUN: i32 = -1;

#[derive(Clone, Copy, Debug)]
pub struct CreationSource<'a> {
    data: &'a CreationData,
}

impl<'a> CreationSource<'a> {
    pub fn new(data: &'a CreationData) -> Self {
        Self { data }
    }

    /// The resource a copy was taken from: `sourceResourceId` if set,
    /// otherwise `sourceUri`.
    fn copy_source(&self) -> Option<&'a str> {
        self.data.source_resource_id().or_else(|| self.data.source_uri())
    }

    pub fn source_type(&self) -> CreationSourceType {
        let Some(option) = self.data.create_option() else {
            return CreationSourceType::Unknown;
        };

        if option == DiskCreateOption::FROM_IMAGE {
            match self.data.image_reference() {
                Some(image) if image.lun().is_none() => {
                    CreationSourceType::FromOsDiskImage
                }
                Some(_) => CreationSourceType::FromDataDiskImage,
                None => CreationSourceType::Unknown,
            }
        } else if option == DiskCreateOption::IMPORT {
            CreationSourceType::ImportedFromVhd
        } else if option == DiskCreateOption::COPY {
            match self.copy_source() {
                Some(id) if resource_id::is_resource_type(id, DISKS) => {
                    CreationSourceType::CopiedFromDisk
                }
                Some(id) if resource_id::is_resource_type(id, SNAPSHOTS) => {
                    CreationSourceType::CopiedFromSnapshot
                }
                _ => CreationSourceType::Unknown,
            }
        } else if option == DiskCreateOption::EMPTY {
            CreationSourceType::Empty
        } else {
            CreationSourceType::Unknown
        }
    }

    /// The identifier of the source, consistent with [`Self::source_type`].
    pub fn source_id(&self) -> Option<&'a str> {
        match self.source_type() {
            CreationSourceType::FromOsDiskImage
            | CreationSourceType::FromDataDiskImage => {
                self.data.image_reference().and_then(|image| image.id())
            }
            CreationSourceType::ImportedFromVhd => self.data.source_uri(),
            CreationSourceType::CopiedFromDisk
            | CreationSourceType::CopiedFromSnapshot => self.copy_source(),
            CreationSourceType::Empty | CreationSourceType::Unknown => None,
        }
    }

    /// The image LUN for a data disk image source, else [`NO_LUN`].
    pub fn source_data_disk_image_lun(&self) -> i32 {
        match self.source_type() {
            CreationSourceType::FromDataDiskImage => self
                .data
                .image_reference()
                .and_then(|image| image.lun())
                .unwrap_or(NO_LUN),
            _ => NO_LUN,
        }
    }
}

impl CreationData {
    pub fn source(&self) -> CreationSource<'_> {
        CreationSource::new(self)
    }
}
