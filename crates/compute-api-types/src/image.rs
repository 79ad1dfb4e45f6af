// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Disks belonging to a captured image.

use compute_types::lenient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CachingTypes, DiskStorageAccountTypes};
use crate::validate::{self, Validate, ValidationError};

/// A reference to another ARM resource by ID.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct SubResource {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    id: Option<String>,
}

impl SubResource {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for SubResource {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.id {
            Some(_) => Ok(()),
            None => Err(ValidationError::missing("SubResource", "id")),
        }
    }
}

/// The customer-managed disk encryption set to use for a disk.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct DiskEncryptionSetParameters {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    id: Option<String>,
}

impl DiskEncryptionSetParameters {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Validate for DiskEncryptionSetParameters {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.id {
            Some(_) => Ok(()),
            None => Err(ValidationError::missing(
                "DiskEncryptionSetParameters",
                "id",
            )),
        }
    }
}

/// One disk of an image: where its contents come from and how it should be
/// provisioned.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ImageDisk {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    snapshot: Option<SubResource>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    managed_disk: Option<SubResource>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    blob_uri: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    caching: Option<CachingTypes>,
    #[serde(
        rename = "diskSizeGB",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    disk_size_gb: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    storage_account_type: Option<DiskStorageAccountTypes>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    disk_encryption_set: Option<DiskEncryptionSetParameters>,
}

impl ImageDisk {
    pub fn snapshot(&self) -> Option<&SubResource> {
        self.snapshot.as_ref()
    }

    pub fn managed_disk(&self) -> Option<&SubResource> {
        self.managed_disk.as_ref()
    }

    /// URI of the VHD blob the disk was captured from.
    pub fn blob_uri(&self) -> Option<&str> {
        self.blob_uri.as_deref()
    }

    pub fn caching(&self) -> Option<CachingTypes> {
        self.caching
    }

    /// Requested size in GiB. Used to grow the disk beyond the size of the
    /// source; it cannot shrink it.
    pub fn disk_size_gb(&self) -> Option<i32> {
        self.disk_size_gb
    }

    pub fn storage_account_type(&self) -> Option<DiskStorageAccountTypes> {
        self.storage_account_type
    }

    pub fn disk_encryption_set(&self) -> Option<&DiskEncryptionSetParameters> {
        self.disk_encryption_set.as_ref()
    }

    pub fn with_snapshot(mut self, snapshot: SubResource) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_managed_disk(mut self, managed_disk: SubResource) -> Self {
        self.managed_disk = Some(managed_disk);
        self
    }

    pub fn with_blob_uri(mut self, blob_uri: impl Into<String>) -> Self {
        self.blob_uri = Some(blob_uri.into());
        self
    }

    pub fn with_caching(mut self, caching: CachingTypes) -> Self {
        self.caching = Some(caching);
        self
    }

    pub fn with_disk_size_gb(mut self, disk_size_gb: i32) -> Self {
        self.disk_size_gb = Some(disk_size_gb);
        self
    }

    pub fn with_storage_account_type(
        mut self,
        storage_account_type: DiskStorageAccountTypes,
    ) -> Self {
        self.storage_account_type = Some(storage_account_type);
        self
    }

    pub fn with_disk_encryption_set(
        mut self,
        disk_encryption_set: DiskEncryptionSetParameters,
    ) -> Self {
        self.disk_encryption_set = Some(disk_encryption_set);
        self
    }
}

impl Validate for ImageDisk {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::nested("snapshot", &self.snapshot)?;
        validate::nested("managedDisk", &self.managed_disk)?;
        validate::nested("diskEncryptionSet", &self.disk_encryption_set)
    }
}
