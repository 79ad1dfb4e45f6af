// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Managed disk types: creation data, SKUs, and image references.

use std::fmt;
use std::hash::{Hash, Hasher};

use compute_types::{lenient, Registry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DiskCreateOption, DiskStorageAccountTypes};
use crate::validate::{self, Validate, ValidationError};

/// The source image used to create a disk: a platform image, a shared
/// gallery image, or a community gallery image.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ImageDiskReference {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    shared_gallery_image_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    community_gallery_image_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    lun: Option<i32>,
}

impl ImageDiskReference {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn shared_gallery_image_id(&self) -> Option<&str> {
        self.shared_gallery_image_id.as_deref()
    }

    pub fn community_gallery_image_id(&self) -> Option<&str> {
        self.community_gallery_image_id.as_deref()
    }

    /// Which of the image's data disks to use. Absent when the reference
    /// is to the OS disk.
    pub fn lun(&self) -> Option<i32> {
        self.lun
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_shared_gallery_image_id(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.shared_gallery_image_id = Some(id.into());
        self
    }

    pub fn with_community_gallery_image_id(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.community_gallery_image_id = Some(id.into());
        self
    }

    pub fn with_lun(mut self, lun: i32) -> Self {
        self.lun = Some(lun);
        self
    }
}

impl Validate for ImageDiskReference {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_none()
            && self.shared_gallery_image_id.is_none()
            && self.community_gallery_image_id.is_none()
        {
            return Err(ValidationError::new(
                "ImageDiskReference",
                "id",
                "one of id, sharedGalleryImageId or communityGalleryImageId \
                 is required",
            ));
        }
        Ok(())
    }
}

/// How a disk was created, and from what.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct CreationData {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    create_option: Option<DiskCreateOption>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    storage_account_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    image_reference: Option<ImageDiskReference>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    gallery_image_reference: Option<ImageDiskReference>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    source_uri: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    source_resource_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    source_unique_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    upload_size_bytes: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    logical_sector_size: Option<i32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    security_data_uri: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    performance_plus: Option<bool>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    elastic_san_resource_id: Option<String>,
}

impl CreationData {
    pub fn new(create_option: DiskCreateOption) -> Self {
        Self { create_option: Some(create_option), ..Default::default() }
    }

    pub fn create_option(&self) -> Option<DiskCreateOption> {
        self.create_option
    }

    /// The storage account holding the blob to import. Only used with
    /// `Import`.
    pub fn storage_account_id(&self) -> Option<&str> {
        self.storage_account_id.as_deref()
    }

    pub fn image_reference(&self) -> Option<&ImageDiskReference> {
        self.image_reference.as_ref()
    }

    pub fn gallery_image_reference(&self) -> Option<&ImageDiskReference> {
        self.gallery_image_reference.as_ref()
    }

    pub fn source_uri(&self) -> Option<&str> {
        self.source_uri.as_deref()
    }

    pub fn source_resource_id(&self) -> Option<&str> {
        self.source_resource_id.as_deref()
    }

    /// Set by the service; identifies the source even after it's deleted.
    pub fn source_unique_id(&self) -> Option<&str> {
        self.source_unique_id.as_deref()
    }

    pub fn upload_size_bytes(&self) -> Option<i64> {
        self.upload_size_bytes
    }

    pub fn logical_sector_size(&self) -> Option<i32> {
        self.logical_sector_size
    }

    pub fn security_data_uri(&self) -> Option<&str> {
        self.security_data_uri.as_deref()
    }

    pub fn performance_plus(&self) -> Option<bool> {
        self.performance_plus
    }

    pub fn elastic_san_resource_id(&self) -> Option<&str> {
        self.elastic_san_resource_id.as_deref()
    }

    pub fn with_create_option(mut self, option: DiskCreateOption) -> Self {
        self.create_option = Some(option);
        self
    }

    pub fn with_storage_account_id(mut self, id: impl Into<String>) -> Self {
        self.storage_account_id = Some(id.into());
        self
    }

    pub fn with_image_reference(
        mut self,
        reference: ImageDiskReference,
    ) -> Self {
        self.image_reference = Some(reference);
        self
    }

    pub fn with_gallery_image_reference(
        mut self,
        reference: ImageDiskReference,
    ) -> Self {
        self.gallery_image_reference = Some(reference);
        self
    }

    pub fn with_source_uri(mut self, uri: impl Into<String>) -> Self {
        self.source_uri = Some(uri.into());
        self
    }

    pub fn with_source_resource_id(mut self, id: impl Into<String>) -> Self {
        self.source_resource_id = Some(id.into());
        self
    }

    pub fn with_upload_size_bytes(mut self, bytes: i64) -> Self {
        self.upload_size_bytes = Some(bytes);
        self
    }

    pub fn with_logical_sector_size(mut self, size: i32) -> Self {
        self.logical_sector_size = Some(size);
        self
    }

    pub fn with_security_data_uri(mut self, uri: impl Into<String>) -> Self {
        self.security_data_uri = Some(uri.into());
        self
    }

    pub fn with_performance_plus(mut self, enabled: bool) -> Self {
        self.performance_plus = Some(enabled);
        self
    }

    pub fn with_elastic_san_resource_id(
        mut self,
        id: impl Into<String>,
    ) -> Self {
        self.elastic_san_resource_id = Some(id.into());
        self
    }
}

impl Validate for CreationData {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.create_option.is_none() {
            return Err(ValidationError::missing(
                "CreationData",
                "createOption",
            ));
        }
        validate::nested("imageReference", &self.image_reference)?;
        validate::nested(
            "galleryImageReference",
            &self.gallery_image_reference,
        )
    }
}

/// The SKU of a managed disk.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct DiskSku {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    name: Option<DiskStorageAccountTypes>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    tier: Option<String>,
}

impl DiskSku {
    pub fn name(&self) -> Option<DiskStorageAccountTypes> {
        self.name
    }

    /// Set by the service (`Standard`, `Premium`, ...).
    pub fn tier(&self) -> Option<&str> {
        self.tier.as_deref()
    }

    pub fn with_name(mut self, name: DiskStorageAccountTypes) -> Self {
        self.name = Some(name);
        self
    }
}

impl Validate for DiskSku {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Disk SKU, keyed case-insensitively by storage account type.
///
/// Unlike the other open enumerations, lookups fold case: `premium_lrs`
/// and `Premium_LRS` are the same SKU. Whichever spelling registered first
/// is the one kept and rendered.
#[derive(Clone, Copy, Debug)]
pub struct DiskSkuTypes {
    account_type: DiskStorageAccountTypes,
}

static DISK_SKU_TYPES: Registry<DiskSkuTypes> =
    Registry::new("DiskSkuTypes", DiskSkuTypes::registry_seed);

impl DiskSkuTypes {
    pub const STANDARD_LRS: Self =
        Self { account_type: DiskStorageAccountTypes::STANDARD_LRS };
    pub const PREMIUM_LRS: Self =
        Self { account_type: DiskStorageAccountTypes::PREMIUM_LRS };
    pub const STANDARD_SSD_LRS: Self =
        Self { account_type: DiskStorageAccountTypes::STANDARD_SSD_LRS };
    pub const ULTRA_SSD_LRS: Self =
        Self { account_type: DiskStorageAccountTypes::ULTRA_SSD_LRS };
    pub const PREMIUM_ZRS: Self =
        Self { account_type: DiskStorageAccountTypes::PREMIUM_ZRS };
    pub const STANDARD_SSD_ZRS: Self =
        Self { account_type: DiskStorageAccountTypes::STANDARD_SSD_ZRS };
    pub const PREMIUM_V2_LRS: Self =
        Self { account_type: DiskStorageAccountTypes::PREMIUM_V2_LRS };

    const KNOWN: [Self; 7] = [
        Self::STANDARD_LRS,
        Self::PREMIUM_LRS,
        Self::STANDARD_SSD_LRS,
        Self::ULTRA_SSD_LRS,
        Self::PREMIUM_ZRS,
        Self::STANDARD_SSD_ZRS,
        Self::PREMIUM_V2_LRS,
    ];

    fn registry_seed() -> Vec<(String, DiskSkuTypes)> {
        Self::KNOWN.iter().map(|sku| (sku.key(), *sku)).collect()
    }

    fn key(&self) -> String {
        self.account_type.as_str().to_ascii_lowercase()
    }

    /// Returns the SKU for `account_type`, registering it if needed.
    pub fn from_storage_account_type(
        account_type: DiskStorageAccountTypes,
    ) -> Self {
        let sku = Self { account_type };
        DISK_SKU_TYPES.get_or_insert_with(&sku.key(), || sku)
    }

    /// Returns the SKU named by `sku`, or `None` if it has no name.
    pub fn from_disk_sku(sku: &DiskSku) -> Option<Self> {
        sku.name().map(Self::from_storage_account_type)
    }

    /// Every SKU registered so far.
    pub fn values() -> Vec<Self> {
        DISK_SKU_TYPES.values()
    }

    /// The storage account type, in the spelling first registered.
    pub fn account_type(&self) -> DiskStorageAccountTypes {
        self.account_type
    }
}

impl PartialEq for DiskSkuTypes {
    fn eq(&self, other: &Self) -> bool {
        self.account_type
            .as_str()
            .eq_ignore_ascii_case(other.account_type.as_str())
    }
}

impl Eq for DiskSkuTypes {}

// Must agree with `eq`: hashes the ASCII-folded bytes, terminated the way
// `str` terminates its own hash.
impl Hash for DiskSkuTypes {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.account_type.as_str().bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl fmt::Display for DiskSkuTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.account_type, f)
    }
}

impl From<DiskSkuTypes> for DiskSku {
    fn from(sku: DiskSkuTypes) -> Self {
        DiskSku::default().with_name(sku.account_type)
    }
}
