// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Open-ended enumerations carried by compute resources.
//!
//! Each of these accepts any string the server sends; the constants below
//! are just the values known when this crate was written.

use compute_types::expandable_enum;

expandable_enum! {
    /// SKU of an availability set.
    pub struct AvailabilitySetSkuTypes {
        /// Availability set for unmanaged disks.
        CLASSIC = "Classic",
        /// Availability set for managed disks.
        ALIGNED = "Aligned",
    }
}

expandable_enum! {
    /// Pricing tier of a compute resource SKU.
    pub struct ComputeSkuTier {
        STANDARD = "Standard",
        BASIC = "Basic",
        PREMIUM = "Premium",
    }
}

expandable_enum! {
    /// Encryption state of a virtual machine's disks.
    pub struct EncryptionStatus {
        ENCRYPTED = "Encrypted",
        NOT_ENCRYPTED = "NotEncrypted",
        NOT_MOUNTED = "NotMounted",
        DECRYPTION_IN_PROGRESS = "DecryptionInProgress",
        ENCRYPTION_IN_PROGRESS = "EncryptionInProgress",
        VM_RESTART_PENDING = "VMRestartPending",
        UNKNOWN = "Unknown",
    }
}

expandable_enum! {
    /// Storage account type backing a managed disk.
    pub struct DiskStorageAccountTypes {
        STANDARD_LRS = "Standard_LRS",
        PREMIUM_LRS = "Premium_LRS",
        STANDARD_SSD_LRS = "StandardSSD_LRS",
        ULTRA_SSD_LRS = "UltraSSD_LRS",
        PREMIUM_ZRS = "Premium_ZRS",
        STANDARD_SSD_ZRS = "StandardSSD_ZRS",
        PREMIUM_V2_LRS = "PremiumV2_LRS",
    }
}

expandable_enum! {
    /// How a disk's contents were (or will be) produced.
    pub struct DiskCreateOption {
        /// A blank disk of the requested size.
        EMPTY = "Empty",
        /// Attach an existing disk.
        ATTACH = "Attach",
        /// Create from a platform, gallery, or community image.
        FROM_IMAGE = "FromImage",
        /// Import a VHD from a storage blob.
        IMPORT = "Import",
        /// Copy an existing disk or snapshot.
        COPY = "Copy",
        /// Restore from a restore point.
        RESTORE = "Restore",
        /// Create an empty disk and upload contents to it.
        UPLOAD = "Upload",
        /// Start a background copy from a snapshot in another region.
        COPY_START = "CopyStart",
        IMPORT_SECURE = "ImportSecure",
        UPLOAD_PREPARED_SECURE = "UploadPreparedSecure",
    }
}

expandable_enum! {
    /// Host caching mode for a disk.
    pub struct CachingTypes {
        NONE = "None",
        READ_ONLY = "ReadOnly",
        READ_WRITE = "ReadWrite",
    }
}

expandable_enum! {
    /// Outcome of a patch assessment or installation run.
    pub struct PatchOperationStatus {
        UNKNOWN = "Unknown",
        IN_PROGRESS = "InProgress",
        FAILED = "Failed",
        SUCCEEDED = "Succeeded",
        COMPLETED_WITH_WARNINGS = "CompletedWithWarnings",
    }
}

expandable_enum! {
    /// Severity attached to an instance-view status.
    pub struct StatusLevelTypes {
        INFO = "Info",
        WARNING = "Warning",
        ERROR = "Error",
    }
}

expandable_enum! {
    /// Format of a UEFI key's value.
    pub struct UefiKeyType {
        SHA256 = "sha256",
        X509 = "x509",
    }
}

expandable_enum! {
    /// How the platform picks an availability zone.
    pub struct ZonePlacementPolicyType {
        ANY = "Any",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn sku_types_are_case_sensitive() {
        assert_eq!(
            AvailabilitySetSkuTypes::from_string("Classic"),
            AvailabilitySetSkuTypes::CLASSIC
        );
        let lower = AvailabilitySetSkuTypes::from_string("classic");
        assert_ne!(lower, AvailabilitySetSkuTypes::CLASSIC);
        assert_eq!(lower.to_string(), "classic");
        assert!(AvailabilitySetSkuTypes::values().contains(&lower));
    }

    #[test]
    fn new_tiers_are_accepted() {
        let tier = ComputeSkuTier::from_string("TotallyNewValue");
        assert_eq!(tier.as_str(), "TotallyNewValue");
        assert!(ComputeSkuTier::values().contains(&tier));
        assert!(ComputeSkuTier::values().contains(&ComputeSkuTier::BASIC));
        assert!(!ComputeSkuTier::KNOWN.contains(&"TotallyNewValue"));
    }

    #[test]
    fn encryption_status_wire_form() {
        assert_tokens(
            &EncryptionStatus::VM_RESTART_PENDING,
            &[Token::Str("VMRestartPending")],
        );
        assert_tokens(
            &EncryptionStatus::from_string("Paused"),
            &[Token::Str("Paused")],
        );
    }
}
