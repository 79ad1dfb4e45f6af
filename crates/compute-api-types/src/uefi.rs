// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! UEFI secure boot key databases attached to gallery image versions.

use compute_types::lenient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UefiKeyType;
use crate::validate::{self, Validate, ValidationError};

/// A UEFI key signature: a hash or certificate, in one of the formats named
/// by [`UefiKeyType`].
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
pub struct UefiKey {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::option"
    )]
    key_type: Option<UefiKeyType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::list"
    )]
    value: Option<Vec<String>>,
}

impl UefiKey {
    pub fn key_type(&self) -> Option<UefiKeyType> {
        self.key_type
    }

    /// Base64-encoded key material.
    pub fn value(&self) -> Option<&[String]> {
        self.value.as_deref()
    }

    pub fn with_key_type(mut self, key_type: UefiKeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    pub fn with_value(mut self, value: Vec<String>) -> Self {
        self.value = Some(value);
        self
    }
}

impl Validate for UefiKey {
    fn validate(&self) -> Result<(), ValidationError> {
        match self.value {
            Some(_) => Ok(()),
            None => Err(ValidationError::missing("UefiKey", "value")),
        }
    }
}

/// Additional keys to enroll into the UEFI databases of a VM booted from an
/// image version.
#[derive(
    Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct UefiKeySignatures {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object"
    )]
    pk: Option<UefiKey>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object_list"
    )]
    kek: Option<Vec<UefiKey>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object_list"
    )]
    db: Option<Vec<UefiKey>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::object_list"
    )]
    dbx: Option<Vec<UefiKey>>,
}

impl UefiKeySignatures {
    /// Platform key.
    pub fn pk(&self) -> Option<&UefiKey> {
        self.pk.as_ref()
    }

    /// Key exchange keys.
    pub fn kek(&self) -> Option<&[UefiKey]> {
        self.kek.as_deref()
    }

    /// Allowed signatures.
    pub fn db(&self) -> Option<&[UefiKey]> {
        self.db.as_deref()
    }

    /// Revoked signatures.
    pub fn dbx(&self) -> Option<&[UefiKey]> {
        self.dbx.as_deref()
    }

    pub fn with_pk(mut self, pk: UefiKey) -> Self {
        self.pk = Some(pk);
        self
    }

    pub fn with_kek(mut self, kek: Vec<UefiKey>) -> Self {
        self.kek = Some(kek);
        self
    }

    pub fn with_db(mut self, db: Vec<UefiKey>) -> Self {
        self.db = Some(db);
        self
    }

    pub fn with_dbx(mut self, dbx: Vec<UefiKey>) -> Self {
        self.dbx = Some(dbx);
        self
    }
}

impl Validate for UefiKeySignatures {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::nested("pk", &self.pk)?;
        validate::each("kek", &self.kek)?;
        validate::each("db", &self.db)?;
        validate::each("dbx", &self.dbx)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::strategy;
    use proptest::prelude::*;

    fn key(value: &str) -> UefiKey {
        UefiKey::default()
            .with_key_type(UefiKeyType::SHA256)
            .with_value(vec![value.to_owned()])
    }

    #[test]
    fn type_field_keeps_its_wire_name() {
        assert_eq!(
            encode(&key("abc=")).unwrap(),
            r#"{"type":"sha256","value":["abc="]}"#
        );
    }

    #[test]
    fn validation_names_the_bad_element() {
        let sigs = UefiKeySignatures::default()
            .with_pk(key("pk="))
            .with_db(vec![key("a="), UefiKey::default()]);
        let err = sigs.validate().unwrap_err();
        assert_eq!(err.path(), ["db[1]", "value"]);
        assert_eq!(err.model(), "UefiKey");
        assert_eq!(
            err.to_string(),
            "missing required property `db[1].value` in model UefiKey"
        );
    }

    #[test]
    fn validation_is_not_run_on_decode() {
        let sigs: UefiKeySignatures =
            decode(r#"{"pk":{"type":"x509"}}"#).unwrap().unwrap();
        assert!(sigs.validate().is_err());
        assert!(encode(&sigs).is_ok());
    }

    #[test]
    fn null_keys_are_dropped() {
        let sigs: UefiKeySignatures =
            decode(r#"{"kek":[null],"db":[null,{"value":["a="]},7]}"#)
                .unwrap()
                .unwrap();
        assert_eq!(sigs.kek(), Some(&[][..]));
        assert_eq!(sigs.db().map(<[UefiKey]>::len), Some(1));
        assert_eq!(
            encode(&sigs).unwrap(),
            r#"{"kek":[],"db":[{"value":["a="]}]}"#
        );
        assert!(sigs.validate().is_ok());
    }

    fn uefi_key() -> impl Strategy<Value = UefiKey> {
        (
            prop::option::of(strategy::expandable(UefiKeyType::KNOWN)),
            strategy::list("[A-Za-z0-9+/=]{0,12}"),
        )
            .prop_map(|(key_type, value)| UefiKey { key_type, value })
    }

    fn key_list() -> impl Strategy<Value = Option<Vec<UefiKey>>> {
        strategy::list(uefi_key())
    }

    proptest! {
        #[test]
        fn round_trips(
            pk in prop::option::of(uefi_key()),
            kek in key_list(),
            db in key_list(),
            dbx in key_list(),
        ) {
            let sigs = UefiKeySignatures { pk, kek, db, dbx };
            let json = encode(&sigs).unwrap();
            prop_assert_eq!(
                decode::<UefiKeySignatures>(&json).unwrap(),
                Some(sigs)
            );
        }
    }
}
