// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Explicit, opt-in validation of model objects.
//!
//! Decoding and encoding never validate. Callers building a request body
//! run [`Validate::validate`] before sending it; the check walks nested
//! objects and reports the first problem with the dotted path to it.

use thiserror::Error;

/// A model object, or something nested inside it, is not acceptable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason} `{}` in model {model}", .path.join("."))]
pub struct ValidationError {
    model: &'static str,
    path: Vec<String>,
    reason: String,
}

impl ValidationError {
    pub fn new(
        model: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self { model, path: vec![field.into()], reason: reason.into() }
    }

    /// A required field was left absent.
    pub fn missing(model: &'static str, field: &str) -> Self {
        Self::new(model, field, "missing required property")
    }

    /// Re-roots this error under `field` of an enclosing object.
    pub fn within(mut self, field: impl Into<String>) -> Self {
        self.path.insert(0, field.into());
        self
    }

    /// The name of the model whose own rule failed.
    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Field names from the validated object down to the offending field.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validates an optional nested object, if present.
pub(crate) fn nested<T: Validate>(
    field: &str,
    value: &Option<T>,
) -> Result<(), ValidationError> {
    match value {
        Some(inner) => inner.validate().map_err(|e| e.within(field)),
        None => Ok(()),
    }
}

/// Validates each element of an optional list, naming the failing index.
pub(crate) fn each<T: Validate>(
    field: &str,
    values: &Option<Vec<T>>,
) -> Result<(), ValidationError> {
    for (i, inner) in values.iter().flatten().enumerate() {
        inner.validate().map_err(|e| e.within(format!("{field}[{i}]")))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    struct Leaf(bool);

    impl Validate for Leaf {
        fn validate(&self) -> Result<(), ValidationError> {
            if self.0 {
                Ok(())
            } else {
                Err(ValidationError::missing("Leaf", "id"))
            }
        }
    }

    #[test]
    fn paths_accumulate_outward() {
        let err = nested("inner", &Some(Leaf(false)))
            .unwrap_err()
            .within("outer");
        assert_eq!(err.path(), ["outer", "inner", "id"]);
        assert_eq!(err.model(), "Leaf");
        assert_eq!(
            err.to_string(),
            "missing required property `outer.inner.id` in model Leaf"
        );
    }

    #[test]
    fn lists_name_the_failing_index() {
        let leaves = Some(vec![Leaf(true), Leaf(true), Leaf(false)]);
        let err = each("leaves", &leaves).unwrap_err();
        assert_eq!(err.path(), ["leaves[2]", "id"]);
    }

    #[test]
    fn absent_values_pass() {
        assert!(nested::<Leaf>("inner", &None).is_ok());
        assert!(each::<Leaf>("leaves", &None).is_ok());
        assert!(each::<Leaf>("leaves", &Some(vec![])).is_ok());
    }
}
