//! Address tables and raw field values shared by every record.
//!
//! Responsibilities:
//! - Declare where each record field lives (`FieldSpec`) and how its raw text is shaped (`Transform`).
//! - Carry resolved raw values from the resolver into record constructors (`RawFields`).
//!
//! Does NOT handle:
//! - Looking values up in the stores (see `loader`).
//! - Field-specific validation (see the individual record modules).
//!
//! Invariants:
//! - A record constructor only reads keys declared in its own `FIELDS` table.
//! - `Transform::Split` never drops elements: `""` becomes `[""]`.

use std::collections::BTreeMap;

use crate::constants::LIST_DELIMITER;
use crate::loader::ValidationError;

/// How a raw string is shaped before it reaches a record constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Pass the string through unchanged.
    Identity,
    /// Split on the list delimiter into an ordered sequence.
    Split,
}

impl Transform {
    pub fn apply(self, raw: &str) -> RawValue {
        match self {
            Self::Identity => RawValue::Text(raw.to_string()),
            Self::Split => RawValue::List(raw.split(LIST_DELIMITER).map(str::to_string).collect()),
        }
    }
}

/// One entry of a record's address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub transform: Transform,
}

impl FieldSpec {
    pub const fn text(key: &'static str) -> Self {
        Self {
            key,
            transform: Transform::Identity,
        }
    }

    pub const fn list(key: &'static str) -> Self {
        Self {
            key,
            transform: Transform::Split,
        }
    }
}

/// A raw value after its transform was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Text(String),
    List(Vec<String>),
}

/// Resolved raw values for one record, keyed by field name.
#[derive(Debug, Clone)]
pub struct RawFields {
    section: &'static str,
    values: BTreeMap<&'static str, RawValue>,
}

impl RawFields {
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            values: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: &'static str, value: RawValue) {
        self.values.insert(key, value);
    }

    /// Raw text of an identity field.
    pub fn text(&self, key: &str) -> Result<&str, ValidationError> {
        match self.values.get(key) {
            Some(RawValue::Text(text)) => Ok(text.as_str()),
            Some(RawValue::List(items)) => Err(self.invalid(
                key,
                items.join(","),
                "declared as a list field, read as text",
            )),
            None => Err(self.invalid(key, "", "not declared in the address table")),
        }
    }

    /// Elements of a split field.
    pub fn list(&self, key: &str) -> Result<&[String], ValidationError> {
        match self.values.get(key) {
            Some(RawValue::List(items)) => Ok(items.as_slice()),
            Some(RawValue::Text(text)) => Err(self.invalid(
                key,
                text.as_str(),
                "declared as a text field, read as a list",
            )),
            None => Err(self.invalid(key, "", "not declared in the address table")),
        }
    }

    /// Build a `ValidationError` for a field of this record.
    pub fn invalid(
        &self,
        key: &str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> ValidationError {
        ValidationError::new(self.section, key, value, reason)
    }
}

/// A validated configuration record built from one section.
pub trait Record: Sized {
    /// Section every field of this record lives in.
    const SECTION: &'static str;

    /// Address table followed verbatim by the resolver.
    const FIELDS: &'static [FieldSpec];

    /// Validate every field and build the record, failing on the first invalid one.
    fn from_raw(fields: &RawFields) -> Result<Self, ValidationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_order() {
        assert_eq!(
            Transform::Split.apply("a,b,c"),
            RawValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_split_single_element() {
        assert_eq!(
            Transform::Split.apply("a"),
            RawValue::List(vec!["a".into()])
        );
    }

    #[test]
    fn test_split_empty_is_single_empty_element() {
        assert_eq!(
            Transform::Split.apply(""),
            RawValue::List(vec![String::new()])
        );
    }

    #[test]
    fn test_identity_keeps_delimiters() {
        assert_eq!(
            Transform::Identity.apply("a,b"),
            RawValue::Text("a,b".into())
        );
    }

    #[test]
    fn test_shape_mismatch_is_reported() {
        let mut fields = RawFields::new("general");
        fields.insert("profiles", Transform::Split.apply("default"));
        fields.insert("keep_aspects", Transform::Identity.apply("all"));

        let err = fields.text("profiles").unwrap_err();
        assert_eq!(err.section, "general");
        assert_eq!(err.key, "profiles");

        assert!(fields.list("keep_aspects").is_err());
        assert!(fields.text("undeclared").is_err());
    }
}
