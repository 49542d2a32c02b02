//! Field descriptions as published by Django REST Framework metadata.
//!
//! A [`FieldDescription`] maps field names to [`FieldMeta`] entries. It
//! deserializes directly from the `actions.<METHOD>` block of a DRF OPTIONS
//! response, or from any JSON object of the same shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{FieldError, Result};

/// The `type` tag of a field description.
///
/// The recognized tags form a closed set; anything else is kept verbatim in
/// [`FieldType::Other`] and rendered as a text input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// `field`: free-form content, rendered as a textarea.
    Field,
    /// `string`: single line text.
    String,
    /// `integer`: number input.
    Integer,
    /// `boolean`: checkbox.
    Boolean,
    /// `choice`: select with options.
    Choice,
    /// `datetime`: datetime input.
    Datetime,
    /// Any tag without a dedicated widget.
    Other(String),
}

impl FieldType {
    /// Returns the tag as it appears in metadata.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Field => "field",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Choice => "choice",
            Self::Datetime => "datetime",
            Self::Other(tag) => tag,
        }
    }

    /// Returns whether the tag has a dedicated widget.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "field" => Self::Field,
            "string" => Self::String,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "choice" => Self::Choice,
            "datetime" => Self::Datetime,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Submitted value. Numbers and booleans are kept in their JSON spelling.
    #[serde(deserialize_with = "choice_value")]
    pub value: String,
    /// Text shown to the user.
    #[serde(alias = "displayName")]
    pub display_name: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_name: display_name.into(),
        }
    }
}

fn choice_value<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Metadata for a single field.
///
/// Constraint keys are optional: an absent key produces no attribute, it is
/// never treated as `false` or `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMeta {
    /// The `type` tag.
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Human readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Choices, in source order. Only meaningful for `choice` fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    /// `required` constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// `read_only` constraint.
    #[serde(
        default,
        alias = "readOnly",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_only: Option<bool>,
    /// `max_length` constraint.
    #[serde(
        default,
        alias = "maxLength",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_length: Option<u64>,
}

impl FieldMeta {
    /// Creates metadata for the given type with no label and no constraints.
    pub fn new(field_type: impl Into<FieldType>) -> Self {
        Self {
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a choice.
    #[must_use]
    pub fn choice(mut self, value: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.choices.push(Choice::new(value, display_name));
        self
    }

    /// Sets the `required` constraint.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the `read_only` constraint.
    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    /// Sets the `max_length` constraint.
    #[must_use]
    pub fn max_length(mut self, max_length: u64) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Field metadata keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldDescription {
    fields: BTreeMap<String, FieldMeta>,
}

impl FieldDescription {
    /// Creates an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the metadata for `key`.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, meta: FieldMeta) -> Self {
        self.fields.insert(key.into(), meta);
        self
    }

    /// Returns the metadata for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldMeta> {
        self.fields.get(key)
    }

    /// Returns the metadata for `key`, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::MissingFieldDescription`] if `key` is absent.
    pub fn require(&self, key: &str) -> Result<&FieldMeta> {
        self.get(key).ok_or_else(|| FieldError::missing(key))
    }

    /// Returns the field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of described fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether no fields are described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parses a description from a JSON object of field entries.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidMetadata`] if the document does not have
    /// the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FieldError::InvalidMetadata)
    }

    /// Builds a description from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidMetadata`] if the value does not have
    /// the expected shape.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(FieldError::InvalidMetadata)
    }

    /// Extracts the description for `method` from a DRF OPTIONS response
    /// body, i.e. the object under `actions.<METHOD>`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidMetadata`] if the body is not valid JSON
    /// or the block has the wrong shape, and [`FieldError::MissingActions`]
    /// if the response carries no block for `method`.
    pub fn from_options_response(body: &str, method: &str) -> Result<Self> {
        let method = method.to_ascii_uppercase();
        let mut response: Value =
            serde_json::from_str(body).map_err(FieldError::InvalidMetadata)?;

        let actions = response
            .get_mut("actions")
            .and_then(|actions| actions.get_mut(method.as_str()))
            .map(Value::take)
            .ok_or(FieldError::MissingActions { method })?;

        Self::from_value(actions)
    }
}

impl FromIterator<(String, FieldMeta)> for FieldDescription {
    fn from_iter<I: IntoIterator<Item = (String, FieldMeta)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
