//! Attribute naming conventions of the host binding layer.
//!
//! The defaults match AngularJS: `ng-model` for two-way binding, `ng-click`
//! for event handlers and the `ng-*` conditional validators. Hosts with
//! different spellings load their own set with [`BindingConventions::from_json`].

use serde::Deserialize;

use crate::error::{FieldError, Result};

/// Attribute names the renderer reads from callers and writes onto widgets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BindingConventions {
    /// Two-way binding attribute. Its value is namespaced by the field key.
    pub model_attr: String,
    /// Event handler attribute. Its value is redirected to the parent scope.
    pub event_attr: String,
    /// Expression naming the enclosing scope.
    pub parent_scope: String,
    /// Member access between a scope expression and a name.
    pub path_separator: String,
    /// Caller attribute whose presence selects label mode.
    pub label_attr: String,
    /// Conditional required marker.
    pub required_attr: String,
    /// Conditional read-only marker.
    pub read_only_attr: String,
    /// Conditional maximum length constraint.
    pub max_length_attr: String,
}

impl Default for BindingConventions {
    fn default() -> Self {
        Self {
            model_attr: "ng-model".to_string(),
            event_attr: "ng-click".to_string(),
            parent_scope: "$parent".to_string(),
            path_separator: ".".to_string(),
            label_attr: "label".to_string(),
            required_attr: "ng-required".to_string(),
            read_only_attr: "ng-readonly".to_string(),
            max_length_attr: "ng-maxlength".to_string(),
        }
    }
}

impl BindingConventions {
    /// Returns the AngularJS conventions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads conventions from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidConventions`] if the document is not a
    /// JSON object of string values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FieldError::InvalidConventions)
    }

    /// Sets the two-way binding attribute.
    #[must_use]
    pub fn model_attr(mut self, name: impl Into<String>) -> Self {
        self.model_attr = name.into();
        self
    }

    /// Sets the event handler attribute.
    #[must_use]
    pub fn event_attr(mut self, name: impl Into<String>) -> Self {
        self.event_attr = name.into();
        self
    }

    /// Sets the parent scope expression.
    #[must_use]
    pub fn parent_scope(mut self, expr: impl Into<String>) -> Self {
        self.parent_scope = expr.into();
        self
    }

    /// Sets the member access separator.
    #[must_use]
    pub fn path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    /// Sets the label mode attribute.
    #[must_use]
    pub fn label_attr(mut self, name: impl Into<String>) -> Self {
        self.label_attr = name.into();
        self
    }

    /// Binding path for `key` under the caller's model expression.
    #[must_use]
    pub fn model_path(&self, target: &str, key: &str) -> String {
        format!("{target}{}{key}", self.path_separator)
    }

    /// Handler expression evaluated against the parent scope.
    #[must_use]
    pub fn parent_handler(&self, handler: &str) -> String {
        format!("{}{}{handler}", self.parent_scope, self.path_separator)
    }
}
