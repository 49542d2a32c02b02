//! Abstract widget descriptors.
//!
//! A [`WidgetDescriptor`] is what the renderer hands to the host layer: the
//! kind of control, its attributes in application order, and for selects the
//! option list. Mounting it into a document is the host's job.

use std::fmt;

use serde::Serialize;

/// The concrete control a field renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="number">`.
    NumberInput,
    /// `<input type="checkbox">`.
    Checkbox,
    /// `<textarea>`.
    Textarea,
    /// `<select>` with `<option>` children.
    Select,
    /// `<input type="datetime">`.
    DatetimeInput,
    /// `<label>` carrying the field label as text.
    Label,
}

impl WidgetKind {
    /// Returns the HTML tag name.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TextInput | Self::NumberInput | Self::Checkbox | Self::DatetimeInput => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Label => "label",
        }
    }

    /// Returns the `type` attribute for `<input>` kinds.
    #[must_use]
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::TextInput => Some("text"),
            Self::NumberInput => Some("number"),
            Self::Checkbox => Some("checkbox"),
            Self::DatetimeInput => Some("datetime"),
            Self::Textarea | Self::Select | Self::Label => None,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.input_type() {
            Some(input_type) => write!(f, "input[type={input_type}]"),
            None => f.write_str(self.tag()),
        }
    }
}

/// An `<option>` of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible text.
    pub text: String,
}

impl SelectOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Widget attributes in application order.
///
/// Setting a name that is already present replaces its value in place, the
/// same as assigning by name into an attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WidgetAttrs {
    attrs: Vec<(String, String)>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute. Returns the previous value if the name was set.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.attrs.push((name, value));
                None
            }
        }
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns whether the attribute is set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over `(name, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the attribute names in application order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|(name, _)| name.as_str())
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for WidgetAttrs {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// The control a field renders to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    /// Control kind.
    pub kind: WidgetKind,
    /// Attributes to apply, in order.
    pub attrs: WidgetAttrs,
    /// Options, for [`WidgetKind::Select`] only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Text content, for [`WidgetKind::Label`] only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl WidgetDescriptor {
    /// Creates a descriptor of the given kind with no attributes.
    #[must_use]
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            attrs: WidgetAttrs::new(),
            options: Vec::new(),
            text: None,
        }
    }

    /// Creates a select with the given options.
    #[must_use]
    pub fn select(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            ..Self::new(WidgetKind::Select)
        }
    }

    /// Creates a label showing `text`.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(WidgetKind::Label)
        }
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name)
    }

    /// Serializes the descriptor for hand-off to a host layer.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind,
            "tag": self.kind.tag(),
            "type": self.kind.input_type(),
            "attrs": self.attrs,
            "options": self.options,
            "text": self.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_attrs_last_write_wins() {
        let mut attrs = WidgetAttrs::new();
        assert_eq!(attrs.set("class", "a"), None);
        assert_eq!(attrs.set("id", "title"), None);
        assert_eq!(attrs.set("class", "b"), Some("a".to_string()));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("b"));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_widget_attrs_builder() {
        let attrs = WidgetAttrs::new()
            .with("class", "form-control")
            .with("id", "my-input");
        assert!(attrs.contains("class"));
        assert!(!attrs.contains("name"));
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("class", "form-control"), ("id", "my-input")]
        );
    }

    #[test]
    fn test_widget_kind_tags() {
        assert_eq!(WidgetKind::TextInput.tag(), "input");
        assert_eq!(WidgetKind::NumberInput.input_type(), Some("number"));
        assert_eq!(WidgetKind::DatetimeInput.input_type(), Some("datetime"));
        assert_eq!(WidgetKind::Textarea.input_type(), None);
        assert_eq!(WidgetKind::Checkbox.to_string(), "input[type=checkbox]");
        assert_eq!(WidgetKind::Select.to_string(), "select");
    }

    #[test]
    fn test_descriptor_to_json() {
        let widget =
            WidgetDescriptor::select(vec![SelectOption::new("a", "A")]).attr("id", "status");
        let json = widget.to_json();
        assert_eq!(json["kind"], "select");
        assert_eq!(json["tag"], "select");
        assert!(json["type"].is_null());
        assert_eq!(json["attrs"][0][0], "id");
        assert_eq!(json["attrs"][0][1], "status");
        assert_eq!(json["options"][0]["text"], "A");
    }

    #[test]
    fn test_label_descriptor() {
        let label = WidgetDescriptor::label("Title");
        assert_eq!(label.kind, WidgetKind::Label);
        assert_eq!(label.text.as_deref(), Some("Title"));
        assert!(label.attrs.is_empty());
    }
}
