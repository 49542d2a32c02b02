//! Copying caller attributes onto the generated widget.
//!
//! Every attribute declared on the field element is carried over to the
//! widget (`id`, `class`, `name`, ...). Two are rewritten on the way:
//!
//! - the two-way binding attribute points at `<target>.<key>`, so each field
//!   binds to its own property of the caller's model object;
//! - the event handler attribute is evaluated against the parent scope, so
//!   handlers defined by the caller are not shadowed by the widget's scope.

use tracing::trace;

use crate::conventions::BindingConventions;
use crate::widget::WidgetDescriptor;

/// Attributes declared by the caller, in declaration order.
///
/// Names may repeat; when resolved, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerAttrs {
    attrs: Vec<(String, String)>,
}

impl CallerAttrs {
    /// Creates an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Builder method to append an attribute.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Returns whether an attribute with this name was declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attrs.iter().any(|(existing, _)| existing == name)
    }

    /// Returns the last declared value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of declared attributes, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns whether no attributes were declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for CallerAttrs {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            attrs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Resolves one caller attribute to the value it takes on the widget.
#[must_use]
pub fn resolve_value(
    name: &str,
    value: &str,
    key: &str,
    conventions: &BindingConventions,
) -> String {
    if name == conventions.model_attr {
        conventions.model_path(value, key)
    } else if name == conventions.event_attr {
        conventions.parent_handler(value)
    } else {
        value.to_string()
    }
}

/// Resolves all caller attributes, keeping declaration order.
///
/// Repeated names are passed through; applying the list in order yields the
/// last-write-wins result.
#[must_use]
pub fn resolve_attributes(
    caller: &CallerAttrs,
    key: &str,
    conventions: &BindingConventions,
) -> Vec<(String, String)> {
    caller
        .iter()
        .map(|(name, value)| (name.to_string(), resolve_value(name, value, key, conventions)))
        .collect()
}

/// Copies the resolved caller attributes onto `widget`.
///
/// Runs for label widgets too; binding and event attributes are inert there
/// but presentational ones (`id`, `class`) still apply.
#[must_use]
pub fn inherit_attributes(
    caller: &CallerAttrs,
    key: &str,
    mut widget: WidgetDescriptor,
    conventions: &BindingConventions,
) -> WidgetDescriptor {
    for (name, value) in resolve_attributes(caller, key, conventions) {
        if let Some(previous) = widget.attrs.get(&name) {
            trace!(attr = %name, %previous, %value, "attribute overwritten");
        }
        widget.attrs.set(name, value);
    }
    widget
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;

    fn conventions() -> BindingConventions {
        BindingConventions::default()
    }

    #[test]
    fn test_model_binding_is_namespaced() {
        assert_eq!(
            resolve_value("ng-model", "formModel", "title", &conventions()),
            "formModel.title"
        );
    }

    #[test]
    fn test_event_handler_uses_parent_scope() {
        assert_eq!(
            resolve_value("ng-click", "save()", "title", &conventions()),
            "$parent.save()"
        );
    }

    #[test]
    fn test_other_attributes_verbatim() {
        let caller = CallerAttrs::new()
            .with("id", "title-input")
            .with("class", "form-control")
            .with("name", "title");
        let resolved = resolve_attributes(&caller, "title", &conventions());
        assert_eq!(
            resolved,
            vec![
                ("id".to_string(), "title-input".to_string()),
                ("class".to_string(), "form-control".to_string()),
                ("name".to_string(), "title".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_names_last_write_wins() {
        let caller = CallerAttrs::new()
            .with("class", "first")
            .with("id", "x")
            .with("class", "second");
        assert_eq!(caller.get("class"), Some("second"));

        let widget = inherit_attributes(
            &caller,
            "title",
            WidgetDescriptor::new(WidgetKind::TextInput),
            &conventions(),
        );
        assert_eq!(widget.get("class"), Some("second"));
        assert_eq!(widget.attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_caller_overrides_constraint_marker() {
        let widget = WidgetDescriptor::new(WidgetKind::TextInput).attr("ng-required", "true");
        let caller = CallerAttrs::new().with("ng-required", "isDraft");
        let widget = inherit_attributes(&caller, "title", widget, &conventions());
        assert_eq!(widget.get("ng-required"), Some("isDraft"));
    }

    #[test]
    fn test_label_keeps_presentational_attributes() {
        let caller = CallerAttrs::new()
            .with("class", "control-label")
            .with("ng-model", "formModel");
        let label = WidgetDescriptor::label("Title");
        let widget = inherit_attributes(&caller, "title", label, &conventions());
        assert_eq!(widget.kind, WidgetKind::Label);
        assert_eq!(widget.get("class"), Some("control-label"));
        assert_eq!(widget.get("ng-model"), Some("formModel.title"));
    }

    #[test]
    fn test_custom_conventions() {
        let conventions = BindingConventions::new()
            .model_attr("v-model")
            .event_attr("v-on:click")
            .parent_scope("$root");
        let caller = CallerAttrs::from_iter([("v-model", "post"), ("v-on:click", "go()")]);
        let resolved = resolve_attributes(&caller, "slug", &conventions);
        assert_eq!(resolved[0].1, "post.slug");
        assert_eq!(resolved[1].1, "$root.go()");
    }
}
