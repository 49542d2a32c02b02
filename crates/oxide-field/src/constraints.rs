//! Translation of metadata constraints into widget attributes.
//!
//! | metadata key | attribute (default conventions) | value |
//! |---|---|---|
//! | `required` | `ng-required` | `"true"` / `"false"` |
//! | `read_only` | `ng-readonly` | `"true"` / `"false"` |
//! | `max_length` | `ng-maxlength` | the number |
//!
//! Keys absent from the metadata produce no attribute.

use crate::conventions::BindingConventions;
use crate::metadata::FieldMeta;
use crate::widget::WidgetDescriptor;

/// Returns the constraint attributes derived from `meta`, in table order.
#[must_use]
pub fn constraint_attrs(
    meta: &FieldMeta,
    conventions: &BindingConventions,
) -> Vec<(String, String)> {
    [
        (&conventions.required_attr, meta.required.map(|v| v.to_string())),
        (&conventions.read_only_attr, meta.read_only.map(|v| v.to_string())),
        (&conventions.max_length_attr, meta.max_length.map(|v| v.to_string())),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| (name.clone(), value)))
    .collect()
}

/// Applies the constraint attributes of `meta` to `widget`.
#[must_use]
pub fn apply_constraints(
    mut widget: WidgetDescriptor,
    meta: &FieldMeta,
    conventions: &BindingConventions,
) -> WidgetDescriptor {
    for (name, value) in constraint_attrs(meta, conventions) {
        widget.attrs.set(name, value);
    }
    widget
}
