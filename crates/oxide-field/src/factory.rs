//! Base widget construction from a field's type tag.

use tracing::debug;

use crate::metadata::{FieldMeta, FieldType};
use crate::widget::{SelectOption, WidgetDescriptor, WidgetKind};

/// Builds the base widget for a field.
///
/// Unrecognized type tags build a text input.
#[must_use]
pub fn build(meta: &FieldMeta) -> WidgetDescriptor {
    match &meta.field_type {
        FieldType::Field => WidgetDescriptor::new(WidgetKind::Textarea),
        FieldType::String => WidgetDescriptor::new(WidgetKind::TextInput),
        FieldType::Integer => WidgetDescriptor::new(WidgetKind::NumberInput),
        FieldType::Boolean => WidgetDescriptor::new(WidgetKind::Checkbox),
        FieldType::Choice => choice_widget(meta),
        FieldType::Datetime => WidgetDescriptor::new(WidgetKind::DatetimeInput),
        FieldType::Other(tag) => {
            debug!(field_type = %tag, "unrecognized field type, using text input");
            WidgetDescriptor::new(WidgetKind::TextInput)
        }
    }
}

/// Builds a label showing the field's label text.
///
/// Only `label` is read; type and constraints are ignored.
#[must_use]
pub fn build_label(meta: &FieldMeta) -> WidgetDescriptor {
    WidgetDescriptor::label(meta.label.clone().unwrap_or_default())
}

fn choice_widget(meta: &FieldMeta) -> WidgetDescriptor {
    WidgetDescriptor::select(
        meta.choices
            .iter()
            .map(|choice| SelectOption::new(&choice.value, &choice.display_name))
            .collect(),
    )
}
