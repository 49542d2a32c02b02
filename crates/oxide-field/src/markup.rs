//! HTML markup for widget descriptors.
//!
//! Produces the element's outer HTML, which hosts that compile templates from
//! strings can consume directly.

use ironhtml::typed::Element;
use ironhtml_elements::{Input, Label, Option_, Select, Textarea};

use crate::widget::{WidgetDescriptor, WidgetKind};

macro_rules! with_attrs {
    ($element:expr, $widget:expr) => {
        $widget
            .attrs
            .iter()
            .fold($element, |element, (name, value)| {
                element.attr(name.to_owned(), value)
            })
    };
}

/// Renders `widget` as an HTML element string.
#[must_use]
pub fn to_html(widget: &WidgetDescriptor) -> String {
    match widget.kind {
        WidgetKind::TextInput
        | WidgetKind::NumberInput
        | WidgetKind::Checkbox
        | WidgetKind::DatetimeInput => {
            let input_type = widget.kind.input_type().unwrap_or("text");
            with_attrs!(Element::<Input>::new().attr("type", input_type), widget).render()
        }
        WidgetKind::Textarea => with_attrs!(Element::<Textarea>::new(), widget).render(),
        WidgetKind::Select => with_attrs!(Element::<Select>::new(), widget)
            .children(&widget.options, |option, o: Element<Option_>| {
                o.attr("value", &option.value).text(&option.text)
            })
            .render(),
        WidgetKind::Label => {
            let text = widget.text.as_deref().unwrap_or_default();
            with_attrs!(Element::<Label>::new(), widget).text(text).render()
        }
    }
}

impl WidgetDescriptor {
    /// Renders the descriptor as an HTML element string.
    #[must_use]
    pub fn to_html(&self) -> String {
        to_html(self)
    }
}
