//! # oxide-field
//!
//! Metadata-driven form field rendering.
//!
//! Given the field metadata a Django REST Framework endpoint publishes in its
//! OPTIONS response, this crate decides which control a field renders to,
//! which validation attributes it carries, and how it binds to the caller's
//! model. The result is an abstract [`WidgetDescriptor`]; mounting it and
//! wiring live binding is left to the host.
//!
//! This crate provides:
//! - Field metadata parsing (`type`, `label`, `choices`, constraints)
//! - Type tag to widget mapping with a text input fallback
//! - Constraint to attribute translation (`ng-required`, `ng-readonly`,
//!   `ng-maxlength`)
//! - Caller attribute inheritance with model and event rewriting
//! - A one-shot renderer driven by an observable description
//! - HTML markup for the produced widget
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_field::{render, BindingConventions, FieldDescription, RenderRequest, WidgetKind};
//!
//! let metadata = FieldDescription::from_json(r#"{
//!     "title": {"type": "string", "label": "Title", "required": true, "max_length": 200}
//! }"#).unwrap();
//!
//! let request = RenderRequest::new("title")
//!     .attr("ng-model", "formModel")
//!     .attr("name", "title");
//!
//! let widget = render(&metadata, &request, &BindingConventions::default()).unwrap();
//! assert_eq!(widget.kind, WidgetKind::TextInput);
//! assert_eq!(widget.get("ng-required"), Some("true"));
//! assert_eq!(widget.get("ng-maxlength"), Some("200"));
//! assert_eq!(widget.get("ng-model"), Some("formModel.title"));
//! ```
//!
//! ## Rendering Once
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use oxide_field::{FieldDescription, FieldMeta, FieldRenderer, RenderRequest, Watched};
//!
//! let metadata = Watched::new();
//! let mounted = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&mounted);
//! let subscription = FieldRenderer::new(RenderRequest::new("status"))
//!     .attach(&metadata, move |widget| sink.borrow_mut().push(widget.unwrap()));
//!
//! metadata.set(FieldDescription::new().field(
//!     "status",
//!     FieldMeta::new("choice").choice("draft", "Draft").choice("published", "Published"),
//! ));
//! metadata.set(FieldDescription::new());
//!
//! assert_eq!(mounted.borrow().len(), 1);
//! assert!(!subscription.is_active());
//! ```

pub mod binding;
pub mod constraints;
mod conventions;
mod error;
pub mod factory;
pub mod markup;
mod metadata;
mod renderer;
pub mod watch;
pub mod widget;

pub use binding::CallerAttrs;
pub use conventions::BindingConventions;
pub use error::{FieldError, Result};
pub use metadata::{Choice, FieldDescription, FieldMeta, FieldType};
pub use renderer::{render, FieldRenderer, RenderRequest, RenderState};
pub use watch::{Change, Subscription, Watched};
pub use widget::{SelectOption, WidgetAttrs, WidgetDescriptor, WidgetKind};
