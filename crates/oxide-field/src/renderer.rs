//! Field rendering: metadata in, one widget out.
//!
//! [`render`] is the pure pipeline. [`FieldRenderer`] wraps it in the
//! one-shot lifecycle of a field element: it waits for the first real change
//! of the watched description, renders once, and stops listening.

use tracing::{debug, trace, warn};

use crate::binding::{inherit_attributes, CallerAttrs};
use crate::constraints::apply_constraints;
use crate::conventions::BindingConventions;
use crate::error::{FieldError, Result};
use crate::factory::{build, build_label};
use crate::metadata::FieldDescription;
use crate::watch::{Change, Subscription, Watched};
use crate::widget::WidgetDescriptor;

/// What to render: which field, in which mode, with which caller attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Field name to look up in the description.
    pub key: String,
    /// Render a label instead of an input.
    pub label_mode: bool,
    /// Attributes declared by the caller.
    pub attrs: CallerAttrs,
}

impl RenderRequest {
    /// Creates an input request for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Creates a request whose mode is taken from the caller attributes:
    /// label mode if the label attribute is declared.
    pub fn from_attributes(
        key: impl Into<String>,
        attrs: CallerAttrs,
        conventions: &BindingConventions,
    ) -> Self {
        Self {
            key: key.into(),
            label_mode: attrs.contains(&conventions.label_attr),
            attrs,
        }
    }

    /// Switches to label mode.
    #[must_use]
    pub fn label(mut self) -> Self {
        self.label_mode = true;
        self
    }

    /// Sets the caller attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: CallerAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Appends a caller attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(name, value);
        self
    }
}

/// Renders the widget for `request.key`.
///
/// # Errors
///
/// Returns [`FieldError::MissingFieldDescription`] if the description has no
/// entry for the key.
pub fn render(
    description: &FieldDescription,
    request: &RenderRequest,
    conventions: &BindingConventions,
) -> Result<WidgetDescriptor> {
    let meta = description.require(&request.key)?;

    let widget = if request.label_mode {
        build_label(meta)
    } else {
        apply_constraints(build(meta), meta, conventions)
    };

    let widget = inherit_attributes(&request.attrs, &request.key, widget, conventions);
    debug!(key = %request.key, kind = %widget.kind, "rendered field");
    Ok(widget)
}

/// Lifecycle of a [`FieldRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Waiting for the first change of the description.
    Uninitialized,
    /// The widget was produced. Terminal.
    Rendered,
}

/// Renders one field exactly once, on the first change of its description.
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    request: RenderRequest,
    conventions: BindingConventions,
    state: RenderState,
}

impl FieldRenderer {
    /// Creates a renderer using the default conventions.
    #[must_use]
    pub fn new(request: RenderRequest) -> Self {
        Self {
            request,
            conventions: BindingConventions::default(),
            state: RenderState::Uninitialized,
        }
    }

    /// Uses the given conventions.
    #[must_use]
    pub fn with_conventions(mut self, conventions: BindingConventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Returns the request this renderer serves.
    #[must_use]
    pub const fn request(&self) -> &RenderRequest {
        &self.request
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RenderState {
        self.state
    }

    /// Returns whether the widget has been produced.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.state == RenderState::Rendered
    }

    /// Handles a change of the watched description.
    ///
    /// Returns the widget on the first notification whose new value differs
    /// from the old one, and `None` for every other notification. A failed
    /// render leaves the renderer waiting.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::MissingFieldDescription`] if the description was
    /// cleared or has no entry for the key.
    pub fn on_change(
        &mut self,
        change: Change<'_, FieldDescription>,
    ) -> Result<Option<WidgetDescriptor>> {
        if self.is_rendered() {
            trace!(key = %self.request.key, "already rendered, ignoring change");
            return Ok(None);
        }
        if !change.is_change() {
            trace!(key = %self.request.key, "description unchanged");
            return Ok(None);
        }

        let Some(description) = change.new else {
            warn!(key = %self.request.key, "description cleared before render");
            return Err(FieldError::missing(&self.request.key));
        };

        match render(description, &self.request, &self.conventions) {
            Ok(widget) => {
                self.state = RenderState::Rendered;
                Ok(Some(widget))
            }
            Err(err) => {
                warn!(key = %self.request.key, error = %err, "field render failed");
                Err(err)
            }
        }
    }

    /// Renders from `watched` and hands the outcome to `mount`.
    ///
    /// The subscription is cancelled inside the notification that produced
    /// the widget, before `mount` runs, so no later notification reaches the
    /// renderer. Errors are passed to `mount` and the subscription stays
    /// active.
    pub fn attach<M>(self, watched: &Watched<FieldDescription>, mut mount: M) -> Subscription
    where
        M: FnMut(Result<WidgetDescriptor>) + 'static,
    {
        let mut renderer = self;
        watched.subscribe(move |change, subscription| match renderer.on_change(change) {
            Ok(Some(widget)) => {
                subscription.cancel();
                mount(Ok(widget));
            }
            Ok(None) => {}
            Err(err) => mount(Err(err)),
        })
    }
}
