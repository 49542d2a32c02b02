#![allow(dead_code)]

use oxide_field::{
    render, BindingConventions, FieldDescription, FieldError, RenderRequest, WidgetDescriptor,
};

/// Metadata shaped like the `actions.POST` block of a DRF OPTIONS response.
pub const ARTICLE_METADATA: &str = r#"{
    "id": {"type": "integer", "required": false, "read_only": true, "label": "ID"},
    "title": {"type": "string", "required": true, "read_only": false, "label": "Title", "max_length": 200},
    "body": {"type": "field", "required": false, "read_only": false, "label": "Body"},
    "published": {"type": "boolean", "required": false, "read_only": false, "label": "Published"},
    "status": {
        "type": "choice",
        "required": true,
        "read_only": false,
        "label": "Status",
        "choices": [
            {"value": "draft", "display_name": "Draft"},
            {"value": "review", "display_name": "In review"},
            {"value": "published", "display_name": "Published"}
        ]
    },
    "created": {"type": "datetime", "required": false, "read_only": true, "label": "Created"},
    "email": {"type": "email", "required": false, "read_only": false, "label": "Contact", "max_length": 254}
}"#;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .without_time()
        .with_test_writer()
        .try_init();
}

pub fn article() -> FieldDescription {
    FieldDescription::from_json(ARTICLE_METADATA)
        .unwrap_or_else(|e| panic!("Failed to parse article metadata: {e}"))
}

pub fn render_default(description: &FieldDescription, request: &RenderRequest) -> WidgetDescriptor {
    render(description, request, &BindingConventions::default())
        .unwrap_or_else(|e| panic!("Failed to render {}: {e}", request.key))
}

pub fn render_err(description: &FieldDescription, request: &RenderRequest) -> FieldError {
    render(description, request, &BindingConventions::default())
        .expect_err(&format!("Expected render error for key {}", request.key))
}
