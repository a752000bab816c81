//! Secondary static page.

use askama::Template;
use axum::response::Html;

/// Extras page template.
#[derive(Template)]
#[template(path = "extras.html")]
pub struct ExtrasTemplate;

/// Extras page handler.
pub async fn index() -> Html<String> {
    Html(ExtrasTemplate.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
