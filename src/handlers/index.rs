//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html` with the result of a submission (short
/// code, stored long URL, full short link) or a validation message. All
/// fields are empty strings when unset and the template renders each
/// position conditionally.
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub short_code: String,
    pub long_url: String,
    pub short_link: String,
    pub error_message: String,
}

/// Renders the landing page in its empty state.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate::default()
}
