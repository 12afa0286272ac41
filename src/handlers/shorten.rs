//! Handler for the shorten form submission.

use axum::extract::{Form, State};
use axum::response::Redirect;
use serde::Deserialize;

use super::index::IndexTemplate;
use crate::error::AppError;
use crate::state::AppState;

/// Form body of a shorten submission.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Creates a short link from the submitted URL and re-renders the landing
/// page with the result.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Behavior
///
/// - Empty input (after trimming) re-renders the page with a validation
///   message, status 200, and nothing is persisted.
/// - On success the page shows the short code, the normalized long URL, and
///   the full short link built from the configured base URL.
///
/// # Errors
///
/// Returns [`AppError::Storage`] (500) if the insert fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<IndexTemplate, AppError> {
    match state.links.create_short_link(&form.url).await {
        Ok(link) => {
            let short_link = format!(
                "{}/{}",
                state.base_url.trim_end_matches('/'),
                link.short_code
            );

            Ok(IndexTemplate {
                short_code: link.short_code,
                long_url: link.long_url,
                short_link,
                error_message: String::new(),
            })
        }
        Err(AppError::Validation(message)) => Ok(IndexTemplate {
            error_message: message,
            ..IndexTemplate::default()
        }),
        Err(e) => Err(e),
    }
}

/// Sends non-POST requests on `/shorten` back to the landing page.
pub async fn shorten_wrong_method_handler() -> Redirect {
    Redirect::to("/")
}
