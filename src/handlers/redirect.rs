//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its stored long URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The path segment, trimmed of whitespace, is treated as a short code.
/// A match answers with 302 Found and the stored URL in `Location`.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] (404) for an unknown or blank code.
/// Returns [`AppError::Storage`] (500) on database failure.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    match state.links.resolve_short_link(&code).await? {
        Some(long_url) => {
            tracing::debug!(code = %code.trim(), url = %long_url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
        }
        None => Err(AppError::NotFound),
    }
}
