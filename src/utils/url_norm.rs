use crate::error::AppError;

/// Normalizes a submitted URL.
///
/// Trims surrounding whitespace and prepends `http://` when the value does
/// not already carry an `http://` or `https://` prefix. No further
/// validation is performed.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the input is empty after trimming.
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Please enter a valid URL".to_string(),
        ));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("http://{trimmed}"))
    }
}
