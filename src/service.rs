//! Short link creation and resolution.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::utils::codegen::generate_code;
use crate::utils::url_norm::normalize_url;

/// A persisted mapping between a short code and its long URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
}

/// Service owning code generation and persistence of URL mappings.
///
/// Safe to clone and share across request handlers; the pool serializes
/// access to the underlying database.
#[derive(Clone)]
pub struct LinkService {
    db: SqlitePool,
}

impl LinkService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Normalizes the submitted URL, generates a code, and inserts the
    /// mapping as a single row.
    ///
    /// Codes are not checked for uniqueness; with 62^6 possible values a
    /// duplicate resolves to the earliest inserted row (see
    /// [`Self::resolve_short_link`]).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty after trimming;
    /// nothing is written in that case. Returns [`AppError::Storage`] if the
    /// insert fails. No retry is attempted.
    pub async fn create_short_link(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let long_url = normalize_url(raw_url)?;
        let short_code = generate_code();

        let result = sqlx::query("INSERT INTO urls (short_url, long_url) VALUES (?, ?)")
            .bind(&short_code)
            .bind(&long_url)
            .execute(&self.db)
            .await?;

        tracing::debug!(code = %short_code, url = %long_url, "created short link");

        Ok(ShortLink {
            id: result.last_insert_rowid(),
            short_code,
            long_url,
        })
    }

    /// Looks up the long URL stored under `code`.
    ///
    /// Returns `Ok(None)` for an empty (after trimming) or unknown code;
    /// neither is an error. Duplicate codes resolve to the row with the
    /// lowest id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] only for operational database failures.
    pub async fn resolve_short_link(&self, code: &str) -> Result<Option<String>, AppError> {
        let code = code.trim();
        if code.is_empty() {
            return Ok(None);
        }

        let long_url = sqlx::query_scalar::<_, String>(
            "SELECT long_url FROM urls WHERE short_url = ? ORDER BY id LIMIT 1",
        )
        .bind(code)
        .fetch_optional(&self.db)
        .await?;

        Ok(long_url)
    }
}
