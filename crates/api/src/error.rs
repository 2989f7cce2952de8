use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskboard_core::error::CoreError;
use validator::ValidationErrors;

/// Field name → messages, as reported in a `VALIDATION_ERROR` body.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{error, code}` bodies, plus a
/// `fields` map for field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// One or more request fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn not_found(entity: &'static str, id: taskboard_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut fields: Option<FieldErrors> = None;

        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),

            AppError::Database(err) => {
                let (status, code, message, field_errors) = classify_sqlx_error(err);
                fields = field_errors;
                (status, code, message)
            }

            AppError::Validation(errors) => {
                fields = Some(field_messages(errors));
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Request validation failed".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten `validator` output into `{field: [message, ...]}`.
///
/// Errors without a message fall back to their code.
pub fn field_messages(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Classify a sqlx error into an HTTP status, error code, message and
/// optional field errors.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (SQLSTATE 23503) map to 400; a task pointing at
///   a missing project is reported on the `project` field.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(
    err: &sqlx::Error,
) -> (StatusCode, &'static str, String, Option<FieldErrors>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let fields = (constraint == "fk_tasks_project").then(|| {
                FieldErrors::from([(
                    "project".to_string(),
                    vec!["Referenced project does not exist.".to_string()],
                )])
            });
            (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Referenced record does not exist ({constraint})"),
                fields,
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
                None,
            )
        }
    }
}
