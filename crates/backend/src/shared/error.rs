use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application error taxonomy. Every failure maps onto exactly one HTTP
/// response; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required form field was absent from the request body.
    #[error("missing required form field `{0}`")]
    MissingField(&'static str),

    /// A form field was present but failed typed validation.
    #[error("invalid value for form field `{0}`")]
    InvalidField(&'static str),

    /// No display string registered under this key for the active language.
    #[error("missing translation key `{key}` for language `{lang}`")]
    MissingTranslation { lang: &'static str, key: String },

    /// The storage layer failed or is unavailable.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingField(_) | AppError::InvalidField(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::MissingTranslation { .. } => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Storage(err) => {
                // Detail goes to the log, not to the client
                tracing::error!("storage error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
