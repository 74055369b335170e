use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("Food item not found")]
    NotFound,

    /// A failed store round-trip. `action` is the message shown to the client;
    /// the source is only logged.
    #[error("{action}")]
    Store {
        action: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn store(action: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| AppError::Store { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store { action, source } => {
                tracing::error!(error = ?source, "{action}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
