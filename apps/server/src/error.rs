//! Error types for the directory server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// Rejection from the admin gate, carried through with its own status.
    #[error("{message}")]
    Unauthorized { status: StatusCode, message: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Server-side failure answered with a fixed message. `source` is what
    /// gets logged.
    #[error("{message}")]
    Fallback {
        message: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthorized { status, .. } => *status,
            Error::Database(_)
            | Error::Internal(_)
            | Error::Fallback { .. }
            | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }

    /// Replace a server-side error with a fixed user-facing message.
    ///
    /// Client errors keep their own message. The original error rides along
    /// and is logged once, when the response is built.
    pub fn or_fallback(self, fallback: &str) -> Self {
        if self.is_server_error() {
            self.masked(fallback)
        } else {
            self
        }
    }

    /// Answer with `message` while keeping `self` for the log.
    pub fn masked(self, message: impl Into<String>) -> Self {
        Error::Fallback {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// Message suitable for a JSON `error`/`message` field.
    pub fn public_message(&self) -> String {
        match self {
            Error::Internal(msg) => msg.clone(),
            Error::Fallback { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Error::Fallback { message, source } => {
                tracing::error!(error = %source, public_message = %message, "Request failed");
            }
            other if status.is_server_error() => {
                tracing::error!(error = %other, "Request failed");
            }
            _ => {}
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
