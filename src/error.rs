//! Error types for the sample service.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup and serving errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Rejections produced while parsing a JSON request body.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BodyRejection {
    /// Body exceeds the configured limit.
    #[error("request entity too large: limit is {limit} bytes")]
    TooLarge {
        /// Limit in bytes.
        limit: usize,
    },

    /// Body could not be read from the connection.
    #[error("failed to read request body")]
    Unreadable,

    /// Body is not valid JSON.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// Body is valid JSON but neither an object nor an array.
    #[error("JSON body must be an object or an array")]
    NotObjectOrArray,
}

impl BodyRejection {
    /// HTTP status for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            BodyRejection::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Rejected request body");
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
