use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of faction store operations that are reported back to the caller.
///
/// Each variant carries the user-facing message, so the same text can be sent as an HTTP body
/// or echoed into a chat channel.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FactionError {
    /// Missing or malformed fields. 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// A faction with the requested name already exists. 409 Conflict.
    #[error("Faction {0} already exists.")]
    Conflict(String),

    /// No faction with the requested name exists. 404 Not Found.
    #[error("Faction {0} not found.")]
    NotFound(String),
}

impl IntoResponse for FactionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
