//! Shared error type across roomkeep crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// No session or unknown session token.
    Unauthenticated,
    /// Session is valid but the role may not do this.
    Forbidden,
    /// Referenced record does not exist.
    NotFound,
    /// Request conflicts with current data.
    Conflict,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Unauthenticated => "UNAUTHENTICATED",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RoomkeepError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RoomkeepError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl RoomkeepError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RoomkeepError::BadRequest(_) => ClientCode::BadRequest,
            RoomkeepError::Unauthenticated => ClientCode::Unauthenticated,
            RoomkeepError::Forbidden(_) => ClientCode::Forbidden,
            RoomkeepError::NotFound(_) => ClientCode::NotFound,
            RoomkeepError::Conflict(_) => ClientCode::Conflict,
            RoomkeepError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            RoomkeepError::Internal(_) => ClientCode::Internal,
        }
    }
}
