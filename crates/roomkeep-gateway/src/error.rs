//! HTTP mapping for `RoomkeepError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roomkeep_core::error::{ClientCode, RoomkeepError};
use serde_json::json;

/// Handler error wrapper so core errors render as JSON responses.
#[derive(Debug)]
pub struct ApiError(pub RoomkeepError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl From<RoomkeepError> for ApiError {
    fn from(e: RoomkeepError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ClientCode::Forbidden => StatusCode::FORBIDDEN,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::Conflict => StatusCode::CONFLICT,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
