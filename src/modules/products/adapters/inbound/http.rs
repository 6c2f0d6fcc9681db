// Maps guard failures onto HTTP responses shared by every product route.
//
// Status mapping
// - Validation -> 400, NotFound -> 404, VersionConflict -> 409, store failure -> 500.
// - Bodies are `{"error": "<message>"}`. Store failures do not leak their cause.

use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::products::application::errors::ApplicationError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::VersionConflict { .. } => StatusCode::CONFLICT,
            ApplicationError::Store(_) => {
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
            }
        };
        error_response(status, self.to_string())
    }
}
