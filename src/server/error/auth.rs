use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer token failed signature, expiry or format validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// `InvalidToken` becomes 401 Unauthorized with a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidToken(err) => {
                tracing::debug!("Rejected bearer token: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(MessageDto::new("Invalid or expired token")),
                )
                    .into_response()
            }
        }
    }
}
