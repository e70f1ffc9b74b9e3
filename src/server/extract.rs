//! Request extractors.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections are reported as `AppError`.
///
/// Mis-typed fields surface as validation errors instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);
