use axum::{http::StatusCode, response::IntoResponse};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Placeholder category endpoint.
///
/// Returns a fixed greeting. Categories are not listed through the API yet.
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_categories() -> impl IntoResponse {
    (StatusCode::OK, "Olá Mundo")
}
