use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{MessageDto, ValidationErrorDto},
        product::{ProductDto, ProductPayloadDto},
    },
    server::{
        error::AppError, extract::Payload, model::auth::Caller, service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

/// List all products.
///
/// Returns every product with its category, ordered by id.
///
/// # Returns
/// - `200 OK` - List of products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let products = service.get_all().await?;

    let dtos: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a product by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Product id
///
/// # Returns
/// - `200 OK` - Product with its category
/// - `404 Not Found` - No product with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// List the products of a category.
///
/// An unknown category yields an empty list rather than 404.
#[utoipa::path(
    get,
    path = "/products/categories/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let products = service.get_by_category_id(category_id).await?;

    let dtos: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a product.
///
/// Any `id` in the payload is ignored; the database assigns one.
///
/// # Returns
/// - `200 OK` - Created product
/// - `400 Bad Request` - Invalid payload, or the product couldn't be stored
#[utoipa::path(
    post,
    path = "/products",
    tag = PRODUCT_TAG,
    request_body = ProductPayloadDto,
    responses(
        (status = 200, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Invalid product data or storage failure", body = ValidationErrorDto)
    ),
    security((), ("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Payload(payload): Payload<ProductPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.create(payload).await?;

    tracing::info!("Product {} created by {}", product.id, caller.name());

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Replace a product.
///
/// The payload `id` must equal the path id. Every field is overwritten.
///
/// # Returns
/// - `200 OK` - Updated product
/// - `400 Bad Request` - Invalid payload, or the product couldn't be stored
/// - `404 Not Found` - Payload id doesn't match the path id
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayloadDto,
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 400, description = "Invalid product data or storage failure", body = ValidationErrorDto),
        (status = 404, description = "Product id mismatch", body = MessageDto)
    ),
    security((), ("bearer" = [])),
)]
pub async fn replace_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
    Payload(payload): Payload<ProductPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.replace(id, payload).await?;

    tracing::info!("Product {} updated by {}", product.id, caller.name());

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Delete a product.
///
/// Any request body is ignored.
///
/// # Returns
/// - `200 OK` - Confirmation message naming the removed product
/// - `400 Bad Request` - The product couldn't be removed
/// - `404 Not Found` - No product with that id
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully removed product", body = MessageDto),
        (status = 400, description = "Storage failure", body = MessageDto),
        (status = 404, description = "Product not found", body = MessageDto)
    ),
    security((), ("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let product = service.delete(id).await?;

    tracing::info!("Product {} removed by {}", product.id, caller.name());

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "Product '{}' removed successfully",
            product.title
        ))),
    ))
}
