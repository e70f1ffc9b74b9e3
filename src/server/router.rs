use axum::{middleware::from_fn_with_state, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{category, product},
    middleware::auth::authenticate,
    state::AppState,
};

pub const SWAGGER_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mais Um Cookie API",
        version = "v1",
        description = "A simple storefront Web API",
        contact(name = "Maira Moura Barbosa", url = "https://github.com/mahdame"),
        license(name = "No license yet")
    ),
    modifiers(&BearerSecurity),
    tags(
        (name = "category", description = "Product categories"),
        (name = "product", description = "Storefront products")
    )
)]
pub struct ApiDoc;

/// Declares the JWT bearer scheme referenced by the write endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// Every route, the Swagger UI included, runs behind the bearer token middleware,
/// gzip compression and request tracing.
pub fn router(state: AppState) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(category::get_categories))
        .routes(routes!(product::get_products, product::create_product))
        .routes(routes!(
            product::get_product_by_id,
            product::replace_product,
            product::delete_product
        ))
        .routes(routes!(product::get_products_by_category))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, api))
        .layer(from_fn_with_state(state.clone(), authenticate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
