//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::products::{ProductsState, PAGINATION_HEADER};
use crate::api::handlers::{health, products};
use crate::application::ProductService;
use crate::support::PaginationMetadata;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::list_paginated_products,
        products::get_product,
        products::update_product_description,
    ),
    components(
        schemas(
            ProductDto,
            UpdateDescriptionRequest,
            ErrorResponse,
            PaginationMetadata,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe."),
        (name = "Products", description = "Product catalog. Version 1 offers listing, lookup and description updates; version 2 adds paged listing with an `X-Pagination` response header. Every v1 route is also served under `/api/v2`."),
    ),
    info(
        title = "Eshop Product Catalog API",
        version = "2.0.0",
        description = "Versioned REST API over the product catalog.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Routes shared by every API version
fn v1_product_routes() -> Router<ProductsState> {
    Router::new()
        .route("/", get(products::list_products))
        .route("/all-products", get(products::list_products))
        .route("/{id}", get(products::get_product))
        .route(
            "/{id}/description",
            patch(products::update_product_description),
        )
}

fn v2_product_routes() -> Router<ProductsState> {
    v1_product_routes()
        .route("/paginated", get(products::list_paginated_products))
        .route(
            "/all-paginated-products",
            get(products::list_paginated_products),
        )
}

/// Create the API router with all routes
pub fn create_api_router(service: Arc<ProductService>) -> Router {
    let state = ProductsState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([PAGINATION_HEADER]);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1/products", v1_product_routes().with_state(state.clone()))
        .nest("/api/v2/products", v2_product_routes().with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
