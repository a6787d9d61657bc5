//! Product API handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::api::dto::{ErrorResponse, PaginationQuery, ProductDto, UpdateDescriptionRequest};
use crate::api::error::ApiError;
use crate::api::validated_json::ValidatedJson;
use crate::application::ProductService;
use crate::domain::DomainError;
use crate::support::{PaginationMetadata, QueryStringParameters};

/// Response header carrying [`PaginationMetadata`] as JSON.
pub const PAGINATION_HEADER: HeaderName = HeaderName::from_static("x-pagination");

/// Body of the listing endpoint when the catalog is empty.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found";

/// Product handler state
#[derive(Clone)]
pub struct ProductsState {
    pub service: Arc<ProductService>,
}

fn pagination_header_value(metadata: &PaginationMetadata) -> Result<HeaderValue, DomainError> {
    let encoded = metadata
        .encode()
        .map_err(|e| DomainError::Unexpected(format!("Failed to encode pagination: {}", e)))?;
    HeaderValue::from_str(&encoded)
        .map_err(|e| DomainError::Unexpected(format!("Invalid pagination header: {}", e)))
}

/// List every product
///
/// Returns the whole catalog in creation order, or the plain-text message
/// `No products found` when the catalog is empty.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = [ProductDto]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn list_products(State(state): State<ProductsState>) -> Result<Response, ApiError> {
    let products = state.service.list_all().await?;
    if products.is_empty() {
        return Ok((StatusCode::OK, NO_PRODUCTS_MESSAGE).into_response());
    }
    Ok(Json(products).into_response())
}

/// List one page of products
///
/// The body holds only the page's items. The `X-Pagination` header carries
/// `totalCount`, `pageSize`, `currentPage`, `totalPages`, `hasNext` and
/// `hasPrevious` as JSON. Out-of-range parameters are rejected, not corrected.
#[utoipa::path(
    get,
    path = "/api/v2/products/paginated",
    tag = "Products",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Requested page", body = [ProductDto],
            headers(("X-Pagination" = String, description = "Pagination metadata (JSON)"))),
        (status = 400, description = "Invalid paging parameters", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn list_paginated_products(
    State(state): State<ProductsState>,
    query: Result<Query<PaginationQuery>, QueryRejection>,
) -> Result<(HeaderMap, Json<Vec<ProductDto>>), ApiError> {
    let Query(query) = query.map_err(|e| DomainError::Validation(e.body_text()))?;
    let params = QueryStringParameters::try_new(query.page_number, query.page_size)?;

    let (items, metadata) = state.service.get_paginated(params).await?.into_parts();

    let mut headers = HeaderMap::new();
    headers.insert(PAGINATION_HEADER, pagination_header_value(&metadata)?);
    Ok((headers, Json(items)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductDto),
        (status = 404, description = "Not found (empty body)")
    )
)]
pub async fn get_product(
    State(state): State<ProductsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductDto>, ApiError> {
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Replace a product's description
///
/// Only the description changes; the updated product is returned.
#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}/description",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateDescriptionRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductDto),
        (status = 400, description = "Invalid description", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn update_product_description(
    State(state): State<ProductsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateDescriptionRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let updated = state
        .service
        .update_description(id, &req.description)
        .await?;
    Ok(Json(updated))
}
