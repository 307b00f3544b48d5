use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use service::product::Product;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[utoipa::path(
    post, path = "/products", tag = "Products", operation_id = "createProduct",
    request_body(content = crate::openapi::CreateProductDoc, description = "Product data", content_type = "application/json"),
    responses(
        (status = 201, description = "Product created successfully", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation error", body = crate::openapi::ValidationErrorDoc),
        (status = 409, description = "Title already exists", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = payload?;
    let created = state.products.create_from_json(&body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Store failures are not handled here; `ApiError` turns them into a generic 500.
#[utoipa::path(
    get, path = "/products", tag = "Products", operation_id = "listProducts",
    responses(
        (status = 200, description = "List of products", body = [crate::openapi::ProductDoc]),
        (status = 500, description = "Internal server error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, ApiError> {
    let rows = state.products.list().await?;
    info!(count = rows.len(), "list products");
    Ok(Json(rows))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "Products", operation_id = "deleteProduct",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted successfully", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation error", body = crate::openapi::ValidationErrorDoc),
        (status = 404, description = "Product not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Internal server error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let deleted = state.products.delete(&id).await?;
    Ok(Json(deleted))
}

/// `DELETE /products/` carries an empty id; the service rejects it as a validation error.
pub async fn delete_without_id(State(state): State<ServerState>) -> Result<Json<Product>, ApiError> {
    let deleted = state.products.delete("").await?;
    Ok(Json(deleted))
}
