pub mod products;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::product::ProductService;

use crate::openapi::ApiDoc;

/// Shared handler state. Holds the injected product service and nothing global.
#[derive(Clone)]
pub struct ServerState {
    pub products: ProductService,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: product routes, health, and the docs UI
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/products", get(products::list).post(products::create))
        .route("/products/", delete(products::delete_without_id))
        .route("/products/:id", delete(products::delete))
        .with_state(state);

    // Swagger UI at /docs, raw document at /api-docs/openapi.json
    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    api.merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
