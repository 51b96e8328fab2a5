pub mod brands;
pub mod cars;
pub mod params;
pub mod seed;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "OK", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, docs, cars, brands and seed routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let cars = Router::new()
        .route("/cars", get(cars::find_all).post(cars::create))
        .route("/cars/sku/:sku", get(cars::find_by_sku))
        .route(
            "/cars/:id",
            get(cars::find_by_id).patch(cars::update).delete(cars::delete),
        );

    let brands = Router::new()
        .route("/brands", get(brands::find_all).post(brands::create))
        .route(
            "/brands/:id",
            get(brands::find_by_id).patch(brands::update).delete(brands::delete),
        );

    let seed = Router::new().route("/seed", get(seed::populate));

    // Compose
    public
        .merge(cars)
        .merge(brands)
        .merge(seed)
        .with_state(state)
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
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
