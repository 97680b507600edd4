pub mod dtos;
pub mod handlers;
pub mod page;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{app_state::AppState, health};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::rate, health::health_check),
    components(schemas(
        dtos::RateRequest,
        dtos::RatingResponse,
        dtos::ErrorResponse,
        health::HealthResponse,
        crate::rating::Metadata,
        crate::rating::Rating,
        crate::classifier::QualityBucket,
    )),
    tags(
        (name = "rating", description = "Single-page quality rating"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/rate", get(handlers::rate_form))
        .route("/v1/rate", post(handlers::rate))
        .route("/healthz", get(health::health_check))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
