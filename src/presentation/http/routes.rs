// src/presentation/http/routes.rs
use crate::presentation::http::controllers::slugs;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/slugs/validate", post(slugs::validate_slug))
        .route("/api/v1/slugs/batch", post(slugs::commit_batch))
        .route("/api/v1/slugs/prefetch", post(slugs::prefetch))
        .route(
            "/api/v1/slugs/{entity_name}/{entity_id}",
            get(slugs::get_active_slug).put(slugs::assign_slug),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
