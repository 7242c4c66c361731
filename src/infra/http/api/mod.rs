pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use state::{ApiState, HealthFlags};

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};

use crate::infra::http::RouterState;
use crate::infra::http::middleware::log_responses;

pub fn build_api_router(state: RouterState) -> Router<RouterState> {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/jobs", get(handlers::list_jobs))
        .route("/api/jobs/{id}", get(handlers::get_job))
        .route("/api/publish/{id}", get(handlers::publish_job))
        .route("/api/roadmap/{id}", patch(handlers::update_roadmap))
        .route("/api/qc", post(handlers::run_qc))
        .route("/api/generate", post(handlers::generate_draft))
        .with_state(state)
        .layer(axum_middleware::from_fn(log_responses))
}
