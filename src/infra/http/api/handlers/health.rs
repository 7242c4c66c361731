//! Health handler

use axum::Json;
use axum::extract::State;

use crate::infra::http::api::models::{EnvFlags, HealthResponse};
use crate::infra::http::api::state::ApiState;

pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
        env: EnvFlags {
            has_open_ai: state.flags.has_api_key,
            mock: state.flags.mock,
        },
    })
}
