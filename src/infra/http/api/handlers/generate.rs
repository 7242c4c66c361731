//! Draft generation handler

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::repo_to_api;
use crate::application::generate::{GenerateError, GenerateRequest};
use crate::infra::http::api::error::{ApiError, codes};
use crate::infra::http::api::state::ApiState;

pub async fn generate_draft(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = state
        .generation
        .generate(&request)
        .await
        .map_err(generate_to_api)?;

    Ok(Json(draft))
}

fn generate_to_api(err: GenerateError) -> ApiError {
    match err {
        GenerateError::EmptyPrompt => ApiError::bad_request("prompt must not be empty", None),
        GenerateError::NotConfigured(hint) => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            codes::GENERATION_UNCONFIGURED,
            "Generation is not configured",
            Some(hint),
        ),
        GenerateError::Provider(message) => ApiError::new(
            StatusCode::BAD_GATEWAY,
            codes::PROVIDER,
            "Generation provider rejected the request",
            Some(message),
        ),
        GenerateError::Transport(message) => ApiError::new(
            StatusCode::BAD_GATEWAY,
            codes::PROVIDER,
            "Generation provider is unreachable",
            Some(message),
        ),
        GenerateError::Slug(err) => ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            codes::GENERATION,
            "Could not derive a slug for the draft",
            Some(err.to_string()),
        ),
        GenerateError::Repo(err) => repo_to_api(err),
    }
}
