//! Roadmap stage handler

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use super::{parse_job_id, repo_to_api};
use crate::domain::types::RoadmapStage;
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::{RoadmapResponse, RoadmapUpdateRequest};
use crate::infra::http::api::state::ApiState;

pub async fn update_roadmap(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(body): Json<RoadmapUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_job_id(&id)?;
    let stage = RoadmapStage::try_from(body.stage.as_str()).map_err(|()| {
        ApiError::bad_request(
            "unknown roadmap stage",
            Some(format!("`{}` is not a roadmap stage", body.stage)),
        )
    })?;

    let job = state
        .jobs
        .update_job_stage(id, stage)
        .await
        .map_err(repo_to_api)?
        .ok_or_else(|| ApiError::not_found("job not found"))?;

    Ok(Json(RoadmapResponse {
        ok: true,
        id: job.id,
        stage: job.stage,
    }))
}
