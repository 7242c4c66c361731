//! Jobs handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

use super::{parse_job_id, repo_to_api};
use crate::infra::http::api::error::ApiError;
use crate::infra::http::api::models::JobView;
use crate::infra::http::api::state::ApiState;

pub async fn list_jobs(State(state): State<ApiState>) -> Result<impl IntoResponse, ApiError> {
    let jobs = state.jobs.list_jobs().await.map_err(repo_to_api)?;
    let views: Vec<JobView> = jobs.into_iter().map(JobView::from).collect();
    Ok(Json(views))
}

pub async fn get_job(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_job_id(&id)?;
    let job = state
        .jobs
        .find_job(id)
        .await
        .map_err(repo_to_api)?
        .ok_or_else(|| ApiError::not_found("job not found"))?;

    Ok(Json(JobView::from(job)))
}
