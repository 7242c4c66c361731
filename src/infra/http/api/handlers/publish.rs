//! Publish handler

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::info;

use super::{parse_job_id, repo_to_api};
use crate::domain::types::{ArticleStatus, JobStatus};
use crate::infra::http::api::error::{ApiError, codes};
use crate::infra::http::api::models::PublishResponse;
use crate::infra::http::api::state::ApiState;

pub async fn publish_job(
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

    if job.status == JobStatus::Published {
        return Err(ApiError::new(
            StatusCode::CONFLICT,
            codes::ALREADY_PUBLISHED,
            "Job is already published",
            Some(format!("job `{}` is already live", job.slug)),
        ));
    }

    let updated = state
        .jobs
        .update_job_status(id, JobStatus::Published)
        .await
        .map_err(repo_to_api)?
        .ok_or_else(|| ApiError::not_found("job not found"))?;

    // A job may run ahead of its article; publish the article when one
    // exists under the same slug.
    let article = state
        .articles
        .update_status_by_slug(&updated.slug, ArticleStatus::Published)
        .await
        .map_err(repo_to_api)?;

    info!(
        target = "cambio::api::publish",
        job_id = %updated.id,
        slug = %updated.slug,
        article_published = article.is_some(),
        "job published",
    );

    Ok(Json(PublishResponse {
        ok: true,
        id: updated.id,
    }))
}
