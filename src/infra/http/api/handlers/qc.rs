//! Quality-control handler

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::error;

use crate::infra::http::api::error::{ApiError, codes};
use crate::infra::http::api::models::QcReport;
use crate::infra::http::api::state::ApiState;

pub async fn run_qc(
    State(state): State<ApiState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let candidate = payload
        .as_object()
        .ok_or_else(|| ApiError::bad_request("article payload must be a JSON object", None))?;

    let results = state.qc.review(candidate).await.map_err(|err| {
        // The underlying failure stays in the logs; the client only learns
        // that the run did not complete.
        error!(
            target = "cambio::api::qc",
            error = %err,
            "quality-control run failed",
        );
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            codes::QC,
            "Quality checks could not be completed",
            None,
        )
    })?;

    Ok(Json(QcReport { results }))
}
