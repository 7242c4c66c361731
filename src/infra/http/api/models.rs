use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::application::qc::RuleOutcome;
use crate::domain::entities::JobRecord;
use crate::domain::types::{JobIntent, JobStatus, RoadmapStage};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub status: JobStatus,
    pub intent: JobIntent,
    pub stage: RoadmapStage,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<JobRecord> for JobView {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id,
            slug: record.slug,
            title: record.title,
            status: record.status,
            intent: record.intent,
            stage: record.stage,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
    pub env: EnvFlags,
}

#[derive(Debug, Serialize)]
pub struct EnvFlags {
    #[serde(rename = "hasOpenAI")]
    pub has_open_ai: bool,
    pub mock: bool,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub ok: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub ok: bool,
    pub id: Uuid,
    pub stage: RoadmapStage,
}

/// Stage arrives as a raw string so unknown values produce a controlled 400
/// instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RoadmapUpdateRequest {
    pub stage: String,
}

#[derive(Debug, Serialize)]
pub struct QcReport {
    pub results: Vec<RuleOutcome>,
}
