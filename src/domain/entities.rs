//! Domain entities held by the storage layer.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::{
    blocks::ContentBlock,
    types::{ArticleIntent, ArticleStatus, JobIntent, JobStatus, RoadmapStage},
};

/// A unit of work covering generation and publication of one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub status: JobStatus,
    pub intent: JobIntent,
    pub stage: RoadmapStage,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A stored article. `intent` is optional because articles created before the
/// intent field existed carry none; quality control normalizes the gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub intent: Option<ArticleIntent>,
    pub excerpt: String,
    pub blocks: Vec<ContentBlock>,
    pub status: ArticleStatus,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl ArticleRecord {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}
