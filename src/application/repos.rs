//! Repository traits describing the storage seam.
//!
//! Handlers and services depend on these traits instead of one concrete store,
//! so the in-memory fixtures can be swapped for a persistent backend without
//! touching handler signatures.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{ArticleRecord, JobRecord};
use crate::domain::types::{ArticleStatus, JobIntent, JobStatus, RoadmapStage};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
}

#[derive(Debug, Clone)]
pub struct CreateJobParams {
    pub slug: String,
    pub title: String,
    pub status: JobStatus,
    pub intent: JobIntent,
    pub stage: RoadmapStage,
}

#[async_trait]
pub trait JobsRepo: Send + Sync {
    /// List all jobs, newest first.
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, RepoError>;

    async fn find_job(&self, id: Uuid) -> Result<Option<JobRecord>, RepoError>;

    async fn create_job(&self, params: CreateJobParams) -> Result<JobRecord, RepoError>;

    /// Set the job status and touch `updated_at`. Returns the updated record,
    /// or `None` when the job does not exist.
    async fn update_job_status(
        &self,
        id: Uuid,
        status: JobStatus,
    ) -> Result<Option<JobRecord>, RepoError>;

    /// Move the job to a roadmap stage and touch `updated_at`. Returns the
    /// updated record, or `None` when the job does not exist.
    async fn update_job_stage(
        &self,
        id: Uuid,
        stage: RoadmapStage,
    ) -> Result<Option<JobRecord>, RepoError>;
}

#[async_trait]
pub trait ArticlesRepo: Send + Sync {
    /// List every stored article regardless of status.
    async fn list_articles(&self) -> Result<Vec<ArticleRecord>, RepoError>;

    /// List published articles, newest publication first.
    async fn list_published(&self) -> Result<Vec<ArticleRecord>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ArticleRecord>, RepoError>;

    /// Flip an article's status, stamping `published_at` on first publication.
    /// Returns `None` when no article carries the slug.
    async fn update_status_by_slug(
        &self,
        slug: &str,
        status: ArticleStatus,
    ) -> Result<Option<ArticleRecord>, RepoError>;
}
