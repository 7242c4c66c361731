//! In-memory storage behind the repository traits.
//!
//! Backs the whole service for now. Everything that would become a database
//! query later goes through [`JobsRepo`]/[`ArticlesRepo`], so this store can
//! be replaced without touching handlers.

pub mod fixtures;

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::repos::{ArticlesRepo, CreateJobParams, JobsRepo, RepoError};
use crate::domain::entities::{ArticleRecord, JobRecord};
use crate::domain::types::{ArticleStatus, JobStatus, RoadmapStage};

pub struct MemoryStore {
    jobs: RwLock<HashMap<Uuid, JobRecord>>,
    articles: RwLock<HashMap<String, ArticleRecord>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
            articles: RwLock::new(HashMap::new()),
        }
    }

    /// Store pre-loaded with the editorial seed set and its jobs.
    pub fn seeded() -> Self {
        let jobs = fixtures::seed_jobs()
            .into_iter()
            .map(|job| (job.id, job))
            .collect();
        let articles = fixtures::seed_articles()
            .into_iter()
            .map(|article| (article.slug.clone(), article))
            .collect();

        Self {
            jobs: RwLock::new(jobs),
            articles: RwLock::new(articles),
        }
    }
}

#[async_trait]
impl JobsRepo for MemoryStore {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, RepoError> {
        let jobs = self.jobs.read().await;
        let mut records: Vec<JobRecord> = jobs.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(records)
    }

    async fn find_job(&self, id: Uuid) -> Result<Option<JobRecord>, RepoError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(&id).cloned())
    }

    async fn create_job(&self, params: CreateJobParams) -> Result<JobRecord, RepoError> {
        let mut jobs = self.jobs.write().await;
        if jobs.values().any(|job| job.slug == params.slug) {
            return Err(RepoError::Duplicate {
                constraint: format!("job slug `{}` already exists", params.slug),
            });
        }

        let now = OffsetDateTime::now_utc();
        let record = JobRecord {
            id: Uuid::new_v4(),
            slug: params.slug,
            title: params.title,
            status: params.status,
            intent: params.intent,
            stage: params.stage,
            created_at: now,
            updated_at: now,
        };
        jobs.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_job_status(
        &self,
        id: Uuid,
        status: JobStatus,
    ) -> Result<Option<JobRecord>, RepoError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.get_mut(&id).map(|job| {
            job.status = status;
            job.updated_at = OffsetDateTime::now_utc();
            job.clone()
        }))
    }

    async fn update_job_stage(
        &self,
        id: Uuid,
        stage: RoadmapStage,
    ) -> Result<Option<JobRecord>, RepoError> {
        let mut jobs = self.jobs.write().await;
        Ok(jobs.get_mut(&id).map(|job| {
            job.stage = stage;
            job.updated_at = OffsetDateTime::now_utc();
            job.clone()
        }))
    }
}

#[async_trait]
impl ArticlesRepo for MemoryStore {
    async fn list_articles(&self) -> Result<Vec<ArticleRecord>, RepoError> {
        let articles = self.articles.read().await;
        let mut records: Vec<ArticleRecord> = articles.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(records)
    }

    async fn list_published(&self) -> Result<Vec<ArticleRecord>, RepoError> {
        let articles = self.articles.read().await;
        let mut records: Vec<ArticleRecord> = articles
            .values()
            .filter(|article| article.is_published())
            .cloned()
            .collect();
        records.sort_by(|a, b| {
            let a_published = a.published_at.unwrap_or(a.created_at);
            let b_published = b.published_at.unwrap_or(b.created_at);
            b_published
                .cmp(&a_published)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(records)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ArticleRecord>, RepoError> {
        let articles = self.articles.read().await;
        Ok(articles.get(slug).cloned())
    }

    async fn update_status_by_slug(
        &self,
        slug: &str,
        status: ArticleStatus,
    ) -> Result<Option<ArticleRecord>, RepoError> {
        let mut articles = self.articles.write().await;
        Ok(articles.get_mut(slug).map(|article| {
            article.status = status;
            article.updated_at = OffsetDateTime::now_utc();
            if status == ArticleStatus::Published && article.published_at.is_none() {
                article.published_at = Some(article.updated_at);
            }
            article.clone()
        }))
    }
}
