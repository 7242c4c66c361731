//! Seed data for the in-memory store.
//!
//! Job ids are fixed so tests and local API calls can address known records.
//! Articles come from the editorial seed set in `domain::articles`; the
//! Corolla piece is seeded as a draft so the publish flow has work to do.

use time::{Duration, OffsetDateTime};
use uuid::{Uuid, uuid};

use crate::domain::articles::{self, Article};
use crate::domain::entities::{ArticleRecord, JobRecord};
use crate::domain::types::{ArticleStatus, JobIntent, JobStatus, RoadmapStage};

/// Job awaiting review, paired with the draft Corolla article.
pub const REVIEW_JOB_ID: Uuid = uuid!("8f2b5c1e-4a3d-4e6f-9b7a-2c8d1e5f0a34");
/// Job already published; publishing it again must be refused.
pub const PUBLISHED_JOB_ID: Uuid = uuid!("3e9d7a52-6b1c-4f08-8a2e-5d4c3b2a1908");
/// Freshly queued job with no article yet.
pub const QUEUED_JOB_ID: Uuid = uuid!("b7a1c3d5-2e4f-4a6b-8c9d-0e1f2a3b4c5d");
pub const GENERATING_JOB_ID: Uuid = uuid!("6c5d4e3f-2a1b-4c8d-9e0f-1a2b3c4d5e6f");
pub const FAILED_JOB_ID: Uuid = uuid!("f0e1d2c3-b4a5-4968-8796-a5b4c3d2e1f0");

/// Seed slugs that start out unpublished.
const DRAFT_SEED_SLUGS: &[&str] = &["corolla-hybrid-vs-civic-hybrid"];

pub fn seed_jobs() -> Vec<JobRecord> {
    let now = OffsetDateTime::now_utc();
    vec![
        job(
            REVIEW_JOB_ID,
            "corolla-hybrid-vs-civic-hybrid",
            "2026 Corolla Hybrid vs Civic Hybrid",
            JobStatus::NeedsReview,
            JobIntent::Publish,
            RoadmapStage::Drafting,
            now - Duration::days(2),
        ),
        job(
            PUBLISHED_JOB_ID,
            "kia-ev6-vs-hyundai-ioniq-5",
            "Kia EV6 vs Hyundai Ioniq 5",
            JobStatus::Published,
            JobIntent::Publish,
            RoadmapStage::Live,
            now - Duration::days(21),
        ),
        job(
            QUEUED_JOB_ID,
            "best-compact-evs-2026",
            "The Best Compact EVs of 2026",
            JobStatus::Queued,
            JobIntent::Draft,
            RoadmapStage::Researching,
            now - Duration::hours(6),
        ),
        job(
            GENERATING_JOB_ID,
            "winter-tire-buying-guide",
            "Winter Tire Buying Guide",
            JobStatus::Generating,
            JobIntent::Draft,
            RoadmapStage::Drafting,
            now - Duration::hours(1),
        ),
        job(
            FAILED_JOB_ID,
            "rav4-vs-cr-v",
            "Toyota RAV4 vs Honda CR-V",
            JobStatus::Failed,
            JobIntent::Refresh,
            RoadmapStage::Backlog,
            now - Duration::days(5),
        ),
    ]
}

fn job(
    id: Uuid,
    slug: &str,
    title: &str,
    status: JobStatus,
    intent: JobIntent,
    stage: RoadmapStage,
    created_at: OffsetDateTime,
) -> JobRecord {
    JobRecord {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        status,
        intent,
        stage,
        created_at,
        updated_at: created_at,
    }
}

pub fn seed_articles() -> Vec<ArticleRecord> {
    articles::all().iter().map(article_record).collect()
}

fn article_record(article: &Article) -> ArticleRecord {
    let published = article.published.midnight().assume_utc();
    let status = if DRAFT_SEED_SLUGS.contains(&article.slug) {
        ArticleStatus::Draft
    } else {
        ArticleStatus::Published
    };

    ArticleRecord {
        id: Uuid::new_v4(),
        slug: article.slug.to_string(),
        title: article.title.to_string(),
        intent: article.intent,
        excerpt: article.excerpt.to_string(),
        blocks: article.blocks(),
        status,
        published_at: (status == ArticleStatus::Published).then_some(published),
        created_at: published,
        updated_at: published,
    }
}
