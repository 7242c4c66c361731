//! Quality-control service for candidate articles.
//!
//! The service owns the I/O half of a QC run: it loads the existing corpus
//! through [`ArticlesRepo`], normalizes it into the shape the rules compare
//! against, and hands both to the pure evaluator in [`rules`].

pub mod rules;

use std::sync::Arc;

use metrics::counter;
use serde_json::{Map, Value};

use crate::application::error::AppError;
use crate::application::repos::ArticlesRepo;
use crate::domain::entities::ArticleRecord;
use crate::domain::types::ArticleIntent;

pub use rules::{RuleOutcome, RuleSeverity, RuleStatus};

/// Existing article reduced to the fields the rules look at. Articles stored
/// before the intent field existed carry no intent; they normalize to the
/// default so every comparison sees a concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedArticle {
    pub slug: String,
    pub title: String,
    pub intent: ArticleIntent,
}

pub fn normalize_existing(articles: &[ArticleRecord]) -> Vec<NormalizedArticle> {
    articles
        .iter()
        .map(|article| NormalizedArticle {
            slug: article.slug.clone(),
            title: article.title.clone(),
            intent: article.intent.unwrap_or_default(),
        })
        .collect()
}

pub struct QcService {
    articles: Arc<dyn ArticlesRepo>,
}

impl QcService {
    pub fn new(articles: Arc<dyn ArticlesRepo>) -> Self {
        Self { articles }
    }

    /// Run every rule against the candidate article.
    pub async fn review(&self, candidate: &Map<String, Value>) -> Result<Vec<RuleOutcome>, AppError> {
        let existing = self
            .articles
            .list_articles()
            .await
            .map_err(|err| AppError::unexpected(format!("failed to load articles for qc: {err}")))?;
        let normalized = normalize_existing(&existing);

        let outcomes = rules::evaluate(candidate, &normalized);

        counter!("cambio_qc_runs_total").increment(1);
        let failures = outcomes.iter().filter(|outcome| outcome.failed()).count();
        if failures > 0 {
            counter!("cambio_qc_rule_failures_total").increment(failures as u64);
        }

        Ok(outcomes)
    }
}
