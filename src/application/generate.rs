//! Draft generation service.
//!
//! Providers produce raw content blocks from a prompt; the service turns a
//! completion into a draft with a title and a slug that does not collide
//! with the existing corpus.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use metrics::counter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::repos::{ArticlesRepo, RepoError};
use crate::domain::blocks::ContentBlock;
use crate::domain::slug::{SlugError, generate_unique_slug};

/// Longest title we derive from a prompt before truncating at a word break.
const MAX_TITLE_CHARS: usize = 80;
const FALLBACK_TITLE: &str = "Untitled comparison";

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

/// What a provider returns before the service shapes it into a draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderCompletion {
    pub model: String,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDraft {
    pub title: String,
    pub slug: String,
    pub model: String,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("generation is not configured: {0}")]
    NotConfigured(String),
    #[error("{0}")]
    Provider(String),
    #[error("could not reach the generation provider: {0}")]
    Transport(String),
    #[error(transparent)]
    Slug(#[from] SlugError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn complete(&self, request: &GenerateRequest)
    -> Result<ProviderCompletion, GenerateError>;
}

pub struct GenerationService {
    provider: Arc<dyn GenerationProvider>,
    articles: Arc<dyn ArticlesRepo>,
    mode: &'static str,
}

impl GenerationService {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        articles: Arc<dyn ArticlesRepo>,
        mode: &'static str,
    ) -> Self {
        Self {
            provider,
            articles,
            mode,
        }
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedDraft, GenerateError> {
        if request.prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }
        counter!("cambio_generate_requests_total", "mode" => self.mode).increment(1);

        let completion = match self.provider.complete(request).await {
            Ok(completion) => completion,
            Err(err) => {
                counter!("cambio_generate_failures_total", "mode" => self.mode).increment(1);
                return Err(err);
            }
        };

        let title = title_from_prompt(&request.prompt);
        let taken: HashSet<String> = self
            .articles
            .list_articles()
            .await?
            .into_iter()
            .map(|article| article.slug)
            .collect();
        let slug = generate_unique_slug(&title, |candidate| !taken.contains(candidate))?;

        Ok(GeneratedDraft {
            title,
            slug,
            model: completion.model,
            blocks: completion.blocks,
        })
    }
}

/// Derive a working title from the first non-empty prompt line, trimmed to a
/// word boundary. Leading markdown heading markers are dropped.
pub fn title_from_prompt(prompt: &str) -> String {
    let line = prompt
        .lines()
        .map(|line| line.trim().trim_start_matches('#').trim())
        .find(|line| !line.is_empty())
        .unwrap_or_default();
    if line.is_empty() {
        return FALLBACK_TITLE.to_string();
    }
    if line.chars().count() <= MAX_TITLE_CHARS {
        return line.to_string();
    }

    let mut cut = 0;
    for (offset, ch) in line.char_indices() {
        if ch.is_whitespace() && line[..offset].chars().count() <= MAX_TITLE_CHARS {
            cut = offset;
        }
    }
    if cut == 0 {
        line.chars().take(MAX_TITLE_CHARS).collect()
    } else {
        line[..cut].trim_end().to_string()
    }
}
