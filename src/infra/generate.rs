//! Generation provider adapters.
//!
//! Two implementations of [`GenerationProvider`]: a deterministic mock used
//! in tests and local development, and an OpenAI chat-completions client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::generate::{GenerateError, GenerateRequest, GenerationProvider, ProviderCompletion};
use crate::config::GenerationSettings;
use crate::domain::blocks::{ContentBlock, SpecGroup, SpecRow};
use crate::infra::error::InfraError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Deterministic provider used when `generation.mock` is enabled. Produces a
/// skeleton draft that exercises every block kind without network access.
pub struct MockProvider;

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn complete(
        &self,
        request: &GenerateRequest,
    ) -> Result<ProviderCompletion, GenerateError> {
        let prompt = request.prompt.trim();
        let blocks = vec![
            ContentBlock::Tldr {
                points: vec![
                    "Mock draft; no language model was called.".to_string(),
                    format!("Prompt: {prompt}"),
                ],
            },
            ContentBlock::Markdown {
                md: format!(
                    "## Draft outline\n\n> {prompt}\n\nReplace each section with researched copy before sending this to review."
                ),
            },
            ContentBlock::Specs {
                title: Some("Placeholder figures".to_string()),
                groups: vec![SpecGroup {
                    title: "At a glance".to_string(),
                    rows: vec![
                        SpecRow {
                            label: "Price".to_string(),
                            value: "TBD".to_string(),
                        },
                        SpecRow {
                            label: "Range".to_string(),
                            value: "TBD".to_string(),
                        },
                    ],
                }],
            },
        ];

        Ok(ProviderCompletion {
            model: "mock".to_string(),
            blocks,
        })
    }
}

/// Chat-completions client against an OpenAI-compatible endpoint.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    default_model: String,
}

impl OpenAiProvider {
    pub fn new(settings: &GenerationSettings) -> Result<Self, InfraError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                InfraError::configuration(format!("failed to build generation client: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            default_model: settings.model.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    async fn complete(
        &self,
        request: &GenerateRequest,
    ) -> Result<ProviderCompletion, GenerateError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(GenerateError::NotConfigured(
                "no API key is configured; set OPENAI_API_KEY or enable mock mode".to_string(),
            ));
        };

        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let payload = ChatCompletionRequest {
            model,
            messages,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<Value>().await.ok();
            let message = body
                .as_ref()
                .and_then(extract_error_message)
                .unwrap_or_else(|| format!("Request failed with {}", status.as_u16()));
            return Err(GenerateError::Provider(message));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|err| {
            GenerateError::Provider(format!("malformed provider response: {err}"))
        })?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| GenerateError::Provider("provider returned no content".to_string()))?;

        Ok(ProviderCompletion {
            model: completion.model,
            blocks: vec![ContentBlock::Markdown { md: content }],
        })
    }
}

/// Pull a human-readable message out of a provider error body. Accepts both
/// `{"error": "..."}` and `{"error": {"message": "..."}}`.
fn extract_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::String(message) => Some(message.clone()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn transport_error(err: reqwest::Error) -> GenerateError {
    if err.is_timeout() {
        GenerateError::Transport("request timed out".to_string())
    } else {
        GenerateError::Transport(err.to_string())
    }
}
