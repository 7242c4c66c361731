//! Pure quality-control rules.
//!
//! `evaluate` takes the candidate article as raw JSON plus the normalized
//! existing corpus, and returns one outcome per rule in declaration order.
//! Keeping this free of I/O makes every rule testable in isolation.

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use super::NormalizedArticle;
use crate::domain::blocks::ContentBlock;
use crate::domain::types::ArticleIntent;

/// Longest title the article layout renders without truncation.
const MAX_TITLE_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Pass,
    Fail,
}

/// Result of one rule applied to one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub severity: RuleSeverity,
    pub status: RuleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleOutcome {
    fn pass(rule: &'static str, severity: RuleSeverity) -> Self {
        Self {
            rule,
            severity,
            status: RuleStatus::Pass,
            message: None,
        }
    }

    fn fail(rule: &'static str, severity: RuleSeverity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            status: RuleStatus::Fail,
            message: Some(message.into()),
        }
    }

    pub fn failed(&self) -> bool {
        self.status == RuleStatus::Fail
    }
}

/// Run every rule against the candidate. Outcomes come back in a stable
/// order: one entry per rule, declaration order.
pub fn evaluate(candidate: &Map<String, Value>, existing: &[NormalizedArticle]) -> Vec<RuleOutcome> {
    vec![
        required_title(candidate),
        required_slug(candidate),
        intent_known(candidate),
        duplicate_slug(candidate, existing),
        duplicate_title(candidate, existing),
        blocks_well_formed(candidate),
        title_length(candidate),
    ]
}

fn non_empty_str<'a>(candidate: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    candidate
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required_title(candidate: &Map<String, Value>) -> RuleOutcome {
    const RULE: &str = "required_title";
    match non_empty_str(candidate, "title") {
        Some(_) => RuleOutcome::pass(RULE, RuleSeverity::Error),
        None => RuleOutcome::fail(
            RULE,
            RuleSeverity::Error,
            "article is missing a non-empty title",
        ),
    }
}

fn required_slug(candidate: &Map<String, Value>) -> RuleOutcome {
    const RULE: &str = "required_slug";
    match non_empty_str(candidate, "slug") {
        Some(_) => RuleOutcome::pass(RULE, RuleSeverity::Error),
        None => RuleOutcome::fail(
            RULE,
            RuleSeverity::Error,
            "article is missing a non-empty slug",
        ),
    }
}

/// An absent intent is fine (it defaults to comparison downstream); a present
/// intent must name a known value.
fn intent_known(candidate: &Map<String, Value>) -> RuleOutcome {
    const RULE: &str = "intent_known";
    match candidate.get("intent") {
        None | Some(Value::Null) => RuleOutcome::pass(RULE, RuleSeverity::Error),
        Some(Value::String(raw)) => match ArticleIntent::try_from(raw.as_str()) {
            Ok(_) => RuleOutcome::pass(RULE, RuleSeverity::Error),
            Err(()) => RuleOutcome::fail(
                RULE,
                RuleSeverity::Error,
                format!("unknown intent `{raw}`"),
            ),
        },
        Some(other) => RuleOutcome::fail(
            RULE,
            RuleSeverity::Error,
            format!("intent must be a string, got {}", json_type_name(other)),
        ),
    }
}

fn duplicate_slug(candidate: &Map<String, Value>, existing: &[NormalizedArticle]) -> RuleOutcome {
    const RULE: &str = "duplicate_slug";
    let Some(slug) = non_empty_str(candidate, "slug") else {
        // required_slug already reports the missing field.
        return RuleOutcome::pass(RULE, RuleSeverity::Error);
    };

    match existing.iter().find(|article| article.slug == slug) {
        Some(article) => RuleOutcome::fail(
            RULE,
            RuleSeverity::Error,
            format!("slug `{slug}` already used by \"{}\"", article.title),
        ),
        None => RuleOutcome::pass(RULE, RuleSeverity::Error),
    }
}

fn duplicate_title(candidate: &Map<String, Value>, existing: &[NormalizedArticle]) -> RuleOutcome {
    const RULE: &str = "duplicate_title";
    let Some(title) = non_empty_str(candidate, "title") else {
        return RuleOutcome::pass(RULE, RuleSeverity::Warning);
    };

    let lowered = title.to_lowercase();
    match existing
        .iter()
        .find(|article| article.title.to_lowercase() == lowered)
    {
        Some(article) => RuleOutcome::fail(
            RULE,
            RuleSeverity::Warning,
            format!("title matches existing article `{}`", article.slug),
        ),
        None => RuleOutcome::pass(RULE, RuleSeverity::Warning),
    }
}

fn blocks_well_formed(candidate: &Map<String, Value>) -> RuleOutcome {
    const RULE: &str = "blocks_well_formed";
    let blocks = match candidate.get("blocks") {
        None | Some(Value::Null) => return RuleOutcome::pass(RULE, RuleSeverity::Error),
        Some(Value::Array(blocks)) => blocks,
        Some(other) => {
            return RuleOutcome::fail(
                RULE,
                RuleSeverity::Error,
                format!("blocks must be an array, got {}", json_type_name(other)),
            );
        }
    };

    let mut violations = Vec::new();
    for (index, raw) in blocks.iter().enumerate() {
        match serde_json::from_value::<ContentBlock>(raw.clone()) {
            Ok(block) => {
                if let Some(problem) = block_violation(&block) {
                    violations.push(format!("block {index}: {problem}"));
                }
            }
            Err(err) => violations.push(format!("block {index}: unrecognized shape ({err})")),
        }
    }

    if violations.is_empty() {
        RuleOutcome::pass(RULE, RuleSeverity::Error)
    } else {
        RuleOutcome::fail(RULE, RuleSeverity::Error, violations.join("; "))
    }
}

fn block_violation(block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Markdown { md } => md
            .trim()
            .is_empty()
            .then(|| "markdown body is empty".to_string()),
        ContentBlock::Specs { groups, .. } => {
            if groups.is_empty() {
                return Some("specs block has no groups".to_string());
            }
            for group in groups {
                if group
                    .rows
                    .iter()
                    .any(|row| row.label.trim().is_empty() || row.value.trim().is_empty())
                {
                    return Some(format!("specs group `{}` has incomplete rows", group.title));
                }
            }
            None
        }
        ContentBlock::Gallery { images } => {
            if images.is_empty() {
                return Some("gallery has no images".to_string());
            }
            images.iter().find_map(|image| {
                if image.url.trim().is_empty() {
                    Some("gallery image missing url".to_string())
                } else if image.alt.trim().is_empty() {
                    Some(format!("gallery image `{}` missing alt text", image.url))
                } else {
                    None
                }
            })
        }
        ContentBlock::Cta { href, .. } => match Url::parse(href) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => None,
            Ok(url) => Some(format!("cta href scheme `{}` is not allowed", url.scheme())),
            Err(_) => Some(format!("cta href `{href}` is not a valid URL")),
        },
        ContentBlock::Tldr { points } => {
            if points.is_empty() || points.iter().any(|point| point.trim().is_empty()) {
                Some("tldr points must be non-empty".to_string())
            } else {
                None
            }
        }
    }
}

fn title_length(candidate: &Map<String, Value>) -> RuleOutcome {
    const RULE: &str = "title_length";
    let Some(title) = non_empty_str(candidate, "title") else {
        return RuleOutcome::pass(RULE, RuleSeverity::Warning);
    };

    let chars = title.chars().count();
    if chars > MAX_TITLE_CHARS {
        RuleOutcome::fail(
            RULE,
            RuleSeverity::Warning,
            format!("title is {chars} characters, ceiling is {MAX_TITLE_CHARS}"),
        )
    } else {
        RuleOutcome::pass(RULE, RuleSeverity::Warning)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
