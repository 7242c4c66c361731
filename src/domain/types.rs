//! Shared domain enumerations used across records and wire payloads.

use serde::{Deserialize, Serialize};

/// Editorial intent attached to an article. New drafts that predate the intent
/// field are treated as comparisons, the platform's original article type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleIntent {
    #[default]
    Comparison,
    Review,
    Guide,
    News,
}

impl ArticleIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleIntent::Comparison => "comparison",
            ArticleIntent::Review => "review",
            ArticleIntent::Guide => "guide",
            ArticleIntent::News => "news",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ArticleIntent::Comparison => "Comparison",
            ArticleIntent::Review => "Review",
            ArticleIntent::Guide => "Guide",
            ArticleIntent::News => "News",
        }
    }
}

impl TryFrom<&str> for ArticleIntent {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "comparison" => Ok(ArticleIntent::Comparison),
            "review" => Ok(ArticleIntent::Review),
            "guide" => Ok(ArticleIntent::Guide),
            "news" => Ok(ArticleIntent::News),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

/// Lifecycle of a generation job, from intake to publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Generating,
    NeedsReview,
    Published,
    Failed,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Generating => "generating",
            JobStatus::NeedsReview => "needs_review",
            JobStatus::Published => "published",
            JobStatus::Failed => "failed",
        }
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "queued" => Ok(JobStatus::Queued),
            "generating" => Ok(JobStatus::Generating),
            "needs_review" => Ok(JobStatus::NeedsReview),
            "published" => Ok(JobStatus::Published),
            "failed" => Ok(JobStatus::Failed),
            _ => Err(()),
        }
    }
}

/// What the job is meant to produce once generation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobIntent {
    Publish,
    Draft,
    Refresh,
}

impl JobIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            JobIntent::Publish => "publish",
            JobIntent::Draft => "draft",
            JobIntent::Refresh => "refresh",
        }
    }
}

/// Editorial roadmap stage, advanced independently of the job status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStage {
    Backlog,
    Researching,
    Drafting,
    Scheduled,
    Live,
}

impl RoadmapStage {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadmapStage::Backlog => "backlog",
            RoadmapStage::Researching => "researching",
            RoadmapStage::Drafting => "drafting",
            RoadmapStage::Scheduled => "scheduled",
            RoadmapStage::Live => "live",
        }
    }
}

impl TryFrom<&str> for RoadmapStage {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "backlog" => Ok(RoadmapStage::Backlog),
            "researching" => Ok(RoadmapStage::Researching),
            "drafting" => Ok(RoadmapStage::Drafting),
            "scheduled" => Ok(RoadmapStage::Scheduled),
            "live" => Ok(RoadmapStage::Live),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_defaults_to_comparison() {
        assert_eq!(ArticleIntent::default(), ArticleIntent::Comparison);
    }

    #[test]
    fn enums_round_trip_through_their_wire_names() {
        for intent in [
            ArticleIntent::Comparison,
            ArticleIntent::Review,
            ArticleIntent::Guide,
            ArticleIntent::News,
        ] {
            assert_eq!(ArticleIntent::try_from(intent.as_str()), Ok(intent));
        }
        for stage in [
            RoadmapStage::Backlog,
            RoadmapStage::Researching,
            RoadmapStage::Drafting,
            RoadmapStage::Scheduled,
            RoadmapStage::Live,
        ] {
            assert_eq!(RoadmapStage::try_from(stage.as_str()), Ok(stage));
        }
    }

    #[test]
    fn unknown_stage_is_rejected() {
        assert!(RoadmapStage::try_from("shipping").is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&JobStatus::NeedsReview).expect("serialize");
        assert_eq!(json, "\"needs_review\"");
    }
}
