//! Typed content blocks that make up an article body.
//!
//! Blocks are the unit of rendering: each variant maps to one template and is
//! rendered independently of its siblings. The serialized form is tagged so
//! generated drafts and stored articles share one wire shape.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Free-form prose, rendered through the sanitizing markdown pipeline.
    Markdown { md: String },
    /// Grouped label/value specification rows, e.g. powertrain figures.
    Specs {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        groups: Vec<SpecGroup>,
    },
    /// Image strip. Alt text is required on every image.
    Gallery { images: Vec<GalleryImage> },
    /// Call-to-action banner linking out of the article.
    Cta {
        heading: String,
        sub: String,
        href: String,
        label: String,
    },
    /// Bullet-point summary shown ahead of the article body.
    Tldr { points: Vec<String> },
}

impl ContentBlock {
    /// Wire name of the variant, matching the serialized `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Markdown { .. } => "markdown",
            ContentBlock::Specs { .. } => "specs",
            ContentBlock::Gallery { .. } => "gallery",
            ContentBlock::Cta { .. } => "cta",
            ContentBlock::Tldr { .. } => "tldr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecGroup {
    pub title: String,
    pub rows: Vec<SpecRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
