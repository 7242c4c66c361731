//! Built-in demonstration articles.
//!
//! The platform ships with a small set of finished articles so a fresh install
//! renders something real. They double as the corpus quality control compares
//! candidates against. Block content lives in [`data`] as `&'static str` seed
//! values; [`SeedBlock::to_block`] converts them into owned [`ContentBlock`]s
//! when the store is seeded.

mod data;

use time::{Date, format_description::FormatItem, macros::format_description};

use crate::domain::blocks::{ContentBlock, GalleryImage, SpecGroup, SpecRow};
use crate::domain::types::ArticleIntent;

pub use data::ARTICLES;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
pub const ISO_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Copy)]
pub enum SeedBlock {
    Markdown(&'static str),
    Specs {
        title: Option<&'static str>,
        groups: &'static [SeedSpecGroup],
    },
    Gallery(&'static [SeedImage]),
    Cta {
        heading: &'static str,
        sub: &'static str,
        href: &'static str,
        label: &'static str,
    },
    Tldr(&'static [&'static str]),
}

#[derive(Clone, Copy)]
pub struct SeedSpecGroup {
    pub title: &'static str,
    pub rows: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Copy)]
pub struct SeedImage {
    pub url: &'static str,
    pub alt: &'static str,
    pub caption: Option<&'static str>,
}

#[derive(Clone, Copy)]
pub struct Article {
    pub slug: &'static str,
    pub title: &'static str,
    /// `None` models articles that predate the intent field.
    pub intent: Option<ArticleIntent>,
    pub excerpt: &'static str,
    pub published: Date,
    pub blocks: &'static [SeedBlock],
}

impl SeedBlock {
    pub fn to_block(&self) -> ContentBlock {
        match self {
            SeedBlock::Markdown(md) => ContentBlock::Markdown {
                md: (*md).to_string(),
            },
            SeedBlock::Specs { title, groups } => ContentBlock::Specs {
                title: title.map(str::to_string),
                groups: groups
                    .iter()
                    .map(|group| SpecGroup {
                        title: group.title.to_string(),
                        rows: group
                            .rows
                            .iter()
                            .map(|(label, value)| SpecRow {
                                label: (*label).to_string(),
                                value: (*value).to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            },
            SeedBlock::Gallery(images) => ContentBlock::Gallery {
                images: images
                    .iter()
                    .map(|image| GalleryImage {
                        url: image.url.to_string(),
                        alt: image.alt.to_string(),
                        caption: image.caption.map(str::to_string),
                    })
                    .collect(),
            },
            SeedBlock::Cta {
                heading,
                sub,
                href,
                label,
            } => ContentBlock::Cta {
                heading: (*heading).to_string(),
                sub: (*sub).to_string(),
                href: (*href).to_string(),
                label: (*label).to_string(),
            },
            SeedBlock::Tldr(points) => ContentBlock::Tldr {
                points: points.iter().map(|point| (*point).to_string()).collect(),
            },
        }
    }
}

impl Article {
    pub fn blocks(&self) -> Vec<ContentBlock> {
        self.blocks.iter().map(SeedBlock::to_block).collect()
    }
}

pub fn all() -> &'static [Article] {
    &ARTICLES
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT).expect("valid calendar date")
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_slugs_are_unique() {
        for (index, article) in ARTICLES.iter().enumerate() {
            assert!(
                ARTICLES[index + 1..]
                    .iter()
                    .all(|other| other.slug != article.slug),
                "duplicate seed slug {}",
                article.slug
            );
        }
    }

    #[test]
    fn at_least_one_seed_article_lacks_intent() {
        // Quality control's normalization path needs a legacy article to chew on.
        assert!(ARTICLES.iter().any(|article| article.intent.is_none()));
    }

    #[test]
    fn seed_blocks_convert_to_owned_blocks() {
        let article = ARTICLES
            .iter()
            .find(|article| article.slug == "kia-ev6-vs-hyundai-ioniq-5")
            .expect("seed article");
        let blocks = article.blocks();
        assert!(!blocks.is_empty());
        assert!(blocks.iter().any(|block| block.kind() == "specs"));
    }

    #[test]
    fn date_helpers_match_the_site_formats() {
        let date = time::macros::date!(2026 - 06 - 12);
        assert_eq!(format_human_date(date), "June 12, 2026");
        assert_eq!(format_iso_date(date), "2026-06-12");
    }
}
