//! Renderers for the article content blocks.
//!
//! Each block kind maps to one template; markdown additionally runs through
//! the sanitizing render pipeline before it reaches the template. The output
//! strings are complete, safe fragments ready to drop into the article page.

use askama::Template;
use thiserror::Error;

use crate::application::render::{RenderError, render_service};
use crate::domain::blocks::{ContentBlock, GalleryImage, SpecGroup};

use super::views::TemplateRenderError;

#[derive(Debug, Error)]
pub enum BlockRenderError {
    #[error(transparent)]
    Markdown(#[from] RenderError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
}

#[derive(Template)]
#[template(path = "blocks/markdown.html")]
struct MarkdownBlock<'a> {
    html: &'a str,
}

#[derive(Template)]
#[template(path = "blocks/specs.html")]
struct SpecsBlock<'a> {
    title: Option<&'a str>,
    groups: &'a [SpecGroup],
}

#[derive(Template)]
#[template(path = "blocks/gallery.html")]
struct GalleryBlock<'a> {
    images: &'a [GalleryImage],
}

#[derive(Template)]
#[template(path = "blocks/cta.html")]
struct CtaBlock<'a> {
    heading: &'a str,
    sub: &'a str,
    href: &'a str,
    label: &'a str,
}

#[derive(Template)]
#[template(path = "blocks/tldr.html")]
struct TldrBlock<'a> {
    points: &'a [String],
}

pub fn render_block(block: &ContentBlock) -> Result<String, BlockRenderError> {
    match block {
        ContentBlock::Markdown { md } => {
            let html = render_service().render_markdown(md)?;
            render(MarkdownBlock { html: &html })
        }
        ContentBlock::Specs { title, groups } => render(SpecsBlock {
            title: title.as_deref(),
            groups,
        }),
        ContentBlock::Gallery { images } => render(GalleryBlock { images }),
        ContentBlock::Cta {
            heading,
            sub,
            href,
            label,
        } => render(CtaBlock {
            heading,
            sub,
            href,
            label,
        }),
        ContentBlock::Tldr { points } => render(TldrBlock { points }),
    }
}

fn render<T: Template>(template: T) -> Result<String, BlockRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::blocks::render",
            "Block rendering failed",
            err,
        )
        .into()
    })
}
