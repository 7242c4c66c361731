//! Markdown rendering pipeline: Comrak AST -> HTML -> Ammonia sanitization.
//!
//! Markdown arrives from generated drafts and editor input, so the output is
//! never trusted: raw HTML passes through Comrak untouched and the sanitizer
//! decides what survives. Hard line breaks are enabled because article prose
//! is written with single newlines that must stay visible.

use std::{collections::HashSet, sync::Arc};

use ammonia::Builder as AmmoniaBuilder;
use comrak::{
    Arena, format_html,
    options::{ListStyleType, Options},
    parse_document,
};
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("markdown rendering failed: {message}")]
    Markdown { message: String },
}

/// Comrak-based renderer with Ammonia sanitization, shared process-wide.
pub struct MarkdownRenderService {
    options: Options<'static>,
    sanitizer: AmmoniaBuilder<'static>,
}

static RENDER_SERVICE: Lazy<Arc<MarkdownRenderService>> =
    Lazy::new(|| Arc::new(MarkdownRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<MarkdownRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl MarkdownRenderService {
    fn new() -> Self {
        Self {
            options: default_options(),
            sanitizer: build_sanitizer(),
        }
    }

    /// Render untrusted markdown into sanitized HTML.
    pub fn render_markdown(&self, markdown: &str) -> Result<String, RenderError> {
        let arena = Arena::new();
        let root = parse_document(&arena, markdown, &self.options);

        let mut html = String::new();
        format_html(root, &self.options, &mut html).map_err(|err| RenderError::Markdown {
            message: err.to_string(),
        })?;

        Ok(self.sanitizer.clean(&html).to_string())
    }
}

impl Default for MarkdownRenderService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;

    let render = &mut options.render;
    // Single newlines in article prose become visible <br> breaks.
    render.hardbreaks = true;
    render.github_pre_lang = true;
    render.list_style = ListStyleType::Dash;
    render.escaped_char_spans = true;
    render.gfm_quirks = true;
    // Raw HTML flows through to the sanitizer, which owns the allow-list.
    render.r#unsafe = true;

    options
}

fn build_sanitizer() -> AmmoniaBuilder<'static> {
    let mut builder = AmmoniaBuilder::default();

    let tags: HashSet<&'static str> = HashSet::from([
        "a",
        "abbr",
        "blockquote",
        "br",
        "code",
        "dd",
        "del",
        "dl",
        "dt",
        "em",
        "figcaption",
        "figure",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "hr",
        "i",
        "img",
        "input",
        "ins",
        "kbd",
        "li",
        "mark",
        "ol",
        "p",
        "pre",
        "s",
        "span",
        "strong",
        "sub",
        "sup",
        "table",
        "tbody",
        "td",
        "th",
        "thead",
        "tr",
        "u",
        "ul",
    ]);
    builder.tags(tags);

    let generic: HashSet<&'static str> = HashSet::from([
        "class",
        "id",
        "title",
        "lang",
        "dir",
        "aria-hidden",
        "aria-label",
        "role",
    ]);
    builder.generic_attributes(generic);

    builder.add_tag_attributes("a", &["target"]);
    builder.add_tag_attributes("img", &["alt", "title", "width", "height", "loading"]);
    builder.add_tag_attributes("code", &["data-language", "class"]);
    builder.add_tag_attributes("pre", &["class", "data-language"]);
    builder.add_tag_attributes("th", &["align", "colspan", "rowspan", "scope"]);
    builder.add_tag_attributes("td", &["align", "colspan", "rowspan"]);
    builder.add_tag_attributes("input", &["type", "checked", "disabled", "class"]);

    builder.add_url_schemes(["http", "https", "mailto", "tel"].iter().copied());

    builder
}
