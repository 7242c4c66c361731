use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::application::error::{ErrorReport, HttpError};
use crate::domain::articles::{format_human_date, format_iso_date};
use crate::domain::entities::ArticleRecord;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn render_not_found_response() -> Response {
    let mut response = render_template_response(
        ErrorTemplate {
            view: ErrorPageView::not_found(),
        },
        StatusCode::NOT_FOUND,
    );
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        "Resource not found",
    )
    .attach(&mut response);
    response
}

/// One published article on the index page.
#[derive(Clone)]
pub struct ArticleCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub intent_label: String,
    pub iso_date: String,
    pub published: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub articles: Vec<ArticleCard>,
}

pub struct ArticleView {
    pub title: String,
    pub excerpt: String,
    pub intent_label: String,
    pub iso_date: String,
    pub published: String,
    pub blocks_html: Vec<String>,
}

#[derive(Template)]
#[template(path = "article.html")]
pub struct ArticleTemplate {
    pub view: ArticleView,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "Page Not Found".to_string(),
            message: "The article you requested does not exist or has not been published yet."
                .to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: ErrorPageView,
}

pub fn article_card(record: &ArticleRecord) -> ArticleCard {
    let date = record.published_at.unwrap_or(record.created_at).date();
    ArticleCard {
        slug: record.slug.clone(),
        title: record.title.clone(),
        excerpt: record.excerpt.clone(),
        intent_label: record.intent.unwrap_or_default().label().to_string(),
        iso_date: format_iso_date(date),
        published: format_human_date(date),
    }
}

/// View for the article page; `blocks_html` must already be sanitized markup.
pub fn article_view(record: &ArticleRecord, blocks_html: Vec<String>) -> ArticleView {
    let date = record.published_at.unwrap_or(record.created_at).date();
    ArticleView {
        title: record.title.clone(),
        excerpt: record.excerpt.clone(),
        intent_label: record.intent.unwrap_or_default().label().to_string(),
        iso_date: format_iso_date(date),
        published: format_human_date(date),
        blocks_html,
    }
}
