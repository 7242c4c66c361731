use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::application::error::HttpError;
use crate::application::repos::ArticlesRepo;
use crate::presentation::blocks::render_block;
use crate::presentation::views::{
    ArticleTemplate, IndexTemplate, article_card, article_view, render_not_found_response,
    render_template_response,
};

use super::{
    RouterState, repo_error_to_http,
    middleware::{log_responses, set_request_context},
};

#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<dyn ArticlesRepo>,
}

pub fn build_router(state: RouterState) -> Router<RouterState> {
    Router::new()
        .route("/", get(index))
        .route("/articles/{slug}", get(article_detail))
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn index(State(state): State<HttpState>) -> Response {
    match state.articles.list_published().await {
        Ok(records) => {
            let articles = records.iter().map(article_card).collect();
            render_template_response(IndexTemplate { articles }, StatusCode::OK)
        }
        Err(err) => repo_error_to_http("infra::http::public::index", err).into_response(),
    }
}

async fn article_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    const SOURCE: &str = "infra::http::public::article_detail";

    match state.articles.find_by_slug(&slug).await {
        // Drafts stay invisible until the publish flow flips them.
        Ok(Some(record)) if record.is_published() => {
            let mut blocks_html = Vec::with_capacity(record.blocks.len());
            for block in &record.blocks {
                match render_block(block) {
                    Ok(html) => blocks_html.push(html),
                    Err(err) => {
                        return HttpError::from_error(
                            SOURCE,
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "Failed to render article",
                            &err,
                        )
                        .into_response();
                    }
                }
            }
            render_template_response(
                ArticleTemplate {
                    view: article_view(&record, blocks_html),
                },
                StatusCode::OK,
            )
        }
        Ok(_) => render_not_found_response(),
        Err(err) => repo_error_to_http(SOURCE, err).into_response(),
    }
}

async fn not_found() -> Response {
    render_not_found_response()
}
