//! End-to-end coverage of the JSON API and the public pages, driven through
//! the merged router over an in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use cambio::application::generate::GenerationService;
use cambio::application::qc::QcService;
use cambio::application::repos::{ArticlesRepo, CreateJobParams, JobsRepo, RepoError};
use cambio::domain::entities::ArticleRecord;
use cambio::domain::types::{ArticleStatus, JobIntent, JobStatus, RoadmapStage};
use cambio::infra::generate::MockProvider;
use cambio::infra::http::{
    ApiState, HealthFlags, HttpState, RouterState, build_api_router, build_router,
};
use cambio::infra::store::{MemoryStore, fixtures};

fn app_with_store(store: Arc<MemoryStore>) -> Router {
    let jobs: Arc<dyn JobsRepo> = store.clone();
    let articles: Arc<dyn ArticlesRepo> = store;
    app_with_repos(jobs, articles)
}

fn app_with_repos(jobs: Arc<dyn JobsRepo>, articles: Arc<dyn ArticlesRepo>) -> Router {
    let state = RouterState {
        http: HttpState {
            articles: articles.clone(),
        },
        api: ApiState {
            jobs,
            articles: articles.clone(),
            qc: Arc::new(QcService::new(articles.clone())),
            generation: Arc::new(GenerationService::new(
                Arc::new(MockProvider),
                articles,
                "mock",
            )),
            flags: HealthFlags {
                has_api_key: false,
                mock: true,
            },
        },
    };

    build_router(state.clone())
        .merge(build_api_router(state.clone()))
        .with_state(state)
}

fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::seeded()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("router should respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    (status, body)
}

async fn get_html(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_html(app, uri).await;
    let value = serde_json::from_str(&body).expect("json body");
    (status, value)
}

async fn send_json(app: Router, method: Method, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build");
    let (status, body) = send(app, request).await;
    let value = serde_json::from_str(&body).expect("json body");
    (status, value)
}

#[tokio::test]
async fn health_reports_environment_flags() {
    let (status, body) = get_json(app(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
    assert_eq!(body["env"]["hasOpenAI"], json!(false));
    assert_eq!(body["env"]["mock"], json!(true));
}

#[tokio::test]
async fn jobs_list_newest_first() {
    let (status, body) = get_json(app(), "/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let jobs = body.as_array().expect("array of jobs");
    assert_eq!(jobs.len(), 5);
    assert_eq!(jobs[0]["id"], json!(fixtures::GENERATING_JOB_ID));
    assert_eq!(jobs[4]["id"], json!(fixtures::PUBLISHED_JOB_ID));
    assert!(jobs[0]["createdAt"].is_string());
}

#[tokio::test]
async fn job_lookup_returns_the_record() {
    let (status, body) =
        get_json(app(), &format!("/api/jobs/{}", fixtures::REVIEW_JOB_ID)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(fixtures::REVIEW_JOB_ID));
    assert_eq!(body["slug"], json!("corolla-hybrid-vs-civic-hybrid"));
    assert_eq!(body["status"], json!("needs_review"));
    assert_eq!(body["intent"], json!("publish"));
    assert_eq!(body["stage"], json!("drafting"));
}

#[tokio::test]
async fn malformed_job_id_is_a_bad_request() {
    let (status, body) = get_json(app(), "/api/jobs/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("bad_request"));
    assert_eq!(body["error"]["message"], json!("invalid job id"));
}

#[tokio::test]
async fn unknown_job_id_is_not_found() {
    let (status, body) = get_json(app(), &format!("/api/jobs/{}", Uuid::new_v4())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("not_found"));
}

#[tokio::test]
async fn publish_flips_the_job_and_reveals_the_article() {
    let app = app();

    let (status, _) = get_html(app.clone(), "/articles/corolla-hybrid-vs-civic-hybrid").await;
    assert_eq!(status, StatusCode::NOT_FOUND, "draft must stay hidden");

    let (status, body) = get_json(
        app.clone(),
        &format!("/api/publish/{}", fixtures::REVIEW_JOB_ID),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["id"], json!(fixtures::REVIEW_JOB_ID));

    let (_, job) = get_json(
        app.clone(),
        &format!("/api/jobs/{}", fixtures::REVIEW_JOB_ID),
    )
    .await;
    assert_eq!(job["status"], json!("published"));

    let (status, html) = get_html(app, "/articles/corolla-hybrid-vs-civic-hybrid").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("2026 Toyota Corolla Hybrid vs Honda Civic Hybrid"));
}

#[tokio::test]
async fn republishing_a_live_job_conflicts() {
    let (status, body) = get_json(
        app(),
        &format!("/api/publish/{}", fixtures::PUBLISHED_JOB_ID),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], json!("already_published"));
}

#[tokio::test]
async fn roadmap_stage_can_move() {
    let app = app();

    let (status, body) = send_json(
        app.clone(),
        Method::PATCH,
        &format!("/api/roadmap/{}", fixtures::QUEUED_JOB_ID),
        json!({"stage": "drafting"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["stage"], json!("drafting"));

    let (_, job) = get_json(app, &format!("/api/jobs/{}", fixtures::QUEUED_JOB_ID)).await;
    assert_eq!(job["stage"], json!("drafting"));
}

#[tokio::test]
async fn unknown_roadmap_stage_is_rejected() {
    let (status, body) = send_json(
        app(),
        Method::PATCH,
        &format!("/api/roadmap/{}", fixtures::QUEUED_JOB_ID),
        json!({"stage": "shipping"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("bad_request"));
    assert!(
        body["error"]["hint"]
            .as_str()
            .unwrap_or_default()
            .contains("shipping")
    );
}

#[tokio::test]
async fn roadmap_update_for_missing_job_is_not_found() {
    let (status, body) = send_json(
        app(),
        Method::PATCH,
        &format!("/api/roadmap/{}", Uuid::new_v4()),
        json!({"stage": "live"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("not_found"));
}

#[tokio::test]
async fn qc_reports_duplicates_against_the_corpus() {
    let candidate = json!({
        "slug": "kia-ev6-vs-hyundai-ioniq-5",
        "title": "Kia EV6 vs Hyundai Ioniq 5: Same Platform, Different Answers",
        "intent": "comparison",
    });

    let (status, body) = send_json(app(), Method::POST, "/api/qc", candidate).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results array");
    let by_rule = |rule: &str| {
        results
            .iter()
            .find(|result| result["rule"] == json!(rule))
            .unwrap_or_else(|| panic!("missing result for {rule}"))
    };

    let slug = by_rule("duplicate_slug");
    assert_eq!(slug["status"], json!("fail"));
    assert_eq!(slug["severity"], json!("error"));

    let title = by_rule("duplicate_title");
    assert_eq!(title["status"], json!("fail"));
    assert_eq!(title["severity"], json!("warning"));
}

#[tokio::test]
async fn qc_passes_a_clean_draft() {
    let candidate = json!({
        "slug": "bmw-i4-vs-tesla-model-3",
        "title": "BMW i4 vs Tesla Model 3",
        "intent": "comparison",
        "blocks": [
            {"type": "markdown", "md": "Both are quick; only one is quiet about it."},
            {"type": "tldr", "points": ["The i4 rides better", "The Model 3 charges faster"]},
        ],
    });

    let (status, body) = send_json(app(), Method::POST, "/api/qc", candidate).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 7);
    assert!(
        results.iter().all(|result| result["status"] == json!("pass")),
        "unexpected failures: {results:?}"
    );
}

/// Articles repo whose every call fails, standing in for a broken backend.
struct UnavailableArticles;

#[async_trait::async_trait]
impl ArticlesRepo for UnavailableArticles {
    async fn list_articles(&self) -> Result<Vec<ArticleRecord>, RepoError> {
        Err(RepoError::Persistence("article store offline".to_string()))
    }

    async fn list_published(&self) -> Result<Vec<ArticleRecord>, RepoError> {
        Err(RepoError::Persistence("article store offline".to_string()))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<ArticleRecord>, RepoError> {
        Err(RepoError::Persistence("article store offline".to_string()))
    }

    async fn update_status_by_slug(
        &self,
        _slug: &str,
        _status: ArticleStatus,
    ) -> Result<Option<ArticleRecord>, RepoError> {
        Err(RepoError::Persistence("article store offline".to_string()))
    }
}

#[tokio::test]
async fn qc_failure_keeps_internal_detail_out_of_the_response() {
    let store = Arc::new(MemoryStore::seeded());
    let jobs: Arc<dyn JobsRepo> = store;
    let articles: Arc<dyn ArticlesRepo> = Arc::new(UnavailableArticles);
    let app = app_with_repos(jobs, articles);

    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/qc",
        json!({"slug": "any", "title": "Any"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("qc_failed"));
    assert_eq!(
        body["error"]["message"],
        json!("Quality checks could not be completed")
    );
    assert!(
        body["error"].get("hint").is_none(),
        "backend detail must stay in the logs: {body}"
    );
}

#[tokio::test]
async fn qc_rejects_non_object_payloads() {
    let (status, body) = send_json(app(), Method::POST, "/api/qc", json!(["not", "an", "article"])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("bad_request"));
}

#[tokio::test]
async fn generate_returns_a_mock_draft() {
    let (status, body) = send_json(
        app(),
        Method::POST,
        "/api/generate",
        json!({"prompt": "Compare the 2026 Prius and the Camry Hybrid"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], json!("mock"));
    assert_eq!(
        body["title"],
        json!("Compare the 2026 Prius and the Camry Hybrid")
    );
    assert_eq!(
        body["slug"],
        json!("compare-the-2026-prius-and-the-camry-hybrid")
    );
    let blocks = body["blocks"].as_array().expect("blocks array");
    assert!(!blocks.is_empty());
    assert_eq!(blocks[0]["type"], json!("tldr"));
}

#[tokio::test]
async fn generate_rejects_a_blank_prompt() {
    let (status, body) = send_json(
        app(),
        Method::POST,
        "/api/generate",
        json!({"prompt": "   "}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("bad_request"));
}

#[tokio::test]
async fn created_jobs_surface_in_the_listing() {
    let store = Arc::new(MemoryStore::empty());
    let jobs: Arc<dyn JobsRepo> = store.clone();
    let created = jobs
        .create_job(CreateJobParams {
            slug: "model-y-vs-ev9".to_string(),
            title: "Tesla Model Y vs Kia EV9".to_string(),
            status: JobStatus::Queued,
            intent: JobIntent::Draft,
            stage: RoadmapStage::Backlog,
        })
        .await
        .expect("create job");

    let (status, body) = get_json(app_with_store(store), "/api/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().expect("array of jobs");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], json!(created.id));
    assert_eq!(listed[0]["status"], json!("queued"));
}

#[tokio::test]
async fn index_lists_only_published_articles() {
    let (status, html) = get_html(app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Kia EV6 vs Hyundai Ioniq 5"));
    assert!(html.contains("Compact Crossover Value Check"));
    assert!(
        !html.contains("2026 Toyota Corolla Hybrid"),
        "draft articles must not appear on the index"
    );
}

#[tokio::test]
async fn article_page_renders_every_block_kind() {
    let (status, html) = get_html(app(), "/articles/kia-ev6-vs-hyundai-ioniq-5").await;

    assert_eq!(status, StatusCode::OK);
    for marker in [
        "block-tldr",
        "block-markdown",
        "block-specs",
        "block-gallery",
        "block-cta",
    ] {
        assert!(html.contains(marker), "missing {marker} in article page");
    }
    assert!(html.contains("Battery (usable)"));
    assert!(html.contains("See current offers"));
}

#[tokio::test]
async fn unknown_article_is_not_found() {
    let (status, html) = get_html(app(), "/articles/no-such-comparison").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("not found") || html.contains("Not Found"));
}
