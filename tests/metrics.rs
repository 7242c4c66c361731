//! Metric emission coverage via the debugging recorder.

use std::collections::HashSet;
use std::sync::Arc;

use metrics_util::debugging::DebuggingRecorder;
use serde_json::json;

use cambio::application::generate::{GenerateRequest, GenerationService};
use cambio::application::qc::QcService;
use cambio::application::repos::ArticlesRepo;
use cambio::infra::generate::MockProvider;
use cambio::infra::store::MemoryStore;

#[tokio::test]
async fn qc_and_generation_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let store: Arc<MemoryStore> = Arc::new(MemoryStore::seeded());
    let articles: Arc<dyn ArticlesRepo> = store;

    // A colliding slug guarantees at least one rule failure.
    let qc = QcService::new(articles.clone());
    let candidate = json!({
        "slug": "kia-ev6-vs-hyundai-ioniq-5",
        "title": "Duplicate on purpose",
    });
    let candidate = candidate.as_object().expect("object candidate");
    let outcomes = qc.review(candidate).await.expect("qc review");
    assert!(outcomes.iter().any(|outcome| outcome.failed()));

    let generation = GenerationService::new(Arc::new(MockProvider), articles, "mock");
    let request = GenerateRequest {
        prompt: "Compare the Outback and the CX-50".to_string(),
        model: None,
        system: None,
        temperature: None,
    };
    generation.generate(&request).await.expect("mock draft");

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(composite_key, _, _, _)| composite_key.key().name().to_string())
        .collect();

    for metric in [
        "cambio_qc_runs_total",
        "cambio_qc_rule_failures_total",
        "cambio_generate_requests_total",
    ] {
        assert!(names.contains(metric), "missing metric: {metric}");
    }
}
