//! OpenAI client behavior exercised against a local stub server.

use std::net::SocketAddr;

use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::{Value, json};

use cambio::application::generate::{GenerateError, GenerateRequest, GenerationProvider};
use cambio::config::GenerationSettings;
use cambio::domain::blocks::ContentBlock;
use cambio::infra::generate::OpenAiProvider;

/// Bind an ephemeral stub that answers every completion call with the given
/// status and body.
async fn serve_stub(status: StatusCode, body: Value) -> SocketAddr {
    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}

fn provider_for(addr: SocketAddr) -> OpenAiProvider {
    let settings = GenerationSettings {
        api_key: Some("sk-test".to_string()),
        mock: false,
        base_url: format!("http://{addr}"),
        model: "gpt-4o-mini".to_string(),
    };
    OpenAiProvider::new(&settings).expect("build provider")
}

fn request(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        prompt: prompt.to_string(),
        model: None,
        system: None,
        temperature: None,
    }
}

#[tokio::test]
async fn successful_completion_becomes_a_markdown_block() {
    let addr = serve_stub(
        StatusCode::OK,
        json!({
            "model": "gpt-4o-mini-2026-01",
            "choices": [
                {"message": {"role": "assistant", "content": "## Verdict\n\nThe EV6, narrowly."}}
            ],
        }),
    )
    .await;

    let completion = provider_for(addr)
        .complete(&request("EV6 vs Ioniq 5"))
        .await
        .expect("completion");

    assert_eq!(completion.model, "gpt-4o-mini-2026-01");
    assert_eq!(completion.blocks.len(), 1);
    assert!(matches!(
        &completion.blocks[0],
        ContentBlock::Markdown { md } if md.contains("The EV6, narrowly.")
    ));
}

#[tokio::test]
async fn error_object_message_is_surfaced() {
    let addr = serve_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "model overloaded", "type": "server_error"}}),
    )
    .await;

    let err = provider_for(addr)
        .complete(&request("anything"))
        .await
        .expect_err("provider error");

    assert!(matches!(err, GenerateError::Provider(ref message) if message == "model overloaded"));
}

#[tokio::test]
async fn error_string_message_is_surfaced() {
    let addr = serve_stub(StatusCode::BAD_REQUEST, json!({"error": "bad prompt"})).await;

    let err = provider_for(addr)
        .complete(&request("anything"))
        .await
        .expect_err("provider error");

    assert!(matches!(err, GenerateError::Provider(ref message) if message == "bad prompt"));
}

#[tokio::test]
async fn unreadable_error_body_falls_back_to_the_status() {
    let addr = serve_stub(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;

    let err = provider_for(addr)
        .complete(&request("anything"))
        .await
        .expect_err("provider error");

    assert!(
        matches!(err, GenerateError::Provider(ref message) if message == "Request failed with 500")
    );
}

#[tokio::test]
async fn empty_completion_content_is_rejected() {
    let addr = serve_stub(
        StatusCode::OK,
        json!({
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "   "}}],
        }),
    )
    .await;

    let err = provider_for(addr)
        .complete(&request("anything"))
        .await
        .expect_err("empty content");

    assert!(matches!(err, GenerateError::Provider(ref message) if message.contains("no content")));
}

#[tokio::test]
async fn missing_api_key_reports_not_configured() {
    let settings = GenerationSettings {
        api_key: None,
        mock: false,
        base_url: "http://127.0.0.1:9".to_string(),
        model: "gpt-4o-mini".to_string(),
    };
    let provider = OpenAiProvider::new(&settings).expect("build provider");

    let err = provider
        .complete(&request("anything"))
        .await
        .expect_err("unconfigured");

    assert!(matches!(err, GenerateError::NotConfigured(_)));
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    // Bind then drop a listener so the port is closed when the client dials.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);

    let err = provider_for(addr)
        .complete(&request("anything"))
        .await
        .expect_err("transport error");

    assert!(matches!(err, GenerateError::Transport(_)));
}
