use std::convert::Infallible;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::Response;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tvilling::application::ports::{Embedder, EmbedderError};
use tvilling::infrastructure::llm::OpenAiEmbedder;

struct MockServer {
    base_url: String,
    requests: mpsc::UnboundedReceiver<serde_json::Value>,
    shutdown: tokio::sync::oneshot::Sender<()>,
}

async fn start_mock_embeddings_server(status: u16, response_body: &'static str) -> MockServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://127.0.0.1:{}/v1", addr.port());

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let (request_tx, request_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let route = axum::routing::post(move |body: Bytes| {
            let request_tx = request_tx.clone();
            async move {
                if let Ok(json) = serde_json::from_slice::<serde_json::Value>(&body) {
                    let _ = request_tx.send(json);
                }
                Ok::<_, Infallible>(
                    Response::builder()
                        .status(status)
                        .header("Content-Type", "application/json")
                        .body(Body::from(response_body))
                        .unwrap(),
                )
            }
        });

        let app = Router::new().route("/v1/embeddings", route);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    MockServer {
        base_url,
        requests: request_rx,
        shutdown: shutdown_tx,
    }
}

#[tokio::test]
async fn given_batch_when_server_answers_then_returns_embeddings_in_index_order() {
    let response_body = r#"{
        "data": [
            {"index": 1, "embedding": [0.0, 1.0]},
            {"index": 0, "embedding": [1.0, 0.0]}
        ]
    }"#;
    let mut server = start_mock_embeddings_server(200, response_body).await;
    let embedder = OpenAiEmbedder::new(
        &server.base_url,
        "test-key".to_string(),
        "text-embedding-3-small".to_string(),
    );

    let result = embedder.embed_batch(&["first", "second"]).await.unwrap();

    assert_eq!(result[0].values, vec![1.0, 0.0]);
    assert_eq!(result[1].values, vec![0.0, 1.0]);

    let request = server.requests.recv().await.unwrap();
    assert_eq!(request["model"], "text-embedding-3-small");
    assert_eq!(request["input"], serde_json::json!(["first", "second"]));

    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_single_text_when_embedding_then_returns_first_vector() {
    let response_body = r#"{"data": [{"index": 0, "embedding": [0.5, 0.5, 0.0]}]}"#;
    let server = start_mock_embeddings_server(200, response_body).await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let embedding = embedder.embed("hello").await.unwrap();

    assert_eq!(embedding.dimensions(), 3);
    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_empty_batch_when_embedding_then_no_request_sent() {
    let mut server = start_mock_embeddings_server(200, r#"{"data": []}"#).await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let result = embedder.embed_batch(&[]).await.unwrap();

    assert!(result.is_empty());
    assert!(server.requests.try_recv().is_err());
    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_too_many_requests_status_when_embedding_then_rate_limited() {
    let server = start_mock_embeddings_server(429, r#"{"error": "slow down"}"#).await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let result = embedder.embed("hello").await;

    assert!(
        matches!(result, Err(EmbedderError::RateLimited)),
        "expected RateLimited but got: {:?}",
        result.map(|e| e.values)
    );
    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_server_error_when_embedding_then_api_request_failed() {
    let server = start_mock_embeddings_server(500, r#"{"error": "boom"}"#).await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let result = embedder.embed("hello").await;

    match result {
        Err(EmbedderError::ApiRequestFailed(message)) => assert!(message.contains("500")),
        other => panic!("expected ApiRequestFailed, got {:?}", other.map(|e| e.values)),
    }
    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_wrong_embedding_count_when_embedding_then_invalid_response() {
    let response_body = r#"{"data": [{"index": 0, "embedding": [1.0]}]}"#;
    let server = start_mock_embeddings_server(200, response_body).await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let result = embedder.embed_batch(&["a", "b"]).await;

    assert!(matches!(result, Err(EmbedderError::InvalidResponse(_))));
    let _ = server.shutdown.send(());
}

#[tokio::test]
async fn given_unparseable_body_when_embedding_then_invalid_response() {
    let server = start_mock_embeddings_server(200, "not json").await;
    let embedder = OpenAiEmbedder::new(&server.base_url, "k".to_string(), "m".to_string());

    let result = embedder.embed("a").await;

    assert!(matches!(result, Err(EmbedderError::InvalidResponse(_))));
    let _ = server.shutdown.send(());
}
