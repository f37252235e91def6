//! Integration tests against a live server.
//!
//! Each test binds an ephemeral port on loopback, serves the real router on
//! it, and talks to it over HTTP.
//!
//! Run with: cargo test --test integration

use std::net::SocketAddr;

use reqwest::StatusCode;
use sample_app::api::AppState;
use sample_app::config::Config;
use sample_app::server;
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running in the background until dropped or stopped.
struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<sample_app::Result<()>>,
}

impl TestServer {
    async fn start(config: Config) -> Self {
        let listener = server::bind_addr(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(server::serve(listener, AppState::new(config), async move {
            let _ = rx.await;
        }));

        Self {
            base_url: format!("http://{}", addr),
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let result = self.handle.await.expect("server task panicked");
        assert!(result.is_ok(), "server exited with {:?}", result.err());
    }
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.expect("request");
    let status = response.status();
    let body = response.json().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn serves_all_three_endpoints() {
    let server = TestServer::start(Config::default()).await;

    let (status, health) = get_json(&server.url("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert!(!health["timestamp"].as_str().unwrap().is_empty());

    let (status, welcome) = get_json(&server.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(welcome["message"], "Hello from Tekton CI/CD Pipeline!");
    assert_eq!(welcome["environment"], "development");
    assert_eq!(welcome["podName"], "local");

    let (status, info) = get_json(&server.url("/api/info")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["service"], "sample-app");
    assert_eq!(info["buildTime"], "unknown");
    assert_eq!(info["commitHash"], "unknown");

    server.stop().await;
}

#[tokio::test]
async fn reports_pipeline_metadata() {
    let config = Config::from_vars([
        ("APP_VERSION".to_string(), "2.3.1".to_string()),
        ("BUILD_TIME".to_string(), "2026-10-16T08:00:00Z".to_string()),
        ("COMMIT_HASH".to_string(), "abc1234".to_string()),
    ])
    .unwrap();
    let server = TestServer::start(config).await;

    let (_, health) = get_json(&server.url("/health")).await;
    assert_eq!(health["version"], "2.3.1");

    let (_, info) = get_json(&server.url("/api/info")).await;
    assert_eq!(info["version"], "2.3.1");
    assert_eq!(info["buildTime"], "2026-10-16T08:00:00Z");
    assert_eq!(info["commitHash"], "abc1234");

    server.stop().await;
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::get(server.url("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.stop().await;
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let server = TestServer::start(Config::default()).await;

    let response = reqwest::Client::new()
        .get(server.url("/"))
        .header("content-type", "application/json")
        .body("{oops")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    server.stop().await;
}

#[tokio::test]
async fn oversized_chunked_json_is_too_large() {
    let server = TestServer::start(Config::default()).await;

    // Just over 100 KiB, streamed so no Content-Length is sent.
    let payload = format!("[\"{}\"]", "a".repeat(100 * 1024));
    let chunks: Vec<Result<Vec<u8>, std::io::Error>> = payload
        .into_bytes()
        .chunks(4096)
        .map(|chunk| Ok(chunk.to_vec()))
        .collect();

    let response = reqwest::Client::new()
        .get(server.url("/"))
        .header("content-type", "application/json")
        .body(reqwest::Body::wrap_stream(futures::stream::iter(chunks)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    server.stop().await;
}
