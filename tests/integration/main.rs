//! End-to-end tests against a real listener on an ephemeral port.

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use whatsapp_api_middleware::api::create_router;
use whatsapp_api_middleware::config::Config;
use whatsapp_api_middleware::server;

struct TestServer {
    base_url: String,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<whatsapp_api_middleware::Result<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server::serve(listener, create_router(), async move {
            let _ = rx.await;
        }));

        Self {
            base_url,
            shutdown,
            handle,
        }
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn serves_root_and_health() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let root = client.get(format!("{}/", server.base_url)).send().await.unwrap();
    assert_eq!(root.status(), StatusCode::OK);
    let body: Value = root.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "message": "Hello World from WhatsApp API Middleware!",
            "status": "running",
            "version": "0.1.1"
        })
    );

    let health = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(
        health.text().await.unwrap(),
        r#"{"status":"healthy","service":"whatsapp-api-middleware"}"#
    );

    server.stop().await;
}

#[tokio::test]
async fn unknown_route_is_404() {
    let server = TestServer::start().await;

    let response = reqwest::get(format!("{}/unknown", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Not Found" }));

    server.stop().await;
}

#[tokio::test]
async fn concurrent_requests_get_identical_bodies() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let url = format!("{}/health", server.base_url);

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = url.clone();
        tokio::spawn(async move { client.get(url).send().await?.bytes().await })
    });

    let mut bodies = Vec::new();
    for request in requests {
        bodies.push(request.await.unwrap().unwrap());
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));

    server.stop().await;
}

#[tokio::test]
async fn bind_rejects_invalid_host() {
    let config = Config {
        host: "not-an-ip".to_string(),
        ..Config::default()
    };

    let err = server::bind(&config).await.unwrap_err();
    assert!(err.to_string().starts_with("invalid configuration"));
}
