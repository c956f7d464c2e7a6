use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::Router;
use gamma::domain::config::AppConfig;
use gamma::graphql::GraphqlClient;
use gamma::stores::honorifics::{GraphqlHonorifics, HonorificsStore};
use gamma_server::Server;
use serde_json::Value;
use tower::ServiceExt;

fn offline_honorifics() -> &'static HonorificsStore {
    let client = GraphqlClient::builder().endpoint("http://127.0.0.1:1/graphql").build();
    Box::leak(Box::new(HonorificsStore::new(GraphqlHonorifics::new(client))))
}

fn app(data_dir: &std::path::Path) -> Router {
    let mut cfg = AppConfig::default();
    cfg.storage.data_dir = data_dir.to_path_buf();

    Server::builder()
        .config(cfg)
        .honorifics(offline_honorifics())
        .build()
        .unwrap()
        .router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_version_and_domain_count() {
    let dir = tempfile::tempdir().unwrap();
    let (status, headers, body) = get(app(dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["domains"], gamma::features::ENABLED.len());
    assert_eq!(headers[header::CACHE_CONTROL], "no-store, no-cache, must-revalidate");
}

#[tokio::test]
async fn manifest_lists_enabled_domains_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, body) = get(app(dir.path()), "/api/manifest").await;

    assert_eq!(status, StatusCode::OK);
    let domains: Vec<&str> =
        body["domains"].as_array().unwrap().iter().map(|d| d.as_str().unwrap()).collect();
    assert_eq!(domains, gamma::features::ENABLED);
    assert!(!body["routes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn honorifics_fall_back_when_endpoint_is_down() {
    let dir = tempfile::tempdir().unwrap();
    let (status, _, body) = get(app(dir.path()), "/api/honorifics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loading"], false);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    assert_eq!(body["data"][0]["value"], "MR");
    assert!(body["error"].as_str().unwrap().to_lowercase().contains("network"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(dir.path())
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
