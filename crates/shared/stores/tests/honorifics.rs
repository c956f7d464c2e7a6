use axum::routing::post;
use axum::{Json, Router};
use gamma_graphql::GraphqlClient;
use gamma_kernel::store::FetchOutcome;
use gamma_stores::honorifics::{GraphqlHonorifics, Honorific, HonorificsStore, fallback};
use serde_json::json;
use tokio::net::TcpListener;

async fn endpoint(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/graphql")
}

fn store_for(endpoint: String) -> HonorificsStore {
    HonorificsStore::new(GraphqlHonorifics::new(GraphqlClient::builder().endpoint(endpoint).build()))
}

#[tokio::test]
async fn loads_remote_titles() {
    let app = Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({ "data": { "honorifics": [
                { "value": "MR", "label": "Mister" },
                { "value": "SIR", "label": "Sir" }
            ] } }))
        }),
    );
    let store = store_for(endpoint(app).await);

    assert_eq!(store.fetch(&()).await, FetchOutcome::Loaded);

    assert_eq!(store.find_by_value("MR"), Some(Honorific::new("MR", "Mister")));
    assert_eq!(store.label_for("SIR"), "Sir");
    assert!(store.error().is_none());
}

#[tokio::test]
async fn unreachable_endpoint_degrades_to_fallback() {
    let store = store_for("http://127.0.0.1:1/graphql".to_owned());

    assert_eq!(store.fetch(&()).await, FetchOutcome::Fallback);

    let state = store.state();
    assert!(!state.loading);
    assert_eq!(state.data, fallback());
    assert!(state.error.as_deref().is_some_and(|e| e.starts_with("network error: ")));
    assert_eq!(store.find_by_value("MR"), Some(Honorific::new("MR", "Mr.")));
    assert_eq!(store.label_for("PROF"), "Prof.");
}

#[tokio::test]
async fn null_titles_with_errors_show_normalized_message() {
    let app = Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({
                "data": { "honorifics": null },
                "errors": [{
                    "message": "Internal server error",
                    "extensions": {
                        "debugMessage": "Cannot return null for non-nullable field \"Honorific.label\"."
                    }
                }]
            }))
        }),
    );
    let store = store_for(endpoint(app).await);

    assert_eq!(store.fetch(&()).await, FetchOutcome::Fallback);

    assert_eq!(store.error().as_deref(), Some("field \"label\" cannot be empty"));
    assert_eq!(store.data(), fallback());
}

#[tokio::test]
async fn unknown_value_is_its_own_label() {
    let store = store_for("http://127.0.0.1:1/graphql".to_owned());

    assert_eq!(store.find_by_value("MR"), None, "nothing is loaded yet");
    assert_eq!(store.label_for("MR"), "MR");

    store.fetch(&()).await;
    assert_eq!(store.find_by_value("REV"), None);
    assert_eq!(store.label_for("REV"), "REV");
}

#[tokio::test]
async fn clear_cache_forgets_titles() {
    let store = store_for("http://127.0.0.1:1/graphql".to_owned());
    store.fetch(&()).await;

    store.clear_cache();

    assert!(store.data().is_empty());
    assert!(store.error().is_none());
    assert_eq!(store.label_for("DR"), "DR");
}
