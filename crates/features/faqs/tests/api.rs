use axum::routing::post;
use axum::{Json, Router};
use gamma_faqs::api;
use gamma_faqs::model::FaqInput;
use gamma_graphql::{GraphqlClient, normalize};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn client_for(app: Router) -> GraphqlClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    GraphqlClient::builder().endpoint(format!("http://{addr}/graphql")).build()
}

#[tokio::test]
async fn empty_answer_is_reported_with_its_label() {
    let client = client_for(Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({
                "data": { "save_faq": null },
                "errors": [{
                    "message": "Internal server error",
                    "extensions": {
                        "debugMessage": "Cannot return null for non-nullable field \"Faq.answer\"."
                    }
                }]
            }))
        }),
    ))
    .await;

    let input = FaqInput { question: "Opening hours?".into(), ..FaqInput::default() };
    let err = api::save(&client, &input).await.unwrap_err();

    assert_eq!(normalize(Some(&err)), "field \"Answer\" cannot be empty");
}

#[tokio::test]
async fn reorder_sends_ids_in_order() {
    let client = client_for(Router::new().route(
        "/graphql",
        post(|Json(body): Json<Value>| async move {
            Json(json!({ "data": { "reorder_faqs": body["variables"]["ids"] == json!(["b", "a"]) } }))
        }),
    ))
    .await;

    assert!(api::reorder(&client, &["b", "a"]).await.unwrap());
}

#[tokio::test]
async fn missing_field_is_an_internal_error() {
    let client = client_for(Router::new().route(
        "/graphql",
        post(|| async { Json(json!({ "data": { "questions": [] } })) }),
    ))
    .await;

    let err = api::list(&client).await.unwrap_err();
    assert_eq!(
        normalize(Some(&err)),
        "Internal client error: response data has no 'faqs' field"
    );
}
