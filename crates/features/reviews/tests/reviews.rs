use axum::routing::post;
use axum::{Json, Router};
use gamma_graphql::{GraphqlClient, normalize};
use gamma_reviews::model::{Review, ReviewInput, ReviewStatus, average_rating};
use gamma_reviews::{api, descriptor};
use serde_json::{Value, json};
use tokio::net::TcpListener;

fn review(rating: u8, status: ReviewStatus) -> Review {
    Review {
        id: format!("r{rating}"),
        author_name: "Sam".into(),
        rating,
        content: "Great service".into(),
        status,
    }
}

async fn client_for(app: Router) -> GraphqlClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    GraphqlClient::builder().endpoint(format!("http://{addr}/graphql")).build()
}

#[test]
fn has_no_create_route() {
    let names: Vec<_> = descriptor().routes().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, ["reviews", "reviews-edit"]);
}

#[test]
fn stars_and_average() {
    assert_eq!(review(3, ReviewStatus::Approved).stars(), "★★★☆☆");
    assert_eq!(review(9, ReviewStatus::Approved).stars(), "★★★★★");

    let reviews = [
        review(4, ReviewStatus::Approved),
        review(2, ReviewStatus::Approved),
        review(1, ReviewStatus::Rejected),
    ];
    assert_eq!(average_rating(&reviews), Some(3.0));
    assert_eq!(average_rating(&reviews[2..]), None);
}

#[tokio::test]
async fn moderation_sends_schema_status() {
    let client = client_for(Router::new().route(
        "/graphql",
        post(|Json(body): Json<Value>| async move {
            let vars = &body["variables"];
            Json(json!({ "data": { "moderate_review": {
                "id": vars["id"],
                "author_name": "Sam",
                "rating": 5,
                "content": "Great service",
                "status": vars["status"]
            } } }))
        }),
    ))
    .await;

    let review = api::moderate(&client, "r5", ReviewStatus::Approved).await.unwrap();

    assert_eq!(review.id, "r5");
    assert_eq!(review.status, ReviewStatus::Approved);
}

#[tokio::test]
async fn empty_author_is_reported_by_label() {
    let client = client_for(Router::new().route(
        "/graphql",
        post(|| async {
            Json(json!({ "errors": [{
                "message": "Cannot return null for non-nullable field \"Review.author_name\"."
            }] }))
        }),
    ))
    .await;

    let input = ReviewInput { id: "r1".into(), author_name: String::new(), rating: 4, content: "ok".into() };
    let err = api::update(&client, &input).await.unwrap_err();

    assert_eq!(normalize(Some(&err)), "field \"Author name\" cannot be empty");
}
