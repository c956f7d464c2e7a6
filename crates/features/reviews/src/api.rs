use crate::model::{Review, ReviewInput, ReviewStatus};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

macro_rules! fields {
    () => {
        "id author_name rating content status"
    };
}

pub const LIST_QUERY: &str =
    concat!("query Reviews($status: ReviewStatus) { reviews(status: $status) { ", fields!(), " } }");
pub const UPDATE_MUTATION: &str = concat!(
    "mutation UpdateReview($input: ReviewInput!) { update_review(input: $input) { ",
    fields!(),
    " } }"
);
pub const MODERATE_MUTATION: &str = concat!(
    "mutation ModerateReview($id: ID!, $status: ReviewStatus!) { ",
    "moderate_review(id: $id, status: $status) { ",
    fields!(),
    " } }"
);
pub const DELETE_MUTATION: &str = "mutation DeleteReview($id: ID!) { delete_review(id: $id) }";

/// Lists reviews, all of them or only those in `status`.
pub async fn list(
    client: &GraphqlClient,
    status: Option<ReviewStatus>,
) -> Result<Vec<Review>, ClientError> {
    client.query_field(LIST_QUERY, &json!({ "status": status }), "reviews").await
}

pub async fn update(client: &GraphqlClient, input: &ReviewInput) -> Result<Review, ClientError> {
    client.mutate_field(UPDATE_MUTATION, &json!({ "input": input }), "update_review").await
}

pub async fn moderate(
    client: &GraphqlClient,
    id: &str,
    status: ReviewStatus,
) -> Result<Review, ClientError> {
    client
        .mutate_field(MODERATE_MUTATION, &json!({ "id": id, "status": status }), "moderate_review")
        .await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_review").await
}
