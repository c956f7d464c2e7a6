use crate::model::{Post, PostInput};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

macro_rules! fields {
    () => {
        "id title slug body author_name published_at"
    };
}

pub const LIST_QUERY: &str = concat!("query Posts($drafts: Boolean) { posts(drafts: $drafts) { ", fields!(), " } }");
pub const GET_QUERY: &str = concat!("query Post($id: ID!) { post(id: $id) { ", fields!(), " } }");
pub const SAVE_MUTATION: &str =
    concat!("mutation SavePost($input: PostInput!) { save_post(input: $input) { ", fields!(), " } }");
pub const PUBLISH_MUTATION: &str =
    concat!("mutation PublishPost($id: ID!) { publish_post(id: $id) { ", fields!(), " } }");
pub const DELETE_MUTATION: &str = "mutation DeletePost($id: ID!) { delete_post(id: $id) }";

/// Lists posts; drafts are included when `drafts` is set.
pub async fn list(client: &GraphqlClient, drafts: bool) -> Result<Vec<Post>, ClientError> {
    client.query_field(LIST_QUERY, &json!({ "drafts": drafts }), "posts").await
}

pub async fn get(client: &GraphqlClient, id: &str) -> Result<Option<Post>, ClientError> {
    client.query_field(GET_QUERY, &json!({ "id": id }), "post").await
}

pub async fn save(client: &GraphqlClient, input: &PostInput) -> Result<Post, ClientError> {
    client.mutate_field(SAVE_MUTATION, &json!({ "input": input }), "save_post").await
}

pub async fn publish(client: &GraphqlClient, id: &str) -> Result<Post, ClientError> {
    client.mutate_field(PUBLISH_MUTATION, &json!({ "id": id }), "publish_post").await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_post").await
}
