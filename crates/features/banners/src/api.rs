//! GraphQL operations on banners.

use crate::model::{Banner, BannerInput};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

macro_rules! fields {
    () => {
        "id title image_url link_url position active"
    };
}

pub const LIST_QUERY: &str = concat!("query Banners { banners { ", fields!(), " } }");
pub const GET_QUERY: &str = concat!("query Banner($id: ID!) { banner(id: $id) { ", fields!(), " } }");
pub const SAVE_MUTATION: &str = concat!(
    "mutation SaveBanner($input: BannerInput!) { save_banner(input: $input) { ",
    fields!(),
    " } }"
);
pub const DELETE_MUTATION: &str = "mutation DeleteBanner($id: ID!) { delete_banner(id: $id) }";

pub async fn list(client: &GraphqlClient) -> Result<Vec<Banner>, ClientError> {
    client.query_field(LIST_QUERY, &json!({}), "banners").await
}

pub async fn get(client: &GraphqlClient, id: &str) -> Result<Option<Banner>, ClientError> {
    client.query_field(GET_QUERY, &json!({ "id": id }), "banner").await
}

/// Creates or updates a banner, depending on whether `input.id` is set.
pub async fn save(client: &GraphqlClient, input: &BannerInput) -> Result<Banner, ClientError> {
    client.mutate_field(SAVE_MUTATION, &json!({ "input": input }), "save_banner").await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_banner").await
}
