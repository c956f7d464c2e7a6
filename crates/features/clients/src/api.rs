use crate::model::{Client, ClientInput};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

macro_rules! fields {
    () => {
        "id honorific first_name last_name company_name email phone"
    };
}

pub const LIST_QUERY: &str =
    concat!("query Clients($search: String) { clients(search: $search) { ", fields!(), " } }");
pub const GET_QUERY: &str = concat!("query Client($id: ID!) { client(id: $id) { ", fields!(), " } }");
pub const SAVE_MUTATION: &str =
    concat!("mutation SaveClient($input: ClientInput!) { save_client(input: $input) { ", fields!(), " } }");
pub const DELETE_MUTATION: &str = "mutation DeleteClient($id: ID!) { delete_client(id: $id) }";

/// Lists clients, optionally filtered by a free-text search.
pub async fn list(client: &GraphqlClient, search: Option<&str>) -> Result<Vec<Client>, ClientError> {
    client.query_field(LIST_QUERY, &json!({ "search": search }), "clients").await
}

pub async fn get(client: &GraphqlClient, id: &str) -> Result<Option<Client>, ClientError> {
    client.query_field(GET_QUERY, &json!({ "id": id }), "client").await
}

pub async fn save(client: &GraphqlClient, input: &ClientInput) -> Result<Client, ClientError> {
    client.mutate_field(SAVE_MUTATION, &json!({ "input": input }), "save_client").await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_client").await
}
