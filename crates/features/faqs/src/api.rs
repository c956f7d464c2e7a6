use crate::model::{Faq, FaqInput};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

pub const LIST_QUERY: &str = "query Faqs { faqs { id question answer position } }";
pub const SAVE_MUTATION: &str = "mutation SaveFaq($input: FaqInput!) { \
     save_faq(input: $input) { id question answer position } }";
pub const REORDER_MUTATION: &str = "mutation ReorderFaqs($ids: [ID!]!) { reorder_faqs(ids: $ids) }";
pub const DELETE_MUTATION: &str = "mutation DeleteFaq($id: ID!) { delete_faq(id: $id) }";

pub async fn list(client: &GraphqlClient) -> Result<Vec<Faq>, ClientError> {
    client.query_field(LIST_QUERY, &json!({}), "faqs").await
}

pub async fn save(client: &GraphqlClient, input: &FaqInput) -> Result<Faq, ClientError> {
    client.mutate_field(SAVE_MUTATION, &json!({ "input": input }), "save_faq").await
}

/// Stores a new display order; `ids` lists every FAQ, first to last.
pub async fn reorder(client: &GraphqlClient, ids: &[&str]) -> Result<bool, ClientError> {
    client.mutate_field(REORDER_MUTATION, &json!({ "ids": ids }), "reorder_faqs").await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_faq").await
}
