use crate::model::{Application, Job, JobInput};
use gamma_graphql::{ClientError, GraphqlClient};
use serde_json::json;

macro_rules! job_fields {
    () => {
        "id job_title location employment_type description published"
    };
}

pub const LIST_QUERY: &str = concat!("query Jobs { jobs { ", job_fields!(), " } }");
pub const GET_QUERY: &str = concat!("query Job($id: ID!) { job(id: $id) { ", job_fields!(), " } }");
pub const SAVE_MUTATION: &str =
    concat!("mutation SaveJob($input: JobInput!) { save_job(input: $input) { ", job_fields!(), " } }");
pub const DELETE_MUTATION: &str = "mutation DeleteJob($id: ID!) { delete_job(id: $id) }";
pub const APPLICATIONS_QUERY: &str = "query Applications($job_id: ID!) { \
     applications(job_id: $job_id) { id job_id first_name last_name email resume_url submitted_at } }";

pub async fn list(client: &GraphqlClient) -> Result<Vec<Job>, ClientError> {
    client.query_field(LIST_QUERY, &json!({}), "jobs").await
}

pub async fn get(client: &GraphqlClient, id: &str) -> Result<Option<Job>, ClientError> {
    client.query_field(GET_QUERY, &json!({ "id": id }), "job").await
}

pub async fn save(client: &GraphqlClient, input: &JobInput) -> Result<Job, ClientError> {
    client.mutate_field(SAVE_MUTATION, &json!({ "input": input }), "save_job").await
}

pub async fn delete(client: &GraphqlClient, id: &str) -> Result<bool, ClientError> {
    client.mutate_field(DELETE_MUTATION, &json!({ "id": id }), "delete_job").await
}

/// Applications received for one opening, newest first as the server orders them.
pub async fn applications(
    client: &GraphqlClient,
    job_id: &str,
) -> Result<Vec<Application>, ClientError> {
    client.query_field(APPLICATIONS_QUERY, &json!({ "job_id": job_id }), "applications").await
}
