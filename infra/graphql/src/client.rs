use crate::error::{ClientError, ClientErrorExt, RemoteError};
use crate::token::{MemoryTokenStore, TokenStore};
use gamma_domain::config::{DEFAULT_GRAPHQL_ENDPOINT, GraphqlConfig};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

static CLIENT: OnceLock<GraphqlClient> = OnceLock::new();

/// Returns the process-wide client, constructing it on first use.
///
/// The first call decides the configuration; later calls get the same instance no
/// matter what they pass. Without a configuration the client targets
/// [`DEFAULT_GRAPHQL_ENDPOINT`]. Construction never fails; an unreachable endpoint
/// shows up as [`ClientError::Network`] on the first request.
pub fn get_client(config: Option<&GraphqlConfig>) -> &'static GraphqlClient {
    init_client(|| config.map_or_else(GraphqlClient::builder, |cfg| GraphqlClient::builder().config(cfg)))
}

/// Like [`get_client`], but lets the first caller customise the builder
/// (token storage, timeouts). Ignored when the client already exists.
pub fn init_client(
    builder: impl FnOnce() -> GraphqlClientBuilder,
) -> &'static GraphqlClient {
    CLIENT.get_or_init(|| {
        let client = builder().build();
        info!(endpoint = %client.endpoint(), "GraphQL client initialized");
        client
    })
}

/// Transport for GraphQL queries and mutations against a single endpoint.
///
/// Every request is a JSON `POST` carrying the stored auth token as a `Bearer`
/// credential. Cookies set by the endpoint are kept and replayed.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenStore>,
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V: ?Sized> {
    query: &'a str,
    variables: &'a V,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<RemoteError>>,
}

impl GraphqlClient {
    pub fn builder() -> GraphqlClientBuilder {
        GraphqlClientBuilder::default()
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Token storage consulted before each request.
    #[must_use]
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Runs a query and decodes its `data` into `T`.
    ///
    /// # Errors
    /// * [`ClientError::Network`] when no response arrives.
    /// * [`ClientError::Status`] for non-2xx responses.
    /// * [`ClientError::Remote`] when the payload carries `errors`.
    /// * [`ClientError::Decode`] when the body does not match `T`.
    pub async fn query<V, T>(&self, document: &str, variables: &V) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(document, variables).await
    }

    /// Runs a mutation; same contract as [`GraphqlClient::query`].
    pub async fn mutate<V, T>(&self, document: &str, variables: &V) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(document, variables).await
    }

    /// Runs a query and decodes the top-level `field` of its `data`.
    ///
    /// # Errors
    /// As [`GraphqlClient::query`]; a missing field is [`ClientError::Internal`].
    pub async fn query_field<V, T>(
        &self,
        document: &str,
        variables: &V,
        field: &str,
    ) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut data: Map<String, Value> = self.execute(document, variables).await?;
        let value = data
            .remove(field)
            .ok_or_else(|| ClientError::from(format!("response data has no '{field}' field")))?;
        serde_json::from_value(value).context(format!("Decoding field '{field}'"))
    }

    /// Runs a mutation and decodes the top-level `field` of its `data`.
    pub async fn mutate_field<V, T>(
        &self,
        document: &str,
        variables: &V,
        field: &str,
    ) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.query_field(document, variables, field).await
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint, operation = operation_name(document)))]
    async fn execute<V, T>(&self, document: &str, variables: &V) -> Result<T, ClientError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = GraphqlRequest {
            query: document,
            variables,
            operation_name: operation_name(document),
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = self.tokens.load() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.context("Sending GraphQL request")?;
        let status = response.status();
        let raw = response.bytes().await.context("Reading GraphQL response")?;

        if !status.is_success() {
            let errors = serde_json::from_slice::<GraphqlResponse<Value>>(&raw)
                .ok()
                .and_then(|payload| payload.errors)
                .unwrap_or_default();
            warn!(status = status.as_u16(), remote = errors.len(), "GraphQL endpoint rejected request");
            return Err(ClientError::Status { status: status.as_u16(), errors, context: None });
        }

        // Remote errors take precedence over `data`, which may be partial or null.
        let payload: GraphqlResponse<Value> =
            serde_json::from_slice(&raw).context("Decoding GraphQL response")?;

        if let Some(errors) = payload.errors.filter(|errors| !errors.is_empty()) {
            debug!(count = errors.len(), "GraphQL response carried errors");
            return Err(ClientError::Remote { errors, context: None });
        }

        let data = payload
            .data
            .ok_or_else(|| ClientError::from("GraphQL response carried neither data nor errors"))?;
        serde_json::from_value(data).context("Decoding GraphQL data")
    }
}

/// Extracts the operation name from `query Name(...)` / `mutation Name { ... }`.
fn operation_name(document: &str) -> Option<&str> {
    let mut words = document.split_whitespace();
    let keyword = words.next()?;
    if !matches!(keyword, "query" | "mutation" | "subscription") {
        return None;
    }
    let name = words.next()?;
    let end = name.find(|c: char| !(c.is_alphanumeric() || c == '_')).unwrap_or(name.len());
    (end > 0).then(|| &name[..end])
}

/// Configures a [`GraphqlClient`]. `build` never fails.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct GraphqlClientBuilder {
    endpoint: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
}

impl GraphqlClientBuilder {
    /// Applies the server-side endpoint and timeout from `config`.
    pub fn config(mut self, config: &GraphqlConfig) -> Self {
        self.endpoint = Some(config.endpoint.clone());
        self.timeout = config.timeout_seconds.map(Duration::from_secs);
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> GraphqlClient {
        let endpoint = self
            .endpoint
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GRAPHQL_ENDPOINT.to_owned());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut http = reqwest::Client::builder().cookie_store(true).default_headers(headers);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to a default HTTP transport");
            reqwest::Client::new()
        });

        GraphqlClient {
            http,
            endpoint,
            tokens: self.tokens.unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_name_is_read_from_document() {
        assert_eq!(operation_name("query Honorifics { honorifics { value } }"), Some("Honorifics"));
        assert_eq!(operation_name("mutation SavePost($input: PostInput!) { }"), Some("SavePost"));
        assert_eq!(operation_name("query { banners { id } }"), None);
        assert_eq!(operation_name("{ banners { id } }"), None);
    }

    #[test]
    fn builder_defaults_to_literal_endpoint() {
        let client = GraphqlClient::builder().endpoint("  ").build();
        assert_eq!(client.endpoint(), DEFAULT_GRAPHQL_ENDPOINT);
        assert!(client.tokens().load().is_none());
    }
}
