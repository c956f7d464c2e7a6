use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// GraphQL endpoint used when nothing is configured.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "http://api.gamma.test/graphql";
/// Storage key the auth token is persisted under.
pub const AUTH_TOKEN_KEY: &str = "gamma_auth_token";

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub graphql: GraphqlConfig,
    pub storage: StorageConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener of the host application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

/// Where the data client talks to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphqlConfig {
    /// Primary endpoint, used by server-side callers.
    pub endpoint: String,
    /// Override handed to browser-side callers.
    pub browser_endpoint: Option<String>,
    /// Streaming (subscription) endpoint, published but not used by the core.
    pub subscription_endpoint: Option<String>,
    /// Key the auth token is persisted under.
    pub token_key: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_seconds: Option<u64>,
}

/// Which side of the application asks for an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Server,
    Browser,
}

impl GraphqlConfig {
    /// Resolves the endpoint for `side`; browsers prefer their override when present.
    #[must_use]
    pub fn endpoint_for(&self, side: Side) -> &str {
        match (side, self.browser_endpoint.as_deref()) {
            (Side::Browser, Some(url)) if !url.trim().is_empty() => url,
            _ => &self.endpoint,
        }
    }
}

/// Filesystem locations for persisted client state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Subscriber settings applied by the host binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace` .. `error`).
    pub level: String,
    /// Per-target directives, e.g. `gamma_kernel=debug`. Replaces `RUST_LOG` when set.
    pub directives: Option<String>,
    /// Directory for rolling log files; console only when absent.
    pub dir: Option<PathBuf>,
    /// Write log files as JSON lines.
    pub json: bool,
}

/// Module registry behaviour.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub merge_policy: MergePolicy,
}

/// How the registry resolves two routes with the same name or path shape.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Any collision is a configuration error.
    #[default]
    Strict,
    /// The first registered route is kept.
    FirstWins,
    /// The last registered route is kept.
    LastWins,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 3080 }
    }
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            browser_endpoint: None,
            subscription_endpoint: None,
            token_key: AUTH_TOKEN_KEY.to_owned(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directives: None, dir: None, json: false }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".gamma") }
    }
}
