use crate::descriptor::{DirectorySpec, RouteSpec};
use serde::{Deserialize, Serialize};

/// The merged result of every registered domain, as handed to the router, the
/// component resolver and the browser client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Domain names in registration order.
    pub domains: Vec<String>,
    pub routes: Vec<RouteSpec>,
    pub components: Vec<DirectorySpec>,
    pub imports: Vec<DirectorySpec>,
    pub graphql: Endpoints,
}

/// Endpoints published to browser-side consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<String>,
}

impl Manifest {
    /// Looks up a route by name.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&RouteSpec> {
        self.routes.iter().find(|route| route.name == name)
    }
}
