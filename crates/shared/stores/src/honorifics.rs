//! Honorific titles (Mr., Dr., ...) offered by every person form.
//!
//! Titles come from the GraphQL endpoint; when it cannot be reached the store serves
//! a built-in list so forms keep working.

use async_trait::async_trait;
use gamma_graphql::{ClientError, GraphqlClient, get_client};
use gamma_kernel::store::{ResilientStore, Source};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::ops::Deref;
use std::sync::OnceLock;

pub const HONORIFICS_QUERY: &str = "query Honorifics { honorifics { value label } }";

/// Titles served when the endpoint is unavailable, as `(value, label)`.
pub const FALLBACK_HONORIFICS: &[(&str, &str)] = &[
    ("MR", "Mr."),
    ("MRS", "Mrs."),
    ("MS", "Ms."),
    ("MISS", "Miss"),
    ("DR", "Dr."),
    ("PROF", "Prof."),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Honorific {
    pub value: String,
    pub label: String,
}

impl Honorific {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// The built-in titles, in display order.
#[must_use]
pub fn fallback() -> Vec<Honorific> {
    FALLBACK_HONORIFICS.iter().map(|(value, label)| Honorific::new(*value, *label)).collect()
}

#[derive(Deserialize)]
struct HonorificsData {
    honorifics: Vec<Honorific>,
}

/// Reads titles through a [`GraphqlClient`].
#[derive(Debug, Clone)]
pub struct GraphqlHonorifics {
    client: GraphqlClient,
}

impl GraphqlHonorifics {
    pub const fn new(client: GraphqlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for GraphqlHonorifics {
    type Item = Honorific;
    type Params = ();

    fn name(&self) -> &'static str {
        "honorifics"
    }

    async fn fetch(&self, _params: &()) -> Result<Vec<Honorific>, ClientError> {
        let data: HonorificsData = self.client.query(HONORIFICS_QUERY, &json!({})).await?;
        Ok(data.honorifics)
    }

    fn fallback(&self) -> Vec<Honorific> {
        fallback()
    }
}

/// Honorifics store with lookup helpers; every [`ResilientStore`] method is
/// available through `Deref`.
#[derive(Debug)]
pub struct HonorificsStore<S: Source<Item = Honorific> = GraphqlHonorifics> {
    inner: ResilientStore<S>,
}

impl<S: Source<Item = Honorific>> HonorificsStore<S> {
    pub fn new(source: S) -> Self {
        Self { inner: ResilientStore::new(source) }
    }

    /// The loaded title whose value is `value`, if any.
    #[must_use]
    pub fn find_by_value(&self, value: &str) -> Option<Honorific> {
        self.inner.with_data(|titles| titles.iter().find(|h| h.value == value).cloned())
    }

    /// Display label for `value`; an unknown value is returned unchanged.
    #[must_use]
    pub fn label_for(&self, value: &str) -> String {
        self.find_by_value(value).map_or_else(|| value.to_owned(), |h| h.label)
    }
}

impl<S: Source<Item = Honorific>> Deref for HonorificsStore<S> {
    type Target = ResilientStore<S>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

static GLOBAL: OnceLock<HonorificsStore> = OnceLock::new();

/// The process-wide honorifics store, backed by the shared GraphQL client.
///
/// Configure the client with [`gamma_graphql::get_client`] before the first call, or
/// the store talks to the default endpoint.
pub fn global() -> &'static HonorificsStore {
    GLOBAL.get_or_init(|| HonorificsStore::new(GraphqlHonorifics::new(get_client(None).clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_lists_six_titles_in_order() {
        let values: Vec<_> = fallback().into_iter().map(|h| h.value).collect();
        assert_eq!(values, ["MR", "MRS", "MS", "MISS", "DR", "PROF"]);
    }

    #[test]
    fn payload_shape_matches_query() {
        let data: HonorificsData =
            serde_json::from_str(r#"{"honorifics":[{"value":"DR","label":"Dr."}]}"#).unwrap();
        assert_eq!(data.honorifics, [Honorific::new("DR", "Dr.")]);
    }
}
