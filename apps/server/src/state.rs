use gamma::domain::config::AppConfig;
use gamma::domain::manifest::Manifest;
use gamma::graphql::GraphqlClient;
use gamma::stores::honorifics::HonorificsStore;
use std::ops::Deref;
use std::sync::Arc;

/// Everything request handlers read; cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    pub manifest: Manifest,
    pub client: &'static GraphqlClient,
    pub honorifics: &'static HonorificsStore,
}

impl AppState {
    #[must_use]
    pub fn new(inner: AppStateInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
