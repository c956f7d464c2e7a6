use crate::state::AppState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use gamma::domain::manifest::Manifest;
use gamma::kernel::store::{FetchOutcome, StoreState};
use gamma::stores::honorifics::Honorific;
use serde::Serialize;
use std::sync::LazyLock;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::debug;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
    domains: usize,
}

pub(crate) fn init(state: AppState) -> Router {
    LazyLock::force(&START_TIME);

    Router::new()
        .route("/health", get(health))
        .route("/api/manifest", get(manifest))
        .route("/api/honorifics", get(honorifics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: START_TIME.elapsed().as_secs(),
        domains: state.manifest.domains.len(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}

async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.clone())
}

/// Current honorifics; an empty store is refreshed first.
async fn honorifics(State(state): State<AppState>) -> Json<StoreState<Honorific>> {
    let store = state.honorifics;
    if store.with_data(<[Honorific]>::is_empty) && !store.is_loading() {
        let outcome: FetchOutcome = store.fetch(&()).await;
        debug!(?outcome, "Honorifics refreshed on demand");
    }
    Json(store.state())
}
