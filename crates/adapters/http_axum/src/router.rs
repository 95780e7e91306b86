//! Axum router assembly.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::SiteState;

/// Build the top-level axum [`Router`].
///
/// `/health` answers liveness probes; every other path is looked up in the
/// dist directory, falling back to the index document so the client-side
/// router can resolve it. Includes a [`TraceLayer`] that logs each HTTP
/// request/response using the `tracing` ecosystem.
pub fn build(state: SiteState) -> Router {
    let site = ServeDir::new(state.dist_dir())
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(state.index_path()));

    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

/// `OK` while the index document is present, `503` otherwise.
async fn health_check(State(state): State<SiteState>) -> (StatusCode, &'static str) {
    match tokio::fs::try_exists(state.index_path()).await {
        Ok(true) => (StatusCode::OK, "OK"),
        Ok(false) => {
            tracing::warn!(index = %state.index_path().display(), "index document missing");
            (StatusCode::SERVICE_UNAVAILABLE, "index document missing")
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to check index document");
            (StatusCode::SERVICE_UNAVAILABLE, "index document unreadable")
        }
    }
}
