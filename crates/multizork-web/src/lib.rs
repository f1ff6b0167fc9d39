//! Multizork — HTTP front end for recorded game transcripts.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router.
pub fn app(app_state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .fallback(routes::pages::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
