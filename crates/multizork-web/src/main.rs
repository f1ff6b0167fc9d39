//! Multizork transcript viewer entry point.

use std::sync::Arc;

use multizork_store::sqlite_store::SqliteTranscriptStore;
use multizork_web::config::Config;
use multizork_web::error::AppError;
use multizork_web::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting multizork transcript viewer");

    let config = Config::from_env()?;

    // The pool connects lazily; an unreadable database only fails requests.
    let store =
        SqliteTranscriptStore::connect_read_only(&config.database_url, config.acquire_timeout)?;

    let app_state = AppState::new(Arc::new(store), config.site.clone());
    let app = multizork_web::app(app_state);

    let addr = config.bind_addr()?;
    tracing::info!(
        base_path = %config.site.base_path,
        "Listening on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
