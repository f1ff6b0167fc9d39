//! Process configuration, read from the environment at startup.

use std::net::SocketAddr;
use std::time::Duration;

use multizork_transcripts::render::SiteConfig;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite:multizork.sqlite3";
const DEFAULT_TITLE: &str = "multizork";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection string; always opened read-only.
    pub database_url: String,
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Upper bound on acquiring a connection for one request.
    pub acquire_timeout: Duration,
    /// Base path and title used by every page.
    pub site: SiteConfig,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// Variables: `DATABASE_URL`, `HOST`, `PORT`, `BASE_PATH`, `SITE_TITLE`,
    /// `DB_ACQUIRE_TIMEOUT_SECS`. All are optional.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its
    /// value if set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let acquire_secs: u64 = lookup("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|e| {
                AppError::Config(format!("DB_ACQUIRE_TIMEOUT_SECS must be whole seconds: {e}"))
            })?;
        let base_path = lookup("BASE_PATH").unwrap_or_default();
        let title = lookup("SITE_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Self {
            database_url,
            host,
            port,
            acquire_timeout: Duration::from_secs(acquire_secs),
            site: SiteConfig::new(&base_path, &title),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a valid address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
