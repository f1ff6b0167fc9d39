//! Multizork — web error types.

use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use multizork_core::error::DomainError;
use multizork_transcripts::render::{SiteConfig, error_document};
use thiserror::Error;

/// Message shown for every missing page.
pub const NOT_FOUND_MESSAGE: &str = "No such page";

/// Message shown whenever the datastore cannot be used.
pub const UNAVAILABLE_MESSAGE: &str = "Couldn't access database. Please try again later.";

/// Startup and runtime errors for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database configuration error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// An HTML error page with an explicit status and an optional redirect
/// target.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

impl PageError {
    /// Builds an error page for `status` carrying a fixed `message`.
    #[must_use]
    pub fn new(site: &SiteConfig, status: StatusCode, message: &str) -> Self {
        let status_line = format!(
            "{} {}",
            status.as_str(),
            status.canonical_reason().unwrap_or_default()
        );
        Self {
            status,
            location: None,
            body: error_document(site, &status_line, message),
        }
    }

    /// 404 with the generic message.
    #[must_use]
    pub fn not_found(site: &SiteConfig) -> Self {
        Self::new(site, StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// 503 with the generic retry-later message.
    #[must_use]
    pub fn unavailable(site: &SiteConfig) -> Self {
        Self::new(site, StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_MESSAGE)
    }

    /// Maps a domain error onto its page. Detail carried by the error never
    /// reaches the body.
    #[must_use]
    pub fn from_domain(site: &SiteConfig, err: &DomainError) -> Self {
        match err {
            DomainError::NotFound => Self::not_found(site),
            DomainError::Unavailable(_) | DomainError::Infrastructure(_) => {
                Self::unavailable(site)
            }
        }
    }

    /// Attaches a `Location` header.
    #[must_use]
    pub fn with_location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }

    /// The response status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            [(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"))],
            self.body,
        )
            .into_response();
        if let Some(location) = self.location {
            // Not header-safe: drop it.
            if let Ok(value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(LOCATION, value);
            }
        }
        response
    }
}
