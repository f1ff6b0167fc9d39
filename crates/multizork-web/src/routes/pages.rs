//! HTML page routes: landing, instance summary and player transcripts.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use multizork_core::error::DomainError;
use multizork_core::store::TranscriptReader;
use multizork_transcripts::application::query_handlers;
use multizork_transcripts::render::{self, SiteConfig};
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use crate::error::PageError;
use crate::routes::route::Route;
use crate::state::AppState;

/// Everything one request renders against. Dropping it releases the reader.
pub struct RequestContext<'a> {
    site: &'a SiteConfig,
    reader: Box<dyn TranscriptReader>,
}

impl<'a> RequestContext<'a> {
    /// Creates a context over an already opened reader.
    #[must_use]
    pub fn new(site: &'a SiteConfig, reader: Box<dyn TranscriptReader>) -> Self {
        Self { site, reader }
    }

    /// Renders the page for `route`.
    ///
    /// # Errors
    ///
    /// Returns a 404 page for `Route::NotFound` and for identifiers that match
    /// nothing, and a 503 page if a lookup fails.
    pub async fn render(&mut self, route: Route) -> Result<Html<String>, PageError> {
        match route {
            Route::Landing => Ok(Html(render::render_landing(self.site))),
            Route::Instance { instance_id } => {
                let view =
                    query_handlers::get_instance_summary(&instance_id, self.reader.as_mut())
                        .await
                        .map_err(|err| page_error(self.site, &err))?;
                Ok(Html(render::render_instance(self.site, &view)))
            }
            Route::Player {
                instance_id,
                player_id,
            } => {
                let view = query_handlers::get_player_transcript(
                    &instance_id,
                    player_id,
                    self.reader.as_mut(),
                )
                .await
                .map_err(|err| page_error(self.site, &err))?;
                Ok(Html(render::render_annotated_transcript(self.site, &view)))
            }
            Route::RawPlayer {
                instance_id,
                player_id,
            } => {
                let view = query_handlers::get_player_transcript(
                    &instance_id,
                    player_id,
                    self.reader.as_mut(),
                )
                .await
                .map_err(|err| page_error(self.site, &err))?;
                Ok(Html(render::render_raw_transcript(self.site, &view)))
            }
            Route::NotFound { nearest_instance } => {
                debug!("no route for request");
                let page = PageError::not_found(self.site);
                Err(match nearest_instance {
                    Some(instance_id) => page.with_location(
                        self.site
                            .link(&format!("game/{}", render::escape_html(&instance_id))),
                    ),
                    None => page,
                })
            }
        }
    }
}

fn page_error(site: &SiteConfig, err: &DomainError) -> PageError {
    match err {
        DomainError::NotFound => debug!("no such page"),
        DomainError::Unavailable(detail) => {
            warn!(detail = %detail, "transcript database unavailable");
        }
        DomainError::Infrastructure(detail) => {
            error!(detail = %detail, "transcript query failed");
        }
    }
    PageError::from_domain(site, err)
}

/// Fallback handler for every page request.
///
/// Opens the datastore before looking at the path, so an unreachable
/// database answers 503 for every page.
#[instrument(skip(state, uri), fields(path = %uri.path(), request_id = %Uuid::new_v4()))]
pub async fn dispatch(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, PageError> {
    let site = state.site.as_ref();
    let reader = state
        .store
        .open()
        .await
        .map_err(|err| page_error(site, &err))?;
    let mut context = RequestContext::new(site, reader);
    context.render(Route::parse(uri.path(), &site.base_path)).await
}
