//! Read-only store abstraction.
//!
//! A [`TranscriptStore`] is shared by the whole process. Each request opens
//! one [`TranscriptReader`] from it and issues every lookup through that
//! reader; the underlying handle is released when the reader is dropped.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::model::{CrashReport, Instance, Player, PlayerTranscriptOwner, TranscriptLine};

/// Process-wide handle that hands out request-scoped readers.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Opens a read-only reader for the duration of one request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Unavailable` if the datastore cannot be opened.
    async fn open(&self) -> Result<Box<dyn TranscriptReader>, DomainError>;
}

/// Read-only lookups against one open datastore handle.
///
/// Every identifier is supplied by the client and must only ever reach the
/// datastore as a bound parameter.
#[async_trait]
pub trait TranscriptReader: Send {
    /// Fetch one instance by its public identifier.
    async fn lookup_instance(&mut self, hashid: &str) -> Result<Option<Instance>, DomainError>;

    /// List the players of an instance, ordered by identifier.
    async fn list_players(&mut self, instance_id: i64) -> Result<Vec<Player>, DomainError>;

    /// List a player's transcript lines, ordered by sequence identifier.
    async fn list_transcript(&mut self, player_id: i64)
    -> Result<Vec<TranscriptLine>, DomainError>;

    /// Fetch a player together with its owning instance's crash flag.
    ///
    /// Only matches when the player belongs to the instance named by
    /// `instance_hashid`.
    async fn lookup_player_with_crash_flag(
        &mut self,
        instance_hashid: &str,
        player_id: i64,
    ) -> Result<Option<PlayerTranscriptOwner>, DomainError>;

    /// Fetch the most recent crash recorded for an instance.
    async fn latest_crash(&mut self, instance_id: i64)
    -> Result<Option<CrashReport>, DomainError>;
}
