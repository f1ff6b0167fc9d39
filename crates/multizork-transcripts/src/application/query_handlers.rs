//! Query handlers for the transcript viewing context.
//!
//! Each handler issues its lookups through the request's reader and returns
//! a read-only view for the renderers.

use multizork_core::error::DomainError;
use multizork_core::model::{CrashReport, Instance, Player, PlayerTranscriptOwner, TranscriptLine};
use multizork_core::store::TranscriptReader;
use tracing::debug;

/// Read-only view of one game instance.
#[derive(Debug, Clone)]
pub struct InstanceSummaryView {
    /// The instance row.
    pub instance: Instance,
    /// Players of the instance, ordered by identifier.
    pub players: Vec<Player>,
    /// Most recent crash, only looked up for crashed instances.
    pub crash: Option<CrashReport>,
}

/// Read-only view of one player's transcript.
#[derive(Debug, Clone)]
pub struct PlayerTranscriptView {
    /// The player and its owning instance.
    pub owner: PlayerTranscriptOwner,
    /// Transcript lines in sequence order.
    pub lines: Vec<TranscriptLine>,
}

/// Retrieves an instance and its players by public identifier.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no instance has the identifier.
/// Returns `DomainError::Infrastructure` if a lookup fails.
pub async fn get_instance_summary(
    hashid: &str,
    reader: &mut dyn TranscriptReader,
) -> Result<InstanceSummaryView, DomainError> {
    let Some(instance) = reader.lookup_instance(hashid).await? else {
        debug!(hashid, "no such instance");
        return Err(DomainError::NotFound);
    };
    let players = reader.list_players(instance.id).await?;
    let crash = if instance.crashed {
        reader.latest_crash(instance.id).await?
    } else {
        None
    };
    Ok(InstanceSummaryView {
        instance,
        players,
        crash,
    })
}

/// Retrieves a player's transcript, provided the player belongs to the
/// instance named by `instance_hashid`.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the player does not exist under that
/// instance.
/// Returns `DomainError::Infrastructure` if a lookup fails.
pub async fn get_player_transcript(
    instance_hashid: &str,
    player_id: i64,
    reader: &mut dyn TranscriptReader,
) -> Result<PlayerTranscriptView, DomainError> {
    let Some(owner) = reader
        .lookup_player_with_crash_flag(instance_hashid, player_id)
        .await?
    else {
        debug!(instance_hashid, player_id, "no such player in instance");
        return Err(DomainError::NotFound);
    };
    let lines = reader.list_transcript(owner.player_id).await?;
    Ok(PlayerTranscriptView { owner, lines })
}
