//! Row shapes returned by the transcript queries.

use multizork_core::model::{
    CrashReport, Instance, Player, PlayerTranscriptOwner, TextType, TranscriptLine,
};

/// A row of the `instances` table.
#[derive(Debug, sqlx::FromRow)]
pub struct InstanceRow {
    pub id: i64,
    pub hashid: String,
    pub story_filename: String,
    pub num_players: i64,
    pub starttime: i64,
    pub savetime: i64,
    pub instructions_run: i64,
    pub crashed: i64,
}

impl From<InstanceRow> for Instance {
    fn from(row: InstanceRow) -> Self {
        Self {
            id: row.id,
            hashid: row.hashid,
            story_filename: row.story_filename,
            num_players: row.num_players,
            starttime: row.starttime,
            savetime: row.savetime,
            instructions_run: row.instructions_run,
            // The hosting process stores the crash row id (or -1) here.
            crashed: row.crashed != 0,
        }
    }
}

/// A row of the `players` table.
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub instance: i64,
    pub username: String,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Self {
            id: row.id,
            instance: row.instance,
            username: row.username,
        }
    }
}

/// A row of the `transcripts` table.
#[derive(Debug, sqlx::FromRow)]
pub struct TranscriptRow {
    pub id: i64,
    pub player: i64,
    pub texttype: i64,
    pub content: String,
}

impl From<TranscriptRow> for TranscriptLine {
    fn from(row: TranscriptRow) -> Self {
        Self {
            id: row.id,
            player: row.player,
            texttype: TextType::from_code(row.texttype),
            content: row.content,
        }
    }
}

/// A player joined with its owning instance.
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerOwnerRow {
    pub id: i64,
    pub username: String,
    pub hashid: String,
    pub crashed: i64,
}

impl From<PlayerOwnerRow> for PlayerTranscriptOwner {
    fn from(row: PlayerOwnerRow) -> Self {
        Self {
            player_id: row.id,
            username: row.username,
            instance_hashid: row.hashid,
            crashed: row.crashed != 0,
        }
    }
}

/// A row of the `crashes` table.
#[derive(Debug, sqlx::FromRow)]
pub struct CrashRow {
    pub timestamp: i64,
    pub errstr: String,
}

impl From<CrashRow> for CrashReport {
    fn from(row: CrashRow) -> Self {
        Self {
            timestamp: row.timestamp,
            errstr: row.errstr,
        }
    }
}
