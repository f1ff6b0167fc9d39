//! `SQLite` implementation of the `TranscriptStore` trait.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::debug;

use multizork_core::error::DomainError;
use multizork_core::model::{CrashReport, Instance, Player, PlayerTranscriptOwner, TranscriptLine};
use multizork_core::store::{TranscriptReader, TranscriptStore};

use crate::rows::{CrashRow, InstanceRow, PlayerOwnerRow, PlayerRow, TranscriptRow};

const SELECT_INSTANCE: &str = "SELECT id, hashid, story_filename, num_players, starttime, savetime, \
     instructions_run, crashed FROM instances WHERE hashid = ? LIMIT 1";

const SELECT_PLAYERS: &str =
    "SELECT id, instance, username FROM players WHERE instance = ? ORDER BY id";

const SELECT_TRANSCRIPT: &str =
    "SELECT id, player, texttype, content FROM transcripts WHERE player = ? ORDER BY id";

const SELECT_PLAYER_OWNER: &str = "SELECT p.id, p.username, i.hashid, i.crashed \
     FROM players AS p INNER JOIN instances AS i ON p.instance = i.id \
     WHERE i.hashid = ? AND p.id = ? LIMIT 1";

const SELECT_LATEST_CRASH: &str =
    "SELECT timestamp, errstr FROM crashes WHERE instance = ? ORDER BY id DESC LIMIT 1";

/// SQLite-backed transcript store.
#[derive(Debug, Clone)]
pub struct SqliteTranscriptStore {
    pool: SqlitePool,
}

impl SqliteTranscriptStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates a store that opens `database_url` read-only on first use.
    ///
    /// No connection is made here; a missing or unreadable database surfaces
    /// later from [`TranscriptStore::open`].
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::Configuration` if `database_url` is not a valid
    /// `SQLite` connection string.
    pub fn connect_read_only(
        database_url: &str,
        acquire_timeout: Duration,
    ) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .read_only(true)
            .create_if_missing(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(acquire_timeout)
            .connect_lazy_with(options);
        Ok(Self { pool })
    }
}

#[async_trait]
impl TranscriptStore for SqliteTranscriptStore {
    async fn open(&self) -> Result<Box<dyn TranscriptReader>, DomainError> {
        let conn = self.pool.acquire().await.map_err(|err| {
            debug!(error = %err, "failed to acquire transcript database connection");
            DomainError::Unavailable(err.to_string())
        })?;
        Ok(Box::new(SqliteTranscriptReader { conn }))
    }
}

/// A reader holding one pooled connection for the duration of a request.
///
/// The connection goes back to the pool when the reader is dropped.
#[derive(Debug)]
pub struct SqliteTranscriptReader {
    conn: PoolConnection<Sqlite>,
}

fn query_error(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl TranscriptReader for SqliteTranscriptReader {
    async fn lookup_instance(&mut self, hashid: &str) -> Result<Option<Instance>, DomainError> {
        let row = sqlx::query_as::<_, InstanceRow>(SELECT_INSTANCE)
            .bind(hashid)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(query_error)?;
        Ok(row.map(Instance::from))
    }

    async fn list_players(&mut self, instance_id: i64) -> Result<Vec<Player>, DomainError> {
        let rows = sqlx::query_as::<_, PlayerRow>(SELECT_PLAYERS)
            .bind(instance_id)
            .fetch_all(&mut *self.conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn list_transcript(
        &mut self,
        player_id: i64,
    ) -> Result<Vec<TranscriptLine>, DomainError> {
        let rows = sqlx::query_as::<_, TranscriptRow>(SELECT_TRANSCRIPT)
            .bind(player_id)
            .fetch_all(&mut *self.conn)
            .await
            .map_err(query_error)?;
        Ok(rows.into_iter().map(TranscriptLine::from).collect())
    }

    async fn lookup_player_with_crash_flag(
        &mut self,
        instance_hashid: &str,
        player_id: i64,
    ) -> Result<Option<PlayerTranscriptOwner>, DomainError> {
        let row = sqlx::query_as::<_, PlayerOwnerRow>(SELECT_PLAYER_OWNER)
            .bind(instance_hashid)
            .bind(player_id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(query_error)?;
        Ok(row.map(PlayerTranscriptOwner::from))
    }

    async fn latest_crash(
        &mut self,
        instance_id: i64,
    ) -> Result<Option<CrashReport>, DomainError> {
        let row = sqlx::query_as::<_, CrashRow>(SELECT_LATEST_CRASH)
            .bind(instance_id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(query_error)?;
        Ok(row.map(CrashReport::from))
    }
}
