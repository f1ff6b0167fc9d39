//! `SQLite` fixture — an in-memory copy of the game server's database.
//!
//! Only the columns the viewer reads are created. The real tables carry a
//! good deal of virtual-machine state that the viewer never touches.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Tables as written by the game-hosting process.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS instances (
    id               INTEGER PRIMARY KEY,
    hashid           TEXT NOT NULL UNIQUE,
    num_players      INTEGER NOT NULL,
    starttime        INTEGER NOT NULL,
    savetime         INTEGER NOT NULL,
    instructions_run INTEGER NOT NULL,
    story_filename   TEXT NOT NULL,
    crashed          INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS players (
    id       INTEGER PRIMARY KEY,
    instance INTEGER NOT NULL REFERENCES instances(id),
    username TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transcripts (
    id        INTEGER PRIMARY KEY,
    timestamp INTEGER NOT NULL,
    player    INTEGER NOT NULL REFERENCES players(id),
    texttype  INTEGER NOT NULL,
    content   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS crashes (
    id             INTEGER PRIMARY KEY,
    instance       INTEGER NOT NULL,
    timestamp      INTEGER NOT NULL,
    current_player INTEGER NOT NULL,
    logical_pc     INTEGER NOT NULL,
    errstr         TEXT NOT NULL
);
";

/// Column values for a seeded instance.
#[derive(Debug, Clone)]
pub struct InstanceSeed {
    pub hashid: String,
    pub story_filename: String,
    pub num_players: i64,
    pub starttime: i64,
    pub savetime: i64,
    pub instructions_run: i64,
    pub crashed: i64,
}

impl InstanceSeed {
    /// A not-crashed two-player zork1 instance with fixed timestamps.
    #[must_use]
    pub fn new(hashid: &str) -> Self {
        Self {
            hashid: hashid.to_owned(),
            story_filename: "zork1.dat".to_owned(),
            num_players: 2,
            // 2026-01-15 10:00:00 UTC
            starttime: 1_768_471_200,
            // 2026-01-15 11:30:00 UTC
            savetime: 1_768_476_600,
            instructions_run: 123_456,
            crashed: 0,
        }
    }
}

/// Creates a single-connection in-memory database with [`SCHEMA`] applied.
///
/// # Panics
///
/// Panics if the database cannot be created.
pub async fn memory_pool() -> SqlitePool {
    // Every in-memory connection is its own database, so keep exactly one
    // alive for the lifetime of the pool.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite database");
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("failed to create fixture schema");
    pool
}

/// Inserts an instance and returns its row id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_instance(pool: &SqlitePool, seed: &InstanceSeed) -> i64 {
    sqlx::query(
        "INSERT INTO instances (hashid, num_players, starttime, savetime, instructions_run, \
         story_filename, crashed) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&seed.hashid)
    .bind(seed.num_players)
    .bind(seed.starttime)
    .bind(seed.savetime)
    .bind(seed.instructions_run)
    .bind(&seed.story_filename)
    .bind(seed.crashed)
    .execute(pool)
    .await
    .expect("failed to insert instance")
    .last_insert_rowid()
}

/// Inserts a player and returns its id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_player(pool: &SqlitePool, instance_id: i64, username: &str) -> i64 {
    sqlx::query("INSERT INTO players (instance, username) VALUES (?, ?)")
        .bind(instance_id)
        .bind(username)
        .execute(pool)
        .await
        .expect("failed to insert player")
        .last_insert_rowid()
}

/// Appends a transcript line for a player and returns its sequence id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_transcript(
    pool: &SqlitePool,
    player_id: i64,
    texttype: i64,
    content: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO transcripts (timestamp, player, texttype, content) VALUES (0, ?, ?, ?)",
    )
    .bind(player_id)
    .bind(texttype)
    .bind(content)
    .execute(pool)
    .await
    .expect("failed to insert transcript line")
    .last_insert_rowid()
}

/// Records a crash for an instance and returns the crash row id.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_crash(pool: &SqlitePool, instance_id: i64, timestamp: i64, errstr: &str) -> i64 {
    sqlx::query(
        "INSERT INTO crashes (instance, timestamp, current_player, logical_pc, errstr) \
         VALUES (?, ?, 0, 0, ?)",
    )
    .bind(instance_id)
    .bind(timestamp)
    .bind(errstr)
    .execute(pool)
    .await
    .expect("failed to insert crash")
    .last_insert_rowid()
}
