//! Test stores — mock `TranscriptStore` implementations for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use multizork_core::error::DomainError;
use multizork_core::model::{
    CrashReport, Instance, Player, PlayerTranscriptOwner, TextType, TranscriptLine,
};
use multizork_core::store::{TranscriptReader, TranscriptStore};

#[derive(Debug, Default, Clone)]
struct FixtureData {
    instances: Vec<Instance>,
    players: Vec<Player>,
    lines: Vec<TranscriptLine>,
    crashes: Vec<(i64, CrashReport)>,
}

/// An in-memory store built up with `with_*` calls. Counts how many readers
/// were opened so tests can check that each request opens exactly one.
#[derive(Debug, Default)]
pub struct FixtureTranscriptStore {
    data: Arc<FixtureData>,
    opens: AtomicUsize,
}

impl FixtureTranscriptStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance that is not crashed.
    #[must_use]
    pub fn with_instance(self, id: i64, hashid: &str, story_filename: &str) -> Self {
        self.push_instance(id, hashid, story_filename, false)
    }

    /// Adds an instance that crashed.
    #[must_use]
    pub fn with_crashed_instance(self, id: i64, hashid: &str, story_filename: &str) -> Self {
        self.push_instance(id, hashid, story_filename, true)
    }

    /// Adds a player to the instance with row id `instance`.
    #[must_use]
    pub fn with_player(mut self, id: i64, instance: i64, username: &str) -> Self {
        self.data_mut().players.push(Player {
            id,
            instance,
            username: username.to_owned(),
        });
        self
    }

    /// Appends a transcript line; sequence ids follow insertion order.
    #[must_use]
    pub fn with_line(mut self, player: i64, texttype: TextType, content: &str) -> Self {
        let data = self.data_mut();
        let id = i64::try_from(data.lines.len()).unwrap_or(i64::MAX) + 1;
        data.lines.push(TranscriptLine {
            id,
            player,
            texttype,
            content: content.to_owned(),
        });
        self
    }

    /// Records a crash for the instance with row id `instance`.
    #[must_use]
    pub fn with_crash(mut self, instance: i64, timestamp: i64, errstr: &str) -> Self {
        self.data_mut().crashes.push((
            instance,
            CrashReport {
                timestamp,
                errstr: errstr.to_owned(),
            },
        ));
        self
    }

    /// Number of readers opened so far.
    #[must_use]
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    fn push_instance(mut self, id: i64, hashid: &str, story_filename: &str, crashed: bool) -> Self {
        self.data_mut().instances.push(Instance {
            id,
            hashid: hashid.to_owned(),
            story_filename: story_filename.to_owned(),
            num_players: 1,
            starttime: 1_768_471_200,
            savetime: 1_768_476_600,
            instructions_run: 4242,
            crashed,
        });
        self
    }

    fn data_mut(&mut self) -> &mut FixtureData {
        Arc::make_mut(&mut self.data)
    }
}

#[async_trait]
impl TranscriptStore for FixtureTranscriptStore {
    async fn open(&self) -> Result<Box<dyn TranscriptReader>, DomainError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FixtureReader {
            data: Arc::clone(&self.data),
        }))
    }
}

struct FixtureReader {
    data: Arc<FixtureData>,
}

#[async_trait]
impl TranscriptReader for FixtureReader {
    async fn lookup_instance(&mut self, hashid: &str) -> Result<Option<Instance>, DomainError> {
        Ok(self
            .data
            .instances
            .iter()
            .find(|i| i.hashid == hashid)
            .cloned())
    }

    async fn list_players(&mut self, instance_id: i64) -> Result<Vec<Player>, DomainError> {
        let mut players: Vec<Player> = self
            .data
            .players
            .iter()
            .filter(|p| p.instance == instance_id)
            .cloned()
            .collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    async fn list_transcript(
        &mut self,
        player_id: i64,
    ) -> Result<Vec<TranscriptLine>, DomainError> {
        Ok(self
            .data
            .lines
            .iter()
            .filter(|l| l.player == player_id)
            .cloned()
            .collect())
    }

    async fn lookup_player_with_crash_flag(
        &mut self,
        instance_hashid: &str,
        player_id: i64,
    ) -> Result<Option<PlayerTranscriptOwner>, DomainError> {
        let Some(instance) = self
            .data
            .instances
            .iter()
            .find(|i| i.hashid == instance_hashid)
        else {
            return Ok(None);
        };
        Ok(self
            .data
            .players
            .iter()
            .find(|p| p.id == player_id && p.instance == instance.id)
            .map(|p| PlayerTranscriptOwner {
                player_id: p.id,
                username: p.username.clone(),
                instance_hashid: instance.hashid.clone(),
                crashed: instance.crashed,
            }))
    }

    async fn latest_crash(
        &mut self,
        instance_id: i64,
    ) -> Result<Option<CrashReport>, DomainError> {
        Ok(self
            .data
            .crashes
            .iter()
            .rev()
            .find(|(instance, _)| *instance == instance_id)
            .map(|(_, crash)| crash.clone()))
    }
}

/// A store that can never be opened. Useful for testing the
/// datastore-unavailable path.
#[derive(Debug)]
pub struct UnavailableTranscriptStore;

#[async_trait]
impl TranscriptStore for UnavailableTranscriptStore {
    async fn open(&self) -> Result<Box<dyn TranscriptReader>, DomainError> {
        Err(DomainError::Unavailable("unable to open database file".into()))
    }
}

/// A store that opens fine but fails every query. Useful for testing
/// error-handling paths after the datastore was opened.
#[derive(Debug)]
pub struct FailingTranscriptStore;

#[async_trait]
impl TranscriptStore for FailingTranscriptStore {
    async fn open(&self) -> Result<Box<dyn TranscriptReader>, DomainError> {
        Ok(Box::new(FailingReader))
    }
}

struct FailingReader;

fn disk_io_error() -> DomainError {
    DomainError::Infrastructure("disk I/O error".into())
}

#[async_trait]
impl TranscriptReader for FailingReader {
    async fn lookup_instance(&mut self, _hashid: &str) -> Result<Option<Instance>, DomainError> {
        Err(disk_io_error())
    }

    async fn list_players(&mut self, _instance_id: i64) -> Result<Vec<Player>, DomainError> {
        Err(disk_io_error())
    }

    async fn list_transcript(
        &mut self,
        _player_id: i64,
    ) -> Result<Vec<TranscriptLine>, DomainError> {
        Err(disk_io_error())
    }

    async fn lookup_player_with_crash_flag(
        &mut self,
        _instance_hashid: &str,
        _player_id: i64,
    ) -> Result<Option<PlayerTranscriptOwner>, DomainError> {
        Err(disk_io_error())
    }

    async fn latest_crash(
        &mut self,
        _instance_id: i64,
    ) -> Result<Option<CrashReport>, DomainError> {
        Err(disk_io_error())
    }
}
