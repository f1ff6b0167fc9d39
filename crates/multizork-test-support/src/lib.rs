//! Shared test mocks and fixtures for the multizork transcript viewer.

mod fixture;
mod store;

pub use fixture::{
    InstanceSeed, SCHEMA, insert_crash, insert_instance, insert_player, insert_transcript,
    memory_pool,
};
pub use store::{FailingTranscriptStore, FixtureTranscriptStore, UnavailableTranscriptStore};
