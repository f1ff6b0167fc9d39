//! Integration tests for `SqliteTranscriptStore`.

use std::time::Duration;

use multizork_core::error::DomainError;
use multizork_core::model::TextType;
use multizork_core::store::TranscriptStore;
use multizork_store::sqlite_store::SqliteTranscriptStore;
use multizork_test_support::{
    InstanceSeed, insert_crash, insert_instance, insert_player, insert_transcript, memory_pool,
};

// --- lookup_instance ---

#[tokio::test]
async fn test_lookup_instance_returns_row_for_known_hashid() {
    // Arrange
    let pool = memory_pool().await;
    let mut seed = InstanceSeed::new("AB12");
    seed.crashed = -1;
    let instance_id = insert_instance(&pool, &seed).await;
    let store = SqliteTranscriptStore::new(pool);

    // Act
    let mut reader = store.open().await.unwrap();
    let instance = reader.lookup_instance("AB12").await.unwrap().unwrap();

    // Assert
    assert_eq!(instance.id, instance_id);
    assert_eq!(instance.hashid, "AB12");
    assert_eq!(instance.story_filename, "zork1.dat");
    assert_eq!(instance.num_players, 2);
    assert_eq!(instance.starttime, seed.starttime);
    assert_eq!(instance.savetime, seed.savetime);
    assert_eq!(instance.instructions_run, 123_456);
    assert!(instance.crashed);
}

#[tokio::test]
async fn test_lookup_instance_returns_none_for_unknown_hashid() {
    let pool = memory_pool().await;
    insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let store = SqliteTranscriptStore::new(pool);

    let mut reader = store.open().await.unwrap();

    assert!(reader.lookup_instance("doesnotexist").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_instance_binds_hashid_as_a_value() {
    let pool = memory_pool().await;
    insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let store = SqliteTranscriptStore::new(pool);

    let mut reader = store.open().await.unwrap();
    let result = reader.lookup_instance("' OR '1'='1").await.unwrap();

    assert!(result.is_none());
}

// --- list_players ---

#[tokio::test]
async fn test_list_players_is_ordered_and_scoped_to_instance() {
    // Arrange
    let pool = memory_pool().await;
    let first = insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let second = insert_instance(&pool, &InstanceSeed::new("CD34")).await;
    let alice = insert_player(&pool, first, "alice").await;
    insert_player(&pool, second, "mallory").await;
    let bob = insert_player(&pool, first, "bob").await;
    let store = SqliteTranscriptStore::new(pool);

    // Act
    let mut reader = store.open().await.unwrap();
    let players = reader.list_players(first).await.unwrap();

    // Assert
    let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![alice, bob]);
    assert!(players.iter().all(|p| p.instance == first));
    assert_eq!(players[0].username, "alice");
}

// --- list_transcript ---

#[tokio::test]
async fn test_list_transcript_preserves_sequence_order() {
    // Arrange
    let pool = memory_pool().await;
    let instance = insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let alice = insert_player(&pool, instance, "alice").await;
    let bob = insert_player(&pool, instance, "bob").await;
    insert_transcript(&pool, alice, 0, "You are in a room.\n").await;
    insert_transcript(&pool, bob, 0, "Someone else's room.\n").await;
    insert_transcript(&pool, alice, 1, "look").await;
    insert_transcript(&pool, alice, 2, "Saved.\n>").await;
    let store = SqliteTranscriptStore::new(pool);

    // Act
    let mut reader = store.open().await.unwrap();
    let lines = reader.list_transcript(alice).await.unwrap();

    // Assert
    assert_eq!(lines.len(), 3);
    assert!(lines.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(lines[0].texttype, TextType::GameOutput);
    assert_eq!(lines[1].texttype, TextType::UserInput);
    assert_eq!(lines[1].content, "look");
    assert_eq!(lines[2].texttype, TextType::SystemMessage);
    assert_eq!(lines[2].content, "Saved.\n>");
}

// --- lookup_player_with_crash_flag ---

#[tokio::test]
async fn test_lookup_player_with_crash_flag_joins_owning_instance() {
    let pool = memory_pool().await;
    let mut seed = InstanceSeed::new("AB12");
    seed.crashed = 3;
    let instance = insert_instance(&pool, &seed).await;
    let alice = insert_player(&pool, instance, "alice").await;
    let store = SqliteTranscriptStore::new(pool);

    let mut reader = store.open().await.unwrap();
    let owner = reader
        .lookup_player_with_crash_flag("AB12", alice)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(owner.player_id, alice);
    assert_eq!(owner.username, "alice");
    assert_eq!(owner.instance_hashid, "AB12");
    assert!(owner.crashed);
}

#[tokio::test]
async fn test_lookup_player_with_crash_flag_rejects_player_of_other_instance() {
    // Arrange
    let pool = memory_pool().await;
    insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let other = insert_instance(&pool, &InstanceSeed::new("CD34")).await;
    let mallory = insert_player(&pool, other, "mallory").await;
    let store = SqliteTranscriptStore::new(pool);

    // Act
    let mut reader = store.open().await.unwrap();
    let result = reader
        .lookup_player_with_crash_flag("AB12", mallory)
        .await
        .unwrap();

    // Assert
    assert!(result.is_none());
}

// --- latest_crash ---

#[tokio::test]
async fn test_latest_crash_returns_most_recent_row_for_instance() {
    let pool = memory_pool().await;
    let instance = insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let other = insert_instance(&pool, &InstanceSeed::new("CD34")).await;
    insert_crash(&pool, instance, 100, "first failure").await;
    insert_crash(&pool, instance, 200, "Unsupported opcode").await;
    insert_crash(&pool, other, 300, "unrelated").await;
    let store = SqliteTranscriptStore::new(pool);

    let mut reader = store.open().await.unwrap();
    let crash = reader.latest_crash(instance).await.unwrap().unwrap();

    assert_eq!(crash.timestamp, 200);
    assert_eq!(crash.errstr, "Unsupported opcode");
}

#[tokio::test]
async fn test_latest_crash_returns_none_without_rows() {
    let pool = memory_pool().await;
    let instance = insert_instance(&pool, &InstanceSeed::new("AB12")).await;
    let store = SqliteTranscriptStore::new(pool);

    let mut reader = store.open().await.unwrap();

    assert!(reader.latest_crash(instance).await.unwrap().is_none());
}

// --- open ---

#[tokio::test]
async fn test_open_read_only_missing_database_is_unavailable() {
    // Arrange
    let store = SqliteTranscriptStore::connect_read_only(
        "sqlite:/nonexistent-multizork-dir/multizork.sqlite3",
        Duration::from_secs(1),
    )
    .unwrap();

    // Act
    let result = store.open().await;

    // Assert
    match result {
        Err(DomainError::Unavailable(_)) => {}
        Err(other) => panic!("expected Unavailable, got {other:?}"),
        Ok(_) => panic!("expected Unavailable, got a reader"),
    }
}

#[tokio::test]
async fn test_connect_read_only_rejects_unknown_open_mode() {
    let result = SqliteTranscriptStore::connect_read_only(
        "sqlite:multizork.sqlite3?mode=bogus",
        Duration::from_secs(1),
    );

    assert!(result.is_err());
}
