//! Multizork Store — SQLite implementation of the transcript store traits.
//!
//! The database file is owned by the game-hosting process. This crate only
//! ever opens it read-only and never creates or migrates it.

mod rows;
pub mod sqlite_store;
