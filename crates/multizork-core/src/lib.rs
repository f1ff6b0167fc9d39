//! Multizork Core — shared domain types for the transcript viewer.
//!
//! This crate defines the read-only entities recorded by the game-hosting
//! process and the store traits that every other crate reads them through.
//! It contains no infrastructure code.

pub mod error;
pub mod model;
pub mod store;
