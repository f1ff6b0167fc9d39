//! Application layer for the transcript viewing context.

pub mod query_handlers;
