//! Multizork — transcript viewing context.
//!
//! Responsible for assembling read-only views of recorded game instances and
//! turning them into HTML pages.

pub mod application;
pub mod render;
