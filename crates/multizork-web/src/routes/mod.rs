//! HTTP routes.

pub mod health;
pub mod pages;
pub mod route;
