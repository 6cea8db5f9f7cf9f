//! Test infrastructure for the HTTP API integration tests
//!
//! Provides TestCtx, which owns a migrated in-memory SQLite storage,
//! builds the actix-web app the same way the binary does, and offers
//! factories for seeding courses and students.

#![allow(dead_code)]

mod ctx;
mod response;

pub use ctx::*;
pub use response::*;
