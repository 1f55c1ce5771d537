//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so each suite pulls in only
//! the helpers it uses.

#![allow(dead_code, reason = "each test crate uses a different subset")]

mod cluster_skip;
mod embedded_postgres;
pub mod in_memory;

pub use cluster_skip::handle_cluster_setup_failure;
pub use embedded_postgres::provision_template_database;
