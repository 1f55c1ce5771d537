//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the event and booking repository ports backed
//! by PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Normalisation and the booking reference check live in the
//!   domain services.
//! - **Internal models**: row structs (`models.rs`) and the schema
//!   (`schema.rs`) never leave this module.
//! - **One pool per process**: repositories share a [`PgConnectionCache`]
//!   that opens the pool on first use and reuses it afterwards.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use event_rsvp::outbound::persistence::{
//!     DieselEventRepository, PgConnectionCache, PoolConfig,
//! };
//!
//! let cache = Arc::new(PgConnectionCache::new(PoolConfig::new("postgres://localhost/events")));
//! let events = DieselEventRepository::new(cache);
//! ```

mod connection_cache;
mod diesel_basic_error_mapping;
mod diesel_booking_repository;
mod diesel_event_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use connection_cache::{Connect, ConnectionCache, PgConnectionCache};
pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_event_repository::DieselEventRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
