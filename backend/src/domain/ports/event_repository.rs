//! Driven port for event persistence.
//!
//! Adapters store events exactly as the domain hands them over. Slug, date
//! and time normalisation happen before an [`Event`] reaches this port, so
//! implementations only translate rows.

use async_trait::async_trait;

use crate::domain::{Event, EventId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by event repository adapters.
    pub enum EventRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "event repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "event repository query failed: {message}",
        /// Another event already owns the slug.
        DuplicateSlug { slug: String } =>
            "an event with slug '{slug}' already exists",
        /// A stored row no longer satisfies the event invariants.
        InvalidRecord { message: String } =>
            "stored event record is invalid: {message}",
    }
}

/// Port for event storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event.
    ///
    /// Fails with [`EventRepositoryError::DuplicateSlug`] when the slug is
    /// already taken.
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// Overwrite an existing event, matched by id.
    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// Fetch an event by id.
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError>;

    /// Fetch an event by its canonical slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError>;

    /// List all events, newest first.
    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError>;
}
