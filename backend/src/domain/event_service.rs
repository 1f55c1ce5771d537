//! Event domain service.
//!
//! Implements the event driving ports: normalisation runs here, before the
//! repository sees the record, and repository failures are mapped onto the
//! domain error taxonomy.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{EventCommand, EventQuery, EventRepository, EventRepositoryError};
use crate::domain::{Error, Event, EventDraft, EventId, EventPatch, require_slug};

/// Map event repository failures onto domain errors.
pub(crate) fn map_event_repository_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { message } => {
            Error::connection_failure(format!("event store unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event store error: {message}"))
        }
        EventRepositoryError::DuplicateSlug { slug } => {
            Error::conflict(format!("An event with slug '{slug}' already exists"))
                .with_details(json!({ "field": "slug", "slug": slug }))
        }
        EventRepositoryError::InvalidRecord { message } => {
            debug!(%message, "stored event failed validation");
            Error::validation("Invalid request data")
        }
    }
}

/// The message echoes the slug as requested, before trimming.
fn not_found(slug: &str) -> Error {
    Error::not_found(format!("Event with slug '{slug}' not found"))
}

/// Event service implementing the event driving ports.
#[derive(Clone)]
pub struct EventService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> EventService<R> {
    /// Create a new service over the given repository and clock.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl<R> EventQuery for EventService<R>
where
    R: EventRepository,
{
    async fn find_by_slug(&self, slug: &str) -> Result<Event, Error> {
        let key = require_slug(slug)?;
        self.repo
            .find_by_slug(key)
            .await
            .map_err(map_event_repository_error)?
            .ok_or_else(|| not_found(slug))
    }

    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        self.repo.list().await.map_err(map_event_repository_error)
    }
}

#[async_trait]
impl<R> EventCommand for EventService<R>
where
    R: EventRepository,
{
    async fn create_event(&self, draft: EventDraft) -> Result<Event, Error> {
        let event = Event::create(EventId::random(), draft, self.clock.utc())?;
        self.repo
            .insert(&event)
            .await
            .map_err(map_event_repository_error)?;
        info!(event_id = %event.id(), slug = event.slug(), "event created");
        Ok(event)
    }

    async fn update_event(&self, slug: &str, patch: EventPatch) -> Result<Event, Error> {
        let key = require_slug(slug)?;
        let mut event = self
            .repo
            .find_by_slug(key)
            .await
            .map_err(map_event_repository_error)?
            .ok_or_else(|| not_found(slug))?;

        if !event.apply_patch(patch, self.clock.utc())? {
            debug!(event_id = %event.id(), "event update left record unchanged");
            return Ok(event);
        }

        self.repo
            .update(&event)
            .await
            .map_err(map_event_repository_error)?;
        info!(event_id = %event.id(), slug = event.slug(), "event updated");
        Ok(event)
    }
}

#[cfg(test)]
#[path = "event_service_tests.rs"]
mod tests;
