//! Driving port for event writes.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Error, Event, EventDraft, EventId, EventPatch, require_slug};

use super::event_query::fixture_event;

/// Domain use-case port for creating and updating events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventCommand: Send + Sync {
    /// Validate, normalise and store a new event.
    async fn create_event(&self, draft: EventDraft) -> Result<Event, Error>;

    /// Apply a partial update to the event currently published at `slug`.
    async fn update_event(&self, slug: &str, patch: EventPatch) -> Result<Event, Error>;
}

/// Fixture command that normalises input without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventCommand;

#[async_trait]
impl EventCommand for FixtureEventCommand {
    async fn create_event(&self, draft: EventDraft) -> Result<Event, Error> {
        Event::create(EventId::random(), draft, Utc::now()).map_err(Error::from)
    }

    async fn update_event(&self, slug: &str, patch: EventPatch) -> Result<Event, Error> {
        let key = require_slug(slug)?;
        let mut event = fixture_event()?;
        if event.slug() != key {
            return Err(Error::not_found(format!("Event with slug '{slug}' not found")));
        }
        event.apply_patch(patch, Utc::now())?;
        Ok(event)
    }
}
