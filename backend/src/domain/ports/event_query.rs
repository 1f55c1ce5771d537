//! Driving port for event reads.
//!
//! Inbound adapters (HTTP handlers) use this port to look events up without
//! importing outbound persistence concerns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Error, Event, EventDraft, EventId, require_slug};

/// Slug served by [`FixtureEventQuery`].
pub const FIXTURE_EVENT_SLUG: &str = "rust-meetup-berlin";

const FIXTURE_EVENT_ID: Uuid = Uuid::from_u128(0x6c1f_3a2e_8d4b_4f6a_9e21_0b7c_5d3e_1a90);

/// Domain use-case port for reading events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Look an event up by slug.
    ///
    /// Blank input fails with [`crate::domain::ErrorCode::InvalidArgument`]
    /// before any store access; a miss fails with
    /// [`crate::domain::ErrorCode::NotFound`].
    async fn find_by_slug(&self, slug: &str) -> Result<Event, Error>;

    /// List all events, newest first.
    async fn list_events(&self) -> Result<Vec<Event>, Error>;
}

/// Build the sample event served by the fixture ports.
pub fn fixture_event() -> Result<Event, Error> {
    let draft = EventDraft {
        title: "Rust Meetup Berlin".into(),
        description: "Lightning talks and pairing on async Rust.".into(),
        overview: "An evening for Rustaceans of every level.".into(),
        image: "/images/rust-meetup.png".into(),
        venue: "Factory Görlitzer Park".into(),
        location: "Berlin, Germany".into(),
        date: "2025-06-12".into(),
        time: "18:30".into(),
        mode: "offline".into(),
        audience: "Developers".into(),
        agenda: vec!["Welcome".into(), "Talks".into(), "Pairing".into()],
        organizer: "Rust Berlin".into(),
        tags: vec!["rust".into(), "meetup".into()],
    };
    Event::create(
        EventId::from_uuid(FIXTURE_EVENT_ID),
        draft,
        DateTime::<Utc>::default(),
    )
    .map_err(Error::from)
}

/// Fixture query serving a single sample event.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventQuery;

#[async_trait]
impl EventQuery for FixtureEventQuery {
    async fn find_by_slug(&self, slug: &str) -> Result<Event, Error> {
        let key = require_slug(slug)?;
        let event = fixture_event()?;
        if event.slug() == key {
            Ok(event)
        } else {
            Err(Error::not_found(format!("Event with slug '{slug}' not found")))
        }
    }

    async fn list_events(&self) -> Result<Vec<Event>, Error> {
        Ok(vec![fixture_event()?])
    }
}
