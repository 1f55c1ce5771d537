//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! Rows are translated to and from domain events without applying any
//! normalisation. Rows that no longer satisfy the event invariants surface
//! as [`EventRepositoryError::InvalidRecord`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Timelike;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{EventRepository, EventRepositoryError};
use crate::domain::{Event, EventDate, EventId, EventMode, EventParts, EventTime};

use super::connection_cache::PgConnectionCache;
use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{EventRow, EventUpdate, NewEventRow};
use super::pool::PoolError;
use super::schema::events;

/// Diesel-backed implementation of the `EventRepository` port.
#[derive(Clone)]
pub struct DieselEventRepository {
    connections: Arc<PgConnectionCache>,
}

impl DieselEventRepository {
    /// Create a repository drawing connections from the shared cache.
    pub fn new(connections: Arc<PgConnectionCache>) -> Self {
        Self { connections }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    map_basic_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

fn map_write_error(error: diesel::result::Error, slug: &str) -> EventRepositoryError {
    if is_unique_violation(&error) {
        EventRepositoryError::duplicate_slug(slug)
    } else {
        map_diesel_error(error)
    }
}

/// Convert a database row to a domain event.
fn row_to_event(row: EventRow) -> Result<Event, EventRepositoryError> {
    let id = row.id;
    let mode: EventMode = row.mode.parse().map_err(|err| {
        warn!(event_id = %id, value = %row.mode, "unrecognised event mode in store");
        EventRepositoryError::invalid_record(format!("{err}"))
    })?;
    let time = EventTime::from_hm(row.event_time.hour(), row.event_time.minute())
        .ok_or_else(|| EventRepositoryError::invalid_record("event time out of range"))?;

    Event::restore(EventParts {
        id: EventId::from_uuid(row.id),
        slug: row.slug,
        title: row.title,
        description: row.description,
        overview: row.overview,
        image: row.image,
        venue: row.venue,
        location: row.location,
        date: EventDate::from_naive(row.event_date),
        time,
        mode,
        audience: row.audience,
        agenda: row.agenda,
        organizer: row.organizer,
        tags: row.tags,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
    .map_err(|err| {
        warn!(event_id = %id, error = %err, "stored event violates invariants");
        EventRepositoryError::invalid_record(err.to_string())
    })
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.connections.checkout().await.map_err(map_pool_error)?;

        diesel::insert_into(events::table)
            .values(&NewEventRow::from(event))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, event.slug()))
    }

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.connections.checkout().await.map_err(map_pool_error)?;

        let updated = diesel::update(events::table.filter(events::id.eq(event.id().as_uuid())))
            .set(&EventUpdate::from(event))
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, event.slug()))?;

        if updated == 0 {
            return Err(EventRepositoryError::query("event not found for update"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.connections.checkout().await.map_err(map_pool_error)?;

        let row: Option<EventRow> = events::table
            .filter(events::id.eq(id.as_uuid()))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_event).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError> {
        let mut conn = self.connections.checkout().await.map_err(map_pool_error)?;

        let row: Option<EventRow> = events::table
            .filter(events::slug.eq(slug))
            .select(EventRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_event).transpose()
    }

    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError> {
        let mut conn = self.connections.checkout().await.map_err(map_pool_error)?;

        let rows: Vec<EventRow> = events::table
            .order((events::created_at.desc(), events::id.asc()))
            .select(EventRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn row() -> EventRow {
        let stamp = Utc
            .with_ymd_and_hms(2025, 2, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        EventRow {
            id: Uuid::nil(),
            slug: "rust-meetup".into(),
            title: "Rust Meetup".into(),
            description: "Talks".into(),
            overview: "Evening".into(),
            image: "/img.png".into(),
            venue: "Hall".into(),
            location: "Berlin".into(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            mode: "offline".into(),
            audience: "Everyone".into(),
            agenda: vec!["Welcome".into()],
            organizer: "Rustaceans".into(),
            tags: vec!["rust".into()],
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[rstest]
    fn row_to_event_maps_columns(row: EventRow) {
        let event = row_to_event(row).expect("row is valid");

        assert_eq!(event.slug(), "rust-meetup");
        assert_eq!(event.date().to_string(), "2025-06-01");
        assert_eq!(event.time().to_string(), "18:30");
    }

    #[rstest]
    fn row_to_event_rejects_unknown_mode(mut row: EventRow) {
        row.mode = "virtual".into();

        let err = row_to_event(row).expect_err("mode is unknown");

        assert!(matches!(err, EventRepositoryError::InvalidRecord { .. }));
    }

    #[rstest]
    fn row_to_event_rejects_empty_tags(mut row: EventRow) {
        row.tags.clear();

        let err = row_to_event(row).expect_err("tags are empty");

        assert!(matches!(err, EventRepositoryError::InvalidRecord { .. }));
    }

    #[rstest]
    fn row_to_event_truncates_seconds(mut row: EventRow) {
        row.event_time = NaiveTime::from_hms_opt(9, 5, 42).expect("valid time");

        let event = row_to_event(row).expect("row is valid");

        assert_eq!(event.time().to_string(), "09:05");
    }
}
