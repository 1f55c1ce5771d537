//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{Booking, Event};

use super::schema::{bookings, events};

/// Row struct for reading from the events table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new event records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub id: Uuid,
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub overview: &'a str,
    pub image: &'a str,
    pub venue: &'a str,
    pub location: &'a str,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub mode: &'a str,
    pub audience: &'a str,
    pub agenda: &'a [String],
    pub organizer: &'a str,
    pub tags: &'a [String],
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Event> for NewEventRow<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            id: *event.id().as_uuid(),
            slug: event.slug(),
            title: event.title(),
            description: event.description(),
            overview: event.overview(),
            image: event.image(),
            venue: event.venue(),
            location: event.location(),
            event_date: event.date().as_naive(),
            event_time: event.time().as_naive(),
            mode: event.mode().as_str(),
            audience: event.audience(),
            agenda: event.agenda(),
            organizer: event.organizer(),
            tags: event.tags(),
            created_at: event.created_at(),
            updated_at: event.updated_at(),
        }
    }
}

/// Changeset for overwriting mutable event columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = events)]
pub(crate) struct EventUpdate<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub overview: &'a str,
    pub image: &'a str,
    pub venue: &'a str,
    pub location: &'a str,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub mode: &'a str,
    pub audience: &'a str,
    pub agenda: &'a [String],
    pub organizer: &'a str,
    pub tags: &'a [String],
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Event> for EventUpdate<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            slug: event.slug(),
            title: event.title(),
            description: event.description(),
            overview: event.overview(),
            image: event.image(),
            venue: event.venue(),
            location: event.location(),
            event_date: event.date().as_naive(),
            event_time: event.time().as_naive(),
            mode: event.mode().as_str(),
            audience: event.audience(),
            agenda: event.agenda(),
            organizer: event.organizer(),
            tags: event.tags(),
            updated_at: event.updated_at(),
        }
    }
}

/// Insertable struct for new booking records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Booking> for NewBookingRow<'a> {
    fn from(booking: &'a Booking) -> Self {
        Self {
            id: *booking.id.as_uuid(),
            event_id: *booking.event_id.as_uuid(),
            email: booking.email.as_ref(),
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
