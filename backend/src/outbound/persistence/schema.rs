//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate
//! with `diesel print-schema` after changing a migration.

diesel::table! {
    /// Published events. `slug` carries a unique index.
    events (id) {
        id -> Uuid,
        slug -> Varchar,
        title -> Varchar,
        description -> Text,
        overview -> Text,
        image -> Text,
        venue -> Varchar,
        location -> Varchar,
        /// Calendar date, stored as a native `date`.
        event_date -> Date,
        /// Wall-clock start time, minute precision.
        event_time -> Time,
        /// One of `online`, `offline`, `hybrid`.
        mode -> Varchar,
        audience -> Varchar,
        agenda -> Array<Text>,
        organizer -> Varchar,
        tags -> Array<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Seat reservations. `event_id` is indexed but has no foreign key.
    bookings (id) {
        id -> Uuid,
        event_id -> Uuid,
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(events, bookings);
