//! Domain primitives, aggregates and services.
//!
//! Purpose: define the event and booking records, the normalisation that
//! runs on every write, and the services implementing the driving ports.
//! Nothing here depends on HTTP or the database.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure taxonomy.
//! - Event, EventDraft, EventPatch: event aggregate and its write inputs.
//! - Booking, BookingEmail: seat reservations.
//! - EventService, BookingService: driving port implementations.

mod booking;
mod booking_service;
pub mod error;
mod event;
mod event_service;
pub mod ports;
mod schedule;
mod slug;
#[cfg(test)]
pub(crate) mod test_clock;
mod trace_id;

pub use self::booking::{
    Booking, BookingEmail, BookingId, BookingValidationError, parse_event_reference,
};
pub use self::booking_service::BookingService;
pub use self::error::{Error, ErrorCode};
pub use self::event::{
    Event, EventDraft, EventId, EventMode, EventParts, EventPatch, EventValidationError,
};
pub use self::event_service::EventService;
pub use self::schedule::{EventDate, EventTime, normalize_date, normalize_time};
pub use self::slug::{require_slug, slugify};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
