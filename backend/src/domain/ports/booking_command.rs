//! Driving port for booking creation.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingEmail, BookingId, Error, parse_event_reference};

/// Booking submission as sent by the booking form.
///
/// `slug` identifies the page the form was rendered on; the event reference
/// is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub event_id: String,
    pub slug: String,
    pub email: String,
}

/// Domain use-case port for creating bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate the submission, check the referenced event exists and store
    /// the booking.
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error>;
}

/// Fixture command that validates input and skips the existence check.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingCommand;

#[async_trait]
impl BookingCommand for FixtureBookingCommand {
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        let event_id = parse_event_reference(&request.event_id)?;
        let email = BookingEmail::parse(&request.email)?;
        Ok(Booking::new(BookingId::random(), event_id, email, Utc::now()))
    }
}
