//! Booking domain service.
//!
//! Enforces the write-time reference check: a booking is stored only when
//! its event exists at the moment of creation. No foreign key backs this up,
//! so an event removed later leaves its bookings in place.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{info, warn};

use super::event_service::map_event_repository_error;
use crate::domain::ports::{
    BookingCommand, BookingRepository, BookingRepositoryError, CreateBookingRequest,
    EventRepository,
};
use crate::domain::{Booking, BookingEmail, BookingId, Error, parse_event_reference};

fn map_booking_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::connection_failure(format!("booking store unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking store error: {message}"))
        }
    }
}

/// Booking service implementing [`BookingCommand`].
#[derive(Clone)]
pub struct BookingService<E, B> {
    events: Arc<E>,
    bookings: Arc<B>,
    clock: Arc<dyn Clock>,
}

impl<E, B> BookingService<E, B> {
    /// Create a new service over the event and booking repositories.
    pub fn new(events: Arc<E>, bookings: Arc<B>, clock: Arc<dyn Clock>) -> Self {
        Self {
            events,
            bookings,
            clock,
        }
    }
}

#[async_trait]
impl<E, B> BookingCommand for BookingService<E, B>
where
    E: EventRepository,
    B: BookingRepository,
{
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        let event_id = parse_event_reference(&request.event_id)?;
        let email = BookingEmail::parse(&request.email)?;

        let exists = self
            .events
            .find_by_id(&event_id)
            .await
            .map_err(map_event_repository_error)?
            .is_some();
        if !exists {
            warn!(%event_id, slug = %request.slug, "booking references unknown event");
            return Err(Error::dangling_reference(format!(
                "Event with ID {event_id} does not exist. Cannot create booking."
            ))
            .with_details(json!({ "field": "eventId" })));
        }

        let booking = Booking::new(BookingId::random(), event_id, email, self.clock.utc());
        self.bookings
            .insert(&booking)
            .await
            .map_err(map_booking_repository_error)?;
        info!(booking_id = %booking.id, %event_id, slug = %request.slug, "booking created");
        Ok(booking)
    }
}
