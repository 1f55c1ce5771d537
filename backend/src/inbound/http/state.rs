//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingCommand, EventCommand, EventQuery, FixtureBookingCommand, FixtureEventCommand,
    FixtureEventQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub events: Arc<dyn EventQuery>,
    pub events_command: Arc<dyn EventCommand>,
    pub bookings: Arc<dyn BookingCommand>,
}

impl HttpState {
    /// Construct state from port implementations.
    pub fn new(
        events: Arc<dyn EventQuery>,
        events_command: Arc<dyn EventCommand>,
        bookings: Arc<dyn BookingCommand>,
    ) -> Self {
        Self {
            events,
            events_command,
            bookings,
        }
    }

    /// State backed entirely by in-memory fixtures.
    pub fn fixtures() -> Self {
        Self::new(
            Arc::new(FixtureEventQuery),
            Arc::new(FixtureEventCommand),
            Arc::new(FixtureBookingCommand),
        )
    }
}
