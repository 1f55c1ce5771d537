//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_command;
mod booking_repository;
mod event_command;
mod event_query;
mod event_repository;

pub use booking_command::{BookingCommand, CreateBookingRequest, FixtureBookingCommand};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use event_command::{EventCommand, FixtureEventCommand};
#[cfg(test)]
pub use event_command::MockEventCommand;
pub use event_query::{EventQuery, FIXTURE_EVENT_SLUG, FixtureEventQuery, fixture_event};
#[cfg(test)]
pub use event_query::MockEventQuery;
pub use event_repository::{EventRepository, EventRepositoryError};
#[cfg(test)]
pub use event_repository::MockEventRepository;
