//! Booking form client.
//!
//! [`BookingForm`] holds what a visitor typed on an event page and submits it
//! through a [`BookingSubmitter`]. [`HttpBookingClient`] is the submitter that
//! posts to `POST /api/bookings`.

mod form;
mod http;

pub use form::{BookingClientError, BookingForm, BookingSubmitter, CONFIRMATION_MESSAGE};
#[cfg(test)]
pub use form::MockBookingSubmitter;
pub use http::HttpBookingClient;
