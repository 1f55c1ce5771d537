//! Booking form state machine.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::CreateBookingRequest;
use crate::inbound::http::bookings::BookingBody;

/// Message shown once a booking has been accepted.
pub const CONFIRMATION_MESSAGE: &str = "Thank you for signing up!";

/// Failures reported by a [`BookingSubmitter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingClientError {
    /// The request never produced a response.
    #[error("booking request failed: {message}")]
    Transport { message: String },
    /// The server answered with `success: false`.
    #[error("booking rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The response body was not a booking envelope.
    #[error("unexpected booking response: {message}")]
    Decode { message: String },
}

/// Sends a booking submission somewhere that can store it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    /// Submit the booking, returning the stored record.
    async fn submit(&self, request: CreateBookingRequest)
    -> Result<BookingBody, BookingClientError>;
}

/// Booking form bound to one event page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    event_id: String,
    slug: String,
    email: String,
    submitted: bool,
}

impl BookingForm {
    /// Empty form for the event identified by `event_id`, rendered at `slug`.
    pub fn new(event_id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            slug: slug.into(),
            email: String::new(),
            submitted: false,
        }
    }

    /// Replace the email the visitor typed.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Confirmation text, present only after a successful submission.
    pub fn confirmation(&self) -> Option<&'static str> {
        self.submitted.then_some(CONFIRMATION_MESSAGE)
    }

    /// Submit the form once.
    ///
    /// On success the form becomes submitted. On failure the error is logged
    /// and returned, and the form stays editable. A submitted form is not
    /// sent again.
    pub async fn submit(
        &mut self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<(), BookingClientError> {
        if self.submitted {
            return Ok(());
        }

        let request = CreateBookingRequest {
            event_id: self.event_id.clone(),
            slug: self.slug.clone(),
            email: self.email.clone(),
        };
        match submitter.submit(request).await {
            Ok(booking) => {
                info!(booking_id = %booking.id, slug = %self.slug, "booking confirmed");
                self.submitted = true;
                Ok(())
            }
            Err(error) => {
                warn!(%error, slug = %self.slug, "booking creation failed");
                Err(error)
            }
        }
    }
}
