//! Booking aggregate: an email address reserving a seat at an event.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde_json::json;
use uuid::Uuid;

use super::{Error, EventId};

/// Stable booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors raised while building a booking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Event ID is required")]
    MissingEventId,
    #[error("Event ID '{value}' is not a valid identifier")]
    InvalidEventId { value: String },
    #[error("Email is required")]
    MissingEmail,
    #[error("Please provide a valid email address")]
    InvalidEmail,
}

impl From<BookingValidationError> for Error {
    fn from(value: BookingValidationError) -> Self {
        let field = match value {
            BookingValidationError::MissingEventId
            | BookingValidationError::InvalidEventId { .. } => "eventId",
            BookingValidationError::MissingEmail | BookingValidationError::InvalidEmail => "email",
        };
        Error::validation(value.to_string()).with_details(json!({ "field": field }))
    }
}

/// Parse the event reference submitted with a booking.
pub fn parse_event_reference(raw: &str) -> Result<EventId, BookingValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BookingValidationError::MissingEventId);
    }
    trimmed
        .parse()
        .map_err(|_| BookingValidationError::InvalidEventId {
            value: trimmed.to_owned(),
        })
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Normalised attendee email: trimmed, lower-cased, `local@domain.tld` shaped.
///
/// # Examples
/// ```
/// use event_rsvp::domain::BookingEmail;
///
/// let email = BookingEmail::parse("  Ada@Example.COM ").expect("valid email");
/// assert_eq!(email.as_ref(), "ada@example.com");
/// assert!(BookingEmail::parse("ada@example").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingEmail(String);

impl BookingEmail {
    /// Validate and normalise a submitted email address.
    pub fn parse(raw: &str) -> Result<Self, BookingValidationError> {
        let normalised = raw.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(BookingValidationError::MissingEmail);
        }
        if !email_regex().is_match(&normalised) {
            return Err(BookingValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for BookingEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seat reservation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub event_id: EventId,
    pub email: BookingEmail,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new booking stamped with `now`.
    pub fn new(id: BookingId, event_id: EventId, email: BookingEmail, now: DateTime<Utc>) -> Self {
        Self {
            id,
            event_id,
            email,
            created_at: now,
            updated_at: now,
        }
    }
}
