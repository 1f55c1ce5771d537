//! OpenAPI schema definitions for response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`, and the
//! runtime envelopes are generic. These wrappers mirror their JSON shape for
//! documentation only.

use utoipa::ToSchema;

use crate::inbound::http::bookings::BookingBody;
use crate::inbound::http::events::EventBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required parameter is missing or blank.
    #[schema(rename = "invalid_argument")]
    InvalidArgument,
    /// A field failed validation.
    #[schema(rename = "validation_error")]
    ValidationError,
    /// The date could not be parsed.
    #[schema(rename = "invalid_date")]
    InvalidDate,
    /// The time could not be parsed.
    #[schema(rename = "invalid_time")]
    InvalidTime,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A booking referenced an event that does not exist.
    #[schema(rename = "dangling_reference")]
    DanglingReference,
    /// The slug is already taken.
    #[schema(rename = "conflict")]
    Conflict,
    /// The store could not be reached.
    #[schema(rename = "connection_failure")]
    ConnectionFailure,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Failure envelope written by [`crate::inbound::http::error`].
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    /// Always `false`.
    #[schema(example = false)]
    success: bool,
    /// Human-readable message. Server-side failures are redacted.
    #[schema(example = "Event with slug 'rust-meetup' not found")]
    error: String,
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Correlation identifier, mirrored in the `trace-id` header.
    #[schema(rename = "traceId", format = "uuid")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// `{ success: true, data: Event }`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventEnvelope {
    #[schema(example = true)]
    success: bool,
    data: EventBody,
}

/// `{ success: true, data: [Event] }`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventListEnvelope {
    #[schema(example = true)]
    success: bool,
    data: Vec<EventBody>,
}

/// `{ success: true, data: Booking }`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingEnvelope {
    #[schema(example = true)]
    success: bool,
    data: BookingBody,
}
