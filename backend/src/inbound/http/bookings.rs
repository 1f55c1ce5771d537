//! Booking HTTP handlers.
//!
//! ```text
//! POST /api/bookings
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Booking;
use crate::domain::ports::CreateBookingRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::response;
use crate::inbound::http::schemas::{BookingEnvelope, ErrorEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Booking form submission.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequestBody {
    /// Identifier of the event being booked.
    #[schema(format = "uuid")]
    pub event_id: String,
    /// Slug of the page the form was submitted from.
    pub slug: String,
    #[schema(example = "guest@example.com")]
    pub email: String,
}

impl From<CreateBookingRequestBody> for CreateBookingRequest {
    fn from(body: CreateBookingRequestBody) -> Self {
        Self {
            event_id: body.event_id,
            slug: body.slug,
            email: body.email,
        }
    }
}

/// Stored booking as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub event_id: String,
    pub email: String,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<&Booking> for BookingBody {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            event_id: booking.event_id.to_string(),
            email: booking.email.to_string(),
            created_at: booking.created_at.to_rfc3339(),
            updated_at: booking.updated_at.to_rfc3339(),
        }
    }
}

/// Book a seat at an event.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tags = ["bookings"],
    request_body = CreateBookingRequestBody,
    responses(
        (status = 201, description = "Booking stored", body = BookingEnvelope),
        (status = 400, description = "Invalid submission", body = ErrorEnvelopeSchema),
        (status = 404, description = "Referenced event does not exist", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    )
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequestBody>,
) -> ApiResult<HttpResponse> {
    let booking = state
        .bookings
        .create_booking(payload.into_inner().into())
        .await?;
    Ok(response::created(BookingBody::from(&booking)))
}
