//! Event HTTP handlers.
//!
//! ```text
//! GET   /api/events
//! POST  /api/events
//! GET   /api/events/{slug}
//! PATCH /api/events/{slug}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Event, EventDraft, EventPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response;
use crate::inbound::http::schemas::{ErrorEnvelopeSchema, EventEnvelope, EventListEnvelope};
use crate::inbound::http::state::HttpState;

/// Event as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(example = "rust-meetup-berlin")]
    pub slug: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    #[schema(example = "2025-06-12")]
    pub date: String,
    #[schema(example = "18:30")]
    pub time: String,
    #[schema(example = "offline")]
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

impl From<&Event> for EventBody {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            slug: event.slug().to_owned(),
            title: event.title().to_owned(),
            description: event.description().to_owned(),
            overview: event.overview().to_owned(),
            image: event.image().to_owned(),
            venue: event.venue().to_owned(),
            location: event.location().to_owned(),
            date: event.date().to_string(),
            time: event.time().to_string(),
            mode: event.mode().to_string(),
            audience: event.audience().to_owned(),
            agenda: event.agenda().to_vec(),
            organizer: event.organizer().to_owned(),
            tags: event.tags().to_vec(),
            created_at: event.created_at().to_rfc3339(),
            updated_at: event.updated_at().to_rfc3339(),
        }
    }
}

/// Request payload for creating an event.
///
/// Missing fields deserialise as empty so the domain reports which field is
/// required rather than a generic decoding failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateEventRequestBody {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    /// Free-form date, e.g. `2025-06-12` or `June 12, 2025`.
    pub date: String,
    /// `HH:MM` or `H:MM AM/PM`.
    pub time: String,
    /// `online`, `offline` or `hybrid`.
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

impl From<CreateEventRequestBody> for EventDraft {
    fn from(body: CreateEventRequestBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            overview: body.overview,
            image: body.image,
            venue: body.venue,
            location: body.location,
            date: body.date,
            time: body.time,
            mode: body.mode,
            audience: body.audience,
            agenda: body.agenda,
            organizer: body.organizer,
            tags: body.tags,
        }
    }
}

/// Request payload for a partial event update. Absent fields are untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequestBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub image: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub mode: Option<String>,
    pub audience: Option<String>,
    pub agenda: Option<Vec<String>>,
    pub organizer: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl From<UpdateEventRequestBody> for EventPatch {
    fn from(body: UpdateEventRequestBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            overview: body.overview,
            image: body.image,
            venue: body.venue,
            location: body.location,
            date: body.date,
            time: body.time,
            mode: body.mode,
            audience: body.audience,
            agenda: body.agenda,
            organizer: body.organizer,
            tags: body.tags,
        }
    }
}

/// List all events, newest first.
#[utoipa::path(
    get,
    path = "/api/events",
    tags = ["events"],
    responses(
        (status = 200, description = "All events", body = EventListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    )
)]
#[get("/events")]
pub async fn list_events(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let events = state.events.list_events().await?;
    let bodies: Vec<EventBody> = events.iter().map(EventBody::from).collect();
    Ok(response::ok(bodies))
}

/// Create an event. Slug, date and time are normalised before storage.
#[utoipa::path(
    post,
    path = "/api/events",
    tags = ["events"],
    request_body = CreateEventRequestBody,
    responses(
        (status = 201, description = "Event created", body = EventEnvelope),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 409, description = "Slug already taken", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    )
)]
#[post("/events")]
pub async fn create_event(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEventRequestBody>,
) -> ApiResult<HttpResponse> {
    let event = state
        .events_command
        .create_event(payload.into_inner().into())
        .await?;
    Ok(response::created(EventBody::from(&event)))
}

/// Fetch a single event by slug.
#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    tags = ["events"],
    params(("slug" = String, Path, description = "Canonical event slug")),
    responses(
        (status = 200, description = "Event found", body = EventEnvelope),
        (status = 400, description = "Blank slug", body = ErrorEnvelopeSchema),
        (status = 404, description = "No event with this slug", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    )
)]
#[get("/events/{slug}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let event = state.events.find_by_slug(slug.as_str()).await?;
    Ok(response::ok(EventBody::from(&event)))
}

/// Apply a partial update to an event.
#[utoipa::path(
    patch,
    path = "/api/events/{slug}",
    tags = ["events"],
    params(("slug" = String, Path, description = "Canonical event slug")),
    request_body = UpdateEventRequestBody,
    responses(
        (status = 200, description = "Event updated", body = EventEnvelope),
        (status = 400, description = "Invalid request", body = ErrorEnvelopeSchema),
        (status = 404, description = "No event with this slug", body = ErrorEnvelopeSchema),
        (status = 409, description = "Slug already taken", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    )
)]
#[patch("/events/{slug}")]
pub async fn update_event(
    state: web::Data<HttpState>,
    slug: web::Path<String>,
    payload: web::Json<UpdateEventRequestBody>,
) -> ApiResult<HttpResponse> {
    let patch = EventPatch::from(payload.into_inner());
    if patch.is_empty() {
        return Err(Error::invalid_argument(
            "At least one field must be provided",
        ));
    }
    let event = state
        .events_command
        .update_event(slug.as_str(), patch)
        .await?;
    Ok(response::ok(EventBody::from(&event)))
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
