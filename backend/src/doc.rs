//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint and the envelope schemas from
//! [`crate::inbound::http::schemas`]. The document is served by Swagger UI in
//! debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::bookings::{BookingBody, CreateBookingRequestBody};
use crate::inbound::http::events::{CreateEventRequestBody, EventBody, UpdateEventRequestBody};
use crate::inbound::http::health::{DatabaseStatus, HealthBody, HealthStatus};
use crate::inbound::http::schemas::{
    BookingEnvelope, ErrorCodeSchema, ErrorEnvelopeSchema, EventEnvelope, EventListEnvelope,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event RSVP API",
        description = "Event listings, slug lookup and booking creation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::create_event,
        crate::inbound::http::events::get_event,
        crate::inbound::http::events::update_event,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EventBody,
        CreateEventRequestBody,
        UpdateEventRequestBody,
        BookingBody,
        CreateBookingRequestBody,
        EventEnvelope,
        EventListEnvelope,
        BookingEnvelope,
        ErrorEnvelopeSchema,
        ErrorCodeSchema,
        HealthBody,
        HealthStatus,
        DatabaseStatus
    )),
    tags(
        (name = "events", description = "Event listings and lookup"),
        (name = "bookings", description = "Seat reservations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/events")]
    #[case("/api/events/{slug}")]
    #[case("/api/bookings")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn error_envelope_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("ErrorEnvelope").expect("ErrorEnvelope schema");

        assert_object_schema_has_field(envelope, "success");
        assert_object_schema_has_field(envelope, "error");
        assert_object_schema_has_field(envelope, "code");
    }
}
