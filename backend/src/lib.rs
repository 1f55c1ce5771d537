//! Event listing and RSVP backend.
//!
//! Hexagonal layout: [`domain`] holds the event and booking rules and the
//! ports they depend on, [`inbound`] exposes them over HTTP and
//! [`outbound`] stores them in PostgreSQL. [`client`] is the booking form
//! used by the `book-event` binary.

pub mod client;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
