//! HTTP inbound adapter exposing REST endpoints.

pub mod bookings;
pub mod error;
pub mod events;
pub mod health;
pub mod response;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

use crate::domain::Error;

pub use error::ApiResult;

/// JSON extractor settings turning malformed bodies into domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_argument(format!("Invalid request body: {err}")).into()
    })
}

/// Register the `/api` handlers on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use event_rsvp::inbound::http::configure_api;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(events::list_events)
        .service(events::create_event)
        .service(events::get_event)
        .service(events::update_event)
        .service(bookings::create_booking);
}
