//! Server construction and middleware wiring.

mod config;
mod metrics;

pub use config::ServerConfig;
pub(crate) use metrics::{build_prometheus, initialize_metrics};

use metrics::RequestMetrics;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use event_rsvp::Trace;
#[cfg(debug_assertions)]
use event_rsvp::doc::ApiDoc;
use event_rsvp::domain::{BookingService, EventService};
use event_rsvp::inbound::http::configure_api;
use event_rsvp::inbound::http::health::{HealthState, live, ready};
use event_rsvp::inbound::http::state::HttpState;
use event_rsvp::outbound::persistence::{
    DieselBookingRepository, DieselEventRepository, PgConnectionCache,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Wire the Diesel repositories into the domain services.
fn build_http_state(connections: Arc<PgConnectionCache>) -> HttpState {
    let clock = Arc::new(DefaultClock);
    let event_repo = Arc::new(DieselEventRepository::new(connections.clone()));
    let booking_repo = Arc::new(DieselBookingRepository::new(connections));
    let events = Arc::new(EventService::new(event_repo.clone(), clock.clone()));
    let bookings = Arc::new(BookingService::new(event_repo, booking_repo, clock));
    HttpState::new(events.clone(), events, bookings)
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    metrics: RequestMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .wrap(metrics)
        .service(web::scope("/api").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        connections,
        prometheus,
    } = config;
    let metrics_enabled = prometheus.is_some();
    let metrics = RequestMetrics::new(prometheus);
    let http_state = web::Data::new(build_http_state(connections));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            metrics.clone(),
        )
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, metrics_enabled, "http server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use prometheus::Registry;

    fn app_with(
        metrics: RequestMetrics,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        build_app(health, web::Data::new(HttpState::fixtures()), metrics)
    }

    #[actix_web::test]
    async fn requests_increment_the_counter() {
        let prometheus = build_prometheus(Registry::new()).expect("metrics build");
        let app = test::init_service(app_with(RequestMetrics::new(Some(prometheus)))).await;

        for _ in 0..2 {
            let res = test::call_service(
                &app,
                test::TestRequest::get().uri("/api/events").to_request(),
            )
            .await;
            assert_eq!(res.status(), StatusCode::OK);
        }

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf8 exposition");
        assert!(
            body.contains(
                r#"rsvp_http_requests_total{endpoint="/api/events",method="GET",status="200"} 2"#
            ),
            "unexpected exposition:\n{body}"
        );
    }

    #[actix_web::test]
    async fn metrics_route_is_absent_when_disabled() {
        let app = test::init_service(app_with(RequestMetrics::new(None))).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn api_still_served_through_the_layer() {
        let prometheus = build_prometheus(Registry::new()).expect("metrics build");
        let app = test::init_service(app_with(RequestMetrics::new(Some(prometheus)))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("trace-id"));
    }
}
