//! Request instrumentation at the application root.
//!
//! Every request passes through [`RequestMetrics`]. With Prometheus
//! configured it counts requests and records latency per endpoint, method and
//! status, and answers `GET /metrics`; without it the layer only erases the
//! body type so the app type is the same either way.

use std::sync::Arc;

use actix_service::boxed::{self, BoxService};
use actix_service::{Service, ServiceExt as _, Transform};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use prometheus::Registry;
use tracing::warn;

/// Metric name prefix, e.g. `rsvp_http_requests_total`.
pub(crate) const METRICS_NAMESPACE: &str = "rsvp";
/// Path serving the Prometheus text exposition.
pub(crate) const METRICS_PATH: &str = "/metrics";

/// Build Prometheus middleware recording into `registry`.
pub(crate) fn build_prometheus(
    registry: Registry,
) -> Result<PrometheusMetrics, Box<dyn std::error::Error + Send + Sync>> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_PATH)
        .registry(registry)
        .build()
}

/// Run `build`, logging and discarding a failure so the server starts
/// without instrumentation.
pub(crate) fn initialize_metrics<F, E>(build: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    build()
        .inspect_err(|err| warn!(error = %err, "metrics disabled: Prometheus setup failed"))
        .ok()
}

/// Optional Prometheus layer.
#[derive(Clone)]
pub(crate) struct RequestMetrics {
    prometheus: Option<Arc<PrometheusMetrics>>,
}

impl RequestMetrics {
    pub(crate) fn new(prometheus: Option<PrometheusMetrics>) -> Self {
        Self {
            prometheus: prometheus.map(Arc::new),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(prometheus) = self.prometheus.clone() else {
            let passthrough = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(async move { Ok(boxed::service(passthrough)) });
        };
        let instrumented = Compat::new((*prometheus).clone()).new_transform(service);
        Box::pin(async move { Ok(boxed::service(instrumented.await?)) })
    }
}
