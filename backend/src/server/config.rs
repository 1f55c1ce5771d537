//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web_prom::PrometheusMetrics;
use event_rsvp::outbound::persistence::PgConnectionCache;

/// Everything needed to build the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) connections: Arc<PgConnectionCache>,
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Construct a server configuration without request metrics.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, connections: Arc<PgConnectionCache>) -> Self {
        Self {
            bind_addr,
            connections,
            prometheus: None,
        }
    }

    /// Instrument every request and serve `GET /metrics` when `Some`.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
