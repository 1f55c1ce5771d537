//! Backend entry-point: loads settings, prepares the database handle and
//! serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use prometheus::Registry;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use event_rsvp::inbound::http::health::HealthState;
use event_rsvp::outbound::persistence::{PgConnectionCache, run_pending_migrations};
use event_rsvp::settings::AppSettings;
use server::{ServerConfig, build_prometheus, create_server, initialize_metrics};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_env("event-rsvp").map_err(std::io::Error::other)?;
    let pool_config = settings.pool_config().map_err(|err| {
        error!(error = %err, "database configuration missing");
        std::io::Error::other(err)
    })?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;

    if settings.run_migrations {
        let url = pool_config.database_url().to_owned();
        let applied = web::block(move || run_pending_migrations(&url))
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?
            .map_err(std::io::Error::other)?;
        info!(applied, "database migrations complete");
    }

    let connections = Arc::new(PgConnectionCache::new(pool_config));
    if let Err(err) = connections.get().await {
        warn!(error = %err, "database unavailable at start-up; retrying on first request");
    }

    let prometheus = if settings.metrics {
        initialize_metrics(|| build_prometheus(Registry::new()))
    } else {
        None
    };

    let cache = connections.clone();
    let health_state = web::Data::new(
        HealthState::new().with_database_check(move || cache.is_connected()),
    );
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, connections).with_metrics(prometheus),
    )?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
