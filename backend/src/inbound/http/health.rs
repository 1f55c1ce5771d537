//! Health endpoints for orchestrators.
//!
//! `GET /health/ready` answers 503 until the server is built, and
//! `GET /health/live` answers 503 once shutdown begins. Both bodies also
//! report whether the shared database connection has been established; the
//! connection opens lazily, so a pending database does not fail readiness.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

type ConnectionCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// Readiness and liveness flags shared with the health handlers.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    database: Option<ConnectionCheck>,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            database: None,
        }
    }
}

impl HealthState {
    /// Start live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report database connectivity through `check` in health bodies.
    #[must_use]
    pub fn with_database_check(mut self, check: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.database = Some(Arc::new(check));
        self
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn database_status(&self) -> DatabaseStatus {
        match &self.database {
            None => DatabaseStatus::Unchecked,
            Some(check) if check() => DatabaseStatus::Connected,
            Some(_) => DatabaseStatus::Pending,
        }
    }

    fn report(&self, ok: bool, status: HealthStatus) -> HttpResponse {
        let mut response = if ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(HealthBody {
                status,
                database: self.database_status(),
            })
    }
}

/// Health check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ready,
    Starting,
    Alive,
    Draining,
}

/// State of the shared database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Connected,
    Pending,
    Unchecked,
}

/// Body returned by both health endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthBody {
    status: HealthStatus,
    database: DatabaseStatus,
}

/// Readiness check.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = HealthBody),
        (status = 503, description = "Server is still starting", body = HealthBody)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_ready() {
        state.report(true, HealthStatus::Ready)
    } else {
        state.report(false, HealthStatus::Starting)
    }
}

/// Liveness check.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = HealthBody),
        (status = 503, description = "Server is shutting down", body = HealthBody)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    if state.is_alive() {
        state.report(true, HealthStatus::Alive)
    } else {
        state.report(false, HealthStatus::Draining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn fetch(state: HealthState, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(ready)
                .service(live),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(
            res.headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let status = res.status();
        (status, test::read_body_json(res).await)
    }

    #[rstest]
    #[case(false, "/health/ready", StatusCode::SERVICE_UNAVAILABLE, "starting")]
    #[case(true, "/health/ready", StatusCode::OK, "ready")]
    #[case(false, "/health/live", StatusCode::OK, "alive")]
    #[actix_web::test]
    async fn endpoints_reflect_state(
        #[case] mark_ready: bool,
        #[case] uri: &str,
        #[case] expected: StatusCode,
        #[case] status: &str,
    ) {
        let state = HealthState::new();
        if mark_ready {
            state.mark_ready();
        }

        let (code, body) = fetch(state, uri).await;

        assert_eq!(code, expected);
        assert_eq!(body, json!({ "status": status, "database": "unchecked" }));
    }

    #[actix_web::test]
    async fn draining_fails_liveness() {
        let state = HealthState::new();
        state.mark_unhealthy();

        let (code, body) = fetch(state, "/health/live").await;

        assert_eq!(code, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "draining");
    }

    #[rstest]
    #[case(true, "connected")]
    #[case(false, "pending")]
    #[actix_web::test]
    async fn readiness_reports_database_without_gating(
        #[case] connected: bool,
        #[case] expected: &str,
    ) {
        let state = HealthState::new().with_database_check(move || connected);
        state.mark_ready();

        let (code, body) = fetch(state, "/health/ready").await;

        assert_eq!(code, StatusCode::OK);
        assert_eq!(body["database"], expected);
    }
}
