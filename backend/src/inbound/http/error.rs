//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the `{ success: false, ... }`
//! envelope and a matching status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message returned in place of server-side failure details.
pub const REDACTED_MESSAGE: &str = "An unexpected error occurred while processing the request";

/// Failure envelope written for every domain error.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    success: bool,
    error: String,
    code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidArgument
        | ErrorCode::ValidationError
        | ErrorCode::InvalidDate
        | ErrorCode::InvalidTime => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound | ErrorCode::DanglingReference => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ConnectionFailure | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn is_server_side(code: ErrorCode) -> bool {
    matches!(
        code,
        ErrorCode::ConnectionFailure | ErrorCode::InternalError
    )
}

impl From<&Error> for ErrorEnvelope {
    fn from(error: &Error) -> Self {
        let (message, details) = if is_server_side(error.code()) {
            (REDACTED_MESSAGE.to_owned(), None)
        } else {
            (error.message().to_owned(), error.details().cloned())
        };
        Self {
            success: false,
            error: message,
            code: error.code(),
            trace_id: error.trace_id().map(str::to_owned),
            details,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if is_server_side(self.code()) {
            error!(code = ?self.code(), message = self.message(), "request failed");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(ErrorEnvelope::from(self))
    }
}
