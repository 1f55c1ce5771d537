//! Reqwest-backed booking submitter.
//!
//! This adapter owns transport details only: JSON serialisation, timeout,
//! and decoding of the `{ success, data | error }` envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::form::{BookingClientError, BookingSubmitter};
use crate::domain::ports::CreateBookingRequest;
use crate::inbound::http::bookings::BookingBody;

const BOOKINGS_PATH: &str = "api/bookings";

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    data: Option<BookingBody>,
    error: Option<String>,
}

/// Submitter posting to `POST /api/bookings` on one server.
pub struct HttpBookingClient {
    client: Client,
    endpoint: Url,
}

impl HttpBookingClient {
    /// Build a client for the API served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL cannot be joined or the reqwest client
    /// cannot be constructed.
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, BookingClientError> {
        let endpoint = base_url
            .join(BOOKINGS_PATH)
            .map_err(|error| BookingClientError::Transport {
                message: format!("invalid base URL: {error}"),
            })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport_error)?;
        Ok(Self { client, endpoint })
    }

    /// URL bookings are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BookingSubmitter for HttpBookingClient {
    async fn submit(
        &self,
        request: CreateBookingRequest,
    ) -> Result<BookingBody, BookingClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        decode_response(status, body.as_ref())
    }
}

fn map_transport_error(error: reqwest::Error) -> BookingClientError {
    BookingClientError::Transport {
        message: error.to_string(),
    }
}

fn decode_response(status: StatusCode, body: &[u8]) -> Result<BookingBody, BookingClientError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|error| BookingClientError::Decode {
            message: format!("status {status}: {error}"),
        })?;

    match envelope {
        Envelope {
            success: true,
            data: Some(booking),
            ..
        } => Ok(booking),
        Envelope { success: true, .. } => Err(BookingClientError::Decode {
            message: "success response without data".to_owned(),
        }),
        Envelope { error, .. } => Err(BookingClientError::Rejected {
            status: status.as_u16(),
            message: error.unwrap_or_else(|| "unknown error".to_owned()),
        }),
    }
}
