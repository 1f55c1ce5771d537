//! PostgreSQL-backed `BookingRepository` implementation using Diesel ORM.

use std::sync::Arc;

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::Booking;
use crate::domain::ports::{BookingRepository, BookingRepositoryError};

use super::connection_cache::PgConnectionCache;
use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewBookingRow;
use super::schema::bookings;

/// Diesel-backed implementation of the `BookingRepository` port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    connections: Arc<PgConnectionCache>,
}

impl DieselBookingRepository {
    /// Create a repository drawing connections from the shared cache.
    pub fn new(connections: Arc<PgConnectionCache>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        let mut conn = self
            .connections
            .checkout()
            .await
            .map_err(|err| map_basic_pool_error(err, BookingRepositoryError::connection))?;

        diesel::insert_into(bookings::table)
            .values(&NewBookingRow::from(booking))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    BookingRepositoryError::query,
                    BookingRepositoryError::connection,
                )
            })
    }
}
