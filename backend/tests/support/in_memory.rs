//! In-memory repository adapters for exercising the domain services end to
//! end without PostgreSQL.

use std::sync::Mutex;

use async_trait::async_trait;
use event_rsvp::domain::ports::{
    BookingRepository, BookingRepositoryError, EventRepository, EventRepositoryError,
};
use event_rsvp::domain::{Booking, Event, EventId};

/// Event store keyed by id with a unique slug constraint.
#[derive(Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<Event>>,
}

impl InMemoryEventRepository {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Event>>, EventRepositoryError> {
        self.events
            .lock()
            .map_err(|_| EventRepositoryError::connection("event store poisoned"))
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut events = self.lock()?;
        if events.iter().any(|stored| stored.slug() == event.slug()) {
            return Err(EventRepositoryError::duplicate_slug(event.slug()));
        }
        events.push(event.clone());
        Ok(())
    }

    async fn update(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut events = self.lock()?;
        if events
            .iter()
            .any(|stored| stored.id() != event.id() && stored.slug() == event.slug())
        {
            return Err(EventRepositoryError::duplicate_slug(event.slug()));
        }
        let slot = events
            .iter_mut()
            .find(|stored| stored.id() == event.id())
            .ok_or_else(|| EventRepositoryError::query("event not found for update"))?;
        *slot = event.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, EventRepositoryError> {
        Ok(self.lock()?.iter().find(|event| event.id() == *id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|event| event.slug() == slug)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, EventRepositoryError> {
        let mut events = self.lock()?.clone();
        events.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(events)
    }
}

/// Append-only booking store.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    /// Snapshot of the stored bookings.
    pub fn stored(&self) -> Vec<Booking> {
        self.bookings
            .lock()
            .map(|bookings| bookings.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &Booking) -> Result<(), BookingRepositoryError> {
        self.bookings
            .lock()
            .map_err(|_| BookingRepositoryError::connection("booking store poisoned"))?
            .push(booking.clone());
        Ok(())
    }
}
