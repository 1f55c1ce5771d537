//! Integration tests for the Diesel repositories against embedded PostgreSQL.
//!
//! Each test clones a migrated template into its own database using
//! `pg-embedded-setup-unpriv`. Tests are synchronous and drive the async
//! repositories through a per-test Tokio runtime, because the cluster
//! bootstrap cannot run inside a runtime.

use std::future::Future;
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use event_rsvp::domain::ports::{BookingRepository, EventRepository, EventRepositoryError};
use event_rsvp::domain::{
    Booking, BookingEmail, BookingId, Event, EventDraft, EventId, EventParts, EventPatch,
};
use event_rsvp::outbound::persistence::{
    DieselBookingRepository, DieselEventRepository, PgConnectionCache, PoolConfig,
};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::shared_cluster;
use support::{handle_cluster_setup_failure, provision_template_database};

struct TestContext {
    runtime: Runtime,
    events: DieselEventRepository,
    bookings: DieselBookingRepository,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster()?;
    let database = provision_template_database(cluster)?;

    let config = PoolConfig::new(database.url().to_string())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let cache = Arc::new(PgConnectionCache::new(config));
    runtime
        .block_on(cache.get())
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        events: DieselEventRepository::new(cache.clone()),
        bookings: DieselBookingRepository::new(cache),
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn draft(title: &str) -> EventDraft {
    EventDraft {
        title: title.into(),
        description: "Integration test event.".into(),
        overview: "Created by the repository suite.".into(),
        image: "/images/test.png".into(),
        venue: "Test Venue".into(),
        location: "Nowhere".into(),
        date: "March 15, 2025".into(),
        time: "9:05 am".into(),
        mode: "offline".into(),
        audience: "Testers".into(),
        agenda: vec!["Setup".into(), "Teardown".into()],
        organizer: "CI".into(),
        tags: vec!["test".into(), "postgres".into()],
    }
}

fn event(title: &str, minutes_after_noon: i64) -> Event {
    let created_at = Utc
        .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
        + Duration::minutes(minutes_after_noon);
    Event::create(EventId::random(), draft(title), created_at).expect("draft is valid")
}

fn parts_with_new_id(event: &Event) -> EventParts {
    EventParts {
        id: EventId::random(),
        slug: event.slug().to_owned(),
        title: event.title().to_owned(),
        description: event.description().to_owned(),
        overview: event.overview().to_owned(),
        image: event.image().to_owned(),
        venue: event.venue().to_owned(),
        location: event.location().to_owned(),
        date: event.date(),
        time: event.time(),
        mode: event.mode(),
        audience: event.audience().to_owned(),
        agenda: event.agenda().to_vec(),
        organizer: event.organizer().to_owned(),
        tags: event.tags().to_vec(),
        created_at: event.created_at(),
        updated_at: event.updated_at(),
    }
}

#[rstest]
fn event_round_trips_through_postgres(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let stored = event("Round Trip", 0);

    ctx.block_on(ctx.events.insert(&stored))
        .expect("insert succeeds");

    let by_slug = ctx
        .block_on(ctx.events.find_by_slug("round-trip"))
        .expect("lookup succeeds")
        .expect("event exists");
    assert_eq!(by_slug.id(), stored.id());
    assert_eq!(by_slug.date().to_string(), "2025-03-15");
    assert_eq!(by_slug.time().to_string(), "09:05");
    assert_eq!(by_slug.agenda(), ["Setup", "Teardown"]);
    assert_eq!(by_slug.tags(), ["test", "postgres"]);
    assert_eq!(by_slug.created_at(), stored.created_at());

    let by_id = ctx
        .block_on(ctx.events.find_by_id(&stored.id()))
        .expect("lookup succeeds");
    assert_eq!(by_id.map(|found| found.id()), Some(stored.id()));
}

#[rstest]
fn duplicate_slug_on_insert_is_reported(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let first = event("Duplicate", 0);
    ctx.block_on(ctx.events.insert(&first))
        .expect("first insert");

    let clash = Event::restore(parts_with_new_id(&first)).expect("valid parts");
    let err = ctx
        .block_on(ctx.events.insert(&clash))
        .expect_err("slug already taken");

    assert!(matches!(err, EventRepositoryError::DuplicateSlug { .. }));
}

#[rstest]
fn rename_onto_taken_slug_is_reported(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let taken = event("Taken Name", 0);
    let mut renamed = event("Other Name", 1);
    ctx.block_on(ctx.events.insert(&taken)).expect("insert taken");
    ctx.block_on(ctx.events.insert(&renamed))
        .expect("insert other");

    let changed = renamed
        .apply_patch(
            EventPatch {
                title: Some("Taken Name".into()),
                ..EventPatch::default()
            },
            Utc::now(),
        )
        .expect("patch is valid");
    assert!(changed);
    let err = ctx
        .block_on(ctx.events.update(&renamed))
        .expect_err("slug already taken");

    assert!(matches!(err, EventRepositoryError::DuplicateSlug { .. }));
}

#[rstest]
fn update_persists_changed_fields(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let mut stored = event("Before Rename", 0);
    ctx.block_on(ctx.events.insert(&stored)).expect("insert");

    stored
        .apply_patch(
            EventPatch {
                title: Some("After Rename".into()),
                tags: Some(vec!["renamed".into()]),
                ..EventPatch::default()
            },
            Utc::now(),
        )
        .expect("patch is valid");
    ctx.block_on(ctx.events.update(&stored)).expect("update");

    let old = ctx
        .block_on(ctx.events.find_by_slug("before-rename"))
        .expect("lookup succeeds");
    assert!(old.is_none());
    let new = ctx
        .block_on(ctx.events.find_by_slug("after-rename"))
        .expect("lookup succeeds")
        .expect("renamed event exists");
    assert_eq!(new.tags(), ["renamed"]);
}

#[rstest]
fn missing_event_is_none(context: Option<TestContext>) {
    let Some(ctx) = context else { return };

    let found = ctx
        .block_on(ctx.events.find_by_slug("no-such-event"))
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
fn list_orders_newest_first(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let older = event("Older Event", 0);
    let newer = event("Newer Event", 30);
    ctx.block_on(ctx.events.insert(&older)).expect("insert older");
    ctx.block_on(ctx.events.insert(&newer)).expect("insert newer");

    let listed = ctx.block_on(ctx.events.list()).expect("list succeeds");

    let slugs: Vec<&str> = listed.iter().map(Event::slug).collect();
    assert_eq!(slugs, ["newer-event", "older-event"]);
}

#[rstest]
fn booking_is_stored(context: Option<TestContext>) {
    let Some(ctx) = context else { return };
    let stored = event("Booking Target", 0);
    ctx.block_on(ctx.events.insert(&stored))
        .expect("insert event");

    let booking = Booking::new(
        BookingId::random(),
        stored.id(),
        BookingEmail::parse("Guest@Example.com").expect("valid email"),
        Utc::now(),
    );

    ctx.block_on(ctx.bookings.insert(&booking))
        .expect("booking insert succeeds");
}
