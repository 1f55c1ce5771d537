//! Event aggregate and its write-path normalisation.
//!
//! Events are created from an [`EventDraft`] of raw organiser input and
//! modified through an [`EventPatch`]. Both paths run the same pipeline:
//! required text fields are trimmed and checked, the slug is derived from the
//! title, and the date and time are normalised. Derived fields are recomputed
//! only when their source field changes.

use chrono::{DateTime, Utc};
use serde_json::json;
use uuid::Uuid;

use super::schedule::{EventDate, EventTime, normalize_date, normalize_time};
use super::slug::{is_valid_slug, slugify};
use super::Error;

/// Stable event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// How attendees take part in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventMode {
    Online,
    Offline,
    Hybrid,
}

impl EventMode {
    /// Stable lowercase representation used in storage and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Hybrid => "hybrid",
        }
    }
}

impl std::fmt::Display for EventMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventMode {
    type Err = EventValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(EventValidationError::InvalidMode {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validation errors raised while normalising event input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    #[error("{label} is required")]
    MissingField {
        field: &'static str,
        label: &'static str,
    },
    #[error("Agenda must have at least one item")]
    EmptyAgenda,
    #[error("At least one tag is required")]
    EmptyTags,
    #[error("Title must contain at least one letter or digit")]
    EmptySlug,
    #[error("Slug '{value}' is not in canonical form")]
    InvalidSlug { value: String },
    #[error("Mode must be one of online, offline or hybrid")]
    InvalidMode { value: String },
    #[error("Invalid date format. Please provide a valid date.")]
    InvalidDate { value: String },
    #[error("Invalid time format. Use HH:MM or HH:MM AM/PM format.")]
    InvalidTime { value: String },
}

impl EventValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => field,
            Self::EmptyAgenda => "agenda",
            Self::EmptyTags => "tags",
            Self::EmptySlug => "title",
            Self::InvalidSlug { .. } => "slug",
            Self::InvalidMode { .. } => "mode",
            Self::InvalidDate { .. } => "date",
            Self::InvalidTime { .. } => "time",
        }
    }
}

impl From<EventValidationError> for Error {
    fn from(value: EventValidationError) -> Self {
        let details = json!({ "field": value.field() });
        let message = value.to_string();
        match value {
            EventValidationError::InvalidDate { .. } => Error::invalid_date(message),
            EventValidationError::InvalidTime { .. } => Error::invalid_time(message),
            _ => Error::validation(message),
        }
        .with_details(details)
    }
}

/// Raw organiser input for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
}

/// Partial update to an existing event. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub overview: Option<String>,
    pub image: Option<String>,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub mode: Option<String>,
    pub audience: Option<String>,
    pub agenda: Option<Vec<String>>,
    pub organizer: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl EventPatch {
    /// Return `true` when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Stored field values used to rebuild an [`Event`] from persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParts {
    pub id: EventId,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: EventDate,
    pub time: EventTime,
    pub mode: EventMode,
    pub audience: String,
    pub agenda: Vec<String>,
    pub organizer: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A published event.
///
/// ## Invariants
/// - `slug` is the canonical slug of `title` as of its last change.
/// - Required text fields are trimmed and non-empty.
/// - `agenda` and `tags` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    slug: String,
    title: String,
    description: String,
    overview: String,
    image: String,
    venue: String,
    location: String,
    date: EventDate,
    time: EventTime,
    mode: EventMode,
    audience: String,
    agenda: Vec<String>,
    organizer: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn required_text(
    value: &str,
    field: &'static str,
    label: &'static str,
) -> Result<String, EventValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EventValidationError::MissingField { field, label });
    }
    Ok(trimmed.to_owned())
}

fn required_untrimmed(
    value: &str,
    field: &'static str,
    label: &'static str,
) -> Result<String, EventValidationError> {
    if value.trim().is_empty() {
        return Err(EventValidationError::MissingField { field, label });
    }
    Ok(value.to_owned())
}

fn non_empty_list(
    items: &[String],
    empty: EventValidationError,
) -> Result<Vec<String>, EventValidationError> {
    if items.is_empty() {
        return Err(empty);
    }
    Ok(items.to_vec())
}

fn title_slug(title: &str) -> Result<String, EventValidationError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(EventValidationError::EmptySlug);
    }
    Ok(slug)
}

impl Event {
    /// Validate and normalise a draft into a new event.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use event_rsvp::domain::{Event, EventDraft, EventId};
    ///
    /// let draft = EventDraft {
    ///     title: "Rust Meetup".into(),
    ///     description: "Talks".into(),
    ///     overview: "An evening of Rust".into(),
    ///     image: "/images/rust.png".into(),
    ///     venue: "Hall A".into(),
    ///     location: "Berlin".into(),
    ///     date: "June 1, 2025".into(),
    ///     time: "6:30 pm".into(),
    ///     mode: "offline".into(),
    ///     audience: "Developers".into(),
    ///     agenda: vec!["Welcome".into()],
    ///     organizer: "Rust Berlin".into(),
    ///     tags: vec!["rust".into()],
    /// };
    /// let event = Event::create(EventId::random(), draft, Utc::now()).expect("valid draft");
    /// assert_eq!(event.slug(), "rust-meetup");
    /// assert_eq!(event.date().to_string(), "2025-06-01");
    /// assert_eq!(event.time().to_string(), "18:30");
    /// ```
    pub fn create(
        id: EventId,
        draft: EventDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, EventValidationError> {
        let title = required_text(&draft.title, "title", "Title")?;
        let slug = title_slug(&title)?;
        required_untrimmed(&draft.date, "date", "Date")?;
        required_untrimmed(&draft.time, "time", "Time")?;
        required_untrimmed(&draft.mode, "mode", "Mode")?;

        Ok(Self {
            id,
            slug,
            title,
            description: required_text(&draft.description, "description", "Description")?,
            overview: required_text(&draft.overview, "overview", "Overview")?,
            image: required_untrimmed(&draft.image, "image", "Image")?,
            venue: required_text(&draft.venue, "venue", "Venue")?,
            location: required_text(&draft.location, "location", "Location")?,
            date: normalize_date(&draft.date)?,
            time: normalize_time(&draft.time)?,
            mode: draft.mode.parse()?,
            audience: required_text(&draft.audience, "audience", "Audience")?,
            agenda: non_empty_list(&draft.agenda, EventValidationError::EmptyAgenda)?,
            organizer: required_text(&draft.organizer, "organizer", "Organizer")?,
            tags: non_empty_list(&draft.tags, EventValidationError::EmptyTags)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild an event from stored values, re-checking invariants that
    /// the store does not enforce.
    pub fn restore(parts: EventParts) -> Result<Self, EventValidationError> {
        if !is_valid_slug(&parts.slug) {
            return Err(EventValidationError::InvalidSlug { value: parts.slug });
        }
        let agenda = non_empty_list(&parts.agenda, EventValidationError::EmptyAgenda)?;
        let tags = non_empty_list(&parts.tags, EventValidationError::EmptyTags)?;
        Ok(Self {
            id: parts.id,
            slug: parts.slug,
            title: parts.title,
            description: parts.description,
            overview: parts.overview,
            image: parts.image,
            venue: parts.venue,
            location: parts.location,
            date: parts.date,
            time: parts.time,
            mode: parts.mode,
            audience: parts.audience,
            agenda,
            organizer: parts.organizer,
            tags,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        })
    }

    /// Apply a partial update, returning `true` when any field changed.
    ///
    /// The slug is recomputed only when the trimmed title differs from the
    /// current one; date and time are normalised only when supplied. The
    /// event is left untouched when validation fails.
    pub fn apply_patch(
        &mut self,
        patch: EventPatch,
        now: DateTime<Utc>,
    ) -> Result<bool, EventValidationError> {
        let mut next = self.clone();

        if let Some(title) = patch.title {
            let title = required_text(&title, "title", "Title")?;
            if title != next.title {
                next.slug = title_slug(&title)?;
                next.title = title;
            }
        }
        if let Some(value) = patch.description {
            next.description = required_text(&value, "description", "Description")?;
        }
        if let Some(value) = patch.overview {
            next.overview = required_text(&value, "overview", "Overview")?;
        }
        if let Some(value) = patch.image {
            next.image = required_untrimmed(&value, "image", "Image")?;
        }
        if let Some(value) = patch.venue {
            next.venue = required_text(&value, "venue", "Venue")?;
        }
        if let Some(value) = patch.location {
            next.location = required_text(&value, "location", "Location")?;
        }
        if let Some(value) = patch.date {
            next.date = normalize_date(&value)?;
        }
        if let Some(value) = patch.time {
            next.time = normalize_time(&value)?;
        }
        if let Some(value) = patch.mode {
            next.mode = value.parse()?;
        }
        if let Some(value) = patch.audience {
            next.audience = required_text(&value, "audience", "Audience")?;
        }
        if let Some(items) = patch.agenda {
            next.agenda = non_empty_list(&items, EventValidationError::EmptyAgenda)?;
        }
        if let Some(value) = patch.organizer {
            next.organizer = required_text(&value, "organizer", "Organizer")?;
        }
        if let Some(items) = patch.tags {
            next.tags = non_empty_list(&items, EventValidationError::EmptyTags)?;
        }

        if next == *self {
            return Ok(false);
        }
        next.updated_at = now;
        *self = next;
        Ok(true)
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> EventDate {
        self.date
    }

    pub fn time(&self) -> EventTime {
        self.time
    }

    pub fn mode(&self) -> EventMode {
        self.mode
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    pub fn organizer(&self) -> &str {
        &self.organizer
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
