//! Calendar date and time-of-day normalisation for events.
//!
//! Events store their date as ISO `YYYY-MM-DD` and their time as 24-hour
//! `HH:MM`. Organisers submit free-form text, so writes pass through
//! [`normalize_date`] and [`normalize_time`] before persistence.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;

use super::event::EventValidationError;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%A, %d %B %Y",
];

/// Timestamps without an offset, such as `datetime-local` form values. The
/// calendar date is taken as written.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Calendar date of an event, rendered as ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Wrap an already-valid calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the underlying calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Time of day of an event, rendered as 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventTime(NaiveTime);

impl EventTime {
    /// Build a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Access the underlying time of day.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl std::fmt::Display for EventTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Parse a calendar date from common textual forms.
///
/// Timestamps carrying an offset are converted to UTC before the date is
/// taken, so `2025-06-01T23:30:00-02:00` yields `2025-06-02`.
///
/// # Examples
/// ```
/// use event_rsvp::domain::normalize_date;
///
/// let date = normalize_date("March 7, 2025").expect("valid date");
/// assert_eq!(date.to_string(), "2025-03-07");
/// assert!(normalize_date("not-a-date").is_err());
/// ```
pub fn normalize_date(input: &str) -> Result<EventDate, EventValidationError> {
    let trimmed = input.trim();
    let invalid = || EventValidationError::InvalidDate {
        value: input.to_owned(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Ok(EventDate(date));
    }

    if let Some(timestamp) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(EventDate(timestamp.date()));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
        .map(|timestamp| EventDate(timestamp.with_timezone(&Utc).date_naive()))
        .map_err(|_| invalid())
}

static STRICT_TIME_RE: OnceLock<Regex> = OnceLock::new();
static LOOSE_TIME_RE: OnceLock<Regex> = OnceLock::new();

fn strict_time_regex() -> &'static Regex {
    STRICT_TIME_RE.get_or_init(|| {
        Regex::new("^([01][0-9]|2[0-3]):([0-5][0-9])$")
            .unwrap_or_else(|error| panic!("strict time regex failed to compile: {error}"))
    })
}

fn loose_time_regex() -> &'static Regex {
    LOOSE_TIME_RE.get_or_init(|| {
        Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(am|pm)?$")
            .unwrap_or_else(|error| panic!("loose time regex failed to compile: {error}"))
    })
}

/// Parse a time of day into 24-hour form.
///
/// Strict `HH:MM` input is kept as is. Otherwise `H:MM` and `H:MM am|pm`
/// (any case, optional space) are accepted, with `12pm` mapping to noon and
/// `12am` to midnight. Out-of-range components are rejected.
///
/// # Examples
/// ```
/// use event_rsvp::domain::normalize_time;
///
/// assert_eq!(normalize_time("2:30 PM").expect("valid").to_string(), "14:30");
/// assert_eq!(normalize_time("12:00 AM").expect("valid").to_string(), "00:00");
/// assert!(normalize_time("25:00").is_err());
/// ```
pub fn normalize_time(input: &str) -> Result<EventTime, EventValidationError> {
    let invalid = || EventValidationError::InvalidTime {
        value: input.to_owned(),
    };

    let (hour, minute, meridiem) = if let Some(caps) = strict_time_regex().captures(input) {
        (parse_component(&caps, 1), parse_component(&caps, 2), None)
    } else {
        let caps = loose_time_regex()
            .captures(input.trim())
            .ok_or_else(invalid)?;
        let meridiem = caps.get(3).map(|m| m.as_str().eq_ignore_ascii_case("pm"));
        (parse_component(&caps, 1), parse_component(&caps, 2), meridiem)
    };

    let (Some(hour), Some(minute)) = (hour, minute) else {
        return Err(invalid());
    };
    let hour = match meridiem {
        None if hour < 24 => hour,
        Some(is_pm) if (1..=12).contains(&hour) => match (is_pm, hour) {
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, 12) => 0,
            (false, h) => h,
        },
        _ => return Err(invalid()),
    };

    EventTime::from_hm(hour, minute).ok_or_else(invalid)
}

fn parse_component(caps: &regex::Captures<'_>, index: usize) -> Option<u32> {
    caps.get(index).and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
