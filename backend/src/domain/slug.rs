//! Slug derivation and validation for event titles.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits, underscores, and single interior hyphens.

use super::Error;

/// Trim a slug supplied by a caller, rejecting blank input.
///
/// # Examples
/// ```
/// use event_rsvp::domain::{ErrorCode, require_slug};
///
/// assert_eq!(require_slug(" rust-meetup ").expect("present"), "rust-meetup");
/// let err = require_slug("   ").expect_err("blank");
/// assert_eq!(err.code(), ErrorCode::InvalidArgument);
/// ```
pub fn require_slug(raw: &str) -> Result<&str, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_argument("Valid slug parameter is required"));
    }
    Ok(trimmed)
}

/// Derive a URL-safe slug from a title.
///
/// The title is lower-cased and trimmed; characters outside ASCII word
/// characters, whitespace, and hyphens are dropped; runs of whitespace and
/// hyphens collapse to a single hyphen; leading and trailing hyphens are
/// removed. The result is stable under re-application.
///
/// # Examples
/// ```
/// use event_rsvp::domain::slugify;
///
/// assert_eq!(slugify("  Rust Meetup: Berlin 2025! "), "rust-meetup-berlin-2025");
/// assert_eq!(slugify("rust-meetup-berlin-2025"), "rust-meetup-berlin-2025");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if is_word_char(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}

/// Return `true` when `value` is already in canonical slug form.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| (is_word_char(ch) && !ch.is_ascii_uppercase()) || ch == '-')
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
