//! ISO-8601 timestamps as sent by the WordPress REST API.
//!
//! The API writes site-local and `_gmt` dates without an offset
//! (`2020-01-02T03:04:05`), while other endpoints and plugins may append one
//! (`2020-01-02T03:04:05Z`, `2020-01-02T03:04:05+02:00`). Both forms are
//! accepted and kept apart, so a naive value is never silently assigned a
//! time zone.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;
use thiserror::Error;

use crate::error::json_kind;

/// Format used for naive date-times, both for parsing and for formatting.
///
/// `%.f` emits fractional seconds only when they are non-zero.
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Errors from ISO-8601 parsing.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The text is not an ISO-8601 date-time.
    #[error("malformed ISO-8601 timestamp '{value}': {source}")]
    Malformed {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A date-like field held something other than text.
    #[error("expected ISO-8601 text, found {found}")]
    NotText { found: &'static str },
}

/// A structured date-time parsed from ISO-8601 text.
///
/// # Example
///
/// ```
/// use wpress_core::parse_iso8601;
///
/// let ts = parse_iso8601("2020-01-02T03:04:05").unwrap();
/// assert_eq!(ts.to_string(), "2020-01-02 03:04:05");
/// assert_eq!(ts.to_iso8601(), "2020-01-02T03:04:05");
/// assert!(ts.offset().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// A wall-clock date-time with no offset.
    Naive(NaiveDateTime),

    /// A date-time with an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// The wall-clock date-time, ignoring any offset.
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Timestamp::Naive(naive) => *naive,
            Timestamp::Offset(aware) => aware.naive_local(),
        }
    }

    /// The UTC offset, if the text carried one.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Timestamp::Naive(_) => None,
            Timestamp::Offset(aware) => Some(*aware.offset()),
        }
    }

    /// Converts to UTC. Naive values have no defined instant and return `None`.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Naive(_) => None,
            Timestamp::Offset(aware) => Some(aware.with_timezone(&Utc)),
        }
    }

    /// Formats the value back as ISO-8601.
    ///
    /// Fractional seconds are written with 3, 6 or 9 digits when present.
    /// A zero offset is written as `Z`.
    pub fn to_iso8601(&self) -> String {
        match self {
            Timestamp::Naive(naive) => naive.format(NAIVE_FORMAT).to_string(),
            Timestamp::Offset(aware) => aware.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(naive) => write!(f, "{}", naive),
            Timestamp::Offset(aware) => write!(f, "{}", aware),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Timestamp::Offset(aware)
    }
}

/// Parses ISO-8601 text into a [`Timestamp`].
///
/// RFC 3339 with an offset is tried first, then a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` date-time.
///
/// # Errors
///
/// Returns [`TimestampError::Malformed`] if neither form matches.
pub fn parse_iso8601(text: &str) -> Result<Timestamp, TimestampError> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
        return Ok(Timestamp::Offset(aware));
    }

    NaiveDateTime::parse_from_str(text, NAIVE_FORMAT)
        .map(Timestamp::Naive)
        .map_err(|source| TimestampError::Malformed {
            value: text.to_string(),
            source,
        })
}

/// Parses the JSON value of a date-like field.
///
/// `null` means the API has no date for this field (drafts send
/// `"date_gmt": null`) and yields `None`.
pub(crate) fn from_json(value: &Value) -> Result<Option<Timestamp>, TimestampError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => parse_iso8601(text).map(Some),
        other => Err(TimestampError::NotText {
            found: json_kind(other),
        }),
    }
}
