//! Timestamp codec for Bunny.net date fields.
//!
//! The APIs return dates in several shapes, often without any timezone:
//! - `2024-01-15T10:30:45Z` / `2024-01-15T10:30:45.123+02:00` (RFC 3339)
//! - `2024-01-15T10:30:45` (no offset, interpreted as UTC)
//! - `2024-01-15T10:30:45.1234567` (no offset, any fraction width)
//! - `""`, `"null"` or JSON `null` (no value)
//!
//! Encoding always emits RFC 3339 in UTC at second precision, or `null`.
//! Offsets are not preserved: `12:30:45+02:00` encodes as `10:30:45Z`,
//! the same instant.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// An optional UTC instant as returned by the Bunny.net APIs.
///
/// `BunnyTime::default()` is the zero state and serializes as `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BunnyTime(pub Option<DateTime<Utc>>);

impl BunnyTime {
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    pub const fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub const fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Parse one of the accepted textual forms.
    ///
    /// `""` and `"null"` yield the zero value. The first format that consumes
    /// the whole input wins.
    pub fn parse(s: &str) -> Result<Self, ParseBunnyTimeError> {
        if s.is_empty() || s == "null" {
            return Ok(Self(None));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::new(dt.with_timezone(&Utc)));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| Self::new(naive.and_utc()))
            .ok_or_else(|| ParseBunnyTimeError(s.to_string()))
    }

    /// Wire form: RFC 3339 UTC at second precision, `None` for zero.
    pub fn to_wire(&self) -> Option<String> {
        self.0
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl From<DateTime<Utc>> for BunnyTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::new(dt)
    }
}

impl From<BunnyTime> for Option<DateTime<Utc>> {
    fn from(bt: BunnyTime) -> Self {
        bt.0
    }
}

impl fmt::Display for BunnyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wire() {
            Some(s) => f.write_str(&s),
            None => f.write_str("null"),
        }
    }
}

/// Returned when a timestamp matches none of the accepted formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timestamp format: {0:?}")]
pub struct ParseBunnyTimeError(String);

impl Serialize for BunnyTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_wire() {
            Some(s) => serializer.serialize_str(&s),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for BunnyTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            None => Ok(Self(None)),
        }
    }
}
