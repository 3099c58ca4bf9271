//! ISO-8601 date handling for response bodies
//!
//! The API transmits timestamps as ISO-8601 strings. Model fields declared
//! as dates use this module with `#[serde(with = "...")]` so matching
//! strings are revived into [`DateTime<Utc>`] values on decode, while
//! strings that do not match the pattern are left untouched (they simply
//! remain `String` fields on their models).

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serializer};

/// Pattern for ISO-8601-looking timestamps: date, `T`, time, optional
/// fractional seconds, optional zone designator or `+HH:MM` offset.
static ISO_DATETIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T(?:\d{2}:){2}\d{2}(?:\.\d+)?(?:[A-Za-z]+|\+\d{2}:\d{2})?$")
        .expect("timestamp pattern is valid")
});

/// Whether a string looks like an ISO-8601 timestamp
pub fn looks_like_datetime(value: &str) -> bool {
    ISO_DATETIME.is_match(value)
}

/// Parse an ISO-8601-looking string into a UTC timestamp.
///
/// Returns `None` for strings that do not match the pattern or carry an
/// unparsable zone suffix.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if !looks_like_datetime(value) {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Zone-less timestamps, and alphabetic zone designators other than `Z`
    // (e.g. `UTC`), are treated as UTC.
    let naive = value.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Serialize a timestamp the way the API emits them
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Deserialize an ISO-8601 string into a UTC timestamp
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Like the parent module, for `Option<DateTime<Utc>>` fields (the API
/// sends `null` for dates such as a token that never expires)
pub mod optional {
    use super::parse_datetime;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize an optional timestamp, `null` when absent
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional ISO-8601 string
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_datetime(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
            None => Ok(None),
        }
    }
}
