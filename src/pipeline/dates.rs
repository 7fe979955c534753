//! Lenient date fields.
//!
//! jobkit writes plain `YYYY-MM-DD` dates, but hand-edited or older pipeline
//! files often carry full ISO 8601 timestamps such as
//! `2024-01-15T10:30:00.123456`. Those are accepted and reduced to their
//! calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Calendar date from `YYYY-MM-DD`, RFC 3339, or a naive ISO timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    let naive = value.strip_suffix('Z').unwrap_or(value);
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|timestamp| timestamp.date())
}

fn invalid<E: de::Error>(value: &str) -> E {
    E::custom(format!(
        "invalid date '{}', expected YYYY-MM-DD or an ISO 8601 timestamp",
        value
    ))
}

pub(super) fn date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
    let value = String::deserialize(d)?;
    parse_date(&value).ok_or_else(|| invalid(&value))
}

/// Like [`date`], with `null` and blank strings read as absent.
pub(super) fn optional_date<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(d)? {
        Some(value) if !value.trim().is_empty() => {
            parse_date(&value).map(Some).ok_or_else(|| invalid(&value))
        }
        _ => Ok(None),
    }
}
