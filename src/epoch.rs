//! Calendar epoch parsing and elapsed-time arithmetic.
//!
//! The computational core never reads the wall clock; callers turn epoch
//! strings (or "now") into `DateTime<Utc>` here and hand instants down.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors surfaced when an epoch string cannot be interpreted.
#[derive(Debug, Error)]
pub enum EpochError {
    #[error("unrecognized epoch format: '{0}' (expected RFC 3339 or YYYY-MM-DD[ HH:MM:SS] UTC)")]
    Unrecognized(String),
}

/// Parse an epoch string into a UTC instant.
///
/// Accepts RFC 3339 (`2025-01-04T13:28:00Z`, offsets allowed), a space
/// separated `YYYY-MM-DD HH:MM:SS` assumed UTC, or a bare `YYYY-MM-DD`
/// taken as midnight UTC.
pub fn parse_epoch(epoch: &str) -> Result<DateTime<Utc>, EpochError> {
    let trimmed = epoch.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(parsed.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc());
    }
    Err(EpochError::Unrecognized(epoch.to_string()))
}

/// Format an instant for display in artifacts and console tables.
pub fn format_epoch(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Signed elapsed seconds from `reference` to `instant`.
///
/// Negative when the instant precedes the reference; millisecond
/// resolution, which is far below the fidelity of the orbit model.
pub fn elapsed_seconds(reference: DateTime<Utc>, instant: DateTime<Utc>) -> f64 {
    instant.signed_duration_since(reference).num_milliseconds() as f64 / 1_000.0
}
