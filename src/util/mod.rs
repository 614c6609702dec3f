//
//  zenhub-cli
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Date handling and small string helpers shared by the API models, the
//! command handlers and the renderers.
//!
//! ## Categories
//!
//! - **Wire Dates**: [`utc`] serde adapter, [`to_wire`]
//! - **Input Dates**: [`parse_date`]
//! - **Display**: [`format_date`], [`format_relative_time`], [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use zenhub_cli::util::{parse_date, to_wire};
//!
//! let date = parse_date("2019-11-01T07:00:00Z").unwrap();
//! assert_eq!(to_wire(&date), "2019-11-01T07:00:00Z");
//! ```

use anyhow::{bail, Result};
use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Formats a UTC timestamp the way ZenHub expects it on the wire.
///
/// RFC 3339 with a `Z` suffix; fractional seconds appear only when present.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use zenhub_cli::util::to_wire;
///
/// let date = Utc.with_ymd_and_hms(2019, 11, 19, 8, 0, 0).unwrap();
/// assert_eq!(to_wire(&date), "2019-11-19T08:00:00Z");
/// ```
pub fn to_wire(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Serde adapter that writes dates with [`to_wire`].
///
/// Use with `#[serde(with = "crate::util::utc")]` on request body fields.
pub mod utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a date as UTC RFC 3339.
    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_wire(date))
    }

    /// Deserializes any RFC 3339 date into UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }

    /// Same as the parent adapter, for optional fields.
    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        /// Serializes `Some(date)` with the wire format and `None` as null.
        pub fn serialize<S: Serializer>(
            date: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_str(&super::super::to_wire(date)),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional RFC 3339 date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<DateTime<Utc>>::deserialize(deserializer)
        }
    }
}

/// Parses a date typed on the command line.
///
/// Accepts full RFC 3339 timestamps (any offset, converted to UTC) or a bare
/// `YYYY-MM-DD`, which is read as midnight UTC.
///
/// # Errors
///
/// Returns an error naming the accepted formats when neither parse succeeds.
///
/// # Example
///
/// ```rust
/// use zenhub_cli::util::parse_date;
///
/// let date = parse_date("2019-11-19").unwrap();
/// assert_eq!(date.to_rfc3339(), "2019-11-19T00:00:00+00:00");
///
/// let shifted = parse_date("2019-11-01T09:00:00+02:00").unwrap();
/// assert_eq!(shifted.to_rfc3339(), "2019-11-01T07:00:00+00:00");
/// ```
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }

    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    bail!(
        "Invalid date '{}': expected YYYY-MM-DD or an RFC 3339 timestamp",
        input
    )
}

/// Formats a timestamp for table output in the local timezone.
pub fn format_date(date: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = date.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a timestamp relative to now ("3 days ago").
///
/// # Notes
///
/// - Returns "just now" for anything under a minute old
/// - Returns "in the future" for timestamps ahead of the clock
/// - Months and years are approximate (30 and 365 days)
pub fn format_relative_time(date: &DateTime<Utc>) -> String {
    relative_to(date, &Utc::now())
}

fn relative_to(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(*date).num_seconds();
    if diff < 0 {
        return "in the future".to_string();
    }

    let (value, unit) = match diff {
        0..=59 => return "just now".to_string(),
        60..=3599 => (diff / 60, "minute"),
        3600..=86399 => (diff / 3600, "hour"),
        86400..=604799 => (diff / 86400, "day"),
        604800..=2591999 => (diff / 604800, "week"),
        2592000..=31535999 => (diff / 2592000, "month"),
        _ => (diff / 31536000, "year"),
    };

    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}

/// Truncates a string to `max_len` characters, appending "..." when cut.
///
/// ```rust
/// use zenhub_cli::util::truncate;
///
/// assert_eq!(truncate("Hello, World!", 8), "Hello...");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_to_wire_keeps_fraction_when_present() {
        let date = parse_date("2010-11-13T01:38:56.842Z").unwrap();
        assert_eq!(to_wire(&date), "2010-11-13T01:38:56.842Z");
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_date("2019-13-01").is_err());
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        assert_eq!(relative_to(&now, &now), "just now");
        assert_eq!(relative_to(&(now - Duration::minutes(1)), &now), "1 minute ago");
        assert_eq!(relative_to(&(now - Duration::hours(5)), &now), "5 hours ago");
        assert_eq!(relative_to(&(now - Duration::days(3)), &now), "3 days ago");
        assert_eq!(relative_to(&(now + Duration::days(1)), &now), "in the future");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééé", 4), "é...");
    }
}
