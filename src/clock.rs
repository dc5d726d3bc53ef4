//! Wall-clock timestamp formatting.
//!
//! The whole data model of this system is a single transient value: the
//! current time rendered in one fixed human-readable layout. Formatting is
//! a pure function of the instant, so handlers and the push loop stay
//! trivially testable against pinned inputs.

use chrono::{DateTime, Utc};

/// Fixed timestamp layout: weekday, month, zero-padded day, 24-hour time,
/// zone abbreviation, year.
const LAYOUT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Formats an instant in the fixed layout, e.g. `Tue Jan 02 15:04:05 UTC 2024`.
///
/// Times are rendered in UTC so the zone abbreviation does not depend on
/// the host environment.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(LAYOUT).to_string()
}

/// Formats the current wall-clock time in the fixed layout.
#[must_use]
pub fn now_string() -> String {
    format_timestamp(Utc::now())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    /// Parse format mirroring [`LAYOUT`] with the zone pinned to UTC
    /// (`%Z` is not parseable).
    const PARSE_LAYOUT: &str = "%a %b %d %H:%M:%S UTC %Y";

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        let Some(at) = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single() else {
            panic!("invalid test instant");
        };
        at
    }

    #[test]
    fn formats_fixed_instant() {
        let s = format_timestamp(instant(2024, 1, 2, 15, 4, 5));
        assert_eq!(s, "Tue Jan 02 15:04:05 UTC 2024");
    }

    #[test]
    fn day_and_hour_are_zero_padded() {
        let s = format_timestamp(instant(2025, 6, 9, 7, 5, 3));
        assert_eq!(s, "Mon Jun 09 07:05:03 UTC 2025");
    }

    #[test]
    fn now_string_parses_in_layout() {
        let s = now_string();
        let Ok(_) = NaiveDateTime::parse_from_str(&s, PARSE_LAYOUT) else {
            panic!("timestamp {s:?} does not match the fixed layout");
        };
    }

    #[test]
    fn consecutive_calls_are_non_decreasing() {
        let parse = |s: &str| {
            let Ok(t) = NaiveDateTime::parse_from_str(s, PARSE_LAYOUT) else {
                panic!("unparseable timestamp {s:?}");
            };
            t
        };
        let first = parse(&now_string());
        let second = parse(&now_string());
        assert!(first <= second);
    }
}
