// crates/core/src/day.rs
//! Calendar-day ranges and elapsed-time arithmetic.
//!
//! A day is the half-open interval `[local midnight, local midnight + 24h)`
//! in a caller-supplied timezone, expressed in UTC so it can be compared
//! directly against stored timestamps.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::DayError;

/// Longest DST gap we search past when local midnight does not exist.
const MAX_GAP_MINUTES: i64 = 180;

/// A resolved calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Resolve `date` against `tz`.
    ///
    /// Ambiguous midnights take the earlier instant. A midnight swallowed by a
    /// DST gap resolves to the first valid local minute after it.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<Self, DayError> {
        let midnight = date.and_time(NaiveTime::MIN);
        let start = (0..=MAX_GAP_MINUTES)
            .find_map(|m| {
                tz.from_local_datetime(&(midnight + Duration::minutes(m)))
                    .earliest()
            })
            .ok_or(DayError::Unresolvable(date))?
            .with_timezone(&Utc);

        Ok(Self {
            date,
            start,
            end: start + Duration::hours(24),
        })
    }

    /// The day containing the current instant in `tz`.
    pub fn today<Tz: TimeZone>(tz: &Tz) -> Result<Self, DayError> {
        let date = Utc::now().with_timezone(tz).date_naive();
        Self::for_date(date, tz)
    }

    /// Parse a `YYYY-MM-DD` parameter and resolve it against `tz`.
    pub fn parse<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> Result<Self, DayError> {
        Self::for_date(parse_date(raw)?, tz)
    }

    /// Half-open membership test.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// ISO date string (`YYYY-MM-DD`).
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Parse a `YYYY-MM-DD` string. Blank input counts as missing.
pub fn parse_date(raw: Option<&str>) -> Result<NaiveDate, DayError> {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return Err(DayError::Missing),
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| DayError::Invalid(raw.to_string()))
}

/// Elapsed seconds attributed to an activity.
///
/// `end - start` when both are set (clamped at zero), otherwise
/// `duration_minutes * 60`, otherwise zero. Saturates instead of overflowing.
pub fn elapsed_seconds(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    duration_minutes: Option<i64>,
) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_seconds().max(0),
        _ => duration_minutes.map_or(0, |m| m.max(0).saturating_mul(60)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_utc_day_bounds() {
        let range = DayRange::parse(Some("2024-01-01"), &Utc).unwrap();
        assert_eq!(range.start, utc("2024-01-01T00:00:00Z"));
        assert_eq!(range.end, utc("2024-01-02T00:00:00Z"));
        assert_eq!(range.iso_date(), "2024-01-01");
    }

    #[test]
    fn test_offset_day_bounds() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let range = DayRange::parse(Some("2024-06-10"), &tz).unwrap();
        assert_eq!(range.start, utc("2024-06-09T22:00:00Z"));
        assert_eq!(range.end, utc("2024-06-10T22:00:00Z"));
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = DayRange::parse(Some("2024-01-01"), &Utc).unwrap();
        assert!(range.contains(utc("2024-01-01T00:00:00Z")));
        assert!(range.contains(utc("2024-01-01T23:59:59Z")));
        assert!(!range.contains(utc("2024-01-02T00:00:00Z")));
        assert!(!range.contains(utc("2023-12-31T23:59:59Z")));
    }

    #[test]
    fn test_dst_gap_at_midnight() {
        // Sao Paulo skipped 00:00-01:00 on 2018-11-04.
        let tz = chrono_tz::America::Sao_Paulo;
        let range = DayRange::parse(Some("2018-11-04"), &tz).unwrap();
        assert_eq!(range.start, utc("2018-11-04T03:00:00Z"));
        assert_eq!(range.end - range.start, Duration::hours(24));
    }

    #[test]
    fn test_parse_date_missing_and_invalid() {
        assert_eq!(parse_date(None), Err(DayError::Missing));
        assert_eq!(parse_date(Some("  ")), Err(DayError::Missing));
        assert!(matches!(
            parse_date(Some("01/02/2024")),
            Err(DayError::Invalid(_))
        ));
        assert!(matches!(
            parse_date(Some("2024-02-30")),
            Err(DayError::Invalid(_))
        ));
    }

    #[test]
    fn test_elapsed_prefers_span() {
        let start = utc("2024-01-01T09:00:00Z");
        let end = utc("2024-01-01T10:30:00Z");
        assert_eq!(elapsed_seconds(Some(start), Some(end), Some(5)), 5400);
    }

    #[test]
    fn test_elapsed_negative_span_is_zero() {
        let start = utc("2024-01-01T10:00:00Z");
        let end = utc("2024-01-01T09:00:00Z");
        assert_eq!(elapsed_seconds(Some(start), Some(end), Some(30)), 0);
    }

    #[test]
    fn test_elapsed_falls_back_to_minutes() {
        let start = utc("2024-01-01T10:00:00Z");
        assert_eq!(elapsed_seconds(Some(start), None, Some(30)), 1800);
        assert_eq!(elapsed_seconds(None, None, Some(30)), 1800);
        assert_eq!(elapsed_seconds(None, None, None), 0);
    }

    #[test]
    fn test_elapsed_saturates_huge_minutes() {
        assert_eq!(elapsed_seconds(None, None, Some(i64::MAX)), i64::MAX);
    }
}
