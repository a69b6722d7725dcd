//! Date normalization and calendar-day arithmetic.
//!
//! Every operation takes an explicit timezone. There is no implicit
//! "system local zone": the caller decides which civil calendar a date
//! belongs to, which keeps results identical on every machine.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Largest magnitude a millisecond timestamp may have (±100,000,000 days
/// around the Unix epoch).
///
/// This is an outer bound only. chrono stops at the years 262142 and -262143,
/// so timestamps are usable up to about 8.2e15 ms forward and 8.3e15 ms back
/// (8.5e15 ms is already invalid). [`to_date`] also keeps one day clear of
/// chrono's limits so every timezone can read the wall clock.
pub const MAX_TIME_VALUE_MS: i64 = 8_640_000_000_000_000;

/// Clearance kept from chrono's limits; larger than any UTC offset.
const CIVIL_MARGIN_MS: i64 = 86_400_000;

/// A date argument before normalization.
///
/// Timestamps are milliseconds since the Unix epoch. Floating-point
/// timestamps may be NaN or infinite; those normalize to an invalid date
/// instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateValue {
    /// A concrete instant.
    Instant(DateTime<Utc>),
    /// Integer milliseconds since the epoch.
    Millis(i64),
    /// Floating-point milliseconds since the epoch (fraction is truncated).
    FloatMillis(f64),
}

impl<T: TimeZone> From<DateTime<T>> for DateValue {
    fn from(dt: DateTime<T>) -> Self {
        DateValue::Instant(dt.with_timezone(&Utc))
    }
}

impl From<i64> for DateValue {
    fn from(ms: i64) -> Self {
        DateValue::Millis(ms)
    }
}

impl From<f64> for DateValue {
    fn from(ms: f64) -> Self {
        DateValue::FloatMillis(ms)
    }
}

/// Normalize a [`DateValue`] into a concrete UTC instant.
///
/// Returns `None` for NaN/infinite timestamps, for timestamps outside
/// [`MAX_TIME_VALUE_MS`], and for instants within a day of chrono's
/// representable range, where a local wall-clock reading would overflow.
pub fn to_date(value: DateValue) -> Option<DateTime<Utc>> {
    let date = match value {
        DateValue::Instant(dt) => Some(dt),
        DateValue::Millis(ms) => from_millis(ms),
        DateValue::FloatMillis(ms) => {
            if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE_MS as f64 {
                return None;
            }
            from_millis(ms.trunc() as i64)
        }
    }?;
    has_civil_reading(&date).then_some(date)
}

fn has_civil_reading(date: &DateTime<Utc>) -> bool {
    let ms = date.timestamp_millis();
    ms >= DateTime::<Utc>::MIN_UTC.timestamp_millis() + CIVIL_MARGIN_MS
        && ms <= DateTime::<Utc>::MAX_UTC.timestamp_millis() - CIVIL_MARGIN_MS
}

fn from_millis(ms: i64) -> Option<DateTime<Utc>> {
    if ms.unsigned_abs() > MAX_TIME_VALUE_MS as u64 {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

/// Signed number of calendar-day boundaries between `base_date` and `date`
/// in `tz`, ignoring the time of day.
///
/// 23:59 on Monday and 00:01 on Tuesday are one calendar day apart even
/// though only two minutes separate them.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relative_date::calendar::difference_in_calendar_days;
///
/// let late = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 0).unwrap();
/// let early = Utc.with_ymd_and_hms(2026, 10, 20, 0, 1, 0).unwrap();
/// assert_eq!(difference_in_calendar_days(&early, &late, &chrono_tz::UTC), 1);
/// assert_eq!(difference_in_calendar_days(&late, &early, &chrono_tz::UTC), -1);
/// ```
pub fn difference_in_calendar_days(
    date: &DateTime<Utc>,
    base_date: &DateTime<Utc>,
    tz: &Tz,
) -> i64 {
    let left = date.with_timezone(tz).date_naive();
    let right = base_date.with_timezone(tz).date_naive();
    left.signed_duration_since(right).num_days()
}

/// The wall-clock reading of `date` in `tz`, detached from any offset.
///
/// This is the instant shifted by its own UTC offset, so weekday and time
/// fields read from the result match what a clock in `tz` shows.
pub fn to_civil(date: &DateTime<Utc>, tz: &Tz) -> NaiveDateTime {
    date.with_timezone(tz).naive_local()
}
