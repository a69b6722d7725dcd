//! Relative date phrasing.
//!
//! Represent a date in words relative to a base date:
//!
//! | Distance to the base date | Token       | en-US result              |
//! |---------------------------|-------------|---------------------------|
//! | Previous 6 days           | `lastWeek`  | last Sunday at 4:30 AM    |
//! | Last day                  | `yesterday` | yesterday at 4:30 AM      |
//! | Same day                  | `today`     | today at 4:30 AM          |
//! | Next day                  | `tomorrow`  | tomorrow at 4:30 AM       |
//! | Next 6 days               | `nextWeek`  | Sunday at 4:30 AM         |
//! | Other                     | `other`     | 12/31/2017                |
//!
//! Distance counts calendar days in the options' timezone, so the time of
//! day never moves a date into a different bucket.

use std::fmt;

use serde::Serialize;

use crate::calendar::{difference_in_calendar_days, to_civil, to_date, DateValue};
use crate::error::{FormatError, Result};
use crate::format::{format, FormatOptions};
use crate::locale::{require_format_long, require_format_relative, require_localize};

/// Relative-time category selected from the calendar-day distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativeToken {
    LastWeek,
    Yesterday,
    Today,
    Tomorrow,
    NextWeek,
    Other,
}

impl RelativeToken {
    pub const ALL: [RelativeToken; 6] = [
        RelativeToken::LastWeek,
        RelativeToken::Yesterday,
        RelativeToken::Today,
        RelativeToken::Tomorrow,
        RelativeToken::NextWeek,
        RelativeToken::Other,
    ];

    /// Select the token for a signed calendar-day distance.
    ///
    /// Thresholds are half-open and checked in order. The ranges are not
    /// symmetric: `lastWeek` covers -6..=-2 and `nextWeek` covers 2..=6.
    pub fn from_day_diff(diff: i64) -> Self {
        if diff < -6 {
            RelativeToken::Other
        } else if diff < -1 {
            RelativeToken::LastWeek
        } else if diff < 0 {
            RelativeToken::Yesterday
        } else if diff < 1 {
            RelativeToken::Today
        } else if diff < 2 {
            RelativeToken::Tomorrow
        } else if diff < 7 {
            RelativeToken::NextWeek
        } else {
            RelativeToken::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeToken::LastWeek => "lastWeek",
            RelativeToken::Yesterday => "yesterday",
            RelativeToken::Today => "today",
            RelativeToken::Tomorrow => "tomorrow",
            RelativeToken::NextWeek => "nextWeek",
            RelativeToken::Other => "other",
        }
    }
}

impl fmt::Display for RelativeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The intermediate values of a relative format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeDescription {
    /// The selected token.
    pub token: RelativeToken,
    /// The pattern the locale resolved the token to.
    pub pattern: String,
    /// `pattern` rendered against the date.
    pub formatted: String,
}

/// Represent `date` in words relative to `base_date`.
///
/// # Errors
///
/// - [`FormatError::Locale`] if the locale lacks `localize`, `formatLong`
///   or `formatRelative` (checked in that order)
/// - [`FormatError::InvalidTime`] if either date is invalid
/// - any error [`format`] reports for the resolved pattern
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relative_date::{format_relative, FormatOptions};
///
/// let base = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
/// let date = Utc.with_ymd_and_hms(2026, 10, 18, 16, 30, 0).unwrap();
/// let text = format_relative(date, base, &FormatOptions::default()).unwrap();
/// assert_eq!(text, "yesterday at 4:30 PM");
/// ```
pub fn format_relative(
    date: impl Into<DateValue>,
    base_date: impl Into<DateValue>,
    options: &FormatOptions<'_>,
) -> Result<String> {
    describe_relative(date, base_date, options).map(|d| d.formatted)
}

/// [`format_relative`] over a dynamically sized argument list.
///
/// Needs at least two dates; further entries are ignored.
///
/// # Errors
///
/// [`FormatError::Arguments`] when fewer than two dates are given, otherwise
/// as [`format_relative`].
pub fn format_relative_args(args: &[DateValue], options: &FormatOptions<'_>) -> Result<String> {
    describe_relative_args(args, options).map(|d| d.formatted)
}

/// [`describe_relative`] over a dynamically sized argument list.
pub fn describe_relative_args(
    args: &[DateValue],
    options: &FormatOptions<'_>,
) -> Result<RelativeDescription> {
    match args {
        [date, base_date, ..] => describe_relative(*date, *base_date, options),
        _ => Err(FormatError::Arguments(format!(
            "2 arguments required, but only {} present",
            args.len()
        ))),
    }
}

/// Like [`format_relative`], but also returns the token and the pattern.
pub fn describe_relative(
    date: impl Into<DateValue>,
    base_date: impl Into<DateValue>,
    options: &FormatOptions<'_>,
) -> Result<RelativeDescription> {
    let date = to_date(date.into());
    let base_date = to_date(base_date.into());

    let locale = options.locale();
    require_localize(locale)?;
    require_format_long(locale)?;
    let resolver = require_format_relative(locale)?;

    let (date, base_date) = date.zip(base_date).ok_or(FormatError::InvalidTime)?;

    let tz = options.timezone;
    let diff = difference_in_calendar_days(&date, &base_date, &tz);
    let token = RelativeToken::from_day_diff(diff);
    tracing::debug!(diff, %token, locale = locale.code(), "selected relative token");

    let pattern = resolver.resolve(
        token,
        to_civil(&date, &tz),
        to_civil(&base_date, &tz),
        options,
    );
    let formatted = format(date, &pattern, options)?;

    Ok(RelativeDescription {
        token,
        pattern,
        formatted,
    })
}
