//! Locale capabilities and the built-in locales.
//!
//! A locale is a bundle of three independent capabilities:
//!
//! - [`Localize`]: weekday, month and day-period names, ordinal numbers
//! - [`FormatLong`]: the patterns behind long-format tokens (`P`, `p`, `L`, `LT`)
//! - [`FormatRelative`]: relative-token → pattern resolution
//!
//! Any type implementing [`Locale`] is accepted. Each accessor returns an
//! `Option`, so a partial locale is representable and rejected at the call
//! site with an error naming the missing capability.
//!
//! Built-in locales: [`EN_US`] (the default), [`FR_CH`], [`UG`].

mod en_us;
mod fr_ch;
mod ug;

use std::fmt;

use chrono::{NaiveDateTime, Weekday};

use crate::error::FormatError;
use crate::format::FormatOptions;
use crate::relative::RelativeToken;

pub use en_us::{EnUs, EN_US};
pub use fr_ch::{FrCh, FR_CH};
pub use ug::{Ug, UG};

/// Width of a localized name (weekday, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameWidth {
    /// Single letter, e.g. `M`.
    Narrow,
    /// e.g. `Mon`.
    Abbreviated,
    /// e.g. `Monday`.
    Wide,
}

/// Width of a long date or time pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWidth {
    Short,
    Medium,
    Long,
    Full,
}

/// Names and numbers rendered into patterns.
pub trait Localize: Send + Sync {
    /// Ordinal form of a day or month number, e.g. `1st`, `1er`.
    fn ordinal_number(&self, n: u32) -> String;

    fn day(&self, weekday: Weekday, width: NameWidth) -> &str;

    /// `month` is 1-based (January = 1).
    fn month(&self, month: u32, width: NameWidth) -> &str;

    fn day_period(&self, is_pm: bool) -> &str;
}

/// Patterns that long-format tokens expand to.
pub trait FormatLong: Send + Sync {
    fn date(&self, width: FormatWidth) -> &str;

    fn time(&self, width: FormatWidth) -> &str;
}

/// Resolves a relative token to a pattern string.
///
/// `date` and `base_date` are civil (wall-clock) readings, so a locale that
/// needs date-dependent phrasing can read weekday and time fields directly.
pub trait FormatRelative: Send + Sync {
    fn resolve(
        &self,
        token: RelativeToken,
        date: NaiveDateTime,
        base_date: NaiveDateTime,
        options: &FormatOptions<'_>,
    ) -> String;
}

/// A bundle of locale capabilities.
pub trait Locale: Send + Sync + fmt::Debug {
    /// BCP 47 code, e.g. `fr-CH`.
    fn code(&self) -> &str;

    fn localize(&self) -> Option<&dyn Localize>;

    fn format_long(&self) -> Option<&dyn FormatLong>;

    fn format_relative(&self) -> Option<&dyn FormatRelative>;
}

/// The locale used when options leave it unset.
pub fn default_locale() -> &'static dyn Locale {
    &EN_US
}

/// Look up a built-in locale by code (case-insensitive, `_` or `-`).
pub fn by_code(code: &str) -> Option<&'static dyn Locale> {
    match code.to_ascii_lowercase().replace('_', "-").as_str() {
        "en-us" | "en" => Some(&EN_US),
        "fr-ch" => Some(&FR_CH),
        "ug" => Some(&UG),
        _ => None,
    }
}

/// Codes of every built-in locale.
pub fn available() -> [&'static str; 3] {
    [EN_US.code(), FR_CH.code(), UG.code()]
}

fn missing(property: &str) -> FormatError {
    FormatError::Locale(format!("locale must contain {property} property"))
}

pub(crate) fn require_localize(locale: &dyn Locale) -> Result<&dyn Localize, FormatError> {
    locale.localize().ok_or_else(|| missing("localize"))
}

pub(crate) fn require_format_long(locale: &dyn Locale) -> Result<&dyn FormatLong, FormatError> {
    locale.format_long().ok_or_else(|| missing("formatLong"))
}

pub(crate) fn require_format_relative(
    locale: &dyn Locale,
) -> Result<&dyn FormatRelative, FormatError> {
    locale.format_relative().ok_or_else(|| missing("formatRelative"))
}

/// Index of a weekday in a Sunday-first table.
pub(crate) fn sunday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// Index of a 1-based month in a January-first table.
pub(crate) fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}
