//! # relative-date
//!
//! Relative date phrasing with pluggable locales.
//!
//! Given a date and a base date, pick a relative token from the calendar-day
//! distance (`yesterday`, `nextWeek`, ...), resolve it to a pattern through
//! the locale, and render the pattern. Everything is a pure function of its
//! inputs: there is no system clock and no implicit local timezone.
//!
//! ## Modules
//!
//! - [`relative`]: token selection and [`format_relative`]
//! - [`format`]: pattern rendering ([`format()`])
//! - [`calendar`]: date normalization and calendar-day distance
//! - [`locale`]: locale capabilities and the en-US, fr-CH and ug locales
//! - [`error`]: Error types

pub mod calendar;
pub mod error;
pub mod format;
pub mod locale;
pub mod relative;

pub use calendar::{difference_in_calendar_days, to_date, DateValue};
pub use error::FormatError;
pub use format::{format, FormatOptions};
pub use locale::{Locale, EN_US, FR_CH, UG};
pub use relative::{
    describe_relative, describe_relative_args, format_relative, format_relative_args,
    RelativeDescription, RelativeToken,
};
