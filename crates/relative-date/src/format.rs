//! Pattern-based date formatting.
//!
//! [`format`] renders a date against a pattern string in a locale and
//! timezone. Patterns mix literal text and field tokens:
//!
//! | token | output |
//! |-------|--------|
//! | `'text'`, `[text]` | literal text (`''` is a single quote) |
//! | `y`, `yy`, `yyyy` | year, two-digit year, padded year |
//! | `M`, `MM`, `MMM`, `MMMM`, `MMMMM` | month number, padded, abbreviated, wide, narrow |
//! | `d`, `dd`, `do` | day of month, padded, ordinal |
//! | `ddd`, `dddd` | weekday abbreviated, wide |
//! | `E`..`EEE`, `EEEE`, `EEEEE` | weekday abbreviated, wide, narrow |
//! | `e`, `ee` | local day of week (1-7, honours `week_starts_on`) |
//! | `eee`, `eeee`, `eeeee` | weekday abbreviated, wide, narrow |
//! | `H`, `HH`, `h`, `hh` | hour 0-23, hour 1-12 |
//! | `m`, `mm`, `s`, `ss` | minute, second |
//! | `a` | day period (AM/PM) |
//! | `p`..`pppp` | the locale's time pattern, short to full |
//! | `P`..`PPPP` | the locale's date pattern, short to full |
//! | `L`, `LL` | the locale's short / long date pattern |
//! | `LT`, `LTS` | the locale's short / medium time pattern |
//!
//! Any other unescaped ASCII letter is an error, so typos surface instead of
//! leaking into the output.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

use crate::calendar::{to_date, DateValue};
use crate::error::{FormatError, Result};
use crate::locale::{
    default_locale, require_format_long, require_localize, FormatLong, FormatWidth, Localize,
    Locale, NameWidth,
};

/// Options shared by [`format`] and [`crate::format_relative`].
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions<'a> {
    /// Locale to render with; `None` means en-US.
    pub locale: Option<&'a dyn Locale>,
    /// First day of the week, 0 (Sunday) to 6 (Saturday).
    pub week_starts_on: u8,
    /// Timezone whose calendar and wall clock are used.
    pub timezone: Tz,
}

impl Default for FormatOptions<'_> {
    fn default() -> Self {
        Self {
            locale: None,
            week_starts_on: 0,
            timezone: Tz::UTC,
        }
    }
}

impl<'a> FormatOptions<'a> {
    pub fn with_locale(mut self, locale: &'a dyn Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_week_starts_on(mut self, week_starts_on: u8) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    /// The effective locale.
    pub fn locale(&self) -> &'a dyn Locale {
        self.locale.unwrap_or(default_locale())
    }
}

/// Format `date` according to `pattern`.
///
/// # Errors
///
/// - [`FormatError::Locale`] if the locale lacks `localize` or `formatLong`
/// - [`FormatError::InvalidOption`] if `week_starts_on` is above 6
/// - [`FormatError::InvalidTime`] if `date` does not normalize to an instant
/// - [`FormatError::InvalidFormat`] if `pattern` contains an unknown token
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relative_date::{format, FormatOptions};
///
/// let date = Utc.with_ymd_and_hms(2026, 10, 19, 16, 30, 0).unwrap();
/// let text = format(date, "EEEE 'at' p", &FormatOptions::default()).unwrap();
/// assert_eq!(text, "Monday at 4:30 PM");
/// ```
pub fn format(
    date: impl Into<DateValue>,
    pattern: &str,
    options: &FormatOptions<'_>,
) -> Result<String> {
    let locale = options.locale();
    let localize = require_localize(locale)?;
    let format_long = require_format_long(locale)?;

    if options.week_starts_on > 6 {
        return Err(FormatError::InvalidOption(format!(
            "week_starts_on must be between 0 and 6 inclusively, got {}",
            options.week_starts_on
        )));
    }

    let date = to_date(date.into()).ok_or(FormatError::InvalidTime)?;

    let renderer = Renderer {
        local: date.with_timezone(&options.timezone),
        localize,
        format_long,
        week_starts_on: u32::from(options.week_starts_on),
    };
    let mut out = String::with_capacity(pattern.len() * 2);
    renderer.render(pattern, &mut out, true)?;
    Ok(out)
}

// ── Tokenizer ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Field { letter: char, width: usize },
    Ordinal(char),
    Moment(Moment),
}

/// Long-format shorthands: `L`, `LL`, `LT`, `LTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Moment {
    ShortDate,
    LongDate,
    ShortTime,
    MediumTime,
}

fn tokenize(pattern: &str) -> Result<Vec<Part>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' => {
                if chars.get(i + 1) == Some(&'\'') {
                    literal.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                // An unterminated quote runs to the end of the pattern.
                while i < chars.len() {
                    if chars[i] == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            literal.push('\'');
                            i += 2;
                            continue;
                        }
                        i += 1;
                        break;
                    }
                    literal.push(chars[i]);
                    i += 1;
                }
            }
            '[' => {
                i += 1;
                while i < chars.len() && chars[i] != ']' {
                    literal.push(chars[i]);
                    i += 1;
                }
                i += 1;
            }
            c if c.is_ascii_alphabetic() => {
                if !literal.is_empty() {
                    parts.push(Part::Literal(std::mem::take(&mut literal)));
                }
                let start = i;
                while i < chars.len() && chars[i] == c {
                    i += 1;
                }
                let width = i - start;

                if c == 'L' {
                    let moment = match (width, chars.get(i), chars.get(i + 1)) {
                        (1, Some('T'), Some('S')) => {
                            i += 2;
                            Moment::MediumTime
                        }
                        (1, Some('T'), _) => {
                            i += 1;
                            Moment::ShortTime
                        }
                        (1, _, _) => Moment::ShortDate,
                        (2, _, _) => Moment::LongDate,
                        _ => return Err(unsupported_width('L', width)),
                    };
                    parts.push(Part::Moment(moment));
                } else if width == 1 && matches!(c, 'd' | 'M') && chars.get(i) == Some(&'o') {
                    i += 1;
                    parts.push(Part::Ordinal(c));
                } else {
                    parts.push(Part::Field { letter: c, width });
                }
            }
            _ => {
                literal.push(c);
                i += 1;
            }
        }
    }

    if !literal.is_empty() {
        parts.push(Part::Literal(literal));
    }
    Ok(parts)
}

fn unescaped(letter: char) -> FormatError {
    FormatError::InvalidFormat(format!(
        "format string contains an unescaped latin alphabet character `{letter}`"
    ))
}

fn unsupported_width(letter: char, width: usize) -> FormatError {
    FormatError::InvalidFormat(format!(
        "`{}` is not a supported token",
        letter.to_string().repeat(width)
    ))
}

// ── Renderer ────────────────────────────────────────────────────────────────

struct Renderer<'a> {
    local: DateTime<Tz>,
    localize: &'a dyn Localize,
    format_long: &'a dyn FormatLong,
    week_starts_on: u32,
}

impl Renderer<'_> {
    /// `expand_long` is false while rendering a long pattern, so a locale
    /// whose long patterns refer to each other cannot recurse forever.
    fn render(&self, pattern: &str, out: &mut String, expand_long: bool) -> Result<()> {
        for part in tokenize(pattern)? {
            match part {
                Part::Literal(text) => out.push_str(&text),
                Part::Ordinal('M') => out.push_str(&self.localize.ordinal_number(self.local.month())),
                Part::Ordinal(_) => out.push_str(&self.localize.ordinal_number(self.local.day())),
                Part::Moment(moment) => {
                    let long = match moment {
                        Moment::ShortDate => self.format_long.date(FormatWidth::Short),
                        Moment::LongDate => self.format_long.date(FormatWidth::Long),
                        Moment::ShortTime => self.format_long.time(FormatWidth::Short),
                        Moment::MediumTime => self.format_long.time(FormatWidth::Medium),
                    };
                    self.expand(long, out, expand_long)?;
                }
                Part::Field { letter: 'p', width } => {
                    let long = self.format_long.time(long_width('p', width)?);
                    self.expand(long, out, expand_long)?;
                }
                Part::Field { letter: 'P', width } => {
                    let long = self.format_long.date(long_width('P', width)?);
                    self.expand(long, out, expand_long)?;
                }
                Part::Field { letter, width } => out.push_str(&self.field(letter, width)?),
            }
        }
        Ok(())
    }

    fn expand(&self, pattern: &str, out: &mut String, expand_long: bool) -> Result<()> {
        if !expand_long {
            return Err(FormatError::InvalidFormat(format!(
                "long format pattern '{pattern}' refers to another long format"
            )));
        }
        self.render(pattern, out, false)
    }

    fn field(&self, letter: char, width: usize) -> Result<String> {
        let d = &self.local;
        let text = match (letter, width) {
            ('y', 1) => d.year().to_string(),
            ('y', 2) => format!("{:02}", d.year().rem_euclid(100)),
            ('y', n) => format!("{:0n$}", d.year()),

            ('M', 1) => d.month().to_string(),
            ('M', 2) => format!("{:02}", d.month()),
            ('M', 3) => self.month_name(NameWidth::Abbreviated),
            ('M', 4) => self.month_name(NameWidth::Wide),
            ('M', 5) => self.month_name(NameWidth::Narrow),

            ('d', 1) => d.day().to_string(),
            ('d', 2) => format!("{:02}", d.day()),
            ('d', 3) => self.day_name(NameWidth::Abbreviated),
            ('d', 4) => self.day_name(NameWidth::Wide),

            ('E', 1..=3) => self.day_name(NameWidth::Abbreviated),
            ('E', 4) => self.day_name(NameWidth::Wide),
            ('E', 5) => self.day_name(NameWidth::Narrow),

            ('e', 1) => self.local_day_of_week().to_string(),
            ('e', 2) => format!("{:02}", self.local_day_of_week()),
            ('e', 3) => self.day_name(NameWidth::Abbreviated),
            ('e', 4) => self.day_name(NameWidth::Wide),
            ('e', 5) => self.day_name(NameWidth::Narrow),

            ('H', 1) => d.hour().to_string(),
            ('H', 2) => format!("{:02}", d.hour()),
            ('h', 1) => d.hour12().1.to_string(),
            ('h', 2) => format!("{:02}", d.hour12().1),
            ('m', 1) => d.minute().to_string(),
            ('m', 2) => format!("{:02}", d.minute()),
            ('s', 1) => d.second().to_string(),
            ('s', 2) => format!("{:02}", d.second()),

            ('a', 1..=3) => self.localize.day_period(d.hour12().0).to_string(),

            ('M' | 'd' | 'E' | 'e' | 'H' | 'h' | 'm' | 's' | 'a', _) => {
                return Err(unsupported_width(letter, width))
            }
            _ => return Err(unescaped(letter)),
        };
        Ok(text)
    }

    fn day_name(&self, width: NameWidth) -> String {
        self.localize.day(self.local.weekday(), width).to_string()
    }

    fn month_name(&self, width: NameWidth) -> String {
        self.localize.month(self.local.month(), width).to_string()
    }

    /// 1-based position of the weekday in a week starting on `week_starts_on`.
    fn local_day_of_week(&self) -> u32 {
        (self.local.weekday().num_days_from_sunday() + 7 - self.week_starts_on) % 7 + 1
    }
}

fn long_width(letter: char, width: usize) -> Result<FormatWidth> {
    match width {
        1 => Ok(FormatWidth::Short),
        2 => Ok(FormatWidth::Medium),
        3 => Ok(FormatWidth::Long),
        4 => Ok(FormatWidth::Full),
        _ => Err(unsupported_width(letter, width)),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{FormatRelative, FR_CH, UG};
    use chrono::{TimeZone, Utc};

    /// Monday, October 19 2026, 16:30:05 UTC.
    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 16, 30, 5).unwrap()
    }

    fn en(pattern: &str) -> String {
        format(monday(), pattern, &FormatOptions::default()).unwrap()
    }

    fn fr(pattern: &str) -> String {
        let options = FormatOptions::default().with_locale(&FR_CH);
        format(monday(), pattern, &options).unwrap()
    }

    // ── tokenizer ───────────────────────────────────────────────────────

    #[test]
    fn test_tokenize_quoted_and_bracketed_literals() {
        let parts = tokenize("'at' [à] H").unwrap();
        assert_eq!(
            parts,
            vec![
                Part::Literal("at à ".to_string()),
                Part::Field {
                    letter: 'H',
                    width: 1
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_escaped_quotes() {
        assert_eq!(en("''"), "'");
        assert_eq!(en("'o''clock'"), "o'clock");
    }

    #[test]
    fn test_tokenize_unterminated_literals_run_to_end() {
        assert_eq!(en("'yyyy"), "yyyy");
        assert_eq!(en("[yyyy"), "yyyy");
    }

    #[test]
    fn test_tokenize_moment_shorthands() {
        let parts = tokenize("L LL LT LTS").unwrap();
        let moments: Vec<_> = parts
            .into_iter()
            .filter_map(|p| match p {
                Part::Moment(m) => Some(m),
                _ => None,
            })
            .collect();
        assert_eq!(
            moments,
            vec![
                Moment::ShortDate,
                Moment::LongDate,
                Moment::ShortTime,
                Moment::MediumTime
            ]
        );
    }

    #[test]
    fn test_non_latin_text_passes_through() {
        assert_eq!(en("— ۆ, é"), "— ۆ, é");
    }

    // ── fields ──────────────────────────────────────────────────────────

    #[test]
    fn test_numeric_fields() {
        assert_eq!(en("yyyy-MM-dd HH:mm:ss"), "2026-10-19 16:30:05");
        assert_eq!(en("y yy M d H m s"), "2026 26 10 19 16 30 5");
    }

    #[test]
    fn test_long_year_runs_are_zero_padded() {
        assert_eq!(en("yyy"), "2026");
        assert_eq!(en("yyyyyy"), "002026");
    }

    #[test]
    fn test_dates_at_the_edge_of_time_are_rejected() {
        let options = FormatOptions::default().with_timezone(chrono_tz::Asia::Tokyo);
        let max = DateTime::<Utc>::MAX_UTC.timestamp_millis();
        assert_eq!(format(max, "P", &options).unwrap_err(), FormatError::InvalidTime);
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(en("h:mm a"), "4:30 PM");
        assert_eq!(en("hh a"), "04 PM");
        let midnight = Utc.with_ymd_and_hms(2026, 10, 19, 0, 15, 0).unwrap();
        let text = format(midnight, "h:mm a", &FormatOptions::default()).unwrap();
        assert_eq!(text, "12:15 AM");
    }

    #[test]
    fn test_named_fields() {
        assert_eq!(en("EEEE EEE EEEEE"), "Monday Mon M");
        assert_eq!(en("MMMM MMM MMMMM"), "October Oct O");
        assert_eq!(en("dddd ddd"), "Monday Mon");
        assert_eq!(en("eeee"), "Monday");
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(en("do"), "19th");
        assert_eq!(en("Mo"), "10th");
        assert_eq!(fr("do"), "19e");
    }

    #[test]
    fn test_local_day_of_week_honours_week_start() {
        let sunday_first = FormatOptions::default();
        assert_eq!(format(monday(), "e", &sunday_first).unwrap(), "2");
        let monday_first = FormatOptions::default().with_week_starts_on(1);
        assert_eq!(format(monday(), "e", &monday_first).unwrap(), "1");
        let saturday_first = FormatOptions::default().with_week_starts_on(6);
        assert_eq!(format(monday(), "ee", &saturday_first).unwrap(), "03");
    }

    // ── long formats ────────────────────────────────────────────────────

    #[test]
    fn test_en_us_long_formats() {
        assert_eq!(en("P"), "10/19/2026");
        assert_eq!(en("PP"), "Oct 19, 2026");
        assert_eq!(en("PPP"), "October 19th, 2026");
        assert_eq!(en("PPPP"), "Monday, October 19th, 2026");
        assert_eq!(en("p"), "4:30 PM");
        assert_eq!(en("pp"), "4:30:05 PM");
    }

    #[test]
    fn test_fr_ch_long_formats() {
        assert_eq!(fr("L"), "19.10.2026");
        assert_eq!(fr("LL"), "19 octobre 2026");
        assert_eq!(fr("LT"), "16:30");
        assert_eq!(fr("LTS"), "16:30:05");
        assert_eq!(fr("PPPP"), "lundi 19 octobre 2026");
        assert_eq!(fr("[hier] dddd [à] LT"), "hier lundi à 16:30");
    }

    #[test]
    fn test_ug_long_formats() {
        let options = FormatOptions::default().with_locale(&UG);
        assert_eq!(format(monday(), "P", &options).unwrap(), "10/19/2026");
        assert_eq!(format(monday(), "eeee", &options).unwrap(), "دۈشەنبە");
        assert_eq!(format(monday(), "p", &options).unwrap(), "4:30 چ");
    }

    #[test]
    fn test_timezone_shifts_fields() {
        let options = FormatOptions::default().with_timezone(chrono_tz::Asia::Tokyo);
        assert_eq!(format(monday(), "P HH:mm", &options).unwrap(), "10/20/2026 01:30");
    }

    #[test]
    fn test_accepts_timestamps() {
        let ms = monday().timestamp_millis();
        assert_eq!(format(ms, "P", &FormatOptions::default()).unwrap(), "10/19/2026");
        let text = format(ms as f64, "P", &FormatOptions::default()).unwrap();
        assert_eq!(text, "10/19/2026");
    }

    // ── errors ──────────────────────────────────────────────────────────

    #[test]
    fn test_unknown_letter_is_rejected() {
        let err = format(monday(), "yyyy Q", &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidFormat(_)));
        assert!(err.to_string().contains("unescaped latin alphabet character `Q`"), "got: {err}");
    }

    #[test]
    fn test_unsupported_width_is_rejected() {
        let err = format(monday(), "MMMMMM", &FormatOptions::default()).unwrap_err();
        assert!(err.to_string().contains("`MMMMMM` is not a supported token"), "got: {err}");
        assert!(format(monday(), "PPPPP", &FormatOptions::default()).is_err());
        assert!(format(monday(), "LLL", &FormatOptions::default()).is_err());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let err = format(f64::NAN, "P", &FormatOptions::default()).unwrap_err();
        assert_eq!(err, FormatError::InvalidTime);
        assert_eq!(err.to_string(), "Invalid time value");
    }

    #[test]
    fn test_week_start_out_of_range_is_rejected() {
        let options = FormatOptions::default().with_week_starts_on(7);
        let err = format(monday(), "P", &options).unwrap_err();
        assert!(matches!(err, FormatError::InvalidOption(_)), "got: {err}");
    }

    #[derive(Debug)]
    struct SelfReferential;

    impl Locale for SelfReferential {
        fn code(&self) -> &str {
            "xx-LOOP"
        }
        fn localize(&self) -> Option<&dyn Localize> {
            crate::locale::EN_US.localize()
        }
        fn format_long(&self) -> Option<&dyn FormatLong> {
            Some(self)
        }
        fn format_relative(&self) -> Option<&dyn FormatRelative> {
            None
        }
    }

    impl FormatLong for SelfReferential {
        fn date(&self, _width: FormatWidth) -> &str {
            "P"
        }
        fn time(&self, _width: FormatWidth) -> &str {
            "HH:mm"
        }
    }

    #[test]
    fn test_nested_long_formats_are_rejected() {
        let options = FormatOptions::default().with_locale(&SelfReferential);
        assert_eq!(format(monday(), "p", &options).unwrap(), "16:30");
        let err = format(monday(), "P", &options).unwrap_err();
        assert!(matches!(err, FormatError::InvalidFormat(_)), "got: {err}");
    }

    #[test]
    fn test_format_does_not_need_relative_capability() {
        // format only needs localize + formatLong.
        let options = FormatOptions::default().with_locale(&SelfReferential);
        assert!(format(monday(), "yyyy", &options).is_ok());
    }
}
