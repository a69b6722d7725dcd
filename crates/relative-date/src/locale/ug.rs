//! Uyghur (Arabic script, right-to-left).
//!
//! Literals are single-quoted; weekday and time come from `eeee` and `p`.

use chrono::{NaiveDateTime, Weekday};

use super::{
    month_index, sunday_index, FormatLong, FormatRelative, FormatWidth, Localize, Locale,
    NameWidth,
};
use crate::format::FormatOptions;
use crate::relative::RelativeToken;

const DAYS_NARROW: [&str; 7] = ["ي", "د", "س", "چ", "پ", "ج", "ش"];
const DAYS_WIDE: [&str; 7] = [
    "يەكشەنبە",
    "دۈشەنبە",
    "سەيشەنبە",
    "چارشەنبە",
    "پەيشەنبە",
    "جۈمە",
    "شەنبە",
];

const MONTHS_NARROW: [&str; 12] = ["ي", "ف", "م", "ا", "م", "ى", "ى", "ا", "س", "ۆ", "ن", "د"];
const MONTHS_WIDE: [&str; 12] = [
    "يانۋار",
    "فېۋىرال",
    "مارت",
    "ئاپرىل",
    "ماي",
    "ئىيۇن",
    "ئىيول",
    "ئاۋغۇست",
    "سىنتەبىر",
    "ئۆكتەبىر",
    "نويابىر",
    "دىكابىر",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Ug;

pub static UG: Ug = Ug;

impl Locale for Ug {
    fn code(&self) -> &str {
        "ug"
    }

    fn localize(&self) -> Option<&dyn Localize> {
        Some(self)
    }

    fn format_long(&self) -> Option<&dyn FormatLong> {
        Some(self)
    }

    fn format_relative(&self) -> Option<&dyn FormatRelative> {
        Some(self)
    }
}

impl Localize for Ug {
    fn ordinal_number(&self, n: u32) -> String {
        n.to_string()
    }

    // Abbreviated names are the wide names.
    fn day(&self, weekday: Weekday, width: NameWidth) -> &str {
        match width {
            NameWidth::Narrow => DAYS_NARROW[sunday_index(weekday)],
            NameWidth::Abbreviated | NameWidth::Wide => DAYS_WIDE[sunday_index(weekday)],
        }
    }

    fn month(&self, month: u32, width: NameWidth) -> &str {
        match width {
            NameWidth::Narrow => MONTHS_NARROW[month_index(month)],
            NameWidth::Abbreviated | NameWidth::Wide => MONTHS_WIDE[month_index(month)],
        }
    }

    fn day_period(&self, is_pm: bool) -> &str {
        if is_pm {
            "چ"
        } else {
            "ئە"
        }
    }
}

impl FormatLong for Ug {
    fn date(&self, width: FormatWidth) -> &str {
        match width {
            FormatWidth::Full => "EEEE, MMMM do, y",
            FormatWidth::Long => "MMMM do, y",
            FormatWidth::Medium => "MMM d, y",
            FormatWidth::Short => "MM/dd/yyyy",
        }
    }

    fn time(&self, width: FormatWidth) -> &str {
        match width {
            FormatWidth::Full | FormatWidth::Long | FormatWidth::Medium => "h:mm:ss a",
            FormatWidth::Short => "h:mm a",
        }
    }
}

impl FormatRelative for Ug {
    fn resolve(
        &self,
        token: RelativeToken,
        _date: NaiveDateTime,
        _base_date: NaiveDateTime,
        _options: &FormatOptions<'_>,
    ) -> String {
        match token {
            RelativeToken::LastWeek => "'ئ\u{200d}ۆتكەن' eeee 'دە' p",
            RelativeToken::Yesterday => "'تۈنۈگۈن دە' p",
            RelativeToken::Today => "'بۈگۈن دە' p",
            RelativeToken::Tomorrow => "'ئەتە دە' p",
            RelativeToken::NextWeek => "eeee 'دە' p",
            RelativeToken::Other => "P",
        }
        .to_string()
    }
}
