//! English (United States). The default locale.

use chrono::{NaiveDateTime, Weekday};

use super::{
    month_index, sunday_index, FormatLong, FormatRelative, FormatWidth, Localize, Locale,
    NameWidth,
};
use crate::format::FormatOptions;
use crate::relative::RelativeToken;

const DAYS_NARROW: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
const DAYS_ABBREVIATED: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const DAYS_WIDE: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
const MONTHS_ABBREVIATED: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_WIDE: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnUs;

pub static EN_US: EnUs = EnUs;

impl Locale for EnUs {
    fn code(&self) -> &str {
        "en-US"
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

impl Localize for EnUs {
    fn ordinal_number(&self, n: u32) -> String {
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{n}{suffix}")
    }

    fn day(&self, weekday: Weekday, width: NameWidth) -> &str {
        let table = match width {
            NameWidth::Narrow => &DAYS_NARROW,
            NameWidth::Abbreviated => &DAYS_ABBREVIATED,
            NameWidth::Wide => &DAYS_WIDE,
        };
        table[sunday_index(weekday)]
    }

    fn month(&self, month: u32, width: NameWidth) -> &str {
        let table = match width {
            NameWidth::Narrow => &MONTHS_NARROW,
            NameWidth::Abbreviated => &MONTHS_ABBREVIATED,
            NameWidth::Wide => &MONTHS_WIDE,
        };
        table[month_index(month)]
    }

    fn day_period(&self, is_pm: bool) -> &str {
        if is_pm {
            "PM"
        } else {
            "AM"
        }
    }
}

impl FormatLong for EnUs {
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

impl FormatRelative for EnUs {
    fn resolve(
        &self,
        token: RelativeToken,
        _date: NaiveDateTime,
        _base_date: NaiveDateTime,
        _options: &FormatOptions<'_>,
    ) -> String {
        match token {
            RelativeToken::LastWeek => "'last' eeee 'at' p",
            RelativeToken::Yesterday => "'yesterday at' p",
            RelativeToken::Today => "'today at' p",
            RelativeToken::Tomorrow => "'tomorrow at' p",
            RelativeToken::NextWeek => "eeee 'at' p",
            RelativeToken::Other => "P",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "4th"), (11, "11th")];
        for (n, expected) in cases {
            assert_eq!(EN_US.ordinal_number(n), expected);
        }
        assert_eq!(EN_US.ordinal_number(12), "12th");
        assert_eq!(EN_US.ordinal_number(13), "13th");
        assert_eq!(EN_US.ordinal_number(21), "21st");
        assert_eq!(EN_US.ordinal_number(22), "22nd");
        assert_eq!(EN_US.ordinal_number(111), "111th");
    }

    #[test]
    fn test_day_and_month_names() {
        assert_eq!(EN_US.day(Weekday::Mon, NameWidth::Wide), "Monday");
        assert_eq!(EN_US.day(Weekday::Sun, NameWidth::Abbreviated), "Sun");
        assert_eq!(EN_US.month(10, NameWidth::Wide), "October");
        assert_eq!(EN_US.month(1, NameWidth::Narrow), "J");
    }
}
