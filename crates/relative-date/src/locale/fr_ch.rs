//! French (Switzerland).
//!
//! The relative table uses bracket-quoted literals (`[demain à] LT`) and the
//! `dddd` / `LT` / `L` tokens.

use chrono::{NaiveDateTime, Weekday};

use super::{
    month_index, sunday_index, FormatLong, FormatRelative, FormatWidth, Localize, Locale,
    NameWidth,
};
use crate::format::FormatOptions;
use crate::relative::RelativeToken;

const DAYS_NARROW: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];
const DAYS_ABBREVIATED: [&str; 7] = ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."];
const DAYS_WIDE: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTHS_NARROW: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];
const MONTHS_ABBREVIATED: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const MONTHS_WIDE: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FrCh;

pub static FR_CH: FrCh = FrCh;

impl Locale for FrCh {
    fn code(&self) -> &str {
        "fr-CH"
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

impl Localize for FrCh {
    fn ordinal_number(&self, n: u32) -> String {
        if n == 1 {
            "1er".to_string()
        } else {
            format!("{n}e")
        }
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

impl FormatLong for FrCh {
    fn date(&self, width: FormatWidth) -> &str {
        match width {
            FormatWidth::Full => "EEEE d MMMM y",
            FormatWidth::Long => "d MMMM y",
            FormatWidth::Medium => "d MMM y",
            FormatWidth::Short => "dd.MM.y",
        }
    }

    fn time(&self, width: FormatWidth) -> &str {
        match width {
            FormatWidth::Full | FormatWidth::Long | FormatWidth::Medium => "HH:mm:ss",
            FormatWidth::Short => "HH:mm",
        }
    }
}

impl FormatRelative for FrCh {
    fn resolve(
        &self,
        token: RelativeToken,
        _date: NaiveDateTime,
        _base_date: NaiveDateTime,
        _options: &FormatOptions<'_>,
    ) -> String {
        match token {
            RelativeToken::LastWeek => "[hier] dddd [à] LT",
            RelativeToken::Yesterday => "[hier à] LT",
            RelativeToken::Today => "[aujourd’hui à] LT",
            RelativeToken::Tomorrow => "[demain à] LT",
            RelativeToken::NextWeek => "dddd [à] LT",
            RelativeToken::Other => "L",
        }
        .to_string()
    }
}
