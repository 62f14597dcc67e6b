use crate::grid::WeekdayExt;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, Month, Month::*, Weekday};

pub(crate) type MonthDay = (Month, u8);

static PUBLIC: &[(i32, &[MonthDay])] = &[(
    2015,
    &[
        (January, 1),
        (January, 6),
        (April, 3),
        (April, 6),
        (May, 1),
        (May, 14),
        (May, 25),
        (June, 4),
        (August, 15),
        (October, 3),
        (November, 1),
        (December, 25),
        (December, 26),
    ],
)];

static PUBLIC_RU: &[(i32, &[MonthDay])] = &[(
    2015,
    &[
        (January, 1),
        (January, 2),
        (January, 3),
        (January, 4),
        (January, 5),
        (January, 6),
        (January, 7),
        (January, 8),
        (January, 9),
        (January, 10),
        (January, 11),
        (February, 21),
        (February, 22),
        (February, 23),
        (March, 7),
        (March, 8),
        (March, 9),
        (May, 1),
        (May, 2),
        (May, 3),
        (May, 4),
        (May, 9),
        (May, 10),
        (May, 11),
        (June, 12),
        (June, 13),
        (June, 14),
        (November, 4),
    ],
)];

/// Which list of public holidays to highlight
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum HolidayTable {
    #[default]
    Public,
    PublicRu,
}

impl HolidayTable {
    fn entries(self) -> &'static [(i32, &'static [MonthDay])] {
        match self {
            HolidayTable::Public => PUBLIC,
            HolidayTable::PublicRu => PUBLIC_RU,
        }
    }

    fn name(self) -> &'static str {
        match self {
            HolidayTable::Public => "public",
            HolidayTable::PublicRu => "public-ru",
        }
    }
}

impl fmt::Display for HolidayTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HolidayTable {
    type Err = UnknownTableError;

    fn from_str(s: &str) -> Result<HolidayTable, UnknownTableError> {
        [HolidayTable::Public, HolidayTable::PublicRu]
            .into_iter()
            .find(|table| table.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTableError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown holiday table {0:?}; expected \"public\" or \"public-ru\"")]
pub(crate) struct UnknownTableError(String);

pub(crate) fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the table's holidays for `year`, or an empty list if the table
/// does not cover that year
pub(crate) fn holidays(table: HolidayTable, year: i32) -> &'static [MonthDay] {
    table
        .entries()
        .iter()
        .find(|&&(y, _)| y == year)
        .map(|&(_, days)| days)
        .unwrap_or_default()
}

/// Sysadmin Day, Webmasters' Day, and Programmers' Day, in that order
pub(crate) fn specials(year: i32) -> [MonthDay; 3] {
    // Sysadmin Day is labeled on July 26 wherever the last Friday of July
    // falls.
    let sysadmin = (July, 26);
    let webmasters = (April, 4);
    // Day 256
    let programmers = if is_leap(year) {
        (September, 12)
    } else {
        (September, 13)
    };
    [sysadmin, webmasters, programmers]
}

/// How a day label is highlighted.  Later variants take priority.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) enum DayKind {
    Normal,
    Holiday,
    Special,
}

/// The holidays and special days of a single year
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HolidayCalendar {
    holidays: &'static [MonthDay],
    specials: [MonthDay; 3],
    // Weekend days that are working days
    not_holidays: Vec<MonthDay>,
}

impl HolidayCalendar {
    pub(crate) fn new(table: HolidayTable, year: i32) -> HolidayCalendar {
        let holidays = holidays(table, year);
        if holidays.is_empty() {
            log::debug!("No {table} holidays known for {year}; only weekends will be highlighted");
        } else {
            log::debug!("Loaded {} {table} holidays for {year}", holidays.len());
        }
        HolidayCalendar {
            holidays,
            specials: specials(year),
            not_holidays: Vec::new(),
        }
    }

    pub(crate) fn is_holiday(&self, month: Month, day: u8, weekday: Weekday) -> bool {
        if weekday.is_weekend() {
            !self.not_holidays.contains(&(month, day))
        } else {
            self.holidays.contains(&(month, day))
        }
    }

    pub(crate) fn is_special(&self, month: Month, day: u8, _weekday: Weekday) -> bool {
        self.specials.contains(&(month, day))
    }

    pub(crate) fn day_kind(&self, date: Date) -> DayKind {
        let (month, day, weekday) = (date.month(), date.day(), date.weekday());
        if self.is_special(month, day, weekday) {
            DayKind::Special
        } else if self.is_holiday(month, day, weekday) {
            DayKind::Holiday
        } else {
            DayKind::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_is_leap() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2015));
        assert!(is_leap(2016));
        assert!(is_leap(-4));
    }

    #[test]
    fn test_is_leap_agrees_with_calendar() {
        for year in 1583..=2400 {
            assert_eq!(
                is_leap(year),
                Date::from_calendar_date(year, February, 29).is_ok(),
                "year {year}"
            );
        }
    }

    #[test]
    fn test_specials() {
        assert_eq!(
            specials(2015),
            [(July, 26), (April, 4), (September, 13)]
        );
        assert_eq!(
            specials(2016),
            [(July, 26), (April, 4), (September, 12)]
        );
    }

    #[test]
    fn test_programmers_day_is_day_256() {
        for year in [2015, 2016, 2000, 1900] {
            let date = Date::from_ordinal_date(year, 256).unwrap();
            assert!(
                specials(year).contains(&(date.month(), date.day())),
                "{date} should be special"
            );
        }
    }

    #[test]
    fn test_public_holidays() {
        assert_eq!(
            holidays(HolidayTable::Public, 2015),
            [
                (January, 1),
                (January, 6),
                (April, 3),
                (April, 6),
                (May, 1),
                (May, 14),
                (May, 25),
                (June, 4),
                (August, 15),
                (October, 3),
                (November, 1),
                (December, 25),
                (December, 26),
            ]
        );
        assert!(holidays(HolidayTable::Public, 1999).is_empty());
    }

    #[test]
    fn test_public_ru_holidays() {
        let days = holidays(HolidayTable::PublicRu, 2015);
        assert_eq!(days.len(), 28);
        assert_eq!(days.first(), Some(&(January, 1)));
        assert_eq!(days.last(), Some(&(November, 4)));
        assert!(holidays(HolidayTable::PublicRu, 2016).is_empty());
    }

    #[test]
    fn test_parse_table() {
        assert_eq!("public".parse::<HolidayTable>(), Ok(HolidayTable::Public));
        assert_eq!("Public-RU".parse::<HolidayTable>(), Ok(HolidayTable::PublicRu));
        assert_eq!(
            "ru".parse::<HolidayTable>(),
            Err(UnknownTableError(String::from("ru")))
        );
        assert_eq!(HolidayTable::default(), HolidayTable::Public);
        assert_eq!(HolidayTable::PublicRu.to_string(), "public-ru");
    }

    #[test]
    fn test_weekends_are_holidays() {
        let cal = HolidayCalendar::new(HolidayTable::Public, 1999);
        assert!(cal.is_holiday(January, 2, Weekday::Saturday));
        assert!(cal.is_holiday(January, 3, Weekday::Sunday));
        assert!(!cal.is_holiday(January, 4, Weekday::Monday));
        assert!(!cal.is_holiday(January, 8, Weekday::Friday));
    }

    #[test]
    fn test_listed_weekdays_are_holidays() {
        let cal = HolidayCalendar::new(HolidayTable::Public, 2015);
        // Thursday
        assert!(cal.is_holiday(January, 1, Weekday::Thursday));
        assert!(!cal.is_holiday(January, 2, Weekday::Friday));
        let ru = HolidayCalendar::new(HolidayTable::PublicRu, 2015);
        assert!(ru.is_holiday(January, 2, Weekday::Friday));
    }

    #[test]
    fn test_is_special_ignores_weekday() {
        let cal = HolidayCalendar::new(HolidayTable::Public, 2015);
        assert!(cal.is_special(April, 4, Weekday::Saturday));
        assert!(cal.is_special(April, 4, Weekday::Monday));
        assert!(!cal.is_special(April, 5, Weekday::Sunday));
    }

    #[test]
    fn test_day_kind_priority() {
        let cal = HolidayCalendar::new(HolidayTable::Public, 2015);
        // Sunday, and special
        assert_eq!(cal.day_kind(date!(2015 - 07 - 26)), DayKind::Special);
        // Saturday
        assert_eq!(cal.day_kind(date!(2015 - 07 - 25)), DayKind::Holiday);
        // Christmas, a Friday
        assert_eq!(cal.day_kind(date!(2015 - 12 - 25)), DayKind::Holiday);
        assert_eq!(cal.day_kind(date!(2015 - 07 - 24)), DayKind::Normal);
        assert_eq!(cal.day_kind(date!(2015 - 09 - 13)), DayKind::Special);
        assert!(DayKind::Special > DayKind::Holiday);
        assert!(DayKind::Holiday > DayKind::Normal);
    }
}
