use time::{error::ComponentRange, Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: u8 = 7;

/// Columns (counting from Monday = 0) drawn in the weekend color
const WEEKEND_COLUMNS: [u8; 2] = [5, 6];

pub(crate) fn is_weekend_column(index0: u8) -> bool {
    WEEKEND_COLUMNS.contains(&index0)
}

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;

    fn is_weekend(&self) -> bool {
        is_weekend_column(self.index0())
    }
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_monday()
    }
}

/// A day's cell within its month's grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridDay {
    pub(crate) date: Date,
    /// Weekday, Monday = 0
    pub(crate) column: u8,
    /// Week of the month, starting at 1
    pub(crate) row: u8,
}

/// Iterator over every day of a month in date order, placing each one in the
/// month's grid.  A new row starts after every Sunday.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: Month,
    next_date: Option<Date>,
    row: u8,
}

impl MonthGrid {
    pub(crate) fn new(year: i32, month: Month) -> Result<MonthGrid, ComponentRange> {
        let first = Date::from_calendar_date(year, month, 1)?;
        Ok(MonthGrid {
            month,
            next_date: Some(first),
            row: 1,
        })
    }
}

impl Iterator for MonthGrid {
    type Item = GridDay;

    fn next(&mut self) -> Option<GridDay> {
        let date = self.next_date.filter(|d| d.month() == self.month)?;
        let cell = GridDay {
            date,
            column: date.weekday().index0(),
            row: self.row,
        };
        if date.weekday() == Weekday::Sunday {
            self.row += 1;
        }
        self.next_date = date.next_day();
        Some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_weekday_index() {
        assert_eq!(Weekday::Monday.index0(), 0);
        assert_eq!(Weekday::Friday.index0(), 4);
        assert_eq!(Weekday::Saturday.index0(), 5);
        assert_eq!(Weekday::Sunday.index0(), 6);
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
        assert!(!is_weekend_column(0));
    }

    #[test]
    fn test_february_2015() {
        let mut grid = MonthGrid::new(2015, Month::February).unwrap();
        assert_eq!(
            grid.next(),
            Some(GridDay {
                date: date!(2015 - 02 - 01),
                column: 6,
                row: 1
            })
        );
        assert_eq!(
            grid.next(),
            Some(GridDay {
                date: date!(2015 - 02 - 02),
                column: 0,
                row: 2
            })
        );
        let rest = grid.collect::<Vec<_>>();
        assert_eq!(rest.len(), 26);
        assert_eq!(
            rest.last(),
            Some(&GridDay {
                date: date!(2015 - 02 - 28),
                column: 5,
                row: 5
            })
        );
    }

    #[test]
    fn test_six_row_month() {
        // August 2015 starts on a Saturday and ends on a Monday
        let days = MonthGrid::new(2015, Month::August)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(days.len(), 31);
        assert_eq!((days[0].column, days[0].row), (5, 1));
        assert_eq!((days[30].column, days[30].row), (0, 6));
    }

    #[test]
    fn test_month_lengths() {
        for (year, month, len) in [
            (2015, Month::January, 31),
            (2015, Month::February, 28),
            (2016, Month::February, 29),
            (2015, Month::April, 30),
            (2015, Month::December, 31),
        ] {
            assert_eq!(
                MonthGrid::new(year, month).unwrap().count(),
                len,
                "{month} {year}"
            );
        }
    }

    #[test]
    fn test_cells_follow_dates() {
        for month in [Month::January, Month::June, Month::November] {
            let mut prev: Option<GridDay> = None;
            for cell in MonthGrid::new(2015, month).unwrap() {
                assert_eq!(cell.column, cell.date.weekday().index0());
                if let Some(p) = prev {
                    assert_eq!(p.date.next_day(), Some(cell.date));
                    let expected_row = if p.column == 6 { p.row + 1 } else { p.row };
                    assert_eq!(cell.row, expected_row);
                } else {
                    assert_eq!(cell.date.day(), 1);
                    assert_eq!(cell.row, 1);
                }
                prev = Some(cell);
            }
        }
    }

    #[test]
    fn test_end_of_time() {
        let days = MonthGrid::new(9999, Month::December)
            .unwrap()
            .collect::<Vec<_>>();
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn test_out_of_range_year() {
        assert!(MonthGrid::new(10_000, Month::January).is_err());
    }
}
