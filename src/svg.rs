use crate::grid::{is_weekend_column, GridDay, MonthGrid, DAYS_IN_WEEK};
use crate::holidays::{DayKind, HolidayCalendar, HolidayTable};
use crate::numeral::{Numerals, Radix};
use crate::theme::{TextStyle, Theme};
use std::fmt;
use std::iter::successors;
use thiserror::Error;
use time::{error::ComponentRange, Month};

static PROLOG: &str = concat!(
    r#"<?xml version="1.0" standalone="no"?>"#,
    r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "#,
    r#""http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
);

static SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Months per row of the page
const MONTH_COLUMNS: u8 = 4;

/// Inset of the page border from the edge of the canvas
const BORDER_INSET: f64 = 0.25;

/// How much narrower and shorter the page border is than the canvas
const BORDER_SHRINK: f64 = 0.75;

/// A one-page calendar for a single year.  Formatting it with `Display`
/// produces the complete SVG document.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SvgCalendar {
    year: i32,
    radix: Radix,
    theme: Theme,
    numerals: Numerals,
    holidays: HolidayCalendar,
    // Invariant: all twelve months, in order
    months: Vec<(Month, Vec<GridDay>)>,
}

impl SvgCalendar {
    pub(crate) fn new(year: i32, radix: Radix) -> Result<SvgCalendar, CalendarError> {
        let mut months = Vec::with_capacity(12);
        for month in successors(Some(Month::January), |&m| Some(m.next())).take(12) {
            let days = MonthGrid::new(year, month)
                .map_err(|source| CalendarError::Year { year, source })?
                .collect::<Vec<_>>();
            months.push((month, days));
        }
        Ok(SvgCalendar {
            year,
            radix,
            theme: Theme::default(),
            numerals: Numerals::new(year, radix),
            holidays: HolidayCalendar::new(HolidayTable::default(), year),
            months,
        })
    }

    pub(crate) fn holiday_table(mut self, table: HolidayTable) -> SvgCalendar {
        self.holidays = HolidayCalendar::new(table, self.year);
        self
    }

    fn write_document(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let theme = &self.theme;
        f.write_str(PROLOG)?;
        write!(
            f,
            r#"<svg width="{}" height="{}" version="1.1" xmlns="{SVG_NS}">"#,
            Mm(theme.width),
            Mm(theme.height),
        )?;
        write!(f, "<desc>Calendar {}</desc>", self.year)?;
        write!(
            f,
            r##"<g><rect x="{inset}" y="{inset}" width="{}" height="{}" rx="2.5mm" fill="#fff" stroke="{}" stroke-width="0.5mm"/></g>"##,
            Mm(theme.width - BORDER_SHRINK),
            Mm(theme.height - BORDER_SHRINK),
            Escaped(theme.border_color),
            inset = Mm(BORDER_INSET),
        )?;
        self.write_year(f, theme.year_padding_left, 0.0)?;
        f.write_str("</svg>")
    }

    fn write_year(&self, f: &mut fmt::Formatter<'_>, x: f64, y: f64) -> fmt::Result {
        let theme = &self.theme;
        f.write_str("<g>")?;
        Label {
            x: x + theme.width / 2.0,
            y: y + theme.year_padding_top,
            style: &theme.year,
            fill: theme.year.color,
            text: self.numerals.year(),
        }
        .write(f)?;
        for (i, (month, days)) in (0u8..).zip(&self.months) {
            let col = f64::from(i % MONTH_COLUMNS);
            let row = f64::from(i / MONTH_COLUMNS);
            self.write_month(
                f,
                col.mul_add(theme.month_width + theme.month_margin_right, x),
                row.mul_add(
                    theme.month_height + theme.month_margin_bottom,
                    y + theme.month_offset_top,
                ),
                *month,
                days,
            )?;
        }
        f.write_str("</g>")
    }

    fn write_month(
        &self,
        f: &mut fmt::Formatter<'_>,
        x: f64,
        y: f64,
        month: Month,
        days: &[GridDay],
    ) -> fmt::Result {
        let theme = &self.theme;
        f.write_str("<g>")?;
        Label {
            x: x + theme.month_width / 2.0,
            y: y + theme.month_padding_top,
            style: &theme.month,
            fill: theme.month.color,
            text: self.numerals.month(month),
        }
        .write(f)?;
        self.write_week_header(f, x, y + theme.week_padding_top)?;
        for cell in days {
            self.write_day(
                f,
                theme.day_width.mul_add(f64::from(cell.column), x),
                f64::from(cell.row).mul_add(theme.day_height, y + theme.day_padding_top),
                cell,
            )?;
        }
        f.write_str("</g>")
    }

    fn write_week_header(&self, f: &mut fmt::Formatter<'_>, x: f64, y: f64) -> fmt::Result {
        let theme = &self.theme;
        f.write_str("<g>")?;
        for i in 0..DAYS_IN_WEEK {
            let fill = if is_weekend_column(i) {
                theme.week_weekend_color
            } else {
                theme.week.color
            };
            Label {
                x: (f64::from(i) + 0.5).mul_add(theme.day_width, x),
                y,
                style: &theme.week,
                fill,
                text: self.numerals.weekday(i),
            }
            .write(f)?;
        }
        f.write_str("</g>")
    }

    fn write_day(&self, f: &mut fmt::Formatter<'_>, x: f64, y: f64, cell: &GridDay) -> fmt::Result {
        let theme = &self.theme;
        let fill = match self.holidays.day_kind(cell.date) {
            DayKind::Special => theme.day_special_color,
            DayKind::Holiday => theme.day_holiday_color,
            DayKind::Normal => theme.day.color,
        };
        Label {
            x: x + theme.day_width / 2.0,
            y,
            style: &theme.day,
            fill,
            text: self.numerals.day(cell.date.day()),
        }
        .write(f)
    }
}

impl fmt::Display for SvgCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        log::debug!(
            "Rendering calendar for {} in base {}",
            self.year,
            self.radix
        );
        self.write_document(f)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum CalendarError {
    #[error("cannot draw a calendar for year {year}")]
    Year {
        year: i32,
        #[source]
        source: ComponentRange,
    },
}

/// A horizontally-centered `<text>` element
#[derive(Clone, Copy, Debug, PartialEq)]
struct Label<'a> {
    x: f64,
    y: f64,
    style: &'a TextStyle,
    fill: &'a str,
    text: &'a str,
}

impl Label<'_> {
    fn write(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
            Mm(self.x),
            Mm(self.y),
            Escaped(self.style.font_family),
            Mm(self.style.font_size),
            Escaped(self.fill),
            Escaped(self.text),
        )
    }
}

/// A length in millimeters
#[derive(Clone, Copy, Debug, PartialEq)]
struct Mm(f64);

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// Text or attribute value with XML special characters escaped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(i) = rest.find(['&', '<', '>', '"', '\'']) {
            let (before, after) = rest.split_at(i);
            f.write_str(before)?;
            let mut chars = after.chars();
            let entity = match chars.next() {
                Some('&') => "&amp;",
                Some('<') => "&lt;",
                Some('>') => "&gt;",
                Some('"') => "&quot;",
                _ => "&apos;",
            };
            f.write_str(entity)?;
            rest = chars.as_str();
        }
        f.write_str(rest)
    }
}
