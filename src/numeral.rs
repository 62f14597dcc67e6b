use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;
use time::Month;

/// A numeral base.  Digits are `0`-`9`, then `a`, `b`, `c`, ... continuing
/// through the character set past `z` for bases above 36.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Radix(u32);

impl Radix {
    pub(crate) const MIN: u32 = 2;
    /// Largest base whose top digit still lands below the surrogate block
    pub(crate) const MAX: u32 = 0xD800 - DIGIT_TEN + 10;
    pub(crate) const OCTAL: Radix = Radix(8);

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    pub(crate) fn format(self, n: i64) -> String {
        to_base(n, self)
    }
}

impl Default for Radix {
    fn default() -> Radix {
        Radix::OCTAL
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Radix {
    type Error = InvalidRadixError;

    fn try_from(value: u32) -> Result<Radix, InvalidRadixError> {
        if (Radix::MIN..=Radix::MAX).contains(&value) {
            Ok(Radix(value))
        } else {
            Err(InvalidRadixError(value))
        }
    }
}

impl FromStr for Radix {
    type Err = ParseRadixError;

    fn from_str(s: &str) -> Result<Radix, ParseRadixError> {
        Ok(Radix::try_from(s.trim().parse::<u32>()?)?)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("base must be between {min} and {max}, got {0}", min = Radix::MIN, max = Radix::MAX)]
pub(crate) struct InvalidRadixError(pub(crate) u32);

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseRadixError {
    #[error("base is not an integer: {0}")]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Range(#[from] InvalidRadixError),
}

/// Code point of the digit with value 10
const DIGIT_TEN: u32 = 0x61;

fn digit_to_char(d: u32) -> Option<char> {
    if d < 10 {
        char::from_digit(d, 10)
    } else {
        char::from_u32(DIGIT_TEN + d - 10)
    }
}

/// Write `n` in the given base, with a leading `-` for negative numbers
pub(crate) fn to_base(n: i64, radix: Radix) -> String {
    let base = u64::from(radix.get());
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let d = u32::try_from(magnitude % base).expect("remainder should be less than the base");
        digits.push(digit_to_char(d).expect("every digit of a valid base should have a character"));
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Left-pad every label with zeros so that all of them are as long as the
/// longest one.  A leading sign stays in front of the padding.
pub(crate) fn zfill_list<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let width = labels
        .iter()
        .map(|s| s.as_ref().chars().count())
        .max()
        .unwrap_or_default();
    labels.iter().map(|s| zfill(s.as_ref(), width)).collect()
}

fn zfill(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    let (sign, digits) = match s.chars().next() {
        Some(c @ ('-' | '+')) => s.split_at(c.len_utf8()),
        _ => ("", s),
    };
    format!("{sign}{}{digits}", "0".repeat(fill))
}

/// Every label drawn on the calendar for one year, in one base
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Numerals {
    year: String,
    // Invariant: 12 entries
    months: Vec<String>,
    // Invariant: 7 entries, Monday first
    weekdays: Vec<String>,
    // Invariant: 31 entries
    days: Vec<String>,
}

impl Numerals {
    pub(crate) fn new(year: i32, radix: Radix) -> Numerals {
        let labels = |range: std::ops::RangeInclusive<i64>| {
            zfill_list(&range.map(|i| radix.format(i)).collect::<Vec<_>>())
        };
        Numerals {
            year: radix.format(i64::from(year)),
            months: labels(1..=12),
            weekdays: labels(1..=7),
            days: labels(1..=31),
        }
    }

    pub(crate) fn year(&self) -> &str {
        &self.year
    }

    pub(crate) fn month(&self, month: Month) -> &str {
        &self.months[usize::from(u8::from(month)) - 1]
    }

    /// `index0` counts from Monday = 0
    pub(crate) fn weekday(&self, index0: u8) -> &str {
        &self.weekdays[usize::from(index0)]
    }

    pub(crate) fn day(&self, day: u8) -> &str {
        &self.days[usize::from(day) - 1]
    }
}
