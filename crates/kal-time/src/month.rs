//! `Month` — month-of-year enum.

use kal_core::errors::{Error, Result};
use std::str::FromStr;

/// Month of the year, numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// Validated factory: like [`Month::from_number`] but with a typed error.
    pub fn of(n: u8) -> Result<Self> {
        Self::from_number(n).ok_or_else(|| Error::OutOfRange(format!("month {n} out of range [1, 12]")))
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the maximum possible length of this month in days.
    ///
    /// February resolves to 29; whether a given February actually has 29
    /// days is calendar-dependent and decided by the calendar facade, not
    /// by the month itself.
    pub fn max_length(&self) -> u8 {
        match self {
            Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December => 31,
            Month::April | Month::June | Month::September | Month::November => 30,
            Month::February => 29,
        }
    }

    /// Return the three-letter abbreviation (`"Jan"`, `"Feb"`, …).
    pub fn short_name(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Return the full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Advance to the next month.
    ///
    /// There is no carry into a year at this level: incrementing December is
    /// an arithmetic error.
    pub fn increment(self) -> Result<Self> {
        Self::from_number(self.number() + 1)
            .ok_or_else(|| Error::Arithmetic("cannot increment December".into()))
    }

    /// Move back to the previous month.
    ///
    /// Decrementing January is an arithmetic error.
    pub fn decrement(self) -> Result<Self> {
        self.number()
            .checked_sub(1)
            .and_then(Self::from_number)
            .ok_or_else(|| Error::Arithmetic("cannot decrement January".into()))
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse a plain decimal month number, applying the same bounds as
    /// [`Month::of`].
    fn from_str(s: &str) -> Result<Self> {
        let n: u8 = s
            .parse()
            .map_err(|_| Error::Malformed(format!("{s:?} is not a month number")))?;
        Self::of(n)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
