//! `Year` — a civil year tagged with its calendar system.
//!
//! Civil year numbering has no year 0: the year before 1 is −1.  Leap-year
//! arithmetic therefore runs on the *astronomical* numbering, which inserts
//! a year 0 so that civil −1 is astronomical 0, civil −2 is astronomical −1,
//! and so on.

use crate::duration::Years;
use kal_core::errors::{Error, Result};
use kal_core::{ensure_range, CalendarSystem};
use std::cmp::Ordering;

/// A civil year in a given [`CalendarSystem`].
///
/// The numeric value is never 0; constructors reject it.  Years of different
/// systems do not compare: `partial_cmp` returns `None` and [`Year::compare`]
/// returns [`Error::SystemMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year {
    system: CalendarSystem,
    value: i64,
}

impl Year {
    /// Create a year in the given calendar system.
    ///
    /// Returns an out-of-range error for year 0, which does not exist in the
    /// civil calendar.
    pub fn of(system: CalendarSystem, value: i64) -> Result<Self> {
        ensure_range!(value != 0, "year 0 does not exist in the civil calendar");
        Ok(Year { system, value })
    }

    /// Return the civil year number (never 0, negative for BC years).
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Return the calendar system this year is tagged with.
    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// Return the astronomical year number (civil −1 → 0, civil −2 → −1).
    pub fn astronomical(&self) -> i64 {
        if self.value > 0 {
            self.value
        } else {
            self.value + 1
        }
    }

    /// Return `true` if this year is a leap year under its own system's rule.
    ///
    /// The Julian rule is every fourth astronomical year; the Gregorian rule
    /// additionally skips century years not divisible by 400.  Country
    /// adoption never affects leapness, only day counts.
    pub fn is_leap_year(&self) -> bool {
        let a = self.astronomical();
        match self.system {
            CalendarSystem::Julian => a.rem_euclid(4) == 0,
            CalendarSystem::Gregorian => {
                a.rem_euclid(4) == 0 && (a.rem_euclid(100) != 0 || a.rem_euclid(400) == 0)
            }
        }
    }

    /// Shift by a signed offset, skipping the non-existent year 0.
    ///
    /// When the raw sum lands exactly on 0, the result moves one further in
    /// the travelled direction (−1 + 1 = 1, 1 − 1 = −1).
    fn shifted(self, offset: i64) -> Result<Self> {
        let raw = self.value.checked_add(offset).ok_or_else(|| {
            Error::Arithmetic(format!("year {} + {offset} overflows", self.value))
        })?;
        let value = if raw == 0 {
            if offset > 0 {
                1
            } else {
                -1
            }
        } else {
            raw
        };
        Ok(Year {
            system: self.system,
            value,
        })
    }

    /// Advance by a (non-negative) number of years.
    pub fn add(self, years: Years) -> Result<Self> {
        self.shifted(years.value())
    }

    /// Move back by a (non-negative) number of years.
    pub fn subtract(self, years: Years) -> Result<Self> {
        self.shifted(-years.value())
    }

    /// Advance by one year.
    pub fn increment(self) -> Result<Self> {
        self.shifted(1)
    }

    /// Move back by one year.
    pub fn decrement(self) -> Result<Self> {
        self.shifted(-1)
    }

    /// Compare against another year of the same calendar system.
    ///
    /// Returns [`Error::SystemMismatch`] if the systems differ; comparing a
    /// Julian year with a Gregorian one is a caller bug, not bad data.
    pub fn compare(&self, other: &Year) -> Result<Ordering> {
        if self.system != other.system {
            return Err(Error::SystemMismatch {
                expected: self.system,
                actual: other.system,
            });
        }
        Ok(self.value.cmp(&other.value))
    }
}

impl PartialOrd for Year {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.system == other.system {
            Some(self.value.cmp(&other.value))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
