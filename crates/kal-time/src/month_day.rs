//! `MonthDay` — a mutually validated month + day-of-month pair.
//!
//! Validation uses each month's *maximum* length (February = 29), so
//! February 29 is constructible while February 30 is not.  Whether a given
//! February 29 exists in a particular year is resolved by the calendar
//! facade, not here.
//!
//! Carry arithmetic (`add_days`, `add_months`, …) runs over the same fixed
//! 31/30/29/28 table and is deliberately not leap-aware: the pair carries no
//! year, so there is nothing to resolve February against.  Day steps wrap
//! around the year boundary (December 31 + 1 day = January 1).

use crate::day::Day;
use crate::duration::{Days, Months};
use crate::month::Month;
use kal_core::ensure_range;
use kal_core::errors::{Error, Result};
use std::str::FromStr;

/// Length of the fixed month-length cycle (sum of all maximum lengths).
const CYCLE_DAYS: i64 = 366;

/// A month and day-of-month, without a year.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: Day,
}

impl MonthDay {
    /// Create a month-day pair.
    ///
    /// Returns an out-of-range error if `day` exceeds the month's maximum
    /// length (e.g. February 30, April 31).
    pub fn of(month: Month, day: Day) -> Result<Self> {
        ensure_range!(
            day.value() <= month.max_length(),
            "day {day} exceeds the {}-day maximum of month {month}",
            month.max_length()
        );
        Ok(MonthDay { month, day })
    }

    /// Create a pair already known to be valid.
    pub(crate) const fn new_unchecked(month: Month, day: Day) -> Self {
        MonthDay { month, day }
    }

    /// Parse a `"MM-DD"` string (both components zero-padded to two digits).
    ///
    /// The month and day bounds are the same as for the numeric factories;
    /// text that does not match the pattern is a malformed-input error.
    pub fn parse(s: &str) -> Result<Self> {
        let (m, d) = s
            .split_once('-')
            .ok_or_else(|| Error::Malformed(format!("{s:?} does not match \"MM-DD\"")))?;
        if m.len() != 2 || d.len() != 2 {
            return Err(Error::Malformed(format!("{s:?} does not match \"MM-DD\"")));
        }
        Self::of(m.parse()?, d.parse()?)
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> Day {
        self.day
    }

    /// 0-based position of this pair in the fixed 366-day cycle.
    fn cycle_ordinal(&self) -> i64 {
        let mut ordinal = 0i64;
        for n in 1..self.month.number() {
            let month = Month::from_number(n).expect("month number in 1..=12");
            ordinal += month.max_length() as i64;
        }
        ordinal + self.day.value() as i64 - 1
    }

    /// Inverse of [`MonthDay::cycle_ordinal`], wrapping modulo the cycle.
    fn from_cycle_ordinal(ordinal: i64) -> Self {
        let mut remaining = ordinal.rem_euclid(CYCLE_DAYS);
        for n in 1..=12u8 {
            let month = Month::from_number(n).expect("month number in 1..=12");
            let length = month.max_length() as i64;
            if remaining < length {
                return MonthDay {
                    month,
                    day: Day::new_unchecked(remaining as u8 + 1),
                };
            }
            remaining -= length;
        }
        unreachable!("cycle ordinal reduced modulo {CYCLE_DAYS}")
    }

    /// Advance by a number of days, carrying across month boundaries and
    /// wrapping around the year boundary.
    pub fn add_days(self, days: Days) -> Self {
        Self::from_cycle_ordinal(self.cycle_ordinal() + days.value().rem_euclid(CYCLE_DAYS))
    }

    /// Move back by a number of days, carrying and wrapping likewise.
    pub fn subtract_days(self, days: Days) -> Self {
        Self::from_cycle_ordinal(self.cycle_ordinal() - days.value().rem_euclid(CYCLE_DAYS))
    }

    /// Advance by one day (January 31 → February 1, December 31 → January 1).
    pub fn increment_day(self) -> Self {
        Self::from_cycle_ordinal(self.cycle_ordinal() + 1)
    }

    /// Move back by one day (March 1 → February 29, January 1 → December 31).
    pub fn decrement_day(self) -> Self {
        Self::from_cycle_ordinal(self.cycle_ordinal() - 1)
    }

    /// Shift the month, clamping the day to the target month's maximum.
    fn shift_months(self, offset: i64) -> Self {
        let index = self.month.number() as i64 - 1;
        let shifted = (index + offset).rem_euclid(12) as u8 + 1;
        let month = Month::from_number(shifted).expect("month number in 1..=12");
        let day = self.day.value().min(month.max_length());
        MonthDay {
            month,
            day: Day::new_unchecked(day),
        }
    }

    /// Advance by a number of months, wrapping around December and clamping
    /// the day (March 31 + 1 month = April 30).
    pub fn add_months(self, months: Months) -> Self {
        self.shift_months(months.value().rem_euclid(12))
    }

    /// Move back by a number of months, wrapping and clamping likewise.
    pub fn subtract_months(self, months: Months) -> Self {
        self.shift_months(-months.value().rem_euclid(12))
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number(), self.day.value())
    }
}

impl std::fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthDay({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(m: u8, d: u8) -> MonthDay {
        MonthDay::of(Month::of(m).unwrap(), Day::of(d).unwrap()).unwrap()
    }

    #[test]
    fn mutual_validation() {
        assert!(md(2, 29) == MonthDay::parse("02-29").unwrap());
        assert!(MonthDay::of(Month::February, Day::of(30).unwrap()).is_err());
        assert!(MonthDay::of(Month::April, Day::of(31).unwrap()).is_err());
        assert!(MonthDay::of(Month::January, Day::of(31).unwrap()).is_ok());
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for s in ["01-01", "02-29", "10-04", "12-31"] {
            assert_eq!(MonthDay::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(MonthDay::parse("10"), Err(Error::Malformed(_))));
        assert!(matches!(MonthDay::parse("1-01"), Err(Error::Malformed(_))));
        assert!(matches!(MonthDay::parse("01-1"), Err(Error::Malformed(_))));
        assert!(matches!(MonthDay::parse("aa-bb"), Err(Error::Malformed(_))));
        // In-pattern but out-of-domain values fail the bound, not the pattern.
        assert!(matches!(MonthDay::parse("13-01"), Err(Error::OutOfRange(_))));
        assert!(matches!(MonthDay::parse("02-30"), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn day_steps_carry_and_wrap() {
        assert_eq!(md(1, 31).increment_day(), md(2, 1));
        assert_eq!(md(2, 28).increment_day(), md(2, 29));
        assert_eq!(md(2, 29).increment_day(), md(3, 1));
        assert_eq!(md(12, 31).increment_day(), md(1, 1));
        assert_eq!(md(3, 1).decrement_day(), md(2, 29));
        assert_eq!(md(1, 1).decrement_day(), md(12, 31));
    }

    #[test]
    fn add_days() {
        assert_eq!(md(10, 4).add_days(Days::of(11).unwrap()), md(10, 15));
        assert_eq!(md(12, 25).add_days(Days::of(10).unwrap()), md(1, 4));
        assert_eq!(md(1, 4).subtract_days(Days::of(10).unwrap()), md(12, 25));
        // A whole cycle is the identity.
        assert_eq!(md(6, 15).add_days(Days::of(366).unwrap()), md(6, 15));
    }

    #[test]
    fn month_steps_clamp() {
        assert_eq!(md(3, 31).add_months(Months::of(1).unwrap()), md(4, 30));
        assert_eq!(md(1, 31).add_months(Months::of(1).unwrap()), md(2, 29));
        assert_eq!(md(12, 15).add_months(Months::of(1).unwrap()), md(1, 15));
        assert_eq!(md(3, 31).subtract_months(Months::of(1).unwrap()), md(2, 29));
        assert_eq!(md(1, 15).subtract_months(Months::of(2).unwrap()), md(11, 15));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", md(3, 31)), "MonthDay(03-31)");
    }
}
