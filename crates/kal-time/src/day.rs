//! `Day` — day-of-month in `[1, 31]`.

use kal_core::ensure_range;
use kal_core::errors::{Error, Result};
use std::str::FromStr;

/// A day of the month.
///
/// The primitive only enforces the universal bound `[1, 31]`; whether day 31
/// exists in a particular month is a [`MonthDay`](crate::MonthDay)-level
/// check, and whether February 29 exists in a particular year is a
/// calendar-level one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// The first day of any month.
    pub const MIN: Day = Day(1);

    /// The highest day number any month can reach.
    pub const MAX: Day = Day(31);

    /// Create a day of the month.
    ///
    /// Returns an out-of-range error if `n ∉ [1, 31]`.
    pub fn of(n: u8) -> Result<Self> {
        ensure_range!((1..=31).contains(&n), "day {n} out of range [1, 31]");
        Ok(Day(n))
    }

    /// Create a day from a value already known to be in range.
    pub(crate) const fn new_unchecked(n: u8) -> Self {
        Day(n)
    }

    /// Return the day number (1–31).
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Advance to the next day number.
    ///
    /// There is no carry into a month at this level: incrementing 31 is an
    /// arithmetic error.
    pub fn increment(self) -> Result<Self> {
        if self == Self::MAX {
            return Err(Error::Arithmetic("cannot increment day 31".into()));
        }
        Ok(Day(self.0 + 1))
    }

    /// Move back to the previous day number.
    ///
    /// Decrementing 1 is an arithmetic error.
    pub fn decrement(self) -> Result<Self> {
        if self == Self::MIN {
            return Err(Error::Arithmetic("cannot decrement day 1".into()));
        }
        Ok(Day(self.0 - 1))
    }
}

impl FromStr for Day {
    type Err = Error;

    /// Parse a plain decimal day number, applying the same bounds as
    /// [`Day::of`].
    fn from_str(s: &str) -> Result<Self> {
        let n: u8 = s
            .parse()
            .map_err(|_| Error::Malformed(format!("{s:?} is not a day number")))?;
        Self::of(n)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
