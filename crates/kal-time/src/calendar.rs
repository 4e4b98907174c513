//! `Calendar` trait and the Julian / Gregorian implementations.
//!
//! The calendar facade is the only entry point consumers use: leap years,
//! day counts, and Easter all go through it.  Every operation checks that
//! the supplied [`Year`] is tagged with the calendar's own system;
//! a mismatch is a caller bug surfaced as [`Error::SystemMismatch`].

use crate::adoption;
use crate::computus;
use crate::country::Country;
use crate::duration::Days;
use crate::month::Month;
use crate::month_day::MonthDay;
use crate::year::Year;
use kal_core::errors::{Error, Result};
use kal_core::CalendarSystem;

/// A civil calendar bound to one [`CalendarSystem`].
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (`"Julian"`, `"Gregorian"`).
    fn name(&self) -> &str;

    /// The calendar system this calendar reckons in.
    fn system(&self) -> CalendarSystem;

    /// Return `true` if `year` is a leap year.
    fn is_leap_year(&self, year: Year) -> Result<bool> {
        self.check_system(year)?;
        Ok(year.is_leap_year())
    }

    /// Return the number of civil days in the given month of `year`.
    fn days_in_month(&self, year: Year, month: Month) -> Result<Days>;

    /// Return the number of civil days in `year`.
    ///
    /// Summed over the twelve months, so a transition year loses its
    /// adoption gap exactly once.
    fn days_in_year(&self, year: Year) -> Result<Days> {
        let mut total = 0i64;
        for n in 1..=12u8 {
            let month = Month::from_number(n).expect("month number in 1..=12");
            total += self.days_in_month(year, month)?.value();
        }
        Days::of(total)
    }

    /// Return the date of Easter Sunday in `year`, in this calendar's own
    /// reckoning.
    fn easter_in_year(&self, year: Year) -> Result<MonthDay>;

    /// Require `year` to be tagged with this calendar's system.
    fn check_system(&self, year: Year) -> Result<()> {
        if year.system() != self.system() {
            return Err(Error::SystemMismatch {
                expected: self.system(),
                actual: year.system(),
            });
        }
        Ok(())
    }
}

/// Days in a month under the standard 31/28-or-29/31/… table, with February
/// resolved by the year's own leap rule.
fn standard_days_in_month(year: Year, month: Month) -> i64 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if year.is_leap_year() {
                29
            } else {
                28
            }
        }
    }
}

/// The Julian calendar — a single worldwide rule set, no country variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct JulianCalendar;

impl JulianCalendar {
    /// Create a Julian calendar.
    pub fn new() -> Self {
        JulianCalendar
    }
}

impl Calendar for JulianCalendar {
    fn name(&self) -> &str {
        "Julian"
    }

    fn system(&self) -> CalendarSystem {
        CalendarSystem::Julian
    }

    fn days_in_month(&self, year: Year, month: Month) -> Result<Days> {
        self.check_system(year)?;
        Days::of(standard_days_in_month(year, month))
    }

    fn easter_in_year(&self, year: Year) -> Result<MonthDay> {
        self.check_system(year)?;
        Ok(computus::julian_easter(year.astronomical()))
    }
}

/// The Gregorian calendar, optionally observing one country's adoption
/// cutover.
///
/// Without a country the calendar is proleptic: the Gregorian rules extend
/// to all years and no days are ever missing.  With a country, the month
/// the country switched in loses its gap days.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar {
    country: Option<Country>,
}

impl GregorianCalendar {
    /// Create a Gregorian calendar, optionally observing `country`'s cutover.
    ///
    /// `None` gives the proleptic calendar with no adoption gap.
    pub fn new(country: Option<Country>) -> Self {
        GregorianCalendar { country }
    }

    /// Convenience for [`GregorianCalendar::new`] with a country bound.
    pub fn for_country(country: Country) -> Self {
        Self::new(Some(country))
    }

    /// The country bound to this calendar, if any.
    pub fn country(&self) -> Option<Country> {
        self.country
    }

    /// Gap days removed from the given month, or 0 when `(year, month)` is
    /// not the bound country's transition month.
    fn gap_days(&self, year: Year, month: Month) -> i64 {
        let Some(country) = self.country else {
            return 0;
        };
        match adoption::lookup(country) {
            Some(rec)
                if rec.transition_year() == year.value() && rec.transition_month() == month =>
            {
                rec.gap_days as i64
            }
            _ => 0,
        }
    }
}

impl Calendar for GregorianCalendar {
    fn name(&self) -> &str {
        "Gregorian"
    }

    fn system(&self) -> CalendarSystem {
        CalendarSystem::Gregorian
    }

    fn days_in_month(&self, year: Year, month: Month) -> Result<Days> {
        self.check_system(year)?;
        Days::of(standard_days_in_month(year, month) - self.gap_days(year, month))
    }

    fn easter_in_year(&self, year: Year) -> Result<MonthDay> {
        self.check_system(year)?;
        Ok(computus::gregorian_easter(year.astronomical()))
    }
}
