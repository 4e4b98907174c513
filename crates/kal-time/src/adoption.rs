//! Per-country Julian→Gregorian adoption table.
//!
//! Each record names the last civil day reckoned in the Julian calendar, the
//! first civil day reckoned in the Gregorian one, and the number of calendar
//! days that never occurred in between.  The table is a process-wide
//! constant; every cutover it records removed a block of days from a single
//! month, so the day counter only ever adjusts one month per country.
//!
//! Countries absent from the table are treated as proleptically Gregorian
//! with no gap.

use crate::country::Country;
use crate::day::Day;
use crate::month::Month;
use crate::month_day::MonthDay;

/// A civil calendar date on one side of a cutover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CivilDate {
    /// Civil year (no year 0).
    pub year: i64,
    /// Month and day within the year.
    pub month_day: MonthDay,
}

/// One country's Julian→Gregorian cutover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AdoptionRecord {
    /// The country this record applies to.
    pub country: Country,
    /// The last civil date reckoned in the Julian calendar.
    pub last_julian: CivilDate,
    /// The first civil date reckoned in the Gregorian calendar.
    pub first_gregorian: CivilDate,
    /// Calendar days removed between the two.
    pub gap_days: u32,
}

const fn civil(year: i64, month: Month, day: u8) -> CivilDate {
    CivilDate {
        year,
        month_day: MonthDay::new_unchecked(month, Day::new_unchecked(day)),
    }
}

const fn record(
    country: Country,
    last_julian: CivilDate,
    first_gregorian: CivilDate,
    gap_days: u32,
) -> AdoptionRecord {
    AdoptionRecord {
        country,
        last_julian,
        first_gregorian,
        gap_days,
    }
}

/// Historical cutovers, one per [`Country`].
pub(crate) const ADOPTIONS: [AdoptionRecord; 10] = [
    record(
        Country::Italy,
        civil(1582, Month::October, 4),
        civil(1582, Month::October, 15),
        10,
    ),
    record(
        Country::Spain,
        civil(1582, Month::October, 4),
        civil(1582, Month::October, 15),
        10,
    ),
    record(
        Country::Portugal,
        civil(1582, Month::October, 4),
        civil(1582, Month::October, 15),
        10,
    ),
    record(
        Country::Poland,
        civil(1582, Month::October, 4),
        civil(1582, Month::October, 15),
        10,
    ),
    record(
        Country::France,
        civil(1582, Month::December, 9),
        civil(1582, Month::December, 20),
        10,
    ),
    record(
        Country::Germany,
        civil(1583, Month::February, 13),
        civil(1583, Month::February, 24),
        10,
    ),
    record(
        Country::GreatBritain,
        civil(1752, Month::September, 2),
        civil(1752, Month::September, 14),
        11,
    ),
    record(
        Country::Sweden,
        civil(1753, Month::February, 17),
        civil(1753, Month::March, 1),
        11,
    ),
    record(
        Country::Russia,
        civil(1918, Month::January, 31),
        civil(1918, Month::February, 14),
        13,
    ),
    record(
        Country::Greece,
        civil(1923, Month::February, 15),
        civil(1923, Month::March, 1),
        13,
    ),
];

/// Look up a country's cutover record.
pub(crate) fn lookup(country: Country) -> Option<&'static AdoptionRecord> {
    ADOPTIONS.iter().find(|r| r.country == country)
}

impl AdoptionRecord {
    /// The civil year whose day counts are shortened by the cutover.
    pub fn transition_year(&self) -> i64 {
        self.first_gregorian.year
    }

    /// The month the removed days fell in.
    ///
    /// For records whose first Gregorian day opens a new month (Sweden,
    /// Greece), the removed block sits at the end of the *previous* month.
    pub fn transition_month(&self) -> Month {
        if self.first_gregorian.month_day.day().value() == 1 {
            self.first_gregorian
                .month_day
                .month()
                .decrement()
                .expect("no cutover removes days across a year boundary")
        } else {
            self.first_gregorian.month_day.month()
        }
    }
}
