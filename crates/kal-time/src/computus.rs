//! Computus — the date of Easter Sunday.
//!
//! Two independent algorithms, one per calendar system, each a pure
//! function of the astronomical year number.  `rem_euclid`/`div_euclid`
//! keep both total over BC years.  The Julian result is expressed in the
//! Julian calendar's own terms, not converted to a Gregorian date.

use crate::day::Day;
use crate::month::Month;
use crate::month_day::MonthDay;

/// Gregorian Easter Sunday (Meeus/Jones/Butcher algorithm).
pub(crate) fn gregorian_easter(year: i64) -> MonthDay {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;
    to_month_day(month, day)
}

/// Julian Easter Sunday (Meeus's Julian algorithm).
pub(crate) fn julian_easter(year: i64) -> MonthDay {
    let a = year.rem_euclid(4);
    let b = year.rem_euclid(7);
    let c = year.rem_euclid(19);
    let d = (19 * c + 15).rem_euclid(30);
    let e = (2 * a + 4 * b - d + 34).rem_euclid(7);
    let month = (d + e + 114).div_euclid(31);
    let day = (d + e + 114).rem_euclid(31) + 1;
    to_month_day(month, day)
}

fn to_month_day(month: i64, day: i64) -> MonthDay {
    // Both algorithms yield dates between March 22 and April 25.
    let month = Month::from_number(month as u8).expect("computus month is March or April");
    let day = Day::of(day as u8).expect("computus day is in [1, 25]");
    MonthDay::of(month, day).expect("computus dates fit the standard month lengths")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(s: &str) -> MonthDay {
        MonthDay::parse(s).unwrap()
    }

    #[test]
    fn gregorian_known_dates() {
        let known = [
            (1818, "03-22"), // earliest possible date
            (1900, "04-15"),
            (1943, "04-25"), // latest possible date
            (2000, "04-23"),
            (2016, "03-27"),
            (2020, "04-12"),
            (2021, "04-04"),
            (2022, "04-17"),
            (2023, "04-09"),
            (2024, "03-31"),
            (2025, "04-20"),
            (2026, "04-05"),
        ];
        for (year, expected) in known {
            assert_eq!(gregorian_easter(year), md(expected), "year {year}");
        }
    }

    #[test]
    fn julian_known_dates() {
        // Julian-calendar dates of Orthodox Easter Sunday.
        let known = [
            (8, "04-08"),
            (2022, "04-11"),
            (2023, "04-03"),
            (2024, "04-22"),
            (2025, "04-07"),
        ];
        for (year, expected) in known {
            assert_eq!(julian_easter(year), md(expected), "year {year}");
        }
    }

    #[test]
    fn results_stay_in_season() {
        for year in 1..=3000 {
            for result in [gregorian_easter(year), julian_easter(year)] {
                let m = result.month().number();
                assert!(m == 3 || m == 4, "year {year}: {result}");
            }
        }
    }

    #[test]
    fn total_over_bc_years() {
        // Astronomical year 0 and below must not panic.
        for year in -100..=0 {
            let _ = gregorian_easter(year);
            let _ = julian_easter(year);
        }
    }
}
