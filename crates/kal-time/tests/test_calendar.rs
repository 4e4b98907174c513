//! Facade-level tests: leap years, day counts across adoption cutovers,
//! and Easter in both calendar systems.

use kal_core::{CalendarSystem, Error};
use kal_time::{Calendar, Country, GregorianCalendar, JulianCalendar, Month, MonthDay, Year};

fn gyear(v: i64) -> Year {
    Year::of(CalendarSystem::Gregorian, v).unwrap()
}

fn jyear(v: i64) -> Year {
    Year::of(CalendarSystem::Julian, v).unwrap()
}

fn md(s: &str) -> MonthDay {
    MonthDay::parse(s).unwrap()
}

// ─── Leap years ───────────────────────────────────────────────────────────────

#[test]
fn test_leap_years() {
    let gregorian = GregorianCalendar::new(None);
    let julian = JulianCalendar::new();

    assert!(!gregorian.is_leap_year(gyear(1900)).unwrap());
    assert!(julian.is_leap_year(jyear(1900)).unwrap());
    assert!(gregorian.is_leap_year(gyear(2000)).unwrap());
    assert!(gregorian.is_leap_year(gyear(2024)).unwrap());
    assert!(!gregorian.is_leap_year(gyear(2100)).unwrap());

    // Civil −1 is astronomical 0, divisible by 4.
    assert!(julian.is_leap_year(jyear(-1)).unwrap());
    assert!(!julian.is_leap_year(jyear(-2)).unwrap());
}

#[test]
fn test_country_does_not_affect_leapness() {
    let plain = GregorianCalendar::new(None);
    let russia = GregorianCalendar::for_country(Country::Russia);
    for v in [1582, 1600, 1918, 2000, 2024] {
        assert_eq!(
            plain.is_leap_year(gyear(v)).unwrap(),
            russia.is_leap_year(gyear(v)).unwrap(),
            "year {v}"
        );
    }
}

// ─── Day counts across cutovers ───────────────────────────────────────────────

#[test]
fn test_italy_1582() {
    let italy = GregorianCalendar::for_country(Country::Italy);
    assert_eq!(
        italy.days_in_month(gyear(1582), Month::October).unwrap().value(),
        21
    );
    assert_eq!(
        italy
            .days_in_month(gyear(1582), Month::September)
            .unwrap()
            .value(),
        30
    );
    assert_eq!(italy.days_in_year(gyear(1582)).unwrap().value(), 355);
}

#[test]
fn test_julian_1582_is_undisturbed() {
    let julian = JulianCalendar::new();
    assert_eq!(
        julian.days_in_month(jyear(1582), Month::October).unwrap().value(),
        31
    );
    assert_eq!(julian.days_in_year(jyear(1582)).unwrap().value(), 365);
}

#[test]
fn test_russia_1918() {
    let russia = GregorianCalendar::for_country(Country::Russia);
    assert_eq!(
        russia.days_in_month(gyear(1918), Month::February).unwrap().value(),
        15
    );
    assert_eq!(
        russia.days_in_month(gyear(1918), Month::January).unwrap().value(),
        31
    );
    assert_eq!(russia.days_in_year(gyear(1918)).unwrap().value(), 352);
}

#[test]
fn test_other_cutovers() {
    // Great Britain dropped 11 days from September 1752.
    let britain = GregorianCalendar::for_country(Country::GreatBritain);
    assert_eq!(
        britain
            .days_in_month(gyear(1752), Month::September)
            .unwrap()
            .value(),
        19
    );
    // Sweden's cutover opens on March 1, shortening February 1753.
    let sweden = GregorianCalendar::for_country(Country::Sweden);
    assert_eq!(
        sweden.days_in_month(gyear(1753), Month::February).unwrap().value(),
        17
    );
    // Greece's February 1923 kept 15 days.
    let greece = GregorianCalendar::for_country(Country::Greece);
    assert_eq!(
        greece.days_in_month(gyear(1923), Month::February).unwrap().value(),
        15
    );
}

#[test]
fn test_default_gregorian_day_counts() {
    let cal = GregorianCalendar::new(None);
    assert_eq!(cal.days_in_year(gyear(1900)).unwrap().value(), 365);
    assert_eq!(cal.days_in_year(gyear(2000)).unwrap().value(), 366);
    assert_eq!(cal.days_in_year(gyear(2023)).unwrap().value(), 365);
    assert_eq!(cal.days_in_year(gyear(2024)).unwrap().value(), 366);
}

#[test]
fn test_julian_year_lengths() {
    let julian = JulianCalendar::new();
    assert_eq!(julian.days_in_year(jyear(1900)).unwrap().value(), 366);
    assert_eq!(julian.days_in_year(jyear(1901)).unwrap().value(), 365);
}

// ─── Easter ───────────────────────────────────────────────────────────────────

#[test]
fn test_gregorian_easter() {
    let cal = GregorianCalendar::new(None);
    assert_eq!(cal.easter_in_year(gyear(2024)).unwrap(), md("03-31"));
    assert_eq!(cal.easter_in_year(gyear(2025)).unwrap(), md("04-20"));
    assert_eq!(cal.easter_in_year(gyear(2000)).unwrap(), md("04-23"));
    assert_eq!(cal.easter_in_year(gyear(1900)).unwrap(), md("04-15"));
}

#[test]
fn test_julian_easter() {
    let cal = JulianCalendar::new();
    assert_eq!(cal.easter_in_year(jyear(8)).unwrap(), md("04-08"));
    assert_eq!(cal.easter_in_year(jyear(2023)).unwrap(), md("04-03"));
    assert_eq!(cal.easter_in_year(jyear(2024)).unwrap(), md("04-22"));
}

#[test]
fn test_country_does_not_affect_easter() {
    let plain = GregorianCalendar::new(None);
    let italy = GregorianCalendar::for_country(Country::Italy);
    for v in [1583, 1900, 2024] {
        assert_eq!(
            plain.easter_in_year(gyear(v)).unwrap(),
            italy.easter_in_year(gyear(v)).unwrap(),
            "year {v}"
        );
    }
}

// ─── Cross-system misuse ──────────────────────────────────────────────────────

#[test]
fn test_system_mismatch() {
    let gregorian = GregorianCalendar::new(None);
    let julian = JulianCalendar::new();

    assert!(matches!(
        gregorian.is_leap_year(jyear(1900)),
        Err(Error::SystemMismatch { .. })
    ));
    assert!(matches!(
        gregorian.days_in_month(jyear(1900), Month::February),
        Err(Error::SystemMismatch { .. })
    ));
    assert!(matches!(
        julian.days_in_year(gyear(1900)),
        Err(Error::SystemMismatch { .. })
    ));
    assert!(matches!(
        julian.easter_in_year(gyear(2024)),
        Err(Error::SystemMismatch { .. })
    ));
}

// ─── Trait-object use ─────────────────────────────────────────────────────────

#[test]
fn test_calendars_behind_a_trait_object() {
    let calendars: Vec<Box<dyn Calendar>> = vec![
        Box::new(JulianCalendar::new()),
        Box::new(GregorianCalendar::new(None)),
        Box::new(GregorianCalendar::for_country(Country::Poland)),
    ];
    for cal in &calendars {
        let year = Year::of(cal.system(), 2021).unwrap();
        assert_eq!(cal.days_in_year(year).unwrap().value(), 365);
    }
}
