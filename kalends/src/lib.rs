//! # kalends
//!
//! Self-validating calendar value types for the Julian and Gregorian
//! calendar systems: leap years, month and year day counts, and Easter
//! (computus), including the per-country Julian→Gregorian adoption
//! cutovers that removed a block of days from a country's civil calendar.
//!
//! This crate is a **facade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `kal-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use kalends::core::CalendarSystem;
//! use kalends::time::{Calendar, Country, GregorianCalendar, Month, Year};
//!
//! # fn main() -> kalends::core::Result<()> {
//! let italy = GregorianCalendar::for_country(Country::Italy);
//! let year = Year::of(CalendarSystem::Gregorian, 1582)?;
//!
//! // October 1582 lost ten days to the Gregorian reform.
//! assert_eq!(italy.days_in_month(year, Month::October)?.value(), 21);
//! assert_eq!(italy.days_in_year(year)?.value(), 355);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Calendar-system vocabulary and error definitions.
pub use kal_core as core;

/// Calendar primitives, durations, and the calendar facade.
pub use kal_time as time;
