//! # kal-time
//!
//! The calendar engine: bounded primitives (`Year`, `Month`, `Day`,
//! `MonthDay`), duration counters (`Days`, `Months`, `Years`), the
//! per-country Julian→Gregorian adoption table, the two computus
//! algorithms, and the [`Calendar`] facade that ties them together.
//!
//! Consumers go through the facade only: the adoption table and computus
//! routines are implementation details.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

mod adoption;

/// `Calendar` trait, `JulianCalendar`, and `GregorianCalendar`.
pub mod calendar;

mod computus;

/// `Country` — countries with a recorded adoption cutover.
pub mod country;

/// `Day` — day-of-month in `[1, 31]`.
pub mod day;

/// Duration counters: `Days`, `Months`, `Years`.
pub mod duration;

/// `Month` — month-of-year enum.
pub mod month;

/// `MonthDay` — a validated month + day pair.
pub mod month_day;

/// `Year` — a civil year tagged with its calendar system.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, GregorianCalendar, JulianCalendar};
pub use country::Country;
pub use day::Day;
pub use duration::{Days, Months, Years};
pub use month::Month;
pub use month_day::MonthDay;
pub use year::Year;
