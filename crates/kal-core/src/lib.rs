//! # kal-core
//!
//! Foundational vocabulary for kalends: the [`CalendarSystem`] tag shared by
//! every dated value, the error hierarchy, and the `ensure_range!` /
//! `ensure_arith!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// The `CalendarSystem` (Julian / Gregorian) tag.
pub mod calendar_system;

/// Error types and the `ensure_range!` / `ensure_arith!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use calendar_system::CalendarSystem;
pub use errors::{Error, Result};
