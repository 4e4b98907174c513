//! Error types for kalends.
//!
//! Four error kinds cover the whole library: out-of-range construction,
//! malformed string input, checked-arithmetic failure, and cross-system
//! misuse.  The first three are ordinary recoverable validation failures;
//! [`Error::SystemMismatch`] signals a violated precondition and should be
//! propagated rather than handled.

use crate::calendar_system::CalendarSystem;
use thiserror::Error;

/// The top-level error type used throughout kalends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value was constructed outside its validity domain
    /// (year 0, month 13, a negative duration, …).
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A string-form factory received text that does not match its pattern.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// Checked arithmetic overflowed, divided by zero, or stepped a bounded
    /// value past its floor or ceiling.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// A value tagged with one [`CalendarSystem`] was combined with a value
    /// or calendar of the other system.
    ///
    /// Unlike the other variants this is a logic error: it indicates a
    /// violated precondition in the caller, not bad input data.
    #[error("calendar system mismatch: expected {expected}, got {actual}")]
    SystemMismatch {
        /// The system the operation was bound to.
        expected: CalendarSystem,
        /// The system of the offending value.
        actual: CalendarSystem,
    },
}

/// Shorthand `Result` type used throughout kalends.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a domain bound.
///
/// Returns `Err(Error::OutOfRange(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kal_core::ensure_range;
/// fn month_number(n: u8) -> kal_core::errors::Result<u8> {
///     ensure_range!((1..=12).contains(&n), "month {n} out of range [1, 12]");
///     Ok(n)
/// }
/// assert!(month_number(4).is_ok());
/// assert!(month_number(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::OutOfRange(
                format!($($msg)*)
            ));
        }
    };
}

/// Guard an arithmetic precondition.
///
/// Returns `Err(Error::Arithmetic(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use kal_core::ensure_arith;
/// fn divide(n: i64, divisor: i64) -> kal_core::errors::Result<i64> {
///     ensure_arith!(divisor != 0, "division of {n} by zero");
///     Ok(n / divisor)
/// }
/// assert!(divide(10, 2).is_ok());
/// assert!(divide(10, 0).is_err());
/// ```
#[macro_export]
macro_rules! ensure_arith {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Arithmetic(
                format!($($msg)*)
            ));
        }
    };
}
