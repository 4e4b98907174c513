//! Duration counters: `Days`, `Months`, `Years`.
//!
//! Each is a non-negative `i64` count with checked arithmetic.  Subtraction
//! follows the non-negative-duration contract: the result is the magnitude
//! of the difference, so it never underflows.

use kal_core::errors::{Error, Result};
use kal_core::{ensure_arith, ensure_range};

macro_rules! duration_type {
    ($(#[$attr:meta])* $name:ident, $label:literal, $suffix:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i64);

        impl $name {
            /// Create a duration from a non-negative count.
            pub fn of(value: i64) -> Result<Self> {
                ensure_range!(
                    value >= 0,
                    "{} count must be non-negative, got {value}",
                    $label
                );
                Ok($name(value))
            }

            /// Return the count.
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Checked addition.  Overflow is an arithmetic error.
            pub fn add(self, other: Self) -> Result<Self> {
                self.0
                    .checked_add(other.0)
                    .map($name)
                    .ok_or_else(|| Error::Arithmetic(format!("{self} + {other} overflows")))
            }

            /// Subtraction of non-negative counts: the result is the
            /// magnitude of the difference, so subtracting a larger count
            /// from a smaller one yields their distance rather than failing.
            pub fn subtract(self, other: Self) -> Self {
                $name((self.0 - other.0).abs())
            }

            /// Checked multiplication by a non-negative factor.
            pub fn multiply(self, factor: i64) -> Result<Self> {
                ensure_range!(
                    factor >= 0,
                    "{} multiplier must be non-negative, got {factor}",
                    $label
                );
                self.0
                    .checked_mul(factor)
                    .map($name)
                    .ok_or_else(|| Error::Arithmetic(format!("{self} * {factor} overflows")))
            }

            /// Checked integer division by a positive divisor.
            ///
            /// Division by zero is an arithmetic error; a negative divisor
            /// would leave the non-negative domain and is out of range.
            pub fn divide(self, divisor: i64) -> Result<Self> {
                ensure_arith!(divisor != 0, "{self} divided by zero");
                ensure_range!(
                    divisor > 0,
                    "{} divisor must be positive, got {divisor}",
                    $label
                );
                Ok($name(self.0 / divisor))
            }

            /// Checked remainder after division by a positive divisor.
            pub fn modulo(self, divisor: i64) -> Result<Self> {
                ensure_arith!(divisor != 0, "{self} modulo zero");
                ensure_range!(
                    divisor > 0,
                    "{} divisor must be positive, got {divisor}",
                    $label
                );
                Ok($name(self.0 % divisor))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", self.0, $suffix)
            }
        }
    };
}

duration_type!(
    /// A non-negative number of days.
    Days,
    "day",
    "D"
);

duration_type!(
    /// A non-negative number of months.
    Months,
    "month",
    "M"
);

duration_type!(
    /// A non-negative number of years.
    Years,
    "year",
    "Y"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(Days::of(-1), Err(Error::OutOfRange(_))));
        assert!(Days::of(0).is_ok());
        assert!(Years::of(5).is_ok());
    }

    #[test]
    fn add_overflow() {
        let max = Days::of(i64::MAX).unwrap();
        let one = Days::of(1).unwrap();
        assert!(matches!(max.add(one), Err(Error::Arithmetic(_))));
        assert_eq!(Days::of(3).unwrap().add(Days::of(4).unwrap()).unwrap(), Days::of(7).unwrap());
    }

    #[test]
    fn subtract_is_magnitude() {
        let a = Months::of(3).unwrap();
        let b = Months::of(10).unwrap();
        assert_eq!(a.subtract(b), Months::of(7).unwrap());
        assert_eq!(b.subtract(a), Months::of(7).unwrap());
        assert_eq!(a.subtract(a), Months::of(0).unwrap());
    }

    #[test]
    fn multiply() {
        assert_eq!(
            Days::of(7).unwrap().multiply(3).unwrap(),
            Days::of(21).unwrap()
        );
        let max = Days::of(i64::MAX).unwrap();
        assert!(matches!(max.multiply(2), Err(Error::Arithmetic(_))));
        assert!(matches!(
            Days::of(7).unwrap().multiply(-1),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn divide_and_modulo() {
        let ten = Days::of(10).unwrap();
        assert_eq!(ten.divide(3).unwrap(), Days::of(3).unwrap());
        assert_eq!(ten.modulo(3).unwrap(), Days::of(1).unwrap());
        assert!(matches!(ten.divide(0), Err(Error::Arithmetic(_))));
        assert!(matches!(ten.modulo(0), Err(Error::Arithmetic(_))));
        assert!(matches!(ten.divide(-2), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn display_has_unit_suffix() {
        assert_eq!(Days::of(10).unwrap().to_string(), "10D");
        assert_eq!(Months::of(3).unwrap().to_string(), "3M");
        assert_eq!(Years::of(2).unwrap().to_string(), "2Y");
    }
}
