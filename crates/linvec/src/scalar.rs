//! Numeric modes: the `Scalar` trait and its exact/floating implementations.
//!
//! - `Mode`: runtime tag naming a numeric mode (used in errors, formatting and
//!   the mixed-mode boundary in `dynamic`).
//! - `Scalar`: the arithmetic a `Vector<T>` needs, implemented for `f64`
//!   (floating) and `rust_decimal::Decimal` (exact).
//! - `Coerce<T>`: construction-time conversion of raw values (text, numbers)
//!   into a mode's representation.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

/// Numeric representation of a vector's coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Arbitrary-precision decimal, no binary rounding.
    Exact,
    /// IEEE-754 `f64`; predicates use `cfg::EPS`.
    Float,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Exact => write!(f, "exact decimal"),
            Mode::Float => write!(f, "floating point"),
        }
    }
}

/// Coordinate type of a [`Vector`](crate::Vector).
///
/// Vector arithmetic goes through the `checked_*` methods. `Decimal` panics
/// on overflow past `Decimal::MAX` and on a zero divisor; both surface as
/// `None` here. `f64` only reports a zero divisor.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const MODE: Mode;

    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;
    /// Square root of a non-negative value, in the native mode.
    fn sqrt(self) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
    fn halve(self) -> Self;
    /// Lossy conversion used by `acos` and by mode degradation.
    fn to_f64(self) -> f64;
    /// Exact mode: `self == 0`. Floating mode: `|self| < eps`.
    fn is_negligible(self, eps: f64) -> bool;
    /// Round half-even to `places` decimals, dropping trailing zeros.
    fn round_to(self, places: u32) -> Self;
}

impl Scalar for f64 {
    const MODE: Mode = Mode::Float;

    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }
    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }
    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 {
            None
        } else {
            Some(self / rhs)
        }
    }
    #[inline]
    fn halve(self) -> Self {
        self * 0.5
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn is_negligible(self, eps: f64) -> bool {
        f64::abs(self) < eps
    }
    fn round_to(self, places: u32) -> Self {
        let scale = 10f64.powi(places as i32);
        let r = (self * scale).round_ties_even() / scale;
        // avoid printing "-0"
        if r == 0.0 {
            0.0
        } else {
            r
        }
    }
}

impl Scalar for Decimal {
    const MODE: Mode = Mode::Exact;

    #[inline]
    fn zero() -> Self {
        Decimal::ZERO
    }
    #[inline]
    fn one() -> Self {
        Decimal::ONE
    }
    #[inline]
    fn abs(self) -> Self {
        Decimal::abs(&self)
    }
    fn sqrt(self) -> Self {
        // `MathematicalOps::sqrt` only rejects negative input.
        MathematicalOps::sqrt(&self).unwrap_or(Decimal::ZERO)
    }
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }
    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }
    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Decimal::checked_mul(self, rhs)
    }
    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }
    #[inline]
    fn halve(self) -> Self {
        self / Decimal::TWO
    }
    fn to_f64(self) -> f64 {
        // Every finite Decimal fits in an f64 (with rounding).
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
    #[inline]
    fn is_negligible(self, _eps: f64) -> bool {
        self.is_zero()
    }
    fn round_to(self, places: u32) -> Self {
        let r = self.round_dp(places).normalize();
        if r.is_zero() {
            Decimal::ZERO
        } else {
            r
        }
    }
}

/// Conversion of a raw coordinate into scalar type `T`.
///
/// Returns `None` when the value has no representation in `T` (unparsable
/// text, non-finite floats, out-of-range magnitudes). The `Display` bound lets
/// errors quote the rejected value.
pub trait Coerce<T>: fmt::Display {
    fn coerce(&self) -> Option<T>;
}

impl<T, V> Coerce<T> for &V
where
    V: Coerce<T> + ?Sized,
{
    #[inline]
    fn coerce(&self) -> Option<T> {
        V::coerce(*self)
    }
}

impl Coerce<f64> for f64 {
    fn coerce(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl Coerce<f64> for f32 {
    fn coerce(&self) -> Option<f64> {
        self.is_finite().then_some(f64::from(*self))
    }
}

impl Coerce<f64> for Decimal {
    fn coerce(&self) -> Option<f64> {
        ToPrimitive::to_f64(self)
    }
}

impl Coerce<f64> for str {
    fn coerce(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok().filter(|x| x.is_finite())
    }
}

impl Coerce<f64> for String {
    fn coerce(&self) -> Option<f64> {
        Coerce::<f64>::coerce(self.as_str())
    }
}

impl Coerce<Decimal> for Decimal {
    fn coerce(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl Coerce<Decimal> for f64 {
    fn coerce(&self) -> Option<Decimal> {
        Decimal::from_f64(*self)
    }
}

impl Coerce<Decimal> for f32 {
    fn coerce(&self) -> Option<Decimal> {
        Decimal::from_f32(*self)
    }
}

impl Coerce<Decimal> for str {
    fn coerce(&self) -> Option<Decimal> {
        let s = self.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .ok()
    }
}

impl Coerce<Decimal> for String {
    fn coerce(&self) -> Option<Decimal> {
        Coerce::<Decimal>::coerce(self.as_str())
    }
}

macro_rules! coerce_integers {
    ($($int:ty),*) => {
        $(
            impl Coerce<f64> for $int {
                #[inline]
                fn coerce(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }

            impl Coerce<Decimal> for $int {
                #[inline]
                fn coerce(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }
            }
        )*
    };
}

coerce_integers!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn text_coerces_in_both_modes() {
        assert_eq!(Coerce::<f64>::coerce("2.5"), Some(2.5));
        assert_eq!(Coerce::<Decimal>::coerce(" 2.50 "), Some(dec("2.50")));
        assert_eq!(Coerce::<Decimal>::coerce("1e-3"), Some(dec("0.001")));
        assert_eq!(Coerce::<f64>::coerce("abc"), None);
        assert_eq!(Coerce::<Decimal>::coerce("abc"), None);
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert_eq!(Coerce::<f64>::coerce(&f64::NAN), None);
        assert_eq!(Coerce::<Decimal>::coerce(&f64::INFINITY), None);
        assert_eq!(Coerce::<f64>::coerce("inf"), None);
    }

    #[test]
    fn negligible_is_mode_aware() {
        assert!(1e-12f64.is_negligible(1e-10));
        assert!(!dec("0.000000000001").is_negligible(1e-10));
        assert!(Decimal::ZERO.is_negligible(1e-10));
    }

    #[test]
    fn division_by_zero_is_none() {
        assert_eq!(Scalar::checked_div(1.0f64, 0.0), None);
        assert_eq!(Scalar::checked_div(Decimal::ONE, Decimal::ZERO), None);
        assert_eq!(Scalar::checked_div(dec("1"), dec("4")), Some(dec("0.25")));
    }

    #[test]
    fn decimal_overflow_is_none() {
        let big = dec("1000000000000000");
        assert_eq!(Scalar::checked_mul(big, big), None);
        assert_eq!(Scalar::checked_add(Decimal::MAX, Decimal::ONE), None);
        assert_eq!(Scalar::checked_sub(Decimal::MIN, Decimal::ONE), None);
        assert_eq!(Scalar::checked_mul(big, dec("2")), Some(dec("2000000000000000")));
        assert_eq!(Scalar::checked_mul(1e300f64, 1e300), Some(f64::INFINITY));
    }

    #[test]
    fn rounding_drops_trailing_zeros() {
        assert_eq!(dec("2.0004").round_to(3).to_string(), "2");
        assert_eq!(dec("-1.23456").round_to(3).to_string(), "-1.235");
        assert_eq!((0.1f64 + 0.2).round_to(3).to_string(), "0.3");
        assert_eq!((-0.0001f64).round_to(3).to_string(), "0");
    }

    #[test]
    fn exact_sqrt_of_perfect_square() {
        assert_eq!(Scalar::sqrt(dec("25")), dec("5"));
        assert_eq!(Scalar::sqrt(dec("1.00")), Decimal::ONE);
    }
}
