//! Arithmetic: addition, subtraction, scalar multiplication, negation.
//!
//! `+`, `-` and `*` return `Result`: operand dimensions are only known at
//! runtime, and exact coordinates can leave the `Decimal` range. Use
//! `(&v + &w)?`. `scaled` is the coercing entry point for foreign scalars.
//! Negation cannot fail.

use std::ops::{Add, Mul, Neg, Sub};

use rust_decimal::Decimal;

use super::{Result, Vector, VectorError};
use crate::scalar::{Coerce, Scalar};

impl<T: Scalar> Vector<T> {
    /// Elementwise sum; tagged only if both operands share the tag.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "addition", T::checked_add)
    }

    /// Elementwise difference; tagged only if both operands share the tag.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtraction", T::checked_sub)
    }

    /// Multiply every coordinate by `s`; keeps the mode tag. Fails with
    /// `Overflow` when an exact product leaves the `Decimal` range.
    pub fn scale(&self, s: T) -> Result<Self> {
        let coords = self
            .coords
            .iter()
            .map(|&x| x.checked_mul(s).ok_or(VectorError::Overflow { op: "scaling" }))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::with_mode(coords, self.mode))
    }

    /// Coerce `s` into `T`, then scale.
    pub fn scaled<S: Coerce<T>>(&self, s: S) -> Result<Self> {
        let factor = s.coerce().ok_or_else(|| VectorError::TypeMismatch {
            value: s.to_string(),
            mode: T::MODE,
        })?;
        self.scale(factor)
    }

    fn negated(&self) -> Self {
        let coords = self.coords.iter().map(|&x| -x).collect();
        Self::with_mode(coords, self.mode)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: &'static str,
        f: impl Fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        self.check_same_dimension(other)?;
        let coords = self
            .coords
            .iter()
            .zip(&other.coords)
            .map(|(&a, &b)| f(a, b).ok_or(VectorError::Overflow { op }))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::with_mode(coords, self.shared_mode(other)))
    }
}

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn add(self, rhs: &Vector<T>) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Self::Output {
        self.try_add(&rhs)
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Self::Output {
        self.try_sub(&rhs)
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn mul(self, s: T) -> Self::Output {
        self.scale(s)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Result<Vector<T>>;
    #[inline]
    fn mul(self, s: T) -> Self::Output {
        self.scale(s)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

// Scalar on the left: `3.0 * v`.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&Vector<$t>> for $t {
                type Output = Result<Vector<$t>>;
                #[inline]
                fn mul(self, v: &Vector<$t>) -> Self::Output {
                    v.scale(self)
                }
            }

            impl Mul<Vector<$t>> for $t {
                type Output = Result<Vector<$t>>;
                #[inline]
                fn mul(self, v: Vector<$t>) -> Self::Output {
                    v.scale(self)
                }
            }
        )*
    };
}

scalar_lhs_mul!(f64, Decimal);
