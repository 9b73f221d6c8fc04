//! Runtime-tagged vectors: the boundary where exact and floating data mix.
//!
//! Inside `Vector<T>` the numeric mode is a type parameter, so exact and
//! floating vectors cannot be combined by accident. `DynVector` carries the
//! mode at runtime for callers that genuinely hold both kinds:
//! - same mode on both sides: the operation runs in that mode;
//! - different modes, or an untagged operand: exact data is converted to
//!   `f64` and the result is an untagged floating vector. An untagged
//!   `Vector<Decimal>` therefore never survives mixing as exact data.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::scalar::{Coerce, Mode, Scalar};
use crate::vector::{Result, Vector};

/// Vector whose numeric mode is chosen at runtime.
#[derive(Clone)]
pub enum DynVector {
    Exact(Vector<Decimal>),
    Float(Vector<f64>),
}

impl DynVector {
    /// Build from raw values. `Some(mode)` coerces into that mode and tags the
    /// vector; `None` yields an untagged floating vector.
    pub fn new<I>(values: I, mode: Option<Mode>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Coerce<f64> + Coerce<Decimal>,
    {
        Ok(match mode {
            Some(Mode::Exact) => Self::Exact(Vector::from_values(values)?),
            Some(Mode::Float) => Self::Float(Vector::from_values(values)?),
            None => {
                let tagged: Vector<f64> = Vector::from_values(values)?;
                Self::Float(Vector::new(tagged.into_coordinates()))
            }
        })
    }

    #[inline]
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Self::Exact(v) => v.mode(),
            Self::Float(v) => v.mode(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Exact(v) => v.dimension(),
            Self::Float(v) => v.dimension(),
        }
    }

    /// Floating view of this vector; exact coordinates lose their tag.
    pub fn to_float(&self) -> Vector<f64> {
        match self {
            Self::Exact(v) => v.iter().map(|&x| Scalar::to_f64(x)).collect(),
            Self::Float(v) => v.clone(),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.try_add(b), |a, b| a.try_add(b))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.try_sub(b), |a, b| a.try_sub(b))
    }

    /// Scale by a raw value coerced into this vector's mode.
    pub fn scaled<S>(&self, s: S) -> Result<Self>
    where
        S: Coerce<f64> + Coerce<Decimal>,
    {
        Ok(match self {
            Self::Exact(v) => Self::Exact(v.scaled(s)?),
            Self::Float(v) => Self::Float(v.scaled(s)?),
        })
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Exact(v) => v.is_zero(),
            Self::Float(v) => v.is_zero(),
        }
    }

    fn combine(
        &self,
        other: &Self,
        exact: impl Fn(&Vector<Decimal>, &Vector<Decimal>) -> Result<Vector<Decimal>>,
        float: impl Fn(&Vector<f64>, &Vector<f64>) -> Result<Vector<f64>>,
    ) -> Result<Self> {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) if a.mode().is_some() && a.mode() == b.mode() => {
                Ok(Self::Exact(exact(a, b)?))
            }
            (Self::Float(a), Self::Float(b)) => Ok(Self::Float(float(a, b)?)),
            _ => {
                debug!(
                    left = ?self.mode(),
                    right = ?other.mode(),
                    "mixed-mode arithmetic degrades to floating point"
                );
                Ok(Self::Float(float(&self.to_float(), &other.to_float())?))
            }
        }
    }
}

impl From<Vector<Decimal>> for DynVector {
    fn from(v: Vector<Decimal>) -> Self {
        Self::Exact(v)
    }
}

impl From<Vector<f64>> for DynVector {
    fn from(v: Vector<f64>) -> Self {
        Self::Float(v)
    }
}

/// Mode-aware equality; mixed modes compare in floating point.
impl PartialEq for DynVector {
    fn eq(&self, other: &Self) -> bool {
        self.try_sub(other).is_ok_and(|d| d.is_zero())
    }
}

impl fmt::Debug for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => fmt::Debug::fmt(v, f),
            Self::Float(v) => fmt::Debug::fmt(v, f),
        }
    }
}

impl fmt::Display for DynVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::VectorError;

    #[test]
    fn same_mode_keeps_tag() {
        let a = DynVector::new(["1.5", "2"], Some(Mode::Exact)).unwrap();
        let b = DynVector::new(["0.5", "1"], Some(Mode::Exact)).unwrap();
        let s = a.try_add(&b).unwrap();
        assert_eq!(s.mode(), Some(Mode::Exact));
        assert!(matches!(s, DynVector::Exact(_)));
        assert_eq!(s.to_string(), "(2.0, 3)");
    }

    #[test]
    fn mixed_modes_degrade_to_untagged_float() {
        let exact = DynVector::new(["0.1", "0.2"], Some(Mode::Exact)).unwrap();
        let float = DynVector::new([0.1, 0.2], Some(Mode::Float)).unwrap();
        let s = exact.try_add(&float).unwrap();
        assert_eq!(s.mode(), None);
        assert!(matches!(s, DynVector::Float(_)));
        // tagged + untagged floating also drops the tag
        let untagged = DynVector::new([1.0, 1.0], None).unwrap();
        assert_eq!(float.try_sub(&untagged).unwrap().mode(), None);
    }

    #[test]
    fn untagged_exact_operand_degrades_to_float() {
        let tagged = DynVector::new(["0.1", "0.2"], Some(Mode::Exact)).unwrap();
        let raw = vec![Decimal::new(3, 1), Decimal::new(4, 1)];
        let untagged = DynVector::from(Vector::new(raw.clone()));
        assert_eq!(untagged.mode(), None);
        let s = tagged.try_add(&untagged).unwrap();
        assert_eq!(s.mode(), None);
        assert!(matches!(s, DynVector::Float(_)));
        let both = untagged.try_add(&DynVector::from(Vector::new(raw))).unwrap();
        assert_eq!(both.mode(), None);
        assert!(matches!(both, DynVector::Float(_)));
        assert!(matches!(
            tagged.try_sub(&tagged).unwrap(),
            DynVector::Exact(_)
        ));
    }

    #[test]
    fn equal_coordinates_compare_equal_across_modes() {
        let exact = DynVector::new(["1.0", "0.25"], Some(Mode::Exact)).unwrap();
        let float = DynVector::new([1.0, 0.25], None).unwrap();
        assert_eq!(exact, float);
        let other = DynVector::new([1.0, 0.26], None).unwrap();
        assert_ne!(exact, other);
    }

    #[test]
    fn dimension_mismatch_is_reported_across_modes() {
        let a = DynVector::new(["1", "2", "3"], Some(Mode::Exact)).unwrap();
        let b = DynVector::new([1.0, 2.0], None).unwrap();
        assert_eq!(
            a.try_add(&b).unwrap_err(),
            VectorError::DimensionMismatch { left: 3, right: 2 }
        );
        assert_ne!(a, b);
    }

    #[test]
    fn conversion_failure_names_the_coordinate() {
        let err = DynVector::new(["1", "x"], Some(Mode::Exact)).unwrap_err();
        assert!(matches!(err, VectorError::Conversion { index: 1, .. }));
    }

    #[test]
    fn scaling_keeps_mode() {
        let v = DynVector::new(["1.5", "-2"], Some(Mode::Exact)).unwrap();
        let w = v.scaled(2).unwrap();
        assert_eq!(w.mode(), Some(Mode::Exact));
        assert_eq!(w.to_string(), "(3.0, -4)");
        assert!(matches!(
            v.scaled(f64::NAN),
            Err(VectorError::TypeMismatch { .. })
        ));
    }
}
