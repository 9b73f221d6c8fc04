//! Immutable N-dimensional vectors over an exact or floating scalar.
//!
//! Purpose
//! - One `Vector<T>` type whose numeric behavior is fixed by `T: Scalar`
//!   (`f64` or `Decimal`), so mixing modes inside generic code is a type error.
//! - Derived quantities (`magnitude`, `normalized`) are computed lazily and
//!   memoized in write-once cells; the vector itself never changes.
//!
//! Layout
//! - `mod.rs`: storage, construction, access, equality, formatting.
//! - `ops`: `+`, `-`, scalar `*`, negation.
//! - `geometry`: magnitude, normalization, products, angle, projection and
//!   tolerance predicates.

mod error;
mod geometry;
mod ops;

pub use error::{Result, VectorError};

use std::fmt;
use std::sync::OnceLock;

use crate::scalar::{Coerce, Mode, Scalar};

/// Symbolic coordinate names, valid for vectors of dimension ≤ 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn from_name(name: &str) -> Option<Axis> {
        match name {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Vector with coordinates of scalar type `T`.
///
/// Invariants:
/// - `coords.len()` is fixed at construction.
/// - `mode` is `Some(T::MODE)` for vectors built by coercion and `None` for
///   untagged ones; arithmetic keeps a tag only when both operands carry it.
/// - `magnitude`/`normalized` are caches of pure functions of `coords`.
#[derive(Clone)]
pub struct Vector<T: Scalar> {
    coords: Vec<T>,
    mode: Option<Mode>,
    magnitude: OnceLock<T>,
    normalized: OnceLock<Box<Vector<T>>>,
}

impl<T: Scalar> Vector<T> {
    /// Untagged vector from coordinates already in `T`.
    #[inline]
    pub fn new(coords: Vec<T>) -> Self {
        Self::with_mode(coords, None)
    }

    /// Coerce every value into `T` and tag the vector with `T::MODE`.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Coerce<T>,
    {
        let coords = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value.coerce().ok_or_else(|| VectorError::Conversion {
                    index,
                    value: value.to_string(),
                    mode: T::MODE,
                })
            })
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::with_mode(coords, Some(T::MODE)))
    }

    /// Untagged zero vector.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(vec![T::zero(); dimension])
    }

    pub(crate) fn with_mode(coords: Vec<T>, mode: Option<Mode>) -> Self {
        Self {
            coords,
            mode,
            magnitude: OnceLock::new(),
            normalized: OnceLock::new(),
        }
    }

    #[inline]
    pub fn coordinates(&self) -> &[T] {
        &self.coords
    }

    #[inline]
    pub fn into_coordinates(self) -> Vec<T> {
        self.coords
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Mode tag, `None` for untagged vectors.
    #[inline]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    /// Coordinate at position `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.coords
            .get(index)
            .copied()
            .ok_or_else(|| VectorError::Index {
                index: index.to_string(),
                dimension: self.dimension(),
            })
    }

    /// Coordinate by axis; only vectors of dimension ≤ 3 have named axes.
    pub fn axis(&self, axis: Axis) -> Result<T> {
        if self.dimension() > 3 {
            return Err(VectorError::Index {
                index: format!("{axis:?}").to_lowercase(),
                dimension: self.dimension(),
            });
        }
        self.get(axis.index())
    }

    /// Coordinate by axis name (`"x"`, `"y"`, `"z"`).
    pub fn named(&self, name: &str) -> Result<T> {
        let axis = Axis::from_name(name).ok_or_else(|| VectorError::Index {
            index: name.to_string(),
            dimension: self.dimension(),
        })?;
        self.axis(axis)
    }

    /// Tag shared by `self` and `other`, if any.
    #[inline]
    pub(crate) fn shared_mode(&self, other: &Self) -> Option<Mode> {
        match (self.mode, other.mode) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        }
    }

    pub(crate) fn check_same_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(coords: Vec<T>) -> Self {
        Self::new(coords)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
    fn from(coords: [T; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl<T: Scalar> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// `v == w` iff `v - w` is the zero vector under the mode's rule.
///
/// Vectors of different dimensions are never equal.
impl<T: Scalar> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.try_sub(other).is_ok_and(|d| d.is_zero())
    }
}

/// Reproduces the constructor call: `Vector([1.0, 2.0])`,
/// `Vector([0.5, 0.5], mode=Exact)`.
impl<T: Scalar> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:?}", self.coords)?;
        if let Some(mode) = self.mode {
            write!(f, ", mode={mode:?}")?;
        }
        write!(f, ")")
    }
}

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (k, x) in self.coords.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
