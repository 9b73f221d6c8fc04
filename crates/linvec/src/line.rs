//! Lines in the plane, `n · x = c`, built on [`Vector`].
//!
//! - `Line<T>` stores the normal vector and constant term and derives a
//!   basepoint and a direction vector once, at construction.
//! - Membership and comparisons delegate to vector arithmetic and
//!   `Vector::is_parallel`; no linear solving happens here.
//!
//! Degenerate lines: a zero normal describes the whole plane when `c == 0` and
//! the empty set otherwise. Such a line has no basepoint.

use std::fmt;

use rust_decimal::Decimal;

use crate::cfg::{EPS, LINE_DISPLAY_PLACES};
use crate::scalar::{Coerce, Mode, Scalar};
use crate::vector::{Vector, VectorError};

/// Errors surfaced while building or querying a line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line normal must be 2-dimensional, got {found}")]
    Dimension { found: usize },
    #[error("constant term {value:?} cannot be coerced to {mode}")]
    Constant { value: String, mode: Mode },
    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// Line `n · x = c` in R².
///
/// Invariants:
/// - `normal.dimension() == 2`.
/// - `basepoint` is `Some` iff the normal has a non-negligible coordinate.
/// - `direction` is the normal rotated by 90°, `(-n_y, n_x)`.
#[derive(Clone)]
pub struct Line<T: Scalar = Decimal> {
    normal: Vector<T>,
    constant: T,
    basepoint: Option<Vector<T>>,
    direction: Vector<T>,
}

impl<T: Scalar> Line<T> {
    pub const DIMENSION: usize = 2;

    /// Build from a 2D normal and a constant term coerced into `T`.
    pub fn new<C: Coerce<T>>(normal: Vector<T>, constant: C) -> Result<Self, LineError> {
        if normal.dimension() != Self::DIMENSION {
            return Err(LineError::Dimension {
                found: normal.dimension(),
            });
        }
        let constant = constant.coerce().ok_or_else(|| LineError::Constant {
            value: constant.to_string(),
            mode: T::MODE,
        })?;
        let n = normal.coordinates();
        let direction = Vector::with_mode(vec![-n[1], n[0]], normal.mode());
        let basepoint = basepoint_of(&normal, constant)?;
        Ok(Self {
            normal,
            constant,
            basepoint,
            direction,
        })
    }

    #[inline]
    pub fn normal(&self) -> &Vector<T> {
        &self.normal
    }

    #[inline]
    pub fn constant(&self) -> T {
        self.constant
    }

    /// A point on the line, `None` for a zero normal.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector<T>> {
        self.basepoint.as_ref()
    }

    /// Normal rotated by 90°: `(-n_y, n_x)`. Flipping the sign of one
    /// coordinate without swapping the two would not be perpendicular to the
    /// normal in general.
    #[inline]
    pub fn direction(&self) -> &Vector<T> {
        &self.direction
    }

    /// Whether `point` satisfies `n · point = c`.
    pub fn includes(&self, point: &Vector<T>) -> Result<bool, LineError> {
        match &self.basepoint {
            Some(base) => {
                let path = point.try_sub(base)?;
                Ok(path.is_parallel(&self.direction)?)
            }
            None => {
                self.normal.check_same_dimension(point)?;
                Ok(self.constant.is_negligible(EPS))
            }
        }
    }

    /// Normals are parallel. A zero normal is parallel to everything.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool, LineError> {
        Ok(self.normal.is_parallel(&other.normal)?)
    }

    /// Both lines describe the same point set.
    pub fn coincides_with(&self, other: &Self) -> Result<bool, LineError> {
        if !self.is_parallel_to(other)? {
            return Ok(false);
        }
        match (&self.basepoint, &other.basepoint) {
            (Some(p), Some(_)) => other.includes(p),
            (None, None) => {
                Ok(self.constant.is_negligible(EPS) == other.constant.is_negligible(EPS))
            }
            _ => Ok(false),
        }
    }
}

impl<T: Scalar> Default for Line<T> {
    /// `0·x = 0`.
    fn default() -> Self {
        let zeros = vec![T::zero(); Self::DIMENSION];
        Self {
            normal: Vector::with_mode(zeros.clone(), Some(T::MODE)),
            constant: T::zero(),
            basepoint: None,
            direction: Vector::with_mode(zeros, Some(T::MODE)),
        }
    }
}

/// Index of the first coordinate that is not negligible under the vector's
/// mode (exact zero, or `|x| < EPS` for floating coordinates).
pub fn first_nonzero_index<T: Scalar>(v: &Vector<T>) -> Option<usize> {
    v.iter().position(|x| !x.is_negligible(EPS))
}

fn basepoint_of<T: Scalar>(
    normal: &Vector<T>,
    constant: T,
) -> Result<Option<Vector<T>>, VectorError> {
    let Some(k) = first_nonzero_index(normal) else {
        return Ok(None);
    };
    let mut coords = vec![T::zero(); normal.dimension()];
    coords[k] = constant
        .checked_div(normal.coordinates()[k])
        .ok_or(VectorError::Overflow { op: "basepoint" })?;
    Ok(Some(Vector::with_mode(coords, normal.mode())))
}

fn write_coefficient<T: Scalar>(c: T, is_initial: bool) -> String {
    let mut out = String::new();
    if c < T::zero() {
        out.push('-');
    }
    if c > T::zero() && !is_initial {
        out.push('+');
    }
    if !is_initial {
        out.push(' ');
    }
    if c.abs() != T::one() {
        out.push_str(&c.abs().to_string());
    }
    out
}

/// `x_1 + 2x_2 = 3`: coefficients rounded to three places, unit coefficients
/// elided, terms that round to zero dropped; `0 = c` for a zero normal.
impl<T: Scalar> fmt::Display for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kept: Vec<(usize, T)> = self
            .normal
            .iter()
            .map(|&c| c.round_to(LINE_DISPLAY_PLACES))
            .enumerate()
            .filter(|&(_, c)| c != T::zero())
            .collect();
        if kept.is_empty() {
            write!(f, "0")?;
        } else {
            let terms: Vec<String> = kept
                .iter()
                .enumerate()
                .map(|(k, &(i, c))| format!("{}x_{}", write_coefficient(c, k == 0), i + 1))
                .collect();
            write!(f, "{}", terms.join(" "))?;
        }
        write!(f, " = {}", self.constant.round_to(LINE_DISPLAY_PLACES))
    }
}

impl<T: Scalar> fmt::Debug for Line<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:?}, {})", self.normal, self.constant)
    }
}
