//! Derived quantities and geometric predicates.
//!
//! Conventions
//! - Exact mode compares against exact zero; floating mode against `eps`
//!   (default `cfg::EPS`). Every tolerance predicate has an `_eps` variant.
//! - The zero vector is parallel to every vector of the same dimension.
//! - Failures are reported as `VectorError`, never as `NaN`.

use tracing::trace;

use super::{Result, Vector, VectorError};
use crate::cfg::EPS;
use crate::scalar::{Mode, Scalar};

impl<T: Scalar> Vector<T> {
    /// Euclidean length `sqrt(Σ xᵢ²)`, computed once in the native mode.
    ///
    /// When the exact sum of squares leaves the `Decimal` range the length is
    /// taken as `m·|v/m|` with `m = max |xᵢ|`; only a length that is itself out
    /// of range fails with `Overflow`.
    pub fn magnitude(&self) -> Result<T> {
        if let Some(m) = self.magnitude.get() {
            return Ok(*m);
        }
        let m = match sum_of_squares(self.coords.iter().copied()) {
            Some(sum) => sum.sqrt(),
            None => self.rescaled_magnitude()?,
        };
        trace!(dimension = self.dimension(), "magnitude cached");
        Ok(*self.magnitude.get_or_init(|| m))
    }

    fn rescaled_magnitude(&self) -> Result<T> {
        let big = self
            .coords
            .iter()
            .map(|&x| x.abs())
            .fold(T::zero(), |m, x| if x > m { x } else { m });
        self.coords
            .iter()
            .map(|&x| x.checked_div(big))
            .collect::<Option<Vec<T>>>()
            .and_then(|ys| sum_of_squares(ys.into_iter()))
            .and_then(|sum| big.checked_mul(sum.sqrt()))
            .ok_or(VectorError::Overflow { op: "magnitude" })
    }

    /// Unit vector `v * (1 / |v|)`, computed once on first success.
    pub fn normalized(&self) -> Result<&Vector<T>> {
        if let Some(unit) = self.normalized.get() {
            return Ok(&**unit);
        }
        let inv = T::one()
            .checked_div(self.magnitude()?)
            .ok_or(VectorError::ZeroVector)?;
        let unit = self.scale(inv)?;
        trace!(dimension = self.dimension(), "normalized cached");
        // A racing initializer stores an identical value; ours is dropped.
        Ok(&**self.normalized.get_or_init(|| Box::new(unit)))
    }

    /// Inner product `Σ vᵢwᵢ`.
    pub fn inner(&self, other: &Self) -> Result<T> {
        self.check_same_dimension(other)?;
        self.coords
            .iter()
            .zip(&other.coords)
            .try_fold(T::zero(), |acc, (&a, &b)| acc.checked_add(a.checked_mul(b)?))
            .ok_or(VectorError::Overflow { op: "inner product" })
    }

    /// Cross product; both operands must be 3-dimensional.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.dimension() != 3 {
                return Err(VectorError::Dimension {
                    expected: 3,
                    found: v.dimension(),
                });
            }
        }
        let (a, b) = (&self.coords, &other.coords);
        let minor = |i: usize, j: usize| {
            a[i].checked_mul(b[j])?
                .checked_sub(a[j].checked_mul(b[i])?)
        };
        let coords = [(1, 2), (2, 0), (0, 1)]
            .into_iter()
            .map(|(i, j)| minor(i, j).ok_or(VectorError::Overflow { op: "cross product" }))
            .collect::<Result<Vec<T>>>()?;
        Ok(Self::with_mode(coords, self.shared_mode(other)))
    }

    /// Area of the parallelogram spanned by two 3-vectors: `|v × w|`.
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<T> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3-vectors: `|v × w| / 2`.
    pub fn area_of_triangle_with(&self, other: &Self) -> Result<T> {
        Ok(self.area_of_parallelogram_with(other)?.halve())
    }

    /// Angle in radians, in `[0, π]`.
    ///
    /// Dimensions are checked before zero-ness so callers can tell the two
    /// failures apart. The cosine is `⟨v̂,ŵ⟩`, which stays in range for any
    /// vectors whose lengths are representable.
    pub fn angle(&self, other: &Self) -> Result<f64> {
        self.check_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Err(VectorError::ZeroVectorAngle);
        }
        let cos = self.unit_for_angle()?.inner(other.unit_for_angle()?)?;
        // rounding can push |cos| slightly above 1
        Ok(cos.to_f64().clamp(-1.0, 1.0).acos())
    }

    fn unit_for_angle(&self) -> Result<&Self> {
        self.normalized().map_err(|e| match e {
            VectorError::ZeroVector => VectorError::ZeroVectorAngle,
            e => e,
        })
    }

    /// Angle in degrees.
    pub fn angle_degrees(&self, other: &Self) -> Result<f64> {
        Ok(self.angle(other)?.to_degrees())
    }

    /// Projection onto `basis`: `basis * (⟨v,b⟩ / ⟨b,b⟩)`.
    ///
    /// `⟨b,b⟩` is used instead of `|b|²` so exact mode never goes through a
    /// rounded square root. A zero basis fails with `ZeroBasis`. Like any
    /// scalar multiple of `basis`, the result carries the basis' mode tag.
    pub fn projected(&self, basis: &Self) -> Result<Self> {
        self.check_same_dimension(basis)?;
        if basis.is_zero() {
            return Err(VectorError::ZeroBasis);
        }
        let bb = basis.inner(basis)?;
        if bb == T::zero() {
            return Err(VectorError::ZeroBasis);
        }
        let coef = self
            .inner(basis)?
            .checked_div(bb)
            .ok_or(VectorError::Overflow { op: "projection" })?;
        basis.scale(coef)
    }

    /// `v - projected(basis)`.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        self.try_sub(&self.projected(basis)?)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_eps(EPS)
    }

    /// Exact mode: every coordinate is exactly zero. Floating mode: `|v| < eps`.
    pub fn is_zero_eps(&self, eps: f64) -> bool {
        match T::MODE {
            Mode::Exact => self.coords.iter().all(|x| x.is_negligible(eps)),
            Mode::Float => self.magnitude().is_ok_and(|m| m.is_negligible(eps)),
        }
    }

    #[inline]
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        self.is_orthogonal_eps(other, EPS)
    }

    /// Exact mode: `⟨v,w⟩ == 0`. Floating mode: `|⟨v,w⟩| < eps`.
    pub fn is_orthogonal_eps(&self, other: &Self, eps: f64) -> Result<bool> {
        Ok(self.inner(other)?.is_negligible(eps))
    }

    #[inline]
    pub fn is_parallel(&self, other: &Self) -> Result<bool> {
        self.is_parallel_eps(other, EPS)
    }

    /// True if either vector is zero, or the unit vectors agree up to sign.
    ///
    /// Exact mode checks proportionality `a_k·b_i == a_i·b_k` against a pivot
    /// `a_k ≠ 0`, which is the same relation without the rounded square root
    /// that normalization would introduce.
    pub fn is_parallel_eps(&self, other: &Self, eps: f64) -> Result<bool> {
        self.check_same_dimension(other)?;
        if self.is_zero_eps(eps) || other.is_zero_eps(eps) {
            return Ok(true);
        }
        match T::MODE {
            Mode::Exact => Ok(self.is_proportional_exact(other)),
            Mode::Float => {
                let u = self.normalized()?;
                let w = other.normalized()?;
                Ok(u.eq_eps(w, eps) || u.eq_eps(&-w, eps))
            }
        }
    }

    /// `v - w` is zero under `eps`; false on dimension mismatch.
    pub fn eq_eps(&self, other: &Self, eps: f64) -> bool {
        self.try_sub(other).is_ok_and(|d| d.is_zero_eps(eps))
    }

    /// `a_k·bᵢ == aᵢ·b_k` for a pivot `a_k ≠ 0`. A product outside the
    /// `Decimal` range is compared as `bᵢ/b_k == aᵢ/a_k` instead; equal ratios
    /// round identically.
    fn is_proportional_exact(&self, other: &Self) -> bool {
        let (a, b) = (&self.coords, &other.coords);
        let Some(k) = a.iter().position(|&x| x != T::zero()) else {
            return true;
        };
        if b[k] == T::zero() {
            return b.iter().all(|&x| x == T::zero());
        }
        a.iter().zip(b).all(|(&ai, &bi)| {
            match (a[k].checked_mul(bi), ai.checked_mul(b[k])) {
                (Some(l), Some(r)) => l == r,
                _ => bi.checked_div(b[k]) == ai.checked_div(a[k]),
            }
        })
    }
}

fn sum_of_squares<T: Scalar>(mut xs: impl Iterator<Item = T>) -> Option<T> {
    xs.try_fold(T::zero(), |acc, x| acc.checked_add(x.checked_mul(x)?))
}
