//! Tolerance defaults for floating-mode predicates.
//!
//! Policy
//! - Defaults are fixed constants. Callers that need a different slack use the
//!   `_eps` variants (`is_zero_eps`, `is_orthogonal_eps`, ...) instead of a
//!   global knob.
//! - Exact-mode predicates ignore the tolerance entirely.

/// Zero/orthogonality/parallelism threshold for floating coordinates.
pub const EPS: f64 = 1e-10;

/// Number of decimal places kept when rendering line coefficients.
pub(crate) const LINE_DISPLAY_PLACES: u32 = 3;
