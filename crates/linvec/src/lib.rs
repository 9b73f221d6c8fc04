//! Dual-mode N-dimensional vectors and 2D lines.
//!
//! Modes
//! - Exact: coordinates are `rust_decimal::Decimal`; predicates compare
//!   against exact zero.
//! - Floating: coordinates are `f64`; predicates use `cfg::EPS`.
//!
//! The mode is a type parameter of `Vector<T>`. Mixed-mode arithmetic is only
//! available through `DynVector`, which degrades to floating point.
//!
//! Logging: the crate emits `tracing` events (cache fills at `trace`, mode
//! degradation at `debug`) and installs no subscriber.

pub mod cfg;
pub mod dynamic;
pub mod interop;
pub mod line;
pub mod scalar;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use dynamic::DynVector;
pub use line::{first_nonzero_index, Line, LineError};
pub use scalar::{Coerce, Mode, Scalar};
pub use vector::{Axis, Vector, VectorError};

pub use rust_decimal::Decimal;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::EPS;
    pub use crate::dynamic::DynVector;
    pub use crate::line::{Line, LineError};
    pub use crate::scalar::{Coerce, Mode, Scalar};
    pub use crate::vector::{Axis, Vector, VectorError};
    pub use rust_decimal::Decimal;
}
