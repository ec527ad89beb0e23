//! Finite-difference operators and model problems.
//!
//! The operators discretize a domain `[a, b]` with `m` interior points and
//! homogeneous Dirichlet boundaries, so the spacing is `h = (b - a) / (m + 1)`.
//!
//! The model problems are [`Semilinear`] systems `L u - g(u) = 0`:
//!
//! - [`bratu_1d`], [`bratu_2d`]: the Bratu (nonlinear Poisson) equation
//!   `u'' = α e^{-u}` with an [`Exponential`] term
//! - [`burgers`]: steady viscous Burgers' equation `-u'' + β u u' = f`
//!   with an [`Advection`] term
//!
//! plus the scalar test functions [`ArcTan`] and [`Quartic`].
//!
//! [`Semilinear`]: tangent_core::Semilinear

mod bratu;
mod burgers;
mod operators;
mod scalar;

pub use bratu::{Exponential, bratu_1d, bratu_2d};
pub use burgers::{Advection, burgers};
pub use operators::{central_difference_1d, laplacian_1d, laplacian_2d};
pub use scalar::{ArcTan, Quartic};
