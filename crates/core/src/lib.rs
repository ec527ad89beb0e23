//! Core traits and types for the Tangent solvers.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! model problems build on:
//!
//! - [`Iterate`]: a scalar or vector unknown that a Newton step can update
//! - [`EquationProblem`], [`JacobianProblem`]: residual and Jacobian
//!   providers that solvers drive toward zero
//! - [`Semilinear`]: the common `F(u) = L u - g(u)` system shape
//! - [`LinearSolver`]: the "solve `J v = b`" capability a Newton step needs
//! - [`Observer`]: receives solver events and optionally returns control actions

mod iterate;
mod linear;
mod observer;
mod problems;

pub use iterate::Iterate;
pub use linear::{LinearSolveError, LinearSolver};
pub use observer::Observer;
pub use problems::{
    Contribution, EquationProblem, FnProblem, JacobianProblem, NonlinearTerm, Semilinear,
    SemilinearError,
};
