//! Newton-family solvers for the Tangent framework.
//!
//! # Modules
//!
//! - [`differentiate`]: finite-difference derivatives and Jacobians with an
//!   error-balancing step size
//! - [`equation`]: root finding for [`EquationProblem`]s: Newton's method,
//!   with optional backtracking and inexact step solves
//! - [`linear`]: reference [`LinearSolver`] implementations for the Newton step
//!
//! [`EquationProblem`]: tangent_core::EquationProblem
//! [`LinearSolver`]: tangent_core::LinearSolver

pub mod differentiate;
pub mod equation;
pub mod linear;
