//! Solvers for equation problems: finding roots of `F(x) = 0`.
//!
//! An [`EquationProblem`] maps an iterate (a scalar or a vector of unknowns)
//! to its residual. Solvers in this module drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`]: Newton's method with optional backtracking and inexact
//!   step solves
//!
//! [`EquationProblem`]: tangent_core::EquationProblem

pub mod newton;
