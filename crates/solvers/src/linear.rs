//! Reference linear solvers for the Newton step.
//!
//! - [`Divide`] solves the scalar step `f'(x) v = b` by division.
//! - [`DenseLu`] solves `J v = b` with a partially pivoted LU factorization.

use nalgebra::{DMatrix, DVector};
use tangent_core::{LinearSolveError, LinearSolver};

/// Solves a scalar step by dividing by the derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Divide;

impl LinearSolver<f64, f64> for Divide {
    fn solve(&self, derivative: &f64, rhs: &f64) -> Result<f64, LinearSolveError> {
        let derivative = *derivative;
        if derivative == 0.0 {
            return Err(LinearSolveError::SingularDerivative { derivative });
        }

        let step = rhs / derivative;
        if step.is_finite() {
            Ok(step)
        } else {
            Err(LinearSolveError::SingularDerivative { derivative })
        }
    }
}

/// Solves a dense system with LU decomposition.
///
/// The factorization is recomputed on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DenseLu;

impl LinearSolver<DMatrix<f64>, DVector<f64>> for DenseLu {
    fn solve(
        &self,
        jacobian: &DMatrix<f64>,
        rhs: &DVector<f64>,
    ) -> Result<DVector<f64>, LinearSolveError> {
        let (rows, cols) = jacobian.shape();
        if rows != cols || rows != rhs.len() {
            return Err(LinearSolveError::DimensionMismatch {
                rows,
                cols,
                len: rhs.len(),
            });
        }

        let step = jacobian
            .clone()
            .lu()
            .solve(rhs)
            .ok_or(LinearSolveError::SingularSystem)?;

        if step.iter().all(|v| v.is_finite()) {
            Ok(step)
        } else {
            Err(LinearSolveError::SingularSystem)
        }
    }
}
