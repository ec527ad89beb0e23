use std::convert::Infallible;

use nalgebra::{DMatrix, DVector};
use tangent_core::{Contribution, NonlinearTerm, Semilinear, SemilinearError};

use crate::{central_difference_1d, laplacian_1d};

/// The advection and forcing terms of steady Burgers' equation.
///
/// With a first-difference matrix `D`, the term is
/// `g(u) = f - β u ∘ (D u)` and its Jacobian is
/// `∂g/∂u = -β (diag(D u) + diag(u) D)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Advection {
    beta: f64,
    derivative: DMatrix<f64>,
    forcing: DVector<f64>,
}

impl Advection {
    /// Creates the term from a first-difference matrix and a forcing vector.
    ///
    /// # Errors
    ///
    /// Returns [`SemilinearError::DimensionMismatch`] if `derivative` is not
    /// square or `forcing` has a different length.
    pub fn new(
        beta: f64,
        derivative: DMatrix<f64>,
        forcing: DVector<f64>,
    ) -> Result<Self, SemilinearError<Infallible>> {
        let (rows, cols) = derivative.shape();
        if cols != rows {
            return Err(SemilinearError::DimensionMismatch {
                expected: rows,
                found: cols,
            });
        }
        if forcing.len() != rows {
            return Err(SemilinearError::DimensionMismatch {
                expected: rows,
                found: forcing.len(),
            });
        }

        Ok(Self {
            beta,
            derivative,
            forcing,
        })
    }

    /// Returns the advection coefficient `β`.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl NonlinearTerm for Advection {
    type Error = Infallible;

    fn value(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        let du = &self.derivative * u;
        Ok(&self.forcing - u.component_mul(&du) * self.beta)
    }

    fn jacobian(&self, u: &DVector<f64>) -> Result<Contribution, Self::Error> {
        let du = &self.derivative * u;
        let jacobian =
            DMatrix::from_diagonal(&du) + DMatrix::from_diagonal(u) * &self.derivative;
        Ok(Contribution::Dense(jacobian * -self.beta))
    }
}

/// Steady Burgers' equation `-u'' + β u u' = f` on `[-1, 1]` with `u(±1) = 0`.
///
/// Discretized as `F(u) = -K u + β u ∘ (D u) - f` with `m` interior points.
/// The Jacobian is `-K + β diag(D u) + β diag(u) D`.
///
/// # Errors
///
/// Returns [`SemilinearError::DimensionMismatch`] if `forcing` does not have
/// length `m`.
pub fn burgers(
    m: usize,
    beta: f64,
    forcing: DVector<f64>,
) -> Result<Semilinear<Advection>, SemilinearError<Infallible>> {
    let term = Advection::new(beta, central_difference_1d(-1.0, 1.0, m), forcing)?;
    Semilinear::new(-laplacian_1d(-1.0, 1.0, m), term)
}
