use std::convert::Infallible;

use nalgebra::DVector;
use tangent_core::{Contribution, NonlinearTerm, Semilinear};

use crate::{laplacian_1d, laplacian_2d};

/// The term `g(u) = α e^{-u}`, applied pointwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    pub alpha: f64,
}

impl NonlinearTerm for Exponential {
    type Error = Infallible;

    fn value(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        Ok(u.map(|v| self.alpha * (-v).exp()))
    }

    fn jacobian(&self, u: &DVector<f64>) -> Result<Contribution, Self::Error> {
        Ok(Contribution::Diagonal(u.map(|v| -self.alpha * (-v).exp())))
    }
}

/// The 1D Bratu problem `u'' = α e^{-u}` on `[-1, 1]` with `u(±1) = 0`.
///
/// Discretized as `F(u) = K u - α e^{-u}` with `m` interior points.
#[must_use]
pub fn bratu_1d(m: usize, alpha: f64) -> Semilinear<Exponential> {
    // Square by construction, unwrap is safe
    Semilinear::new(laplacian_1d(-1.0, 1.0, m), Exponential { alpha }).unwrap()
}

/// The 2D Bratu problem `-Δu = α e^{-u}` on `[-1, 1]²` with zero boundary values.
///
/// Discretized as `F(u) = -K₂ u - α e^{-u}` on an `m × m` interior grid.
#[must_use]
pub fn bratu_2d(m: usize, alpha: f64) -> Semilinear<Exponential> {
    // Square by construction, unwrap is safe
    Semilinear::new(-laplacian_2d(-1.0, 1.0, m), Exponential { alpha }).unwrap()
}
