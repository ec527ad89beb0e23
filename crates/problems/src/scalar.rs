use std::convert::Infallible;

use tangent_core::{EquationProblem, JacobianProblem};

/// `f(x) = arctan(x)`, with its single root at 0.
///
/// Full Newton steps diverge from starting points with `|x| ≳ 1.39`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArcTan;

/// `f(x) = x⁴ - c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartic {
    pub c: f64,
}

impl EquationProblem for ArcTan {
    type Iterate = f64;
    type Error = Infallible;

    fn residual(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.atan())
    }
}

impl JacobianProblem for ArcTan {
    type Jacobian = f64;

    fn jacobian(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(1.0 / (1.0 + x * x))
    }
}

impl EquationProblem for Quartic {
    type Iterate = f64;
    type Error = Infallible;

    fn residual(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(x.powi(4) - self.c)
    }
}

impl JacobianProblem for Quartic {
    type Jacobian = f64;

    fn jacobian(&self, x: &f64) -> Result<f64, Self::Error> {
        Ok(4.0 * x.powi(3))
    }
}
