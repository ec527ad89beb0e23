use tangent_core::{EquationProblem, JacobianProblem};

use crate::differentiate::{Differentiable, Differentiator};

/// Supplies the Jacobian a Newton step is solved against.
///
/// [`Analytic`] asks the problem for its exact Jacobian. A [`Differentiator`]
/// approximates it from residual evaluations, reusing the residual the solver
/// has already computed at `x`.
pub trait JacobianSource<P: EquationProblem> {
    type Jacobian;

    /// Returns the Jacobian at `x`, where `residual` is the residual at `x`.
    ///
    /// # Errors
    ///
    /// Returns the problem's error if an evaluation fails.
    fn jacobian(
        &self,
        problem: &P,
        x: &P::Iterate,
        residual: &P::Iterate,
    ) -> Result<Self::Jacobian, P::Error>;
}

/// Uses the exact Jacobian of a [`JacobianProblem`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Analytic;

impl<P: JacobianProblem> JacobianSource<P> for Analytic {
    type Jacobian = P::Jacobian;

    fn jacobian(
        &self,
        problem: &P,
        x: &P::Iterate,
        _residual: &P::Iterate,
    ) -> Result<P::Jacobian, P::Error> {
        problem.jacobian(x)
    }
}

impl<P> JacobianSource<P> for Differentiator
where
    P: EquationProblem,
    P::Iterate: Differentiable,
{
    type Jacobian = <P::Iterate as Differentiable>::Jacobian;

    fn jacobian(
        &self,
        problem: &P,
        x: &P::Iterate,
        residual: &P::Iterate,
    ) -> Result<Self::Jacobian, P::Error> {
        Differentiator::jacobian(self, |x| problem.residual(x), x, residual)
    }
}
