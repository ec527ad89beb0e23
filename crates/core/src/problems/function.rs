use std::{convert::Infallible, marker::PhantomData};

use crate::{EquationProblem, Iterate, JacobianProblem};

/// An equation problem built from plain functions.
///
/// `FnProblem::new(f)` wraps a residual function, and
/// [`with_jacobian`](FnProblem::with_jacobian) attaches an exact Jacobian.
/// Evaluation never fails.
///
/// ```
/// use tangent_core::{EquationProblem, FnProblem, JacobianProblem};
///
/// let problem = FnProblem::new(|x: &f64| x.atan()).with_jacobian(|x: &f64| 1.0 / (1.0 + x * x));
///
/// assert_eq!(problem.residual(&0.0).unwrap(), 0.0);
/// assert_eq!(problem.jacobian(&0.0).unwrap(), 1.0);
/// ```
pub struct FnProblem<X, F, J = ()> {
    residual: F,
    jacobian: J,
    _iterate: PhantomData<fn(&X) -> X>,
}

impl<X, F> FnProblem<X, F>
where
    X: Iterate,
    F: Fn(&X) -> X,
{
    /// Creates a problem from a residual function.
    pub fn new(residual: F) -> Self {
        Self {
            residual,
            jacobian: (),
            _iterate: PhantomData,
        }
    }

    /// Attaches an exact Jacobian function.
    pub fn with_jacobian<J, JX>(self, jacobian: J) -> FnProblem<X, F, J>
    where
        J: Fn(&X) -> JX,
    {
        FnProblem {
            residual: self.residual,
            jacobian,
            _iterate: PhantomData,
        }
    }
}

impl<X, F, J> EquationProblem for FnProblem<X, F, J>
where
    X: Iterate,
    F: Fn(&X) -> X,
{
    type Iterate = X;
    type Error = Infallible;

    fn residual(&self, x: &X) -> Result<X, Self::Error> {
        Ok((self.residual)(x))
    }
}

impl<X, F, J, JX> JacobianProblem for FnProblem<X, F, J>
where
    X: Iterate,
    F: Fn(&X) -> X,
    J: Fn(&X) -> JX,
{
    type Jacobian = JX;

    fn jacobian(&self, x: &X) -> Result<JX, Self::Error> {
        Ok((self.jacobian)(x))
    }
}
