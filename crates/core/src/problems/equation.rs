use crate::Iterate;

/// Defines a system of equations `F(x) = 0` to be solved.
///
/// An equation problem supplies the residual `F(x)` at a given iterate.
/// The residual must have the same shape as the iterate: a scalar for a
/// scalar problem, a vector of the same length for a vector problem.
///
/// Solvers that need a derivative either use a [`JacobianProblem`] or
/// approximate one from residual evaluations alone.
pub trait EquationProblem {
    type Iterate: Iterate;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the residual at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residual cannot be computed.
    fn residual(&self, x: &Self::Iterate) -> Result<Self::Iterate, Self::Error>;
}

/// An equation problem that can also supply its exact Jacobian.
///
/// The Jacobian maps a perturbation of the iterate to a perturbation of the
/// residual. For scalar problems it is the derivative `f'(x)`; for vector
/// problems it is typically a matrix.
pub trait JacobianProblem: EquationProblem {
    type Jacobian;

    /// Computes the Jacobian at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(&self, x: &Self::Iterate) -> Result<Self::Jacobian, Self::Error>;
}
