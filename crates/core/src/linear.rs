use thiserror::Error;

/// Solves the linear step equation `J v = b`.
///
/// A Newton step solves `J v = -r` once per iteration. Implementations are
/// called through `&self` and must not carry state from one call to the next,
/// so repeated solves never depend on call order.
///
/// Implementations may be inexact (iterative or low precision), but must
/// report a singular operator instead of returning non-finite values.
pub trait LinearSolver<J, X> {
    /// Returns `v` such that `jacobian * v ≈ rhs`.
    ///
    /// # Errors
    ///
    /// Returns a [`LinearSolveError`] if the operator is singular or its
    /// shape does not match the right-hand side.
    fn solve(&self, jacobian: &J, rhs: &X) -> Result<X, LinearSolveError>;
}

/// Errors reported by a [`LinearSolver`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LinearSolveError {
    /// A scalar derivative is zero or the quotient is not finite.
    #[error("singular derivative: {derivative}")]
    SingularDerivative { derivative: f64 },

    /// A matrix operator is not invertible.
    #[error("singular system")]
    SingularSystem,

    /// The operator shape does not match the right-hand side.
    #[error("operator is {rows}x{cols} but right-hand side has length {len}")]
    DimensionMismatch { rows: usize, cols: usize, len: usize },
}
