#[cfg(feature = "serde")]
use serde::Serialize;

/// Indicates how a Newton solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// No backtracking trial reduced the residual.
    LineSearchFailed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// Diagnostics for one completed Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Record {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Norm of the true residual at the new iterate.
    pub residual_norm: f64,

    /// `residual_norm` divided by the initial residual norm.
    pub relative_residual: f64,

    /// Norm of the applied step `α dx`.
    pub step_norm: f64,

    /// Norm of the undamped Newton step `dx`.
    pub newton_step_norm: f64,

    /// Accepted step length (1 for a full step).
    pub alpha: f64,

    /// Number of rejected backtracking trials.
    pub backtracks: usize,

    /// Realized relative perturbation `‖rhs + r‖ / ‖r‖` of the step equation.
    pub perturbation: f64,
}

/// One rejected trial of a backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Trial {
    /// The Newton iteration the line search belonged to.
    pub iter: usize,

    /// Step length tried.
    pub alpha: f64,

    /// Residual norm at the trial iterate (may be non-finite).
    pub residual_norm: f64,

    /// Reduction ratio `safety · ‖r(x1)‖ / ‖r(x0)‖`.
    pub reduction: f64,
}

/// The result of a Newton solve.
#[derive(Debug, Clone)]
pub struct Solution<X> {
    /// Final solver status.
    pub status: Status,

    /// The last accepted iterate.
    pub x: X,

    /// Residual at `x`.
    pub residual: X,

    /// Norm of `residual`.
    pub residual_norm: f64,

    /// Norm of the residual at the initial guess.
    pub initial_residual_norm: f64,

    /// Number of completed iterations.
    pub iters: usize,

    /// One record per completed iteration.
    pub history: Vec<Record>,

    /// Trials of the line search that ended the solve.
    ///
    /// Empty unless `status` is [`Status::LineSearchFailed`].
    pub failed_search: Vec<Trial>,
}

impl<X> Solution<X> {
    /// Returns true if the solve converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
