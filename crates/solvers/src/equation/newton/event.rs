use super::Record;

/// Events emitted by the Newton solvers.
///
/// `Started` is emitted once with the initial iterate. `Trial` is emitted for
/// every backtracking trial and `Stepped` after each completed iteration.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a, X> {
    /// The initial residual has been evaluated.
    Started {
        /// The initial iterate.
        x: &'a X,

        /// Norm of the initial residual.
        residual_norm: f64,
    },

    /// A backtracking trial has been evaluated.
    Trial {
        /// The Newton iteration this trial belongs to.
        iter: usize,

        /// Trial number within the line search, starting at 0.
        trial: usize,

        /// Step length for this trial.
        alpha: f64,

        /// Reduction ratio `safety · ‖r(x1)‖ / ‖r(x0)‖`.
        reduction: f64,

        /// Whether the trial was accepted.
        accepted: bool,
    },

    /// An iteration has completed and the iterate has been updated.
    Stepped {
        /// The updated iterate.
        x: &'a X,

        /// Diagnostics for the iteration.
        record: &'a Record,
    },
}

impl<X> Event<'_, X> {
    /// Returns the Newton iteration the event belongs to (0 for `Started`).
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Started { .. } => 0,
            Self::Trial { iter, .. } => *iter,
            Self::Stepped { record, .. } => record.iter,
        }
    }

    /// Returns the current residual norm, if the event carries one.
    ///
    /// Trials report a reduction ratio rather than a norm and return `None`.
    #[must_use]
    pub fn residual_norm(&self) -> Option<f64> {
        match self {
            Self::Started { residual_norm, .. } => Some(*residual_norm),
            Self::Trial { .. } => None,
            Self::Stepped { record, .. } => Some(record.residual_norm),
        }
    }
}
