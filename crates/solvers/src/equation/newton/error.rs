use std::error::Error as StdError;

use tangent_core::LinearSolveError;

use super::{ConfigError, Record};

/// Errors that end a Newton solve.
///
/// Outcomes the caller can act on, such as an exhausted iteration budget or
/// a failed line search, are reported through [`Status`](super::Status)
/// instead.
///
/// Every variant raised during iteration carries the records of the
/// iterations completed before the failure, see [`Error::history`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("singular derivative {derivative} at iteration {iter}")]
    SingularDerivative {
        iter: usize,
        derivative: f64,
        history: Vec<Record>,
    },

    #[error("singular Jacobian at iteration {iter}")]
    SingularSystem { iter: usize, history: Vec<Record> },

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: usize,
        found: usize,
        history: Vec<Record>,
    },

    #[error("non-finite residual at iteration {iter}")]
    NonFiniteResidual { iter: usize, history: Vec<Record> },

    #[error("problem error: {source}")]
    Problem {
        source: Box<dyn StdError + Send + Sync>,
        history: Vec<Record>,
    },
}

impl Error {
    /// Returns the records of the iterations completed before the error.
    ///
    /// Empty for [`Error::InvalidConfig`] and for failures at the initial guess.
    #[must_use]
    pub fn history(&self) -> &[Record] {
        match self {
            Self::InvalidConfig(_) => &[],
            Self::SingularDerivative { history, .. }
            | Self::SingularSystem { history, .. }
            | Self::DimensionMismatch { history, .. }
            | Self::NonFiniteResidual { history, .. }
            | Self::Problem { history, .. } => history,
        }
    }

    /// Attaches the iteration history to an error raised mid-solve.
    pub(super) fn with_history(mut self, records: Vec<Record>) -> Self {
        match &mut self {
            Self::InvalidConfig(_) => {}
            Self::SingularDerivative { history, .. }
            | Self::SingularSystem { history, .. }
            | Self::DimensionMismatch { history, .. }
            | Self::NonFiniteResidual { history, .. }
            | Self::Problem { history, .. } => *history = records,
        }
        self
    }

    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem {
            source: Box::new(err),
            history: Vec::new(),
        }
    }

    pub(super) fn non_finite(iter: usize) -> Self {
        Self::NonFiniteResidual {
            iter,
            history: Vec::new(),
        }
    }

    pub(super) fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            expected,
            found,
            history: Vec::new(),
        }
    }

    pub(crate) fn linear(err: LinearSolveError, iter: usize) -> Self {
        match err {
            LinearSolveError::SingularDerivative { derivative } => Self::SingularDerivative {
                iter,
                derivative,
                history: Vec::new(),
            },
            LinearSolveError::SingularSystem => Self::SingularSystem {
                iter,
                history: Vec::new(),
            },
            LinearSolveError::DimensionMismatch { rows, cols, len } => {
                let found = if rows == cols { len } else { cols };
                Self::dimension_mismatch(rows, found)
            }
        }
    }
}
