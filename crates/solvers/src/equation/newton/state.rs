use tangent_core::Iterate;

use super::{Record, Solution, Status, Trial};

/// Mutable solver state threaded through the iteration.
#[derive(Debug)]
pub(super) struct State<X> {
    pub(super) x: X,
    pub(super) residual: X,
    pub(super) residual_norm: f64,
    pub(super) initial_residual_norm: f64,
    pub(super) iters: usize,
    pub(super) history: Vec<Record>,
    pub(super) failed_search: Vec<Trial>,
}

/// An accepted update of the iterate.
#[derive(Debug)]
pub(super) struct Step<X> {
    pub(super) x: X,
    pub(super) residual: X,
    pub(super) residual_norm: f64,
    pub(super) alpha: f64,
    pub(super) backtracks: usize,
}

impl<X: Iterate> State<X> {
    pub(super) fn new(x: X, residual: X, residual_norm: f64, max_iters: usize) -> Self {
        Self {
            x,
            residual,
            residual_norm,
            initial_residual_norm: residual_norm,
            iters: 0,
            history: Vec::with_capacity(max_iters),
            failed_search: Vec::new(),
        }
    }

    /// Applies an accepted step and records the iteration.
    pub(super) fn advance(
        &mut self,
        iter: usize,
        step: Step<X>,
        newton_step_norm: f64,
        perturbation: f64,
    ) -> Record {
        self.x = step.x;
        self.residual = step.residual;
        self.residual_norm = step.residual_norm;
        self.iters = iter;

        let record = Record {
            iter,
            residual_norm: step.residual_norm,
            relative_residual: step.residual_norm / self.initial_residual_norm,
            step_norm: step.alpha * newton_step_norm,
            newton_step_norm,
            alpha: step.alpha,
            backtracks: step.backtracks,
            perturbation,
        };
        self.history.push(record);
        record
    }

    pub(super) fn into_solution(self, status: Status) -> Solution<X> {
        Solution {
            status,
            x: self.x,
            residual: self.residual,
            residual_norm: self.residual_norm,
            initial_residual_norm: self.initial_residual_norm,
            iters: self.iters,
            history: self.history,
            failed_search: self.failed_search,
        }
    }
}
