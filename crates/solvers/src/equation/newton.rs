//! Newton's method for scalar and vector equation problems.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration:
//!
//! 1. Evaluates the Jacobian `J` at the current iterate (exactly, or by
//!    finite differences).
//! 2. Solves the step equation `J dx = -r` with a [`LinearSolver`].
//! 3. Updates the iterate, `x ← x + α dx`, where `α = 1` for a full step or
//!    is chosen by a backtracking [`LineSearch`].
//! 4. Re-evaluates the true residual and tests convergence against
//!    [`Config`].
//!
//! If the initial residual already meets the tolerance, the solve returns
//! immediately with zero iterations, so solving again from a converged
//! solution is a no-op.
//!
//! # Variants
//!
//! - [`Newton::solve`]: full Newton steps.
//! - [`Newton::solve_backtracking`]: steps damped by a backtracking line
//!   search. If no trial reduces the residual the solve ends with
//!   [`Status::LineSearchFailed`] and the rejected trials are returned in
//!   [`Solution::failed_search`].
//! - [`Newton::solve_inexact`]: the right-hand side of the step equation is
//!   perturbed element-wise by `1 + ε`, modelling an inexact linear solve.
//!   Convergence is still tested on the true residual, so a perturbed solve
//!   converges more slowly or not at all, but never to a wrong root.
//!
//! # Observer Events
//!
//! - [`Event::Started`]: once, after the initial residual is evaluated
//! - [`Event::Trial`]: for each backtracking trial
//! - [`Event::Stepped`]: after each completed iteration
//!
//! Observers can return [`Action::StopEarly`] to halt with the last accepted
//! iterate. The same per-iteration [`Record`]s are returned in
//! [`Solution::history`], or through [`Error::history`] when the solve fails.
//!
//! [`LinearSolver`]: tangent_core::LinearSolver

mod action;
mod config;
mod error;
mod event;
mod jacobian;
mod line_search;
mod perturbation;
mod run;
mod solution;
mod state;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use jacobian::{Analytic, JacobianSource};
pub use line_search::LineSearch;
pub use perturbation::{Exact, Fixed, Gaussian, Perturbation};
pub use solution::{Record, Solution, Status, Trial};

use tangent_core::{EquationProblem, LinearSolver, Observer};

/// A Newton solver built from a Jacobian source and a linear solver.
///
/// ```
/// use tangent_core::FnProblem;
/// use tangent_solvers::{
///     equation::newton::{Analytic, Config, Newton},
///     linear::Divide,
/// };
///
/// let problem = FnProblem::new(|x: &f64| x * x - 2.0).with_jacobian(|x: &f64| 2.0 * x);
/// let newton = Newton::new(Analytic, Divide);
///
/// let solution = newton
///     .solve_unobserved(&problem, 1.0, &Config::default())
///     .unwrap();
///
/// assert!(solution.converged());
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Newton<S, L> {
    jacobian: S,
    linear: L,
}

impl<S, L> Newton<S, L> {
    /// Creates a solver from a Jacobian source and a linear solver.
    pub fn new(jacobian: S, linear: L) -> Self {
        Self { jacobian, linear }
    }

    /// Returns the Jacobian source.
    pub fn jacobian_source(&self) -> &S {
        &self.jacobian
    }

    /// Returns the linear solver.
    pub fn linear_solver(&self) -> &L {
        &self.linear
    }

    /// Solves `problem` with full Newton steps.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem fails, the step equation is singular,
    /// shapes disagree, or a residual becomes non-finite.
    pub fn solve<P, Obs>(
        &self,
        problem: &P,
        x0: P::Iterate,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution<P::Iterate>, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
        Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
    {
        self.run(problem, x0, config, None, &mut Exact, observer)
    }

    /// Solves `problem` with full Newton steps and no observer.
    ///
    /// # Errors
    ///
    /// See [`Newton::solve`].
    pub fn solve_unobserved<P>(
        &self,
        problem: &P,
        x0: P::Iterate,
        config: &Config,
    ) -> Result<Solution<P::Iterate>, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
    {
        self.solve(problem, x0, config, ())
    }

    /// Solves `problem` with steps damped by a backtracking line search.
    ///
    /// Ends with [`Status::LineSearchFailed`] if no trial in an iteration
    /// reduces the residual.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem fails, the step equation is singular,
    /// or shapes disagree.
    pub fn solve_backtracking<P, Obs>(
        &self,
        problem: &P,
        x0: P::Iterate,
        config: &Config,
        line_search: &LineSearch,
        observer: Obs,
    ) -> Result<Solution<P::Iterate>, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
        Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
    {
        self.run(problem, x0, config, Some(line_search), &mut Exact, observer)
    }

    /// Solves `problem` with a perturbed step equation.
    ///
    /// Each element of the right-hand side `-r` is scaled by `1 + ε`, with a
    /// fresh `ε` drawn from `perturbation`. Steps are optionally damped by a
    /// line search.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem fails, the step equation is singular,
    /// shapes disagree, or (without a line search) a residual becomes
    /// non-finite.
    pub fn solve_inexact<P, Q, Obs>(
        &self,
        problem: &P,
        x0: P::Iterate,
        config: &Config,
        line_search: Option<&LineSearch>,
        perturbation: &mut Q,
        observer: Obs,
    ) -> Result<Solution<P::Iterate>, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
        Q: Perturbation + ?Sized,
        Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
    {
        self.run(problem, x0, config, line_search, perturbation, observer)
    }
}
