use tangent_core::{EquationProblem, Iterate, LinearSolver, Observer};

use super::{
    Action, Config, Error, Event, JacobianSource, LineSearch, Newton, Perturbation, Solution,
    Status, Trial,
    state::{State, Step},
};

/// Outcome of one backtracking line search.
enum Search<X> {
    Accepted(Step<X>),
    Failed(Vec<Trial>),
    Stopped,
}

impl<S, L> Newton<S, L> {
    /// Runs the shared Newton loop.
    pub(super) fn run<P, Q, Obs>(
        &self,
        problem: &P,
        x0: P::Iterate,
        config: &Config,
        line_search: Option<&LineSearch>,
        perturbation: &mut Q,
        mut observer: Obs,
    ) -> Result<Solution<P::Iterate>, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
        Q: Perturbation + ?Sized,
        Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
    {
        let (residual, residual_norm) = evaluate(problem, &x0)?;
        if !residual_norm.is_finite() {
            return Err(Error::non_finite(0));
        }
        let mut state = State::new(x0, residual, residual_norm, config.max_iters());

        match self.iterate(
            problem,
            &mut state,
            config,
            line_search,
            perturbation,
            &mut observer,
        ) {
            Ok(status) => Ok(state.into_solution(status)),
            Err(err) => Err(err.with_history(state.history)),
        }
    }

    /// Iterates from the initial state until a terminal status or an error.
    fn iterate<P, Q, Obs>(
        &self,
        problem: &P,
        state: &mut State<P::Iterate>,
        config: &Config,
        line_search: Option<&LineSearch>,
        perturbation: &mut Q,
        observer: &mut Obs,
    ) -> Result<Status, Error>
    where
        P: EquationProblem,
        S: JacobianSource<P>,
        L: LinearSolver<S::Jacobian, P::Iterate>,
        Q: Perturbation + ?Sized,
        Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
    {
        let event = Event::Started {
            x: &state.x,
            residual_norm: state.residual_norm,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Status::StoppedByObserver);
        }

        if config.residual_converged(state.residual_norm, state.initial_residual_norm) {
            return Ok(Status::Converged);
        }

        for iter in 1..=config.max_iters() {
            let jacobian = self
                .jacobian
                .jacobian(problem, &state.x, &state.residual)
                .map_err(Error::problem)?;

            // Step equation right-hand side, -r scaled by (1 + ε) per element.
            let rhs = state
                .residual
                .map_elements(|r| -r * (1.0 + perturbation.sample()));
            let realized = rhs.axpy(1.0, &state.residual).norm() / state.residual_norm;

            let direction = self
                .linear
                .solve(&jacobian, &rhs)
                .map_err(|err| Error::linear(err, iter))?;
            if direction.dim() != state.x.dim() {
                return Err(Error::dimension_mismatch(state.x.dim(), direction.dim()));
            }

            let step = match line_search {
                None => full_step(problem, state, &direction, iter)?,
                Some(line_search) => {
                    match backtrack(problem, state, &direction, line_search, iter, observer)? {
                        Search::Accepted(step) => step,
                        Search::Failed(trials) => {
                            state.failed_search = trials;
                            return Ok(Status::LineSearchFailed);
                        }
                        Search::Stopped => return Ok(Status::StoppedByObserver),
                    }
                }
            };

            // The step criterion only applies to undamped steps.
            let full = step.alpha == 1.0;
            let newton_step_norm = direction.norm();
            let record = state.advance(iter, step, newton_step_norm, realized);

            let converged = config
                .residual_converged(record.residual_norm, state.initial_residual_norm)
                || (full && config.step_converged(newton_step_norm));

            let event = Event::Stepped {
                x: &state.x,
                record: &record,
            };
            let action = observer.observe(&event);

            if converged {
                return Ok(Status::Converged);
            }
            if let Some(Action::StopEarly) = action {
                return Ok(Status::StoppedByObserver);
            }
        }

        Ok(Status::MaxIters)
    }
}

/// Evaluates the residual and its norm, checking its shape against `x`.
fn evaluate<P: EquationProblem>(problem: &P, x: &P::Iterate) -> Result<(P::Iterate, f64), Error> {
    let residual = problem.residual(x).map_err(Error::problem)?;
    if residual.dim() != x.dim() {
        return Err(Error::dimension_mismatch(x.dim(), residual.dim()));
    }
    let norm = residual.norm();
    Ok((residual, norm))
}

/// Takes the full step `x + dx`.
fn full_step<P: EquationProblem>(
    problem: &P,
    state: &State<P::Iterate>,
    direction: &P::Iterate,
    iter: usize,
) -> Result<Step<P::Iterate>, Error> {
    let x = state.x.axpy(1.0, direction);
    let (residual, residual_norm) = evaluate(problem, &x)?;
    if !residual_norm.is_finite() {
        return Err(Error::non_finite(iter));
    }

    Ok(Step {
        x,
        residual,
        residual_norm,
        alpha: 1.0,
        backtracks: 0,
    })
}

/// Shrinks the step until the residual norm decreases.
fn backtrack<P, Obs>(
    problem: &P,
    state: &State<P::Iterate>,
    direction: &P::Iterate,
    line_search: &LineSearch,
    iter: usize,
    observer: &mut Obs,
) -> Result<Search<P::Iterate>, Error>
where
    P: EquationProblem,
    Obs: for<'a> Observer<Event<'a, P::Iterate>, Action>,
{
    let mut alpha = 1.0;
    let mut rejected = Vec::with_capacity(line_search.max_backtracks());

    for trial in 0..line_search.max_backtracks() {
        let x = state.x.axpy(alpha, direction);
        let (residual, residual_norm) = evaluate(problem, &x)?;

        // NaN compares false, so non-finite trials are rejected.
        let reduction = line_search.reduction(residual_norm, state.residual_norm);
        let accepted = reduction < 1.0;

        let event = Event::Trial {
            iter,
            trial,
            alpha,
            reduction,
            accepted,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Search::Stopped);
        }

        if accepted {
            return Ok(Search::Accepted(Step {
                x,
                residual,
                residual_norm,
                alpha,
                backtracks: trial,
            }));
        }

        rejected.push(Trial {
            iter,
            alpha,
            residual_norm,
            reduction,
        });
        alpha /= line_search.divisor();
    }

    Ok(Search::Failed(rejected))
}
