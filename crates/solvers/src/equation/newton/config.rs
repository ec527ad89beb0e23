use thiserror::Error;

/// Convergence criteria and iteration budget for a Newton solve.
///
/// A solve converges when the residual satisfies
///
/// ```text
/// ‖r‖ ≤ rel_tol · ‖r_init‖ + abs_tol
/// ```
///
/// or, if a step tolerance is set, when an undamped Newton step satisfies
/// `‖dx‖ < step_tol`. Steps shortened by a line search never meet the step
/// criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    rel_tol: f64,
    abs_tol: f64,
    step_tol: Option<f64>,
}

/// Errors that can occur when validating a Newton config or line search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("step_tol must be finite and non-negative")]
    StepTol,

    #[error("max_backtracks must be at least 1")]
    MaxBacktracks,

    #[error("divisor must be finite and greater than 1")]
    Divisor,

    #[error("safety factor must be in (0, 1]")]
    Safety,

    #[error("perturbation scale must be finite and non-negative")]
    Sigma,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 1e-14, 1e-14).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and no step criterion.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }

        Ok(Self {
            max_iters,
            rel_tol,
            abs_tol,
            step_tol: None,
        })
    }

    /// Adds a step-size convergence criterion.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_tol` is negative or non-finite.
    pub fn with_step_tol(self, step_tol: f64) -> Result<Self, ConfigError> {
        if !step_tol.is_finite() || step_tol < 0.0 {
            return Err(ConfigError::StepTol);
        }

        Ok(Self {
            step_tol: Some(step_tol),
            ..self
        })
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative residual tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the step tolerance, if one is set.
    #[must_use]
    pub fn step_tol(&self) -> Option<f64> {
        self.step_tol
    }

    /// Returns true if `residual_norm` meets the residual criterion.
    pub(super) fn residual_converged(&self, residual_norm: f64, initial_norm: f64) -> bool {
        residual_norm <= self.rel_tol * initial_norm + self.abs_tol
    }

    /// Returns true if the Newton step norm meets the step criterion, when one is set.
    pub(super) fn step_converged(&self, newton_step_norm: f64) -> bool {
        self.step_tol.is_some_and(|tol| newton_step_norm < tol)
    }
}
