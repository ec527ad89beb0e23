use super::ConfigError;

/// Backtracking line search settings.
///
/// Starting from the full step `α = 1`, each trial evaluates
/// `x1 = x0 + α dx` and the reduction `ρ = safety · ‖r(x1)‖ / ‖r(x0)‖`.
/// The first trial with `ρ < 1` is accepted. Otherwise `α` is divided by
/// `divisor` and the next trial is taken, up to `max_backtracks` trials.
///
/// Trials with a non-finite residual are rejected like any other trial that
/// fails to reduce the residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    max_backtracks: usize,
    divisor: f64,
    safety: f64,
}

impl Default for LineSearch {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(20, 2.0, 1.0).unwrap()
    }
}

impl LineSearch {
    /// Creates validated line search settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_backtracks` is zero, `divisor` is not a finite
    /// value greater than 1, or `safety` is outside `(0, 1]`.
    pub fn new(max_backtracks: usize, divisor: f64, safety: f64) -> Result<Self, ConfigError> {
        if max_backtracks == 0 {
            return Err(ConfigError::MaxBacktracks);
        }
        if !divisor.is_finite() || divisor <= 1.0 {
            return Err(ConfigError::Divisor);
        }
        if !(safety > 0.0 && safety <= 1.0) {
            return Err(ConfigError::Safety);
        }

        Ok(Self {
            max_backtracks,
            divisor,
            safety,
        })
    }

    /// Returns the maximum number of trials per Newton iteration.
    #[must_use]
    pub fn max_backtracks(&self) -> usize {
        self.max_backtracks
    }

    /// Returns the factor `α` is divided by after a rejected trial.
    #[must_use]
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Returns the safety factor applied to trial residual norms.
    #[must_use]
    pub fn safety(&self) -> f64 {
        self.safety
    }

    /// Returns the reduction ratio for a trial.
    pub(super) fn reduction(&self, trial_norm: f64, base_norm: f64) -> f64 {
        self.safety * trial_norm / base_norm
    }
}
