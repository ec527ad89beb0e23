use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use super::ConfigError;

/// A source of relative perturbations for inexact Newton steps.
///
/// Before each step solve, every element of the right-hand side `-r` is
/// scaled by `1 + ε` with `ε` drawn from the source. This models an inexact
/// linear solve whose error is proportional to the residual.
///
/// Closures `FnMut() -> f64` are perturbation sources.
pub trait Perturbation {
    /// Draws the next relative perturbation `ε`.
    fn sample(&mut self) -> f64;
}

/// No perturbation: the step equation is solved as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

/// The same relative perturbation for every element of every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub f64);

/// Zero-mean normal perturbations with standard deviation `sigma`.
///
/// Seeded, so a given `(sigma, seed)` pair always produces the same sequence.
#[derive(Debug, Clone)]
pub struct Gaussian {
    sigma: f64,
    rng: StdRng,
    normal: Normal<f64>,
}

impl Gaussian {
    /// Creates a seeded normal perturbation source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Sigma`] if `sigma` is negative or non-finite.
    pub fn new(sigma: f64, seed: u64) -> Result<Self, ConfigError> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(ConfigError::Sigma);
        }
        let normal = Normal::new(0.0, sigma).map_err(|_| ConfigError::Sigma)?;

        Ok(Self {
            sigma,
            rng: StdRng::seed_from_u64(seed),
            normal,
        })
    }

    /// Returns the standard deviation.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Perturbation for Exact {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

impl Perturbation for Fixed {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

impl Perturbation for Gaussian {
    fn sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }
}

impl<F> Perturbation for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}
