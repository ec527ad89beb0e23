//! Finite-difference differentiation.
//!
//! A [`Differentiator`] approximates `f'(x)` from function evaluations alone:
//!
//! ```text
//! f'(x) ≈ Σ w_i / h · f(x + o_i · h)
//! ```
//!
//! where `(o_i, w_i)` is the [`Stencil`] for the requested [`Order`].
//!
//! # Step size
//!
//! An order-`p` stencil has truncation error `O(h^p)` and round-off error
//! `O(eps / h)`. Balancing the two gives
//!
//! ```text
//! h = h_factor · eps^(1 / (p + 1))
//! ```
//!
//! with `eps = 1.022e-16`. The default `h_factor` of 1 is close to optimal;
//! much smaller factors are dominated by round-off and much larger ones by
//! truncation.
//!
//! # Jacobians
//!
//! Through [`Differentiable`], the same stencil approximates the Jacobian of a
//! vector residual one column at a time. A `Differentiator` can be passed to a
//! Newton solver in place of an analytic Jacobian.

mod error;
mod jacobian;
mod stencil;

#[cfg(test)]
mod tests;

use std::{convert::Infallible, fmt};

pub use error::Error;
pub use jacobian::Differentiable;
pub use stencil::{Order, Stencil};

/// Unit round-off used to choose the step size.
pub const MACHINE_EPSILON: f64 = 1.022e-16;

/// Approximates derivatives with a fixed finite-difference stencil.
///
/// The stencil and step size are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differentiator {
    order: Order,
    h_factor: f64,
    h: f64,
}

/// Error constants for a Newton step taken with a finite-difference derivative.
///
/// `quadratic` is `|f''| / (2 |f'|)`, the constant in the quadratic
/// convergence bound `|e_{k+1}| ≤ c1 |e_k|²`. `perturbation` is
/// `h^(p / (p + 1)) / |f'|`, which scales the floor set by the derivative
/// approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorConstants {
    pub quadratic: f64,
    pub perturbation: f64,
}

impl Default for Differentiator {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::from_order(Order::First, 1.0).unwrap()
    }
}

impl Differentiator {
    /// Creates a differentiator for an integer order `p`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOrder`] unless `order` is 1, 2, 3, 4, 5, 6, or 8,
    /// and [`Error::InvalidStepFactor`] unless `h_factor` is finite and positive.
    pub fn new(order: usize, h_factor: f64) -> Result<Self, Error> {
        Self::from_order(Order::try_from(order)?, h_factor)
    }

    /// Creates a differentiator for a validated [`Order`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStepFactor`] unless `h_factor` is finite and positive.
    pub fn from_order(order: Order, h_factor: f64) -> Result<Self, Error> {
        if !h_factor.is_finite() || h_factor <= 0.0 {
            return Err(Error::InvalidStepFactor { h_factor });
        }

        #[allow(clippy::cast_precision_loss)]
        let p = order.value() as f64;
        let h = h_factor * MACHINE_EPSILON.powf(1.0 / (p + 1.0));

        Ok(Self { order, h_factor, h })
    }

    /// Returns the stencil order.
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the step size `h`.
    #[must_use]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Returns the step factor the differentiator was built with.
    #[must_use]
    pub fn h_factor(&self) -> f64 {
        self.h_factor
    }

    /// Returns the scaled sample points as `(offset · h, weight / h)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let Stencil { offsets, weights } = self.order.stencil();
        offsets
            .iter()
            .zip(weights)
            .map(|(offset, weight)| (offset * self.h, weight / self.h))
    }

    /// Approximates `f'(x)`.
    pub fn deriv<F>(&self, mut f: F, x: f64) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let Ok(df) = self.try_deriv(|x| Ok::<_, Infallible>(f(x)), x);
        df
    }

    /// Approximates `f'(x)` for a fallible `f`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_deriv<F, E>(&self, mut f: F, x: f64) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.points()
            .try_fold(0.0, |df, (dx, w)| Ok(df + w * f(x + dx)?))
    }

    /// Approximates `f''(x)` with the symmetric three-point formula.
    pub fn deriv2<F>(&self, mut f: F, x: f64) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        let Ok(ddf) = self.try_deriv2(|x| Ok::<_, Infallible>(f(x)), x);
        ddf
    }

    /// Approximates `f''(x)` for a fallible `f`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_deriv2<F, E>(&self, mut f: F, x: f64) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let h = self.h;
        let forward = f(x + h)?;
        let backward = f(x - h)?;
        let center = f(x)?;
        Ok((forward + backward - 2.0 * center) / (h * h))
    }

    /// Estimates the Newton error constants at `x`.
    pub fn error_constants<F>(&self, mut f: F, x: f64) -> ErrorConstants
    where
        F: FnMut(f64) -> f64,
    {
        let df = self.deriv(&mut f, x).abs();
        let ddf = self.deriv2(&mut f, x).abs();

        #[allow(clippy::cast_precision_loss)]
        let p = self.order.value() as f64;

        ErrorConstants {
            quadratic: 0.5 * ddf / df,
            perturbation: self.h.powf(p / (1.0 + p)) / df,
        }
    }
}

impl fmt::Display for Differentiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "order {} finite difference (h = {:.5e})",
            self.order.value(),
            self.h
        )
    }
}
