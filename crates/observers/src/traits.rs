//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! - [`HasResidual`]: events that carry a residual norm
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use tangent_core::Observer;
//! use tangent_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use tangent_solvers::equation::newton;

/// An event that carries a residual norm.
pub trait HasResidual {
    /// Returns the residual norm for this event.
    ///
    /// Returns `f64::NAN` when the event carries no residual.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<X> HasResidual for newton::Event<'_, X> {
    fn residual(&self) -> f64 {
        self.residual_norm().unwrap_or(f64::NAN)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
