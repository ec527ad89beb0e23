//! Reusable observers for the Tangent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`]: reports Newton iterations through the `log` facade
//! - [`Deadline`]: stops any solver once a wall-clock budget is spent
//!
//! [`Observer`]: tangent_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

mod deadline;
mod logging;
pub mod traits;

pub use deadline::Deadline;
pub use logging::LogObserver;
