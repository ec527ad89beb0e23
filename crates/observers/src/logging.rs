use log::Level;
use tangent_core::Observer;
use tangent_solvers::equation::newton::{Action, Event};

/// Reports Newton progress through the [`log`] facade.
///
/// The start of the solve and each completed iteration are logged at the
/// configured level. Backtracking trials are logged at `Debug`. The observer
/// never requests an action.
///
/// Combine it with another observer by passing a pair, for example
/// `(LogObserver::default(), deadline)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl LogObserver {
    /// Creates an observer that logs iterations at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level iterations are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl<X> Observer<Event<'_, X>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<'_, X>) -> Option<Action> {
        match event {
            Event::Started { residual_norm, .. } => {
                log::log!(self.level, "newton start: |r| = {residual_norm:.5e}");
            }
            Event::Trial {
                iter,
                trial,
                alpha,
                reduction,
                accepted,
            } => {
                log::debug!(
                    "newton iter {iter} back {trial}: alpha = {alpha:.5e}, reduction = {reduction:.5e}{}",
                    if *accepted { " (accepted)" } else { "" }
                );
            }
            Event::Stepped { record, .. } => {
                log::log!(
                    self.level,
                    "newton iter {}: |r| = {:.5e}, rel |r| = {:.5e}, |dx| = {:.5e}, alpha = {:.5e}, |dr|/|r| = {:.5e}",
                    record.iter,
                    record.residual_norm,
                    record.relative_residual,
                    record.step_norm,
                    record.alpha,
                    record.perturbation,
                );
            }
        }
        None
    }
}
