use std::time::{Duration, Instant};

use tangent_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once a wall-clock deadline has passed.
///
/// Works with any solver whose action type implements [`CanStopEarly`].
/// The deadline is checked on every event, so a solve overruns it by at most
/// the time between two events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    deadline: Instant,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    /// Creates a deadline at a fixed instant.
    #[must_use]
    pub fn at(deadline: Instant) -> Self {
        Self { deadline }
    }

    /// Returns true if the deadline has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.expired().then(A::stop_early)
    }
}
