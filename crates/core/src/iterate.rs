use nalgebra::DVector;

/// A type a Newton iteration can solve for.
///
/// Implementing this trait lets the generic solvers treat a scalar unknown
/// and a vector of unknowns the same way: both have a size, a Euclidean norm,
/// and can be stepped along a direction by `x + alpha * direction`.
///
/// Residuals share the iterate's type, so the same operations are used to
/// measure residual norms and to perturb right-hand sides element-wise.
pub trait Iterate: Clone {
    /// Returns the number of unknowns.
    fn dim(&self) -> usize;

    /// Returns the Euclidean norm.
    fn norm(&self) -> f64;

    /// Returns `self + alpha * direction`.
    #[must_use]
    fn axpy(&self, alpha: f64, direction: &Self) -> Self;

    /// Returns a copy with `f` applied to every element.
    #[must_use]
    fn map_elements(&self, f: impl FnMut(f64) -> f64) -> Self;
}

impl Iterate for f64 {
    fn dim(&self) -> usize {
        1
    }

    fn norm(&self) -> f64 {
        self.abs()
    }

    fn axpy(&self, alpha: f64, direction: &Self) -> Self {
        self + alpha * direction
    }

    fn map_elements(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        f(*self)
    }
}

impl Iterate for DVector<f64> {
    fn dim(&self) -> usize {
        self.len()
    }

    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn axpy(&self, alpha: f64, direction: &Self) -> Self {
        self + direction * alpha
    }

    fn map_elements(&self, f: impl FnMut(f64) -> f64) -> Self {
        self.map(f)
    }
}
