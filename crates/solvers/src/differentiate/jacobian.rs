use nalgebra::{DMatrix, DVector};
use tangent_core::Iterate;

use super::Differentiator;

/// An iterate whose residual Jacobian can be approximated by finite differences.
///
/// Scalars produce a scalar derivative. Vectors produce a dense matrix built
/// one column at a time by perturbing a single unknown.
pub trait Differentiable: Iterate {
    type Jacobian;

    /// Approximates the Jacobian of `f` at `x`.
    ///
    /// `fx` must equal `f(x)`. It is reused for zero stencil offsets instead
    /// of calling `f` again.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    fn jacobian<F, E>(
        differentiator: &Differentiator,
        f: F,
        x: &Self,
        fx: &Self,
    ) -> Result<Self::Jacobian, E>
    where
        F: FnMut(&Self) -> Result<Self, E>;
}

impl Differentiable for f64 {
    type Jacobian = f64;

    fn jacobian<F, E>(
        differentiator: &Differentiator,
        mut f: F,
        x: &f64,
        fx: &f64,
    ) -> Result<f64, E>
    where
        F: FnMut(&f64) -> Result<f64, E>,
    {
        differentiator.points().try_fold(0.0, |df, (dx, w)| {
            let value = if dx == 0.0 { *fx } else { f(&(x + dx))? };
            Ok(df + w * value)
        })
    }
}

impl Differentiable for DVector<f64> {
    type Jacobian = DMatrix<f64>;

    fn jacobian<F, E>(
        differentiator: &Differentiator,
        mut f: F,
        x: &DVector<f64>,
        fx: &DVector<f64>,
    ) -> Result<DMatrix<f64>, E>
    where
        F: FnMut(&DVector<f64>) -> Result<DVector<f64>, E>,
    {
        let mut jacobian = DMatrix::zeros(fx.len(), x.len());
        let mut shifted = x.clone();

        for j in 0..x.len() {
            let mut column = DVector::zeros(fx.len());
            for (dx, w) in differentiator.points() {
                if dx == 0.0 {
                    column += fx * w;
                } else {
                    shifted[j] = x[j] + dx;
                    column += f(&shifted)? * w;
                }
            }
            shifted[j] = x[j];
            jacobian.set_column(j, &column);
        }

        Ok(jacobian)
    }
}

impl Differentiator {
    /// Approximates the Jacobian of `f` at `x`, given `fx = f(x)`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn jacobian<X, F, E>(&self, f: F, x: &X, fx: &X) -> Result<X::Jacobian, E>
    where
        X: Differentiable,
        F: FnMut(&X) -> Result<X, E>,
    {
        X::jacobian(self, f, x, fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, convert::Infallible};

    use approx::assert_relative_eq;

    fn residual(x: &DVector<f64>) -> Result<DVector<f64>, Infallible> {
        Ok(DVector::from_vec(vec![
            x[0] * x[0] + x[1] - 3.0,
            x[0].sin() * x[1],
        ]))
    }

    #[test]
    fn vector_jacobian_matches_analytic() {
        let x = DVector::from_vec(vec![0.7, -1.3]);
        let Ok(fx) = residual(&x);

        for order in [2, 4, 8] {
            let d = Differentiator::new(order, 1.0).unwrap();
            let Ok(j) = d.jacobian(residual, &x, &fx);

            assert_eq!(j.shape(), (2, 2));
            assert_relative_eq!(j[(0, 0)], 2.0 * 0.7, epsilon = 1e-8);
            assert_relative_eq!(j[(0, 1)], 1.0, epsilon = 1e-8);
            assert_relative_eq!(j[(1, 0)], 0.7_f64.cos() * -1.3, epsilon = 1e-8);
            assert_relative_eq!(j[(1, 1)], 0.7_f64.sin(), epsilon = 1e-8);
        }
    }

    #[test]
    fn scalar_jacobian_matches_deriv() {
        let d = Differentiator::new(3, 1.0).unwrap();
        let f = |x: f64| x.exp() - 2.0 * x;
        let x = 0.4;

        let Ok(df) = d.jacobian(|x: &f64| Ok::<_, Infallible>(f(*x)), &x, &f(x));

        assert_relative_eq!(df, d.deriv(f, x), epsilon = 1e-12);
        assert_relative_eq!(df, 0.4_f64.exp() - 2.0, epsilon = 1e-9);
    }

    #[test]
    fn reuses_base_residual_for_zero_offsets() {
        let calls = Cell::new(0);
        let counted = |x: &DVector<f64>| {
            calls.set(calls.get() + 1);
            residual(x)
        };
        let x = DVector::from_vec(vec![1.0, 2.0]);
        let Ok(fx) = residual(&x);

        // Forward difference: one extra call per column.
        let Ok(_) = Differentiator::new(1, 1.0).unwrap().jacobian(counted, &x, &fx);
        assert_eq!(calls.get(), 2);

        // Centered fourth order: four calls per column.
        calls.set(0);
        let Ok(_) = Differentiator::new(4, 1.0).unwrap().jacobian(counted, &x, &fx);
        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn propagates_residual_errors() {
        let d = Differentiator::default();
        let x = DVector::from_vec(vec![1.0]);
        let result = d.jacobian(|_: &DVector<f64>| Err("boom"), &x, &x);
        assert_eq!(result, Err("boom"));
    }
}
