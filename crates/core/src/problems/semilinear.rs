use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::{EquationProblem, JacobianProblem};

/// The nonlinear part `g(u)` of a semilinear system `L u - g(u) = 0`.
///
/// Implementations supply the term itself and its contribution to the
/// Jacobian, `∂g/∂u`, which [`Semilinear`] subtracts from the linear operator.
pub trait NonlinearTerm {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates `g(u)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the term cannot be evaluated.
    fn value(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error>;

    /// Evaluates the Jacobian contribution `∂g/∂u`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the contribution cannot be evaluated.
    fn jacobian(&self, u: &DVector<f64>) -> Result<Contribution, Self::Error>;
}

/// The Jacobian of a [`NonlinearTerm`].
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    /// A pointwise term: `∂g/∂u = diag(g'(u))`.
    Diagonal(DVector<f64>),

    /// A coupled term with a full Jacobian matrix.
    Dense(DMatrix<f64>),
}

/// Errors from evaluating a [`Semilinear`] system.
#[derive(Debug, Error)]
pub enum SemilinearError<E> {
    /// The iterate or a term output does not match the operator size.
    #[error("expected a vector of length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The nonlinear term failed.
    #[error("nonlinear term failed")]
    Term(#[source] E),
}

/// A discretized system `F(u) = L u - g(u) = 0`.
///
/// `L` is a fixed square linear operator (for example a finite-difference
/// Laplacian) and `g` a nonlinear term. The Jacobian is `J = L - ∂g/∂u`, so
/// the Newton step solves `(L - ∂g/∂u) v = -F(u)`.
///
/// Bratu and nonlinear Poisson problems use a diagonal contribution;
/// Burgers-type advection terms use a dense one.
#[derive(Debug, Clone)]
pub struct Semilinear<T> {
    operator: DMatrix<f64>,
    term: T,
}

impl<T: NonlinearTerm> Semilinear<T> {
    /// Creates a semilinear system from a square operator and a term.
    ///
    /// # Errors
    ///
    /// Returns [`SemilinearError::DimensionMismatch`] if the operator is not square.
    pub fn new(operator: DMatrix<f64>, term: T) -> Result<Self, SemilinearError<T::Error>> {
        if !operator.is_square() {
            return Err(SemilinearError::DimensionMismatch {
                expected: operator.nrows(),
                found: operator.ncols(),
            });
        }
        Ok(Self { operator, term })
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.operator.nrows()
    }

    /// Returns the linear operator `L`.
    #[must_use]
    pub fn operator(&self) -> &DMatrix<f64> {
        &self.operator
    }

    /// Returns the nonlinear term.
    #[must_use]
    pub fn term(&self) -> &T {
        &self.term
    }

    fn check_len(&self, found: usize) -> Result<(), SemilinearError<T::Error>> {
        if found == self.dim() {
            Ok(())
        } else {
            Err(SemilinearError::DimensionMismatch {
                expected: self.dim(),
                found,
            })
        }
    }
}

impl<T: NonlinearTerm> EquationProblem for Semilinear<T> {
    type Iterate = DVector<f64>;
    type Error = SemilinearError<T::Error>;

    fn residual(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
        self.check_len(u.len())?;
        let g = self.term.value(u).map_err(SemilinearError::Term)?;
        self.check_len(g.len())?;
        Ok(&self.operator * u - g)
    }
}

impl<T: NonlinearTerm> JacobianProblem for Semilinear<T> {
    type Jacobian = DMatrix<f64>;

    fn jacobian(&self, u: &DVector<f64>) -> Result<DMatrix<f64>, Self::Error> {
        self.check_len(u.len())?;
        let mut jacobian = self.operator.clone();
        match self.term.jacobian(u).map_err(SemilinearError::Term)? {
            Contribution::Diagonal(diagonal) => {
                self.check_len(diagonal.len())?;
                for (i, value) in diagonal.iter().enumerate() {
                    jacobian[(i, i)] -= value;
                }
            }
            Contribution::Dense(matrix) => {
                self.check_len(matrix.nrows())?;
                self.check_len(matrix.ncols())?;
                jacobian -= matrix;
            }
        }
        Ok(jacobian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// g(u) = u², so ∂g/∂u = diag(2u).
    struct Square;

    impl NonlinearTerm for Square {
        type Error = Infallible;

        fn value(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
            Ok(u.map(|v| v * v))
        }

        fn jacobian(&self, u: &DVector<f64>) -> Result<Contribution, Self::Error> {
            Ok(Contribution::Diagonal(u * 2.0))
        }
    }

    /// g(u) = M u for a fixed matrix M.
    struct Coupled(DMatrix<f64>);

    impl NonlinearTerm for Coupled {
        type Error = Infallible;

        fn value(&self, u: &DVector<f64>) -> Result<DVector<f64>, Self::Error> {
            Ok(&self.0 * u)
        }

        fn jacobian(&self, _u: &DVector<f64>) -> Result<Contribution, Self::Error> {
            Ok(Contribution::Dense(self.0.clone()))
        }
    }

    #[test]
    fn residual_is_operator_minus_term() {
        let operator = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let system = Semilinear::new(operator, Square).unwrap();
        let u = DVector::from_vec(vec![1.0, 2.0]);

        let r = system.residual(&u).unwrap();

        // L u = [4, 7], g(u) = [1, 4]
        assert_relative_eq!(r[0], 3.0);
        assert_relative_eq!(r[1], 3.0);
    }

    #[test]
    fn diagonal_contribution_is_subtracted() {
        let operator = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let system = Semilinear::new(operator, Square).unwrap();
        let u = DVector::from_vec(vec![1.0, 2.0]);

        let j = system.jacobian(&u).unwrap();

        assert_eq!(j, DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, -1.0]));
    }

    #[test]
    fn dense_contribution_is_subtracted() {
        let operator = DMatrix::identity(2, 2);
        let coupling = DMatrix::from_row_slice(2, 2, &[0.5, 1.0, -1.0, 0.5]);
        let system = Semilinear::new(operator, Coupled(coupling)).unwrap();

        let j = system.jacobian(&DVector::zeros(2)).unwrap();

        assert_eq!(j, DMatrix::from_row_slice(2, 2, &[0.5, -1.0, 1.0, 0.5]));
    }

    #[test]
    fn rejects_non_square_operator() {
        let result = Semilinear::new(DMatrix::zeros(2, 3), Square);
        assert!(matches!(
            result,
            Err(SemilinearError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn dense_contribution_reports_wrong_column_count() {
        let coupling = DMatrix::zeros(3, 2);
        let system = Semilinear::new(DMatrix::identity(3, 3), Coupled(coupling)).unwrap();
        let result = system.jacobian(&DVector::zeros(3));
        assert!(matches!(
            result,
            Err(SemilinearError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_wrong_iterate_length() {
        let system = Semilinear::new(DMatrix::identity(3, 3), Square).unwrap();
        let result = system.residual(&DVector::zeros(2));
        assert!(matches!(
            result,
            Err(SemilinearError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }
}
