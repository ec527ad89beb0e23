mod equation;
mod function;
mod semilinear;

pub use equation::{EquationProblem, JacobianProblem};
pub use function::FnProblem;
pub use semilinear::{Contribution, NonlinearTerm, Semilinear, SemilinearError};
