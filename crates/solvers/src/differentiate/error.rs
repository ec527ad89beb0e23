use thiserror::Error;

/// Errors that can occur when constructing a [`Differentiator`](super::Differentiator).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("unsupported finite-difference order {order} (expected 1, 2, 3, 4, 5, 6, or 8)")]
    UnsupportedOrder { order: usize },

    #[error("step factor must be finite and positive, got {h_factor}")]
    InvalidStepFactor { h_factor: f64 },
}
