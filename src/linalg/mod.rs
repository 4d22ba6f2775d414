//! Determinants, inverses, rank, and eigen decomposition for the fixed
//! sizes the kernel supports.

mod cubic;
pub(crate) mod eigen;
mod rank;
pub(crate) mod square;

pub use cubic::CharacteristicCubic;
pub use eigen::{Eigen, Eigen2, Eigen3, EigenPair, EigenPair2, EigenPair3, EigenSettings, Eigenvalue};
pub use square::{Inversion, SquareMatrix};

/// Errors from kernel operations.
///
/// Every degenerate case is reported as a value; no kernel operation
/// panics on numeric input.
///
/// ```
/// use vismath::{Matrix, LinalgError, SquareMatrix, Vector2};
///
/// let singular = Matrix::new([[2.0_f64, 4.0], [1.0, 2.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let zero = Vector2::new(0.0_f64, 0.0);
/// assert_eq!(zero.normalize().unwrap_err(), LinalgError::DivisionByZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinalgError {
    /// A vector length, projection extent, or homogeneous `w` was zero.
    DivisionByZero,
    /// Matrix determinant is zero; no inverse exists.
    Singular,
    /// Runtime-sized input did not have the required shape.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// Iterative algorithm did not converge within the iteration budget.
    NonConvergence,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DivisionByZero => write!(f, "division by zero"),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            LinalgError::NonConvergence => write!(f, "iterative algorithm did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
