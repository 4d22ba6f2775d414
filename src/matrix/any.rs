//! Square matrices whose size is only known at runtime.
//!
//! Callers that receive nested arrays from a loosely typed source (a UI
//! grid, a config file) convert them with [`AnyMatrix::from_rows`] and
//! combine them with the checked operations below. A size mismatch is a
//! [`LinalgError::DimensionMismatch`], never a silent truncation or pad.

use super::{Matrix, Matrix2, Matrix3, Matrix4};
use crate::linalg::{LinalgError, SquareMatrix};
use crate::traits::{FloatScalar, Scalar};

/// A 2×2, 3×3, or 4×4 matrix.
///
/// ```
/// use vismath::{AnyMatrix, LinalgError};
///
/// let a = AnyMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = AnyMatrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
/// assert_eq!(a.dim(), 2);
/// assert_eq!(
///     a.mul(&b),
///     Err(LinalgError::DimensionMismatch { expected: (2, 2), got: (3, 3) })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyMatrix<T> {
    M2(Matrix2<T>),
    M3(Matrix3<T>),
    M4(Matrix4<T>),
}

macro_rules! checked_binop {
    ($name:ident, $op:tt, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self, rhs: &Self) -> Result<Self, LinalgError> {
            match (self, rhs) {
                (AnyMatrix::M2(a), AnyMatrix::M2(b)) => Ok(AnyMatrix::M2(*a $op *b)),
                (AnyMatrix::M3(a), AnyMatrix::M3(b)) => Ok(AnyMatrix::M3(*a $op *b)),
                (AnyMatrix::M4(a), AnyMatrix::M4(b)) => Ok(AnyMatrix::M4(*a $op *b)),
                _ => Err(LinalgError::DimensionMismatch {
                    expected: self.shape(),
                    got: rhs.shape(),
                }),
            }
        }
    };
}

impl<T: Scalar> AnyMatrix<T> {
    /// Build from nested rows. The input must be square with 2, 3, or 4
    /// rows, and every row must have that many elements.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        match rows.len() {
            2 => Matrix::from_rows_slice(rows).map(AnyMatrix::M2),
            3 => Matrix::from_rows_slice(rows).map(AnyMatrix::M3),
            4 => Matrix::from_rows_slice(rows).map(AnyMatrix::M4),
            n => {
                let cols = rows.first().map_or(0, |r| r.as_ref().len());
                let side = n.clamp(2, 4);
                Err(LinalgError::DimensionMismatch {
                    expected: (side, side),
                    got: (n, cols),
                })
            }
        }
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        match self {
            AnyMatrix::M2(_) => 2,
            AnyMatrix::M3(_) => 3,
            AnyMatrix::M4(_) => 4,
        }
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.dim(), self.dim())
    }

    /// Element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let n = self.dim();
        if row >= n || col >= n {
            return None;
        }
        Some(match self {
            AnyMatrix::M2(m) => m[(row, col)],
            AnyMatrix::M3(m) => m[(row, col)],
            AnyMatrix::M4(m) => m[(row, col)],
        })
    }

    checked_binop!(add, +, "Element-wise sum; both operands must have the same size.");
    checked_binop!(sub, -, "Element-wise difference; both operands must have the same size.");
    checked_binop!(mul, *, "Matrix product; both operands must have the same size.");

    pub fn transpose(&self) -> Self {
        match self {
            AnyMatrix::M2(m) => AnyMatrix::M2(m.transpose()),
            AnyMatrix::M3(m) => AnyMatrix::M3(m.transpose()),
            AnyMatrix::M4(m) => AnyMatrix::M4(m.transpose()),
        }
    }
}

impl<T: FloatScalar> AnyMatrix<T> {
    pub fn det(&self) -> T {
        match self {
            AnyMatrix::M2(m) => m.det(),
            AnyMatrix::M3(m) => m.det(),
            AnyMatrix::M4(m) => m.det(),
        }
    }

    /// Inverse, or [`LinalgError::Singular`].
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        Ok(match self {
            AnyMatrix::M2(m) => AnyMatrix::M2(m.inverse()?),
            AnyMatrix::M3(m) => AnyMatrix::M3(m.inverse()?),
            AnyMatrix::M4(m) => AnyMatrix::M4(m.inverse()?),
        })
    }

    pub fn rank(&self) -> usize {
        match self {
            AnyMatrix::M2(m) => m.rank(),
            AnyMatrix::M3(m) => m.rank(),
            AnyMatrix::M4(m) => m.rank(),
        }
    }
}

impl<T> From<Matrix2<T>> for AnyMatrix<T> {
    fn from(m: Matrix2<T>) -> Self {
        AnyMatrix::M2(m)
    }
}

impl<T> From<Matrix3<T>> for AnyMatrix<T> {
    fn from(m: Matrix3<T>) -> Self {
        AnyMatrix::M3(m)
    }
}

impl<T> From<Matrix4<T>> for AnyMatrix<T> {
    fn from(m: Matrix4<T>) -> Self {
        AnyMatrix::M4(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_picks_size() {
        let rows: &[&[f64]] = &[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 10.0]];
        let m = AnyMatrix::from_rows(rows).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.get(2, 2), Some(10.0));
        assert_eq!(m.get(3, 0), None);
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows: &[&[f64]] = &[&[1.0, 2.0], &[3.0]];
        assert_eq!(
            AnyMatrix::from_rows(rows),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 2),
                got: (2, 1)
            })
        );
    }

    #[test]
    fn unsupported_sizes_rejected() {
        let one: &[&[f64]] = &[&[1.0]];
        assert_eq!(
            AnyMatrix::from_rows(one),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 2),
                got: (1, 1)
            })
        );

        let five = [[0.0_f64; 5]; 5];
        assert_eq!(
            AnyMatrix::from_rows(&five),
            Err(LinalgError::DimensionMismatch {
                expected: (4, 4),
                got: (5, 5)
            })
        );

        let empty: &[[f64; 2]] = &[];
        assert!(AnyMatrix::from_rows(empty).is_err());
    }

    #[test]
    fn same_size_ops_match_typed_ops() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::new([[0.5, -1.0], [2.0, 0.0]]);
        let (aa, bb) = (AnyMatrix::from(a), AnyMatrix::from(b));
        assert_eq!(aa.add(&bb), Ok(AnyMatrix::M2(a + b)));
        assert_eq!(aa.sub(&bb), Ok(AnyMatrix::M2(a - b)));
        assert_eq!(aa.mul(&bb), Ok(AnyMatrix::M2(a * b)));
        assert_eq!(aa.transpose(), AnyMatrix::M2(a.transpose()));
    }

    #[test]
    fn mismatched_ops_fail_fast() {
        let a = AnyMatrix::from(Matrix3::<f64>::eye());
        let b = AnyMatrix::from(Matrix4::<f64>::eye());
        let err = LinalgError::DimensionMismatch {
            expected: (3, 3),
            got: (4, 4),
        };
        assert_eq!(a.add(&b), Err(err));
        assert_eq!(a.sub(&b), Err(err));
        assert_eq!(a.mul(&b), Err(err));
    }

    #[test]
    fn numeric_dispatch() {
        let m = AnyMatrix::from(Matrix::new([[2.0_f64, 0.0], [0.0, 4.0]]));
        assert_eq!(m.det(), 8.0);
        assert_eq!(m.rank(), 2);
        assert_eq!(
            m.inverse(),
            Ok(AnyMatrix::M2(Matrix::new([[0.5, 0.0], [0.0, 0.25]])))
        );

        let singular = AnyMatrix::from(Matrix3::<f64>::zeros());
        assert_eq!(singular.inverse(), Err(LinalgError::Singular));
        assert_eq!(singular.rank(), 0);
    }
}
