pub mod aliases;
pub mod any;
mod apply;
mod norm;
mod ops;
#[cfg(feature = "serde")]
mod serde_impl;
mod square;
mod util;

use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

/// Fixed-size matrix with `M` rows and `N` columns.
///
/// Storage is row-major: `data[row][col]`.
/// Stack-allocated, `Copy`, no-std compatible. Every operation returns a new
/// matrix; inputs are never mutated.
///
/// # Examples
///
/// ```
/// use vismath::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; N]; M],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (M arrays of N elements each).
    #[inline]
    pub const fn new(rows: [[T; N]; M]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }

    /// Borrow the row-major storage.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; N]; M] {
        &self.data
    }

    /// Consume the matrix, returning its rows.
    #[inline]
    pub fn into_rows(self) -> [[T; N]; M] {
        self.data
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); N]; M],
        }
    }

    /// Build a matrix from loosely-shaped nested rows, such as a `Vec<Vec<T>>`
    /// decoded from a UI payload.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if there are not exactly
    /// `M` rows of exactly `N` elements; nothing is truncated or padded.
    ///
    /// ```
    /// use vismath::{Matrix2, LinalgError};
    ///
    /// let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// let m = Matrix2::from_rows_slice(&rows).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    ///
    /// let ragged = vec![vec![1.0, 2.0], vec![3.0]];
    /// assert!(matches!(
    ///     Matrix2::from_rows_slice(&ragged),
    ///     Err(LinalgError::DimensionMismatch { .. })
    /// ));
    /// ```
    pub fn from_rows_slice<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        if rows.len() != M {
            let got_cols = rows.first().map_or(0, |r| r.as_ref().len());
            return Err(LinalgError::DimensionMismatch {
                expected: (M, N),
                got: (rows.len(), got_cols),
            });
        }
        let mut out = Self::zeros();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != N {
                return Err(LinalgError::DimensionMismatch {
                    expected: (M, N),
                    got: (M, row.len()),
                });
            }
            out.data[i].copy_from_slice(row);
        }
        Ok(out)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const M: usize, const N: usize> Default for Matrix<T, M, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    #[inline]
    fn from(rows: [[T; N]; M]) -> Self {
        Self::new(rows)
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<T, M, N>> for [[T; N]; M] {
    #[inline]
    fn from(m: Matrix<T, M, N>) -> Self {
        m.data
    }
}

// Index by (row, col) tuple
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

pub use aliases::*;
