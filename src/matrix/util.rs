use core::fmt::{self, Write as _};

use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element, in
    /// row-major order.
    ///
    /// ```
    /// use vismath::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); N]; M];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self { data }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use vismath::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U: Copy + Default>(&self, f: impl Fn(T) -> U) -> Matrix<U, M, N>
    where
        T: Copy,
    {
        let mut data = [[U::default(); N]; M];
        for (out, row) in data.iter_mut().zip(self.data.iter()) {
            for (o, &x) in out.iter_mut().zip(row.iter()) {
                *o = f(x);
            }
        }
        Matrix { data }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Copy of row `i`.
    ///
    /// ```
    /// use vismath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.row(0), [1.0, 2.0]);
    /// ```
    #[inline]
    pub fn row(&self, i: usize) -> [T; N] {
        self.data[i]
    }

    /// Copy of column `j`.
    ///
    /// ```
    /// use vismath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.col(1), [2.0, 4.0]);
    /// ```
    pub fn col(&self, j: usize) -> [T; M] {
        let mut out = [self.data[0][j]; M];
        for (i, x) in out.iter_mut().enumerate() {
            *x = self.data[i][j];
        }
        out
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

// ── Tolerance comparison ────────────────────────────────────────────

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `true` when every element differs from `other` by at most `tol`.
    ///
    /// ```
    /// use vismath::Matrix;
    /// let a = Matrix::new([[1.0, 0.0], [0.0, 1.0]]);
    /// let b = Matrix::new([[1.0 + 1e-9, 0.0], [0.0, 1.0]]);
    /// assert!(a.abs_diff_eq(&b, 1e-6));
    /// assert!(!a.abs_diff_eq(&b, 1e-12));
    /// ```
    pub fn abs_diff_eq(&self, other: &Self, tol: T) -> bool {
        for i in 0..M {
            for j in 0..N {
                if (self[(i, j)] - other[(i, j)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// `true` when every element is finite (no `NaN` or infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `true` when every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_zero())
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Max width per column for alignment
        let mut widths = [0usize; N];
        for row in &self.data {
            for (j, x) in row.iter().enumerate() {
                let w = WriteCounting::count(|wc| write!(wc, "{}", x));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for (i, row) in self.data.iter().enumerate() {
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < M {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn() {
        let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m, Matrix::eye());

        let r: Matrix<usize, 2, 3> = Matrix::from_fn(|i, j| i * 10 + j);
        assert_eq!(r[(1, 2)], 12);
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[(0, 0)], 1);
        assert_eq!(rounded[(1, 1)], 4);
    }

    #[test]
    fn row_col_access() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(m.row(1), [4.0, 5.0, 6.0]);
        assert_eq!(m.col(2), [3.0, 6.0]);
    }

    #[test]
    fn swap_rows() {
        let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        m.swap_rows(0, 1);
        assert_eq!(m, Matrix::new([[3.0, 4.0], [1.0, 2.0]]));
    }

    #[test]
    fn zero_and_finite() {
        let z: Matrix<f64, 2, 2> = Matrix::zeros();
        assert!(z.is_zero());
        assert!(z.is_finite());
        let nan = Matrix::new([[f64::NAN, 0.0], [0.0, 0.0]]);
        assert!(!nan.is_finite());
    }

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::new([[1, 200], [30, 4]]);
        let s = format!("{}", m);
        assert_eq!(s, "│ 1  200│\n│30    4│");
    }
}
