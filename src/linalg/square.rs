use crate::linalg::LinalgError;
use crate::matrix::{Matrix2, Matrix3, Matrix4};
use crate::traits::FloatScalar;
use crate::Matrix;

/// An inverse together with the determinant that decided it.
///
/// `inverse` is `None` only when the determinant is exactly zero or not
/// finite, i.e. when the division is impossible. Nearly-singular matrices
/// still get their best-effort inverse; callers that want a display
/// threshold apply it through [`Inversion::is_near_singular`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inversion<T, S> {
    /// Raw determinant of the input.
    pub det: T,
    /// `adjugate / det`, when that division is possible.
    pub inverse: Option<S>,
}

impl<T: FloatScalar, S> Inversion<T, S> {
    /// `true` when `|det| < tol`.
    ///
    /// ```
    /// use vismath::{Matrix, SquareMatrix};
    ///
    /// let inv = Matrix::new([[1.0_f64, 0.0], [0.0, 1e-5]]).invert();
    /// assert!(inv.inverse.is_some());
    /// assert!(inv.is_near_singular(1e-4));
    /// ```
    #[inline]
    pub fn is_near_singular(&self, tol: T) -> bool {
        self.det.abs() < tol
    }

    /// Convert into a `Result`, dropping the determinant.
    pub fn into_result(self) -> Result<S, LinalgError> {
        self.inverse.ok_or(LinalgError::Singular)
    }
}

/// Closed-form determinant, cofactors, and inverse of the supported square
/// sizes (2×2, 3×3, 4×4).
///
/// The determinant uses cofactor expansion along the first row; the inverse
/// is `adjugate / det`.
///
/// ```
/// use vismath::{Matrix, SquareMatrix};
///
/// let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
/// assert_eq!(m.det(), 10.0);
///
/// let inv = m.inverse().unwrap();
/// assert!((m * inv).abs_diff_eq(&Matrix::eye(), 1e-12));
/// ```
pub trait SquareMatrix<T: FloatScalar>: Copy + Sized {
    /// Number of rows (and columns).
    const DIM: usize;

    /// Determinant.
    fn det(&self) -> T;

    /// Signed minor: `(-1)^(row+col)` times the determinant of the matrix
    /// with `row` and `col` removed.
    fn cofactor(&self, row: usize, col: usize) -> T;

    /// Matrix of all cofactors.
    fn cofactor_matrix(&self) -> Self;

    /// Transpose of the cofactor matrix.
    fn adjugate(&self) -> Self;

    /// Determinant and, when it is non-zero and finite, the inverse.
    fn invert(&self) -> Inversion<T, Self>;

    /// The inverse, or [`LinalgError::Singular`].
    fn inverse(&self) -> Result<Self, LinalgError> {
        self.invert().into_result()
    }
}

fn det2<T: FloatScalar>(m: &Matrix2<T>) -> T {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

fn det3<T: FloatScalar>(m: &Matrix3<T>) -> T {
    let [[a, b, c], [d, e, f], [g, h, i]] = m.data;
    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
}

fn det4<T: FloatScalar>(m: &Matrix4<T>) -> T {
    let mut det = T::zero();
    for j in 0..4 {
        let term = m[(0, j)] * det3(&m.minor(0, j));
        det = if j % 2 == 0 { det + term } else { det - term };
    }
    det
}

#[inline]
fn checkerboard<T: FloatScalar>(row: usize, col: usize, v: T) -> T {
    if (row + col) % 2 == 0 {
        v
    } else {
        -v
    }
}

impl<T: Copy> Matrix3<T> {
    /// The 2×2 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix2<T> {
        let mut data = [[self.data[0][0]; 2]; 2];
        let mut r = 0;
        for i in (0..3).filter(|&i| i != row) {
            let mut c = 0;
            for j in (0..3).filter(|&j| j != col) {
                data[r][c] = self.data[i][j];
                c += 1;
            }
            r += 1;
        }
        Matrix::new(data)
    }
}

impl<T: Copy> Matrix4<T> {
    /// The 3×3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        let mut data = [[self.data[0][0]; 3]; 3];
        let mut r = 0;
        for i in (0..4).filter(|&i| i != row) {
            let mut c = 0;
            for j in (0..4).filter(|&j| j != col) {
                data[r][c] = self.data[i][j];
                c += 1;
            }
            r += 1;
        }
        Matrix::new(data)
    }
}

macro_rules! impl_square_matrix {
    ($n:literal, $det:ident, |$m:ident, $row:ident, $col:ident| $minor_det:expr) => {
        impl<T: FloatScalar> SquareMatrix<T> for Matrix<T, $n, $n> {
            const DIM: usize = $n;

            #[inline]
            fn det(&self) -> T {
                $det(self)
            }

            fn cofactor(&self, $row: usize, $col: usize) -> T {
                let $m = self;
                checkerboard($row, $col, $minor_det)
            }

            fn cofactor_matrix(&self) -> Self {
                let mut out = Self::zeros();
                for i in 0..$n {
                    for j in 0..$n {
                        out[(i, j)] = self.cofactor(i, j);
                    }
                }
                out
            }

            fn adjugate(&self) -> Self {
                self.cofactor_matrix().transpose()
            }

            fn invert(&self) -> Inversion<T, Self> {
                let det = self.det();
                if det == T::zero() || !det.is_finite() {
                    log::trace!("no inverse: {}x{} matrix has det = {:?}", $n, $n, det);
                    return Inversion { det, inverse: None };
                }
                let inv = self.adjugate() * (T::one() / det);
                if !inv.is_finite() {
                    log::trace!("no inverse: 1/det overflows for det = {:?}", det);
                    return Inversion { det, inverse: None };
                }
                Inversion {
                    det,
                    inverse: Some(inv),
                }
            }
        }
    };
}

impl_square_matrix!(2, det2, |m, row, col| m[(1 - row, 1 - col)]);
impl_square_matrix!(3, det3, |m, row, col| det2(&m.minor(row, col)));
impl_square_matrix!(4, det4, |m, row, col| det3(&m.minor(row, col)));

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_identity<const N: usize>(m: &Matrix<f64, N, N>, tol: f64) {
        assert!(
            m.abs_diff_eq(&Matrix::eye(), tol),
            "not identity within {}:\n{}",
            tol,
            m
        );
    }

    // ── Determinants ────────────────────────────────────────────

    #[test]
    fn det_2x2() {
        let m = Matrix::new([[3.0_f64, 8.0], [4.0, 6.0]]);
        assert_eq!(m.det(), -14.0);
        assert_eq!(Matrix2::<f64>::eye().det(), 1.0);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.det(), -306.0);
    }

    #[test]
    fn det_4x4() {
        let m = Matrix::new([
            [1.0_f64, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(m.det(), 30.0);
        assert_eq!(Matrix4::<f64>::eye().det(), 1.0);
    }

    #[test]
    fn det_4x4_triangular_is_diagonal_product() {
        let m = Matrix::new([
            [2.0_f64, 5.0, -1.0, 7.0],
            [0.0, 3.0, 4.0, 1.0],
            [0.0, 0.0, -1.0, 9.0],
            [0.0, 0.0, 0.0, 0.5],
        ]);
        assert_eq!(m.det(), -3.0);
    }

    #[test]
    fn det_singular() {
        let m = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.det(), 0.0);
    }

    // ── Minors and cofactors ────────────────────────────────────

    #[test]
    fn minors() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.minor(0, 0), Matrix::new([[5, 6], [8, 9]]));
        assert_eq!(m.minor(1, 2), Matrix::new([[1, 2], [7, 8]]));

        let n = Matrix4::from_fn(|i, j| (i * 4 + j) as i32);
        assert_eq!(
            n.minor(2, 1),
            Matrix::new([[0, 2, 3], [4, 6, 7], [12, 14, 15]])
        );
    }

    #[test]
    fn adjugate_2x2() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        assert_eq!(m.adjugate(), Matrix::new([[4.0, -2.0], [-3.0, 1.0]]));
        assert_eq!(m.cofactor_matrix(), Matrix::new([[4.0, -3.0], [-2.0, 1.0]]));
    }

    #[test]
    fn adjugate_times_matrix_is_det_identity() {
        let m = Matrix::new([[2.0_f64, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 1.0, 4.0]]);
        let d = m.det();
        assert_eq!(m * m.adjugate(), Matrix::eye() * d);
    }

    // ── Inverses ────────────────────────────────────────────────

    #[test]
    fn inverse_2x2() {
        let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert!(inv.abs_diff_eq(&Matrix::new([[0.6, -0.7], [-0.2, 0.4]]), 1e-12));
        assert_near_identity(&(m * inv), 1e-12);
    }

    #[test]
    fn inverse_identity() {
        assert_eq!(Matrix2::<f64>::eye().inverse().unwrap(), Matrix::eye());
        assert_eq!(Matrix3::<f64>::eye().inverse().unwrap(), Matrix::eye());
        assert_eq!(Matrix4::<f64>::eye().inverse().unwrap(), Matrix::eye());
    }

    #[test]
    fn inverse_3x3() {
        let m = Matrix::new([[2.0_f64, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
        let inv = m.inverse().unwrap();
        assert_near_identity(&(m * inv), 1e-12);
        assert_near_identity(&(inv * m), 1e-12);
    }

    #[test]
    fn inverse_4x4() {
        let m = Matrix::new([
            [4.0_f64, 1.0, 0.0, 2.0],
            [1.0, 5.0, 1.0, 0.0],
            [0.0, 1.0, 6.0, 1.0],
            [2.0, 0.0, 1.0, 7.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_near_identity(&(m * inv), 1e-12);
    }

    #[test]
    fn singular_keeps_determinant() {
        let m = Matrix::new([[2.0_f64, 4.0], [1.0, 2.0]]);
        let r = m.invert();
        assert_eq!(r.det, 0.0);
        assert!(r.inverse.is_none());
        assert_eq!(m.inverse(), Err(LinalgError::Singular));

        let m3 = Matrix::new([[1.0_f64, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert_eq!(m3.invert().inverse, None);
    }

    #[test]
    fn nearly_singular_still_inverts() {
        let m = Matrix::new([[1.0_f64, 1.0], [1.0, 1.0 + 1e-9]]);
        let r = m.invert();
        assert!(r.is_near_singular(1e-4));
        let inv = r.inverse.unwrap();
        assert!((m * inv).abs_diff_eq(&Matrix::eye(), 1e-6));
    }

    #[test]
    fn non_finite_det_has_no_inverse() {
        let m = Matrix::new([[f64::NAN, 0.0], [0.0, 1.0]]);
        assert!(m.invert().inverse.is_none());
    }

    #[test]
    fn dim_constant() {
        assert_eq!(<Matrix3<f64> as SquareMatrix<f64>>::DIM, 3);
    }
}
