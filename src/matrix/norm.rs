use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Squared Frobenius norm (sum of all elements squared). No sqrt.
    pub fn frobenius_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for i in 0..M {
            for j in 0..N {
                sum = sum + self[(i, j)] * self[(i, j)];
            }
        }
        sum
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Frobenius norm (square root of sum of squared elements).
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// Bounds the magnitude of every eigenvalue of a square matrix.
    pub fn norm_inf(&self) -> T {
        let mut max = T::zero();
        for i in 0..M {
            let mut row_sum = T::zero();
            for j in 0..N {
                row_sum = row_sum + self[(i, j)].abs();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        let mut max = T::zero();
        for i in 0..M {
            for j in 0..N {
                let a = self[(i, j)].abs();
                if a > max {
                    max = a;
                }
            }
        }
        max
    }
}
