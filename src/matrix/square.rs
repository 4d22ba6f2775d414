use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// The diagonal as an array.
    pub fn diag(&self) -> [T; N] {
        let mut d = [T::zero(); N];
        for (i, x) in d.iter_mut().enumerate() {
            *x = self[(i, i)];
        }
        d
    }

    /// Create a diagonal matrix.
    pub fn from_diag(d: [T; N]) -> Self {
        let mut m = Self::zeros();
        for (i, x) in d.into_iter().enumerate() {
            m[(i, i)] = x;
        }
        m
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix.
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::eye();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Check if the matrix is symmetric (A == A^T).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }
}
