use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Rank via Gaussian elimination with partial pivoting.
    ///
    /// A pivot counts as zero when it is below `100 · max(M, N) · ε · max|aᵢⱼ|`,
    /// so the threshold scales with the matrix. The zero matrix has rank 0;
    /// the result never exceeds `min(M, N)`.
    ///
    /// ```
    /// use vismath::Matrix;
    ///
    /// let full = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(full.rank(), 2);
    ///
    /// let proportional = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(proportional.rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        let scale = self.max_abs();
        if scale == T::zero() || !scale.is_finite() {
            return 0;
        }
        let tol = scale * T::epsilon() * T::lit(100.0 * M.max(N) as f64);
        self.rank_with_tol(tol)
    }

    /// Rank with an explicit absolute pivot tolerance.
    pub fn rank_with_tol(&self, tol: T) -> usize {
        let mut a = *self;
        let mut rank = 0;

        for col in 0..N {
            if rank == M {
                break;
            }

            // Partial pivoting: largest magnitude in this column at or below the pivot row
            let mut max_row = rank;
            let mut max_val = a[(rank, col)].abs();
            for row in (rank + 1)..M {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val <= tol || max_val.is_nan() {
                continue;
            }

            a.swap_rows(rank, max_row);

            // Eliminate below pivot
            let pivot = a[(rank, col)];
            for row in (rank + 1)..M {
                let factor = a[(row, col)] / pivot;
                a[(row, col)] = T::zero();
                for j in (col + 1)..N {
                    let val = a[(rank, j)];
                    a[(row, j)] = a[(row, j)] - factor * val;
                }
            }

            rank += 1;
        }

        rank
    }
}
