//! Type aliases for the matrix sizes the kernel supports.

use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 2×2 matrix: 2D linear maps.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix: 3D linear maps, or 2D homogeneous transforms.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix: 3D homogeneous transforms and projections.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Vector-shaped matrices ─────────────────────────────────────────

/// A column vector (N×1 matrix), for `Matrix * ColumnVector` products.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;
/// A row vector (1×N matrix).
pub type RowVector<T, const N: usize> = Matrix<T, 1, N>;
