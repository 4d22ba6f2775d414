//! # vismath
//!
//! Fixed-size linear algebra kernel for 2D/3D visualization, no-std
//! compatible. Values are small `Copy` types on the stack; every operation
//! is a pure function of its inputs.
//!
//! ## Quick start
//!
//! ```
//! use vismath::{transform, Matrix, SquareMatrix, Vector3};
//!
//! let a = Matrix::new([[2.0_f64, 1.0], [1.0, 3.0]]);
//! let inv = a.invert();
//! assert_eq!(inv.det, 5.0);
//! assert!((a * inv.inverse.unwrap()).abs_diff_eq(&Matrix::eye(), 1e-12));
//!
//! let e = a.eigen();
//! assert!(e.pairs[0].value.re() > e.pairs[1].value.re());
//!
//! let model = transform::translation(Vector3::new(0.0, 0.0, -5.0))
//!     * transform::rotation_y4(0.5);
//! let p = model.transform_point3(Vector3::unit_x());
//! assert!((p.z + 5.0 + 0.5_f64.sin()).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — `Vector2` / `Vector3` with dot, cross, normalize, angle,
//!   projection, reflection.
//!
//! - [`matrix`] — `Matrix<T, M, N>` with const-generic dimensions and
//!   row-major `[[T; N]; M]` storage. Arithmetic operators, transpose,
//!   norms, matrix-vector application (plain and homogeneous), and the
//!   runtime-sized [`AnyMatrix`] for 2×2/3×3/4×4 input of unknown shape.
//!
//! - [`linalg`] — [`SquareMatrix`] (determinant, cofactors, adjugate,
//!   inverse) for 2×2, 3×3, 4×4; rank by Gaussian elimination; eigenvalues
//!   and eigenvectors (closed form for 2×2, safeguarded Newton on the
//!   characteristic cubic for 3×3).
//!
//! - [`transform`] — rotation, translation, scale, look-at, perspective and
//!   orthographic matrices.
//!
//! - [`quaternion`] — scalar-first rotation quaternion, conversion to
//!   rotation matrices, slerp.
//!
//! - [`traits`] — [`Scalar`] for all elements, [`FloatScalar`] for
//!   operations that need `sqrt`, trigonometry, or tolerances.
//!
//! ## Errors
//!
//! Degenerate input is reported through [`LinalgError`], never by
//! panicking: zero-length vectors and degenerate projections give
//! `DivisionByZero`, singular matrices give `Singular` (the determinant is
//! still available through [`Inversion`]), runtime shape errors give
//! `DimensionMismatch`, and an eigenvalue iteration that hits its cap is
//! flagged on the result.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at
//! `debug`/`trace` level. The library never installs a logger.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm; `std::error::Error` for `LinalgError` |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `serde` | no       | `Serialize`/`Deserialize` for the value types |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod linalg;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod transform;
pub mod vector;

pub use linalg::{
    CharacteristicCubic, Eigen, Eigen2, Eigen3, EigenPair, EigenPair2, EigenPair3,
    EigenSettings, Eigenvalue, Inversion, LinalgError, SquareMatrix,
};
pub use matrix::any::AnyMatrix;
pub use matrix::aliases::{ColumnVector, Matrix2, Matrix3, Matrix4, RowVector};
pub use matrix::Matrix;
pub use num_complex::Complex;
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, Scalar};
pub use vector::{Axis, Vector2, Vector3};
