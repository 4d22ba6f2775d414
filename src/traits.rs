use core::fmt::Debug;
use num_traits::{Float, Num, NumCast, One, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `abs`, etc.
/// (determinants with finiteness checks, inverses, eigenvalues, norms,
/// transforms).
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` literal into `Self`.
    ///
    /// Used for algorithm constants; every finite `f64` has a nearest
    /// `f32`, so the conversion never fails for the supported types.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// The constant 2.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The constant 1/2.
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }
}

impl<T: Scalar + Float> FloatScalar for T {}
