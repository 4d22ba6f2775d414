//! 2D and 3D vectors with named components.
//!
//! Both types are `Copy` values: every operation returns a new vector.
//! Operations that divide by a length ([`Vector2::normalize`],
//! [`Vector2::projection`], [`Vector2::angle_between`] and their 3D
//! counterparts) return [`LinalgError::DivisionByZero`] instead of producing
//! `NaN` or infinity.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::matrix::ColumnVector;
use crate::traits::{FloatScalar, Scalar};

/// Coordinate axis, used to name reflection lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// 2D vector `{x, y}`.
///
/// ```
/// use vismath::Vector2;
///
/// let v = Vector2::new(3.0, 4.0) + Vector2::new(2.0, 1.0);
/// assert_eq!(v, Vector2::new(5.0, 5.0));
/// assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// 3D vector `{x, y, z}`.
///
/// ```
/// use vismath::Vector3;
///
/// let z = Vector3::unit_x().cross(&Vector3::unit_y());
/// assert_eq!(z, Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Component-wise operators ────────────────────────────────────────

macro_rules! impl_vector_ops {
    ($V:ident { $($f:ident),+ }) => {
        impl<T: Scalar> Add for $V<T> {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: Scalar> Sub for $V<T> {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: Scalar> Neg for $V<T> {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                Self { $($f: T::zero() - self.$f),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $V<T> {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: Scalar> AddAssign for $V<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> SubAssign for $V<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> $V<T> {
            /// The zero vector.
            #[inline]
            pub fn zero() -> Self {
                Self { $($f: T::zero()),+ }
            }

            /// Multiply every component by `s`.
            #[inline]
            pub fn scale(&self, s: T) -> Self {
                *self * s
            }

            /// Dot product.
            #[inline]
            pub fn dot(&self, rhs: &Self) -> T {
                T::zero() $(+ self.$f * rhs.$f)+
            }

            /// Squared length; exact for integer components.
            #[inline]
            pub fn magnitude_squared(&self) -> T {
                self.dot(self)
            }
        }

        impl<T: FloatScalar> $V<T> {
            /// Largest absolute component.
            #[inline]
            fn max_abs(&self) -> T {
                T::zero() $(.max(self.$f.abs()))+
            }

            /// Every component divided by `m`.
            #[inline]
            fn unscale(&self, m: T) -> Self {
                Self { $($f: self.$f / m),+ }
            }

            /// Euclidean length.
            ///
            /// Components are divided by the largest one before squaring, so
            /// the result neither overflows nor underflows unless the length
            /// itself does.
            ///
            /// ```
            /// use vismath::Vector2;
            ///
            /// let huge = Vector2::new(3.0e200_f64, 4.0e200).magnitude();
            /// assert!((huge / 5.0e200 - 1.0).abs() < 1e-15);
            /// let tiny = Vector2::new(3.0e-200_f64, 4.0e-200).magnitude();
            /// assert!((tiny / 5.0e-200 - 1.0).abs() < 1e-15);
            /// ```
            pub fn magnitude(&self) -> T {
                let m = self.max_abs();
                if m == T::zero() || !m.is_finite() {
                    return self.magnitude_squared().sqrt();
                }
                self.unscale(m).magnitude_squared().sqrt() * m
            }

            /// Distance between two points.
            #[inline]
            pub fn distance(&self, other: &Self) -> T {
                (*other - *self).magnitude()
            }

            /// Unit vector in the same direction.
            ///
            /// Fails with [`LinalgError::DivisionByZero`] only when every
            /// component is zero; tiny and huge vectors normalize normally.
            pub fn normalize(&self) -> Result<Self, LinalgError> {
                if true $(&& self.$f == T::zero())+ {
                    return Err(LinalgError::DivisionByZero);
                }
                let u = self.unscale(self.max_abs());
                Ok(u.unscale(u.magnitude_squared().sqrt()))
            }

            /// Angle between two vectors in radians, in `[0, π]`.
            ///
            /// Both operands are normalized first. The cosine is clamped to
            /// `[-1, 1]` before `acos`, so rounding overshoot such as
            /// `1.0000000002` cannot produce `NaN`.
            pub fn angle_between(&self, other: &Self) -> Result<T, LinalgError> {
                let cos = self.normalize()?.dot(&other.normalize()?);
                Ok(cos.max(-T::one()).min(T::one()).acos())
            }

            /// Projection of `self` onto `onto`: `(a·b / b·b) b`, computed as
            /// `(a·û) û` with `û` the unit direction of `onto`.
            pub fn projection(&self, onto: &Self) -> Result<Self, LinalgError> {
                let u = onto.normalize()?;
                Ok(u * self.dot(&u))
            }

            /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
            #[inline]
            pub fn lerp(&self, other: &Self, t: T) -> Self {
                *self + (*other - *self) * t
            }

            /// `true` when every component differs by at most `tol`.
            pub fn abs_diff_eq(&self, other: &Self, tol: T) -> bool {
                true $(&& (self.$f - other.$f).abs() <= tol)+
            }

            /// `true` when no component is `NaN` or infinite.
            pub fn is_finite(&self) -> bool {
                true $(&& self.$f.is_finite())+
            }
        }
    };
}

impl_vector_ops!(Vector2 { x, y });
impl_vector_ops!(Vector3 { x, y, z });

// ── scalar * vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector2<$t>> for $t {
                type Output = Vector2<$t>;
                #[inline]
                fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                    rhs * self
                }
            }

            impl Mul<Vector3<$t>> for $t {
                type Output = Vector3<$t>;
                #[inline]
                fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i32, i64);

// ── 2D-specific ─────────────────────────────────────────────────────

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Unit vector along X.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// Unit vector along Y.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Scalar (z-component of the) cross product: the signed area of the
    /// parallelogram spanned by `self` and `rhs`. Positive when `rhs` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross_z(&self, rhs: &Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotate 90° counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self::new(T::zero() - self.y, self.x)
    }

    /// Reflect across the line of `axis`: components orthogonal to it are
    /// negated. `Axis::Z` (normal to the plane) negates both components.
    pub fn reflect(&self, axis: Axis) -> Self {
        let neg = |v: T| T::zero() - v;
        match axis {
            Axis::X => Self::new(self.x, neg(self.y)),
            Axis::Y => Self::new(neg(self.x), self.y),
            Axis::Z => Self::new(neg(self.x), neg(self.y)),
        }
    }

    /// Lift into 3D with the given `z`.
    #[inline]
    pub fn extend(&self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// As a 2×1 column vector.
    #[inline]
    pub fn to_column(&self) -> ColumnVector<T, 2> {
        ColumnVector::new([[self.x], [self.y]])
    }

    /// From a 2×1 column vector.
    #[inline]
    pub fn from_column(c: &ColumnVector<T, 2>) -> Self {
        Self::new(c[(0, 0)], c[(1, 0)])
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

// ── 3D-specific ─────────────────────────────────────────────────────

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Cross product (right-handed).
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Reflect across the line of `axis`: the named component is kept and
    /// the two orthogonal components are negated (a half turn about `axis`).
    pub fn reflect(&self, axis: Axis) -> Self {
        let neg = |v: T| T::zero() - v;
        match axis {
            Axis::X => Self::new(self.x, neg(self.y), neg(self.z)),
            Axis::Y => Self::new(neg(self.x), self.y, neg(self.z)),
            Axis::Z => Self::new(neg(self.x), neg(self.y), self.z),
        }
    }

    /// Drop `z`.
    #[inline]
    pub fn truncate(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Homogeneous coordinates `[x, y, z, w]`: `w = 1` for points, `0` for
    /// directions.
    #[inline]
    pub fn to_homogeneous(&self, w: T) -> [T; 4] {
        [self.x, self.y, self.z, w]
    }

    /// As a 3×1 column vector.
    #[inline]
    pub fn to_column(&self) -> ColumnVector<T, 3> {
        ColumnVector::new([[self.x], [self.y], [self.z]])
    }

    /// From a 3×1 column vector.
    #[inline]
    pub fn from_column(c: &ColumnVector<T, 3>) -> Self {
        Self::new(c[(0, 0)], c[(1, 0)], c[(2, 0)])
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
