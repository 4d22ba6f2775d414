//! Rotation quaternions.
//!
//! Conversions to matrices assume a unit quaternion and do not normalize
//! their input; call [`Quaternion::normalize`] first when the value comes
//! from accumulated arithmetic or an outside source.

use core::ops::{Mul, Neg};

use crate::linalg::LinalgError;
use crate::matrix::{Matrix3, Matrix4};
use crate::traits::FloatScalar;
use crate::transform;
use crate::vector::Vector3;

/// Quaternion `w + xi + yj + zk`, scalar first.
///
/// ```
/// use vismath::{Quaternion, Vector3};
/// use core::f64::consts::FRAC_PI_2;
///
/// let q = Quaternion::from_axis_angle(Vector3::unit_z(), FRAC_PI_2).unwrap();
/// let v = q * Vector3::new(1.0, 0.0, 0.0);
/// assert!(v.abs_diff_eq(&Vector3::new(0.0, 1.0, 0.0), 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: FloatScalar> Quaternion<T> {
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// No rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// Rotation by `angle` radians about `axis` (right-hand rule).
    ///
    /// The axis is normalized here; a zero axis is
    /// [`LinalgError::DivisionByZero`].
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Result<Self, LinalgError> {
        let u = axis.normalize()?;
        let (s, c) = (angle * T::half()).sin_cos();
        Ok(Self::new(c, u.x * s, u.y * s, u.z * s))
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.vector_part().dot(&rhs.vector_part())
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm. The zero quaternion has no direction and fails
    /// with [`LinalgError::DivisionByZero`].
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        let n = self.norm();
        if n == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.scale(T::one() / n))
    }

    /// `(w, −x, −y, −z)`; the inverse rotation for a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let n2 = self.norm_squared();
        if n2 == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(self.conjugate().scale(T::one() / n2))
    }

    #[inline]
    fn scale(&self, s: T) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Rotate `v` by this (unit) quaternion: `q v q*`.
    #[inline]
    pub fn rotate(&self, v: Vector3<T>) -> Vector3<T> {
        // v + 2w (u × v) + 2 u × (u × v)
        let u = self.vector_part();
        let t = u.cross(&v) * T::two();
        v + t * self.w + u.cross(&t)
    }

    /// 3×3 rotation matrix. Assumes `|q| = 1`.
    ///
    /// ```
    /// use vismath::{Matrix3, Quaternion};
    ///
    /// let m = Quaternion::<f64>::identity().to_rotation_matrix();
    /// assert_eq!(m, Matrix3::eye());
    /// ```
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let Self { w, x, y, z } = *self;
        let one = T::one();
        let two = T::two();
        Matrix3::new([
            [
                one - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                one - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// 4×4 homogeneous rotation. Assumes `|q| = 1`.
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        transform::from_linear(&self.to_rotation_matrix())
    }

    /// Spherical linear interpolation along the shorter arc.
    ///
    /// `t = 0` gives `self`, `t = 1` gives `other` (or `−other`, the same
    /// rotation). Nearly parallel inputs fall back to normalized linear
    /// interpolation.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut end = *other;
        if cos < T::zero() {
            cos = -cos;
            end = -end;
        }

        if cos > T::one() - T::lit(1e-6) {
            let lerp = Self::new(
                self.w + (end.w - self.w) * t,
                self.x + (end.x - self.x) * t,
                self.y + (end.y - self.y) * t,
                self.z + (end.z - self.z) * t,
            );
            return lerp.normalize().unwrap_or(*self);
        }

        let theta = cos.acos();
        let inv_sin = T::one() / theta.sin();
        let a = ((T::one() - t) * theta).sin() * inv_sin;
        let b = (t * theta).sin() * inv_sin;
        Self::new(
            self.w * a + end.w * b,
            self.x * a + end.x * b,
            self.y * a + end.y * b,
            self.z * a + end.z * b,
        )
    }

    /// `true` when every component differs by at most `tol`.
    pub fn abs_diff_eq(&self, other: &Self, tol: T) -> bool {
        (self.w - other.w).abs() <= tol
            && (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// ── Operators ───────────────────────────────────────────────────────

/// Hamilton product; `a * b` applies `b` first, then `a`.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.vector_part(), rhs.vector_part());
        let v = b * self.w + a * rhs.w + a.cross(&b);
        Self::new(self.w * rhs.w - a.dot(&b), v.x, v.y, v.z)
    }
}

impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.rotate(v)
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
