use core::ops::Mul;

use super::{Matrix2, Matrix3, Matrix4};
use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::{Vector2, Vector3};

// ── Matrix * Vector ─────────────────────────────────────────────────

impl<T: Scalar> Mul<Vector2<T>> for Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, v: Vector2<T>) -> Vector2<T> {
        let [r0, r1] = self.data;
        Vector2::new(r0[0] * v.x + r0[1] * v.y, r1[0] * v.x + r1[1] * v.y)
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let row = |r: [T; 3]| r[0] * v.x + r[1] * v.y + r[2] * v.z;
        let [r0, r1, r2] = self.data;
        Vector3::new(row(r0), row(r1), row(r2))
    }
}

impl<T: Scalar> Mul<Vector2<T>> for &Matrix2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, v: Vector2<T>) -> Vector2<T> {
        *self * v
    }
}

impl<T: Scalar> Mul<Vector3<T>> for &Matrix3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        *self * v
    }
}

// ── Homogeneous application ─────────────────────────────────────────

impl<T: Scalar> Matrix3<T> {
    /// Apply to a 2D point: appends `w = 1`, multiplies, drops `w`.
    ///
    /// The output `w` is not divided out; affine matrices keep it at 1.
    ///
    /// ```
    /// use vismath::{transform, Vector2};
    ///
    /// let t = transform::translation2(Vector2::new(5.0, -1.0));
    /// assert_eq!(t.transform_point2(Vector2::new(1.0, 1.0)), Vector2::new(6.0, 0.0));
    /// assert_eq!(t.transform_vector2(Vector2::new(1.0, 1.0)), Vector2::new(1.0, 1.0));
    /// ```
    #[inline]
    pub fn transform_point2(&self, p: Vector2<T>) -> Vector2<T> {
        (*self * p.extend(T::one())).truncate()
    }

    /// Apply to a 2D direction: appends `w = 0`, so translation is ignored.
    #[inline]
    pub fn transform_vector2(&self, v: Vector2<T>) -> Vector2<T> {
        (*self * v.extend(T::zero())).truncate()
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Apply to the homogeneous 4-vector `[x, y, z, w]`.
    pub fn mul_homogeneous(&self, v: [T; 4]) -> [T; 4] {
        let mut out = [T::zero(); 4];
        for (o, r) in out.iter_mut().zip(self.data.iter()) {
            *o = r[0] * v[0] + r[1] * v[1] + r[2] * v[2] + r[3] * v[3];
        }
        out
    }

    /// Apply to a 3D point: appends `w = 1`, multiplies, drops `w`.
    ///
    /// No perspective divide; see [`Matrix4::project_point3`].
    #[inline]
    pub fn transform_point3(&self, p: Vector3<T>) -> Vector3<T> {
        let [x, y, z, _] = self.mul_homogeneous(p.to_homogeneous(T::one()));
        Vector3::new(x, y, z)
    }

    /// Apply to a 3D direction: appends `w = 0`, so translation is ignored.
    #[inline]
    pub fn transform_vector3(&self, v: Vector3<T>) -> Vector3<T> {
        let [x, y, z, _] = self.mul_homogeneous(v.to_homogeneous(T::zero()));
        Vector3::new(x, y, z)
    }
}

impl<T: FloatScalar> Matrix4<T> {
    /// Apply to a 3D point and perform the perspective divide by `w`.
    ///
    /// Fails with [`LinalgError::DivisionByZero`] when the output `w` is
    /// zero (the point lies on the camera plane).
    ///
    /// ```
    /// use vismath::{transform, LinalgError, Vector3};
    ///
    /// let proj = transform::perspective(core::f64::consts::FRAC_PI_2, 1.0, 1.0, 10.0).unwrap();
    /// let ndc = proj.project_point3(Vector3::new(0.0, 0.0, -1.0)).unwrap();
    /// assert!((ndc.z + 1.0).abs() < 1e-12); // near plane maps to -1
    ///
    /// let err = proj.project_point3(Vector3::new(1.0, 1.0, 0.0));
    /// assert_eq!(err, Err(LinalgError::DivisionByZero));
    /// ```
    pub fn project_point3(&self, p: Vector3<T>) -> Result<Vector3<T>, LinalgError> {
        let [x, y, z, w] = self.mul_homogeneous(p.to_homogeneous(T::one()));
        if w == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let inv_w = T::one() / w;
        Ok(Vector3::new(x * inv_w, y * inv_w, z * inv_w))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix, Vector2, Vector3};

    #[test]
    fn matrix2_times_vector2() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * Vector2::new(1.0, -1.0), Vector2::new(-1.0, -1.0));
        assert_eq!(&m * Vector2::new(0.0, 1.0), Vector2::new(2.0, 4.0));
    }

    #[test]
    fn matrix3_times_vector3_matches_column_product() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [0.0, -1.0, 4.0], [2.0, 0.5, 1.0]]);
        let v = Vector3::new(2.0, 1.0, -1.0);
        let as_col = m * v.to_column();
        assert_eq!(m * v, Vector3::from_column(&as_col));
        assert_eq!(m * v, Vector3::new(1.0, -5.0, 3.5));
    }

    #[test]
    fn homogeneous_2d() {
        // Rotate 90° CCW and translate by (1, 2)
        let m = Matrix::new([[0.0, -1.0, 1.0], [1.0, 0.0, 2.0], [0.0, 0.0, 1.0]]);
        assert_eq!(m.transform_point2(Vector2::new(1.0, 0.0)), Vector2::new(1.0, 3.0));
        assert_eq!(m.transform_vector2(Vector2::new(1.0, 0.0)), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn homogeneous_3d() {
        let m = Matrix::new([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 2.0, 0.0, 2.0],
            [0.0, 0.0, 2.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(m.transform_point3(p), Vector3::new(3.0, 4.0, 5.0));
        assert_eq!(m.transform_vector3(p), Vector3::new(2.0, 2.0, 2.0));
        assert_eq!(m.project_point3(p).unwrap(), m.transform_point3(p));
    }

    #[test]
    fn project_divides_by_w() {
        let m = Matrix::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.5, 0.0],
        ]);
        let p = m.project_point3(Vector3::new(2.0, 4.0, 4.0)).unwrap();
        assert_eq!(p, Vector3::new(1.0, 2.0, 2.0));
        assert!(m.project_point3(Vector3::new(1.0, 1.0, 0.0)).is_err());
    }
}
