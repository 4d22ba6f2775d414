//! Builders for rotation, translation, scale, camera, and projection
//! matrices.
//!
//! Conventions: right-handed coordinates, column vectors (`M * v`), angles in
//! radians with positive rotation counter-clockwise when looking down the
//! axis toward the origin. Composition order is the caller's; the usual order
//! is `translation * rotation * scaling`, which scales first. Projection
//! matrices follow the OpenGL clip convention (depth maps to `[-1, 1]`, the
//! camera looks down `-z`).

use crate::linalg::LinalgError;
use crate::matrix::{Matrix2, Matrix3, Matrix4};
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::{Vector2, Vector3};

// ── 3D rotations ────────────────────────────────────────────────────

/// Rotation about the X axis.
pub fn rotation_x<T: FloatScalar>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new([[l, o, o], [o, c, -s], [o, s, c]])
}

/// Rotation about the Y axis.
pub fn rotation_y<T: FloatScalar>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new([[c, o, s], [o, l, o], [-s, o, c]])
}

/// Rotation about the Z axis.
///
/// ```
/// use vismath::{transform, Vector3};
///
/// let r = transform::rotation_z(core::f64::consts::FRAC_PI_2);
/// assert!((r * Vector3::unit_x()).abs_diff_eq(&Vector3::unit_y(), 1e-12));
/// ```
pub fn rotation_z<T: FloatScalar>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new([[c, -s, o], [s, c, o], [o, o, l]])
}

pub fn rotation_x4<T: FloatScalar>(angle: T) -> Matrix4<T> {
    from_linear(&rotation_x(angle))
}

pub fn rotation_y4<T: FloatScalar>(angle: T) -> Matrix4<T> {
    from_linear(&rotation_y(angle))
}

pub fn rotation_z4<T: FloatScalar>(angle: T) -> Matrix4<T> {
    from_linear(&rotation_z(angle))
}

/// `Rz(z) · Ry(y) · Rx(x)`: applied to a vector, X turns first, then Y,
/// then Z.
pub fn euler_zyx<T: FloatScalar>(x: T, y: T, z: T) -> Matrix3<T> {
    rotation_z(z) * rotation_y(y) * rotation_x(x)
}

/// Rotation matrix of a unit quaternion. The input is not normalized.
pub fn quaternion_to_matrix<T: FloatScalar>(q: &Quaternion<T>) -> Matrix3<T> {
    q.to_rotation_matrix()
}

// ── Affine 4×4 ──────────────────────────────────────────────────────

/// Embed a linear 3×3 map in a homogeneous 4×4 (no translation).
pub fn from_linear<T: FloatScalar>(m: &Matrix3<T>) -> Matrix4<T> {
    let mut out = Matrix4::eye();
    for (i, row) in m.as_rows().iter().enumerate() {
        out.data[i][..3].copy_from_slice(row);
    }
    out
}

/// Translation by `t`.
///
/// ```
/// use vismath::{transform, Vector3};
///
/// let t = transform::translation(Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.transform_point3(Vector3::zero()), Vector3::new(1.0, 2.0, 3.0));
/// assert_eq!(t.transform_vector3(Vector3::unit_x()), Vector3::unit_x());
/// ```
pub fn translation<T: FloatScalar>(t: Vector3<T>) -> Matrix4<T> {
    let mut out = Matrix4::eye();
    out[(0, 3)] = t.x;
    out[(1, 3)] = t.y;
    out[(2, 3)] = t.z;
    out
}

/// Axis-aligned scale by `s`.
pub fn scaling<T: FloatScalar>(s: Vector3<T>) -> Matrix4<T> {
    Matrix4::from_diag([s.x, s.y, s.z, T::one()])
}

// ── Camera and projection ───────────────────────────────────────────

/// View matrix for a camera at `eye` looking at `target`.
///
/// Builds an orthonormal basis `forward = normalize(target − eye)`,
/// `right = normalize(forward × up)`, `up' = right × forward` and maps
/// `eye` to the origin with `forward` along `-z`. Fails with
/// [`LinalgError::DivisionByZero`] when `eye == target` or `up` is parallel
/// to the view direction.
///
/// ```
/// use vismath::{transform, Vector3};
///
/// let view = transform::look_at(
///     Vector3::new(0.0, 0.0, 5.0),
///     Vector3::zero(),
///     Vector3::unit_y(),
/// )
/// .unwrap();
/// let p = view.transform_point3(Vector3::zero());
/// assert!(p.abs_diff_eq(&Vector3::new(0.0, 0.0, -5.0), 1e-12));
/// ```
pub fn look_at<T: FloatScalar>(
    eye: Vector3<T>,
    target: Vector3<T>,
    up: Vector3<T>,
) -> Result<Matrix4<T>, LinalgError> {
    let f = (target - eye).normalize()?;
    let s = f.cross(&up).normalize()?;
    let u = s.cross(&f);
    let (o, l) = (T::zero(), T::one());

    Ok(Matrix4::new([
        [s.x, s.y, s.z, -s.dot(&eye)],
        [u.x, u.y, u.z, -u.dot(&eye)],
        [-f.x, -f.y, -f.z, f.dot(&eye)],
        [o, o, o, l],
    ]))
}

/// Perspective projection with vertical field of view `fov_y` (radians).
///
/// Maps the view frustum to clip space; `z = -near` lands on depth `-1` and
/// `z = -far` on `+1` after the divide by `w = -z`. Fails with
/// [`LinalgError::DivisionByZero`] for `aspect == 0`, `near == far`, or a
/// field of view whose half-angle tangent is zero or infinite.
pub fn perspective<T: FloatScalar>(
    fov_y: T,
    aspect: T,
    near: T,
    far: T,
) -> Result<Matrix4<T>, LinalgError> {
    let tan_half = (fov_y * T::half()).tan();
    if aspect == T::zero() || near == far || tan_half == T::zero() || !tan_half.is_finite() {
        return Err(LinalgError::DivisionByZero);
    }
    let f = T::one() / tan_half;
    let depth = T::one() / (near - far);
    let (o, l) = (T::zero(), T::one());

    Ok(Matrix4::new([
        [f / aspect, o, o, o],
        [o, f, o, o],
        [o, o, (far + near) * depth, T::two() * far * near * depth],
        [o, o, -l, o],
    ]))
}

/// Orthographic projection of the box `[left, right] × [bottom, top] ×
/// [-near, -far]` onto the `[-1, 1]` cube.
///
/// Fails with [`LinalgError::DivisionByZero`] when any extent is zero.
pub fn orthographic<T: FloatScalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<Matrix4<T>, LinalgError> {
    if left == right || bottom == top || near == far {
        return Err(LinalgError::DivisionByZero);
    }
    let rl = T::one() / (right - left);
    let tb = T::one() / (top - bottom);
    let fan = T::one() / (far - near);
    let two = T::two();
    let (o, l) = (T::zero(), T::one());

    Ok(Matrix4::new([
        [two * rl, o, o, -(right + left) * rl],
        [o, two * tb, o, -(top + bottom) * tb],
        [o, o, -two * fan, -(far + near) * fan],
        [o, o, o, l],
    ]))
}

// ── 2D ──────────────────────────────────────────────────────────────

/// Counter-clockwise rotation in the plane.
pub fn rotation2<T: FloatScalar>(angle: T) -> Matrix2<T> {
    let (s, c) = angle.sin_cos();
    Matrix2::new([[c, -s], [s, c]])
}

/// [`rotation2`] as a homogeneous 3×3.
pub fn rotation2_homogeneous<T: FloatScalar>(angle: T) -> Matrix3<T> {
    let (s, c) = angle.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Matrix3::new([[c, -s, o], [s, c, o], [o, o, l]])
}

pub fn translation2<T: FloatScalar>(t: Vector2<T>) -> Matrix3<T> {
    let mut out = Matrix3::eye();
    out[(0, 2)] = t.x;
    out[(1, 2)] = t.y;
    out
}

pub fn scaling2<T: FloatScalar>(s: Vector2<T>) -> Matrix3<T> {
    Matrix3::from_diag([s.x, s.y, T::one()])
}
