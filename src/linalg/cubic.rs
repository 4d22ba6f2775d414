use crate::linalg::eigen::EigenSettings;
use crate::matrix::Matrix3;
use crate::traits::FloatScalar;

/// Characteristic polynomial of a 3×3 matrix, in monic form:
///
/// `p(λ) = λ³ − trace·λ² + minor_sum·λ − det`
///
/// which is `−det(M − λI)`; both have the same roots.
///
/// ```
/// use vismath::{CharacteristicCubic, Matrix};
///
/// let m = Matrix::new([[2.0_f64, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
/// let p = CharacteristicCubic::of(&m);
/// assert_eq!(p.trace, 9.0);
/// assert_eq!(p.minor_sum, 26.0);
/// assert_eq!(p.det, 24.0);
/// assert_eq!(p.eval(3.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacteristicCubic<T> {
    /// Sum of the diagonal.
    pub trace: T,
    /// Sum of the three principal 2×2 minors.
    pub minor_sum: T,
    /// Determinant.
    pub det: T,
}

impl<T: FloatScalar> CharacteristicCubic<T> {
    /// Coefficients of the characteristic polynomial of `m`.
    pub fn of(m: &Matrix3<T>) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = m.data;
        Self {
            trace: a + e + i,
            minor_sum: (a * e - b * d) + (a * i - c * g) + (e * i - f * h),
            det: a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g),
        }
    }

    /// `p(λ)`, by Horner's rule.
    #[inline]
    pub fn eval(&self, lambda: T) -> T {
        ((lambda - self.trace) * lambda + self.minor_sum) * lambda - self.det
    }

    /// `p'(λ) = 3λ² − 2·trace·λ + minor_sum`.
    #[inline]
    pub fn derivative(&self, lambda: T) -> T {
        let three = T::lit(3.0);
        (three * lambda - T::two() * self.trace) * lambda + self.minor_sum
    }

    /// Divide out the root `r`, leaving `λ² + bλ + c`. Returns `(b, c)`.
    #[inline]
    pub fn deflate(&self, r: T) -> (T, T) {
        let b = r - self.trace;
        let c = self.minor_sum + r * b;
        (b, c)
    }
}

/// `p(λ)` and `p'(λ)` evaluated on the matrix itself rather than on the
/// coefficients: the determinant and the sum of principal 2×2 minors of
/// `λI − m`. Rounding stays relative to the entries of `λI − m`, which keeps
/// clustered roots apart where the expanded coefficients would blur them.
pub(crate) fn shifted_det<T: FloatScalar>(m: &Matrix3<T>, lambda: T) -> (T, T) {
    let n = Matrix3::eye() * lambda - *m;
    let [[a, b, c], [d, e, f], [g, h, i]] = n.data;
    let (m0, m1, m2) = (e * i - f * h, d * i - f * g, d * h - e * g);
    let p = a * m0 - b * m1 + c * m2;
    let dp = m0 + (a * i - c * g) + (a * e - b * d);
    (p, dp)
}

/// Take up to `steps` Newton steps from `x`, keeping a step only if it
/// reduces `|f|`. `f` returns the value and the derivative.
pub(crate) fn polish<T: FloatScalar>(f: impl Fn(T) -> (T, T), mut x: T, steps: usize) -> T {
    let (mut fx, mut dfx) = f(x);
    for _ in 0..steps {
        if fx == T::zero() || dfx == T::zero() {
            break;
        }
        let x_new = x - fx / dfx;
        let (f_new, df_new) = f(x_new);
        if !(f_new.abs() < fx.abs()) {
            break;
        }
        x = x_new;
        fx = f_new;
        dfx = df_new;
    }
    x
}

/// Outcome of a bracketed root search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RootResult<T> {
    pub x: T,
    pub iterations: usize,
    pub converged: bool,
}

/// Newton's method from `x0`, safeguarded by bisection inside `[lo, hi]`.
///
/// `f` returns the value and the derivative; `f(lo)` and `f(hi)` must have
/// opposite signs. A Newton step is taken only when it lands strictly
/// inside the current bracket and is at most half the step before last;
/// otherwise the bracket is bisected, so the bracket keeps shrinking.
///
/// With `tol = x_tol · max(1, |x|)` the search stops when `f(x)` is exactly
/// zero, when the bracket is narrower than `tol`, when a step is shorter
/// than `tol`, or when `|f(x)| <= f_tol` and the Newton correction
/// `|f / f'|` is also within `tol`. A small residual alone is not enough:
/// near clustered roots `f'` is tiny and a small `f` can sit far from the
/// root. Hitting `max_iter` reports `converged = false` with the last point.
pub(crate) fn newton_bracketed<T: FloatScalar>(
    mut f: impl FnMut(T) -> (T, T),
    x0: T,
    lo: T,
    hi: T,
    settings: &EigenSettings<T>,
) -> RootResult<T> {
    // Orient so that f(neg) < 0 < f(pos)
    let (mut neg, mut pos) = if f(lo).0 < T::zero() { (lo, hi) } else { (hi, lo) };

    let mut x = x0;
    let mut step = (hi - lo).abs();
    let mut step_before = step;
    for iter in 0..settings.max_iter {
        let (fx, dfx) = f(x);
        if fx == T::zero() {
            return RootResult {
                x,
                iterations: iter,
                converged: true,
            };
        }

        if fx < T::zero() {
            neg = x;
        } else {
            pos = x;
        }
        let (a, b) = if neg < pos { (neg, pos) } else { (pos, neg) };
        let tol = settings.x_tol * x.abs().max(T::one());
        if b - a <= tol {
            return RootResult {
                x,
                iterations: iter + 1,
                converged: true,
            };
        }

        let correction = fx / dfx;
        if dfx != T::zero() && fx.abs() <= settings.f_tol && correction.abs() <= tol {
            return RootResult {
                x: x - correction,
                iterations: iter + 1,
                converged: true,
            };
        }

        let newton = x - correction;
        let fast = (T::two() * fx).abs() <= (step_before * dfx).abs();
        let x_new = if dfx != T::zero() && newton > a && newton < b && fast {
            newton
        } else {
            (a + b) * T::half()
        };

        step_before = step;
        step = x_new - x;
        if step.abs() <= tol {
            return RootResult {
                x: x_new,
                iterations: iter + 1,
                converged: true,
            };
        }
        x = x_new;
    }

    RootResult {
        x,
        iterations: settings.max_iter,
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn coefficients_match_definition() {
        let m = Matrix::new([[1.0_f64, 2.0, 3.0], [0.0, 4.0, 5.0], [1.0, 0.0, 6.0]]);
        let p = CharacteristicCubic::of(&m);
        assert_eq!(p.trace, 11.0);
        // (4 - 0) + (6 - 3) + (24 - 0)
        assert_eq!(p.minor_sum, 31.0);
        assert_eq!(p.det, 22.0);
    }

    #[test]
    fn eval_at_eigenvalue_is_zero() {
        let m = Matrix::new([[2.0_f64, 1.0, 0.0], [1.0, 2.0, 0.0], [0.0, 0.0, 5.0]]);
        let p = CharacteristicCubic::of(&m);
        for lambda in [1.0, 3.0, 5.0] {
            assert_eq!(p.eval(lambda), 0.0);
        }
        assert!(p.eval(0.0) != 0.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let m = Matrix::new([[1.0_f64, -2.0, 0.5], [3.0, 0.0, 1.0], [2.0, 1.0, -1.0]]);
        let p = CharacteristicCubic::of(&m);
        let h = 1e-6;
        for x in [-2.0, 0.3, 1.7] {
            let fd = (p.eval(x + h) - p.eval(x - h)) / (2.0 * h);
            assert!((fd - p.derivative(x)).abs() < 1e-6);
        }
    }

    #[test]
    fn deflate_leaves_remaining_roots() {
        // Roots 1, 2, 3
        let p = CharacteristicCubic {
            trace: 6.0_f64,
            minor_sum: 11.0,
            det: 6.0,
        };
        let (b, c) = p.deflate(3.0);
        assert_eq!((b, c), (-3.0, 2.0)); // λ² − 3λ + 2
    }

    #[test]
    fn shifted_det_agrees_with_coefficients() {
        let m = Matrix::new([[1.0_f64, -2.0, 0.5], [3.0, 0.0, 1.0], [2.0, 1.0, -1.0]]);
        let p = CharacteristicCubic::of(&m);
        for x in [-2.0, -0.4, 0.3, 1.7, 4.0] {
            let (v, dv) = shifted_det(&m, x);
            assert!((v - p.eval(x)).abs() < 1e-12);
            assert!((dv - p.derivative(x)).abs() < 1e-12);
        }
    }

    #[test]
    fn shifted_det_keeps_clustered_roots_apart() {
        // Small rotation about z: roots 1 and cos θ ± i sin θ
        let (s, c) = 1e-5_f64.sin_cos();
        let m = Matrix::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]);
        // p(λ) = (λ − 1)((λ − c)² + s²), which is positive just above 1
        let (v, _) = shifted_det(&m, 1.0 + 1e-6);
        assert!(v > 0.0);
        let (v, _) = shifted_det(&m, 1.0 - 1e-6);
        assert!(v < 0.0);
    }

    #[test]
    fn polish_moves_toward_root() {
        let f = |x: f64| (x * x - 2.0, 2.0 * x);
        let x = polish(f, 1.5, 4);
        assert!((x - core::f64::consts::SQRT_2).abs() < 1e-12);
        // Already exact: no step taken
        assert_eq!(polish(|x: f64| (x - 3.0, 1.0), 3.0, 4), 3.0);
    }

    #[test]
    fn bracketed_newton_finds_root() {
        let settings = EigenSettings::<f64>::default();
        let r = newton_bracketed(|x| (x * x * x - 2.0, 3.0 * x * x), 0.0, -3.0, 3.0, &settings);
        assert!(r.converged);
        assert!((r.x - 2.0_f64.cbrt()).abs() < 1e-10);
    }

    #[test]
    fn bracketed_newton_survives_zero_derivative_seed() {
        // f'(0) = 0: the first step must bisect instead of dividing by zero
        let settings = EigenSettings::<f64>::default();
        let r = newton_bracketed(|x| (x * x * x - 1.0, 3.0 * x * x), 0.0, -2.0, 2.0, &settings);
        assert!(r.converged);
        assert!((r.x - 1.0).abs() < 1e-10);
    }

    #[test]
    fn small_residual_is_not_enough_near_a_triple_root() {
        // f(0.5 + 1e-5) = 1e-15 is already below f_tol, but x is 1e-5 away
        let settings = EigenSettings::<f64>::default();
        let f = |x: f64| {
            let d = x - 0.5;
            (d * d * d, 3.0 * d * d)
        };
        let r = newton_bracketed(f, 0.5 + 1e-5, -2.0, 2.0, &settings);
        assert!(r.converged);
        assert!((r.x - 0.5).abs() < 1e-10, "stopped at {}", r.x);
    }

    #[test]
    fn bracketed_newton_reports_iteration_cap() {
        let settings = EigenSettings {
            max_iter: 2,
            ..EigenSettings::<f64>::default()
        };
        let r = newton_bracketed(|x| (x - 0.123456789, 1e-30), 0.9, -1.0, 1.0, &settings);
        assert!(!r.converged);
        assert_eq!(r.iterations, 2);
        assert!(r.x.is_finite());
    }
}
