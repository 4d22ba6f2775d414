use core::cmp::Ordering;

use num_complex::Complex;

use crate::linalg::cubic::{newton_bracketed, polish, shifted_det, CharacteristicCubic};
use crate::linalg::LinalgError;
use crate::matrix::{Matrix2, Matrix3};
use crate::traits::FloatScalar;
use crate::vector::{Vector2, Vector3};

/// Newton steps applied to each deflated root of the 3×3 cubic.
const POLISH_STEPS: usize = 4;

// ── Result types ────────────────────────────────────────────────────

/// A single eigenvalue: real, or one half of a complex-conjugate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Eigenvalue<T> {
    Real(T),
    Complex(Complex<T>),
}

impl<T: FloatScalar> Eigenvalue<T> {
    /// Real part.
    #[inline]
    pub fn re(&self) -> T {
        match self {
            Eigenvalue::Real(v) => *v,
            Eigenvalue::Complex(c) => c.re,
        }
    }

    /// Imaginary part (zero for a real eigenvalue).
    #[inline]
    pub fn im(&self) -> T {
        match self {
            Eigenvalue::Real(_) => T::zero(),
            Eigenvalue::Complex(c) => c.im,
        }
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        matches!(self, Eigenvalue::Complex(_))
    }

    /// The value if it is real.
    #[inline]
    pub fn as_real(&self) -> Option<T> {
        match self {
            Eigenvalue::Real(v) => Some(*v),
            Eigenvalue::Complex(_) => None,
        }
    }

    #[inline]
    pub fn to_complex(&self) -> Complex<T> {
        Complex::new(self.re(), self.im())
    }
}

/// An eigenvalue with its eigenvector, when one could be recovered.
///
/// `vector` is `None` for complex eigenvalues and for real eigenvalues whose
/// eigenspace has dimension ≥ 2 (no single direction is distinguished).
/// Recovered vectors have unit length; their sign is arbitrary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EigenPair<T, V> {
    pub value: Eigenvalue<T>,
    pub vector: Option<V>,
}

/// Eigen decomposition of an `N×N` matrix.
///
/// Real eigenvalues come first in descending order; a complex-conjugate
/// pair comes last with the positive imaginary part first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eigen<T, V, const N: usize> {
    pub pairs: [EigenPair<T, V>; N],
    /// `false` when the root iteration stopped at its cap; the values are
    /// then the best approximation found.
    pub converged: bool,
    /// Iterations used by the root search (zero for closed-form paths).
    pub iterations: usize,
}

pub type EigenPair2<T> = EigenPair<T, Vector2<T>>;
pub type EigenPair3<T> = EigenPair<T, Vector3<T>>;
pub type Eigen2<T> = Eigen<T, Vector2<T>, 2>;
pub type Eigen3<T> = Eigen<T, Vector3<T>, 3>;

impl<T: FloatScalar, V: Copy, const N: usize> Eigen<T, V, N> {
    /// Eigenvalues in reporting order.
    pub fn values(&self) -> [Eigenvalue<T>; N] {
        self.pairs.map(|p| p.value)
    }

    /// `true` if any eigenvalue is complex.
    pub fn has_complex(&self) -> bool {
        self.pairs.iter().any(|p| p.value.is_complex())
    }

    /// Turn a non-converged result into [`LinalgError::NonConvergence`].
    pub fn require_converged(self) -> Result<Self, LinalgError> {
        if self.converged {
            Ok(self)
        } else {
            Err(LinalgError::NonConvergence)
        }
    }
}

/// Settings for the 3×3 eigenvalue iteration.
///
/// Tolerances apply to the matrix after it is scaled to unit infinity
/// norm, so they are relative to the size of its entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenSettings<T> {
    /// Residual tolerance. A point is accepted on it only when the Newton
    /// correction from that point is also within the step tolerance.
    pub f_tol: T,
    /// Step and bracket tolerance, relative to `max(1, |λ|)`.
    pub x_tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for EigenSettings<f64> {
    fn default() -> Self {
        Self {
            f_tol: 1e-14,
            x_tol: 1e-12,
            max_iter: 100,
        }
    }
}

impl Default for EigenSettings<f32> {
    fn default() -> Self {
        Self {
            f_tol: 1e-6,
            x_tol: 1e-6,
            max_iter: 100,
        }
    }
}

// ── 2×2: closed form ────────────────────────────────────────────────

impl<T: FloatScalar> Matrix2<T> {
    /// Eigenvalues and eigenvectors from the quadratic formula.
    ///
    /// A negative discriminant gives a complex-conjugate pair without
    /// eigenvectors.
    ///
    /// ```
    /// use vismath::{Eigenvalue, Matrix};
    ///
    /// let e = Matrix::new([[2.0_f64, 0.0], [0.0, 3.0]]).eigen();
    /// assert_eq!(e.pairs[0].value, Eigenvalue::Real(3.0));
    /// assert_eq!(e.pairs[1].value, Eigenvalue::Real(2.0));
    ///
    /// let rot = Matrix::new([[0.0_f64, -1.0], [1.0, 0.0]]).eigen();
    /// assert_eq!(rot.pairs[0].value.im(), 1.0);
    /// assert_eq!(rot.pairs[1].value.im(), -1.0);
    /// assert!(rot.pairs[0].vector.is_none());
    /// ```
    pub fn eigen(&self) -> Eigen2<T> {
        let [[a, b], [c, d]] = self.data;
        let half = T::half();
        let tr = a + d;
        // trace² − 4·det, written to avoid cancelling two large terms
        let disc = (a - d) * (a - d) + T::lit(4.0) * b * c;

        let pairs = if disc >= T::zero() {
            let s = disc.sqrt();
            let l1 = (tr + s) * half;
            let l2 = (tr - s) * half;
            [
                EigenPair {
                    value: Eigenvalue::Real(l1),
                    vector: self.eigenvector2(l1),
                },
                EigenPair {
                    value: Eigenvalue::Real(l2),
                    vector: self.eigenvector2(l2),
                },
            ]
        } else if disc < T::zero() {
            let re = tr * half;
            let im = (-disc).sqrt() * half;
            [
                EigenPair {
                    value: Eigenvalue::Complex(Complex::new(re, im)),
                    vector: None,
                },
                EigenPair {
                    value: Eigenvalue::Complex(Complex::new(re, -im)),
                    vector: None,
                },
            ]
        } else {
            return Eigen {
                pairs: [nan_pair(); 2],
                converged: false,
                iterations: 0,
            };
        };

        Eigen {
            pairs,
            converged: true,
            iterations: 0,
        }
    }

    /// Null vector of `M − λI` from its larger row, normalized.
    fn eigenvector2(&self, lambda: T) -> Option<Vector2<T>> {
        let [[a, b], [c, d]] = self.data;
        let r0 = Vector2::new(a - lambda, b);
        let r1 = Vector2::new(c, d - lambda);
        let (n0, n1) = (r0.magnitude_squared(), r1.magnitude_squared());

        let tol = T::epsilon() * self.max_abs().max(lambda.abs());
        if n0.max(n1).sqrt() <= tol {
            return None;
        }
        let v = if n0 >= n1 {
            Vector2::new(-b, a - lambda)
        } else {
            Vector2::new(d - lambda, -c)
        };
        v.normalize().ok()
    }
}

// ── 3×3: safeguarded Newton on the characteristic cubic ─────────────

impl<T: FloatScalar> Matrix3<T> {
    /// Eigenvalues and eigenvectors with default [`EigenSettings`].
    ///
    /// ```
    /// use vismath::Matrix;
    ///
    /// let m = Matrix::new([[2.0_f64, 1.0, 0.0], [1.0, 2.0, 0.0], [0.0, 0.0, 5.0]]);
    /// let e = m.eigen();
    /// let values: Vec<f64> = e.pairs.iter().map(|p| p.value.re()).collect();
    /// assert!((values[0] - 5.0).abs() < 1e-12);
    /// assert!((values[1] - 3.0).abs() < 1e-12);
    /// assert!((values[2] - 1.0).abs() < 1e-12);
    /// ```
    pub fn eigen(&self) -> Eigen3<T>
    where
        EigenSettings<T>: Default,
    {
        self.eigen_with(&EigenSettings::default())
    }

    /// Eigen decomposition with explicit settings.
    ///
    /// One real root of the characteristic cubic is found by Newton's
    /// method, safeguarded by bisection; the remaining quadratic is solved
    /// in closed form. Never panics: if the iteration hits `max_iter`, the
    /// result carries `converged = false` and the best values found.
    pub fn eigen_with(&self, settings: &EigenSettings<T>) -> Eigen3<T> {
        if !self.is_finite() {
            log::debug!("3x3 eigen: matrix has non-finite entries");
            return Eigen {
                pairs: [nan_pair(); 3],
                converged: false,
                iterations: 0,
            };
        }

        let scale = self.norm_inf();
        if scale == T::zero() {
            let zero = EigenPair {
                value: Eigenvalue::Real(T::zero()),
                vector: None,
            };
            return Eigen {
                pairs: [zero; 3],
                converged: true,
                iterations: 0,
            };
        }

        // Every eigenvalue of the scaled matrix lies in [-1, 1]
        let a = *self * (T::one() / scale);
        let p = CharacteristicCubic::of(&a);
        let f = |x| shifted_det(&a, x);
        let two = T::two();
        let root = newton_bracketed(f, p.trace / T::lit(3.0), -two, two, settings);
        if !root.converged {
            log::debug!(
                "3x3 eigen: root iteration hit the cap of {} iterations",
                settings.max_iter
            );
        }

        let r = root.x;
        let (b, c) = p.deflate(r);
        let half = T::half();
        let four = T::lit(4.0);
        let disc = b * b - four * c;
        // Rounding bound of `disc`; anything inside it is a repeated real root
        let noise = T::lit(16.0) * T::epsilon() * (b * b + (four * c).abs());

        let pairs = if disc < -noise {
            let re = -b * half * scale;
            let im = (-disc).sqrt() * half * scale;
            [
                EigenPair {
                    value: Eigenvalue::Real(r * scale),
                    vector: eigenvector3(&a, r),
                },
                EigenPair {
                    value: Eigenvalue::Complex(Complex::new(re, im)),
                    vector: None,
                },
                EigenPair {
                    value: Eigenvalue::Complex(Complex::new(re, -im)),
                    vector: None,
                },
            ]
        } else {
            let s = disc.max(T::zero()).sqrt();
            let q = -(b + b.signum() * s) * half;
            let (r1, r2) = if q == T::zero() {
                (T::zero(), T::zero())
            } else {
                (q, c / q)
            };

            let mut roots = [r, polish(f, r1, POLISH_STEPS), polish(f, r2, POLISH_STEPS)];
            roots.sort_unstable_by(|x, y| y.partial_cmp(x).unwrap_or(Ordering::Equal));
            roots.map(|l| EigenPair {
                value: Eigenvalue::Real(l * scale),
                vector: eigenvector3(&a, l),
            })
        };

        Eigen {
            pairs,
            converged: root.converged,
            iterations: root.iterations,
        }
    }
}

/// Null vector of `A − λI` as the largest cross product of two of its rows.
///
/// When every pair of rows is parallel to within `sqrt(ε)` (relative to the
/// row lengths) the null space has dimension ≥ 2 and no single eigenvector
/// is returned.
fn eigenvector3<T: FloatScalar>(a: &Matrix3<T>, lambda: T) -> Option<Vector3<T>> {
    let n = *a - Matrix3::eye() * lambda;
    let rows = [0, 1, 2].map(|i| Vector3::from(n.row(i)));

    let mut best = Vector3::zero();
    let mut best_sq = -T::one();
    let mut lengths_sq = T::zero();
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        let cand = rows[i].cross(&rows[j]);
        let sq = cand.magnitude_squared();
        if sq > best_sq {
            best = cand;
            best_sq = sq;
            lengths_sq = rows[i].magnitude_squared() * rows[j].magnitude_squared();
        }
    }

    if best_sq <= T::epsilon() * lengths_sq {
        return None;
    }
    best.normalize().ok()
}

fn nan_pair<T: FloatScalar, V>() -> EigenPair<T, V> {
    EigenPair {
        value: Eigenvalue::Real(T::nan()),
        vector: None,
    }
}
