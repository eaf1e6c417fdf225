//! Bracketed root refinement using Brent's method

use thiserror::Error;

/// Default solver step tolerance.
pub const DEFAULT_XTOL: f64 = 1e-12;
/// Default iteration cap; Brent converges long before this for any
/// bracket the scan produces.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Failure modes of the bracketed solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The endpoint values do not have opposite signs (or are not finite).
    #[error("no sign change over [{a}, {b}]")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },
    /// The iteration cap was hit before the bracket shrank to tolerance.
    #[error("no convergence within {iterations} iterations")]
    NoConvergence {
        /// Number of iterations performed
        iterations: usize,
    },
}

/// Finds a root of `f` inside the bracket [a, b] with Brent's method.
///
/// Combines bisection, the secant step, and inverse quadratic
/// interpolation, falling back to bisection whenever an interpolated
/// step would leave the bracket or shrink it too slowly. Requires
/// `f(a)` and `f(b)` to have opposite signs; converges for any
/// continuous `f` under that condition.
///
/// The effective tolerance per iteration is `2·ε·|b| + xtol/2`, so
/// `xtol` bounds the absolute error away from zero and machine epsilon
/// takes over for large roots.
pub fn brent<F>(f: F, a: f64, b: f64, xtol: f64, max_iter: usize) -> Result<f64, SolverError>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if !(fa * fb < 0.0) {
        // Same sign, or a NaN endpoint from re-evaluation near the
        // domain boundary.
        return Err(SolverError::NoBracket { a, b });
    }

    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    // c carries the previous best endpoint; [b, c] always brackets.
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..max_iter {
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * xtol;
        let m = (c - b) / 2.0;

        if fb == 0.0 || m.abs() <= tol {
            return Ok(b);
        }

        let interpolate = if fa != fc && fb != fc {
            // Inverse quadratic interpolation through (a, b, c).
            let r = fb / fc;
            let s = fb / fa;
            let t = fa / fc;
            let p = s * (t * (r - t) * (c - b) - (1.0 - r) * (b - a));
            let q = (t - 1.0) * (r - 1.0) * (s - 1.0);
            Some((p, q))
        } else if fb != fa {
            // Secant step.
            let s = fb / fa;
            Some((2.0 * m * s, 1.0 - s))
        } else {
            None
        };

        let mut bisect = true;
        if let Some((p, q)) = interpolate {
            if p.abs() < (3.0 * m * q).abs() / 2.0 && p.abs() < (e * q).abs() / 2.0 {
                e = d;
                d = p / q;
                bisect = false;
            }
        }
        if bisect {
            d = m;
            e = m;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if m > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);

        // Re-establish the bracket when b and c landed on the same side.
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
    }

    Err(SolverError::NoConvergence {
        iterations: max_iter,
    })
}
