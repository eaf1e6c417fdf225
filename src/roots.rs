//! Sign-change scan over a search interval with bracketed refinement

use crate::curves::CurveParams;
use crate::solver::{self, brent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Half-width of the automatic search range.
pub const AUTO_SEARCH_LIMIT: f64 = 50.0;
/// Offset keeping the automatic left edge strictly inside the log domain.
pub const DOMAIN_MARGIN: f64 = 1e-4;
/// Grid size for automatic full-range scans.
pub const AUTO_SAMPLES: usize = 10_001;
/// Grid size for user-chosen windows.
pub const WINDOW_SAMPLES: usize = 4_001;
/// Dedup tolerance paired with the dense automatic grid.
pub const AUTO_DEDUP_TOL: f64 = 1e-7;
/// Dedup tolerance paired with the sparser window grid.
pub const WINDOW_DEDUP_TOL: f64 = 1e-6;

/// Rejected search-interval configurations.
#[derive(Debug, Error)]
pub enum IntervalError {
    /// The user window is empty or reversed.
    #[error("invalid window: x_min must be less than x_max (got {min} and {max})")]
    InvalidWindow {
        /// Requested left edge
        min: f64,
        /// Requested right edge
        max: f64,
    },
    /// The log domain begins at or beyond the automatic right limit,
    /// leaving nothing to scan.
    #[error("log domain starts at x = {start}, outside the automatic search range")]
    DomainOutOfRange {
        /// Where the log domain begins
        start: f64,
    },
}

/// Strategy choosing the x-interval scanned for sign changes.
#[derive(Clone, Copy, Debug)]
pub enum IntervalPolicy {
    /// Scan [−50, 50] with the left edge pulled just inside the log
    /// domain.
    Auto,
    /// Scan a caller-chosen window.
    Window {
        /// Left edge
        min: f64,
        /// Right edge
        max: f64,
    },
}

impl IntervalPolicy {
    /// Resolves the policy to a concrete `(left, right)` with
    /// `left < right`.
    pub fn resolve(&self, params: &CurveParams) -> Result<(f64, f64), IntervalError> {
        match *self {
            IntervalPolicy::Auto => {
                let left = (-AUTO_SEARCH_LIMIT).max(params.log_domain_start() + DOMAIN_MARGIN);
                if left >= AUTO_SEARCH_LIMIT {
                    return Err(IntervalError::DomainOutOfRange {
                        start: params.log_domain_start(),
                    });
                }
                Ok((left, AUTO_SEARCH_LIMIT))
            }
            IntervalPolicy::Window { min, max } => {
                if !(min < max) {
                    return Err(IntervalError::InvalidWindow { min, max });
                }
                Ok((min, max))
            }
        }
    }

    /// Default grid density and dedup tolerance for this policy. The
    /// full-range scan uses the denser grid and the tighter tolerance;
    /// user windows are narrower and get by with fewer samples.
    pub fn scan_config(&self) -> ScanConfig {
        match self {
            IntervalPolicy::Auto => ScanConfig {
                sample_count: AUTO_SAMPLES,
                dedup_tol: AUTO_DEDUP_TOL,
            },
            IntervalPolicy::Window { .. } => ScanConfig {
                sample_count: WINDOW_SAMPLES,
                dedup_tol: WINDOW_DEDUP_TOL,
            },
        }
    }
}

/// Grid density and dedup tolerance of a scan.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ScanConfig {
    /// Number of evenly spaced sample points over the interval
    pub sample_count: usize,
    /// Minimum x-distance between distinct roots
    pub dedup_tol: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        IntervalPolicy::Auto.scan_config()
    }
}

/// An intersection point: a zero of the difference function, with y
/// taken from the exponential branch (defined everywhere the scan
/// looks).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Root {
    /// x-coordinate of the intersection
    pub x: f64,
    /// y-coordinate of the intersection
    pub y: f64,
}

/// True if part of `[left, right]` lies outside the log domain, i.e.
/// the scan will carry undefined samples. Advisory only; the scan
/// handles the region by skipping it.
pub fn clips_log_domain(params: &CurveParams, left: f64, _right: f64) -> bool {
    left + params.e <= 0.0
}

/// Enumerates the roots of the difference function on `[left, right]`.
///
/// Samples the difference on an even grid, brackets every strict sign
/// change between adjacent defined samples, and refines each bracket
/// with [`brent`]. Exact zeros at a sample point are taken as-is.
/// Brackets whose refinement fails are dropped; a root closer than
/// `dedup_tol` to an already accepted one is dropped. The result is
/// sorted ascending and may be empty.
///
/// Sign patterns finer than the grid (tangencies, root pairs inside one
/// step, roots hiding next to the domain edge) are not resolved.
pub fn find_roots(params: &CurveParams, left: f64, right: f64, config: &ScanConfig) -> Vec<Root> {
    let n = config.sample_count.max(2);
    let step = (right - left) / (n - 1) as f64;
    let xs: Vec<f64> = (0..n).map(|i| left + step * i as f64).collect();
    let ys: Vec<Option<f64>> = xs.iter().map(|&x| params.difference(x).value()).collect();

    let mut roots: Vec<Root> = Vec::new();
    for i in 0..n - 1 {
        let (y1, y2) = match (ys[i], ys[i + 1]) {
            (Some(y1), Some(y2)) => (y1, y2),
            // Cannot bracket across an undefined sample.
            _ => continue,
        };
        if y1 == 0.0 {
            accept(&mut roots, xs[i], params, config.dedup_tol);
        } else if y1 * y2 < 0.0 {
            let g = |x: f64| params.difference(x).value().unwrap_or(f64::NAN);
            if let Ok(r) = brent(g, xs[i], xs[i + 1], solver::DEFAULT_XTOL, solver::DEFAULT_MAX_ITER)
            {
                accept(&mut roots, r, params, config.dedup_tol);
            }
        }
    }

    roots.sort_by(|a, b| a.x.total_cmp(&b.x));
    roots
}

fn accept(roots: &mut Vec<Root>, x: f64, params: &CurveParams, dedup_tol: f64) {
    if roots.iter().all(|r| (x - r.x).abs() > dedup_tol) {
        roots.push(Root {
            x,
            y: params.exp_at(x),
        });
    }
}
