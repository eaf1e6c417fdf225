//! Display-window derivation and dense curve sampling

use crate::curves::CurveParams;
use crate::roots::Root;
use serde::Serialize;

/// Dense plotting grid size, independent of the scan grid.
pub const PLOT_SAMPLES: usize = 4_001;
/// Half-width of the window framed around a single root.
pub const SINGLE_ROOT_PAD: f64 = 5.0;

/// Axis ranges to display. Both ranges always have positive width.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ViewWindow {
    /// Left edge of the x-range
    pub x_min: f64,
    /// Right edge of the x-range
    pub x_max: f64,
    /// Bottom edge of the y-range
    pub y_min: f64,
    /// Top edge of the y-range
    pub y_max: f64,
}

/// Sampled point series for both curves over the display x-range.
///
/// The exponential series covers the full range; the logarithmic series
/// holds only points with `x + e > 0`, so the two may differ in length
/// and the rendered log curve stops at its true domain boundary.
#[derive(Clone, Debug, Default)]
pub struct CurveSeries {
    /// Exponential curve points, unmasked
    pub exp: Vec<(f64, f64)>,
    /// Logarithmic curve points, masked to the log domain
    pub log: Vec<(f64, f64)>,
}

/// X-range framing the roots, or the search interval when there are
/// none.
///
/// One root is framed with a fixed pad; two or more get a pad of 30% of
/// their span, at least 1.
pub fn x_range(roots: &[Root], search: (f64, f64)) -> (f64, f64) {
    match roots {
        [] => search,
        [only] => (only.x - SINGLE_ROOT_PAD, only.x + SINGLE_ROOT_PAD),
        [first, .., last] => {
            let span = last.x - first.x;
            let pad = (0.3 * span).max(1.0);
            (first.x - pad, last.x + pad)
        }
    }
}

/// Computes the display window and the sampled curves for it.
///
/// The y-range covers the exponential values on the log-defined
/// subrange together with all logarithmic values, padded by 10% (1.0
/// when the spread is degenerate). A window entirely outside the log
/// domain falls back to framing the exponential curve alone.
pub fn frame(
    params: &CurveParams,
    roots: &[Root],
    search: (f64, f64),
    plot_samples: usize,
) -> (ViewWindow, CurveSeries) {
    let (x_min, x_max) = x_range(roots, search);
    let n = plot_samples.max(2);
    let step = (x_max - x_min) / (n - 1) as f64;

    let mut series = CurveSeries::default();
    let mut y_vals: Vec<f64> = Vec::new();
    for i in 0..n {
        let x = x_min + step * i as f64;
        let ey = params.exp_at(x);
        series.exp.push((x, ey));
        if let Some(ly) = params.log_at(x).value() {
            series.log.push((x, ly));
            y_vals.push(ey);
            y_vals.push(ly);
        }
    }
    if y_vals.is_empty() {
        y_vals.extend(series.exp.iter().map(|&(_, y)| y));
    }

    let y_lo = y_vals.iter().copied().fold(f64::INFINITY, f64::min);
    let y_hi = y_vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = if y_hi > y_lo { 0.1 * (y_hi - y_lo) } else { 1.0 };

    let window = ViewWindow {
        x_min,
        x_max,
        y_min: y_lo - pad,
        y_max: y_hi + pad,
    };
    (window, series)
}
