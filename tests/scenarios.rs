use approx::assert_relative_eq;
use explog::curves::{CurveParams, Eval};
use explog::framing::{frame, x_range};
use explog::roots::{
    clips_log_domain, find_roots, IntervalError, IntervalPolicy, Root, ScanConfig,
};

fn params(a: f64, b: f64, c: f64, p: f64, d: f64, e: f64, f: f64) -> CurveParams {
    CurveParams { a, b, c, p, d, e, f }
}

#[test]
fn decaying_exponential_crosses_log_once() {
    // 0.5^x falls through log10(x) exactly once, near x = 1.87
    let params = params(0.5, 0.0, 0.0, 1.0, 10.0, 0.0, 0.0);
    let policy = IntervalPolicy::Auto;
    let (left, right) = policy.resolve(&params).unwrap();
    assert_relative_eq!(left, 1e-4);
    assert_relative_eq!(right, 50.0);

    let roots = find_roots(&params, left, right, &policy.scan_config());
    assert_eq!(roots.len(), 1);

    let r = roots[0];
    assert!(r.x > 1.8 && r.x < 1.9, "root at {}", r.x);
    let residual = params.difference(r.x).value().unwrap();
    assert!(residual.abs() < 1e-8);
    assert_relative_eq!(r.y, params.exp_at(r.x));
}

#[test]
fn window_clipped_by_log_domain_warns_and_masks() {
    // with e = 0 the whole left half of [-5, 5] is outside the log domain
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, 0.0, 0.0);
    let policy = IntervalPolicy::Window {
        min: -5.0,
        max: 5.0,
    };
    let (left, right) = policy.resolve(&params).unwrap();
    assert!(clips_log_domain(&params, left, right));

    // the scan skips the undefined region instead of failing
    let roots = find_roots(&params, left, right, &policy.scan_config());
    assert!(roots.is_empty());

    let (window, series) = frame(&params, &roots, (left, right), 2_001);
    assert_eq!(window.x_min, -5.0);
    assert_eq!(window.x_max, 5.0);
    assert_eq!(series.exp.len(), 2_001);
    assert!(!series.log.is_empty());
    assert!(series.log.iter().all(|&(x, _)| x > 0.0));
    assert!(series.log.len() < series.exp.len());
}

#[test]
fn shifted_exponential_crosses_log_twice() {
    // 2^x - 3 meets log2(x) on the way down and again on the way up at x = 2
    let params = params(2.0, 0.0, -3.0, 1.0, 2.0, 0.0, 0.0);
    let policy = IntervalPolicy::Auto;
    let (left, right) = policy.resolve(&params).unwrap();

    let roots = find_roots(&params, left, right, &policy.scan_config());
    assert_eq!(roots.len(), 2);

    let (r1, r2) = (roots[0], roots[1]);
    assert!(r1.x > 0.25 && r1.x < 0.31, "first root at {}", r1.x);
    assert_relative_eq!(r2.x, 2.0, epsilon = 1e-6);
    for r in &roots {
        let residual = params.difference(r.x).value().unwrap();
        assert!(residual.abs() < 1e-8);
    }

    // span < 10/3, so the minimum pad of 1.0 wins
    let (lo, hi) = x_range(&roots, (left, right));
    assert_relative_eq!(lo, r1.x - 1.0);
    assert_relative_eq!(hi, r2.x + 1.0);
}

#[test]
fn no_crossing_falls_back_to_search_interval() {
    // 2^x stays above log10(x) everywhere (minimum gap ~1.7 near x = 0.45)
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, 0.0, 0.0);
    let policy = IntervalPolicy::Auto;
    let (left, right) = policy.resolve(&params).unwrap();

    let roots = find_roots(&params, left, right, &policy.scan_config());
    assert!(roots.is_empty());

    let (window, _) = frame(&params, &roots, (left, right), 2_001);
    assert_eq!(window.x_min, left);
    assert_eq!(window.x_max, right);
    assert!(window.y_max > window.y_min);
}

#[test]
fn exact_grid_zero_is_recorded_without_a_sign_change() {
    // g(1) = 2^1 - (log2(1) + 2) = 0 exactly, and the grid starts at 1.0;
    // a second crossing sits just right of the dip at x ~ 1.047
    let params = params(2.0, 0.0, 0.0, 1.0, 2.0, 0.0, 2.0);
    let config = ScanConfig {
        sample_count: 4_001,
        dedup_tol: 1e-6,
    };
    let roots = find_roots(&params, 1.0, 2.0, &config);
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[0].x, 1.0);
    assert_eq!(roots[0].y, 2.0);
    assert!(roots[1].x > 1.02 && roots[1].x < 1.07, "root at {}", roots[1].x);
    let residual = params.difference(roots[1].x).value().unwrap();
    assert!(residual.abs() < 1e-8);
}

#[test]
fn difference_is_undefined_left_of_the_log_domain() {
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, -1.5, 0.0);
    assert_eq!(params.difference(1.0), Eval::Undefined);
    assert_eq!(params.difference(1.5), Eval::Undefined);
    assert!(params.difference(1.5 + 1e-9).is_defined());
    assert_eq!(params.log_domain_start(), 1.5);
}

#[test]
fn reversed_or_empty_window_is_rejected() {
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, 0.0, 0.0);
    for (min, max) in [(5.0, -5.0), (3.0, 3.0)] {
        let err = IntervalPolicy::Window { min, max }
            .resolve(&params)
            .unwrap_err();
        assert!(matches!(err, IntervalError::InvalidWindow { .. }));
    }
}

#[test]
fn auto_interval_fails_when_log_domain_starts_past_the_limit() {
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, -60.0, 0.0);
    let err = IntervalPolicy::Auto.resolve(&params).unwrap_err();
    assert!(matches!(err, IntervalError::DomainOutOfRange { .. }));
}

#[test]
fn auto_interval_hugs_the_log_domain_boundary() {
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, -1.0, 0.0);
    let (left, right) = IntervalPolicy::Auto.resolve(&params).unwrap();
    assert_relative_eq!(left, 1.0 + 1e-4);
    assert_relative_eq!(right, 50.0);
}

#[test]
fn single_root_window_uses_the_fixed_pad() {
    let roots = [Root { x: 3.0, y: 1.0 }];
    let (lo, hi) = x_range(&roots, (-50.0, 50.0));
    assert_eq!(lo, -2.0);
    assert_eq!(hi, 8.0);
}

#[test]
fn wide_root_spans_use_proportional_padding() {
    let roots = [Root { x: 0.0, y: 0.0 }, Root { x: 10.0, y: 0.0 }];
    let (lo, hi) = x_range(&roots, (-50.0, 50.0));
    assert_relative_eq!(lo, -3.0);
    assert_relative_eq!(hi, 13.0);
}

#[test]
fn fully_masked_window_frames_the_exponential_alone() {
    // nothing in [-10, -5] is inside the log domain with e = 0
    let params = params(2.0, 0.0, 0.0, 1.0, 10.0, 0.0, 0.0);
    let (window, series) = frame(&params, &[], (-10.0, -5.0), 101);
    assert!(series.log.is_empty());
    assert_eq!(series.exp.len(), 101);
    assert!(window.y_max > window.y_min);
    // exponential values over the range sit inside the padded y-range
    for &(_, y) in &series.exp {
        assert!(y > window.y_min && y < window.y_max);
    }
}
