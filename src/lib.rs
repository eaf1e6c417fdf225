#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(missing_docs)]
//! Library entry for the exponential/logarithmic intersection finder.
//!
//! Locates the real intersection points of y = a^(x+b) + c and
//! y = p·log_d(x+e) + f over a bounded search interval, then derives a
//! display window that frames them.
//!
//! # Modules
//! - [`curves`]: Curve parameters & restricted-domain evaluation
//! - [`solver`]: Brent bracketed root refinement
//! - [`roots`]: Interval policy, sign-change scan, dedup
//! - [`framing`]: Display window & dense curve sampling
//! - [`report`]: Scan narrative plus CSV/JSON output
//! - [`plot`]: Visualization (optional in binaries)

/// Curve parameters and restricted-domain evaluation
pub mod curves;

/// Display window derivation and dense curve sampling
pub mod framing;

/// Visualization utilities for the intersection chart
pub mod plot;

/// Scan narrative and tabular/JSON output
pub mod report;

/// Search-interval policy and the sign-change scan
pub mod roots;

/// Brent bracketed root refinement
pub mod solver;
