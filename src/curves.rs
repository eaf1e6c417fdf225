//! Curve parameters and evaluation of the exponential/logarithmic pair

use serde::{Deserialize, Serialize};

/// Result of evaluating a function with a restricted domain.
///
/// The logarithmic branch only exists where `x + e > 0`; evaluation
/// outside that region yields [`Eval::Undefined`] rather than NaN so the
/// scan can skip such points without inspecting float payloads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eval {
    /// The function is defined at the point and takes this value.
    Defined(f64),
    /// The point lies outside the function's domain.
    Undefined,
}

impl Eval {
    /// Returns the value if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            Eval::Defined(v) => Some(v),
            Eval::Undefined => None,
        }
    }

    /// True if the point was inside the domain.
    pub fn is_defined(self) -> bool {
        matches!(self, Eval::Defined(_))
    }
}

/// Parameters of the curve pair y = a^(x+b) + c and y = p·log_d(x+e) + f.
///
/// Constraints a > 0, a ≠ 1, d > 0, d ≠ 1 are the caller's responsibility
/// (the CLI validates them before constructing this).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CurveParams {
    /// Exponential base
    pub a: f64,
    /// Exponential horizontal shift
    pub b: f64,
    /// Exponential vertical shift
    pub c: f64,
    /// Logarithm coefficient
    pub p: f64,
    /// Logarithm base
    pub d: f64,
    /// Logarithm horizontal shift
    pub e: f64,
    /// Logarithm vertical shift
    pub f: f64,
}

impl CurveParams {
    /// Exponential branch a^(x+b) + c, defined for all x.
    pub fn exp_at(&self, x: f64) -> f64 {
        self.a.powf(x + self.b) + self.c
    }

    /// Logarithmic branch p·log_d(x+e) + f, defined for x + e > 0.
    pub fn log_at(&self, x: f64) -> Eval {
        if x + self.e <= 0.0 {
            return Eval::Undefined;
        }
        Eval::Defined(self.p * (x + self.e).ln() / self.d.ln() + self.f)
    }

    /// Difference g(x) = exponential − logarithmic; its zeros are the
    /// intersection points.
    pub fn difference(&self, x: f64) -> Eval {
        match self.log_at(x) {
            Eval::Defined(log) => Eval::Defined(self.exp_at(x) - log),
            Eval::Undefined => Eval::Undefined,
        }
    }

    /// Left edge of the logarithm's domain (exclusive): x > −e.
    pub fn log_domain_start(&self) -> f64 {
        -self.e
    }
}
