//! Trapezoidal membership curves.
//!
//! A curve rises linearly from 0 at `a` to 1 at `b`, holds 1 through `c` and falls back to 0 at
//! `d`. When `d` is omitted it collapses onto `c`, which turns the right flank into a vertical
//! drop: the curve is 1 up to `c` and 0 from `c` on. Rule consequents are built this way.

use serde::{Deserialize, Serialize};

/// Evaluates the membership degree of `x` on the curve `(a, b, c, d)`.
///
/// `d` defaults to `c`. Both outer breakpoints are exclusive (`x <= a` and `x >= d` give 0), so
/// a curve with `c == d` is already 0 at its own right end. Degenerate flanks never divide by
/// zero. The result is always within `[0, 1]`; `NaN` maps to 0.
#[must_use]
pub fn evaluate(x: f64, a: f64, b: f64, c: f64, d: Option<f64>) -> f64 {
    let d = d.unwrap_or(c);

    if x.is_nan() || x <= a || x >= d {
        return 0.0;
    }
    if b <= x && x <= c {
        return 1.0;
    }
    if x < b {
        let rise = b - a;
        return if rise > 0.0 { (x - a) / rise } else { 1.0 };
    }

    let fall = d - c;
    if fall > 0.0 { (d - x) / fall } else { 0.0 }
}

/// Breakpoints of one linguistic term or rule consequent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipFunction {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

impl MembershipFunction {
    #[must_use]
    pub const fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d: Some(d) }
    }

    /// Three-point form: the right end coincides with `c`.
    #[must_use]
    pub const fn truncated(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c, d: None }
    }

    #[must_use]
    pub fn degree(&self, x: f64) -> f64 {
        evaluate(x, self.a, self.b, self.c, self.d)
    }

    /// The effective right breakpoint.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.d.unwrap_or(self.c)
    }

    /// `true` when every breakpoint is finite and `a <= b <= c <= d`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let d = self.end();
        [self.a, self.b, self.c, d].iter().all(|v| v.is_finite())
            && self.a <= self.b
            && self.b <= self.c
            && self.c <= d
    }
}
