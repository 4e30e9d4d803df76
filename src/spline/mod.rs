//! Cubic spline interpolators over `(x, y)` knots.
//!
//! Two interpolators share one contract ([`Interpolant`]):
//! - [`MonotonicCubicSpline`]: Fritsch-Carlson Hermite spline, never overshoots monotone data.
//! - [`CubicSpline`]: classical C2 spline with natural or clamped boundaries.

pub(crate) mod cubic;
pub(crate) mod monotonic;

use crate::foundation::error::{DuskrError, DuskrResult};

pub use cubic::{Boundary, CubicSpline};
pub use monotonic::MonotonicCubicSpline;

/// A curve that can be sampled at any `x`.
///
/// Sampling outside the knot range evaluates the boundary segment's polynomial.
pub trait Interpolant {
    /// Sample the curve at `x`.
    fn interpolate(&self, x: f64) -> f64;
}

/// Interpolator used by the orchestrator for attributes and curve slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineKind {
    /// [`MonotonicCubicSpline`].
    #[default]
    Monotonic,
    /// [`CubicSpline`] with natural boundaries.
    Natural,
}

impl SplineKind {
    /// Build the selected interpolator over `xs -> ys`.
    pub fn build(self, xs: Vec<f64>, ys: Vec<f64>) -> DuskrResult<Box<dyn Interpolant>> {
        Ok(match self {
            Self::Monotonic => Box::new(MonotonicCubicSpline::new(xs, ys)?),
            Self::Natural => Box::new(CubicSpline::new(xs, ys, Boundary::Natural)?),
        })
    }
}

/// Check the knot preconditions shared by every interpolator.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64]) -> DuskrResult<()> {
    if xs.len() != ys.len() {
        return Err(DuskrError::spline(format!(
            "knot length mismatch: {} x values, {} y values",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(DuskrError::spline(format!(
            "at least 2 knots required, {} given",
            xs.len()
        )));
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(DuskrError::spline("knots must be finite"));
    }
    if !xs.windows(2).all(|w| w[0] < w[1]) {
        return Err(DuskrError::spline("x values must be strictly increasing"));
    }
    Ok(())
}

/// Index of the segment holding `x`: the rightmost knot `<= x`, clamped to a valid segment.
pub(crate) fn segment_index(xs: &[f64], x: f64) -> usize {
    let at_or_below = xs.partition_point(|&k| k <= x);
    at_or_below.saturating_sub(1).min(xs.len() - 2)
}

#[cfg(test)]
#[path = "../../tests/unit/spline/mod.rs"]
mod tests;
