use crate::{
    foundation::error::{DuskrError, DuskrResult},
    spline::{Interpolant, segment_index, validate_knots},
};

/// Boundary condition of a [`CubicSpline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Boundary {
    /// Second derivative is zero at both ends.
    #[default]
    Natural,
    /// First derivative is fixed at both ends.
    Clamped {
        /// Slope at the first knot.
        start: f64,
        /// Slope at the last knot.
        end: f64,
    },
}

impl Boundary {
    /// Clamped when both slopes are known, natural otherwise.
    pub fn from_derivatives(start: Option<f64>, end: Option<f64>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::Clamped { start, end },
            _ => Self::Natural,
        }
    }
}

/// Piecewise cubic `a + b*dx + c*dx^2 + d*dx^3`, `dx` measured from each segment's left knot.
///
/// C2-continuous through every knot. Unlike [`crate::MonotonicCubicSpline`] it may overshoot
/// between knots.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    xs: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline {
    /// Solve the tridiagonal system for `xs -> ys` under `boundary`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, boundary: Boundary) -> DuskrResult<Self> {
        validate_knots(&xs, &ys)?;
        if let Boundary::Clamped { start, end } = boundary {
            if !start.is_finite() || !end.is_finite() {
                return Err(DuskrError::spline("boundary derivatives must be finite"));
            }
        }

        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut alpha = vec![0.0; n];
        for i in 1..n - 1 {
            alpha[i] = 3.0 / h[i] * (ys[i + 1] - ys[i]) - 3.0 / h[i - 1] * (ys[i] - ys[i - 1]);
        }

        let mut l = vec![0.0; n];
        let mut mu = vec![0.0; n];
        let mut z = vec![0.0; n];
        match boundary {
            Boundary::Natural => l[0] = 1.0,
            Boundary::Clamped { start, .. } => {
                alpha[0] = 3.0 * (ys[1] - ys[0]) / h[0] - 3.0 * start;
                l[0] = 2.0 * h[0];
                mu[0] = 0.5;
                z[0] = alpha[0] / l[0];
            }
        }

        for i in 1..n - 1 {
            l[i] = 2.0 * (xs[i + 1] - xs[i - 1]) - h[i - 1] * mu[i - 1];
            mu[i] = h[i] / l[i];
            z[i] = (alpha[i] - h[i - 1] * z[i - 1]) / l[i];
        }

        let mut c = vec![0.0; n];
        if let Boundary::Clamped { end, .. } = boundary {
            alpha[n - 1] = 3.0 * end - 3.0 * (ys[n - 1] - ys[n - 2]) / h[n - 2];
            l[n - 1] = h[n - 2] * (2.0 - mu[n - 2]);
            z[n - 1] = (alpha[n - 1] - h[n - 2] * z[n - 2]) / l[n - 1];
            c[n - 1] = z[n - 1];
        }

        let mut b = vec![0.0; n - 1];
        let mut d = vec![0.0; n - 1];
        for j in (0..n - 1).rev() {
            c[j] = z[j] - mu[j] * c[j + 1];
            b[j] = (ys[j + 1] - ys[j]) / h[j] - h[j] * (c[j + 1] + 2.0 * c[j]) / 3.0;
            d[j] = (c[j + 1] - c[j]) / (3.0 * h[j]);
        }
        c.truncate(n - 1);

        let mut a = ys;
        a.truncate(n - 1);

        Ok(Self { xs, a, b, c, d })
    }

    /// Natural spline over `xs -> ys`.
    pub fn natural(xs: Vec<f64>, ys: Vec<f64>) -> DuskrResult<Self> {
        Self::new(xs, ys, Boundary::Natural)
    }

    /// Clamped spline with slope `start` at the first knot and `end` at the last one.
    pub fn clamped(xs: Vec<f64>, ys: Vec<f64>, start: f64, end: f64) -> DuskrResult<Self> {
        Self::new(xs, ys, Boundary::Clamped { start, end })
    }

    /// Knot positions.
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }

    /// Per-segment `(a, b, c, d)` coefficients.
    pub fn coefficients(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        (0..self.a.len()).map(|i| (self.a[i], self.b[i], self.c[i], self.d[i]))
    }

    /// Evaluate the containing segment's polynomial at `x`.
    pub fn interpolate(&self, x: f64) -> f64 {
        let i = segment_index(&self.xs, x);
        let dx = x - self.xs[i];
        self.a[i] + dx * (self.b[i] + dx * (self.c[i] + dx * self.d[i]))
    }

    /// First derivative as a spline over the same knots (one polynomial order lower).
    pub fn derivative(&self) -> Self {
        Self {
            xs: self.xs.clone(),
            a: self.b.clone(),
            b: self.c.iter().map(|c| 2.0 * c).collect(),
            c: self.d.iter().map(|d| 3.0 * d).collect(),
            d: vec![0.0; self.d.len()],
        }
    }
}

impl Interpolant for CubicSpline {
    fn interpolate(&self, x: f64) -> f64 {
        CubicSpline::interpolate(self, x)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spline/cubic.rs"]
mod tests;
