use crate::{
    foundation::error::DuskrResult,
    spline::{Interpolant, segment_index, validate_knots},
};

/// Monotone cubic Hermite spline (Fritsch-Carlson).
///
/// Tangents are estimated once at construction:
/// 1. interior knots take the mean of the adjacent secant slopes, boundary knots the one-sided
///    secant;
/// 2. a flat interval (zero secant) pins both of its end tangents to zero;
/// 3. every interval whose `alpha^2 + beta^2` exceeds 9 has its end tangents rescaled by
///    `3 / sqrt(alpha^2 + beta^2)`.
///
/// Step 3 reads the tangents produced by step 2 for every interval before any of them is
/// rescaled. A knot shared by two limited intervals keeps the smaller magnitude.
#[derive(Clone, Debug)]
pub struct MonotonicCubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    ms: Vec<f64>,
}

impl MonotonicCubicSpline {
    /// Build the spline over strictly increasing `xs` and matching `ys`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> DuskrResult<Self> {
        validate_knots(&xs, &ys)?;
        let n = xs.len();

        let secants: Vec<f64> = (0..n - 1)
            .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
            .collect();

        let mut ms = vec![0.0; n];
        ms[0] = secants[0];
        ms[n - 1] = secants[n - 2];
        for i in 1..n - 1 {
            ms[i] = (secants[i - 1] + secants[i]) / 2.0;
        }

        for (i, &delta) in secants.iter().enumerate() {
            if delta == 0.0 {
                ms[i] = 0.0;
                ms[i + 1] = 0.0;
            }
        }

        let limits: Vec<(usize, f64, f64)> = secants
            .iter()
            .enumerate()
            .filter(|&(_, &delta)| delta != 0.0)
            .filter_map(|(i, &delta)| {
                let alpha = ms[i] / delta;
                let beta = ms[i + 1] / delta;
                let dist = alpha * alpha + beta * beta;
                (dist > 9.0).then(|| {
                    let tau = 3.0 / dist.sqrt();
                    (i, tau * alpha * delta, tau * beta * delta)
                })
            })
            .collect();

        let mut limited = ms.clone();
        for (i, left, right) in limits {
            limited[i] = smaller_magnitude(limited[i], left);
            limited[i + 1] = smaller_magnitude(limited[i + 1], right);
        }

        Ok(Self {
            xs,
            ys,
            ms: limited,
        })
    }

    /// Knot positions.
    pub fn knots(&self) -> &[f64] {
        &self.xs
    }

    /// Final tangent at each knot.
    pub fn tangents(&self) -> &[f64] {
        &self.ms
    }

    /// Sample the spline at `x` using the cubic Hermite basis of the containing interval.
    pub fn interpolate(&self, x: f64) -> f64 {
        let i = segment_index(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        // relative to the left knot so a flat interval returns its value exactly
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (y1 - y0) * h01 + h * (h10 * self.ms[i] + h11 * self.ms[i + 1])
    }
}

impl Interpolant for MonotonicCubicSpline {
    fn interpolate(&self, x: f64) -> f64 {
        MonotonicCubicSpline::interpolate(self, x)
    }
}

fn smaller_magnitude(current: f64, candidate: f64) -> f64 {
    if candidate.abs() < current.abs() {
        candidate
    } else {
        current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spline/monotonic.rs"]
mod tests;
