//! Tone curve interpolation across control points.
//!
//! Curves at different keyframes rarely have the same number of points. Every curve is first
//! padded to the largest point count `M` so that slot `i` exists everywhere, then each slot's
//! `x` and `y` coordinates get their own spline over the sequence numbers. Sampled curves are
//! sorted and deduplicated by `x`, which also removes the duplicates introduced by padding.

use crate::{
    foundation::{
        curve::{CURVE_MAX, CURVE_MIN, CurveChannel, CurvePoint, ToneCurve},
        error::{DuskrError, DuskrResult},
    },
    spline::SplineKind,
};

/// How a short curve is padded up to the common point count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvePadding {
    /// Duplicate points in place, spread evenly along the curve. Endpoints stay aligned with
    /// endpoints and order is preserved.
    #[default]
    Spread,
    /// Append copies of the last point.
    RepeatLast,
}

/// Post-processing applied to sampled curve coordinates before validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveSampling {
    /// Round coordinates to integers.
    pub round: bool,
    /// Clamp coordinates into `[0, 255]`.
    pub clamp: bool,
}

impl CurveSampling {
    fn apply(self, v: f64) -> f64 {
        let v = if self.round { v.round() } else { v };
        if self.clamp {
            v.clamp(CURVE_MIN, CURVE_MAX)
        } else {
            v
        }
    }

    /// Post-process one sampled curve. Rounding is dropped for a curve whose points would
    /// collapse onto fewer than two distinct `x` values.
    fn finish(self, raw: &[CurvePoint]) -> Vec<CurvePoint> {
        let sample = |s: Self| -> Vec<CurvePoint> {
            raw.iter()
                .map(|p| CurvePoint::new(s.apply(p.x), s.apply(p.y)))
                .collect()
        };
        let points = sample(self);
        if !self.round || distinct_x(&points) >= 2 || distinct_x(raw) < 2 {
            return points;
        }
        tracing::debug!("rounding would merge curve points, keeping fractional samples");
        sample(Self {
            round: false,
            ..self
        })
    }
}

fn distinct_x(points: &[CurvePoint]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    xs.len()
}

/// Pad `points` to exactly `target` points with duplicates of existing points.
///
/// Curves already holding `target` points or more are returned unchanged.
pub fn pad_curve(points: &[CurvePoint], target: usize, padding: CurvePadding) -> Vec<CurvePoint> {
    let count = points.len();
    if count >= target || count == 0 {
        return points.to_vec();
    }
    match padding {
        CurvePadding::Spread => {
            // slot j takes source round(j * (count - 1) / (target - 1))
            let span = target - 1;
            (0..target)
                .map(|j| points[(2 * j * (count - 1) + span) / (2 * span)])
                .collect()
        }
        CurvePadding::RepeatLast => {
            let last = points[count - 1];
            points
                .iter()
                .copied()
                .chain(std::iter::repeat_n(last, target - count))
                .collect()
        }
    }
}

/// Interpolate one channel's curve at every `target` sequence number.
///
/// `keys` are the control point sequence numbers (ascending) and `curves` their curves for this
/// channel, in the same order. Returns one validated curve per target.
pub fn interpolate_channel(
    channel: CurveChannel,
    keys: &[u64],
    curves: &[ToneCurve],
    targets: &[u64],
    spline: SplineKind,
    padding: CurvePadding,
    sampling: CurveSampling,
) -> DuskrResult<Vec<ToneCurve>> {
    let slots = curves.iter().map(ToneCurve::len).max().unwrap_or(0);
    let padded: Vec<Vec<CurvePoint>> = curves
        .iter()
        .map(|c| pad_curve(c.points(), slots, padding))
        .collect();
    tracing::debug!(%channel, slots, "interpolating curve slots");

    let xs: Vec<f64> = keys.iter().map(|&k| k as f64).collect();
    let mut sampled = vec![Vec::with_capacity(slots); targets.len()];
    for slot in 0..slots {
        let slot_x = spline.build(xs.clone(), padded.iter().map(|c| c[slot].x).collect())?;
        let slot_y = spline.build(xs.clone(), padded.iter().map(|c| c[slot].y).collect())?;
        for (points, &target) in sampled.iter_mut().zip(targets) {
            let at = target as f64;
            points.push(CurvePoint::new(slot_x.interpolate(at), slot_y.interpolate(at)));
        }
    }

    sampled
        .into_iter()
        .zip(targets)
        .map(|(points, &target)| {
            ToneCurve::new(sampling.finish(&points)).map_err(|e| match e {
                DuskrError::InvalidCurveData(msg) => DuskrError::invalid_curve(format!(
                    "{channel} curve at sequence {target}: {msg}"
                )),
                other => other,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/interpolate/curves.rs"]
mod tests;
