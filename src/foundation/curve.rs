use crate::foundation::error::{DuskrError, DuskrResult};

/// Lowest coordinate a tone curve point may take.
pub const CURVE_MIN: f64 = 0.0;
/// Highest coordinate a tone curve point may take.
pub const CURVE_MAX: f64 = 255.0;

/// One `(input, output)` brightness mapping point. Serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct CurvePoint {
    /// Input level.
    pub x: f64,
    /// Output level.
    pub y: f64,
}

impl CurvePoint {
    /// Build a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn in_range(self) -> bool {
        (CURVE_MIN..=CURVE_MAX).contains(&self.x) && (CURVE_MIN..=CURVE_MAX).contains(&self.y)
    }
}

impl From<[f64; 2]> for CurvePoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<CurvePoint> for [f64; 2] {
    fn from(p: CurvePoint) -> Self {
        [p.x, p.y]
    }
}

/// Color channel a tone curve applies to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CurveChannel {
    /// Luminance curve applied to all channels.
    Composite,
    /// Red channel curve.
    Red,
    /// Green channel curve.
    Green,
    /// Blue channel curve.
    Blue,
}

impl CurveChannel {
    /// Every channel, in processing order.
    pub const ALL: [CurveChannel; 4] = [Self::Composite, Self::Red, Self::Green, Self::Blue];

    /// Develop-settings key holding this channel's curve.
    pub fn document_key(self) -> &'static str {
        match self {
            Self::Composite => "ToneCurvePV2012",
            Self::Red => "ToneCurvePV2012Red",
            Self::Green => "ToneCurvePV2012Green",
            Self::Blue => "ToneCurvePV2012Blue",
        }
    }
}

impl std::fmt::Display for CurveChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Composite => "composite",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        })
    }
}

/// A validated tone curve in canonical form.
///
/// Points are sorted ascending by `x` with duplicate `x` values collapsed to their first
/// occurrence. A curve always holds at least two finite points inside `[0, 255]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct ToneCurve {
    points: Vec<CurvePoint>,
}

impl ToneCurve {
    /// Canonicalize and validate `points`.
    ///
    /// Fails with [`DuskrError::InvalidCurveData`] when fewer than two distinct-`x` points
    /// remain, or when any coordinate is non-finite or outside `[0, 255]`.
    pub fn new(mut points: Vec<CurvePoint>) -> DuskrResult<Self> {
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(DuskrError::invalid_curve(format!(
                "non-numeric point ({}, {})",
                p.x, p.y
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.in_range()) {
            return Err(DuskrError::invalid_curve(format!(
                "point ({}, {}) outside [{CURVE_MIN}, {CURVE_MAX}]",
                p.x, p.y
            )));
        }
        canonicalize(&mut points);
        if points.len() < 2 {
            return Err(DuskrError::invalid_curve(format!(
                "a curve needs at least 2 distinct points, {} given",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// The straight `[(0, 0), (255, 255)]` curve.
    pub fn identity() -> Self {
        Self {
            points: vec![
                CurvePoint::new(CURVE_MIN, CURVE_MIN),
                CurvePoint::new(CURVE_MAX, CURVE_MAX),
            ],
        }
    }

    /// Canonical points.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the curve holds no points, which validation rules out.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<CurvePoint>> for ToneCurve {
    type Error = DuskrError;

    fn try_from(points: Vec<CurvePoint>) -> DuskrResult<Self> {
        Self::new(points)
    }
}

impl From<ToneCurve> for Vec<CurvePoint> {
    fn from(curve: ToneCurve) -> Self {
        curve.points
    }
}

/// Sort ascending by `x` (stable) and drop every point whose `x` repeats an earlier one.
pub fn canonicalize(points: &mut Vec<CurvePoint>) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    points.dedup_by(|later, earlier| later.x == earlier.x);
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/curve.rs"]
mod tests;
