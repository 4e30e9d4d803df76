use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    document::store::CropDefaults,
    foundation::{
        curve::CurveChannel,
        error::{DuskrError, DuskrResult},
    },
    interpolate::curves::{CurvePadding, CurveSampling},
    spline::SplineKind,
};

/// Settings that are never interpolated by default.
pub const DEFAULT_EXCLUDED_ATTRIBUTES: [&str; 2] = ["Version", "ProcessVersion"];

/// Options controlling [`crate::Interpolator`] behavior.
///
/// Every field has a default, so a JSON config file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolatorConfig {
    /// Numeric settings left untouched on intermediates (version identifiers).
    pub excluded_attributes: BTreeSet<String>,
    /// Rectangle written into control points that get cropping force-enabled.
    pub crop_defaults: CropDefaults,
    /// Interpolator for settings and curve slots.
    pub spline: SplineKind,
    /// How shorter curves are padded to the common point count.
    pub curve_padding: CurvePadding,
    /// Round sampled curve coordinates to integers. A sampled curve whose points would round
    /// onto a single `x` keeps its fractional coordinates instead.
    pub round_curve_points: bool,
    /// Clamp sampled curve coordinates into `[0, 255]` instead of failing.
    pub clamp_curve_points: bool,
    /// Curve channels to interpolate, in processing order.
    pub channels: Vec<CurveChannel>,
}

impl Default for InterpolatorConfig {
    fn default() -> Self {
        Self {
            excluded_attributes: DEFAULT_EXCLUDED_ATTRIBUTES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            crop_defaults: CropDefaults::default(),
            spline: SplineKind::default(),
            curve_padding: CurvePadding::default(),
            round_curve_points: true,
            clamp_curve_points: false,
            channels: CurveChannel::ALL.to_vec(),
        }
    }
}

impl InterpolatorConfig {
    /// Parse and validate a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DuskrResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| DuskrError::config(format!("parse interpolator config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DuskrResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DuskrError::config(format!("open interpolator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject crop defaults that are non-finite or whose rectangle leaves `[0, 1]`.
    pub fn validate(&self) -> DuskrResult<()> {
        let crop = &self.crop_defaults;
        let rect = [
            ("top", crop.top),
            ("left", crop.left),
            ("bottom", crop.bottom),
            ("right", crop.right),
        ];
        for (name, v) in rect {
            if !(0.0..=1.0).contains(&v) {
                return Err(DuskrError::config(format!(
                    "crop_defaults.{name} must be within [0, 1], got {v}"
                )));
            }
        }
        if !crop.angle.is_finite() || !crop.constrain_to_warp.is_finite() {
            return Err(DuskrError::config(
                "crop_defaults.angle and crop_defaults.constrain_to_warp must be finite",
            ));
        }
        Ok(())
    }

    pub(crate) fn curve_sampling(&self) -> CurveSampling {
        CurveSampling {
            round: self.round_curve_points,
            clamp: self.clamp_curve_points,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interpolate/config.rs"]
mod tests;
