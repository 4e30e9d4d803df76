use crate::foundation::{
    curve::{CurveChannel, ToneCurve},
    error::DuskrResult,
    value::AttributeValue,
};

/// Attribute flagging a document as the result of a development.
pub const HAS_SETTINGS: &str = "HasSettings";
/// Attribute holding the raw file the settings apply to.
pub const RAW_FILE_NAME: &str = "RawFileName";
/// Attribute enabling the crop rectangle.
pub const HAS_CROP: &str = "HasCrop";
/// Crop rectangle top edge, as a fraction of the frame height.
pub const CROP_TOP: &str = "CropTop";
/// Crop rectangle left edge, as a fraction of the frame width.
pub const CROP_LEFT: &str = "CropLeft";
/// Crop rectangle bottom edge, as a fraction of the frame height.
pub const CROP_BOTTOM: &str = "CropBottom";
/// Crop rectangle right edge, as a fraction of the frame width.
pub const CROP_RIGHT: &str = "CropRight";
/// Crop rotation in degrees.
pub const CROP_ANGLE: &str = "CropAngle";
/// Whether the crop is constrained to the warped image.
pub const CROP_CONSTRAIN_TO_WARP: &str = "CropConstrainToWarp";

/// Crop values written into a document that gets cropping force-enabled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CropDefaults {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Right edge.
    pub right: f64,
    /// Rotation.
    pub angle: f64,
    /// Constrain-to-warp flag, stored numerically.
    pub constrain_to_warp: f64,
}

impl Default for CropDefaults {
    fn default() -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            bottom: 1.0,
            right: 1.0,
            angle: 0.0,
            constrain_to_warp: 1.0,
        }
    }
}

/// Typed view over one develop-settings document.
///
/// This is the only surface the interpolation engine touches: named settings, per-channel tone
/// curves, the crop switch and the raw filename. `Clone` must produce an independently owned
/// copy.
pub trait AttributeStore: Clone {
    /// `true` when the document is the result of a development rather than a blank default.
    fn has_settings(&self) -> bool;

    /// Coerced value of setting `name`, if present.
    fn attribute(&self, name: &str) -> Option<AttributeValue>;

    /// Overwrite (or create) setting `name`.
    fn set_attribute(&mut self, name: &str, value: AttributeValue);

    /// Names of every setting held by the document, in a stable order.
    fn attribute_names(&self) -> Vec<String>;

    /// Tone curve for `channel`, if the document carries one.
    fn curve(&self, channel: CurveChannel) -> Option<ToneCurve>;

    /// Replace the tone curve for `channel`.
    fn set_curve(&mut self, channel: CurveChannel, curve: ToneCurve);

    /// Raw file the settings apply to.
    fn raw_filename(&self) -> Option<String> {
        match self.attribute(RAW_FILE_NAME)? {
            AttributeValue::Text(name) => Some(name),
            other => Some(other.to_text()),
        }
    }

    /// Point the settings at another raw file.
    fn set_raw_filename(&mut self, name: &str) {
        self.set_attribute(RAW_FILE_NAME, AttributeValue::Text(name.to_owned()));
    }

    /// `true` when cropping is enabled.
    fn has_crop(&self) -> bool {
        matches!(self.attribute(HAS_CROP), Some(AttributeValue::Boolean(true)))
    }

    /// Enable cropping with a full-frame rectangle. No-op when cropping is already enabled.
    fn enable_crop(&mut self, defaults: &CropDefaults) {
        if self.has_crop() {
            return;
        }
        self.set_attribute(HAS_CROP, AttributeValue::Boolean(true));
        self.set_attribute(CROP_TOP, AttributeValue::Number(defaults.top));
        self.set_attribute(CROP_LEFT, AttributeValue::Number(defaults.left));
        self.set_attribute(CROP_BOTTOM, AttributeValue::Number(defaults.bottom));
        self.set_attribute(CROP_RIGHT, AttributeValue::Number(defaults.right));
        self.set_attribute(CROP_ANGLE, AttributeValue::Number(defaults.angle));
        self.set_attribute(
            CROP_CONSTRAIN_TO_WARP,
            AttributeValue::Number(defaults.constrain_to_warp),
        );
    }
}

/// Conversion between a store and its textual document form.
pub trait DocumentCodec: Sized {
    /// Parse document text.
    fn decode(text: &str) -> DuskrResult<Self>;

    /// Render back to document text.
    fn encode(&self) -> DuskrResult<String>;
}

#[cfg(test)]
#[path = "../../tests/unit/document/store.rs"]
mod tests;
