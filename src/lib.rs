//! Duskr interpolates photo develop settings across a timelapse sequence.
//!
//! A handful of frames in a sequence are developed by hand (the keyframes, or control points).
//! Duskr synthesizes develop settings for every frame in between by fitting a spline through the
//! keyframe values of each numeric setting and of each tone-curve point, so exposure, white
//! balance and curves drift smoothly from one keyframe to the next.
//!
//! # Pipeline overview
//!
//! 1. **Register**: `filename + document -> ControlPoint` (sequence number parsed from the name)
//! 2. **Validate**: at least two keyframes sharing one filename prefix and suffix, all developed
//! 3. **Prepare**: working copies of the keyframes, with cropping propagated when any keyframe crops
//! 4. **Interpolate**: numeric settings and tone curves sampled at every missing sequence number
//! 5. **Publish**: one [`Collection`] entry per sequence number, keyframes included
//!
//! The default interpolator is [`MonotonicCubicSpline`], which never overshoots monotone
//! keyframe data and keeps flat stretches flat.
//!
//! Documents are abstracted behind [`AttributeStore`]; [`DevelopSettings`] is the bundled JSON
//! document.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;
mod interpolate;

pub mod spline;

pub use document::settings::DevelopSettings;
pub use document::store::{
    AttributeStore, CROP_ANGLE, CROP_BOTTOM, CROP_CONSTRAIN_TO_WARP, CROP_LEFT, CROP_RIGHT,
    CROP_TOP, CropDefaults, DocumentCodec, HAS_CROP, HAS_SETTINGS, RAW_FILE_NAME,
};
pub use foundation::curve::{CURVE_MAX, CURVE_MIN, CurveChannel, CurvePoint, ToneCurve, canonicalize};
pub use foundation::error::{DuskrError, DuskrResult};
pub use foundation::sequence::{SequenceInfo, SequenceNaming};
pub use foundation::value::{AttributeValue, NUMBER_PRECISION, format_number};
pub use interpolate::collection::{Collection, CollectionEntry};
pub use interpolate::config::{DEFAULT_EXCLUDED_ATTRIBUTES, InterpolatorConfig};
pub use interpolate::curves::{CurvePadding, CurveSampling, interpolate_channel, pad_curve};
pub use interpolate::engine::Interpolator;
pub use interpolate::registry::{ControlPoint, ControlPointRegistry};
pub use spline::{Boundary, CubicSpline, Interpolant, MonotonicCubicSpline, SplineKind};
