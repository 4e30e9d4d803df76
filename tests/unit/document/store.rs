use super::*;
use crate::document::settings::DevelopSettings;

#[test]
fn crop_defaults_are_full_frame() {
    let d = CropDefaults::default();
    assert_eq!((d.top, d.left, d.bottom, d.right), (0.0, 0.0, 1.0, 1.0));
    assert_eq!(d.angle, 0.0);
    assert_eq!(d.constrain_to_warp, 1.0);
}

#[test]
fn enable_crop_writes_defaults_when_disabled() {
    let mut doc = DevelopSettings::new().with_attribute(HAS_CROP, false);
    assert!(!doc.has_crop());

    doc.enable_crop(&CropDefaults::default());
    assert!(doc.has_crop());
    assert_eq!(doc.attribute(CROP_TOP), Some(AttributeValue::Number(0.0)));
    assert_eq!(doc.attribute(CROP_BOTTOM), Some(AttributeValue::Number(1.0)));
    assert_eq!(doc.attribute(CROP_RIGHT), Some(AttributeValue::Number(1.0)));
    assert_eq!(
        doc.attribute(CROP_CONSTRAIN_TO_WARP),
        Some(AttributeValue::Number(1.0))
    );
}

#[test]
fn enable_crop_keeps_an_existing_rectangle() {
    let mut doc = DevelopSettings::new()
        .with_attribute(HAS_CROP, true)
        .with_attribute(CROP_TOP, 0.2)
        .with_attribute(CROP_BOTTOM, 0.9);
    doc.enable_crop(&CropDefaults::default());
    assert_eq!(doc.attribute(CROP_TOP), Some(AttributeValue::Number(0.2)));
    assert_eq!(doc.attribute(CROP_BOTTOM), Some(AttributeValue::Number(0.9)));
}

#[test]
fn raw_filename_round_trips() {
    let mut doc = DevelopSettings::new();
    assert_eq!(doc.raw_filename(), None);
    doc.set_raw_filename("IMG_0042.CR2");
    assert_eq!(doc.raw_filename().as_deref(), Some("IMG_0042.CR2"));
}

#[test]
fn numeric_raw_filenames_come_back_as_text() {
    let doc = DevelopSettings::new().with_attribute(RAW_FILE_NAME, 1234.0);
    assert_eq!(doc.raw_filename().as_deref(), Some("1234"));
}
