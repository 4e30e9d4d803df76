use super::*;
use crate::foundation::curve::CurvePoint;

const DOC: &str = r#"{
  "attributes": {
    "HasSettings": "True",
    "Exposure2012": "+0.35",
    "WhiteBalance": "As Shot",
    "Version": "11.0"
  },
  "tone_curves": {
    "composite": [[0, 0], [128, 140], [255, 255]],
    "red": [[255, 255], [0, 10]]
  }
}"#;

#[test]
fn decode_coerces_attributes() {
    let doc = DevelopSettings::decode(DOC).unwrap();
    assert!(doc.has_settings());
    assert_eq!(
        doc.attribute("Exposure2012"),
        Some(AttributeValue::Number(0.35))
    );
    assert_eq!(
        doc.attribute("WhiteBalance"),
        Some(AttributeValue::Text("As Shot".to_owned()))
    );
    assert_eq!(doc.raw_attribute("Exposure2012"), Some("+0.35"));
    assert_eq!(doc.attribute("Missing"), None);
}

#[test]
fn decode_canonicalizes_curves() {
    let doc = DevelopSettings::decode(DOC).unwrap();
    let red = doc.curve(CurveChannel::Red).unwrap();
    assert_eq!(
        red.points(),
        &[CurvePoint::new(0.0, 10.0), CurvePoint::new(255.0, 255.0)]
    );
    assert!(doc.curve(CurveChannel::Blue).is_none());
}

#[test]
fn decode_rejects_bad_curves() {
    let bad = r#"{ "attributes": {}, "tone_curves": { "green": [[0, 0], [0, 300]] } }"#;
    let err = DevelopSettings::decode(bad).unwrap_err();
    assert!(matches!(err, DuskrError::Document(_)));
}

#[test]
fn decode_rejects_malformed_json() {
    assert!(matches!(
        DevelopSettings::decode("{ not json").unwrap_err(),
        DuskrError::Document(_)
    ));
}

#[test]
fn missing_sections_default_to_empty() {
    let doc = DevelopSettings::decode("{}").unwrap();
    assert!(!doc.has_settings());
    assert!(doc.attribute_names().is_empty());
}

#[test]
fn attribute_names_are_sorted() {
    let doc = DevelopSettings::decode(DOC).unwrap();
    assert_eq!(
        doc.attribute_names(),
        vec!["Exposure2012", "HasSettings", "Version", "WhiteBalance"]
    );
}

#[test]
fn set_attribute_serializes_values() {
    let mut doc = DevelopSettings::new();
    doc.set_attribute("CropTop", AttributeValue::Number(0.123_456_789));
    doc.set_attribute("HasCrop", AttributeValue::Boolean(true));
    assert_eq!(doc.raw_attribute("CropTop"), Some("0.123457"));
    assert_eq!(doc.raw_attribute("HasCrop"), Some("True"));
}

#[test]
fn encode_then_decode_keeps_content() {
    let doc = DevelopSettings::decode(DOC).unwrap();
    let again = DevelopSettings::decode(&doc.encode().unwrap()).unwrap();
    assert_eq!(doc, again);
}

#[test]
fn clones_are_independent() {
    let original = DevelopSettings::decode(DOC).unwrap();
    let mut copy = original.clone();
    copy.set_attribute("Exposure2012", AttributeValue::Number(1.0));
    copy.set_curve(CurveChannel::Composite, ToneCurve::identity());
    assert_eq!(
        original.attribute("Exposure2012"),
        Some(AttributeValue::Number(0.35))
    );
    assert_eq!(original.curve(CurveChannel::Composite).unwrap().len(), 3);
}
