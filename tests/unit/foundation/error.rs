use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DuskrError::MissingSequenceNumber {
            filename: "cover.xmp".to_owned()
        }
        .to_string()
        .contains("missing sequence number:")
    );
    assert!(
        DuskrError::InsufficientControlPoints { count: 1 }
            .to_string()
            .contains("insufficient control points:")
    );
    assert!(
        DuskrError::invalid_curve("x")
            .to_string()
            .contains("invalid curve data:")
    );
    assert!(DuskrError::spline("x").to_string().contains("spline error:"));
    assert!(
        DuskrError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(DuskrError::config("x").to_string().contains("config error:"));
}

#[test]
fn mismatch_messages_name_both_sides() {
    let err = DuskrError::PrefixMismatch {
        expected: "IMG_".to_owned(),
        found: "shot_".to_owned(),
    };
    let msg = err.to_string();
    assert!(msg.contains("IMG_"));
    assert!(msg.contains("shot_"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DuskrError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
