use super::*;

#[test]
fn booleans_ignore_case() {
    assert_eq!(AttributeValue::parse("True"), AttributeValue::Boolean(true));
    assert_eq!(AttributeValue::parse(" TRUE "), AttributeValue::Boolean(true));
    assert_eq!(AttributeValue::parse("false"), AttributeValue::Boolean(false));
    assert_eq!(AttributeValue::parse("fAlSe"), AttributeValue::Boolean(false));
}

#[test]
fn numbers_accept_signs() {
    assert_eq!(AttributeValue::parse("+0.35"), AttributeValue::Number(0.35));
    assert_eq!(AttributeValue::parse("-12"), AttributeValue::Number(-12.0));
    assert_eq!(AttributeValue::parse(" 5500 "), AttributeValue::Number(5500.0));
}

#[test]
fn everything_else_is_trimmed_text() {
    assert_eq!(
        AttributeValue::parse("  As Shot "),
        AttributeValue::Text("As Shot".to_owned())
    );
    assert_eq!(
        AttributeValue::parse("12abc"),
        AttributeValue::Text("12abc".to_owned())
    );
    assert_eq!(AttributeValue::parse("inf"), AttributeValue::Text("inf".to_owned()));
    assert_eq!(AttributeValue::parse("NaN"), AttributeValue::Text("NaN".to_owned()));
}

#[test]
fn serialization_uses_title_case_booleans() {
    assert_eq!(AttributeValue::Boolean(true).to_text(), "True");
    assert_eq!(AttributeValue::Boolean(false).to_text(), "False");
}

#[test]
fn numbers_round_to_six_decimals() {
    assert_eq!(AttributeValue::Number(0.123_456_789).to_text(), "0.123457");
    assert_eq!(AttributeValue::Number(1.0).to_text(), "1");
    assert_eq!(AttributeValue::Number(300.000_000_1).to_text(), "300");
    assert_eq!(AttributeValue::Number(-0.000_000_1).to_text(), "0");
}

#[test]
fn parse_then_serialize_is_stable() {
    for raw in ["True", "False", "0.25", "-3", "Adobe Standard"] {
        let once = AttributeValue::parse(raw).to_text();
        let twice = AttributeValue::parse(&once).to_text();
        assert_eq!(once, twice);
    }
}

#[test]
fn accessors_only_match_their_kind() {
    assert_eq!(AttributeValue::Number(2.5).as_number(), Some(2.5));
    assert_eq!(AttributeValue::Boolean(true).as_number(), None);
    assert_eq!(AttributeValue::Boolean(true).as_bool(), Some(true));
    assert_eq!(AttributeValue::from("x").as_bool(), None);
}
