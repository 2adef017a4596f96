// Tests for JSON conversion
use crate::serde::*;
use crate::*;

#[test]
fn test_options_to_json_sorted() {
    let options = SchemaBuilder::new()
        .set("num", 1)
        .set("bool", true)
        .set("str", "bag")
        .set("dec", 7.3)
        .set("none", Variant::new())
        .build();
    let json = options_to_json_string(&options, false).unwrap();
    assert_eq!(
        json,
        r#"{"bool":true,"dec":7.3,"none":null,"num":1,"str":"bag"}"#
    );
}

#[test]
fn test_schema_from_json() {
    let schema =
        schema_from_json_str(r#"{"num": 1, "bool": true, "str": "bag", "dec": 7.3, "half": 2.0}"#)
            .unwrap();
    assert_eq!(schema["num"], Variant::Integer(1));
    assert_eq!(schema["bool"], Variant::Boolean(true));
    assert_eq!(schema["str"], Variant::text("bag"));
    assert_eq!(schema["dec"], Variant::Real(7.3));
    assert_eq!(schema["half"], Variant::Real(2.0));

    let options = fill(&schema, &["-num", "5"]).unwrap();
    assert_eq!(options["num"], Variant::Integer(5));
}

#[test]
fn test_json_round_trip_keeps_kinds() {
    let options = SchemaBuilder::new().set("whole", 2.0).set("count", 2).build();
    let json = options_to_json_string(&options, true).unwrap();
    let back = schema_from_json_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn test_schema_rejects_non_scalars() {
    let err = schema_from_json_str(r#"{"list": [1, 2]}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSchema);
    assert!(err.to_string().contains("list"));

    assert!(schema_from_json_str("[1, 2]").is_err());
    assert!(schema_from_json_str("{").is_err());
}

#[test]
fn test_non_finite_real_becomes_string() {
    let json = variant_to_json(&Variant::real(f64::INFINITY));
    assert_eq!(json, serde_json::Value::String("inf".to_string()));
}

#[test]
fn test_parse_option_from_json() {
    let option = parse_option_from_json_str(r#"{"announce": true}"#).unwrap();
    assert_eq!(option, ParseOption { announce: true });
}
