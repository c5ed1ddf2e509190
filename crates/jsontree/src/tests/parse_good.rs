use alloc::{string::ToString, vec};

use rstest::rstest;

use crate::{Value, parse, value::Map};

#[rstest]
#[case("null")]
#[case(" null ")]
#[case("\t\r\n null \n")]
fn null_literal(#[case] text: &str) {
    assert_eq!(parse(text), Ok(Value::Null));
}

#[test]
fn boolean_literals() {
    assert_eq!(parse("true"), Ok(Value::Boolean(true)));
    assert_eq!(parse("false"), Ok(Value::Boolean(false)));
    assert_eq!(parse("  true  "), Ok(Value::Boolean(true)));
}

#[rstest]
#[case("0", 0.0)]
#[case("-0", 0.0)]
#[case("-0.0", 0.0)]
#[case("1", 1.0)]
#[case("-1", -1.0)]
#[case("1.5", 1.5)]
#[case("-1.5", -1.5)]
#[case("3.1416", 3.1416)]
#[case("1E10", 1E10)]
#[case("1e10", 1e10)]
#[case("1E+10", 1E10)]
#[case("1E-10", 1E-10)]
#[case("-1E10", -1E10)]
#[case("-1e10", -1e10)]
#[case("-1E+10", -1E10)]
#[case("-1E-10", -1E-10)]
#[case("1.234E+10", 1.234E10)]
#[case("1.234E-10", 1.234E-10)]
// Underflows to zero rather than erroring.
#[case("1e-10000", 0.0)]
// Smallest number larger than one.
#[case("1.0000000000000002", 1.000_000_000_000_000_2)]
// Minimum subnormal, minimum normal, maximum finite, and their negations.
#[case("4.9406564584124654e-324", 4.940_656_458_412_465_4E-324)]
#[case("-4.9406564584124654e-324", -4.940_656_458_412_465_4E-324)]
#[case("2.2250738585072014e-308", 2.225_073_858_507_201_4E-308)]
#[case("-2.2250738585072014e-308", -2.225_073_858_507_201_4E-308)]
#[case("1.7976931348623157e308", 1.797_693_134_862_315_7E308)]
#[case("-1.7976931348623157e308", -1.797_693_134_862_315_7E308)]
fn numbers(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(parse(text), Ok(Value::Number(expected)));
}

#[test]
fn empty_array() {
    assert_eq!(parse("[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse("[ ]"), Ok(Value::Array(vec![])));
    assert_eq!(parse(" [\n] "), Ok(Value::Array(vec![])));
}

#[test]
fn mixed_array() {
    assert_eq!(
        parse(r#"[ null , false , true , 123 , "abc" ]"#),
        Ok(Value::Array(vec![
            Value::Null,
            Value::Boolean(false),
            Value::Boolean(true),
            Value::Number(123.0),
            Value::String("abc".to_string()),
        ]))
    );
}

#[test]
fn nested_arrays() {
    assert_eq!(
        parse("[[],[0],[0,1],[0,1,2]]"),
        Ok(Value::Array(vec![
            Value::Array(vec![]),
            Value::Array(vec![Value::Number(0.0)]),
            Value::Array(vec![Value::Number(0.0), Value::Number(1.0)]),
            Value::Array(vec![
                Value::Number(0.0),
                Value::Number(1.0),
                Value::Number(2.0),
            ]),
        ]))
    );
}

// The final element before `]` must be kept like any other.
#[test]
fn array_keeps_last_element() {
    let v = parse("[1,2,3]").unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);
    assert_eq!(v.as_array().unwrap()[2], Value::Number(3.0));
}

#[test]
fn empty_object() {
    assert_eq!(parse("{}"), Ok(Value::Object(Map::new())));
    assert_eq!(parse("{ }"), Ok(Value::Object(Map::new())));
    assert_eq!(parse(" {\t} "), Ok(Value::Object(Map::new())));
}

#[test]
fn full_object() {
    let parsed = parse(
        r#" {
            "n" : null ,
            "f" : false ,
            "t" : true ,
            "i" : 123 ,
            "s" : "abc" ,
            "a" : [ 1, 2, 3 ],
            "o" : { "1" : 1, "2" : 2, "3" : 3 }
        } "#,
    )
    .unwrap();

    let mut inner = Map::new();
    inner.insert("1".to_string(), Value::Number(1.0));
    inner.insert("2".to_string(), Value::Number(2.0));
    inner.insert("3".to_string(), Value::Number(3.0));

    let mut expected = Map::new();
    expected.insert("n".to_string(), Value::Null);
    expected.insert("f".to_string(), Value::Boolean(false));
    expected.insert("t".to_string(), Value::Boolean(true));
    expected.insert("i".to_string(), Value::Number(123.0));
    expected.insert("s".to_string(), Value::String("abc".to_string()));
    expected.insert(
        "a".to_string(),
        Value::Array(vec![
            Value::Number(1.0),
            Value::Number(2.0),
            Value::Number(3.0),
        ]),
    );
    expected.insert("o".to_string(), Value::Object(inner));

    assert_eq!(parsed, Value::Object(expected));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let v = parse(r#"{"a": 1, "b": true, "a": 2}"#).unwrap();
    assert_eq!(v.get("a"), Some(&Value::Number(2.0)));
    assert_eq!(v.as_object().unwrap().len(), 2);
}
