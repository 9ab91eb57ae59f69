// Test the public parse entry points

use leptjson::{parse, parse_into, parse_slice, ParseError, Value, ValueType};

fn parse_type(json: &str) -> (Result<(), ParseError>, ValueType) {
    let mut v = Value::new();
    let result = parse_into(&mut v, json.as_bytes());
    (result, v.value_type())
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_type("null"), (Ok(()), ValueType::Null));
    assert_eq!(parse_type("false"), (Ok(()), ValueType::False));
    assert_eq!(parse_type("true"), (Ok(()), ValueType::True));
    assert_eq!(parse("true"), Ok(Value::Boolean(true)));
    assert_eq!(parse("false"), Ok(Value::Boolean(false)));
}

#[test]
fn test_parse_literals_with_whitespace() {
    assert_eq!(parse_type(" \t\n\rnull \t\n\r"), (Ok(()), ValueType::Null));
    assert_eq!(parse_type("\ntrue\n"), (Ok(()), ValueType::True));
    assert_eq!(parse_type("false   "), (Ok(()), ValueType::False));
}

#[test]
fn test_parse_expect_value() {
    assert_eq!(parse_type(""), (Err(ParseError::ExpectValue), ValueType::Null));
    assert_eq!(parse_type("  "), (Err(ParseError::ExpectValue), ValueType::Null));
    assert_eq!(
        parse_type(" \t\r\n "),
        (Err(ParseError::ExpectValue), ValueType::Null)
    );
}

#[test]
fn test_parse_root_not_singular() {
    assert_eq!(
        parse_type("null x"),
        (Err(ParseError::RootNotSingular), ValueType::Null)
    );
    assert_eq!(
        parse_type("false null"),
        (Err(ParseError::RootNotSingular), ValueType::False)
    );
    assert_eq!(
        parse_type("123e3 ASD"),
        (Err(ParseError::RootNotSingular), ValueType::Number)
    );
    assert_eq!(
        parse_type("truex"),
        (Err(ParseError::RootNotSingular), ValueType::True)
    );
    // A number stops where the grammar stops, the rest is trailing input
    assert_eq!(
        parse_type("0.5.5"),
        (Err(ParseError::RootNotSingular), ValueType::Number)
    );
    assert_eq!(
        parse_type("1 2"),
        (Err(ParseError::RootNotSingular), ValueType::Number)
    );
}

#[test]
fn test_parse_number_too_big() {
    assert_eq!(
        parse_type("123E123123122"),
        (Err(ParseError::NumberTooBig), ValueType::Null)
    );
    assert_eq!(
        parse_type("-123E123123122"),
        (Err(ParseError::NumberTooBig), ValueType::Null)
    );
    assert_eq!(parse("1.8e308"), Err(ParseError::NumberTooBig));
}

#[test]
fn test_owned_entry_points_agree() {
    for json in ["null", " 1.5 ", "nul", "", "true false", "1e999"] {
        assert_eq!(parse(json), parse_slice(json.as_bytes()), "input {json:?}");
    }
}

#[test]
fn test_numbers_starting_with_five() {
    assert_eq!(parse("5"), Ok(Value::Number(5.0)));
    assert_eq!(parse("55.5"), Ok(Value::Number(55.5)));
    assert_eq!(parse("-5e-1"), Ok(Value::Number(-0.5)));
}

#[test]
fn test_parse_into_overwrites_string_value() {
    let mut v = Value::new();
    v.set_string(b"to be released");
    assert_eq!(parse_into(&mut v, b"42"), Ok(()));
    assert_eq!(v.as_number(), Some(42.0));

    v.set_string(b"again");
    assert_eq!(parse_into(&mut v, b"?"), Err(ParseError::InvalidValue));
    assert!(v.is_null());
}

#[test]
fn test_error_display() {
    let err = parse("null x").unwrap_err();
    assert_eq!(err.to_string(), "unexpected input after root value");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "unexpected input after root value");
}
