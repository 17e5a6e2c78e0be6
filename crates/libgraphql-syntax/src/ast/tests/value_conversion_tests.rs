//! Tests for the checked numeric conversions on `IntValue` and
//! `FloatValue`.

use std::borrow::Cow;

use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ValueParsingError;

fn int(raw: &str) -> IntValue<'_> {
    IntValue {
        raw: Cow::Borrowed(raw),
        span: GraphQLSourceSpan::empty_at(SourcePosition::start_of_input()),
    }
}

fn float(raw: &str) -> FloatValue<'_> {
    FloatValue {
        raw: Cow::Borrowed(raw),
        span: GraphQLSourceSpan::empty_at(SourcePosition::start_of_input()),
    }
}

#[test]
fn int_within_range() {
    assert_eq!(int("0").to_i32(), Ok(0));
    assert_eq!(int("-0").to_i32(), Ok(0));
    assert_eq!(int("2147483647").to_i32(), Ok(i32::MAX));
    assert_eq!(int("-2147483648").to_i32(), Ok(i32::MIN));
}

#[test]
fn int_outside_i32_range() {
    assert_eq!(
        int("2147483648").to_i32(),
        Err(ValueParsingError::Int("2147483648".to_string())),
    );
    assert_eq!(int("2147483648").to_i64(), Ok(2_147_483_648));
    assert_eq!(
        int("-2147483649").to_i32().unwrap_err().to_string(),
        "invalid GraphQL integer: -2147483649",
    );
}

#[test]
fn int_outside_i64_range() {
    assert_eq!(int("9223372036854775807").to_i64(), Ok(i64::MAX));
    assert!(int("9223372036854775808").to_i64().is_err());
}

#[test]
fn float_conversions() {
    assert_eq!(float("1.5").to_f64(), Ok(1.5));
    assert_eq!(float("-2.5e-3").to_f64(), Ok(-0.0025));
    assert_eq!(float("1E3").to_f64(), Ok(1000.0));
}

#[test]
fn float_overflow_is_rejected() {
    assert_eq!(float("1e400").to_f64(), Err(ValueParsingError::Float("1e400".to_string())));
    assert_eq!(
        float("-1e400").to_f64().unwrap_err().to_string(),
        "invalid GraphQL float: -1e400",
    );
}

#[test]
fn float_underflow_rounds_to_zero() {
    assert_eq!(float("1e-400").to_f64(), Ok(0.0));
}
