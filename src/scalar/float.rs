// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The `Float` scalar type.

use once_cell::sync::Lazy;

use crate::ast;
use crate::error::{Error, Result};
use crate::scalar::{Scalar, ScalarInfo, Variables};
use crate::value::Value;

const FLOAT_DESCRIPTION: &str = "The `Float` scalar type represents signed double-precision \
     fractional values as specified by \
     [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).";

/// The `Float` scalar type: coerces values to finite 64-bit floats.
pub struct FloatScalar {
    info: ScalarInfo,
}

/// Get the process-wide `Float` scalar instance.
pub fn float() -> &'static FloatScalar {
    static FLOAT: Lazy<FloatScalar> = Lazy::new(FloatScalar::new);
    &FLOAT
}

impl FloatScalar {
    pub fn new() -> Self {
        Self {
            info: ScalarInfo {
                name: "Float",
                description: FLOAT_DESCRIPTION,
            },
        }
    }

    /// Finish a numeric conversion, rejecting inadmissible (`None`) and non-finite results.
    fn finite(opt_float: Option<f64>, value: &Value) -> Result<f64> {
        match opt_float {
            Some(f) if f.is_finite() => Ok(f),
            _ => Err(Error::non_numeric(value)),
        }
    }
}

impl Default for FloatScalar {
    fn default() -> Self {
        Self::new()
    }
}

impl Scalar for FloatScalar {
    type Output = f64;

    fn info(&self) -> &ScalarInfo {
        &self.info
    }

    fn serialize(&self, value: &Value) -> Result<f64> {
        let opt_float = match value {
            Value::I64(i) => Some(*i as f64),
            Value::F64(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            // A numeric-looking string counts as numeric here. One that overflows to an
            // infinity gets caught by the finiteness check.
            Value::Str(s) => s.parse().ok(),
            _ => None,
        };
        Self::finite(opt_float, value)
    }

    fn parse_value(&self, value: &Value) -> Result<f64> {
        // Variables carry typed transport values, so numeric strings and bools are a type
        // mismatch here, unlike in serialize.
        let opt_float = match value {
            Value::I64(i) => Some(*i as f64),
            Value::F64(f) => Some(*f),
            _ => None,
        };
        Self::finite(opt_float, value)
    }

    fn parse_literal(&self, node: &ast::Literal, _variables: Option<&Variables>) -> Result<f64> {
        match &node.value {
            ast::LiteralValue::Int(raw) | ast::LiteralValue::Float(raw) => {
                // The lexical grammar guarantees a numeric token, so no finiteness re-check: a
                // float literal whose text overflows parses to an infinity and is returned
                // as-is. Raw text that doesn't parse can only come from a hand-built node.
                raw.parse().map_err(|_| Error::invalid_literal())
            }
            _ => Err(Error::invalid_literal()),
        }
    }
}

#[cfg(test)]
mod tests {

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::ast::{Ident, Literal, LiteralValue};
    use crate::error::ErrorKind;

    fn literal(value: LiteralValue) -> Literal {
        Literal {
            span: (0, 0).into(),
            value,
        }
    }

    #[test]
    fn test_float_info() {
        let info = float().info();
        assert_eq!(info.name, "Float");
        assert!(info.description.contains("IEEE 754"));
    }

    #[rstest]
    #[case::i64(Value::from(3i64), 3.0)]
    #[case::i64_negative(Value::from(-2i64), -2.0)]
    #[case::i64_max(Value::from(i64::MAX), i64::MAX as f64)]
    #[case::f64(Value::from(3.5), 3.5)]
    #[case::f64_negative_zero(Value::from(-0.0), 0.0)]
    #[case::bool_true(Value::from(true), 1.0)]
    #[case::bool_false(Value::from(false), 0.0)]
    #[case::int_str(Value::from("42"), 42.0)]
    #[case::float_str(Value::from("3.14"), 3.14)]
    #[case::negative_str(Value::from("-2"), -2.0)]
    #[case::exponent_str(Value::from("1e10"), 1e10)]
    #[case::bare_fraction_str(Value::from(".5"), 0.5)]
    fn test_serialize_ok(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(float().serialize(&value).unwrap(), expected);
    }

    #[rstest]
    #[case::non_numeric_str(Value::from("abc"))]
    #[case::trailing_garbage_str(Value::from("3.14x"))]
    #[case::empty_str(Value::from(""))]
    #[case::overflowing_str(Value::from("1e999"))]
    #[case::negative_overflowing_str(Value::from("-1e999"))]
    #[case::inf_str(Value::from("inf"))]
    #[case::nan_str(Value::from("NaN"))]
    #[case::null(Value::Null)]
    #[case::list(Value::List(vec![Value::from(1i64), Value::from(2i64)]))]
    #[case::object(Value::Object(Default::default()))]
    #[case::infinite(Value::from(f64::INFINITY))]
    #[case::negative_infinite(Value::from(f64::NEG_INFINITY))]
    #[case::nan(Value::from(f64::NAN))]
    fn test_serialize_err(#[case] value: Value) {
        assert_eq!(
            float().serialize(&value).unwrap_err().kind(),
            ErrorKind::NonNumeric
        );
    }

    #[rstest]
    #[case::i64(Value::from(3i64), 3.0)]
    #[case::f64(Value::from(3.5), 3.5)]
    #[case::f64_negative(Value::from(-0.5), -0.5)]
    fn test_parse_value_ok(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(float().parse_value(&value).unwrap(), expected);
    }

    #[rstest]
    #[case::numeric_str(Value::from("3"))]
    #[case::bool_true(Value::from(true))]
    #[case::bool_false(Value::from(false))]
    #[case::null(Value::Null)]
    #[case::list(Value::List(vec![Value::from(1i64)]))]
    #[case::infinite(Value::from(f64::INFINITY))]
    #[case::nan(Value::from(f64::NAN))]
    fn test_parse_value_err(#[case] value: Value) {
        assert_eq!(
            float().parse_value(&value).unwrap_err().kind(),
            ErrorKind::NonNumeric
        );
    }

    #[rstest]
    #[case::int(LiteralValue::Int("7".to_owned()), 7.0)]
    #[case::negative_int(LiteralValue::Int("-4".to_owned()), -4.0)]
    #[case::float(LiteralValue::Float("2.5".to_owned()), 2.5)]
    #[case::exponent_float(LiteralValue::Float("1e10".to_owned()), 1e10)]
    fn test_parse_literal_ok(#[case] value: LiteralValue, #[case] expected: f64) {
        assert_eq!(float().parse_literal(&literal(value), None).unwrap(), expected);
    }

    // No finiteness re-check on literals: the grammar owns finiteness, so an overflowing
    // float literal comes back as an infinity rather than an error.
    #[test]
    fn test_parse_literal_overflowing_float() {
        let node = literal(LiteralValue::Float("1e999".to_owned()));
        assert_eq!(
            float().parse_literal(&node, None).unwrap(),
            f64::INFINITY
        );
    }

    #[rstest]
    #[case::str(LiteralValue::Str("2.5".to_owned()))]
    #[case::bool(LiteralValue::Bool(true))]
    #[case::null(LiteralValue::Null)]
    #[case::enum_(LiteralValue::Enum("NORTH".to_owned()))]
    #[case::variable(LiteralValue::Variable(Ident {
        span: (0, 0).into(),
        name: "x".to_owned(),
    }))]
    #[case::list(LiteralValue::List(vec![]))]
    #[case::object(LiteralValue::Object(vec![]))]
    #[case::malformed_int(LiteralValue::Int("abc".to_owned()))]
    fn test_parse_literal_err(#[case] value: LiteralValue) {
        let err = float().parse_literal(&literal(value), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLiteral);
        assert_eq!(err.to_string(), "");
    }

    #[rstest]
    #[case::int(LiteralValue::Int("7".to_owned()))]
    #[case::float(LiteralValue::Float("2.5".to_owned()))]
    fn test_parse_literal_ignores_variables(#[case] value: LiteralValue) {
        let variables = Variables::from([("x".to_owned(), Value::from("not a number"))]);
        let node = literal(value);
        assert_eq!(
            float().parse_literal(&node, Some(&variables)).unwrap(),
            float().parse_literal(&node, None).unwrap(),
        );
    }
}
