//! # Input Validation & Coercion
//!
//! This module turns a trimmed line of user input into a [`TypedValue`], or
//! rejects it with a [`Rejection`] explaining what was expected. It holds no
//! I/O: the reprompt loop in [`crate::terminal`] prints the rejection and
//! asks again.
//!
//! ## Supported types
//!
//! | [`DesiredType`] | Accepts | Produces |
//! |-----------------|---------|----------|
//! | `String`  | anything, including the empty string | [`TypedValue::Str`] |
//! | `Integer` | digits only, no sign, must fit an `i64` | [`TypedValue::Integer`] |
//! | `Number`  | digits and `.`, must parse as a finite `f64` | [`TypedValue::Float`] |
//! | `Float`   | same as `Number`, and must have a fractional part | [`TypedValue::Float`] |
//! | `Boolean` | `t`, `f`, `true`, `false` in any case | [`TypedValue::Boolean`] |
//!
//! ## Digit sets
//!
//! [`DigitSet::Standard`] treats `0-9` as digits. [`DigitSet::Legacy`] only
//! accepts `1-9`, so `10` or `0.5` are rejected. Legacy exists for callers
//! that must reproduce answers accepted by older tools using that class.
//!
//! ## Example
//! ```rust
//! use typeprompt::{DesiredType, DigitSet, TypedValue};
//!
//! let v = DesiredType::Integer.coerce("42", DigitSet::Standard).unwrap();
//! assert_eq!(v, TypedValue::Integer(42));
//!
//! assert!(DesiredType::Float.coerce("3", DigitSet::Standard).is_err());
//! assert!(DesiredType::Integer.coerce("10", DigitSet::Legacy).is_err());
//! ```
use crate::error::PromptError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The type an answer should be coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DesiredType {
    #[default]
    String,
    Integer,
    Float,
    Number,
    Boolean,
}

/// Which characters count as digits for the numeric validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitSet {
    /// `0` through `9`.
    #[default]
    Standard,
    /// `1` through `9`; `0` is rejected.
    Legacy,
}

impl DigitSet {
    fn is_digit(self, c: char) -> bool {
        match self {
            DigitSet::Standard => c.is_ascii_digit(),
            DigitSet::Legacy => matches!(c, '1'..='9'),
        }
    }
}

/// A value that passed validation.
///
/// `Number` and `Float` answers both become [`TypedValue::Float`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TypedValue {
    #[serde(rename = "string")]
    Str(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl TypedValue {
    /// The type this value answers. [`TypedValue::Float`] reports
    /// [`DesiredType::Number`], the wider of the two decimal types.
    pub fn kind(&self) -> DesiredType {
        match self {
            TypedValue::Str(_) => DesiredType::String,
            TypedValue::Integer(_) => DesiredType::Integer,
            TypedValue::Float(_) => DesiredType::Number,
            TypedValue::Boolean(_) => DesiredType::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TypedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypedValue::Str(s) => write!(f, "{}", s),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Float(n) => write!(f, "{}", n),
            TypedValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Why an answer was refused.
///
/// The `Display` output is the line shown to the user before re-prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Invalid input, please provide an integer.")]
    Integer,
    #[error("Invalid input, please provide a number.")]
    Number,
    #[error("Invalid input, please provide a decimal number.")]
    Float,
    #[error("Invalid input, please provide true or false (t/f).")]
    Boolean,
}

/// Returns `Err($err)` unless every char of `$input` satisfies `$pred`
/// and the input is non-empty.
macro_rules! only_chars {
    ($input:expr, $pred:expr, $err:expr) => {
        if $input.is_empty() || !$input.chars().all($pred) {
            return Err($err);
        }
    };
}

impl DesiredType {
    /// Validates `input` and converts it to the matching [`TypedValue`].
    ///
    /// `input` is expected to be trimmed already.
    pub fn coerce(&self, input: &str, digits: DigitSet) -> Result<TypedValue, Rejection> {
        match self {
            DesiredType::String => Ok(TypedValue::Str(input.to_string())),
            DesiredType::Integer => integer(input, digits).map(TypedValue::Integer),
            DesiredType::Number => number(input, digits).map(TypedValue::Float),
            DesiredType::Float => float(input, digits).map(TypedValue::Float),
            DesiredType::Boolean => boolean(input).map(TypedValue::Boolean),
        }
    }
}

pub(crate) fn integer(input: &str, digits: DigitSet) -> Result<i64, Rejection> {
    only_chars!(input, |c| digits.is_digit(c), Rejection::Integer);
    input.parse::<i64>().map_err(|_| Rejection::Integer)
}

pub(crate) fn number(input: &str, digits: DigitSet) -> Result<f64, Rejection> {
    decimal(input, digits, Rejection::Number)
}

pub(crate) fn float(input: &str, digits: DigitSet) -> Result<f64, Rejection> {
    let n = decimal(input, digits, Rejection::Float)?;
    if n.fract() == 0.0 {
        return Err(Rejection::Float);
    }
    Ok(n)
}

pub(crate) fn boolean(input: &str) -> Result<bool, Rejection> {
    match input.to_ascii_lowercase().as_str() {
        "t" | "true" => Ok(true),
        "f" | "false" => Ok(false),
        _ => Err(Rejection::Boolean),
    }
}

fn decimal(input: &str, digits: DigitSet, err: Rejection) -> Result<f64, Rejection> {
    only_chars!(input, |c| c == '.' || digits.is_digit(c), err);
    match input.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(err),
    }
}

impl FromStr for DesiredType {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(DesiredType::String),
            "integer" => Ok(DesiredType::Integer),
            "float" => Ok(DesiredType::Float),
            "number" => Ok(DesiredType::Number),
            "boolean" => Ok(DesiredType::Boolean),
            _ => Err(PromptError::UnknownType(s.to_string())),
        }
    }
}

impl TryFrom<String> for DesiredType {
    type Error = PromptError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DesiredType> for String {
    fn from(value: DesiredType) -> Self {
        value.to_string()
    }
}

impl Display for DesiredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(ty: DesiredType, input: &str) -> Result<TypedValue, Rejection> {
        ty.coerce(input, DigitSet::Standard)
    }

    fn legacy(ty: DesiredType, input: &str) -> Result<TypedValue, Rejection> {
        ty.coerce(input, DigitSet::Legacy)
    }

    #[test]
    fn test_string_accepts_anything() {
        assert_eq!(standard(DesiredType::String, ""), Ok(TypedValue::Str(String::new())));
        assert_eq!(
            standard(DesiredType::String, "hello world"),
            Ok(TypedValue::Str("hello world".to_string()))
        );
    }

    #[test]
    fn test_integer_standard() {
        assert_eq!(standard(DesiredType::Integer, "42"), Ok(TypedValue::Integer(42)));
        assert_eq!(standard(DesiredType::Integer, "100"), Ok(TypedValue::Integer(100)));
        assert_eq!(standard(DesiredType::Integer, "007"), Ok(TypedValue::Integer(7)));
        assert_eq!(standard(DesiredType::Integer, "abc"), Err(Rejection::Integer));
        assert_eq!(standard(DesiredType::Integer, "-5"), Err(Rejection::Integer));
        assert_eq!(standard(DesiredType::Integer, "+5"), Err(Rejection::Integer));
        assert_eq!(standard(DesiredType::Integer, "4.2"), Err(Rejection::Integer));
        assert_eq!(standard(DesiredType::Integer, ""), Err(Rejection::Integer));
    }

    #[test]
    fn test_integer_overflow_is_rejected() {
        assert_eq!(
            standard(DesiredType::Integer, "9223372036854775807"),
            Ok(TypedValue::Integer(i64::MAX))
        );
        assert_eq!(
            standard(DesiredType::Integer, "9223372036854775808"),
            Err(Rejection::Integer)
        );
    }

    #[test]
    fn test_integer_legacy_rejects_zero() {
        assert_eq!(legacy(DesiredType::Integer, "42"), Ok(TypedValue::Integer(42)));
        assert_eq!(legacy(DesiredType::Integer, "10"), Err(Rejection::Integer));
        assert_eq!(legacy(DesiredType::Integer, "0"), Err(Rejection::Integer));
    }

    #[test]
    fn test_number_accepts_whole_and_fractional() {
        assert_eq!(standard(DesiredType::Number, "3"), Ok(TypedValue::Float(3.0)));
        assert_eq!(standard(DesiredType::Number, "3.5"), Ok(TypedValue::Float(3.5)));
        assert_eq!(standard(DesiredType::Number, "0.25"), Ok(TypedValue::Float(0.25)));
        assert_eq!(standard(DesiredType::Number, ".5"), Ok(TypedValue::Float(0.5)));
    }

    #[test]
    fn test_number_rejects_unparseable() {
        assert_eq!(standard(DesiredType::Number, ""), Err(Rejection::Number));
        assert_eq!(standard(DesiredType::Number, "."), Err(Rejection::Number));
        assert_eq!(standard(DesiredType::Number, "1.2.3"), Err(Rejection::Number));
        assert_eq!(standard(DesiredType::Number, "-1"), Err(Rejection::Number));
        assert_eq!(standard(DesiredType::Number, "1e5"), Err(Rejection::Number));
        assert_eq!(standard(DesiredType::Number, "inf"), Err(Rejection::Number));
    }

    #[test]
    fn test_number_legacy_rejects_zero() {
        assert_eq!(legacy(DesiredType::Number, "3.5"), Ok(TypedValue::Float(3.5)));
        assert_eq!(legacy(DesiredType::Number, "0.5"), Err(Rejection::Number));
        assert_eq!(legacy(DesiredType::Number, "10"), Err(Rejection::Number));
    }

    #[test]
    fn test_float_requires_fraction() {
        assert_eq!(standard(DesiredType::Float, "3"), Err(Rejection::Float));
        assert_eq!(standard(DesiredType::Float, "3.0"), Err(Rejection::Float));
        assert_eq!(standard(DesiredType::Float, "3.5"), Ok(TypedValue::Float(3.5)));
        assert_eq!(legacy(DesiredType::Float, "3.5"), Ok(TypedValue::Float(3.5)));
        assert_eq!(legacy(DesiredType::Float, "3.05"), Err(Rejection::Float));
    }

    #[test]
    fn test_boolean_case_insensitive() {
        for input in ["T", "TRUE", "true", "t", "True"] {
            assert_eq!(standard(DesiredType::Boolean, input), Ok(TypedValue::Boolean(true)));
        }
        for input in ["F", "false", "f", "FALSE"] {
            assert_eq!(standard(DesiredType::Boolean, input), Ok(TypedValue::Boolean(false)));
        }
        for input in ["yes", "no", "1", "0", ""] {
            assert_eq!(standard(DesiredType::Boolean, input), Err(Rejection::Boolean));
        }
    }

    #[test]
    fn test_coercion_is_deterministic() {
        let a = standard(DesiredType::Number, "12.75");
        let b = standard(DesiredType::Number, "12.75");
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::Integer.to_string(),
            "Invalid input, please provide an integer."
        );
        assert_eq!(
            Rejection::Number.to_string(),
            "Invalid input, please provide a number."
        );
        assert_eq!(
            Rejection::Float.to_string(),
            "Invalid input, please provide a decimal number."
        );
        assert_eq!(
            Rejection::Boolean.to_string(),
            "Invalid input, please provide true or false (t/f)."
        );
    }

    #[test]
    fn test_desired_type_from_str() {
        assert_eq!("integer".parse::<DesiredType>().unwrap(), DesiredType::Integer);
        assert_eq!("Boolean".parse::<DesiredType>().unwrap(), DesiredType::Boolean);
        assert!(matches!(
            "array".parse::<DesiredType>(),
            Err(PromptError::UnknownType(t)) if t == "array"
        ));
    }

    #[test]
    fn test_typed_value_json_shape() {
        let json = serde_json::to_string(&TypedValue::Integer(42)).unwrap();
        assert_eq!(json, r#"{"type":"integer","value":42}"#);
        let json = serde_json::to_string(&TypedValue::Str("x".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"string","value":"x"}"#);
    }

    #[test]
    fn test_typed_value_accessors() {
        assert_eq!(TypedValue::Integer(3).as_i64(), Some(3));
        assert_eq!(TypedValue::Integer(3).as_f64(), None);
        assert_eq!(TypedValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(TypedValue::Str("a".into()).as_str(), Some("a"));
        assert_eq!(TypedValue::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_typed_value_kind() {
        assert_eq!(TypedValue::Str("a".into()).kind(), DesiredType::String);
        assert_eq!(TypedValue::Integer(1).kind(), DesiredType::Integer);
        assert_eq!(TypedValue::Float(2.5).kind(), DesiredType::Number);
        assert_eq!(TypedValue::Boolean(false).kind(), DesiredType::Boolean);

        let from_float = DesiredType::Float.coerce("2.5", DigitSet::Standard).unwrap();
        assert_eq!(from_float.kind(), DesiredType::Number);
        assert!(from_float.kind().coerce("2.5", DigitSet::Standard).is_ok());
    }
}
