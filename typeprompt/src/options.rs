//! # Prompt Options
//!
//! [`PromptOptions`] selects the type an answer is coerced to and the digit
//! set used by the numeric validators. It deserializes from the same shape
//! JavaScript-style prompt helpers take:
//!
//! ```rust
//! use typeprompt::{DesiredType, DigitSet, PromptOptions};
//!
//! let opts = PromptOptions::from_json(r#"{ "type": "integer" }"#).unwrap();
//! assert_eq!(opts.kind, DesiredType::Integer);
//! assert_eq!(opts.digits, DigitSet::Standard);
//!
//! let legacy = PromptOptions::from_json(r#"{ "type": "number", "digits": "legacy" }"#).unwrap();
//! assert_eq!(legacy, PromptOptions::legacy(DesiredType::Number));
//! ```
//!
//! Unknown type names are rejected when the options are built, never at
//! prompt time.
use crate::{
    error::PromptError,
    validate::{DesiredType, DigitSet},
};
use serde::{Deserialize, Serialize};

/// Configuration for a single prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptOptions {
    #[serde(rename = "type", default)]
    pub kind: DesiredType,
    #[serde(default)]
    pub digits: DigitSet,
}

impl PromptOptions {
    /// Options for `kind` with standard digits.
    pub fn new(kind: DesiredType) -> Self {
        Self {
            kind,
            digits: DigitSet::Standard,
        }
    }

    /// Options for `kind` using the `1-9` digit class.
    pub fn legacy(kind: DesiredType) -> Self {
        Self::new(kind).with_digits(DigitSet::Legacy)
    }

    pub fn with_digits(mut self, digits: DigitSet) -> Self {
        self.digits = digits;
        self
    }

    /// Decodes options from JSON such as `{"type": "boolean"}`.
    pub fn from_json(json: &str) -> Result<Self, PromptError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<DesiredType> for PromptOptions {
    fn from(kind: DesiredType) -> Self {
        Self::new(kind)
    }
}
