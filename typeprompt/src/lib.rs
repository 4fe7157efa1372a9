//! # typeprompt
//!
//! Typed console input for Rust CLIs. Ask a question, read a line, coerce it
//! to the type you asked for, and re-prompt until the answer fits.
//!
//! ## Features
//!
//! - **Typed answers** - string, integer, float, number and boolean
//! - **Reprompt loop** - invalid answers print a short hint and the question is asked again
//! - **Pause/resume discipline** - the input stream is only live while a prompt is reading
//! - **Pluggable I/O** - any [`LineSource`] and [`Printer`], with stdin/stdout and in-memory versions included
//! - **Serde options** - `{"type": "integer"}` style configuration
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! typeprompt = "0.1"
//! tokio = { version = "1", features = ["macros", "rt-multi-thread"] }
//! ```
//!
//! ```rust,no_run
//! use typeprompt::{DesiredType, PromptOptions, input};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), typeprompt::PromptError> {
//!     let name = input("What is your name? ", None).await?;
//!     let age = input("How old are you? ", Some(PromptOptions::new(DesiredType::Integer))).await?;
//!     let sure = input("Are you sure? ", Some(DesiredType::Boolean.into())).await?;
//!
//!     println!("{name} is {age} ({sure})");
//!     Ok(())
//! }
//! ```
//!
//! ## Accepted input
//!
//! | Type      | Examples accepted      | Examples rejected     |
//! |-----------|------------------------|-----------------------|
//! | `string`  | anything, even empty   |                       |
//! | `integer` | `42`, `100`            | `-1`, `4.2`, `abc`    |
//! | `number`  | `3`, `3.5`, `.5`       | `1.2.3`, `.`, `-2`    |
//! | `float`   | `3.5`, `0.25`          | `3`, `3.0`            |
//! | `boolean` | `t`, `TRUE`, `false`   | `yes`, `1`            |
//!
//! Answers are trimmed before validation. [`DigitSet::Legacy`] restricts
//! digits to `1-9` for compatibility with tools that used that class.
//!
//! ## Error Handling
//!
//! Invalid answers are never returned as errors. [`PromptError`] only
//! reports the input stream closing, I/O failures, and bad options:
//!
//! ```rust,no_run
//! use typeprompt::{PromptError, PromptOptions};
//!
//! match PromptOptions::from_json(r#"{"type": "array"}"#) {
//!     Ok(opts) => println!("{:?}", opts),
//!     Err(PromptError::Options(e)) => eprintln!("bad options: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`validate`** - type validators and coercion
//! - **`options`** - prompt configuration
//! - **`source`** - line sources and the pause/resume guard
//! - **`printer`** - output sinks
//! - **`terminal`** - the reprompt loop and process-wide [`input`]
//!
//! ## License
//!
//! This project is licensed under the MIT License.

pub mod error;
pub use error::PromptError;

pub mod options;
pub use options::PromptOptions;

pub mod printer;
pub use printer::{BufferPrinter, Printer, StdoutPrinter};

pub mod source;
pub use source::{LineSource, ResumeGuard, ScriptedSource, SourceEvent, StdinSource};

pub mod terminal;
pub use terminal::{Terminal, input};

pub mod validate;
pub use validate::{DesiredType, DigitSet, Rejection, TypedValue};
