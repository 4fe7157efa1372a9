//! # Terminal Input Helper
//!
//! This module provides the reprompt loop: print a question, read a line,
//! validate it, and ask again until the answer fits the requested type.
//!
//! Invalid answers never surface as errors. Each rejection prints one line
//! explaining what was expected and the question is shown again. The loop
//! only gives up when the line source itself fails or runs out of input.
//!
//! ## Output format
//!
//! ```text
//! ? Age: abc
//! ! Invalid input, please provide an integer.
//! ? Age: 42
//! ```
//!
//! ## Usage
//!
//! ### Process-wide stdin
//! ```rust,no_run
//! use typeprompt::{DesiredType, PromptOptions, input};
//!
//! # async fn run() -> Result<(), typeprompt::PromptError> {
//! let name = input("Name: ", None).await?;
//! let age = input("Age: ", Some(PromptOptions::new(DesiredType::Integer))).await?;
//! println!("{} is {}", name, age);
//! # Ok(())
//! # }
//! ```
//!
//! ### Owned terminal
//! ```rust
//! use typeprompt::{BufferPrinter, ScriptedSource, Terminal};
//!
//! # async fn run() -> Result<(), typeprompt::PromptError> {
//! let printer = BufferPrinter::new();
//! let mut terminal = Terminal::new(ScriptedSource::new(["maybe", "t"]), printer.clone());
//!
//! assert!(terminal.ask_bool("Continue? ").await?);
//! assert_eq!(
//!     printer.contents(),
//!     "? Continue? ! Invalid input, please provide true or false (t/f).\n? Continue? "
//! );
//! # Ok(())
//! # }
//! ```
use crate::{
    error::PromptError,
    options::PromptOptions,
    printer::{Printer, StdoutPrinter},
    source::{LineSource, ResumeGuard, StdinSource},
    validate::{self, DigitSet, Rejection, TypedValue},
};
use std::sync::OnceLock;
use tokio::sync::Mutex;

const PROMPT_MARKER: &str = "?";
const ERROR_MARKER: &str = "!";

/// Process-wide terminal on stdin/stdout used by [`input`].
static STDIO: OnceLock<Mutex<Terminal<StdinSource, StdoutPrinter>>> = OnceLock::new();

/// Asks `message` on the process terminal and loops until the answer is
/// valid for `options` (string when `None`).
///
/// Calls are serialized: a second prompt waits until the first one returns.
pub async fn input(
    message: &str,
    options: Option<PromptOptions>,
) -> Result<TypedValue, PromptError> {
    let terminal = STDIO.get_or_init(|| Mutex::new(Terminal::stdio()));
    input_on(terminal, message, options).await
}

/// Runs one prompt on a shared terminal, holding its lock for the whole
/// read/validate loop.
async fn input_on<S: LineSource, P: Printer>(
    terminal: &Mutex<Terminal<S, P>>,
    message: &str,
    options: Option<PromptOptions>,
) -> Result<TypedValue, PromptError> {
    terminal.lock().await.input(message, options).await
}

/// A line source paired with a printer.
pub struct Terminal<S: LineSource, P: Printer> {
    source: S,
    printer: P,
    digits: DigitSet,
}

impl Terminal<StdinSource, StdoutPrinter> {
    pub fn stdio() -> Self {
        Self::new(StdinSource::new(), StdoutPrinter)
    }
}

impl<S: LineSource, P: Printer> Terminal<S, P> {
    pub fn new(source: S, printer: P) -> Self {
        Self {
            source,
            printer,
            digits: DigitSet::Standard,
        }
    }

    /// Digit set used by the `ask_*` helpers.
    pub fn with_digits(mut self, digits: DigitSet) -> Self {
        self.digits = digits;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Prompts until the answer is valid for `options`.
    ///
    /// With `None`, or a `String` type, the trimmed line is returned as is,
    /// empty lines included.
    pub async fn input(
        &mut self,
        message: &str,
        options: Option<PromptOptions>,
    ) -> Result<TypedValue, PromptError> {
        let opts = options.unwrap_or_default();
        tracing::debug!(
            prompt = message,
            kind = %opts.kind,
            digits = ?opts.digits,
            "prompt started"
        );
        self.ask_until(message, |answer| opts.kind.coerce(answer, opts.digits))
            .await
    }

    pub async fn ask_string(&mut self, message: &str) -> Result<String, PromptError> {
        self.ask_until(message, |answer| Ok(answer.to_string())).await
    }

    pub async fn ask_integer(&mut self, message: &str) -> Result<i64, PromptError> {
        let digits = self.digits;
        self.ask_until(message, |answer| validate::integer(answer, digits))
            .await
    }

    /// Any decimal, whole numbers included.
    pub async fn ask_number(&mut self, message: &str) -> Result<f64, PromptError> {
        let digits = self.digits;
        self.ask_until(message, |answer| validate::number(answer, digits))
            .await
    }

    /// A decimal with a fractional part.
    pub async fn ask_float(&mut self, message: &str) -> Result<f64, PromptError> {
        let digits = self.digits;
        self.ask_until(message, |answer| validate::float(answer, digits))
            .await
    }

    pub async fn ask_bool(&mut self, message: &str) -> Result<bool, PromptError> {
        self.ask_until(message, validate::boolean).await
    }

    async fn ask_until<T, F>(&mut self, message: &str, mut accept: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, Rejection>,
    {
        let mut attempts: usize = 0;

        loop {
            attempts += 1;
            let answer = self.read_answer(message).await?;

            match accept(&answer) {
                Ok(value) => {
                    tracing::debug!(prompt = message, attempts, "answer accepted");
                    return Ok(value);
                }
                Err(rejection) => {
                    tracing::trace!(
                        prompt = message,
                        answer = %answer,
                        %rejection,
                        "answer rejected"
                    );
                    self.printer
                        .write_line(&format!("{} {}", ERROR_MARKER, rejection))?;
                }
            }
        }
    }

    /// One resume, print, read, pause cycle. The source is paused again
    /// when the guard drops, whether or not the read succeeded.
    async fn read_answer(&mut self, message: &str) -> Result<String, PromptError> {
        let mut guard = ResumeGuard::acquire(&mut self.source);
        self.printer
            .write(&format!("{} {}", PROMPT_MARKER, message))?;

        match guard.read_line().await? {
            Some(line) => Ok(line.trim().to_string()),
            None => {
                tracing::debug!(prompt = message, "line source closed");
                Err(PromptError::Closed)
            }
        }
    }
}
