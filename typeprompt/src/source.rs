//! # Line Sources
//!
//! A [`LineSource`] hands out one line of user input per request. Sources
//! have a pause/resume lifecycle: they are resumed right before a read and
//! paused right after it, so buffered keystrokes do not leak into whatever
//! the program prints between prompts.
//!
//! The lifecycle is enforced with [`ResumeGuard`]. Acquiring the guard
//! resumes the source; dropping it pauses the source again, on every exit
//! path, including an early return on a read error or a dropped future.
//!
//! Two sources are provided:
//! - [`StdinSource`]: the process standard input, read asynchronously via tokio.
//! - [`ScriptedSource`]: a fixed queue of lines, for tests and piped answers.
use crate::error::PromptError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio_stream::{StreamExt, wrappers::LinesStream};

/// Asynchronous provider of input lines.
///
/// `read_line` yields the next line with its terminator stripped, or
/// `Ok(None)` once the input is exhausted.
#[async_trait]
pub trait LineSource: Send {
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;
    async fn read_line(&mut self) -> Result<Option<String>, PromptError>;
}

/// Keeps a [`LineSource`] resumed for as long as it lives.
pub struct ResumeGuard<'a, S: LineSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: LineSource + ?Sized> ResumeGuard<'a, S> {
    pub fn acquire(source: &'a mut S) -> Self {
        source.resume();
        tracing::trace!("line source resumed");
        Self { source }
    }

    pub async fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        self.source.read_line().await
    }
}

impl<S: LineSource + ?Sized> Drop for ResumeGuard<'_, S> {
    fn drop(&mut self) {
        self.source.pause();
        tracing::trace!("line source paused");
    }
}

/// Standard input, line by line.
///
/// Starts paused.
pub struct StdinSource {
    lines: LinesStream<BufReader<Stdin>>,
    paused: bool,
}

impl StdinSource {
    pub fn new() -> Self {
        Self {
            lines: LinesStream::new(BufReader::new(tokio::io::stdin()).lines()),
            paused: true,
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineSource for StdinSource {
    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    async fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        if self.paused {
            return Err(PromptError::Paused);
        }
        Ok(self.lines.next().await.transpose()?)
    }
}

/// Lifecycle event recorded by [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEvent {
    Resume,
    Read(String),
    Pause,
}

/// A source that replays a fixed list of lines.
///
/// Every resume, read and pause is appended to a shared event log, which
/// stays readable through [`ScriptedSource::events`] after the source has
/// been handed to a [`crate::Terminal`]. Reading while paused fails with
/// [`PromptError::Paused`]. Once the lines run out, reads return `Ok(None)`.
pub struct ScriptedSource {
    lines: VecDeque<String>,
    paused: bool,
    events: Arc<Mutex<Vec<SourceEvent>>>,
}

impl ScriptedSource {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            paused: true,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the event log.
    pub fn events(&self) -> Arc<Mutex<Vec<SourceEvent>>> {
        Arc::clone(&self.events)
    }

    /// Number of lines not yet read.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[async_trait]
impl LineSource for ScriptedSource {
    fn pause(&mut self) {
        self.paused = true;
        self.events.lock().push(SourceEvent::Pause);
    }

    fn resume(&mut self) {
        self.paused = false;
        self.events.lock().push(SourceEvent::Resume);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    async fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        if self.paused {
            return Err(PromptError::Paused);
        }
        let line = self.lines.pop_front();
        if let Some(l) = &line {
            self.events.lock().push(SourceEvent::Read(l.clone()));
        }
        Ok(line)
    }
}
