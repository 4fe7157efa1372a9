//! # Printers
//!
//! Where prompt and error text goes. [`StdoutPrinter`] writes to the real
//! terminal; [`BufferPrinter`] captures everything into a shared string.
use parking_lot::Mutex;
use std::{
    io::{self, Write},
    sync::Arc,
};

/// A sink for prompt output.
pub trait Printer: Send {
    /// Writes `text` without a trailing newline.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Writes to standard output, flushing after every write so prompts
/// without a newline show up before the read starts.
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Captures output in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    buffer: Arc<Mutex<String>>,
}

impl BufferPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }
}

impl Printer for BufferPrinter {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_printer_shares_contents_across_clones() {
        let reader = BufferPrinter::new();
        let mut writer = reader.clone();

        writer.write("? Name: ").unwrap();
        writer.write_line("! nope").unwrap();

        assert_eq!(reader.contents(), "? Name: ! nope\n");
    }
}
