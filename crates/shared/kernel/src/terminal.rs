//! Line-oriented terminal capability.
//!
//! Everything interactive in the workspace (the vet clinic, the console menus)
//! talks through [`Terminal`], so the same code runs against the process
//! stdio or against in-memory buffers in tests.

use std::io::{self, BufRead, Write};

pub trait Terminal {
    /// Writes `message` without a newline, flushes, then reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped,
    /// other whitespace is preserved.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying streams.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Writes `message` followed by a newline.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying stream.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        (**self).prompt(message)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        (**self).say(message)
    }
}

/// Process stdin/stdout. Locks are taken per call, so several holders can
/// share the process streams without deadlocking each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        {
            let mut out = io::stdout().lock();
            out.write_all(message.as_bytes())?;
            out.flush()?;
        }
        read_line(&mut io::stdin().lock())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{message}")?;
        out.flush()
    }
}

/// Terminal over arbitrary buffered streams, typically `&[u8]` input and a
/// `Vec<u8>` transcript.
#[derive(Debug)]
pub struct BufferedTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> BufferedTerminal<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead> BufferedTerminal<R, Vec<u8>> {
    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> Terminal for BufferedTerminal<R, W> {
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()?;
        read_line(&mut self.reader)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }
}

fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
