//! Output sink for the automaton.
//!
//! Literal text always reaches the underlying writer; escape sequences are
//! dropped when stripping so the stack bookkeeping stays identical in both
//! modes.

use std::io::{self, Write};

#[derive(Debug)]
pub struct Sink<W: Write> {
    out: W,
    strip: bool,
}

impl<W: Write> Sink<W> {
    pub fn new(out: W, strip: bool) -> Self {
        Self { out, strip }
    }

    /// Whether escape sequences are being discarded.
    pub fn strips(&self) -> bool {
        self.strip
    }

    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.out.write_all(text.as_bytes())
    }

    pub fn write_escape(&mut self, sequence: &str) -> io::Result<()> {
        if self.strip {
            return Ok(());
        }
        self.out.write_all(sequence.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
