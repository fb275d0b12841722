//! Drivers that run automatons over the two input sources.
//!
//! - arguments: one fresh automaton per argument, separated by a space
//! - readers: one automaton for the whole stream, fed line by line

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::automaton::Automaton;
use crate::config::Options;

/// Format each text with its own automaton, writing a single space between them.
pub fn format_texts<W, S>(mut out: W, texts: &[S], options: Options) -> io::Result<W>
where
    W: Write,
    S: AsRef<str>,
{
    for (index, text) in texts.iter().enumerate() {
        if index > 0 {
            out.write_all(b" ")?;
        }
        let mut automaton = Automaton::new(&mut out, options)?;
        automaton.feed(text.as_ref())?;
        automaton.finish()?;
    }
    out.flush()?;
    Ok(out)
}

/// Format everything `input` yields with a single automaton.
///
/// Input is read one line at a time and output is flushed after each line so
/// interactive pipes see results immediately. Invalid UTF-8 is replaced with
/// U+FFFD.
pub fn format_reader<R, W>(mut input: R, out: W, options: Options) -> io::Result<W>
where
    R: BufRead,
    W: Write,
{
    let mut automaton = Automaton::new(out, options)?;
    let mut line = Vec::new();
    let mut lines = 0usize;
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lines += 1;
        automaton.feed(&String::from_utf8_lossy(&line))?;
        automaton.flush_output()?;
    }
    debug!(lines, depth = automaton.depth(), "input exhausted");
    automaton.finish()
}
