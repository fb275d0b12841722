//! Streaming markup-to-ANSI automaton.
//!
//! Consumes `{options--text--}` markup one character at a time and writes
//! literal text interleaved with SGR escape sequences. The automaton is
//! greedy: a tag takes effect as soon as its `--` terminator arrives, it never
//! waits for a matching `--}`, and malformed tags are written out as plain
//! text instead of failing.

mod escape;
mod state;
mod tag;

pub use escape::control_char;
pub use state::State;
pub use tag::{PendingTag, TagError, TagOption, INHERIT_COLOR};

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::Options;
use crate::format::{FormatMask, FormatStack};
use crate::sink::Sink;

/// Terminates the options of an opening tag
const OPENING_TERMINATOR: &str = "--";
/// Closes the innermost open tag
const CLOSING_TAG: &str = "--}";

/// Translate a whole string with a fresh automaton.
pub fn render(input: &str, options: Options) -> String {
    let mut out = Vec::with_capacity(input.len());
    let result = Automaton::new(&mut out, options)
        .and_then(|mut automaton| automaton.feed(input).and_then(|()| automaton.finish()));
    // Writing into a Vec<u8> cannot fail.
    debug_assert!(result.is_ok());
    // Input was a &str and escapes are ASCII, so the bytes are valid UTF-8.
    String::from_utf8_lossy(&out).into_owned()
}

/// One markup stream being translated.
///
/// Owns its format stack and pending buffer; independent automatons share
/// nothing.
#[derive(Debug)]
pub struct Automaton<W: Write> {
    sink: Sink<W>,
    options: Options,
    stack: FormatStack,
    state: State,
    /// Raw characters not yet known to be literal text
    pending: String,
    tag: PendingTag,
}

impl<W: Write> Automaton<W> {
    /// Create an automaton writing to `out`.
    ///
    /// Writes the initial format right away when `reset_on_start` is set.
    pub fn new(out: W, options: Options) -> io::Result<Self> {
        let mut automaton = Self {
            sink: Sink::new(out, options.strip),
            options,
            stack: FormatStack::new(),
            state: State::Default,
            pending: String::new(),
            tag: PendingTag::new(),
        };
        if options.reset_on_start {
            automaton.sink.write_escape(&FormatMask::INITIAL.to_ansi())?;
        }
        Ok(automaton)
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Stack depth including the base format.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Active absolute format.
    pub fn top(&self) -> &FormatMask {
        self.stack.top()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Writer the output goes to.
    pub fn get_ref(&self) -> &W {
        self.sink.get_ref()
    }

    /// Flush the underlying writer. Buffered markup is left alone.
    pub fn flush_output(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    /// Feed every character of `input`.
    pub fn feed(&mut self, input: &str) -> io::Result<()> {
        input.chars().try_for_each(|c| self.accept(c))
    }

    /// Process one input character.
    pub fn accept(&mut self, c: char) -> io::Result<()> {
        match self.state {
            State::ParsingEscape => self.accept_escaped(c),
            State::ParsingOpeningTag => self.accept_in_tag(c),
            State::SkippingLeadingPadding if c.is_whitespace() && !self.sink.strips() => Ok(()),
            State::SkippingLeadingPadding => {
                self.state = State::Default;
                self.accept_text(c)
            }
            State::Default => self.accept_text(c),
        }
    }

    /// End of stream: write whatever is still buffered, then the trailing
    /// reset if sanitizing, and return the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.state == State::ParsingOpeningTag {
            debug!(tag = %self.pending, "stream ended inside an opening tag");
        }
        self.flush_pending()?;
        if self.options.sanitize {
            self.sink.write_escape(&FormatMask::INITIAL.to_ansi())?;
        }
        self.sink.flush()?;
        Ok(self.sink.into_inner())
    }

    /// Trim only applies when escapes are actually emitted.
    fn trimming(&self) -> bool {
        self.stack.top().trim && !self.sink.strips()
    }

    fn accept_text(&mut self, c: char) -> io::Result<()> {
        match c {
            c if c.is_whitespace() => {
                self.pending.push(c);
                if !self.trimming() {
                    self.flush_pending()?;
                }
                Ok(())
            }
            '{' => {
                self.flush_pending()?;
                self.pending.push(c);
                self.tag = PendingTag::new();
                self.state = State::ParsingOpeningTag;
                Ok(())
            }
            '\\' if self.options.escape => {
                self.flush_pending()?;
                self.pending.push(c);
                self.state = State::ParsingEscape;
                Ok(())
            }
            // may be the start of `--}`
            '-' => {
                self.pending.push(c);
                Ok(())
            }
            '}' => {
                self.pending.push(c);
                if self.pending.ends_with(CLOSING_TAG) && self.stack.depth() > 1 {
                    self.close_tag()
                } else {
                    self.flush_pending()
                }
            }
            _ => {
                self.pending.push(c);
                self.flush_pending()
            }
        }
    }

    fn accept_in_tag(&mut self, c: char) -> io::Result<()> {
        if c.is_whitespace() {
            self.pending.push(c);
            return Ok(());
        }
        if c == '-' {
            self.pending.push(c);
            if self.pending.ends_with(OPENING_TERMINATOR) {
                return self.open_tag();
            }
            return Ok(());
        }

        match self.tag.accept(c) {
            Ok(()) => {
                self.pending.push(c);
                Ok(())
            }
            Err(err @ TagError::Unrecognized(_)) => {
                debug!(tag = %self.pending, %err, "abandoning tag");
                self.abandon_tag()?;
                self.accept_text(c)
            }
            Err(err) => {
                self.pending.push(c);
                debug!(tag = %self.pending, %err, "abandoning tag");
                self.abandon_tag()
            }
        }
    }

    fn accept_escaped(&mut self, c: char) -> io::Result<()> {
        self.state = State::Default;
        match control_char(c) {
            Some(control) => {
                trace!(escape = %c, "control character");
                self.pending.clear();
                self.pending.push(control);
            }
            None => self.pending.push(c),
        }
        self.flush_pending()
    }

    fn open_tag(&mut self) -> io::Result<()> {
        let delta = *self.tag.delta();
        let top = *self.stack.push(&delta);
        trace!(depth = self.stack.depth(), tag = %self.pending, "push");
        self.sink.write_escape(&top.to_ansi())?;
        self.pending.clear();
        self.tag = PendingTag::new();
        self.state = if delta.trim {
            State::SkippingLeadingPadding
        } else {
            State::Default
        };
        Ok(())
    }

    fn close_tag(&mut self) -> io::Result<()> {
        let closing = self.pending.len() - CLOSING_TAG.len();
        self.pending.truncate(closing);
        if self.trimming() {
            let kept = self.pending.trim_end().len();
            self.pending.truncate(kept);
        }
        self.flush_pending()?;

        self.stack.pop();
        trace!(depth = self.stack.depth(), "pop");
        let top = self.stack.top().to_ansi();
        self.sink.write_escape(&top)?;
        self.state = State::Default;
        Ok(())
    }

    /// Give up on the current tag: its raw text becomes literal output.
    fn abandon_tag(&mut self) -> io::Result<()> {
        self.tag = PendingTag::new();
        self.state = State::Default;
        self.flush_pending()
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        self.sink.write_text(&self.pending)?;
        self.pending.clear();
        Ok(())
    }
}
