//! Test helper utilities

#![allow(dead_code)]

use std::process::Command;

use tempfile::TempDir;
use vte::{Params, Parser, Perform};

use markfmt::{Automaton, Options};

/// Piece of decoded automaton output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Parameters of one `CSI ... m` sequence
    Sgr(Vec<u16>),
}

#[derive(Default)]
struct Collector {
    segments: Vec<Segment>,
}

impl Collector {
    fn push_char(&mut self, c: char) {
        if let Some(Segment::Text(text)) = self.segments.last_mut() {
            text.push(c);
        } else {
            self.segments.push(Segment::Text(c.to_string()));
        }
    }
}

impl Perform for Collector {
    fn print(&mut self, c: char) {
        self.push_char(c);
    }

    fn execute(&mut self, byte: u8) {
        self.push_char(char::from(byte));
    }

    fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        assert_eq!(action, 'm', "only SGR sequences are expected");
        let params = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        self.segments.push(Segment::Sgr(params));
    }
}

/// Split output into literal text and SGR parameter lists using vte.
pub fn decode(output: &str) -> Vec<Segment> {
    let mut collector = Collector::default();
    let mut parser = Parser::new();
    parser.advance(&mut collector, output.as_bytes());
    collector.segments
}

/// Literal text only, in order.
pub fn text_of(output: &str) -> String {
    decode(output)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Sgr(_) => None,
        })
        .collect()
}

pub fn text(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

pub fn sgr(params: &[u16]) -> Segment {
    Segment::Sgr(params.to_vec())
}

/// Colored output, no trailing reset
pub fn colored() -> Options {
    Options {
        sanitize: false,
        ..Options::default()
    }
}

/// Strip mode, no trailing reset
pub fn stripped() -> Options {
    Options {
        strip: true,
        sanitize: false,
        ..Options::default()
    }
}

/// Run one automaton over `input` and return everything it wrote.
pub fn run(input: &str, options: Options) -> String {
    let mut automaton = Automaton::new(Vec::new(), options).expect("Failed to create automaton");
    automaton.feed(input).expect("Failed to feed input");
    let out = automaton.finish().expect("Failed to finish");
    String::from_utf8(out).expect("Output is not UTF-8")
}

/// Helper to run the markfmt CLI and capture output.
///
/// HOME points at an empty temp dir so a user config file cannot leak in.
pub fn run_markfmt(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_markfmt"))
        .args(args)
        .env("HOME", home.path())
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute markfmt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
