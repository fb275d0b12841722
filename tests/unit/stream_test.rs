//! Unit tests for the stream drivers

use std::io::Cursor;

use markfmt::stream::{format_reader, format_texts};
use markfmt::Options;

use crate::helpers::utf8;

fn stripped() -> Options {
    Options {
        strip: true,
        ..Options::default()
    }
}

#[test]
fn reader_keeps_state_across_lines() {
    let input = Cursor::new("{r--one\ntwo--}\nthree");
    let out = format_reader(input, Vec::new(), Options::default()).unwrap();
    assert_eq!(
        utf8(out),
        "\x1b[0;31;49mone\ntwo\x1b[0;39;49m\nthree\x1b[0;39;49m"
    );
}

#[test]
fn reader_replaces_invalid_utf8() {
    let input = Cursor::new(b"{r--a\xffb--}\n".to_vec());
    let out = format_reader(input, Vec::new(), stripped()).unwrap();
    assert_eq!(utf8(out), "a\u{FFFD}b\n");
}

#[test]
fn reader_on_empty_input_writes_only_reset() {
    let out = format_reader(Cursor::new(""), Vec::new(), Options::default()).unwrap();
    assert_eq!(utf8(out), "\x1b[0;39;49m");
}

#[test]
fn texts_without_arguments_write_nothing() {
    let texts: [&str; 0] = [];
    let out = format_texts(Vec::new(), &texts, Options::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn each_text_is_sanitized() {
    let out = format_texts(Vec::new(), &["{r--a", "b"], Options::default()).unwrap();
    assert_eq!(
        utf8(out),
        "\x1b[0;31;49ma\x1b[0;39;49m b\x1b[0;39;49m"
    );
}
