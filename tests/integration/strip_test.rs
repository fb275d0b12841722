//! Strip mode: markup is consumed and only literal text remains.

use markfmt::stream::format_texts;

use crate::helpers::{run, stripped};

fn strip(input: &str) -> String {
    run(input, stripped())
}

#[test]
fn tags_are_removed() {
    insta::assert_snapshot!(strip("Hello {r*--world--}!"), @"Hello world!");
}

#[test]
fn nested_tags_are_removed() {
    insta::assert_snapshot!(strip("x{r--y{g--z--}w--}v"), @"xyzwv");
}

#[test]
fn malformed_tags_survive_verbatim() {
    insta::assert_snapshot!(strip("{rx--not a tag--}"), @"{rx--not a tag--}");
    insta::assert_snapshot!(strip("{rgb--too many--}"), @"{rgb--too many--}");
    insta::assert_snapshot!(strip("{**--twice--}"), @"{**--twice--}");
}

#[test]
fn unmatched_closers_survive_verbatim() {
    insta::assert_snapshot!(strip("done--} --}"), @"done--} --}");
}

#[test]
fn dashes_in_text_are_kept() {
    insta::assert_snapshot!(strip("{c--a - b -- c--}"), @"a - b -- c");
}

#[test]
fn multiline_document() {
    let input = "{_--Status--}\n{g--ok--}    build\n{R*--fail--}  tests\n";
    insta::assert_snapshot!(strip(input), @r"
    Status
    ok    build
    fail  tests
    ");
}

#[test]
fn arguments_are_joined_by_a_space() {
    let out = format_texts(Vec::new(), &["{r--a--}", "b", "{*--c"], stripped()).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @"a b c");
}
