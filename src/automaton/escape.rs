//! Backslash escapes recognized when escape mode is on.

/// Control character for the escape `\<c>`, if `c` names one.
pub fn control_char(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'r' => Some('\r'),
        'n' => Some('\n'),
        'f' => Some('\x0c'),
        't' => Some('\t'),
        'v' => Some('\x0b'),
        _ => None,
    }
}
