//! Opening-tag option alphabet and the tag being parsed.
//!
//! | char              | option                               |
//! |-------------------|--------------------------------------|
//! | `krgybmcw`        | base color (fg first, bg second)     |
//! | `KRGYBMCW`        | bright color                         |
//! | `d`               | terminal default color               |
//! | `;`               | keep the current color               |
//! | `%!*/_^=~.`       | toggle reversed, blink, bold, italic, underline, overline, double underline, strikethrough, dim |
//! | `#`               | trim whitespace inside the region    |
//! | `0`               | reset to the initial format first    |

use crate::format::{Attribute, Color, ColorSlot, FormatMask};

/// Token that keeps the enclosing color
pub const INHERIT_COLOR: char = ';';

/// One option character of an opening tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOption {
    Color { color: Color, bright: bool },
    Attribute(Attribute),
    Trim,
    Reset,
}

impl TagOption {
    pub fn from_char(c: char) -> Option<TagOption> {
        let option = match c {
            'd' => TagOption::Color {
                color: Color::Default,
                bright: false,
            },
            INHERIT_COLOR => TagOption::Color {
                color: Color::Current,
                bright: false,
            },
            '%' => TagOption::Attribute(Attribute::Reversed),
            '!' => TagOption::Attribute(Attribute::Blink),
            '*' => TagOption::Attribute(Attribute::Bold),
            '/' => TagOption::Attribute(Attribute::Italic),
            '_' => TagOption::Attribute(Attribute::Underline),
            '^' => TagOption::Attribute(Attribute::Overline),
            '=' => TagOption::Attribute(Attribute::DoubleUnderline),
            '~' => TagOption::Attribute(Attribute::Strikethrough),
            '.' => TagOption::Attribute(Attribute::Dim),
            '#' => TagOption::Trim,
            '0' => TagOption::Reset,
            c if c.is_ascii_uppercase() => TagOption::Color {
                color: Color::from_letter(c.to_ascii_lowercase())?,
                bright: true,
            },
            c => TagOption::Color {
                color: Color::from_letter(c)?,
                bright: false,
            },
        };
        Some(option)
    }

    /// Character that spells this option inside a tag.
    pub fn symbol(self) -> char {
        match self {
            TagOption::Color {
                color: Color::Default,
                ..
            } => 'd',
            TagOption::Color {
                color: Color::Current,
                ..
            } => INHERIT_COLOR,
            TagOption::Color { color, bright } => {
                let letter = match color {
                    Color::Black => 'k',
                    Color::Red => 'r',
                    Color::Green => 'g',
                    Color::Yellow => 'y',
                    Color::Blue => 'b',
                    Color::Magenta => 'm',
                    Color::Cyan => 'c',
                    _ => 'w',
                };
                if bright {
                    letter.to_ascii_uppercase()
                } else {
                    letter
                }
            }
            TagOption::Attribute(attribute) => match attribute {
                Attribute::Reversed => '%',
                Attribute::Blink => '!',
                Attribute::Bold => '*',
                Attribute::Italic => '/',
                Attribute::Underline => '_',
                Attribute::Overline => '^',
                Attribute::DoubleUnderline => '=',
                Attribute::Strikethrough => '~',
                Attribute::Dim => '.',
            },
            TagOption::Trim => '#',
            TagOption::Reset => '0',
        }
    }
}

/// Why an opening tag was abandoned.
///
/// Never surfaces to callers: the tag text is written out literally instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("more than two colors in one tag")]
    TooManyColors,

    #[error("option '{0}' given twice")]
    DuplicateOption(char),

    #[error("'{0}' is not a tag option")]
    Unrecognized(char),
}

/// Delta being assembled from the options of one opening tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTag {
    delta: FormatMask,
    color_parts: u8,
}

impl PendingTag {
    pub fn new() -> Self {
        Self {
            delta: FormatMask::EMPTY,
            color_parts: 0,
        }
    }

    pub fn apply(&mut self, option: TagOption) -> Result<(), TagError> {
        match option {
            TagOption::Color { color, bright } => {
                let slot = match self.color_parts {
                    0 => ColorSlot::Foreground,
                    1 => ColorSlot::Background,
                    _ => return Err(TagError::TooManyColors),
                };
                self.delta.set_color(slot, color, bright);
                self.color_parts += 1;
            }
            TagOption::Attribute(attribute) => {
                if self.delta.attrs.contains(attribute) {
                    return Err(TagError::DuplicateOption(option.symbol()));
                }
                self.delta.attrs.insert(attribute);
            }
            TagOption::Trim => {
                if self.delta.trim {
                    return Err(TagError::DuplicateOption(option.symbol()));
                }
                self.delta.trim = true;
            }
            TagOption::Reset => {
                if self.delta.reset {
                    return Err(TagError::DuplicateOption(option.symbol()));
                }
                self.delta.reset = true;
            }
        }
        Ok(())
    }

    /// Parse one more option character.
    pub fn accept(&mut self, c: char) -> Result<(), TagError> {
        let option = TagOption::from_char(c).ok_or(TagError::Unrecognized(c))?;
        self.apply(option)
    }

    pub fn delta(&self) -> &FormatMask {
        &self.delta
    }
}

impl Default for PendingTag {
    fn default() -> Self {
        Self::new()
    }
}
