//! Format masks and the merge rule between them.
//!
//! An absolute mask lives on the format stack and fully describes the
//! terminal state. A delta mask is what a single `{options--` tag asks for:
//! its attributes toggle the enclosing ones and its colors may be
//! `Color::Current`.

use super::types::{Attributes, Color};

/// One formatting state, absolute or delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatMask {
    /// Fully constructed; required before rendering
    pub valid: bool,
    /// Render with SGR 0 / rebuild from the initial mask when merged
    pub reset: bool,
    /// Drop leading and trailing whitespace of this region
    pub trim: bool,
    pub attrs: Attributes,
    pub fg: Color,
    pub fg_bright: bool,
    pub bg: Color,
    pub bg_bright: bool,
}

/// Which color slot of a mask a color option writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Foreground,
    Background,
}

impl FormatMask {
    /// State of a fresh terminal: reset, default colors, nothing toggled.
    pub const INITIAL: FormatMask = FormatMask {
        valid: true,
        reset: true,
        trim: false,
        attrs: Attributes::NONE,
        fg: Color::Default,
        fg_bright: false,
        bg: Color::Default,
        bg_bright: false,
    };

    /// Delta that changes nothing; the starting point of every parsed tag.
    pub const EMPTY: FormatMask = FormatMask {
        valid: true,
        reset: false,
        trim: false,
        attrs: Attributes::NONE,
        fg: Color::Current,
        fg_bright: false,
        bg: Color::Current,
        bg_bright: false,
    };

    pub fn with_color(mut self, slot: ColorSlot, color: Color, bright: bool) -> Self {
        self.set_color(slot, color, bright);
        self
    }

    pub fn set_color(&mut self, slot: ColorSlot, color: Color, bright: bool) {
        match slot {
            ColorSlot::Foreground => {
                self.fg = color;
                self.fg_bright = bright;
            }
            ColorSlot::Background => {
                self.bg = color;
                self.bg_bright = bright;
            }
        }
    }

    /// Compute the absolute mask produced by applying `delta` on top of `self`.
    ///
    /// A delta with `reset` starts over from [`FormatMask::INITIAL`]. `trim`
    /// always comes from the delta, attributes are XORed, and colors are
    /// replaced unless the delta names `Color::Current`.
    pub fn merge_delta(&self, delta: &FormatMask) -> FormatMask {
        debug_assert!(self.valid, "merging onto an unfinished mask");
        debug_assert!(delta.valid, "merging an unfinished delta");

        let mut merged = if delta.reset { FormatMask::INITIAL } else { *self };
        merged.trim = delta.trim;
        merged.attrs.toggle(&delta.attrs);
        if delta.fg != Color::Current {
            merged.fg = delta.fg;
            merged.fg_bright = delta.fg_bright;
        }
        if delta.bg != Color::Current {
            merged.bg = delta.bg;
            merged.bg_bright = delta.bg_bright;
        }
        merged.valid = true;
        merged
    }

    /// True when no sentinel colors are left, i.e. the mask can live on the stack.
    pub fn is_absolute(&self) -> bool {
        self.fg != Color::Current && self.bg != Color::Current
    }
}

impl Default for FormatMask {
    fn default() -> Self {
        FormatMask::INITIAL
    }
}
