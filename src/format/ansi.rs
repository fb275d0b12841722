//! SGR (Select Graphic Rendition) rendering.
//!
//! Turns an absolute [`FormatMask`] into the `ESC [ n1;n2;...;nk m`
//! sequence that puts a terminal into exactly that state. The code order is
//! fixed: reset, attributes in [`Attribute::SGR_ORDER`], foreground,
//! background.

use super::mask::FormatMask;
use super::types::{Attribute, Color};

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

const FG_BASE: u8 = 30;
const BG_BASE: u8 = 40;
const BRIGHT_OFFSET: u8 = 60;

fn color_code(color: Color, bright: bool, base: u8) -> u8 {
    debug_assert!(color != Color::Current, "absolute mask carries an inherit color");
    // Default (9) has no bright variant; the alphabet cannot produce one.
    let offset = color.offset().unwrap_or(9);
    let bright = if bright && color != Color::Default {
        BRIGHT_OFFSET
    } else {
        0
    };
    base + offset + bright
}

impl FormatMask {
    /// SGR parameters for this mask, in wire order.
    pub fn ansi_codes(&self) -> Vec<u8> {
        debug_assert!(self.valid && self.reset, "rendering a non-absolute mask");

        let mut codes = Vec::with_capacity(12);
        if self.reset {
            codes.push(0);
        }
        codes.extend(
            Attribute::SGR_ORDER
                .iter()
                .filter(|attribute| self.attrs.contains(**attribute))
                .map(|attribute| attribute.sgr_code()),
        );
        codes.push(color_code(self.fg, self.fg_bright, FG_BASE));
        codes.push(color_code(self.bg, self.bg_bright, BG_BASE));
        codes
    }

    /// Full escape sequence for this mask.
    pub fn to_ansi(&self) -> String {
        let params: Vec<String> = self.ansi_codes().iter().map(u8::to_string).collect();
        format!("{}{}m", CSI, params.join(";"))
    }
}
