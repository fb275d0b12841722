//! Formatting state model.
//!
//! Provides the pieces the automaton drives:
//! - types: colors and text attributes
//! - mask: absolute/delta format masks and how they merge
//! - ansi: rendering an absolute mask as an SGR escape sequence
//! - stack: the stack of absolute masks for open tags

mod ansi;
mod mask;
mod stack;
mod types;

pub use ansi::CSI;
pub use mask::{ColorSlot, FormatMask};
pub use stack::FormatStack;
pub use types::{Attribute, Attributes, Color};
