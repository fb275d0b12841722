//! Stack of absolute format masks.
//!
//! The base entry is the initial mask and is never popped, so the stack is
//! never empty and every operation on it is infallible.

use super::mask::FormatMask;

#[derive(Debug, Clone)]
pub struct FormatStack {
    base: FormatMask,
    /// Masks pushed by still-open tags, innermost last
    open: Vec<FormatMask>,
}

impl FormatStack {
    pub fn new() -> Self {
        Self {
            base: FormatMask::INITIAL,
            open: Vec::new(),
        }
    }

    /// Number of masks including the base; always at least 1.
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }

    /// The active absolute mask.
    pub fn top(&self) -> &FormatMask {
        self.open.last().unwrap_or(&self.base)
    }

    /// Merge `delta` onto the current top and make the result the new top.
    pub fn push(&mut self, delta: &FormatMask) -> &FormatMask {
        let merged = self.top().merge_delta(delta);
        debug_assert!(merged.is_absolute());
        self.open.push(merged);
        self.top()
    }

    /// Discard the top mask and return it; the base mask stays put.
    pub fn pop(&mut self) -> Option<FormatMask> {
        self.open.pop()
    }
}

impl Default for FormatStack {
    fn default() -> Self {
        Self::new()
    }
}
