//! Format data types.
//!
//! Contains the building blocks of one formatting state:
//! - Color: the eight base ANSI colors plus the `Default` and `Current` sentinels
//! - Attribute: one of the nine toggleable text attributes
//! - Attributes: the set of attributes that are switched on

/// ANSI base colors and the two sentinels a tag can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Terminal default color (SGR 39 / 49)
    #[default]
    Default,
    /// Keep whatever color the enclosing format uses.
    /// Only legal inside a delta mask.
    Current,
}

impl Color {
    /// Offset added to the 30 (fg) / 40 (bg) base.
    ///
    /// `Current` has no code of its own; absolute masks never carry it.
    pub fn offset(self) -> Option<u8> {
        match self {
            Color::Black => Some(0),
            Color::Red => Some(1),
            Color::Green => Some(2),
            Color::Yellow => Some(3),
            Color::Blue => Some(4),
            Color::Magenta => Some(5),
            Color::Cyan => Some(6),
            Color::White => Some(7),
            Color::Default => Some(9),
            Color::Current => None,
        }
    }

    /// Map a lowercase color letter (`krgybmcw`) to its base color.
    pub fn from_letter(letter: char) -> Option<Color> {
        match letter {
            'k' => Some(Color::Black),
            'r' => Some(Color::Red),
            'g' => Some(Color::Green),
            'y' => Some(Color::Yellow),
            'b' => Some(Color::Blue),
            'm' => Some(Color::Magenta),
            'c' => Some(Color::Cyan),
            'w' => Some(Color::White),
            _ => None,
        }
    }
}

/// Toggleable text attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Reversed,
    Blink,
    Bold,
    Italic,
    Underline,
    Overline,
    DoubleUnderline,
    Strikethrough,
    Dim,
}

impl Attribute {
    /// Attributes in the order their SGR codes are written.
    pub const SGR_ORDER: [Attribute; 9] = [
        Attribute::Bold,
        Attribute::Dim,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reversed,
        Attribute::Strikethrough,
        Attribute::DoubleUnderline,
        Attribute::Overline,
    ];

    /// SGR parameter that switches this attribute on.
    pub fn sgr_code(self) -> u8 {
        match self {
            Attribute::Bold => 1,
            Attribute::Dim => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 6,
            Attribute::Reversed => 7,
            Attribute::Strikethrough => 9,
            Attribute::DoubleUnderline => 21,
            Attribute::Overline => 53,
        }
    }
}

/// Which of the nine attributes are on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
    pub reversed: bool,
    pub blink: bool,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub overline: bool,
    pub double_underline: bool,
    pub strikethrough: bool,
    pub dim: bool,
}

impl Attributes {
    /// No attribute set.
    pub const NONE: Attributes = Attributes {
        reversed: false,
        blink: false,
        bold: false,
        italic: false,
        underline: false,
        overline: false,
        double_underline: false,
        strikethrough: false,
        dim: false,
    };

    fn slot(&mut self, attribute: Attribute) -> &mut bool {
        match attribute {
            Attribute::Reversed => &mut self.reversed,
            Attribute::Blink => &mut self.blink,
            Attribute::Bold => &mut self.bold,
            Attribute::Italic => &mut self.italic,
            Attribute::Underline => &mut self.underline,
            Attribute::Overline => &mut self.overline,
            Attribute::DoubleUnderline => &mut self.double_underline,
            Attribute::Strikethrough => &mut self.strikethrough,
            Attribute::Dim => &mut self.dim,
        }
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::Reversed => self.reversed,
            Attribute::Blink => self.blink,
            Attribute::Bold => self.bold,
            Attribute::Italic => self.italic,
            Attribute::Underline => self.underline,
            Attribute::Overline => self.overline,
            Attribute::DoubleUnderline => self.double_underline,
            Attribute::Strikethrough => self.strikethrough,
            Attribute::Dim => self.dim,
        }
    }

    pub fn insert(&mut self, attribute: Attribute) {
        *self.slot(attribute) = true;
    }

    /// XOR every attribute set in `other` into `self`.
    pub fn toggle(&mut self, other: &Attributes) {
        for attribute in Attribute::SGR_ORDER {
            if other.contains(attribute) {
                let slot = self.slot(attribute);
                *slot = !*slot;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Attributes::NONE
    }
}
