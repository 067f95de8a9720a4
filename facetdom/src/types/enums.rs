#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// How an element treats content taller than its `max_height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    /// Clipped, offset ignored.
    Hidden,
    /// Clipped after skipping `scroll_offset.1` lines.
    Scroll,
}

/// Terminal text attributes. Backends without an attribute ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    /// Combine with an inherited style; any flag set on either side stays set.
    pub const fn merge(self, parent: TextStyle) -> Self {
        Self {
            bold: self.bold || parent.bold,
            underline: self.underline || parent.underline,
            dim: self.dim || parent.dim,
        }
    }
}
