use super::{Color, TextStyle};

/// Visual properties of an element, inherited by its descendants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub foreground: Option<Color>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Properties set here win; unset ones come from `parent`.
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            foreground: self.foreground.clone().or_else(|| parent.foreground.clone()),
            text_style: self.text_style.merge(parent.text_style),
        }
    }
}
