/// High-level events with element targeting.
///
/// Backends translate their native input (mouse, keyboard, DOM events) into
/// these before handing them to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An element was activated (mouse click, Enter on a focused link).
    Click { target: Option<String> },
    /// Vertical scroll over an element.
    Scroll {
        target: Option<String>,
        delta_y: i16,
    },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn scroll(target: impl Into<String>, delta_y: i16) -> Self {
        Self::Scroll {
            target: Some(target.into()),
            delta_y,
        }
    }
}
