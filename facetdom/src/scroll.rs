use crate::element::Element;
use crate::text::content_height;
use crate::types::Overflow;

/// Largest vertical offset that still fills the element's viewport.
///
/// Elements without a height limit cannot scroll, so their maximum is 0.
pub fn max_scroll_y(element: &Element) -> u16 {
    let Some(viewport) = element.max_height else {
        return 0;
    };
    let content = u16::try_from(content_height(element)).unwrap_or(u16::MAX);
    content.saturating_sub(viewport)
}

/// Set the vertical offset, clamped to the scrollable range.
pub fn set_scroll_y(element: &mut Element, y: u16) {
    element.scroll_offset.1 = y.min(max_scroll_y(element));
}

/// Scroll an element by a delta amount.
/// Returns true if the scroll offset changed.
pub fn scroll_by(element: &mut Element, dy: i16) -> bool {
    if element.overflow_y != Overflow::Scroll {
        return false;
    }

    let current = element.scroll_offset.1;
    let max_y = max_scroll_y(element) as i32;
    let new_y = (current as i32 + dy as i32).clamp(0, max_y) as u16;

    if new_y != current {
        element.scroll_offset.1 = new_y;
        true
    } else {
        false
    }
}
