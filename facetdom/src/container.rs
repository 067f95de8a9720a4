//! Mount point for a widget's rendered elements.

use log::trace;

use crate::element::{collect_clickable, find_element, find_element_mut, Element};
use crate::scroll;
use crate::text::{render_lines, Line};

/// A region of the page that a widget renders into.
///
/// Widgets clear and refill the container on every render; the container
/// itself only remembers its id and the current children.
#[derive(Debug, Clone, Default)]
pub struct Container {
    id: String,
    children: Vec<Element>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remove all children.
    pub fn empty(&mut self) -> &mut Self {
        self.children.clear();
        self
    }

    pub fn append(&mut self, element: Element) -> &mut Self {
        self.children.push(element);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Element> {
        self.children.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.children.iter().find_map(|c| find_element(c, id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.children.iter_mut().find_map(|c| find_element_mut(c, id))
    }

    /// Scroll the element with the given id. Returns true if its offset changed.
    pub fn scroll_by(&mut self, id: &str, dy: i16) -> bool {
        let Some(element) = self.find_mut(id) else {
            trace!("scroll target {id} not found in {}", self.id);
            return false;
        };
        scroll::scroll_by(element, dy)
    }

    /// Clickable element ids in document order.
    pub fn clickable_ids(&self) -> Vec<String> {
        self.children.iter().flat_map(collect_clickable).collect()
    }

    pub fn lines(&self) -> Vec<Line> {
        render_lines(&self.children)
    }
}
