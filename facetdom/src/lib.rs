pub mod container;
pub mod element;
pub mod event;
pub mod scroll;
pub mod text;
pub mod types;

pub use container::Container;
pub use element::{collect_clickable, find_element, find_element_mut, Element};
pub use event::Event;
pub use text::{render_lines, Line, Span};
pub use types::*;
