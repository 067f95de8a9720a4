mod color;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use enums::{Direction, Overflow, TextStyle};
pub use style::Style;
