mod color;
mod enums;
mod style;

pub use color::Color;
pub use enums::Display;
pub use style::Style;
