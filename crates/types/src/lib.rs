pub mod color;
pub mod geometry;
pub mod locale;

pub use color::Color;
pub use geometry::{Margins, Orientation, PageSize};
pub use locale::Locale;
