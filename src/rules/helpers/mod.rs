pub mod calendar;
pub mod text;

pub use calendar::*;
pub use text::*;
