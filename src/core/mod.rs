pub mod color;
pub mod error;

pub use color::{Color, Palette};
pub use error::{GameError, Result};
