pub mod fill;
pub mod grid;

pub use fill::flood_fill;
pub use grid::{load_grid, Grid};
