pub mod grid;
pub mod render;
pub mod rules;
pub mod seed;
pub mod step;

mod parse_util;

pub use grid::Boundary;
pub use grid::Coord;
pub use grid::Grid;
pub use parse_util::ConvertError;
pub use step::Generations;
pub use step::step;

/// Signed cell coordinate, used when probing cells that may lie past the edges of a grid.
pub type Offset = isize;
