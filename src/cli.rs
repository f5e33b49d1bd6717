use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

use conway::Boundary;
use conway::grid::DEFAULT_HEIGHT;
use conway::grid::DEFAULT_WIDTH;

#[derive(Parser, Debug)]
#[command(name = "conway")]
#[command(version, about = "Conway's Game of Life, one generation per keypress")]
pub struct Cli {
    /// Number of columns of the grid
    #[arg(long, short = 'W', default_value_t = DEFAULT_WIDTH, env = "CONWAY_WIDTH")]
    pub width: usize,

    /// Number of rows of the grid
    #[arg(long, short = 'H', default_value_t = DEFAULT_HEIGHT, env = "CONWAY_HEIGHT")]
    pub height: usize,

    /// What lies past the edges of the grid
    #[arg(long, short, value_enum, default_value_t = BoundaryArg::Toroidal, env = "CONWAY_BOUNDARY")]
    pub boundary: BoundaryArg,

    /// Stop after showing this many generations
    #[arg(long, short = 'n', env = "CONWAY_GENERATIONS")]
    pub generations: Option<u64>,

    /// Advance every MILLIS milliseconds instead of waiting for a keypress
    #[arg(long, value_name = "MILLIS")]
    pub auto: Option<u64>,

    /// Seed file with one `x, y` coordinate per line. Standard input is read when absent or `-`
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    /// Edges wrap around
    Toroidal,

    /// Cells past the edges are always dead
    Bounded,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Toroidal => Boundary::Toroidal,
            BoundaryArg::Bounded => Boundary::Bounded,
        }
    }
}
