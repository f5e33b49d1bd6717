use thiserror::Error;
use tracing::debug;

use crate::Offset;

/// Width of the fixed-size grid.
pub const DEFAULT_WIDTH: usize = 10;

/// Height of the fixed-size grid.
pub const DEFAULT_HEIGHT: usize = 10;

/// The Moore neighborhood of a cell, as offsets from it.
const NEIGHBORHOOD: [(i128, i128); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}, expected positive integers")]
    InvalidDimension { width: usize, height: usize },

    #[error("Seed coordinate ({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A cell position inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// What lies past the edges of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Boundary {
    /// Edges wrap around, so the grid is a torus.
    #[default]
    Toroidal,

    /// Everything outside of the grid is permanently dead.
    Bounded,
}

impl Boundary {
    /// Map `(x, y)` to a stored position, or `None` if it lies in the dead border.
    fn resolve(self, x: i128, y: i128, width: usize, height: usize) -> Option<(usize, usize)> {
        let (w, h) = (width as i128, height as i128);

        match self {
            // `rem_euclid` is never negative, and is less than `w` (resp. `h`).
            Boundary::Toroidal => Some((x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)),
            Boundary::Bounded => {
                if (0..w).contains(&x) && (0..h).contains(&y) {
                    Some((x as usize, y as usize))
                } else {
                    None
                }
            }
        }
    }
}

/// A generation of the automaton.
///
/// Cells are stored row-major in a flat buffer, so cell `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    boundary: Boundary,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty (all dead) grid.
    pub fn new(width: usize, height: usize, boundary: Boundary) -> Result<Self, GridError> {
        // The cell count must fit a `Vec`, which in turn keeps every coordinate within `isize`.
        let len = width
            .checked_mul(height)
            .filter(|&n| n > 0 && n <= isize::MAX as usize)
            .ok_or(GridError::InvalidDimension { width, height })?;

        debug!(width, height, ?boundary, "Created grid");

        Ok(Self {
            width,
            height,
            boundary,
            cells: vec![false; len],
        })
    }

    /// Create an empty grid of `DEFAULT_WIDTH x DEFAULT_HEIGHT` cells.
    pub fn with_default_size(boundary: Boundary) -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            boundary,
            cells: vec![false; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    /// Build a grid with the same shape as `self` out of a new cell buffer.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), self.cells.len(), "cell buffer has the wrong size");

        Self {
            width: self.width,
            height: self.height,
            boundary: self.boundary,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Mark every coordinate in `coords` alive.
    ///
    /// All coordinates are checked before any of them is written, so on error the grid is left
    /// as it was.
    pub fn seed<I>(&mut self, coords: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let coords: Vec<Coord> = coords.into_iter().collect();

        if let Some(&Coord { x, y }) = coords
            .iter()
            .find(|c| c.x >= self.width || c.y >= self.height)
        {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        for Coord { x, y } in coords {
            let i = self.xy_from(x, y);

            if self.cells[i] {
                debug!(x, y, "Cell seeded more than once");
            }

            self.cells[i] = true;
        }

        debug!(population = self.population(), "Seeded grid");

        Ok(())
    }

    /// Whether the cell at `(x, y)` is alive. Coordinates outside of the grid are resolved by
    /// the boundary policy.
    pub fn is_alive(&self, x: Offset, y: Offset) -> bool {
        self.is_alive_wide(x as i128, y as i128)
    }

    /// Number of live cells among the 8 neighbors of `(x, y)`.
    pub fn alive_neighbor_count(&self, x: Offset, y: Offset) -> u8 {
        let (x, y) = (x as i128, y as i128);

        NEIGHBORHOOD
            .iter()
            .filter(|&&(dx, dy)| self.is_alive_wide(x + dx, y + dy))
            .count() as u8
    }

    /// Number of live cells in the grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Live cells, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(n, _)| {
                let (x, y) = self.xy_to(n);
                Coord { x, y }
            })
    }

    /// Stored state at `(x, y)`, which must lie inside the grid.
    pub(crate) fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.xy_from(x, y)]
    }

    fn is_alive_wide(&self, x: i128, y: i128) -> bool {
        match self.boundary.resolve(x, y, self.width, self.height) {
            Some((x, y)) => self.get(x, y),
            None => false,
        }
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.width, n / self.width)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::Boundary;
    use super::Coord;
    use super::Grid;
    use super::GridError;

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5, Boundary::Toroidal),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Grid::new(5, 0, Boundary::Bounded).is_err());
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert!(Grid::new(usize::MAX, 2, Boundary::Toroidal).is_err());
    }

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::new(4, 3, Boundary::Bounded).unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_default_size() {
        let grid = Grid::with_default_size(Boundary::Toroidal);

        assert_eq!((grid.width(), grid.height()), (10, 10));
        assert_eq!(grid, Grid::new(10, 10, Boundary::Toroidal).unwrap());
    }

    #[test]
    fn test_seed_one_past_the_edge() {
        let mut grid = Grid::new(5, 5, Boundary::Toroidal).unwrap();

        let res = grid.seed(coords(&[(5, 0)]));

        assert_eq!(
            res,
            Err(GridError::OutOfBounds {
                x: 5,
                y: 0,
                width: 5,
                height: 5
            })
        );
    }

    #[test]
    fn test_failed_seed_writes_nothing() {
        let mut grid = Grid::new(5, 5, Boundary::Bounded).unwrap();

        assert!(grid.seed(coords(&[(1, 1), (2, 2), (0, 9)])).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_seed_twice() {
        let mut once = Grid::new(4, 4, Boundary::Bounded).unwrap();
        once.seed(coords(&[(1, 2)])).unwrap();

        let mut twice = Grid::new(4, 4, Boundary::Bounded).unwrap();
        twice.seed(coords(&[(1, 2), (1, 2)])).unwrap();
        twice.seed([Coord::new(1, 2)]).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.population(), 1);
    }

    #[test]
    fn test_toroidal_wraps() {
        let mut grid = Grid::new(4, 3, Boundary::Toroidal).unwrap();
        grid.seed(coords(&[(0, 0)])).unwrap();

        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(4, 3));
        assert!(grid.is_alive(-4, -3));
        assert!(grid.is_alive(-8, 6));
        assert!(!grid.is_alive(-1, 0));
    }

    #[test]
    fn test_bounded_border_is_dead() {
        let mut grid = Grid::new(4, 3, Boundary::Bounded).unwrap();
        grid.seed(coords(&[(0, 0)])).unwrap();

        assert!(grid.is_alive(0, 0));
        assert!(!grid.is_alive(4, 3));
        assert!(!grid.is_alive(-4, -3));
    }

    #[test]
    fn test_neighbors_across_edges() {
        let mut grid = Grid::new(3, 3, Boundary::Toroidal).unwrap();
        grid.seed(coords(&[(0, 0), (2, 2)])).unwrap();

        // Every cell on a 3x3 torus neighbors every other cell
        assert_eq!(grid.alive_neighbor_count(1, 1), 2);
        assert_eq!(grid.alive_neighbor_count(0, 0), 1);

        let mut grid = Grid::new(3, 3, Boundary::Bounded).unwrap();
        grid.seed(coords(&[(0, 0), (2, 2)])).unwrap();

        assert_eq!(grid.alive_neighbor_count(1, 1), 2);
        assert_eq!(grid.alive_neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_neighbors_at_extremes() {
        let mut grid = Grid::new(3, 3, Boundary::Bounded).unwrap();
        grid.seed(coords(&[(0, 0)])).unwrap();

        assert_eq!(grid.alive_neighbor_count(isize::MAX, isize::MIN), 0);

        let grid = Grid::new(3, 3, Boundary::Toroidal).unwrap();
        assert_eq!(grid.alive_neighbor_count(isize::MAX, isize::MIN), 0);
    }

    #[test]
    fn test_live_cells_row_major() {
        let mut grid = Grid::new(3, 3, Boundary::Bounded).unwrap();
        grid.seed(coords(&[(2, 0), (0, 1), (1, 0)])).unwrap();

        let cells: Vec<Coord> = grid.live_cells().collect();

        assert_eq!(
            cells,
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(0, 1)]
        );
    }
}
