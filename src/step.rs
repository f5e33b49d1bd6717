use std::iter::FusedIterator;

use tracing::trace;

use crate::Offset;
use crate::grid::Grid;
use crate::rules::B3S23;

/// Compute the generation following `grid`.
///
/// Every cell of the result is derived from `grid` alone, which is only ever borrowed. The result
/// is written into a fresh buffer of the same shape and boundary.
pub fn step(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let mut cells = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let neighbors = grid.alive_neighbor_count(x as Offset, y as Offset);
            cells.push(B3S23.next(grid.get(x, y), neighbors));
        }
    }

    grid.with_cells(cells)
}

impl Grid {
    /// The next generation of this grid. See [`step`].
    pub fn next(&self) -> Grid {
        step(self)
    }

    /// Every generation of this grid, starting with itself.
    pub fn generations(self) -> Generations {
        Generations::new(self)
    }
}

/// An endless sequence of generations, computed one at a time as they're pulled.
///
/// The first grid yielded is the one the sequence was created with. No generation is computed
/// before it is asked for.
pub struct Generations {
    current: Grid,
    generation: u64,
}

impl Generations {
    pub fn new(grid: Grid) -> Self {
        Self {
            current: grid,
            generation: 0,
        }
    }

    /// Index of the grid the next call to `next` yields.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        // Step only once the previous generation has been handed out
        if self.generation > 0 {
            self.current = step(&self.current);
        }

        trace!(
            generation = self.generation,
            population = self.current.population(),
            "Yielding generation"
        );

        self.generation += 1;

        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generations {}

#[cfg(test)]
mod tests {
    use crate::grid::Boundary;
    use crate::grid::Coord;
    use crate::grid::Grid;

    use super::step;

    fn grid_with(w: usize, h: usize, boundary: Boundary, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(w, h, boundary).unwrap();
        grid.seed(cells.iter().copied().map(Coord::from)).unwrap();
        grid
    }

    #[test]
    fn test_empty_is_stable() {
        let grid = Grid::new(3, 3, Boundary::Toroidal).unwrap();

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let grid = grid_with(3, 3, Boundary::Bounded, &[(1, 1)]);

        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_keeps_shape() {
        let grid = grid_with(7, 4, Boundary::Bounded, &[(1, 1)]);
        let next = grid.next();

        assert_eq!(next.width(), 7);
        assert_eq!(next.height(), 4);
        assert_eq!(next.boundary(), Boundary::Bounded);
    }

    #[test]
    fn test_generations_start_with_seed() {
        let grid = grid_with(5, 5, Boundary::Bounded, &[(1, 2), (2, 2), (3, 2)]);
        let mut gens = grid.clone().generations();

        assert_eq!(gens.generation(), 0);
        assert_eq!(gens.next(), Some(grid.clone()));
        assert_eq!(gens.generation(), 1);
        assert_eq!(gens.next(), Some(step(&grid)));
        assert_eq!(gens.next(), Some(grid));
        assert_eq!(gens.generation(), 3);
    }

    #[test]
    fn test_generations_match_repeated_steps() {
        let grid = grid_with(6, 6, Boundary::Toroidal, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);

        let mut expected = grid.clone();
        for (n, got) in grid.generations().take(9).enumerate() {
            assert_eq!(got, expected, "generation {n}");
            expected = step(&expected);
        }
    }
}
