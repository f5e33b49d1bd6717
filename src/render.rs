use std::fmt;

use crate::grid::Grid;

/// Glyph of a live cell.
pub const ALIVE: char = 'X';

/// Glyph of a dead cell.
pub const DEAD: char = '_';

impl Grid {
    /// Project the grid to text: one line per row, top row first, with one glyph per cell.
    pub fn render(&self) -> Vec<String> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| if self.get(x, y) { ALIVE } else { DEAD })
                    .collect::<String>()
            })
            .collect()
    }
}

/// Each rendered line, terminated by a single `\n`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
