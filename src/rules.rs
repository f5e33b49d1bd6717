/// Rules of Conway's Game of Life.
pub const B3S23: Rule = Rule::new(0b1000, 0b1100);

/// # Representation
/// A rule is a pair of neighbor-count sets, stored bitwise. If bit `i` of `births` is on, a dead
/// cell with `i` live neighbors is born. If bit `i` of `survivals` is on, a live cell with `i`
/// live neighbors survives.
///
/// # Examples
/// ```notrust
/// b3s23: births    0000_0000_0000_1000
///        survivals 0000_0000_0000_1100
/// ```
///
/// Only [`B3S23`] is ever constructed.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    births: u16,
    survivals: u16,
}

impl Rule {
    // Any bit past the 8th is ignored, since a cell has at most 8 neighbors.
    const fn new(b: u16, s: u16) -> Self {
        Self {
            births: b & 0x1FF,
            survivals: s & 0x1FF,
        }
    }

    /// State of a cell in the next generation, given its current state and how many of its
    /// neighbors are alive.
    pub fn next(&self, alive: bool, neighbors: u8) -> bool {
        let Some(n) = 1u16.checked_shl(neighbors as u32) else {
            return false;
        };

        if alive {
            self.survivals & n == n
        } else {
            self.births & n == n
        }
    }
}
