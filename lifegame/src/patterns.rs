// patterns.rs - Named seed shapes and stamping them onto a board

use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;

/// A named seed shape, as `(x, y)` offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, BLOCK, TOAD, BEACON];

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn by_name(name: &str) -> LifeResult<Pattern> {
        PATTERNS
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Bounding box `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

/// Sets the pattern's cells alive at `origin + offset`.
///
/// Offsets that land off the board are skipped. Returns how many cells
/// were placed.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) -> usize {
    let mut placed = 0;
    for &(dx, dy) in pattern.cells {
        let (Some(x), Some(y)) = (origin.0.checked_add(dx), origin.1.checked_add(dy)) else {
            continue;
        };
        if x < grid.columns() && y < grid.rows() {
            grid.set(x, y, true);
            placed += 1;
        }
    }
    placed
}
