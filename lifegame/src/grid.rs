// grid.rs - Fixed-size board for Conway's Game of Life

use crate::error::{LifeError, LifeResult};

/// Moore neighbourhood offsets `(dx, dy)`, centre excluded.
#[rustfmt::skip]
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A `columns x rows` board of live/dead cells.
///
/// Positions outside the board do not exist: they are never stored and read
/// as dead when counting neighbours. The edges do not wrap.
///
/// Two buffers of equal size are kept. [`Grid::advance`] writes the next
/// generation into the back buffer from the front one and then swaps them,
/// so the rule always sees the complete old generation.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>, // row-major, y * columns + x
    next: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead board.
    pub fn new(columns: usize, rows: usize) -> LifeResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { columns, rows });
        }
        let len = columns * rows;
        Ok(Self {
            columns,
            rows,
            cells: vec![false; len],
            next: vec![false; len],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when `(x, y)` lies on the board.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.columns && (y as usize) < self.rows
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.columns && y < self.rows,
            "cell ({x}, {y}) is outside the {}x{} board",
            self.columns,
            self.rows
        );
        y * self.columns + x
    }

    /// State of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not on the board.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Sets exactly one cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not on the board.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let i = self.index(x, y);
        self.cells[i] = alive;
    }

    /// Number of live cells among the eight neighbours of `(x, y)`.
    ///
    /// Each neighbour is bounds-checked on its own, so the centre itself may
    /// lie off the board. Off-board neighbours count as dead.
    pub fn around(&self, x: isize, y: isize) -> usize {
        NEIGHBOURS
            .iter()
            .filter(|&&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(nx), Some(ny)) => {
                    self.contains(nx, ny) && self.cells[ny as usize * self.columns + nx as usize]
                }
                _ => false,
            })
            .count()
    }

    /// Computes the next generation and replaces the current one with it.
    ///
    /// | neighbours | next state |
    /// |---|---|
    /// | 2 | unchanged |
    /// | 3 | alive |
    /// | anything else | dead |
    pub fn advance(&mut self) {
        let mut next = std::mem::take(&mut self.next);
        for y in 0..self.rows {
            for x in 0..self.columns {
                let i = y * self.columns + x;
                next[i] = match self.around(x as isize, y as isize) {
                    2 => self.cells[i],
                    3 => true,
                    _ => false,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut next);
        self.next = next;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % columns, i / columns))
    }
}

// The back buffer holds a stale generation; only the visible board counts.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows && self.cells == other.cells
    }
}

impl Eq for Grid {}
