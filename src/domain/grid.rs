use super::{Cell, GridError};
use rand::Rng;

/// The 8 Moore-neighborhood offsets as (row, col) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (-1, 0),
];

/// Grid is a fixed-size toroidal field of cells, stored row-major.
///
/// Grids are values: every operation that changes cells returns a new
/// grid and leaves `self` untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// `rows * cols` must fit in memory; `LifeConfig` caps each side at
    /// `MAX_SIDE` for the app.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where each cell is alive with probability 0.5
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with(rows, cols, &mut rand::rng())
    }

    /// Same as [`Grid::random`] but draws from the given generator
    pub fn random_with<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| Cell::from(rng.random_bool(0.5)))
            .collect();

        Self { rows, cols, cells }
    }

    /// Build a grid with exactly the listed cells alive
    pub fn from_alive(
        rows: usize,
        cols: usize,
        alive: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GridError> {
        Self::empty(rows, cols).with_alive(alive)
    }

    /// Return a copy of this grid with the listed cells set alive.
    /// Any out-of-range coordinate rejects the whole update.
    pub fn with_alive(
        &self,
        alive: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GridError> {
        let mut next = self.clone();
        for (row, col) in alive {
            let idx = self.index_of(row, col)?;
            next.cells[idx] = Cell::Alive;
        }
        Ok(next)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Validate coordinates and convert them to a flat index
    fn index_of(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).ok().map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Return a copy of this grid with the cell at (row, col) flipped.
    ///
    /// Coordinates are not wrapped: anything outside the grid is rejected
    /// and `self` stays as it was.
    pub fn toggle(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let idx = self.index_of(row, col)?;
        let mut next = self.clone();
        next.cells[idx] = next.cells[idx].toggle();
        Ok(next)
    }

    /// Count live neighbors with toroidal wrapping
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        if self.cells.is_empty() {
            return 0;
        }
        let rows = self.rows as isize;
        let cols = self.cols as isize;

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                let r = (row as isize + dr).rem_euclid(rows) as usize;
                let c = (col as isize + dc).rem_euclid(cols) as usize;
                self.cells[r * self.cols + c]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation.
    ///
    /// Every neighbor count reads the current generation only; results go
    /// into a freshly allocated buffer.
    pub fn step(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, cell)| cell.evolve(self.live_neighbors(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Coordinates of every alive cell, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }
}
