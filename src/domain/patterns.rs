use super::{Grid, GridError};

/// A named seed shape, stored as alive (row, col) offsets from its top-left corner
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern, deriving its bounding box from the offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Self { name, description, height, width, cells }
    }

    /// Stamp the pattern onto a copy of `grid` with its top-left at (row, col).
    ///
    /// Placement does not wrap: a pattern that would hang over an edge is rejected.
    pub fn place_on(&self, grid: &Grid, row: usize, col: usize) -> Result<Grid, GridError> {
        let cells = self
            .cells
            .iter()
            .map(|&(dr, dc)| (row.saturating_add(dr), col.saturating_add(dc)));
        grid.with_alive(cells)
    }

    /// Top-left position that centers the pattern on the grid, if it fits
    pub fn centered_origin(&self, grid: &Grid) -> Option<(usize, usize)> {
        let (rows, cols) = grid.dimensions();
        (self.height <= rows && self.width <= cols)
            .then(|| ((rows - self.height) / 2, (cols - self.width) / 2))
    }
}

/// Classic Life patterns
pub mod presets {
    use super::Pattern;

    /// Block - 2x2 still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - travels one cell down and right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - small seed with a long chaotic history
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// All presets, in keyboard shortcut order
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }
}
