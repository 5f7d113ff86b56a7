use thiserror::Error;

/// Errors raised by direct cell addressing on a grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinates outside `[0, rows) x [0, cols)`. Direct addressing never wraps.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
