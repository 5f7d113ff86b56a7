/// Cell is the state of a single grid position: Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Next state under the Life rule (B3/S23):
    /// fewer than 2 or more than 3 neighbors kills the cell,
    /// a dead cell with exactly 3 neighbors is born,
    /// anything else keeps its current state.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, 0 | 1) | (_, 4..) => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
