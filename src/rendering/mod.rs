use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{Action, Button, MARGIN, STATUS_BASELINE, grid_origin};

const ALIVE_COLOR: Color = PINK;
const BORDER_COLOR: Color = BLACK;

/// Draw every cell as a bordered square, filling the alive ones
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let (origin_x, origin_y) = grid_origin();

    for (row, col, cell) in grid.iter_cells() {
        let x = origin_x + col as f32 * cell_size;
        let y = origin_y + row as f32 * cell_size;

        if cell.is_alive() {
            draw_rectangle(x, y, cell_size, cell_size, ALIVE_COLOR);
        }
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, BORDER_COLOR);
    }
}

/// Draw toolbar buttons and the status line
pub fn draw_toolbar(sim: &Simulation, buttons: &[(Action, Button)], mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let (rows, cols) = sim.grid().dimensions();
    let status = format!(
        "{}  |  Generation: {}  |  Population: {}  |  {}x{}",
        if sim.is_running() { "Running" } else { "Stopped" },
        sim.generation(),
        sim.grid().population(),
        rows,
        cols,
    );
    draw_text(&status, MARGIN, STATUS_BASELINE, 18.0, DARKGRAY);
}
