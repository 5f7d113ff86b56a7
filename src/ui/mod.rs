mod button;

pub use button::Button;

use crate::application::LifeConfig;
use macroquad::prelude::Rect;

pub const MARGIN: f32 = 8.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
/// Buttons on the first line, status text on the second
pub const TOOLBAR_HEIGHT: f32 = 72.0;
pub const STATUS_BASELINE: f32 = 64.0;

/// What a toolbar button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartStop,
    Randomize,
    Clear,
    Step,
}

/// Top-left corner of the grid on screen
pub const fn grid_origin() -> (f32, f32) {
    (MARGIN, TOOLBAR_HEIGHT)
}

/// Window size that fits the toolbar and the whole grid
pub fn window_size(config: &LifeConfig) -> (f32, f32) {
    let grid_width = config.cols as f32 * config.cell_size;
    let grid_height = config.rows as f32 * config.cell_size;
    let toolbar_width = 4.0 * (BUTTON_WIDTH + MARGIN) + MARGIN;

    (
        (grid_width + 2.0 * MARGIN).max(toolbar_width),
        TOOLBAR_HEIGHT + grid_height + MARGIN,
    )
}

/// Toolbar buttons, left to right. The first label follows the run flag.
pub fn create_buttons(running: bool) -> Vec<(Action, Button)> {
    let controls = [
        (Action::StartStop, if running { "Stop" } else { "Start" }),
        (Action::Randomize, "Randomize"),
        (Action::Clear, "Clear"),
        (Action::Step, "Step"),
    ];

    controls
        .into_iter()
        .enumerate()
        .map(|(i, (action, label))| {
            let x = MARGIN + i as f32 * (BUTTON_WIDTH + MARGIN);
            (action, Button::new(Rect::new(x, MARGIN, BUTTON_WIDTH, BUTTON_HEIGHT), label))
        })
        .collect()
}

/// Map a screen position to the (row, col) of the cell under it.
///
/// Returns `None` outside the grid so callers never address a cell that
/// does not exist.
pub fn cell_at(
    pos: (f32, f32),
    origin: (f32, f32),
    cell_size: f32,
    (rows, cols): (usize, usize),
) -> Option<(usize, usize)> {
    let x = pos.0 - origin.0;
    let y = pos.1 - origin.1;
    if x < 0.0 || y < 0.0 || cell_size <= 0.0 {
        return None;
    }

    let row = (y / cell_size) as usize;
    let col = (x / cell_size) as usize;
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at_maps_inside_grid() {
        let origin = (8.0, 72.0);
        assert_eq!(cell_at((8.0, 72.0), origin, 20.0, (50, 50)), Some((0, 0)));
        assert_eq!(cell_at((47.9, 93.0), origin, 20.0, (50, 50)), Some((1, 1)));
        assert_eq!(cell_at((1007.0, 1071.0), origin, 20.0, (50, 50)), Some((49, 49)));
    }

    #[test]
    fn test_cell_at_rejects_outside_grid() {
        let origin = (8.0, 72.0);
        assert_eq!(cell_at((7.0, 100.0), origin, 20.0, (50, 50)), None);
        assert_eq!(cell_at((100.0, 10.0), origin, 20.0, (50, 50)), None);
        assert_eq!(cell_at((1008.0, 100.0), origin, 20.0, (50, 50)), None);
        assert_eq!(cell_at((100.0, 1072.0), origin, 20.0, (50, 50)), None);
    }

    #[test]
    fn test_window_fits_grid_and_toolbar() {
        let (w, h) = window_size(&LifeConfig::default());
        assert_eq!((w, h), (1016.0, 1080.0));

        let tiny = LifeConfig { rows: 5, cols: 5, ..LifeConfig::default() };
        let (w, _) = window_size(&tiny);
        assert_eq!(w, 480.0);
    }

    #[test]
    fn test_start_stop_label_follows_flag() {
        assert_eq!(create_buttons(false)[0].1.label(), "Start");
        assert_eq!(create_buttons(true)[0].1.label(), "Stop");
        assert_eq!(create_buttons(true).len(), 4);
    }
}
