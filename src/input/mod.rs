use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::presets;
use crate::ui::{Action, Button, cell_at, grid_origin};

/// Number keys that stamp a preset in the middle of the grid, in preset order
const PATTERN_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];

/// Run a toolbar action against the simulation
pub fn apply_action(sim: Simulation, action: Action) -> Simulation {
    match action {
        Action::StartStop => sim.toggle_running(),
        Action::Randomize => sim.randomize(),
        Action::Clear => sim.clear(),
        Action::Step => sim.step_once(),
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(sim, |s, (action, _)| apply_action(s, *action))
}

/// Toggle the cell under the cursor on left click
pub fn handle_cell_click(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let dims = sim.grid().dimensions();
    let Some((row, col)) = cell_at(mouse_pos, grid_origin(), sim.config().cell_size, dims) else {
        return;
    };
    let toggled = sim.toggle_cell(row, col);
    debug_assert!(toggled.is_ok(), "cell_at yielded an out-of-range cell");
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    let actions = [
        (KeyCode::Space, Action::StartStop),
        (KeyCode::R, Action::Randomize),
        (KeyCode::C, Action::Clear),
        (KeyCode::N, Action::Step),
    ];

    let mut sim = actions.iter().fold(sim, |s, &(key, action)| {
        if is_key_pressed(key) { apply_action(s, action) } else { s }
    });

    for (key, pattern) in PATTERN_KEYS.iter().zip(presets::all_patterns()) {
        if !is_key_pressed(*key) {
            continue;
        }
        if let Some((row, col)) = pattern.centered_origin(sim.grid()) {
            let placed = sim.place_pattern(&pattern, row, col);
            debug_assert!(placed.is_ok(), "centered origin must fit the grid");
        } else {
            tracing::warn!(pattern = pattern.name, "pattern does not fit the grid");
        }
    }

    sim
}
