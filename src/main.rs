use std::time::Duration;

use macroquad::prelude::*;
use toroid_life::{LifeConfig, Simulation, input, rendering, ui};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let config = LifeConfig::from_env().unwrap_or_default();
    let (width, height) = ui::window_size(&config);

    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    // RUST_LOG=toroid_life=debug shows every step
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();
}

fn load_config() -> LifeConfig {
    LifeConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid configuration, using defaults");
        LifeConfig::default()
    })
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let config = load_config();
    tracing::info!(
        rows = config.rows,
        cols = config.cols,
        step_ms = config.step_interval.as_millis() as u64,
        "starting"
    );
    let mut sim = Simulation::new(config);

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(sim.is_running());

        // Input, then the scheduler, all on this one thread
        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        input::handle_cell_click(&mut sim, mouse_pos);
        sim = input::process_keyboard_input(sim);
        sim = sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(WHITE);
        rendering::draw_grid(sim.grid(), sim.config().cell_size);
        rendering::draw_toolbar(&sim, &ui::create_buttons(sim.is_running()), mouse_pos);

        next_frame().await;
    }
}
