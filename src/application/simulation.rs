use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use super::LifeConfig;
use crate::domain::{Grid, GridError, Pattern};

/// Whether the step loop is active
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunFlag {
    Stopped,
    Running,
}

/// Simulation owns the current grid and drives the step loop.
///
/// The loop is a single-slot scheduler: at most one step invocation is
/// pending at a time. An invocation checks the flag when it fires; if the
/// simulation was stopped in the meantime it is dropped without stepping
/// or rescheduling.
pub struct Simulation {
    config: LifeConfig,
    grid: Grid,
    flag: RunFlag,
    generation: u64,
    /// Time left until the pending invocation fires
    pending: Option<Duration>,
}

impl Simulation {
    /// Create a stopped simulation over an all-dead grid
    pub fn new(config: LifeConfig) -> Self {
        Self {
            grid: Grid::empty(config.rows, config.cols),
            config,
            flag: RunFlag::Stopped,
            generation: 0,
            pending: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn flag(&self) -> RunFlag {
        self.flag
    }

    pub fn is_running(&self) -> bool {
        self.flag == RunFlag::Running
    }

    /// Steps applied since the last clear or randomize
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Time until the pending invocation fires, if one is scheduled
    pub fn next_step_in(&self) -> Option<Duration> {
        self.pending
    }

    /// Start the loop: step right away, then every `step_interval`.
    ///
    /// The flag is set before the first invocation runs so its check sees
    /// `Running`. An invocation still pending from an earlier run is
    /// replaced rather than left to fire alongside the new one.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.flag = RunFlag::Running;
        info!(generation = self.generation, "simulation started");
        self.invoke();
    }

    /// Stop the loop. The pending invocation drains at its due time.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.flag = RunFlag::Stopped;
        info!(generation = self.generation, "simulation stopped");
    }

    /// Start/stop button
    pub fn toggle_running(mut self) -> Self {
        match self.flag {
            RunFlag::Stopped => self.start(),
            RunFlag::Running => self.stop(),
        }
        self
    }

    /// Advance the scheduler clock by `elapsed` and fire the pending
    /// invocation once it is due. At most one invocation fires per call.
    pub fn tick(mut self, elapsed: Duration) -> Self {
        let Some(left) = self.pending else {
            return self;
        };

        match left.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => self.pending = Some(rest),
            _ => {
                self.pending = None;
                self.invoke();
            }
        }
        self
    }

    /// One scheduled run of the loop body
    fn invoke(&mut self) {
        if !self.is_running() {
            debug!("pending step dropped, simulation is stopped");
            return;
        }
        self.advance();
        self.pending = Some(self.config.step_interval);
    }

    fn advance(&mut self) {
        self.grid = self.grid.step();
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
    }

    /// Apply a single step by hand. Ignored while the loop is running.
    pub fn step_once(mut self) -> Self {
        if self.is_running() {
            debug!("manual step ignored, simulation is running");
            return self;
        }
        self.advance();
        self
    }

    /// Replace the grid with a random one and reset the generation counter
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.grid = Grid::random_with(self.config.rows, self.config.cols, rng);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
        self
    }

    /// Replace the grid with an all-dead one and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.grid = Grid::empty(self.config.rows, self.config.cols);
        self.generation = 0;
        info!("grid cleared");
        self
    }

    /// Flip one cell. Out-of-range coordinates leave the grid unchanged.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = self
            .grid
            .toggle(row, col)
            .inspect_err(|err| warn!(%err, "toggle rejected"))?;
        Ok(())
    }

    /// Stamp a pattern with its top-left corner at (row, col)
    pub fn place_pattern(
        &mut self,
        pattern: &Pattern,
        row: usize,
        col: usize,
    ) -> Result<(), GridError> {
        self.grid = pattern
            .place_on(&self.grid, row, col)
            .inspect_err(|err| warn!(%err, pattern = pattern.name, "placement rejected"))?;
        debug!(pattern = pattern.name, row, col, "pattern placed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const INTERVAL: Duration = Duration::from_millis(400);

    fn small_config() -> LifeConfig {
        LifeConfig {
            rows: 5,
            cols: 5,
            ..LifeConfig::default()
        }
    }

    /// 5x5 simulation seeded with a horizontal blinker on row 1
    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(small_config());
        sim.place_pattern(&presets::blinker(), 1, 0).unwrap();
        sim
    }

    #[test]
    fn test_new_is_stopped_and_empty() {
        let sim = Simulation::new(LifeConfig::default());
        assert_eq!(sim.flag(), RunFlag::Stopped);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid(), &Grid::empty(50, 50));
        assert_eq!(sim.next_step_in(), None);
    }

    #[test]
    fn test_start_steps_immediately() {
        let mut sim = blinker_sim();
        let expected = sim.grid().step();

        sim.start();

        assert!(sim.is_running());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &expected);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));
    }

    #[test]
    fn test_tick_fires_when_interval_elapses() {
        let mut sim = blinker_sim();
        sim.start();

        let sim = sim.tick(Duration::from_millis(150));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.next_step_in(), Some(Duration::from_millis(250)));

        let sim = sim.tick(Duration::from_millis(250));
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));
    }

    #[test]
    fn test_one_step_per_tick_even_after_long_pause() {
        let mut sim = blinker_sim();
        sim.start();

        let sim = sim.tick(INTERVAL * 10);
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));
    }

    #[test]
    fn test_stop_drains_pending_step() {
        let mut sim = blinker_sim();
        sim.start();
        let after_start = sim.grid().clone();

        sim.stop();
        assert_eq!(sim.flag(), RunFlag::Stopped);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));

        let sim = sim.tick(INTERVAL);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &after_start);
        assert_eq!(sim.next_step_in(), None);

        let sim = sim.tick(INTERVAL).tick(INTERVAL);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut sim = blinker_sim();
        sim.start();
        sim.start();
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_restart_does_not_duplicate_loop() {
        let mut sim = blinker_sim();
        sim.start();
        sim.stop();
        sim.start();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));

        let sim = sim.tick(INTERVAL);
        assert_eq!(sim.generation(), 3);
    }

    #[test]
    fn test_toggle_running_flips_flag() {
        let sim = blinker_sim().toggle_running();
        assert!(sim.is_running());
        let sim = sim.toggle_running();
        assert!(!sim.is_running());
    }

    #[test]
    fn test_stopped_ticks_never_step() {
        let sim = blinker_sim();
        let before = sim.grid().clone();
        let sim = (0..10).fold(sim, |s, _| s.tick(INTERVAL));
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_blinker_period_while_running() {
        let mut sim = blinker_sim();
        let start = sim.grid().clone();
        sim.start();
        let sim = sim.tick(INTERVAL);
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &start);
    }

    #[test]
    fn test_toggle_cell() {
        let mut sim = Simulation::new(small_config());
        sim.toggle_cell(2, 3).unwrap();
        assert!(sim.grid().is_alive(2, 3));
        sim.toggle_cell(2, 3).unwrap();
        assert_eq!(sim.grid().population(), 0);
    }

    #[test]
    fn test_toggle_cell_out_of_range_keeps_grid() {
        let mut sim = blinker_sim();
        let before = sim.grid().clone();
        assert!(sim.toggle_cell(5, 0).is_err());
        assert!(sim.toggle_cell(0, 5).is_err());
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_clear_resets_generation_but_not_flag() {
        let mut sim = blinker_sim();
        sim.start();
        let sim = sim.clear();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().population(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_randomize_keeps_dimensions() {
        let mut rng = StdRng::seed_from_u64(99);
        let sim = blinker_sim().step_once().randomize_with(&mut rng);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().dimensions(), (5, 5));

        let sim = sim.randomize();
        assert_eq!(sim.grid().dimensions(), (5, 5));
    }

    #[test]
    fn test_step_once_while_stopped() {
        let sim = blinker_sim();
        let expected = sim.grid().step();
        let sim = sim.step_once();
        assert_eq!(sim.grid(), &expected);
        assert_eq!(sim.generation(), 1);
        assert!(!sim.is_running());
        assert_eq!(sim.next_step_in(), None);
    }

    #[test]
    fn test_step_once_while_running_is_ignored() {
        let mut sim = blinker_sim();
        sim.start();
        let scheduled = sim.grid().clone();

        let sim = sim.step_once().step_once();
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid(), &scheduled);
        assert_eq!(sim.next_step_in(), Some(INTERVAL));
    }

    #[test]
    fn test_place_pattern_out_of_range() {
        let mut sim = Simulation::new(small_config());
        assert!(sim.place_pattern(&presets::glider(), 3, 3).is_err());
        assert_eq!(sim.grid().population(), 0);
    }
}
