// Domain layer - grid values and the Life rule
pub mod domain;

// Application layer - configuration and the step loop
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets};
pub use application::{ConfigError, LifeConfig, RunFlag, Simulation};
