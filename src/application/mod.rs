mod config;
mod simulation;

pub use config::{ConfigError, LifeConfig};
pub use simulation::{RunFlag, Simulation};
