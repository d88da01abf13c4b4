// src/config/mod.rs

pub mod error;
pub mod parameters;
pub mod scenario;

pub use error::ConfigError;
pub use parameters::SimulationParameters;
pub use scenario::Scenario;
