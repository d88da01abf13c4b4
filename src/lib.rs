// src/lib.rs

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use models::delivery::Delivery;
pub use models::drone::{Drone, DroneStatus};
pub use models::fleet::Fleet;
pub use models::hub::{HubName, HubSet};
pub use simulation::log::{LogEntry, SimulationLog};
pub use simulation::SimulationContext;
