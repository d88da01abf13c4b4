// src/models/mod.rs

pub mod delivery;
pub mod drone;
pub mod fleet;
pub mod hub;
pub mod outcome;
pub mod route;
