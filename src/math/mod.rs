// src/math/mod.rs

pub mod rounding;
pub mod statistics;

pub use rounding::round_to_decimals;
pub use statistics::{histogram, mean, min_max, HistogramBin};
