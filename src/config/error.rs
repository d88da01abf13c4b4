// src/config/error.rs

use thiserror::Error;

use crate::models::hub::HubName;

/// 設定の読み込みと検証のエラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NonPositiveCount { field: &'static str },
    #[error("{field} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must satisfy 0 <= min <= max <= {limit}, got ({min}, {max})")]
    InvalidRange { field: &'static str, min: f64, max: f64, limit: f64 },
    #[error("hub set is empty")]
    EmptyHubSet,
    #[error("hub {0} is defined more than once")]
    DuplicateHub(HubName),
    #[error("hub filter names {0}, which is not in the hub set")]
    UnknownHubInFilter(HubName),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
