// src/simulation/load_parameters.rs

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{ConfigError, Scenario, SimulationParameters};

/// YAMLファイルの読み込み
pub fn load_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let file = File::open(path)?;
    let data: T = from_reader(file)?;
    Ok(data)
}

/// シミュレーションパラメータの読み込み（検証済みで返す）
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<SimulationParameters, ConfigError> {
    let params: SimulationParameters = load_yaml(path)?;
    params.validate()?;
    Ok(params)
}

/// シナリオの読み込み（ハブ集合とフィルタを検証して返す）
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ConfigError> {
    let scenario: Scenario = load_yaml(path)?;
    let hubs = scenario.hub_set()?;
    scenario.selected_hubs(&hubs)?;
    Ok(scenario)
}
