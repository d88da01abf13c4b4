// src/config/scenario.rs

use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::models::hub::{Coordinate, Hub, HubName, HubSet};

/// シナリオ（拠点の配置と集計対象のハブ）
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_hubs")]
    pub hubs: Vec<HubInstance>,
    #[serde(default)]
    pub hub_filter: Option<Vec<HubName>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HubInstance {
    pub name: HubName,
    pub latitude: f64,
    pub longitude: f64,
}

fn default_hubs() -> Vec<HubInstance> {
    HubSet::default()
        .hubs()
        .iter()
        .map(|hub| HubInstance {
            name: hub.name,
            latitude: hub.location.latitude,
            longitude: hub.location.longitude,
        })
        .collect()
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            hubs: default_hubs(),
            hub_filter: None,
        }
    }
}

impl Scenario {
    /// ハブ集合を構築する
    ///
    /// # 戻り値
    /// - 空または同名のハブが重複する場合はエラー
    pub fn hub_set(&self) -> Result<HubSet, ConfigError> {
        if self.hubs.is_empty() {
            return Err(ConfigError::EmptyHubSet);
        }
        let mut hubs: Vec<Hub> = Vec::with_capacity(self.hubs.len());
        for instance in &self.hubs {
            if hubs.iter().any(|hub| hub.name == instance.name) {
                return Err(ConfigError::DuplicateHub(instance.name));
            }
            hubs.push(Hub {
                name: instance.name,
                location: Coordinate::new(instance.latitude, instance.longitude),
            });
        }
        Ok(HubSet::from_hubs(hubs))
    }

    /// 集計対象のハブ（未指定の場合は全ハブ）
    pub fn selected_hubs(&self, hubs: &HubSet) -> Result<Vec<HubName>, ConfigError> {
        match &self.hub_filter {
            None => Ok(hubs.names()),
            Some(filter) => {
                if let Some(unknown) = filter.iter().find(|name| hubs.location_of(**name).is_none()) {
                    return Err(ConfigError::UnknownHubInFilter(*unknown));
                }
                Ok(filter.clone())
            }
        }
    }
}
