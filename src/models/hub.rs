// src/models/hub.rs

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// ハブ名（固定の5拠点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HubName {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    #[serde(rename = "Staten Island")]
    StatenIsland,
}

impl HubName {
    pub const ALL: [HubName; 5] = [
        HubName::Manhattan,
        HubName::Brooklyn,
        HubName::Queens,
        HubName::Bronx,
        HubName::StatenIsland,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HubName::Manhattan => "Manhattan",
            HubName::Brooklyn => "Brooklyn",
            HubName::Queens => "Queens",
            HubName::Bronx => "Bronx",
            HubName::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for HubName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 緯度経度（度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// 各軸に独立なオフセットを加えた座標を返す
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Coordinate {
        Coordinate {
            latitude: self.latitude + d_lat,
            longitude: self.longitude + d_lon,
        }
    }
}

/// ハブの構造体
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hub {
    pub name: HubName,
    pub location: Coordinate,
}

/// ハブの集合（定義順を保持する）
///
/// 空集合と重複は `Scenario::hub_set` の検証で弾かれるため、常に1拠点以上を持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct HubSet {
    hubs: Vec<Hub>,
}

impl HubSet {
    pub(crate) fn from_hubs(hubs: Vec<Hub>) -> Self {
        HubSet { hubs }
    }

    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    pub fn names(&self) -> Vec<HubName> {
        self.hubs.iter().map(|hub| hub.name).collect()
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    pub fn location_of(&self, name: HubName) -> Option<Coordinate> {
        self.hubs
            .iter()
            .find(|hub| hub.name == name)
            .map(|hub| hub.location)
    }

    /// 一様乱数でハブを1つ選ぶ
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Hub {
        &self.hubs[rng.gen_range(0..self.hubs.len())]
    }
}

impl Default for HubSet {
    /// ニューヨークの5拠点
    fn default() -> Self {
        HubSet::from_hubs(vec![
            Hub { name: HubName::Manhattan, location: Coordinate::new(40.7549, -73.9840) },
            Hub { name: HubName::Brooklyn, location: Coordinate::new(40.6500, -73.9500) },
            Hub { name: HubName::Queens, location: Coordinate::new(40.7300, -73.8200) },
            Hub { name: HubName::Bronx, location: Coordinate::new(40.8500, -73.8662) },
            Hub { name: HubName::StatenIsland, location: Coordinate::new(40.5795, -74.1502) },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_hub_set_has_five_hubs_in_order() {
        let hubs = HubSet::default();
        assert_eq!(hubs.len(), 5);
        assert_eq!(hubs.names(), HubName::ALL.to_vec());
        assert_eq!(
            hubs.location_of(HubName::StatenIsland),
            Some(Coordinate::new(40.5795, -74.1502))
        );
    }

    #[test]
    fn test_hub_name_serializes_with_display_name() {
        let yaml = serde_yaml::to_string(&HubName::StatenIsland).unwrap();
        assert_eq!(yaml.trim(), "Staten Island");

        let parsed: HubName = serde_yaml::from_str("Staten Island").unwrap();
        assert_eq!(parsed, HubName::StatenIsland);
        assert_eq!(parsed.to_string(), "Staten Island");
    }

    #[test]
    fn test_choose_returns_member_of_set() {
        let hubs = HubSet::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let hub = hubs.choose(&mut rng);
            assert!(hubs.names().contains(&hub.name));
        }
    }
}
