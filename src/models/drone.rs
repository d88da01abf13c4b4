// src/models/drone.rs

use std::fmt;

use rand::Rng;

use crate::math::round_to_decimals;
use crate::models::delivery::Delivery;
use crate::models::hub::{HubName, HubSet};

/// 生成時のバッテリ残量の範囲（%）
pub const INITIAL_BATTERY_RANGE: (u8, u8) = (60, 100);
/// 生成時の積載量の範囲（kg）
pub const PAYLOAD_CAPACITY_RANGE: (f64, f64) = (1.0, 5.0);
/// 割り当てに必要なバッテリ残量（この値を超えること）
pub const MIN_DISPATCH_BATTERY: u8 = 50;

/// ドローンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DroneStatus {
    Idle,
    Maintenance,
}

impl DroneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DroneStatus::Idle => "idle",
            DroneStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ドローンの構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Drone {
    pub id: String,
    pub hub: HubName,
    pub battery: u8,                // バッテリ残量（%）
    pub payload_capacity_kg: f64,   // 最大積載量（kg）
    pub status: DroneStatus,
    pub deliveries_completed: u32,
}

impl Drone {
    /// 配送に割り当て可能か判定する
    ///
    /// # 引数
    /// - `delivery`: 対象の配送
    ///
    /// # 戻り値
    /// - ハブが一致し、バッテリ残量が閾値を超え、待機中で、積載量が足りる場合は`true`
    pub fn is_eligible_for(&self, delivery: &Delivery) -> bool {
        self.hub == delivery.assigned_hub
            && self.battery > MIN_DISPATCH_BATTERY
            && self.status == DroneStatus::Idle
            && self.payload_capacity_kg >= delivery.payload_kg
    }
}

/// ドローンを生成する
///
/// IDは `D1` から順に振る。乱数は1機ごとにハブ、バッテリ、積載量の順で引く。
///
/// # 引数
/// - `count`: 機数
/// - `hubs`: 所属ハブの候補
/// - `rng`: 乱数源
pub fn generate_drones<R: Rng + ?Sized>(count: usize, hubs: &HubSet, rng: &mut R) -> Vec<Drone> {
    (1..=count)
        .map(|i| {
            let hub = hubs.choose(rng).name;
            let battery = rng.gen_range(INITIAL_BATTERY_RANGE.0..=INITIAL_BATTERY_RANGE.1);
            let capacity = rng.gen_range(PAYLOAD_CAPACITY_RANGE.0..=PAYLOAD_CAPACITY_RANGE.1);
            Drone {
                id: format!("D{}", i),
                hub,
                battery,
                payload_capacity_kg: round_to_decimals(capacity, 2),
                status: DroneStatus::Idle,
                deliveries_completed: 0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hub::Coordinate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn sample_drone() -> Drone {
        Drone {
            id: "D1".to_string(),
            hub: HubName::Manhattan,
            battery: 80,
            payload_capacity_kg: 3.0,
            status: DroneStatus::Idle,
            deliveries_completed: 0,
        }
    }

    fn sample_delivery(hub: HubName, payload_kg: f64) -> Delivery {
        Delivery {
            delivery_id: "D0001".to_string(),
            assigned_hub: hub,
            payload_kg,
            location: Coordinate::new(40.75, -73.98),
        }
    }

    #[test]
    fn test_generate_drones_ids_and_ranges() {
        let hubs = HubSet::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let drones = generate_drones(200, &hubs, &mut rng);

        assert_eq!(drones.len(), 200);
        assert_eq!(drones[0].id, "D1");
        assert_eq!(drones[199].id, "D200");

        let ids: HashSet<&str> = drones.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), 200);

        for drone in &drones {
            assert!((60..=100).contains(&drone.battery));
            assert!(drone.payload_capacity_kg >= 1.0 && drone.payload_capacity_kg <= 5.0);
            // 小数2桁に丸められていること
            let scaled = drone.payload_capacity_kg * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
            assert_eq!(drone.status, DroneStatus::Idle);
            assert_eq!(drone.deliveries_completed, 0);
            assert!(hubs.names().contains(&drone.hub));
        }
    }

    #[test]
    fn test_generate_drones_is_deterministic_for_seed() {
        let hubs = HubSet::default();
        let a = generate_drones(30, &hubs, &mut ChaCha8Rng::seed_from_u64(9));
        let b = generate_drones(30, &hubs, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_eligibility_requires_all_conditions() {
        let drone = sample_drone();
        assert!(drone.is_eligible_for(&sample_delivery(HubName::Manhattan, 3.0)));

        // ハブ違い
        assert!(!drone.is_eligible_for(&sample_delivery(HubName::Queens, 1.0)));
        // 積載量不足
        assert!(!drone.is_eligible_for(&sample_delivery(HubName::Manhattan, 3.01)));

        // バッテリ残量はちょうど50では不可
        let low = Drone { battery: 50, ..sample_drone() };
        assert!(!low.is_eligible_for(&sample_delivery(HubName::Manhattan, 1.0)));
        let enough = Drone { battery: 51, ..sample_drone() };
        assert!(enough.is_eligible_for(&sample_delivery(HubName::Manhattan, 1.0)));

        // 整備中
        let busy = Drone { status: DroneStatus::Maintenance, ..sample_drone() };
        assert!(!busy.is_eligible_for(&sample_delivery(HubName::Manhattan, 1.0)));
    }
}
