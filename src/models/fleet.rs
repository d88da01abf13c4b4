// src/models/fleet.rs

use crate::models::delivery::Delivery;
use crate::models::drone::{Drone, DroneStatus};
use crate::models::hub::HubName;

/// この配送完了数ごとに整備に入る
pub const MAINTENANCE_INTERVAL: u32 = 10;

/// 1回のシミュレーションで使うドローン群（生成順を保持する）
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    drones: Vec<Drone>,
}

/// 稼働状況の報告用スナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct DroneSnapshot {
    pub id: String,
    pub hub: HubName,
    pub deliveries_completed: u32,
    pub battery: u8,
    pub status: DroneStatus,
}

impl Fleet {
    pub fn new(drones: Vec<Drone>) -> Self {
        Fleet { drones }
    }

    pub fn len(&self) -> usize {
        self.drones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drones.is_empty()
    }

    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    pub fn get(&self, id: &str) -> Option<&Drone> {
        self.drones.iter().find(|drone| drone.id == id)
    }

    pub(crate) fn drone_mut(&mut self, index: usize) -> &mut Drone {
        &mut self.drones[index]
    }

    /// 配送に割り当て可能なドローンの添字（生成順）
    pub fn eligible_indices(&self, delivery: &Delivery) -> Vec<usize> {
        self.drones
            .iter()
            .enumerate()
            .filter(|(_, drone)| drone.is_eligible_for(delivery))
            .map(|(i, _)| i)
            .collect()
    }

    /// 整備中のドローンを全て待機に戻す
    pub fn resolve_maintenance(&mut self) {
        for drone in self
            .drones
            .iter_mut()
            .filter(|drone| drone.status == DroneStatus::Maintenance)
        {
            drone.status = DroneStatus::Idle;
        }
    }

    pub fn snapshot(&self) -> Vec<DroneSnapshot> {
        self.drones
            .iter()
            .map(|drone| DroneSnapshot {
                id: drone.id.clone(),
                hub: drone.hub,
                deliveries_completed: drone.deliveries_completed,
                battery: drone.battery,
                status: drone.status,
            })
            .collect()
    }

    /// 配送完了数の多い順（同数は生成順）
    pub fn utilization_ranking(&self) -> Vec<DroneSnapshot> {
        let mut ranking = self.snapshot();
        ranking.sort_by(|a, b| b.deliveries_completed.cmp(&a.deliveries_completed));
        ranking
    }
}

/// 配送成功後にドローンの状態を更新する
///
/// 完了数を1増やし、`MAINTENANCE_INTERVAL` の倍数に達した場合は整備、それ以外は待機にする。
pub fn record_completion(drone: &mut Drone) {
    drone.deliveries_completed += 1;
    drone.status = if drone.deliveries_completed % MAINTENANCE_INTERVAL == 0 {
        DroneStatus::Maintenance
    } else {
        DroneStatus::Idle
    };
}
