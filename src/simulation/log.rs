// src/simulation/log.rs

use std::fmt;
use std::ops::Index;

use chrono::{DateTime, Utc};

use crate::models::delivery::Delivery;
use crate::models::hub::HubName;
use crate::models::outcome::{FailureReason, Outcome};

/// ドローンを割り当てられなかった配送のドローンID表記
pub const UNASSIGNED_DRONE_ID: &str = "N/A";

/// 配送の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 配送ログの1行
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub drone_id: Option<String>,
    pub delivery_id: String,
    pub status: DeliveryStatus,
    pub reason: Option<FailureReason>,
    pub timestamp: DateTime<Utc>,
    pub delivery_lat: f64,
    pub delivery_lon: f64,
    pub assigned_hub: HubName,
    pub payload_kg: f64,
}

impl LogEntry {
    /// 状態と理由は `outcome` から一緒に決める（失敗 ⇔ 理由あり）
    pub fn new(
        drone_id: Option<&str>,
        delivery: &Delivery,
        outcome: Outcome,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let status = if outcome.is_delivered() {
            DeliveryStatus::Delivered
        } else {
            DeliveryStatus::Failed
        };
        LogEntry {
            drone_id: drone_id.map(str::to_string),
            delivery_id: delivery.delivery_id.clone(),
            status,
            reason: outcome.reason(),
            timestamp,
            delivery_lat: delivery.location.latitude,
            delivery_lon: delivery.location.longitude,
            assigned_hub: delivery.assigned_hub,
            payload_kg: delivery.payload_kg,
        }
    }

    pub fn drone_label(&self) -> &str {
        self.drone_id.as_deref().unwrap_or(UNASSIGNED_DRONE_ID)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == DeliveryStatus::Delivered
    }
}

/// 1回のシミュレーションの配送ログ（追記のみ）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationLog {
    entries: Vec<LogEntry>,
}

impl SimulationLog {
    pub fn new() -> Self {
        SimulationLog::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SimulationLog {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn delivered_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_delivered()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.len() - self.delivered_count()
    }

    /// 成功率（%）。空のログは0とする。
    pub fn success_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.delivered_count() as f64 / self.entries.len() as f64 * 100.0
    }

    /// 指定したハブの行だけを順序を保って取り出す（元のログは変更しない）
    pub fn filter_by_hubs(&self, hubs: &[HubName]) -> SimulationLog {
        SimulationLog {
            entries: self
                .entries
                .iter()
                .filter(|entry| hubs.contains(&entry.assigned_hub))
                .cloned()
                .collect(),
        }
    }
}

impl Index<usize> for SimulationLog {
    type Output = LogEntry;

    fn index(&self, index: usize) -> &LogEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a SimulationLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
