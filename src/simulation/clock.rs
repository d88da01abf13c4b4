// src/simulation/clock.rs

use chrono::{DateTime, Duration, Utc};

/// シミュレーション時刻
///
/// 配送ごとのタイムスタンプを 開始時刻 + 添字 × 配送間隔 で決める。
/// 壁時計を使わないため、同じ設定なら同じログになる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    start: DateTime<Utc>,
    interval_secs: i64,
}

impl SimulationClock {
    pub fn new(start: DateTime<Utc>, interval_secs: u64) -> Self {
        SimulationClock {
            start,
            interval_secs: i64::try_from(interval_secs).unwrap_or(i64::MAX),
        }
    }

    /// `index` 番目（0始まり）の配送の時刻
    pub fn timestamp_for(&self, index: usize) -> DateTime<Utc> {
        let offset = self.interval_secs.saturating_mul(index as i64);
        Duration::try_seconds(offset)
            .and_then(|d| self.start.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}
