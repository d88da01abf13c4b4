// src/simulation/summary.rs

use std::collections::BTreeMap;
use std::fmt;

use chrono::Timelike;

use crate::models::hub::HubName;
use crate::models::outcome::FailureReason;
use crate::simulation::log::SimulationLog;

/// ハブごとの集計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HubTally {
    pub delivered: usize,
    pub failed: usize,
}

/// 配送ログの集計結果
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub total: usize,
    pub delivered: usize,
    pub failed: usize,
    pub success_rate: f64,
    pub most_common_failure: Option<FailureReason>,
    pub failure_breakdown: Vec<(FailureReason, usize)>,   // 初出順
    pub by_hub: BTreeMap<HubName, HubTally>,
    pub deliveries_per_hour: BTreeMap<u32, usize>,        // 時(0〜23) → 件数
}

impl SimulationSummary {
    pub fn from_log(log: &SimulationLog) -> Self {
        let mut failure_breakdown: Vec<(FailureReason, usize)> = Vec::new();
        let mut by_hub: BTreeMap<HubName, HubTally> = BTreeMap::new();
        let mut deliveries_per_hour: BTreeMap<u32, usize> = BTreeMap::new();

        for entry in log {
            let tally = by_hub.entry(entry.assigned_hub).or_default();
            if entry.is_delivered() {
                tally.delivered += 1;
            } else {
                tally.failed += 1;
            }

            if let Some(reason) = entry.reason {
                match failure_breakdown.iter_mut().find(|(r, _)| *r == reason) {
                    Some((_, count)) => *count += 1,
                    None => failure_breakdown.push((reason, 1)),
                }
            }

            *deliveries_per_hour.entry(entry.timestamp.hour()).or_default() += 1;
        }

        // 同数の場合は先に現れた理由を採る
        let most_common_failure = failure_breakdown
            .iter()
            .fold(None::<(FailureReason, usize)>, |best, &(reason, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((reason, count)),
            })
            .map(|(reason, _)| reason);

        let delivered = log.delivered_count();
        SimulationSummary {
            total: log.len(),
            delivered,
            failed: log.len() - delivered,
            success_rate: log.success_rate(),
            most_common_failure,
            failure_breakdown,
            by_hub,
            deliveries_per_hour,
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Deliveries: {}", self.total)?;
        writeln!(f, "Delivered: {}", self.delivered)?;
        writeln!(f, "Failed: {}", self.failed)?;
        writeln!(f, "Success Rate: {:.2}%", self.success_rate)?;
        match self.most_common_failure {
            Some(reason) => writeln!(f, "Most Common Failure: {}", reason)?,
            None => writeln!(f, "Most Common Failure: None")?,
        }
        for (reason, count) in &self.failure_breakdown {
            writeln!(f, "  {}: {}", reason, count)?;
        }
        for (hub, tally) in &self.by_hub {
            writeln!(f, "{}: delivered {}, failed {}", hub, tally.delivered, tally.failed)?;
        }
        Ok(())
    }
}
