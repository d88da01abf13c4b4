// src/simulation/multi_run.rs

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::config::error::ConfigError;
use crate::config::parameters::check_positive;
use crate::math::{histogram, mean, min_max, HistogramBin};
use crate::models::delivery::Delivery;
use crate::models::drone::generate_drones;
use crate::models::fleet::Fleet;
use crate::models::route::RouteSampler;
use crate::simulation::framework::run_simulation;
use crate::simulation::progress::NoProgress;
use crate::simulation::SimulationContext;

/// 複数回実行の集計
#[derive(Debug, Clone, PartialEq)]
pub struct MultiRunStats {
    pub success_rates: Vec<f64>,    // 実行順の成功率（%）
    pub mean_success_rate: f64,
}

impl MultiRunStats {
    pub fn from_rates(success_rates: Vec<f64>) -> Self {
        let mean_success_rate = mean(&success_rates).unwrap_or(0.0);
        MultiRunStats {
            success_rates,
            mean_success_rate,
        }
    }

    pub fn runs(&self) -> usize {
        self.success_rates.len()
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        min_max(&self.success_rates)
    }

    pub fn histogram(&self, bins: usize) -> Vec<HistogramBin> {
        histogram(&self.success_rates, bins)
    }
}

/// 同じ配送に対して、毎回新しいドローン群でシミュレーションを繰り返す
///
/// 各回の成功率は 成功数 / 配送数 × 100。回をまたいで状態は持ち越さない。
///
/// # 引数
/// - `context`: 各回で共有する設定（ハブ集合からドローンを生成する）
/// - `deliveries`: 全ての回で使う配送
/// - `fleet_size`: 各回で生成するドローン数
/// - `runs`: 回数（1以上）
/// - `rng`: 乱数源
///
/// # 戻り値
/// - 実行順の成功率と平均。`runs` が0なら `NonPositiveCount`
#[instrument(skip_all, fields(runs = runs, fleet_size = fleet_size))]
pub fn run_multiple<S, R>(
    context: &SimulationContext<S>,
    deliveries: &[Delivery],
    fleet_size: usize,
    runs: usize,
    rng: &mut R,
) -> Result<MultiRunStats, ConfigError>
where
    S: RouteSampler,
    R: Rng + ?Sized,
{
    check_positive("runs", runs)?;

    let mut rates = Vec::with_capacity(runs);
    for run in 0..runs {
        let mut fleet = Fleet::new(generate_drones(fleet_size, &context.hubs, rng));
        let log = run_simulation(context, deliveries, &mut fleet, rng, &mut NoProgress);
        let rate = if deliveries.is_empty() {
            0.0
        } else {
            log.delivered_count() as f64 / deliveries.len() as f64 * 100.0
        };
        debug!(run, success_rate = rate, "run finished");
        rates.push(rate);
    }

    let stats = MultiRunStats::from_rates(rates);
    info!(mean_success_rate = stats.mean_success_rate, "multi-run finished");
    Ok(stats)
}
