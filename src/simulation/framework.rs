// src/simulation/framework.rs

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::models::delivery::Delivery;
use crate::models::fleet::{record_completion, Fleet};
use crate::models::outcome::{evaluate_delivery, FailureReason, Outcome};
use crate::models::route::RouteSampler;
use crate::simulation::log::{LogEntry, SimulationLog};
use crate::simulation::progress::ProgressObserver;
use crate::simulation::SimulationContext;

/// 1回分のシミュレーションを実行する
///
/// 配送を順番に1件ずつ処理する。
/// - 割り当て可能なドローンがなければ `ineligible drone` で失敗とし、ドローンの状態は変えない
/// - あれば一様乱数で1機選び、ルート生成 → 成否判定 → ログ追記 → (成功時)完了処理 → 整備解除
///
/// 乱数は全て `rng` から引くため、シード付きの乱数源なら結果は再現できる。
/// ログは呼び出しごとに新しく確保する。
///
/// # 引数
/// - `context`: 失敗モデル、ルート生成、時刻
/// - `deliveries`: 処理する配送（この順に処理する）
/// - `fleet`: ドローン群。終了時の状態のまま返す
/// - `rng`: 乱数源
/// - `progress`: 各配送の処理後に割合を通知する
///
/// # 戻り値
/// - 配送と同じ順・同じ件数の配送ログ
#[instrument(skip_all, fields(deliveries = deliveries.len(), drones = fleet.len()))]
pub fn run_simulation<S, R, P>(
    context: &SimulationContext<S>,
    deliveries: &[Delivery],
    fleet: &mut Fleet,
    rng: &mut R,
    progress: &mut P,
) -> SimulationLog
where
    S: RouteSampler,
    R: Rng + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let mut log = SimulationLog::with_capacity(deliveries.len());
    let total = deliveries.len();

    for (index, delivery) in deliveries.iter().enumerate() {
        let timestamp = context.clock.timestamp_for(index);
        let eligible = fleet.eligible_indices(delivery);

        if eligible.is_empty() {
            debug!(delivery = %delivery.delivery_id, hub = %delivery.assigned_hub, "no eligible drone");
            log.push(LogEntry::new(
                None,
                delivery,
                Outcome::Failed(FailureReason::IneligibleDrone),
                timestamp,
            ));
        } else {
            // 優先順位は付けない
            let chosen = eligible[rng.gen_range(0..eligible.len())];
            let drone = fleet.drone_mut(chosen);

            let route = context.sampler.sample_route(drone, delivery, rng);
            let outcome = evaluate_delivery(drone, &route, &context.model, rng);
            debug!(
                delivery = %delivery.delivery_id,
                drone = %drone.id,
                feasible = route.feasible,
                energy = route.energy_cost_percent,
                outcome = ?outcome,
                "delivery evaluated"
            );
            log.push(LogEntry::new(Some(&drone.id), delivery, outcome, timestamp));

            if outcome.is_delivered() {
                record_completion(drone);
            }
            fleet.resolve_maintenance();
        }

        progress.on_progress((index + 1) as f64 / total as f64);
    }

    info!(
        delivered = log.delivered_count(),
        failed = log.failed_count(),
        success_rate = log.success_rate(),
        "simulation run finished"
    );
    log
}
