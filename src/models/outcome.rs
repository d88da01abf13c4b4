// src/models/outcome.rs

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::config::error::ConfigError;
use crate::config::parameters::check_probability;
use crate::models::drone::Drone;
use crate::models::route::Route;

/// 失敗理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureReason {
    #[serde(rename = "ineligible drone")]
    IneligibleDrone,
    #[serde(rename = "no path available")]
    NoPathAvailable,
    #[serde(rename = "battery too low")]
    BatteryTooLow,
    #[serde(rename = "weather")]
    Weather,
    #[serde(rename = "drone malfunction")]
    DroneMalfunction,
    #[serde(rename = "unknown error")]
    UnknownError,
    #[serde(rename = "GPS loss")]
    GpsLoss,
    #[serde(rename = "bird strike")]
    BirdStrike,
}

/// 基本失敗率で発生する偶発的な失敗理由
pub const RANDOM_FAILURE_CAUSES: [FailureReason; 5] = [
    FailureReason::Weather,
    FailureReason::DroneMalfunction,
    FailureReason::UnknownError,
    FailureReason::GpsLoss,
    FailureReason::BirdStrike,
];

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::IneligibleDrone => "ineligible drone",
            FailureReason::NoPathAvailable => "no path available",
            FailureReason::BatteryTooLow => "battery too low",
            FailureReason::Weather => "weather",
            FailureReason::DroneMalfunction => "drone malfunction",
            FailureReason::UnknownError => "unknown error",
            FailureReason::GpsLoss => "GPS loss",
            FailureReason::BirdStrike => "bird strike",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 配送結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Delivered,
    Failed(FailureReason),
}

impl Outcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Outcome::Delivered => None,
            Outcome::Failed(reason) => Some(*reason),
        }
    }
}

/// 失敗モデルのパラメータ（いずれも 0〜1）
///
/// `FailureModel::new` でのみ作れるため、値は常に検証済み。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureModel {
    base_failure_rate: f64,
    blocked_route_failure_probability: f64,
    battery_failure_threshold: f64,
}

impl FailureModel {
    /// # 引数
    /// - `base_failure_rate`: 偶発的な失敗の確率
    /// - `blocked_route_failure_probability`: 経路なし時の失敗確率
    /// - `battery_failure_threshold`: バッテリ残量に掛ける割合
    ///
    /// # 戻り値
    /// いずれかが 0〜1 の外（NaN を含む）なら `ProbabilityOutOfRange`
    pub fn new(
        base_failure_rate: f64,
        blocked_route_failure_probability: f64,
        battery_failure_threshold: f64,
    ) -> Result<Self, ConfigError> {
        check_probability("base_failure_rate", base_failure_rate)?;
        check_probability(
            "blocked_route_failure_probability",
            blocked_route_failure_probability,
        )?;
        check_probability("battery_failure_threshold", battery_failure_threshold)?;
        Ok(FailureModel {
            base_failure_rate,
            blocked_route_failure_probability,
            battery_failure_threshold,
        })
    }

    pub fn base_failure_rate(&self) -> f64 {
        self.base_failure_rate
    }

    pub fn blocked_route_failure_probability(&self) -> f64 {
        self.blocked_route_failure_probability
    }

    pub fn battery_failure_threshold(&self) -> f64 {
        self.battery_failure_threshold
    }
}

/// 配送の成否を判定する
///
/// 判定順は固定で、最初に該当した規則で決まる。
/// 1. 経路なし かつ 乱数 < 経路なし失敗確率 → `no path available`
/// 2. 消費エネルギー > バッテリ残量 × 閾値 → `battery too low`
/// 3. 乱数 < 基本失敗率 → 偶発的な理由から一様に選ぶ
/// 4. それ以外は成功
///
/// 経路なしでも1の乱数が当たらなければ2以降へ進む。
/// 1の乱数は経路なしの場合にのみ、3の乱数は2に該当しない場合にのみ引く。
///
/// # 引数
/// - `drone`: 割り当てたドローン
/// - `route`: サンプリングしたルート
/// - `model`: 失敗モデル
/// - `rng`: 乱数源
pub fn evaluate_delivery<R: Rng + ?Sized>(
    drone: &Drone,
    route: &Route,
    model: &FailureModel,
    rng: &mut R,
) -> Outcome {
    if !route.feasible && rng.gen::<f64>() < model.blocked_route_failure_probability {
        return Outcome::Failed(FailureReason::NoPathAvailable);
    }

    if route.energy_cost_percent > f64::from(drone.battery) * model.battery_failure_threshold {
        return Outcome::Failed(FailureReason::BatteryTooLow);
    }

    if rng.gen::<f64>() < model.base_failure_rate {
        let cause = RANDOM_FAILURE_CAUSES[rng.gen_range(0..RANDOM_FAILURE_CAUSES.len())];
        return Outcome::Failed(cause);
    }

    Outcome::Delivered
}
