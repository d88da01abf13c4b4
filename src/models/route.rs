// src/models/route.rs

use rand::Rng;
use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::config::parameters::{check_probability, check_range};
use crate::models::delivery::Delivery;
use crate::models::drone::Drone;

/// 距離と所要時間の範囲の上限（乱数の一様分布が桁あふれしない値）
pub const MAX_ROUTE_VALUE: f64 = 1.0e9;
/// 消費エネルギーの上限（バッテリ%）
pub const MAX_ENERGY_COST_PERCENT: f64 = 100.0;

/// ルートの構造体（1回の評価でのみ使う）
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub feasible: bool,
    pub path: Vec<String>,          // [ドローンID, 配送ID]、経路なしの場合は空
    pub distance_m: f64,            // 距離（m）
    pub eta_min: f64,               // 所要時間（分）
    pub energy_cost_percent: f64,   // 消費エネルギー（バッテリ%）
    pub detour: bool,
}

/// ルート生成のパラメータ
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RouteModel {
    pub blocked_probability: f64,
    pub distance_m: (f64, f64),
    pub eta_min: (f64, f64),
    pub energy_cost_percent: (f64, f64),
}

impl Default for RouteModel {
    fn default() -> Self {
        RouteModel {
            blocked_probability: 0.10,
            distance_m: (500.0, 8000.0),
            eta_min: (5.0, 30.0),
            energy_cost_percent: (5.0, 40.0),
        }
    }
}

impl RouteModel {
    /// 確率は 0〜1、範囲は 0 以上で min <= max、消費エネルギーは100%以下
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("route.blocked_probability", self.blocked_probability)?;
        check_range("route.distance_m", self.distance_m, MAX_ROUTE_VALUE)?;
        check_range("route.eta_min", self.eta_min, MAX_ROUTE_VALUE)?;
        check_range(
            "route.energy_cost_percent",
            self.energy_cost_percent,
            MAX_ENERGY_COST_PERCENT,
        )?;
        Ok(())
    }
}

/// ドローンと配送の組からルートを求める
pub trait RouteSampler {
    fn sample_route<R: Rng + ?Sized>(&self, drone: &Drone, delivery: &Delivery, rng: &mut R) -> Route;
}

/// 乱数でルートのメタデータを合成する
///
/// 実際の経路探索は行わない。ドローンと配送は経路のラベルにのみ使う。
///
/// パラメータは生成時に検証するため、サンプリング中に乱数の範囲エラーは起きない。
#[derive(Debug, Clone, Default)]
pub struct RandomRouteSampler {
    model: RouteModel,
}

impl RandomRouteSampler {
    pub fn new(model: RouteModel) -> Result<Self, ConfigError> {
        model.validate()?;
        Ok(RandomRouteSampler { model })
    }

    pub fn model(&self) -> &RouteModel {
        &self.model
    }
}

impl RouteSampler for RandomRouteSampler {
    fn sample_route<R: Rng + ?Sized>(&self, drone: &Drone, delivery: &Delivery, rng: &mut R) -> Route {
        // 乱数は 通行不可判定、エネルギー、距離、所要時間 の順で引く
        let blocked = rng.gen::<f64>() < self.model.blocked_probability;
        let path = if blocked {
            Vec::new()
        } else {
            vec![drone.id.clone(), delivery.delivery_id.clone()]
        };
        let energy_cost_percent = uniform(rng, self.model.energy_cost_percent);
        let distance_m = uniform(rng, self.model.distance_m);
        let eta_min = uniform(rng, self.model.eta_min);

        Route {
            feasible: !blocked,
            path,
            distance_m,
            eta_min,
            energy_cost_percent,
            detour: blocked,
        }
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, range: (f64, f64)) -> f64 {
    rng.gen_range(range.0..=range.1)
}
