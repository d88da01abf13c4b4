// src/simulation/mod.rs

pub mod clock;
pub mod csv;
pub mod framework;
pub mod load_parameters;
pub mod log;
pub mod multi_run;
pub mod progress;
pub mod summary;

use crate::models::hub::HubSet;
use crate::models::outcome::FailureModel;
use crate::simulation::clock::SimulationClock;

/// 1回のシミュレーションで共有する設定
pub struct SimulationContext<S> {
    pub hubs: HubSet,               // ドローン生成に使うハブ集合
    pub model: FailureModel,        // 失敗モデル
    pub sampler: S,                 // ルート生成
    pub clock: SimulationClock,     // ログの時刻
}
