// src/config/parameters.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::error::ConfigError;
use crate::models::outcome::FailureModel;
use crate::models::route::RouteModel;

/// シミュレーションのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationParameters {
    pub drone_count: usize,                         // ドローン数
    pub delivery_count: usize,                      // 配送数
    pub base_failure_rate: f64,                     // 基本失敗率 (0〜1)
    pub blocked_route_failure_probability: f64,     // 経路なし時の失敗確率 (0〜1)
    pub battery_failure_threshold: f64,             // バッテリ閾値の割合 (0〜1)
    #[serde(default = "default_runs")]
    pub runs: usize,                                // 繰り返し回数 (1以上)
    #[serde(default)]
    pub seed: Option<u64>,                          // 乱数シード（省略時はエントロピーから）
    #[serde(default = "default_dispatch_interval_secs")]
    pub dispatch_interval_secs: u64,                // 配送間隔（秒）
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,          // 開始時刻（省略時は現在時刻）
    #[serde(default)]
    pub route: RouteModel,
}

fn default_runs() -> usize {
    1
}

fn default_dispatch_interval_secs() -> u64 {
    60
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            drone_count: 70,
            delivery_count: 350,
            base_failure_rate: 0.09,
            blocked_route_failure_probability: 0.20,
            battery_failure_threshold: 0.90,
            runs: default_runs(),
            seed: None,
            dispatch_interval_secs: default_dispatch_interval_secs(),
            start_time: None,
            route: RouteModel::default(),
        }
    }
}

impl SimulationParameters {
    /// 実行前の検証（値の丸め込みはしない）
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("drone_count", self.drone_count)?;
        check_positive("delivery_count", self.delivery_count)?;
        check_positive("runs", self.runs)?;

        self.failure_model()?;
        self.route.validate()?;
        Ok(())
    }

    /// 検証済みの失敗モデルを作る
    pub fn failure_model(&self) -> Result<FailureModel, ConfigError> {
        FailureModel::new(
            self.base_failure_rate,
            self.blocked_route_failure_probability,
            self.battery_failure_threshold,
        )
    }
}

pub(crate) fn check_positive(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveCount { field });
    }
    Ok(())
}

pub(crate) fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN もここで弾かれる
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

/// `0 <= min <= max <= limit` を確認する
///
/// NaN と無限大は比較が成り立たないためここで弾かれる。
pub(crate) fn check_range(
    field: &'static str,
    (min, max): (f64, f64),
    limit: f64,
) -> Result<(), ConfigError> {
    if !(min >= 0.0 && min <= max && max <= limit) {
        return Err(ConfigError::InvalidRange { field, min, max, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        let params = SimulationParameters { drone_count: 0, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveCount { field: "drone_count" })
        ));

        let params = SimulationParameters { delivery_count: 0, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveCount { field: "delivery_count" })
        ));

        let params = SimulationParameters { runs: 0, ..Default::default() };
        assert!(matches!(params.validate(), Err(ConfigError::NonPositiveCount { field: "runs" })));
    }

    #[test]
    fn test_probabilities_outside_unit_interval_are_rejected() {
        let params = SimulationParameters { base_failure_rate: 1.5, ..Default::default() };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::ProbabilityOutOfRange { field: "base_failure_rate", .. })
        ));
        assert!(params.failure_model().is_err());

        let params = SimulationParameters { blocked_route_failure_probability: -0.1, ..Default::default() };
        assert!(params.validate().is_err());

        let params = SimulationParameters { battery_failure_threshold: f64::NAN, ..Default::default() };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let params = SimulationParameters {
            base_failure_rate: 0.0,
            blocked_route_failure_probability: 1.0,
            battery_failure_threshold: 1.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_inverted_route_range_is_rejected() {
        let params = SimulationParameters {
            route: RouteModel { eta_min: (30.0, 5.0), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { field: "route.eta_min", .. })
        ));
    }

    #[test]
    fn test_negative_route_ranges_are_rejected() {
        let params = SimulationParameters {
            route: RouteModel { distance_m: (-10.0, 100.0), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { field: "route.distance_m", .. })
        ));

        let params = SimulationParameters {
            route: RouteModel { energy_cost_percent: (-1.0, 20.0), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { field: "route.energy_cost_percent", .. })
        ));
    }

    #[test]
    fn test_energy_cost_above_full_battery_is_rejected() {
        let params = SimulationParameters {
            route: RouteModel { energy_cost_percent: (10.0, 100.5), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { field: "route.energy_cost_percent", limit, .. }) if limit == 100.0
        ));

        let params = SimulationParameters {
            route: RouteModel { energy_cost_percent: (0.0, 100.0), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_huge_or_non_finite_route_ranges_are_rejected() {
        let params = SimulationParameters {
            route: RouteModel { energy_cost_percent: (-1e308, 1e308), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParameters {
            route: RouteModel { distance_m: (0.0, f64::MAX), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { field: "route.distance_m", .. })
        ));

        let params = SimulationParameters {
            route: RouteModel { eta_min: (5.0, f64::INFINITY), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = SimulationParameters {
            route: RouteModel { eta_min: (f64::NAN, 10.0), ..RouteModel::default() },
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_parse_minimal_yaml_uses_defaults() {
        let yaml = r#"
drone_count: 10
delivery_count: 50
base_failure_rate: 0.05
blocked_route_failure_probability: 0.2
battery_failure_threshold: 0.9
"#;
        let params: SimulationParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.runs, 1);
        assert_eq!(params.seed, None);
        assert_eq!(params.dispatch_interval_secs, 60);
        assert_eq!(params.route, RouteModel::default());
        assert!(params.validate().is_ok());

        let model = params.failure_model().unwrap();
        assert_eq!(model.base_failure_rate(), 0.05);
        assert_eq!(model.battery_failure_threshold(), 0.9);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
drone_count: 5
delivery_count: 3
base_failure_rate: 0.0
blocked_route_failure_probability: 0.0
battery_failure_threshold: 1.0
runs: 4
seed: 1234
dispatch_interval_secs: 30
start_time: "2024-05-01T08:00:00Z"
route:
  blocked_probability: 0.25
  energy_cost_percent: [10.0, 20.0]
"#;
        let params: SimulationParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.runs, 4);
        assert_eq!(params.seed, Some(1234));
        assert_eq!(params.start_time.unwrap().to_rfc3339(), "2024-05-01T08:00:00+00:00");
        assert_eq!(params.route.blocked_probability, 0.25);
        assert_eq!(params.route.energy_cost_percent, (10.0, 20.0));
        // 省略した範囲は既定値
        assert_eq!(params.route.distance_m, (500.0, 8000.0));
    }
}
