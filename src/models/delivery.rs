// src/models/delivery.rs

use rand::Rng;

use crate::math::round_to_decimals;
use crate::models::hub::{Coordinate, HubName, HubSet};

/// 配送物の重量の範囲（kg）
pub const PAYLOAD_RANGE: (f64, f64) = (0.5, 4.5);
/// 配送先座標のハブからのずれ（度、各軸）
pub const LOCATION_JITTER_DEG: f64 = 0.02;

/// 配送の構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub delivery_id: String,
    pub assigned_hub: HubName,
    pub payload_kg: f64,        // 重量（kg）
    pub location: Coordinate,   // 配送先
}

/// 配送を生成する
///
/// IDは `D0001` 形式の連番。乱数は1件ごとにハブ、重量、緯度のずれ、経度のずれの順で引く。
///
/// # 引数
/// - `count`: 件数
/// - `hubs`: 担当ハブの候補
/// - `rng`: 乱数源
pub fn generate_deliveries<R: Rng + ?Sized>(
    count: usize,
    hubs: &HubSet,
    rng: &mut R,
) -> Vec<Delivery> {
    (1..=count)
        .map(|i| {
            let hub = *hubs.choose(rng);
            let payload = rng.gen_range(PAYLOAD_RANGE.0..=PAYLOAD_RANGE.1);
            let d_lat = rng.gen_range(-LOCATION_JITTER_DEG..=LOCATION_JITTER_DEG);
            let d_lon = rng.gen_range(-LOCATION_JITTER_DEG..=LOCATION_JITTER_DEG);
            Delivery {
                delivery_id: format!("D{:04}", i),
                assigned_hub: hub.name,
                payload_kg: round_to_decimals(payload, 2),
                location: hub.location.offset(d_lat, d_lon),
            }
        })
        .collect()
}
