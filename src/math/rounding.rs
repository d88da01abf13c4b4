// src/math/rounding.rs

/// 指定した小数桁数に丸める
///
/// # 引数
/// - `value`: 丸める値
/// - `decimals`: 小数点以下の桁数
///
/// # 戻り値
/// - 丸めた値（0.5は0から遠い方へ丸める）
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_decimals() {
        assert!((round_to_decimals(3.14159, 2) - 3.14).abs() < 1e-9);
        assert!((round_to_decimals(1.006, 2) - 1.01).abs() < 1e-9);
        assert!((round_to_decimals(-2.349, 2) - (-2.35)).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to_decimals(4.5, 0), 5.0);
        assert_eq!(round_to_decimals(4.49, 0), 4.0);
    }

    #[test]
    fn test_round_keeps_bounds() {
        // 一様乱数の範囲端が丸めで範囲外に出ないこと
        assert_eq!(round_to_decimals(1.0, 2), 1.0);
        assert_eq!(round_to_decimals(4.999, 2), 5.0);
    }
}
