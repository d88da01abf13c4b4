// src/math/statistics.rs

/// 算術平均
///
/// # 戻り値
/// - 空の場合は`None`
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// 最小値と最大値
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// ヒストグラムの1区間
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// 等幅ヒストグラム
///
/// 最小値から最大値までを `bins` 個の区間に分割する。最大値は最後の区間に含める。
/// 全ての値が等しい場合は幅0の区間1つにまとめる。
///
/// # 引数
/// - `values`: 対象の値
/// - `bins`: 区間数（0の場合は空を返す）
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some((lo, hi)) = min_max(values) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if hi == lo {
        return vec![HistogramBin { lower: lo, upper: hi, count: values.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &v in values {
        let index = (((v - lo) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        let m = mean(&[50.0, 60.0, 70.0]).unwrap();
        assert!((m - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[3.0, -1.0, 8.5, 2.0]), Some((-1.0, 8.5)));
    }

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let bins = histogram(&values, 5);
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        // 最大値は最後の区間に入る
        assert_eq!(bins[4].count, 3);
        assert_eq!(bins[4].upper, 10.0);
        assert_eq!(bins[0].lower, 0.0);
    }

    #[test]
    fn test_histogram_constant_values() {
        let bins = histogram(&[42.0, 42.0, 42.0], 10);
        assert_eq!(bins, vec![HistogramBin { lower: 42.0, upper: 42.0, count: 3 }]);
    }

    #[test]
    fn test_histogram_empty_inputs() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0, 2.0], 0).is_empty());
    }
}
