// 記述統計モジュール

use crate::error::{Error, Result};

/// 合計を計算（空データは0.0）
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// 中央値を計算
///
/// ソート済みの値に対する標準的な中点補間の定義を使用します。
/// 偶数件の場合は中央2値の平均、奇数件の場合は中央の値を返します。
pub fn median(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::Empty(
            "中央値の計算には少なくとも1つのデータが必要です".into(),
        ));
    }

    // データをソートして中央値を計算
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    Ok(median)
}
