// 集計パイプラインモジュール
//
// 購入データセットに対する集計クエリを提供します。
// 各クエリは不変のDatasetを入力とする純粋関数で、結果は毎回完全に
// 再計算されます（キャッシュや差分更新は行いません）。

use log::debug;

use crate::dataset::{Dataset, GroupSummary, Record};
use crate::error::Result;
use crate::groupby::GroupBy;
use crate::stats;

/// 外れ値判定のデフォルト係数
pub const DEFAULT_OUTLIER_FACTOR: f64 = 10.0;

/// 全レコードのamount合計
///
/// 空のDatasetに対しては0.0を返します。
pub fn total_amount(dataset: &Dataset) -> f64 {
    stats::sum(&dataset.amounts())
}

/// 国ごとのamount合計（国名昇順）
pub fn total_by_country(dataset: &Dataset) -> Vec<GroupSummary> {
    GroupBy::new(dataset).aggregate(|r| r.amount)
}

/// 国ごとの割引適用後の合計（国名昇順）
pub fn net_total_by_country(dataset: &Dataset) -> Vec<GroupSummary> {
    GroupBy::new(dataset).aggregate(|r| r.net_amount())
}

/// 全体のamount中央値を基準に外れ値を除外してから国ごとに割引後合計
///
/// amountが「全レコードの中央値 × factor」を超えるレコードを除外した上で、
/// 残りに対して国ごとの割引後合計を計算します。中央値は除外前の
/// 全レコードから計算します。
pub fn net_total_by_country_excluding_global_outliers(
    dataset: &Dataset,
    factor: f64,
) -> Result<Vec<GroupSummary>> {
    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let threshold = stats::median(&dataset.amounts())? * factor;
    let kept: Vec<Record> = dataset
        .iter()
        .filter(|r| r.amount <= threshold)
        .cloned()
        .collect();

    debug!(
        "グローバル外れ値除外: {} 行 -> {} 行 (閾値 {})",
        dataset.len(),
        kept.len(),
        threshold
    );

    Ok(net_total_by_country(&Dataset::new(kept)))
}

/// 国ごとのamount中央値を基準にグループ内で外れ値を除外してから割引後合計
///
/// 各グループでamountが「そのグループの中央値 × factor」を超えるレコードを
/// 除外した上で、残りに対して割引後合計を計算します。1件だけのグループは
/// 自身が中央値となるため、factor >= 1 なら除外されません。
pub fn net_total_by_country_excluding_group_outliers(
    dataset: &Dataset,
    factor: f64,
) -> Result<Vec<GroupSummary>> {
    if dataset.is_empty() {
        return Ok(Vec::new());
    }

    let medians = GroupBy::new(dataset).median_amount()?;
    let kept: Vec<Record> = dataset
        .iter()
        .filter(|r| r.amount <= medians[r.country.as_str()] * factor)
        .cloned()
        .collect();

    debug!(
        "グループ内外れ値除外: {} 行 -> {} 行",
        dataset.len(),
        kept.len()
    );

    Ok(net_total_by_country(&Dataset::new(kept)))
}
