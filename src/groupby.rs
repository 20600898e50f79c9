use std::collections::HashMap;

use crate::dataset::{Dataset, GroupSummary, Record};
use crate::error::Result;
use crate::stats;

/// 国ごとにグループ化した結果を表す構造体
#[derive(Debug)]
pub struct GroupBy<'a> {
    /// 国ごとの行番号
    groups: HashMap<String, Vec<usize>>,

    /// 元のデータセット
    source: &'a Dataset,
}

impl<'a> GroupBy<'a> {
    /// 新しいグループを作成
    pub fn new(source: &'a Dataset) -> Self {
        // グループを作成
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, record) in source.iter().enumerate() {
            groups
                .entry(record.country.clone())
                .or_insert_with(Vec::new)
                .push(i);
        }

        GroupBy { groups, source }
    }

    /// グループ数を取得
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// 各グループのサイズを返す
    pub fn size(&self) -> HashMap<String, usize> {
        self.groups
            .iter()
            .map(|(k, indices)| (k.clone(), indices.len()))
            .collect()
    }

    /// 各グループでレコードの評価値を合計
    ///
    /// 結果は国名の昇順で返します。
    pub fn aggregate<F>(&self, value: F) -> Vec<GroupSummary>
    where
        F: Fn(&Record) -> f64,
    {
        let mut results: Vec<GroupSummary> = self
            .groups
            .iter()
            .map(|(country, indices)| {
                let total = indices
                    .iter()
                    .map(|&i| value(&self.source.records()[i]))
                    .sum();
                GroupSummary::new(country.clone(), total)
            })
            .collect();

        results.sort_by(|a, b| a.country.cmp(&b.country));
        results
    }

    /// 各グループのamount中央値を計算
    pub fn median_amount(&self) -> Result<HashMap<String, f64>> {
        let mut results = HashMap::new();

        for (country, indices) in &self.groups {
            // グループは存在する行から導かれるため空にはならない
            let values: Vec<f64> = indices
                .iter()
                .map(|&i| self.source.records()[i].amount)
                .collect();
            results.insert(country.clone(), stats::median(&values)?);
        }

        Ok(results)
    }
}
