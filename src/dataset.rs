use serde::{Deserialize, Serialize};

/// Record構造体: 1件の購入トランザクション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 国（カテゴリ）
    pub country: String,

    /// 購入金額
    pub amount: f64,

    /// 割引額
    pub discount: f64,
}

impl Record {
    /// 新しいRecordを作成
    pub fn new(country: impl Into<String>, amount: f64, discount: f64) -> Self {
        Record {
            country: country.into(),
            amount,
            discount,
        }
    }

    /// 割引適用後の金額
    pub fn net_amount(&self) -> f64 {
        self.amount - self.discount
    }
}

/// Dataset構造体: 購入レコードの列（読み込み後は不変）
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// 新しいDatasetをベクトルから作成
    pub fn new(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// 行数を取得
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Datasetが空かどうか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// レコードの配列を取得
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// レコードのイテレータを取得
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// 先頭n件を返す（プレビュー用）
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// amount列を取り出す
    pub fn amounts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.amount).collect()
    }
}

/// GroupSummary構造体: 国ごとの集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// 国（グループキー）
    pub country: String,

    /// 集計値
    pub total: f64,
}

impl GroupSummary {
    /// 新しいGroupSummaryを作成
    pub fn new(country: impl Into<String>, total: f64) -> Self {
        GroupSummary {
            country: country.into(),
            total,
        }
    }
}
