use csv::{ReaderBuilder, Writer};
use log::info;
use std::fs::File;
use std::path::Path;

use crate::dataset::{Dataset, GroupSummary, Record};
use crate::error::{Error, Result};

/// CSVファイルから購入データセットを読み込む
///
/// ヘッダー行に `country`, `amount`, `discount` の3列が必要です。
/// それ以外の列は無視されます。必須列が欠けている場合や数値列が
/// 変換できない場合は、部分的な読み込みは行わずエラーを返します。
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // ヘッダー行から必須列の位置を取得
    let headers = rdr.headers().map_err(Error::Csv)?.clone();
    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    };
    let country_idx = position("country")?;
    let amount_idx = position("amount")?;
    let discount_idx = position("discount")?;

    // 各行を処理
    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(Error::Csv)?;

        // 行番号はヘッダー行を含む1始まりで報告する
        let parse = |idx: usize, name: &str| -> Result<f64> {
            let text = record.get(idx).unwrap_or("");
            text.parse::<f64>().map_err(|_| {
                Error::Cast(format!(
                    "行 {} の列 '{}' を数値に変換できません: '{}'",
                    row + 2,
                    name,
                    text
                ))
            })
        };

        records.push(Record {
            country: record.get(country_idx).unwrap_or("").to_string(),
            amount: parse(amount_idx, "amount")?,
            discount: parse(discount_idx, "discount")?,
        });
    }

    info!(
        "{} 行を読み込みました: {}",
        records.len(),
        path.as_ref().display()
    );

    Ok(Dataset::new(records))
}

/// 集計結果をCSVファイルに書き込む
pub fn write_summaries<P: AsRef<Path>>(path: P, summaries: &[GroupSummary]) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(Error::Io)?;
    let mut wtr = Writer::from_writer(file);

    // ヘッダー行を書き込む
    wtr.write_record(["country", "total"]).map_err(Error::Csv)?;

    // 各行のデータを書き込む
    for summary in summaries {
        wtr.write_record([summary.country.as_str(), summary.total.to_string().as_str()])
            .map_err(Error::Csv)?;
    }

    wtr.flush().map_err(Error::Io)?;
    Ok(())
}
