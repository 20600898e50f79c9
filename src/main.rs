use std::env;

use kaimono::error::Result;
use kaimono::io;
use kaimono::pipeline::{self, DEFAULT_OUTLIER_FACTOR};
use kaimono::GroupSummary;

/// デフォルトの入力ファイル
const DEFAULT_DATA_PATH: &str = "data/purchases.csv";

fn print_summaries(title: &str, summaries: &[GroupSummary]) {
    println!("\n== {} ==", title);
    println!("{:<10} {:>12}", "country", "total");
    for summary in summaries {
        println!("{:<10} {:>12.2}", summary.country, summary.total);
    }
}

fn main() -> Result<()> {
    // 引数でパスを上書きできる（フラグは受け付けない）
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());
    let dataset = io::read_csv(&path)?;

    println!("{} 行を読み込みました: {}", dataset.len(), path);
    for record in dataset.head(5) {
        println!("{:?}", record);
    }

    println!("\namount合計: {}", pipeline::total_amount(&dataset));

    print_summaries("国ごとのamount合計", &pipeline::total_by_country(&dataset));
    print_summaries(
        "国ごとの割引後合計",
        &pipeline::net_total_by_country(&dataset),
    );
    print_summaries(
        "割引後合計（全体中央値基準で外れ値除外）",
        &pipeline::net_total_by_country_excluding_global_outliers(
            &dataset,
            DEFAULT_OUTLIER_FACTOR,
        )?,
    );
    print_summaries(
        "割引後合計（国別中央値基準で外れ値除外）",
        &pipeline::net_total_by_country_excluding_group_outliers(&dataset, DEFAULT_OUTLIER_FACTOR)?,
    );

    Ok(())
}
