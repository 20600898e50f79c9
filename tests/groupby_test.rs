use kaimono::{Dataset, GroupBy, Record};

fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("US", 100.0, 10.0),
        Record::new("FR", 50.0, 5.0),
        Record::new("US", 90.0, 5.0),
        Record::new("FR", 60.0, 0.0),
        Record::new("JP", 80.0, 8.0),
    ])
}

#[test]
fn test_groupby_creation() {
    // GroupByの基本的な作成
    let dataset = sample_dataset();
    let group_by = GroupBy::new(&dataset);

    assert_eq!(group_by.group_count(), 3); // US, FR, JP の3グループ
}

#[test]
fn test_groupby_size() {
    // グループサイズの計算
    let dataset = sample_dataset();
    let group_by = GroupBy::new(&dataset);

    let sizes = group_by.size();
    assert_eq!(sizes.get("US"), Some(&2));
    assert_eq!(sizes.get("FR"), Some(&2));
    assert_eq!(sizes.get("JP"), Some(&1));
}

#[test]
fn test_groupby_aggregate_is_sorted() {
    // 集計結果は国名の昇順
    let dataset = sample_dataset();
    let totals = GroupBy::new(&dataset).aggregate(|r| r.amount);

    let countries: Vec<&str> = totals.iter().map(|s| s.country.as_str()).collect();
    assert_eq!(countries, vec!["FR", "JP", "US"]);

    assert_eq!(totals[0].total, 110.0); // 50 + 60
    assert_eq!(totals[1].total, 80.0);
    assert_eq!(totals[2].total, 190.0); // 100 + 90
}

#[test]
fn test_groupby_aggregate_net_amount() {
    // 割引適用後の合計
    let dataset = sample_dataset();
    let totals = GroupBy::new(&dataset).aggregate(|r| r.net_amount());

    assert_eq!(totals[0].total, 105.0); // (50-5) + (60-0)
    assert_eq!(totals[1].total, 72.0); // 80 - 8
    assert_eq!(totals[2].total, 175.0); // (100-10) + (90-5)
}

#[test]
fn test_groupby_median_amount() {
    // グループごとのamount中央値
    let dataset = sample_dataset();
    let medians = GroupBy::new(&dataset).median_amount().unwrap();

    assert_eq!(medians.get("US"), Some(&95.0)); // (90 + 100) / 2
    assert_eq!(medians.get("FR"), Some(&55.0)); // (50 + 60) / 2
    assert_eq!(medians.get("JP"), Some(&80.0)); // 1件なら自身が中央値
}

#[test]
fn test_groupby_empty_dataset() {
    // 空のDatasetからはグループが作られない
    let dataset = Dataset::new(vec![]);
    let group_by = GroupBy::new(&dataset);

    assert_eq!(group_by.group_count(), 0);
    assert!(group_by.aggregate(|r| r.amount).is_empty());
    assert!(group_by.median_amount().unwrap().is_empty());
}
