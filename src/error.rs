use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum Error {
    #[error("入出力エラー")]
    Io(#[source] std::io::Error),

    #[error("CSVエラー")]
    Csv(#[source] csv::Error),

    #[error("列が見つかりません: {0}")]
    ColumnNotFound(String),

    #[error("型変換エラー: {0}")]
    Cast(String),

    #[error("空データエラー: {0}")]
    Empty(String),

    #[error("データ一貫性エラー: {0}")]
    Consistency(String),
}

/// Resultの型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
