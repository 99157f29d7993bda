use thiserror::Error;

/// アプリケーション層のエラー型
///
/// 照合コアのエラーはメッセージをそのまま透過させる。
#[derive(Error, Debug)]
pub enum RecipeFinderError {
    #[error(transparent)]
    Finder(#[from] recipe_finder_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecipeFinderError>;
