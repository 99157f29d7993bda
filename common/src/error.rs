//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 表示文字列はそのままユーザー向け出力になるので変更しないこと。
#[derive(Error, Debug)]
pub enum Error {
    /// fridge-list が開けない
    #[error("Unable to open fridge-list")]
    FridgeListOpen(#[source] std::io::Error),

    /// 期限内の食材が1件も残らなかった
    #[error("fridge-list is empty")]
    FridgeListEmpty,

    /// recipe-list が開けない
    #[error("Unable to open recipe-list")]
    RecipeListOpen(#[source] std::io::Error),

    /// recipe-list のデコードに失敗、または空
    #[error("Unable to parse recipe-list or its empty")]
    RecipeListParse,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "file not found")
    }

    #[test]
    fn test_display_fridge_list_open() {
        let error = Error::FridgeListOpen(not_found());
        assert_eq!(format!("{}", error), "Unable to open fridge-list");
    }

    #[test]
    fn test_display_fridge_list_empty() {
        assert_eq!(format!("{}", Error::FridgeListEmpty), "fridge-list is empty");
    }

    #[test]
    fn test_display_recipe_list_open() {
        let error = Error::RecipeListOpen(not_found());
        assert_eq!(format!("{}", error), "Unable to open recipe-list");
    }

    #[test]
    fn test_display_recipe_list_parse() {
        assert_eq!(
            format!("{}", Error::RecipeListParse),
            "Unable to parse recipe-list or its empty"
        );
    }

    #[test]
    fn test_open_errors_keep_source() {
        use std::error::Error as _;

        let error = Error::FridgeListOpen(not_found());
        let source = error.source().expect("source missing");
        assert!(source.to_string().contains("file not found"));
    }
}
