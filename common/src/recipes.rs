//! recipe-list（JSON）の読み込み
//!
//! トップレベルがレシピ配列になっているJSONを読み込む。
//! ここでは在庫との突き合わせはせず、整形式のレシピを元の順序のまま保持する。

use crate::error::{Error, Result};
use crate::types::Recipe;
use std::path::Path;

/// recipe-list JSONファイルを読み込む
pub fn load_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let content = std::fs::read_to_string(path).map_err(Error::RecipeListOpen)?;
    parse_recipes(&content)
}

/// JSON文字列をレシピ列にデコードする
///
/// デコード失敗と空配列はどちらも同じパースエラーとして報告する。
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> =
        serde_json::from_str(json).map_err(|_| Error::RecipeListParse)?;

    if recipes.is_empty() {
        return Err(Error::RecipeListParse);
    }

    Ok(recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_source_order() {
        let json = r#"[
            { "name": "grilled cheese on toast", "ingredients": [
                { "item": "bread", "amount": 2, "unit": "slices" },
                { "item": "cheese", "amount": 2, "unit": "slices" }
            ]},
            { "name": "salad sandwich", "ingredients": [
                { "item": "bread", "amount": 2, "unit": "slices" },
                { "item": "mixed salad", "amount": 100, "unit": "grams" }
            ]}
        ]"#;

        let recipes = parse_recipes(json).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].name, "grilled cheese on toast");
        assert_eq!(recipes[1].name, "salad sandwich");
        assert_eq!(recipes[1].ingredients[1].item, "mixed salad");
    }

    #[test]
    fn test_empty_array_is_an_error() {
        let result = parse_recipes("[]");
        assert!(matches!(result, Err(Error::RecipeListParse)));
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        let result = parse_recipes(r#"{ "name": "not a list" }"#);
        assert!(matches!(result, Err(Error::RecipeListParse)));
    }

    #[test]
    fn test_garbage_is_an_error() {
        let result = parse_recipes("not json at all");
        assert!(matches!(result, Err(Error::RecipeListParse)));
    }

    #[test]
    fn test_recipe_missing_fields_is_an_error() {
        // ingredientsを欠いたレコードはレシピとして受け付けない
        let result = parse_recipes(r#"[ { "name": "mystery dish" } ]"#);
        assert!(matches!(result, Err(Error::RecipeListParse)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_recipes(Path::new("/nonexistent/recipes.json"));

        let err = result.unwrap_err();
        assert!(matches!(err, Error::RecipeListOpen(_)));
        assert_eq!(format!("{}", err), "Unable to open recipe-list");
    }
}
