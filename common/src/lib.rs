//! Recipe Finder 共通ライブラリ
//!
//! fridge-list / recipe-list の読み込みと照合ロジック。
//! CLI本体（recipe-finder-rust）から利用する。

pub mod error;
pub mod fridge;
pub mod matcher;
pub mod recipes;
pub mod types;

pub use error::{Error, Result};
pub use fridge::{load_fridge_list, parse_fridge_list};
pub use matcher::{rank_recipes, title_case, Recommendation};
pub use recipes::{load_recipes, parse_recipes};
pub use types::{FridgeItem, FridgeList, Ingredient, Recipe};

use std::path::Path;

/// fridge-listとrecipe-listから今夜のおすすめを決める
///
/// 2つの入力だけから結果が決まる純関数。呼び出しをまたいで保持する
/// 状態はなく、同じ入力には常に同じ結果を返す。
pub fn find_recipe(fridge_list: &Path, recipe_list: &Path) -> Result<Recommendation> {
    let fridge = fridge::load_fridge_list(fridge_list)?;
    let recipes = recipes::load_recipes(recipe_list)?;
    Ok(matcher::rank_recipes(&fridge, &recipes))
}
