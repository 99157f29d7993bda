//! レシピの照合と順位付け
//!
//! 全材料が冷蔵庫で賄えるレシピのうち、使う食材の賞味期限が最も近い
//! ものを推薦する。どれも賄えなければ "Order Takeout"。

use crate::types::{FridgeList, Recipe};
use chrono::NaiveDate;
use std::fmt;

/// 照合結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    /// 推薦レシピ（表示用にタイトルケース化済み）
    Recipe(String),
    /// 作れるレシピなし
    OrderTakeout,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Recipe(name) => write!(f, "{}", name),
            Recommendation::OrderTakeout => write!(f, "Order Takeout"),
        }
    }
}

/// 照合候補（レシピ番号と、使う食材の中で最も近い賞味期限）
#[derive(Debug, Clone)]
struct MatchCandidate {
    recipe_index: usize,
    /// 材料が1つもないレシピでは None のまま
    closest_use_by: Option<NaiveDate>,
}

/// 全レシピを照合し、最も賞味期限の近い完全一致レシピを返す
///
/// 材料が満たされる条件: 同名の食材がある（大文字小文字無視）、
/// 単位トークンが完全一致（換算しない）、在庫量が必要量以上。
/// 全材料が満たされたレシピだけが候補になり、材料0件のレシピは
/// 自明に成立する（0 == 0）。
pub fn rank_recipes(fridge: &FridgeList, recipes: &[Recipe]) -> Recommendation {
    let mut candidates = Vec::new();

    for (recipe_index, recipe) in recipes.iter().enumerate() {
        let mut matched = 0;
        let mut closest_use_by: Option<NaiveDate> = None;

        for ingredient in &recipe.ingredients {
            if let Some(item) = fridge.get(&ingredient.item) {
                if ingredient.unit == item.unit && ingredient.amount <= item.amount {
                    matched += 1;

                    // 後で順位付けに使うので最も近い期限を覚えておく
                    if closest_use_by.map_or(true, |date| item.use_by < date) {
                        closest_use_by = Some(item.use_by);
                    }
                }
            }
        }

        if matched == recipe.ingredients.len() {
            candidates.push(MatchCandidate {
                recipe_index,
                closest_use_by,
            });
        }
    }

    if candidates.is_empty() {
        return Recommendation::OrderTakeout;
    }

    // 期限が近い順の安定ソート。期限なし（材料0件）は最後尾に回し、
    // 同点は元の順序を保つ
    candidates.sort_by_key(|c| c.closest_use_by.unwrap_or(NaiveDate::MAX));

    let winner = &candidates[0];
    Recommendation::Recipe(title_case(&recipes[winner.recipe_index].name))
}

/// 各単語の先頭だけを大文字にする（残りはそのまま）
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
