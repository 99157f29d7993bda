//! 共有型定義
//!
//! 読み込みと照合で共有される型:
//! - FridgeItem: 冷蔵庫の食材1件
//! - FridgeList: 小文字化した食材名で引ける索引
//! - Ingredient / Recipe: レシピ定義

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 冷蔵庫の食材1件
///
/// 読み込み時に1行から生成され、以後変更しない。
#[derive(Debug, Clone, PartialEq)]
pub struct FridgeItem {
    pub name: String,
    pub amount: f64,
    /// 単位トークン（換算はせず文字列として比較する）
    pub unit: String,
    /// 賞味期限
    pub use_by: NaiveDate,
}

/// 食材名（小文字化）→ FridgeItem の索引
///
/// 同名の行が複数あった場合は後の行が勝つ。
#[derive(Debug, Clone, Default)]
pub struct FridgeList {
    items: HashMap<String, FridgeItem>,
}

impl FridgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 食材を登録する（索引キーは小文字化した名前）
    pub fn insert(&mut self, item: FridgeItem) {
        self.items.insert(item.name.to_lowercase(), item);
    }

    /// 食材名で検索する（大文字小文字は無視）
    pub fn get(&self, name: &str) -> Option<&FridgeItem> {
        self.items.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// レシピの材料1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: f64,
    pub unit: String,
}

/// レシピ1件
///
/// 読み込み順が順位付けの同点判定にそのまま使われる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}
