use crate::error::{RecipeFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ユーザー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 入力ファイル名を解決するディレクトリ
    pub input_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("test-input/sample"),
        }
    }
}

impl Config {
    /// 設定ファイルを読み込む。なければデフォルト値を返す
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            RecipeFinderError::Config("ホームディレクトリが見つかりません".into())
        })?;
        Ok(home.join(".config").join("recipe-finder").join("config.json"))
    }
}
