use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "冷蔵庫の食材から今夜のレシピを提案するツール", long_about = None)]
pub struct Cli {
    /// fridge-list CSVファイル名（入力ディレクトリからの相対）
    #[arg(required = true)]
    pub fridge_list: String,

    /// recipe-list JSONファイル名（入力ディレクトリからの相対）
    #[arg(required = true)]
    pub recipe_list: String,

    /// 入力ディレクトリ（省略時は設定ファイルの値）
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// 進捗を表示
    #[arg(short, long)]
    pub verbose: bool,
}
