use clap::Parser;
use recipe_finder_common as finder;
use recipe_finder_rust::{cli::Cli, config::Config, error::Result};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        // エラーメッセージ自体が出力仕様の一部なのでstdoutに出す
        println!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load()?;
    let input_dir = cli.input_dir.clone().unwrap_or(config.input_dir);

    let fridge_path = input_dir.join(&cli.fridge_list);
    let recipe_path = input_dir.join(&cli.recipe_list);

    if cli.verbose {
        println!("🍳 recipe-finder - 今夜の献立提案\n");
        println!("[1/3] fridge-list を読み込み中...");
    }

    let fridge = finder::load_fridge_list(&fridge_path)?;

    if cli.verbose {
        println!("✔ {}件の食材を検出\n", fridge.len());
        println!("[2/3] recipe-list を読み込み中...");
    }

    let recipes = finder::load_recipes(&recipe_path)?;

    if cli.verbose {
        println!("✔ {}件のレシピを検出\n", recipes.len());
        println!("[3/3] 照合中...");
    }

    let recommendation = finder::rank_recipes(&fridge, &recipes);

    if cli.verbose {
        println!("✔ 照合完了\n");
    }

    println!("{}", recommendation);
    Ok(())
}
