use std::env;
use std::path::Path;

use log::{debug, error};
use serde_json::Value;

use plait::extractors::{find_recipe_node, recipe_from_node};
use plait::groceries::{export_groceries, grocery_items};
use plait::render::{export_recipe_text_with, render_step_marked};
use plait::{fetch_recipe, load_config, prepare_recipe_with_servings, PlaitError, Recipe};

const USAGE: &str = "Usage: plait <url|recipe.json> [servings]";

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(source) = args.get(1) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let servings = match args.get(2).map(|s| s.parse::<u32>()) {
        None => None,
        Some(Ok(n)) if n > 0 => Some(n),
        Some(_) => {
            eprintln!("Servings must be a positive number\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(source, servings).await {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(source: &str, servings: Option<u32>) -> Result<(), PlaitError> {
    let config = load_config()?;
    debug!("Loaded config: {config:?}");

    let (recipe, fallback_steps, source_url) =
        if source.starts_with("http://") || source.starts_with("https://") {
            let page = fetch_recipe(source, &config).await?;
            (page.recipe, page.fallback_steps, Some(page.source_url))
        } else {
            (read_recipe_file(Path::new(source)).await?, Vec::new(), None)
        };

    let prepared = prepare_recipe_with_servings(&recipe, &fallback_steps, config.default_servings);
    let servings = servings.unwrap_or(prepared.base_servings);

    let text = export_recipe_text_with(
        &prepared,
        servings,
        source_url.as_deref(),
        render_step_marked,
    );
    println!("{text}");

    let items = grocery_items(&prepared.ingredients, prepared.scale_factor(servings));
    if let Some(list) = export_groceries(&items) {
        println!("\n{list}");
    }
    Ok(())
}

async fn read_recipe_file(path: &Path) -> Result<Recipe, PlaitError> {
    let contents = tokio::fs::read_to_string(path).await?;
    let json: Value = serde_json::from_str(&contents)?;
    let node = find_recipe_node(json).ok_or(PlaitError::NoRecipeFound)?;
    recipe_from_node(node)
}
