use clap::Subcommand;
use recipebox_core::Config;

use super::{open_catalog, open_registry, print_cards, CliResult};

#[derive(Subcommand)]
pub enum RecipesAction {
    /// List every recipe
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search titles and ingredients (case-insensitive substring)
    Search {
        /// Search text; blank lists everything
        #[arg(default_value = "")]
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe in full
    Show {
        /// Recipe id
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: RecipesAction, config: &Config) -> CliResult {
    let catalog = open_catalog(config)?;
    let registry = open_registry(config)?;

    match action {
        RecipesAction::List { json } => {
            let recipes: Vec<_> = catalog.list_all().iter().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                print_cards(&recipes, |id| registry.is_favorite(id));
            }
        }
        RecipesAction::Search { query, json } => {
            let results = catalog.search(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No recipes match '{}'.", query.trim());
            } else {
                print_cards(&results, |id| registry.is_favorite(id));
            }
        }
        RecipesAction::Show { id, json } => {
            let recipe = catalog
                .get(&id)
                .ok_or_else(|| format!("recipe '{id}' not found"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(recipe)?);
                return Ok(());
            }
            let star = if registry.is_favorite(&recipe.id) {
                "★ Favorite"
            } else {
                "☆ Favorite"
            };
            println!("{}", recipe.title);
            println!("{}", recipe.summary());
            println!();
            println!("{}", recipe.description);
            println!();
            println!("Ingredients:");
            for ingredient in &recipe.ingredients {
                println!("  - {ingredient}");
            }
            if let Some(image) = &recipe.image {
                println!();
                println!("Image: {image}");
            }
            println!();
            println!("{star}");
        }
    }
    Ok(())
}
