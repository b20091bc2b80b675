use clap::Subcommand;
use recipebox_core::{Config, Event};

use super::{open_catalog, open_registry, print_cards, CliResult};

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List favorited recipes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip a recipe's favorite state
    Toggle {
        /// Recipe id
        id: String,
    },
    /// Print whether a recipe is a favorite
    Check {
        /// Recipe id
        id: String,
    },
    /// Print favorited ids that no longer match a recipe
    Stale,
}

pub fn run(action: FavoritesAction, config: &Config) -> CliResult {
    let catalog = open_catalog(config)?;
    let mut registry = open_registry(config)?;

    match action {
        FavoritesAction::List { json } => {
            let favorites = registry.favorites_of(&catalog);
            if json {
                println!("{}", serde_json::to_string_pretty(&favorites)?);
            } else if favorites.is_empty() {
                println!("No favorites yet.");
            } else {
                print_cards(&favorites, |_| true);
            }
        }
        FavoritesAction::Toggle { id } => {
            if !catalog.contains(&id) {
                tracing::warn!(id = %id, "toggling an id that is not in the catalog");
            }
            // Re-render the toggled card from the change notification.
            let card = catalog.get(&id).cloned();
            registry.subscribe(move |event| {
                let Event::FavoritesChanged { recipe_id, favorited, .. } = event;
                tracing::info!(recipe_id = %recipe_id, favorited, "favorites changed");
                let state = if *favorited { "favorited" } else { "not favorited" };
                println!("{recipe_id}: {state}");
                if let Some(recipe) = &card {
                    print_cards(&[recipe], |_| *favorited);
                }
            });
            registry.toggle_favorite(&id);
        }
        FavoritesAction::Check { id } => {
            println!("{}", registry.is_favorite(&id));
        }
        FavoritesAction::Stale => {
            for id in registry.stale_ids(&catalog) {
                println!("{id}");
            }
        }
    }
    Ok(())
}
