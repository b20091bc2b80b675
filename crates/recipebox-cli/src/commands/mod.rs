pub mod config;
pub mod favorites;
pub mod recipes;

use recipebox_core::{Config, FavoritesRegistry, FileSettingsStore, Recipe, RecipeCatalog};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Catalog selected by the user's config.
pub fn open_catalog(config: &Config) -> Result<RecipeCatalog, Box<dyn std::error::Error>> {
    Ok(RecipeCatalog::from_config(config)?)
}

/// Favorites registry over the configured settings scope.
pub fn open_registry(
    config: &Config,
) -> Result<FavoritesRegistry<FileSettingsStore>, Box<dyn std::error::Error>> {
    let store = FileSettingsStore::open(&config.settings_scope())?;
    tracing::debug!(path = %store.path().display(), "opening favorites");
    Ok(FavoritesRegistry::load(store))
}

/// Print recipes as cards, marking favorites with a star.
pub fn print_cards(recipes: &[&Recipe], is_favorite: impl Fn(&str) -> bool) {
    for recipe in recipes {
        let star = if is_favorite(&recipe.id) { "★" } else { "☆" };
        println!("{star} [{}] {}", recipe.id, recipe.title);
        println!("    {}", recipe.summary());
        if !recipe.description.is_empty() {
            println!("    {}", recipe.description);
        }
    }
}
