//! Recipe catalog: the fixed list of recipes and the substring search over it.
//!
//! The catalog is built once at startup, either from the embedded table in
//! [`builtin`] or from a TOML fixture, and never changes afterwards.
//!
//! ## Fixture format
//!
//! ```toml
//! [[recipes]]
//! id = "r1"
//! title = "Grilled Salmon with Lemon"
//! category = "Seafood"
//! description = "A simple, healthy grilled salmon with lemon and herbs."
//! ingredients = ["Salmon fillet", "Lemon"]
//! cook_minutes = 25
//! calories = 420
//! ```

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result, ValidationError};
use crate::recipe::{fold_case, Recipe};
use crate::storage::Config;

/// Wrapper for deserializing a catalog fixture
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

/// Immutable, ordered collection of recipes.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from `recipes`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns an error if an id is empty or appears twice.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for recipe in &recipes {
            if recipe.id.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "id".into(),
                    message: format!("recipe '{}' has an empty id", recipe.title),
                });
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(ValidationError::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(Self { recipes })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin::recipes(),
        }
    }

    /// Parse a catalog from TOML fixture text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid fixture or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ValidationError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.recipes)
    }

    /// Load a catalog fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            recipes = catalog.len(),
            "loaded catalog fixture"
        );
        Ok(catalog)
    }

    /// Catalog selected by configuration: the `catalog.path` fixture when
    /// set, otherwise the built-in table.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured fixture cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.catalog.path.as_deref() {
            Some(path) if !path.trim().is_empty() => Self::load(Path::new(path)),
            _ => Ok(Self::builtin()),
        }
    }

    /// Every recipe, in definition order.
    pub fn list_all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Case-insensitive substring search over titles and ingredients.
    ///
    /// A blank query returns the whole catalog. Results keep catalog order.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim();
        if query.is_empty() {
            return self.recipes.iter().collect();
        }
        let needle = fold_case(query);
        self.recipes.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// Look up a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
