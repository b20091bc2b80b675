//! # RecipeBox Core Library
//!
//! This library provides the data layer for the RecipeBox recipe browser.
//! Front ends (the `recipebox-cli` binary, or a GUI) are thin layers over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Catalog**: an immutable list of recipes, built from an embedded table
//!   or a TOML fixture, with case-insensitive substring search
//! - **Favorites**: a toggle-only set of recipe ids, persisted after every
//!   change and observed through synchronous subscriptions
//! - **Storage**: TOML-backed key-value settings and application configuration
//!
//! ## Key Components
//!
//! - [`RecipeCatalog`]: Listing, lookup and search
//! - [`FavoritesRegistry`]: Favorite membership, toggling and notification
//! - [`SettingsStore`]: Trait for list-valued settings persistence
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod error;
pub mod events;
pub mod favorites;
pub mod recipe;
pub mod storage;

pub use catalog::RecipeCatalog;
pub use error::{ConfigError, CoreError, PersistenceError, ValidationError};
pub use events::Event;
pub use favorites::{FavoritesRegistry, SubscriptionId, FAVORITES_KEY};
pub use recipe::Recipe;
pub use storage::{Config, FileSettingsStore, MemorySettingsStore, SettingsScope, SettingsStore};
