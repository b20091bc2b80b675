//! Favorites registry.
//!
//! Tracks the set of favorited recipe ids, persists it through a
//! [`SettingsStore`] after every toggle, and notifies subscribers.
//!
//! ## Semantics
//!
//! - Toggle is a strict flip: an id is a favorite iff it has been toggled an
//!   odd number of times. There is no add/remove.
//! - Every toggle writes the complete set and then notifies, even for ids
//!   the catalog does not know.
//! - Persistence failures are logged and ignored. The in-memory set stays
//!   authoritative for the rest of the session.
//! - Ids with no catalog entry are skipped by [`FavoritesRegistry::favorites_of`]
//!   but are never pruned from storage.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::catalog::RecipeCatalog;
use crate::events::Event;
use crate::recipe::Recipe;
use crate::storage::SettingsStore;

/// Settings key holding the favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Handle returned by [`FavoritesRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Event)>;

pub struct FavoritesRegistry<S: SettingsStore> {
    store: S,
    favorites: BTreeSet<String>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
}

impl<S: SettingsStore> FavoritesRegistry<S> {
    /// Build a registry from the persisted favorites in `store`.
    ///
    /// An absent entry gives an empty set. An unreadable entry is logged and
    /// also gives an empty set.
    pub fn load(store: S) -> Self {
        let favorites: BTreeSet<String> = match store.read_list(FAVORITES_KEY) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load favorites, starting empty");
                BTreeSet::new()
            }
        };
        tracing::debug!(count = favorites.len(), "favorites loaded");
        Self {
            store,
            favorites,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Flip `id`'s membership, persist the whole set, then notify
    /// subscribers. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let favorited = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        };

        self.persist();

        let event = Event::FavoritesChanged {
            recipe_id: id.to_string(),
            favorited,
            at: Utc::now(),
        };
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event);
        }
        favorited
    }

    /// Favorited recipes in catalog order. Stale ids are skipped.
    pub fn favorites_of<'a>(&self, catalog: &'a RecipeCatalog) -> Vec<&'a Recipe> {
        catalog
            .list_all()
            .iter()
            .filter(|r| self.favorites.contains(&r.id))
            .collect()
    }

    /// Favorited ids with no entry in `catalog`, sorted.
    pub fn stale_ids<'a>(&'a self, catalog: &RecipeCatalog) -> Vec<&'a str> {
        self.ids().filter(|id| !catalog.contains(id)).collect()
    }

    /// Register a callback run after every toggle.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Event) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Favorited ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        let ids: Vec<String> = self.favorites.iter().cloned().collect();
        if let Err(e) = self.store.write_list(FAVORITES_KEY, &ids) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}

impl<S: SettingsStore> std::fmt::Debug for FavoritesRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesRegistry")
            .field("favorites", &self.favorites)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
