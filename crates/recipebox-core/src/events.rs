use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State changes the front end may want to re-render on.
/// Delivered synchronously to registry subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A recipe id was toggled. `favorited` is its membership afterwards.
    FavoritesChanged {
        recipe_id: String,
        favorited: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn recipe_id(&self) -> &str {
        match self {
            Event::FavoritesChanged { recipe_id, .. } => recipe_id,
        }
    }
}
