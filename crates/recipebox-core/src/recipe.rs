use serde::{Deserialize, Serialize};

/// A single recipe record. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cook_minutes: u32,
    #[serde(default)]
    pub calories: u32,
    /// Placeholder path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Recipe {
    /// One-line subtitle shown under the title in list views,
    /// e.g. `Seafood • 25 min • 420 cal`.
    pub fn summary(&self) -> String {
        format!(
            "{} • {} min • {} cal",
            self.category, self.cook_minutes, self.calories
        )
    }

    /// True if the folded title or any folded ingredient contains `needle`.
    /// `needle` must already be trimmed and passed through [`fold_case`].
    pub(crate) fn matches(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ing| fold_case(ing).contains(needle))
    }
}

/// Case-insensitive comparison key.
///
/// Upper-casing first expands ligatures and sharp s ("ﬁ" -> "FI",
/// "ß" -> "SS"), so a string and its upper-case form fold identically.
pub(crate) fn fold_case(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}
