//! Built-in recipe table.
//!
//! Kept apart from the query logic so the shipped catalog can be edited (or
//! replaced by a TOML file via `catalog.path`) without touching it.

use crate::recipe::Recipe;

struct Seed {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    cook_minutes: u32,
    calories: u32,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "r1",
        title: "Grilled Salmon with Lemon",
        category: "Seafood",
        description: "A simple, healthy grilled salmon with lemon and herbs.",
        ingredients: &[
            "Salmon fillet",
            "Lemon",
            "Olive oil",
            "Garlic",
            "Parsley",
            "Salt",
            "Pepper",
        ],
        cook_minutes: 25,
        calories: 420,
    },
    Seed {
        id: "r2",
        title: "Chicken Alfredo Pasta",
        category: "Pasta",
        description: "Creamy Alfredo pasta with grilled chicken and parmesan.",
        ingredients: &[
            "Pasta",
            "Chicken breast",
            "Cream",
            "Parmesan",
            "Garlic",
            "Butter",
            "Salt",
        ],
        cook_minutes: 30,
        calories: 680,
    },
    Seed {
        id: "r3",
        title: "Avocado Toast",
        category: "Breakfast",
        description: "Crispy toast topped with smashed avocado and chili flakes.",
        ingredients: &["Bread", "Avocado", "Lemon", "Chili flakes", "Olive oil", "Salt"],
        cook_minutes: 10,
        calories: 260,
    },
    Seed {
        id: "r4",
        title: "Quinoa Salad",
        category: "Salad",
        description: "Fresh quinoa salad with cucumber, tomato, and feta.",
        ingredients: &[
            "Quinoa",
            "Cucumber",
            "Tomato",
            "Feta",
            "Olive oil",
            "Lemon",
            "Mint",
        ],
        cook_minutes: 20,
        calories: 320,
    },
    Seed {
        id: "r5",
        title: "Beef Stir Fry",
        category: "Asian",
        description: "Savory beef stir fry with bell peppers and soy glaze.",
        ingredients: &["Beef", "Bell peppers", "Onion", "Soy sauce", "Ginger", "Garlic"],
        cook_minutes: 22,
        calories: 540,
    },
];

pub(super) fn recipes() -> Vec<Recipe> {
    SEEDS
        .iter()
        .map(|s| Recipe {
            id: s.id.to_string(),
            title: s.title.to_string(),
            category: s.category.to_string(),
            description: s.description.to_string(),
            ingredients: s.ingredients.iter().map(|i| i.to_string()).collect(),
            cook_minutes: s.cook_minutes,
            calories: s.calories,
            image: None,
        })
        .collect()
}
