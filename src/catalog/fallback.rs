//! Built-in recipes served when no hosted backend data is available

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::Recipe;

struct FallbackRecipe {
    id: u128,
    title: &'static str,
    category: &'static str,
    description: &'static str,
    image_url: Option<&'static str>,
    video_url: Option<&'static str>,
    prep_minutes: u32,
    servings: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
}

static FALLBACK_RECIPES: &[FallbackRecipe] = &[
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0001,
        title: "Butter Chicken",
        category: "Indian",
        description: "Tender chicken simmered in a creamy tomato and butter sauce.",
        image_url: None,
        video_url: Some("https://www.youtube.com/watch?v=a03U45jFxOI"),
        prep_minutes: 50,
        servings: 4,
        ingredients: &[
            "500g chicken thighs",
            "1 cup yogurt",
            "2 tbsp butter",
            "1 cup tomato puree",
            "1/2 cup cream",
            "2 tsp garam masala",
        ],
        instructions: &[
            "Marinate the chicken in yogurt and spices for an hour.",
            "Sear the chicken, then set aside.",
            "Cook tomato puree with butter and spices.",
            "Add cream and chicken and simmer for 15 minutes.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0002,
        title: "Palak Paneer",
        category: "Indian",
        description: "Cottage cheese cubes in a smooth spiced spinach gravy.",
        image_url: None,
        video_url: None,
        prep_minutes: 35,
        servings: 3,
        ingredients: &["250g paneer", "400g spinach", "1 onion", "2 garlic cloves", "1 tsp cumin"],
        instructions: &[
            "Blanch and puree the spinach.",
            "Fry onion, garlic and cumin.",
            "Stir in the spinach puree and paneer and cook for 5 minutes.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0003,
        title: "Hyderabadi Chicken Biryani",
        category: "Indian",
        description: "Layered basmati rice and spiced chicken cooked on dum.",
        image_url: None,
        video_url: Some("https://www.youtube.com/watch?v=95BCU1n268w"),
        prep_minutes: 90,
        servings: 6,
        ingredients: &["750g chicken", "3 cups basmati rice", "2 onions", "1 cup yogurt", "Saffron"],
        instructions: &[
            "Marinate the chicken overnight.",
            "Parboil the rice.",
            "Layer chicken and rice, seal the pot and cook on low heat for 40 minutes.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0004,
        title: "Spaghetti Carbonara",
        category: "Italian",
        description: "Roman pasta with eggs, pecorino and black pepper.",
        image_url: None,
        video_url: Some("https://www.youtube.com/watch?v=3AAdKl1UYZs"),
        prep_minutes: 20,
        servings: 2,
        ingredients: &["200g spaghetti", "2 eggs", "50g pecorino", "Black pepper"],
        instructions: &[
            "Boil the pasta.",
            "Whisk eggs with cheese and pepper.",
            "Toss hot pasta with the egg mixture off the heat.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0005,
        title: "Greek Salad",
        category: "Salads",
        description: "Tomatoes, cucumber, olives and feta with oregano.",
        image_url: None,
        video_url: None,
        prep_minutes: 10,
        servings: 2,
        ingredients: &["2 tomatoes", "1 cucumber", "Kalamata olives", "100g feta", "Olive oil"],
        instructions: &["Chop the vegetables.", "Top with feta and olives and dress with oil."],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0006,
        title: "Beef Stir Fry",
        category: "Asian",
        description: "Quick wok-fried beef with crisp vegetables.",
        image_url: Some("https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=1200"),
        video_url: None,
        prep_minutes: 25,
        servings: 2,
        ingredients: &["300g flank steak", "1 bell pepper", "Broccoli", "Soy sauce", "Ginger"],
        instructions: &[
            "Slice the beef thinly.",
            "Stir fry the beef over high heat and remove.",
            "Fry vegetables, return the beef and add the sauce.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0007,
        title: "Chicken Tacos",
        category: "Mexican",
        description: "Charred tortillas filled with spiced chicken and salsa.",
        image_url: None,
        video_url: None,
        prep_minutes: 30,
        servings: 4,
        ingredients: &["8 tortillas", "400g chicken", "Lime", "Salsa", "Coriander"],
        instructions: &["Season and grill the chicken.", "Warm tortillas and assemble."],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0008,
        title: "Tiramisu",
        category: "Desserts",
        description: "Coffee-soaked ladyfingers layered with mascarpone cream.",
        image_url: None,
        video_url: Some("https://www.youtube.com/watch?v=7VTtenyKRg4"),
        prep_minutes: 30,
        servings: 8,
        ingredients: &["250g mascarpone", "3 eggs", "Ladyfingers", "Espresso", "Cocoa powder"],
        instructions: &[
            "Whisk yolks and sugar, fold in mascarpone and whipped whites.",
            "Dip ladyfingers in espresso and layer with the cream.",
            "Chill for at least 4 hours and dust with cocoa.",
        ],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_0009,
        title: "Banana Bread",
        category: "Baking",
        description: "Moist loaf made with overripe bananas.",
        image_url: None,
        video_url: None,
        prep_minutes: 70,
        servings: 8,
        ingredients: &["3 ripe bananas", "250g flour", "100g butter", "150g sugar", "1 egg"],
        instructions: &["Mash bananas and mix with the wet ingredients.", "Fold in flour and bake at 175C for an hour."],
    },
    FallbackRecipe {
        id: 0x0195_0000_0000_7000_8000_0000_0000_000a,
        title: "Classic Cheeseburger",
        category: "American",
        description: "Griddled beef patty with cheddar on a toasted bun.",
        image_url: None,
        video_url: None,
        prep_minutes: 20,
        servings: 2,
        ingredients: &["300g ground beef", "2 buns", "Cheddar slices", "Lettuce", "Pickles"],
        instructions: &["Form and season the patties.", "Griddle, add cheese and assemble."],
    },
];

/// Fixed creation time so fallback data is stable across restarts
fn fallback_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Materialize the fallback recipes
pub fn fallback_recipes() -> Vec<Recipe> {
    let created_at = fallback_created_at();
    FALLBACK_RECIPES
        .iter()
        .map(|r| Recipe {
            id: Uuid::from_u128(r.id),
            title: r.title.to_string(),
            category: r.category.to_string(),
            description: r.description.to_string(),
            image_url: r.image_url.map(str::to_string),
            video_url: r.video_url.map(str::to_string),
            prep_minutes: r.prep_minutes,
            servings: r.servings,
            ingredients: r.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: r.instructions.iter().map(|s| s.to_string()).collect(),
            author: None,
            created_at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_ids_are_unique_and_stable() {
        let first = fallback_recipes();
        let ids: HashSet<_> = first.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), first.len());
        assert_eq!(first, fallback_recipes());
    }

    #[test]
    fn test_fallback_recipes_are_complete() {
        for recipe in fallback_recipes() {
            assert!(!recipe.ingredients.is_empty(), "{}", recipe.title);
            assert!(!recipe.instructions.is_empty(), "{}", recipe.title);
        }
    }
}
