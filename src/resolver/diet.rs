//! Diet classification for recipe badges
//!
//! Classification is driven by the recipe category. Indian recipes are the
//! only ones whose title is inspected, against a fixed list of meat and fish
//! dish names. Any category not listed here is treated as non-vegetarian.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Indian dish names that mark a recipe as non-vegetarian (case-sensitive substrings)
pub const NON_VEGETARIAN_INDIAN_DISHES: &[&str] = &[
    "Butter Chicken",
    "Biryani",
    "Tandoori Chicken",
    "Chicken Curry",
    "Chicken Tikka",
    "Fish Curry",
    "Mutton",
    "Rogan Josh",
    "Keema",
    "Prawn",
];

/// Categories whose recipes are vegetarian by default
pub const VEGETARIAN_CATEGORIES: &[&str] = &["Salads", "Italian", "Vegetarian"];

/// Categories whose recipes are desserts
pub const DESSERT_CATEGORIES: &[&str] = &["Desserts", "Baking"];

/// Diet label shown on recipe cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietClassification {
    Vegetarian,
    NonVegetarian,
    Dessert,
}

impl DietClassification {
    pub fn label(&self) -> &'static str {
        match self {
            DietClassification::Vegetarian => "Vegetarian",
            DietClassification::NonVegetarian => "Non-Vegetarian",
            DietClassification::Dessert => "Dessert",
        }
    }

    /// Icon identifier understood by the front end
    pub fn icon(&self) -> &'static str {
        match self {
            DietClassification::Vegetarian => "leaf",
            DietClassification::NonVegetarian => "drumstick-bite",
            DietClassification::Dessert => "ice-cream",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            DietClassification::Vegetarian => "badge-green",
            DietClassification::NonVegetarian => "badge-red",
            DietClassification::Dessert => "badge-pink",
        }
    }
}

impl fmt::Display for DietClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a category participates in classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietCategory {
    /// Decided per dish from the title
    Indian,
    Vegetarian,
    Dessert,
    /// Every other category, including unknown ones
    Other,
}

impl DietCategory {
    pub fn from_category(category: &str) -> Self {
        if category == "Indian" {
            DietCategory::Indian
        } else if VEGETARIAN_CATEGORIES.contains(&category) {
            DietCategory::Vegetarian
        } else if DESSERT_CATEGORIES.contains(&category) {
            DietCategory::Dessert
        } else {
            DietCategory::Other
        }
    }
}

/// Classify a recipe as vegetarian, non-vegetarian or dessert
pub fn classify_diet(title: &str, category: &str) -> DietClassification {
    match DietCategory::from_category(category) {
        DietCategory::Indian => {
            if NON_VEGETARIAN_INDIAN_DISHES
                .iter()
                .any(|dish| title.contains(dish))
            {
                DietClassification::NonVegetarian
            } else {
                DietClassification::Vegetarian
            }
        }
        DietCategory::Vegetarian => DietClassification::Vegetarian,
        DietCategory::Dessert => DietClassification::Dessert,
        // Unknown categories are labelled non-vegetarian; see DESIGN.md.
        DietCategory::Other => DietClassification::NonVegetarian,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Butter Chicken", "Indian", DietClassification::NonVegetarian)]
    #[case("Hyderabadi Biryani", "Indian", DietClassification::NonVegetarian)]
    #[case("Mutton Rogan Josh", "Indian", DietClassification::NonVegetarian)]
    #[case("Palak Paneer", "Indian", DietClassification::Vegetarian)]
    #[case("butter chicken", "Indian", DietClassification::Vegetarian)]
    #[case("Tiramisu", "Desserts", DietClassification::Dessert)]
    #[case("Banana Bread", "Baking", DietClassification::Dessert)]
    #[case("Greek Salad", "Salads", DietClassification::Vegetarian)]
    #[case("Spaghetti Carbonara", "Italian", DietClassification::Vegetarian)]
    #[case("Quinoa Bowl", "Vegetarian", DietClassification::Vegetarian)]
    #[case("Beef Stir Fry", "Asian", DietClassification::NonVegetarian)]
    #[case("Bean Burrito", "Mexican", DietClassification::NonVegetarian)]
    #[case("", "", DietClassification::NonVegetarian)]
    fn test_classification(
        #[case] title: &str,
        #[case] category: &str,
        #[case] expected: DietClassification,
    ) {
        assert_eq!(classify_diet(title, category), expected);
    }

    #[test]
    fn test_title_only_matters_for_indian() {
        assert_eq!(
            classify_diet("Butter Chicken", "Salads"),
            DietClassification::Vegetarian
        );
        assert_eq!(
            classify_diet("Butter Chicken", "Desserts"),
            DietClassification::Dessert
        );
    }

    #[test]
    fn test_badge_presentation() {
        let diet = DietClassification::NonVegetarian;
        assert_eq!(diet.label(), "Non-Vegetarian");
        assert_eq!(diet.to_string(), "Non-Vegetarian");
        assert_eq!(
            serde_json::to_string(&diet).unwrap(),
            "\"non-vegetarian\""
        );
    }

    proptest! {
        #[test]
        fn test_classification_is_deterministic(title in ".{0,32}", category in ".{0,16}") {
            let first = classify_diet(&title, &category);
            prop_assert_eq!(first, classify_diet(&title, &category));
            prop_assert!(!first.label().is_empty());
        }
    }
}
