//! Static image lookup tables
//!
//! Both tables are ordered slices rather than maps. The dish table is
//! scanned front to back during fuzzy matching and the first hit wins, so
//! reordering entries changes which image a partial title resolves to.

/// Key of the unconditional fallback entry in [`CATEGORY_IMAGES`]
pub const DEFAULT_CATEGORY_KEY: &str = "default";

/// Curated images keyed by exact dish title, in match priority order
pub static DISH_IMAGES: &[(&str, &str)] = &[
    // Indian
    (
        "Butter Chicken",
        "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=800",
    ),
    (
        "Chicken Biryani",
        "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?w=800",
    ),
    (
        "Biryani",
        "https://images.unsplash.com/photo-1589302168068-964664d93dc0?w=800",
    ),
    (
        "Tandoori Chicken",
        "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=800",
    ),
    (
        "Chicken Tikka Masala",
        "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=800",
    ),
    (
        "Palak Paneer",
        "https://images.unsplash.com/photo-1601050690597-df0568f70950?w=800",
    ),
    (
        "Paneer Tikka",
        "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=800",
    ),
    (
        "Dal Makhani",
        "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=800",
    ),
    (
        "Masala Dosa",
        "https://images.unsplash.com/photo-1630383249896-424e482df921?w=800",
    ),
    (
        "Chole Bhature",
        "https://images.unsplash.com/photo-1626132647523-66f5bf380027?w=800",
    ),
    (
        "Fish Curry",
        "https://images.unsplash.com/photo-1626508035297-0cd27c397d67?w=800",
    ),
    // Italian
    (
        "Margherita Pizza",
        "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=800",
    ),
    (
        "Spaghetti Carbonara",
        "https://images.unsplash.com/photo-1612874742237-6526221588e3?w=800",
    ),
    (
        "Mushroom Risotto",
        "https://images.unsplash.com/photo-1476124369491-e7addf5db371?w=800",
    ),
    (
        "Lasagna",
        "https://images.unsplash.com/photo-1574894709920-11b28e7367e3?w=800",
    ),
    // Salads
    (
        "Greek Salad",
        "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=800",
    ),
    (
        "Caesar Salad",
        "https://images.unsplash.com/photo-1550304943-4f24f54ddde9?w=800",
    ),
    (
        "Quinoa Bowl",
        "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800",
    ),
    // Asian
    (
        "Beef Stir Fry",
        "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=800",
    ),
    (
        "Pad Thai",
        "https://images.unsplash.com/photo-1559314809-0d155014e29e?w=800",
    ),
    (
        "Sushi Platter",
        "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?w=800",
    ),
    (
        "Ramen",
        "https://images.unsplash.com/photo-1569718212165-3a8278d5f624?w=800",
    ),
    // American / Mexican
    (
        "Classic Cheeseburger",
        "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=800",
    ),
    (
        "BBQ Ribs",
        "https://images.unsplash.com/photo-1544025162-d76694265947?w=800",
    ),
    (
        "Chicken Tacos",
        "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=800",
    ),
    (
        "Guacamole",
        "https://images.unsplash.com/photo-1600335895229-6e75511892c8?w=800",
    ),
    // Desserts / Baking
    (
        "Tiramisu",
        "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=800",
    ),
    (
        "Chocolate Lava Cake",
        "https://images.unsplash.com/photo-1624353365286-3f8d62daad51?w=800",
    ),
    (
        "New York Cheesecake",
        "https://images.unsplash.com/photo-1533134242443-d4fd215305ad?w=800",
    ),
    (
        "Banana Bread",
        "https://images.unsplash.com/photo-1606101273945-e9eba91c0dc4?w=800",
    ),
    (
        "Sourdough Bread",
        "https://images.unsplash.com/photo-1585478259715-876acc5be8eb?w=800",
    ),
];

/// Fallback images keyed by exact category name; must contain [`DEFAULT_CATEGORY_KEY`]
pub static CATEGORY_IMAGES: &[(&str, &str)] = &[
    (
        "Indian",
        "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=800",
    ),
    (
        "Italian",
        "https://images.unsplash.com/photo-1498579150354-977475b7ea0b?w=800",
    ),
    (
        "Mexican",
        "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=800",
    ),
    (
        "Asian",
        "https://images.unsplash.com/photo-1512058564366-18510be2db19?w=800",
    ),
    (
        "Chinese",
        "https://images.unsplash.com/photo-1525755662778-989d0524087e?w=800",
    ),
    (
        "Japanese",
        "https://images.unsplash.com/photo-1580822184713-fc5400e7fe10?w=800",
    ),
    (
        "Thai",
        "https://images.unsplash.com/photo-1562565652-a0d8f0c59eb4?w=800",
    ),
    (
        "American",
        "https://images.unsplash.com/photo-1550547660-d9450f859349?w=800",
    ),
    (
        "Mediterranean",
        "https://images.unsplash.com/photo-1544124499-58912cbddaad?w=800",
    ),
    (
        "Salads",
        "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=800",
    ),
    (
        "Vegetarian",
        "https://images.unsplash.com/photo-1540914124281-342587941389?w=800",
    ),
    (
        "Desserts",
        "https://images.unsplash.com/photo-1551024601-bec78aea704b?w=800",
    ),
    (
        "Baking",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=800",
    ),
    (
        DEFAULT_CATEGORY_KEY,
        "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800",
    ),
];

/// Look up an exact dish title
pub fn dish_image(title: &str) -> Option<&'static str> {
    lookup(DISH_IMAGES, title)
}

/// Look up an exact category name
pub fn category_image(category: &str) -> Option<&'static str> {
    lookup(CATEGORY_IMAGES, category)
}

/// Image for the `default` category entry
pub fn default_image() -> &'static str {
    // The table is a compile-time constant that always carries the default row.
    lookup(CATEGORY_IMAGES, DEFAULT_CATEGORY_KEY).unwrap_or_default()
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, image)| *image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dish_keys_are_unique() {
        let keys: HashSet<_> = DISH_IMAGES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), DISH_IMAGES.len());
    }

    #[test]
    fn test_category_keys_are_unique() {
        let keys: HashSet<_> = CATEGORY_IMAGES.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), CATEGORY_IMAGES.len());
    }

    #[test]
    fn test_default_entry_present() {
        assert!(category_image(DEFAULT_CATEGORY_KEY).is_some());
        assert!(default_image().starts_with("https://"));
    }

    #[test]
    fn test_every_image_is_http() {
        for (_, image) in DISH_IMAGES.iter().chain(CATEGORY_IMAGES) {
            assert!(image.starts_with("http"), "bad image url: {image}");
        }
    }

    #[test]
    fn test_chicken_biryani_precedes_biryani() {
        let position = |key: &str| DISH_IMAGES.iter().position(|(k, _)| *k == key);
        assert!(position("Chicken Biryani") < position("Biryani"));
    }
}
