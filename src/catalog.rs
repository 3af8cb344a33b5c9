//! Common plant names for autocomplete, and stock images by plant kind.

const PLANT_NAMES: &[&str] = &[
    // Vegetables
    "Tomato", "Cherry Tomato", "Beefsteak Tomato", "Roma Tomato",
    "Bell Pepper", "Jalapeño Pepper", "Habanero Pepper", "Sweet Pepper",
    "Lettuce", "Romaine Lettuce", "Iceberg Lettuce", "Butter Lettuce",
    "Spinach", "Kale", "Arugula", "Swiss Chard",
    "Carrot", "Radish", "Beet", "Turnip",
    "Cucumber", "Zucchini", "Yellow Squash", "Butternut Squash",
    "Broccoli", "Cauliflower", "Brussels Sprouts", "Cabbage",
    "Onion", "Garlic", "Shallot", "Leek",
    "Potato", "Sweet Potato", "Eggplant",
    // Herbs
    "Basil", "Sweet Basil", "Thai Basil", "Purple Basil",
    "Oregano", "Thyme", "Rosemary", "Sage",
    "Parsley", "Cilantro", "Chives", "Dill",
    "Mint", "Spearmint", "Peppermint", "Chocolate Mint",
    "Lavender", "Chamomile", "Lemon Balm",
    // Flowers
    "Rose", "Hybrid Tea Rose", "Climbing Rose", "Shrub Rose",
    "Sunflower", "Marigold", "Petunia", "Impatiens",
    "Geranium", "Begonia", "Pansy", "Viola",
    "Zinnia", "Cosmos", "Nasturtium", "Sweet Pea",
    "Dahlia", "Tulip", "Daffodil", "Hyacinth",
    "Lily", "Iris", "Peony", "Hydrangea",
    // Houseplants
    "Pothos", "Golden Pothos", "Marble Queen Pothos",
    "Snake Plant", "Rubber Plant", "Fiddle Leaf Fig",
    "Monstera", "Monstera Deliciosa", "Peace Lily",
    "Spider Plant", "ZZ Plant", "Philodendron",
    "Aloe Vera", "Jade Plant", "String of Pearls",
    "Boston Fern", "Maidenhair Fern", "Bird of Paradise",
    // Succulents
    "Echeveria", "Sedum", "Haworthia", "Crassula",
    "Aeonium", "Kalanchoe", "Lithops", "Barrel Cactus",
    "Prickly Pear Cactus", "Christmas Cactus", "Easter Cactus",
    // Fruits
    "Strawberry", "Blueberry", "Raspberry", "Blackberry",
    "Apple Tree", "Pear Tree", "Cherry Tree", "Peach Tree",
    "Lemon Tree", "Orange Tree", "Lime Tree", "Grapefruit Tree",
];

pub const MAX_SUGGESTIONS: usize = 8;

const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=400&h=300&fit=crop";

const IMAGES: &[(&str, &str)] = &[
    ("tomato", "https://images.unsplash.com/photo-1592841200221-a6898f307baa?w=400&h=300&fit=crop"),
    ("rose", "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=400&h=300&fit=crop"),
    ("basil", "https://images.unsplash.com/photo-1618375569909-3c8616cf7733?w=400&h=300&fit=crop"),
    ("lettuce", "https://images.unsplash.com/photo-1622206151226-18ca2c9ab4a1?w=400&h=300&fit=crop"),
    ("pepper", "https://images.unsplash.com/photo-1583663848850-46af132dc08e?w=400&h=300&fit=crop"),
    ("herb", "https://images.unsplash.com/photo-1466692476868-aef1dfb1e735?w=400&h=300&fit=crop"),
    ("flower", "https://images.unsplash.com/photo-1490750967868-88aa4486c946?w=400&h=300&fit=crop"),
    ("vegetable", "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=400&h=300&fit=crop"),
    ("succulent", "https://images.unsplash.com/photo-1459411621453-7b03977f4bfc?w=400&h=300&fit=crop"),
    ("houseplant", DEFAULT_IMAGE),
];

/// Catalog names containing `query`; nothing for queries under two characters.
pub fn suggestions(query: &str) -> Vec<&'static str> {
    if query.chars().count() < 2 {
        return Vec::new();
    }
    let query = query.to_lowercase();
    PLANT_NAMES
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&query))
        .take(MAX_SUGGESTIONS)
        .collect()
}

pub fn reference_image(plant_type: &str) -> &'static str {
    let plant_type = plant_type.to_lowercase();
    IMAGES
        .iter()
        .find(|(keyword, _)| plant_type.contains(*keyword))
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_has_no_suggestions() {
        assert!(suggestions("").is_empty());
        assert!(suggestions("t").is_empty());
    }

    #[test]
    fn test_suggestions_are_capped() {
        let results = suggestions("er");
        assert_eq!(results.len(), MAX_SUGGESTIONS);
        assert_eq!(results[0], "Cherry Tomato");
        assert_eq!(suggestions("to").len(), 7);
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        assert_eq!(suggestions("MONSTERA"), vec!["Monstera", "Monstera Deliciosa"]);
    }

    #[test]
    fn test_reference_image() {
        assert!(reference_image("Cherry Tomato").contains("1592841200221"));
        assert_eq!(reference_image("Mystery Shrub"), DEFAULT_IMAGE);
    }
}
