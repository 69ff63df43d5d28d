//! Store categories and their keyword table
//!
//! The detector walks `CATEGORY_KEYWORDS` in declaration order and takes the
//! first keyword hit, so the order of both the categories and the keywords
//! inside each list is part of the behavior. Keep new keywords lowercase.

use serde::{Deserialize, Serialize};

/// Store aisle categories for shopping-list items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreCategory {
    #[serde(rename = "Produce")]
    Produce,
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    #[serde(rename = "Pantry & Dry Goods")]
    Pantry,
    #[serde(rename = "Canned & Jarred")]
    CannedJarred,
    #[serde(rename = "Frozen")]
    Frozen,
    #[serde(rename = "Bakery")]
    Bakery,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Other")]
    Other,
}

impl StoreCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreCategory::Produce => "Produce",
            StoreCategory::MeatSeafood => "Meat & Seafood",
            StoreCategory::DairyEggs => "Dairy & Eggs",
            StoreCategory::Pantry => "Pantry & Dry Goods",
            StoreCategory::CannedJarred => "Canned & Jarred",
            StoreCategory::Frozen => "Frozen",
            StoreCategory::Bakery => "Bakery",
            StoreCategory::Beverages => "Beverages",
            StoreCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "produce" => StoreCategory::Produce,
            "meat & seafood" => StoreCategory::MeatSeafood,
            "dairy & eggs" => StoreCategory::DairyEggs,
            "pantry & dry goods" => StoreCategory::Pantry,
            "canned & jarred" => StoreCategory::CannedJarred,
            "frozen" => StoreCategory::Frozen,
            "bakery" => StoreCategory::Bakery,
            "beverages" => StoreCategory::Beverages,
            _ => StoreCategory::Other,
        }
    }
}

impl std::fmt::Display for StoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword lists per category, in scan order. `Other` has no list; it is the
/// fallthrough result, never matched.
pub const CATEGORY_KEYWORDS: &[(StoreCategory, &[&str])] = &[
    (
        StoreCategory::Produce,
        &[
            "apple", "banana", "orange", "grape", "berry", "strawberry", "blueberry", "lemon",
            "lime", "melon", "peach", "pear", "mango", "avocado", "lettuce", "spinach", "kale",
            "carrot", "celery", "onion", "garlic", "potato", "tomato", "pepper", "broccoli",
            "cauliflower", "cucumber", "zucchini", "mushroom", "eggplant", "cilantro", "basil",
            "parsley", "ginger", "cabbage", "salad",
        ],
    ),
    (
        StoreCategory::MeatSeafood,
        &[
            "beef", "chicken", "pork", "turkey", "bacon", "sausage", "ham", "steak", "lamb",
            "shrimp", "salmon", "tuna", "fish", "crab", "cod", "tilapia", "meatball",
        ],
    ),
    (
        StoreCategory::DairyEggs,
        &[
            "milk", "cheese", "yogurt", "butter", "cream", "egg", "cheddar", "mozzarella",
            "parmesan",
        ],
    ),
    (
        StoreCategory::Pantry,
        &[
            "flour", "sugar", "rice", "pasta", "noodle", "cereal", "oats", "oatmeal", "bean",
            "lentil", "spice", "salt", "oil", "vinegar", "honey", "nut", "chocolate", "cracker",
            "chips", "baking",
        ],
    ),
    (
        StoreCategory::CannedJarred,
        &[
            "canned", "jarred", "jar", "soup", "broth", "stock", "olives", "pickle", "salsa",
            "jam", "jelly",
        ],
    ),
    (
        StoreCategory::Frozen,
        &["frozen", "ice cream", "popsicle", "pizza", "waffle", "fries"],
    ),
    (
        StoreCategory::Bakery,
        &[
            "bread", "bagel", "muffin", "croissant", "cake", "cookie", "donut", "roll", "bun",
            "tortilla", "pastry", "pie",
        ],
    ),
    (
        StoreCategory::Beverages,
        &["water", "soda", "coffee", "tea", "beer", "wine", "cola", "lemonade"],
    ),
];

/// Keyword list for one category, empty for `Other`
pub(crate) fn keywords_for(category: StoreCategory) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

/// Total keyword count across all categories
pub(crate) fn keyword_count() -> usize {
    CATEGORY_KEYWORDS.iter().map(|(_, keywords)| keywords.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for (category, _) in CATEGORY_KEYWORDS {
            assert_eq!(StoreCategory::from_str(category.as_str()), *category);
        }
        assert_eq!(StoreCategory::from_str("Other"), StoreCategory::Other);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(StoreCategory::from_str("BAKERY"), StoreCategory::Bakery);
        assert_eq!(StoreCategory::from_str("dairy & eggs"), StoreCategory::DairyEggs);
    }

    #[test]
    fn test_unknown_string_maps_to_other() {
        assert_eq!(StoreCategory::from_str("cleaning supplies"), StoreCategory::Other);
        assert_eq!(StoreCategory::from_str(""), StoreCategory::Other);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&StoreCategory::MeatSeafood).unwrap();
        assert_eq!(json, "\"Meat & Seafood\"");
        let back: StoreCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StoreCategory::MeatSeafood);
    }

    #[test]
    fn test_table_covers_eight_categories() {
        assert_eq!(CATEGORY_KEYWORDS.len(), 8);
        assert!(CATEGORY_KEYWORDS.iter().all(|(c, _)| *c != StoreCategory::Other));
        assert!(keywords_for(StoreCategory::Other).is_empty());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for (_, keywords) in CATEGORY_KEYWORDS {
            for keyword in *keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
