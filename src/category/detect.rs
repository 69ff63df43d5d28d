//! Keyword-based category detection
//!
//! Deliberately naive first-match-wins scanning. The scan order in
//! [`CATEGORY_KEYWORDS`] resolves every ambiguity ("ice cream" lands in
//! Dairy & Eggs via "cream" because dairy is scanned before frozen), which
//! keeps the behavior predictable and cheap instead of clever.

use serde::Serialize;

use super::keywords::{keywords_for, StoreCategory, CATEGORY_KEYWORDS};

/// A ranked category suggestion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGuess {
    pub category: StoreCategory,
    pub confidence: f64,
}

/// Per-item result of a batch categorization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchCategoryGuess {
    pub item: String,
    pub category: StoreCategory,
    pub confidence: f64,
}

// Substring checks applied only when no keyword list matched, in order
const FALLBACK_HINTS: &[(&[&str], StoreCategory)] = &[
    (&["fresh", "organic"], StoreCategory::Produce),
    (&["frozen"], StoreCategory::Frozen),
    (&["canned", "jarred"], StoreCategory::CannedJarred),
    (&["bread", "bakery"], StoreCategory::Bakery),
    (&["drink", "beverage"], StoreCategory::Beverages),
];

/// Map an item name to a store category.
///
/// Scans the keyword table in declaration order and returns the first
/// category with any keyword substring hit. Names that miss every list get
/// the fallback hints, then `Other`.
pub fn detect_category(item_name: &str) -> StoreCategory {
    let name = item_name.trim().to_lowercase();
    if name.is_empty() {
        return StoreCategory::Other;
    }

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }

    for (hints, category) in FALLBACK_HINTS {
        if hints.iter().any(|hint| name.contains(hint)) {
            return *category;
        }
    }

    StoreCategory::Other
}

/// Confidence that `item_name` belongs to `category`, in `[0.1, 1.0]`.
///
/// `1.0` only for a name exactly equal to the category name, `0.1` for blank
/// names, `Other`, or no keyword hits. Otherwise the matched fraction of the
/// category's keyword list plus a flat 0.3, capped at 0.9.
pub fn category_confidence(item_name: &str, category: StoreCategory) -> f64 {
    let name = item_name.trim().to_lowercase();
    if name.is_empty() || category == StoreCategory::Other {
        return 0.1;
    }
    if name == category.as_str().to_lowercase() {
        return 1.0;
    }

    let keywords = keywords_for(category);
    let matches = keywords.iter().filter(|keyword| name.contains(*keyword)).count();
    if matches == 0 {
        return 0.1;
    }
    let base = matches as f64 / keywords.len() as f64;
    (base + 0.3).min(0.9)
}

/// Ranked category suggestions for an item name, at most 3.
///
/// Scores every real category independently of the first-match detection,
/// drops the floor-confidence entries, and pads with `Other` when nothing
/// scored convincingly.
pub fn suggest_categories(item_name: &str) -> Vec<CategoryGuess> {
    let mut guesses: Vec<CategoryGuess> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, _)| CategoryGuess {
            category: *category,
            confidence: category_confidence(item_name, *category),
        })
        .filter(|guess| guess.confidence > 0.1)
        .collect();

    guesses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    if guesses.is_empty() || guesses[0].confidence < 0.5 {
        guesses.push(CategoryGuess { category: StoreCategory::Other, confidence: 0.1 });
    }
    guesses.truncate(3);
    guesses
}

/// Detect and score each item independently
pub fn batch_detect_categories(items: &[String]) -> Vec<BatchCategoryGuess> {
    items
        .iter()
        .map(|item| {
            let category = detect_category(item);
            BatchCategoryGuess {
                item: item.clone(),
                category,
                confidence: category_confidence(item, category),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_dairy_from_keyword() {
        assert_eq!(detect_category("Organic Whole Milk"), StoreCategory::DairyEggs);
        assert_eq!(detect_category("  shredded CHEESE  "), StoreCategory::DairyEggs);
    }

    #[test]
    fn test_detects_meat() {
        assert_eq!(detect_category("2 lb ground beef"), StoreCategory::MeatSeafood);
    }

    #[test]
    fn test_frozen_keyword_beats_fallback_order() {
        assert_eq!(detect_category("frozen surprise item"), StoreCategory::Frozen);
    }

    #[test]
    fn test_fallback_hints_apply_when_no_keyword_matches() {
        // No keyword list contains "organic"; only the fallback does
        assert_eq!(detect_category("xyz organic"), StoreCategory::Produce);
        assert_eq!(detect_category("fresh mystery"), StoreCategory::Produce);
        assert_eq!(detect_category("energy drink"), StoreCategory::Beverages);
        assert_eq!(detect_category("bakery box"), StoreCategory::Bakery);
    }

    #[test]
    fn test_blank_and_unknown_names() {
        assert_eq!(detect_category(""), StoreCategory::Other);
        assert_eq!(detect_category("   "), StoreCategory::Other);
        assert_eq!(detect_category("totally unknown widget"), StoreCategory::Other);
    }

    #[test]
    fn test_first_match_wins_over_later_categories() {
        // "cream" hits Dairy & Eggs before the Frozen list is ever scanned
        assert_eq!(detect_category("ice cream"), StoreCategory::DairyEggs);
        // "chicken" outranks "noodle" (Pantry) and "soup" (Canned & Jarred)
        assert_eq!(detect_category("chicken noodle soup"), StoreCategory::MeatSeafood);
    }

    #[test]
    fn test_confidence_for_detected_category() {
        let confidence = category_confidence("Organic Whole Milk", StoreCategory::DairyEggs);
        // one keyword of nine matched
        let expected = 1.0 / 9.0 + 0.3;
        assert!((confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_floor_and_exact_name() {
        assert_eq!(category_confidence("", StoreCategory::Produce), 0.1);
        assert_eq!(category_confidence("anything", StoreCategory::Other), 0.1);
        assert_eq!(category_confidence("spaceship", StoreCategory::Produce), 0.1);
        assert_eq!(category_confidence("Produce", StoreCategory::Produce), 1.0);
        assert_eq!(category_confidence("dairy & eggs", StoreCategory::DairyEggs), 1.0);
    }

    #[test]
    fn test_confidence_stays_in_bounds() {
        let names = ["milk", "frozen pizza and bread and soup", "xyz", "", "Produce"];
        for name in names {
            for (category, _) in CATEGORY_KEYWORDS {
                let confidence = category_confidence(name, *category);
                assert!((0.1..=1.0).contains(&confidence), "{name} / {category:?}: {confidence}");
            }
        }
    }

    #[test]
    fn test_suggestions_append_other_below_threshold() {
        let suggestions = suggest_categories("organic whole milk");
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].category, StoreCategory::DairyEggs);
        assert_eq!(suggestions[1].category, StoreCategory::Other);
        assert_eq!(suggestions[1].confidence, 0.1);
    }

    #[test]
    fn test_suggestions_for_blank_name() {
        let suggestions = suggest_categories("");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].category, StoreCategory::Other);
    }

    #[test]
    fn test_suggestions_capped_at_three() {
        // chicken -> Meat & Seafood, broth -> Canned & Jarred, rice -> Pantry;
        // the Other pad is pushed and then truncated away
        let suggestions = suggest_categories("chicken broth and rice");
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].category, StoreCategory::CannedJarred);
        assert!(suggestions.iter().all(|s| s.category != StoreCategory::Other));
        let confidences: Vec<f64> = suggestions.iter().map(|s| s.confidence).collect();
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_exact_category_name_suppresses_other() {
        let suggestions = suggest_categories("produce");
        assert_eq!(suggestions[0].category, StoreCategory::Produce);
        assert_eq!(suggestions[0].confidence, 1.0);
        assert!(suggestions.iter().all(|s| s.category != StoreCategory::Other));
    }

    #[test]
    fn test_batch_is_independent_per_item() {
        let items = vec![
            "Organic Whole Milk".to_string(),
            "2 lb ground beef".to_string(),
            "".to_string(),
        ];
        let results = batch_detect_categories(&items);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].category, StoreCategory::DairyEggs);
        assert_eq!(results[1].category, StoreCategory::MeatSeafood);
        assert_eq!(results[2].category, StoreCategory::Other);
        assert_eq!(results[2].confidence, 0.1);
        assert_eq!(results[0].item, "Organic Whole Milk");
    }
}
