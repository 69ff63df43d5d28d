//! Category detection MCP tools

use serde::Serialize;

use crate::category::{
    batch_detect_categories, category_confidence, detect_category, suggest_categories,
    BatchCategoryGuess, CategoryGuess, StoreCategory,
};

/// Response for categorize_item
#[derive(Debug, Serialize)]
pub struct CategorizeItemResponse {
    pub item: String,
    pub category: StoreCategory,
    pub confidence: f64,
    pub suggestions: Vec<CategoryGuess>,
}

/// Response for categorize_items
#[derive(Debug, Serialize)]
pub struct CategorizeItemsResponse {
    pub results: Vec<BatchCategoryGuess>,
    pub total: usize,
}

/// Detect the store category for one item name, with ranked alternatives
pub fn categorize_item(item_name: &str) -> Result<CategorizeItemResponse, String> {
    let name = item_name.trim();
    if name.is_empty() {
        return Err("item name cannot be empty".to_string());
    }
    let category = detect_category(name);
    Ok(CategorizeItemResponse {
        item: name.to_string(),
        category,
        confidence: category_confidence(name, category),
        suggestions: suggest_categories(name),
    })
}

/// Detect categories for a whole list in one call. Items are scored
/// independently; blank entries come back as `Other` rather than failing
/// the batch.
pub fn categorize_items(items: &[String]) -> Result<CategorizeItemsResponse, String> {
    if items.is_empty() {
        return Err("items cannot be empty".to_string());
    }
    let results = batch_detect_categories(items);
    let total = results.len();
    Ok(CategorizeItemsResponse { results, total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_item() {
        let response = categorize_item("Organic Whole Milk").unwrap();
        assert_eq!(response.category, StoreCategory::DairyEggs);
        assert!(response.confidence > 0.1);
        assert!(!response.suggestions.is_empty());
    }

    #[test]
    fn test_categorize_item_trims_name() {
        let response = categorize_item("  bananas  ").unwrap();
        assert_eq!(response.item, "bananas");
        assert_eq!(response.category, StoreCategory::Produce);
    }

    #[test]
    fn test_categorize_item_blank_rejected() {
        assert!(categorize_item("   ").is_err());
    }

    #[test]
    fn test_categorize_items_batch() {
        let items = vec!["milk".to_string(), "".to_string(), "beef".to_string()];
        let response = categorize_items(&items).unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(response.results[1].category, StoreCategory::Other);
    }

    #[test]
    fn test_categorize_items_empty_rejected() {
        assert!(categorize_items(&[]).is_err());
    }
}
