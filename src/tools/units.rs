//! Unit conversion MCP tools
//!
//! Thin validation and response shaping over the `units` module.

use serde::Serialize;

use crate::category::{
    category_confidence, detect_category, suggest_categories, CategoryGuess, StoreCategory,
};
use crate::units::{
    conversion_suggestions, convert_unit, format_converted_value, parse_item_input,
    suggest_units_for_item, try_convert, unit_categories, unit_category, units_for_category,
    ConversionSuggestion, UnitCategory,
};

/// Response for convert_quantity
#[derive(Debug, Serialize)]
pub struct ConvertQuantityResponse {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted: f64,
    pub display_value: String,
    /// What the sentinel-style conversion the list frontends use returns for
    /// the same inputs; `null` there means the quantity reads as missing
    /// (a literal 0)
    pub sentinel_result: Option<f64>,
}

/// Response for suggest_conversions
#[derive(Debug, Serialize)]
pub struct SuggestConversionsResponse {
    pub unit: String,
    pub value: f64,
    pub category: UnitCategory,
    pub suggestions: Vec<ConversionSuggestion>,
    pub total: usize,
}

/// One category block in list_units
#[derive(Debug, Serialize)]
pub struct UnitCategoryListing {
    pub category: UnitCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub units: Vec<&'static str>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub categories: Vec<UnitCategoryListing>,
}

/// Response for suggest_units
#[derive(Debug, Serialize)]
pub struct SuggestUnitsResponse {
    pub item: String,
    pub units: Vec<&'static str>,
}

/// Response for parse_item
#[derive(Debug, Serialize)]
pub struct ParseItemResponse {
    pub input: String,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: StoreCategory,
    pub confidence: f64,
    pub suggested_units: Vec<&'static str>,
    pub suggested_categories: Vec<CategoryGuess>,
}

/// Convert a quantity between two units
pub fn convert_quantity(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<ConvertQuantityResponse, String> {
    if !value.is_finite() {
        return Err("value must be a finite number".to_string());
    }
    let converted = try_convert(value, from_unit, to_unit).map_err(|e| e.to_string())?;
    Ok(ConvertQuantityResponse {
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        converted,
        display_value: format!("{} {}", format_converted_value(converted), to_unit.trim()),
        sentinel_result: convert_unit(value, from_unit, to_unit),
    })
}

/// Alternate-unit suggestions for a quantity
pub fn suggest_conversions(unit: &str, value: f64) -> Result<SuggestConversionsResponse, String> {
    if unit.trim().is_empty() {
        return Err("unit cannot be empty".to_string());
    }
    if !value.is_finite() {
        return Err("value must be a finite number".to_string());
    }
    let suggestions = conversion_suggestions(unit, value);
    let total = suggestions.len();
    Ok(SuggestConversionsResponse {
        unit: unit.to_string(),
        value,
        category: unit_category(unit),
        suggestions,
        total,
    })
}

/// Every known unit, grouped by category
pub fn list_units() -> ListUnitsResponse {
    ListUnitsResponse {
        categories: unit_categories()
            .iter()
            .map(|info| UnitCategoryListing {
                category: info.category,
                label: info.label,
                icon: info.icon,
                units: units_for_category(info.category),
            })
            .collect(),
    }
}

/// Unit suggestions for an item name
pub fn suggest_units(item_name: &str) -> Result<SuggestUnitsResponse, String> {
    let name = item_name.trim();
    if name.is_empty() {
        return Err("item name cannot be empty".to_string());
    }
    Ok(SuggestUnitsResponse {
        item: name.to_string(),
        units: suggest_units_for_item(name),
    })
}

/// Parse a raw entry string and pre-fill every suggestion the entry form
/// needs in one shot
pub fn parse_item(input: &str) -> Result<ParseItemResponse, String> {
    if input.trim().is_empty() {
        return Err("input cannot be empty".to_string());
    }
    let parsed = parse_item_input(input);
    let category = detect_category(&parsed.name);
    let confidence = category_confidence(&parsed.name, category);
    Ok(ParseItemResponse {
        input: input.to_string(),
        suggested_units: suggest_units_for_item(&parsed.name),
        suggested_categories: suggest_categories(&parsed.name),
        name: parsed.name,
        quantity: parsed.quantity,
        unit: parsed.unit,
        category,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_quantity_success() {
        let response = convert_quantity(2.0, "lb", "kg").unwrap();
        assert_eq!(response.converted, 0.907);
        assert_eq!(response.display_value, "0.91 kg");
        assert_eq!(response.sentinel_result, Some(0.907));
    }

    #[test]
    fn test_convert_quantity_zero_diverges_from_sentinel() {
        // The strict surface converts a literal 0; the sentinel surface the
        // list frontends use reads it as "no value"
        let response = convert_quantity(0.0, "lb", "kg").unwrap();
        assert_eq!(response.converted, 0.0);
        assert_eq!(response.sentinel_result, None);
    }

    #[test]
    fn test_convert_quantity_rejects_incompatible() {
        let err = convert_quantity(1.0, "cup", "lb").unwrap_err();
        assert!(err.contains("cannot convert"), "{err}");
    }

    #[test]
    fn test_convert_quantity_rejects_non_finite() {
        assert!(convert_quantity(f64::NAN, "lb", "kg").is_err());
        assert!(convert_quantity(f64::INFINITY, "lb", "kg").is_err());
    }

    #[test]
    fn test_suggest_conversions_shape() {
        let response = suggest_conversions("lb", 2.0).unwrap();
        assert_eq!(response.category, UnitCategory::Weight);
        assert_eq!(response.total, response.suggestions.len());
        assert!(response.total <= 3);
    }

    #[test]
    fn test_list_units_covers_all_categories() {
        let response = list_units();
        assert_eq!(response.categories.len(), 4);
        assert!(response.categories.iter().all(|c| !c.units.is_empty()));
    }

    #[test]
    fn test_parse_item_composite() {
        let response = parse_item("2 lb ground beef").unwrap();
        assert_eq!(response.name, "ground beef");
        assert_eq!(response.quantity, Some(2.0));
        assert_eq!(response.unit.as_deref(), Some("lb"));
        assert_eq!(response.category, StoreCategory::MeatSeafood);
        assert!(response.confidence > 0.1);
        assert!(!response.suggested_units.is_empty());
    }

    #[test]
    fn test_blank_inputs_rejected() {
        assert!(suggest_units("  ").is_err());
        assert!(parse_item("").is_err());
        assert!(suggest_conversions(" ", 1.0).is_err());
    }
}
