//! Unit catalog: normalization, categories, and conversion factor tables
//!
//! Every lookup goes through [`normalize_unit`], so `"fl oz"`, `"fl_oz"` and
//! `"FL-OZ"` are the same key. Units that appear in no factor table are count
//! units; category resolution is total and never fails.

use serde::{Deserialize, Serialize};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Weight/mass units (base: gram)
    Weight,
    /// Volume units (base: milliliter)
    Volume,
    /// Length units (base: centimeter)
    Length,
    /// Discrete or unrecognized units (piece, dozen, can); never convertible
    Count,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Length => "length",
            UnitCategory::Count => "count",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Some(UnitCategory::Weight),
            "volume" => Some(UnitCategory::Volume),
            "length" => Some(UnitCategory::Length),
            "count" => Some(UnitCategory::Count),
            _ => None,
        }
    }

    /// The unit all factors of this category are expressed in; count units
    /// have no base.
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitCategory::Weight => Some("g"),
            UnitCategory::Volume => Some("ml"),
            UnitCategory::Length => Some("cm"),
            UnitCategory::Count => None,
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Factor Tables (canonical key -> factor to category base unit)
// ============================================================================

/// Grams per weight unit
const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("g", 1.0),
    ("kg", 1000.0),
    ("mg", 0.001),
    ("lb", 453.592),
    ("oz", 28.3495),
];

/// Milliliters per volume unit
const VOLUME_FACTORS: &[(&str, f64)] = &[
    ("ml", 1.0),
    ("l", 1000.0),
    ("tsp", 4.92892),
    ("tbsp", 14.7868),
    ("fl_oz", 29.5735),
    ("cup", 236.588),
    ("pint", 473.176),
    ("quart", 946.353),
    ("gallon", 3785.41),
];

/// Centimeters per length unit
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("mm", 0.1),
    ("cm", 1.0),
    ("m", 100.0),
    ("in", 2.54),
    ("ft", 30.48),
];

/// Alternate spellings, normalized form -> canonical table key
const UNIT_ALIASES: &[(&str, &str)] = &[
    // weight
    ("gram", "g"),
    ("grams", "g"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("milligram", "mg"),
    ("milligrams", "mg"),
    ("lbs", "lb"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    // volume
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("liter", "l"),
    ("liters", "l"),
    ("litre", "l"),
    ("litres", "l"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("floz", "fl_oz"),
    ("fluid_ounce", "fl_oz"),
    ("fluid_ounces", "fl_oz"),
    ("cups", "cup"),
    ("pints", "pint"),
    ("quarts", "quart"),
    ("gallons", "gallon"),
    // length
    ("millimeter", "mm"),
    ("millimeters", "mm"),
    ("centimeter", "cm"),
    ("centimeters", "cm"),
    ("meter", "m"),
    ("meters", "m"),
    ("metre", "m"),
    ("metres", "m"),
    ("inch", "in"),
    ("inches", "in"),
    ("foot", "ft"),
    ("feet", "ft"),
];

// ============================================================================
// Category Metadata
// ============================================================================

/// Display metadata and the ordered "common units" list for one category.
/// Common units drive conversion suggestions and UI groupings.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category: UnitCategory,
    pub label: &'static str,
    pub icon: &'static str,
    pub common_units: &'static [&'static str],
}

/// Full category metadata table, in the weight/volume/length/count scan order
pub const UNIT_CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        category: UnitCategory::Weight,
        label: "Weight",
        icon: "\u{2696}\u{fe0f}",
        common_units: &["g", "kg", "lb", "oz"],
    },
    CategoryInfo {
        category: UnitCategory::Volume,
        label: "Volume",
        icon: "\u{1f95b}",
        common_units: &["ml", "l", "cup", "fl oz"],
    },
    CategoryInfo {
        category: UnitCategory::Length,
        label: "Length",
        icon: "\u{1f4cf}",
        common_units: &["cm", "m", "in", "ft"],
    },
    CategoryInfo {
        category: UnitCategory::Count,
        label: "Count",
        icon: "\u{1f522}",
        common_units: &["piece", "dozen", "bunch", "pack", "can"],
    },
];

// ============================================================================
// Lookup
// ============================================================================

/// Canonical lookup key for a unit string: lower-cased, trimmed, every
/// character outside `[a-z0-9]` replaced with `_`. Empty input stays `""`.
pub fn normalize_unit(unit: &str) -> String {
    unit.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn find_factor(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, f)| *f)
}

fn canonical_key(normalized: &str) -> &str {
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, key)| *key)
        .unwrap_or(normalized)
}

/// Category and factor-to-base for a unit, in any accepted spelling.
/// Count units have no factor and yield `None`.
pub(crate) fn lookup(unit: &str) -> Option<(UnitCategory, f64)> {
    let normalized = normalize_unit(unit);
    let key = canonical_key(&normalized);

    if let Some(factor) = find_factor(WEIGHT_FACTORS, key) {
        return Some((UnitCategory::Weight, factor));
    }
    if let Some(factor) = find_factor(VOLUME_FACTORS, key) {
        return Some((UnitCategory::Volume, factor));
    }
    if let Some(factor) = find_factor(LENGTH_FACTORS, key) {
        return Some((UnitCategory::Length, factor));
    }
    None
}

/// Determine the category of a unit string. Total: anything not found in the
/// weight, volume, or length tables is a count unit, including `""`.
pub fn unit_category(unit: &str) -> UnitCategory {
    match lookup(unit) {
        Some((category, _)) => category,
        None => UnitCategory::Count,
    }
}

/// Metadata entry for a category
pub fn category_info(category: UnitCategory) -> &'static CategoryInfo {
    UNIT_CATEGORIES
        .iter()
        .find(|info| info.category == category)
        .unwrap_or(&UNIT_CATEGORIES[3])
}

/// The unit spellings offered for a category: factor-table keys in declared
/// order for convertible categories, the common-units list for count.
pub fn units_for_category(category: UnitCategory) -> Vec<&'static str> {
    let table = match category {
        UnitCategory::Weight => WEIGHT_FACTORS,
        UnitCategory::Volume => VOLUME_FACTORS,
        UnitCategory::Length => LENGTH_FACTORS,
        UnitCategory::Count => return category_info(UnitCategory::Count).common_units.to_vec(),
    };
    table.iter().map(|(key, _)| *key).collect()
}

/// The full category metadata table
pub fn unit_categories() -> &'static [CategoryInfo] {
    UNIT_CATEGORIES
}

/// Total number of recognized convertible unit spellings (canonical + alias),
/// reported by the status tool.
pub(crate) fn known_unit_count() -> usize {
    WEIGHT_FACTORS.len() + VOLUME_FACTORS.len() + LENGTH_FACTORS.len() + UNIT_ALIASES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unit() {
        assert_eq!(normalize_unit("FL-OZ"), "fl_oz");
        assert_eq!(normalize_unit("fl oz"), "fl_oz");
        assert_eq!(normalize_unit("  Cup "), "cup");
        assert_eq!(normalize_unit(""), "");
        assert_eq!(normalize_unit("G"), "g");
    }

    #[test]
    fn test_normalize_does_not_collapse_runs() {
        assert_eq!(normalize_unit("fl  oz"), "fl__oz");
    }

    #[test]
    fn test_category_weight_units() {
        assert_eq!(unit_category("g"), UnitCategory::Weight);
        assert_eq!(unit_category("KG"), UnitCategory::Weight);
        assert_eq!(unit_category("pounds"), UnitCategory::Weight);
        assert_eq!(unit_category("oz"), UnitCategory::Weight);
    }

    #[test]
    fn test_category_volume_units() {
        assert_eq!(unit_category("ml"), UnitCategory::Volume);
        assert_eq!(unit_category("fl oz"), UnitCategory::Volume);
        assert_eq!(unit_category("Tablespoons"), UnitCategory::Volume);
        assert_eq!(unit_category("cup"), UnitCategory::Volume);
    }

    #[test]
    fn test_category_length_units() {
        assert_eq!(unit_category("cm"), UnitCategory::Length);
        assert_eq!(unit_category("inches"), UnitCategory::Length);
    }

    #[test]
    fn test_category_is_total() {
        // Anything unrecognized is a count unit, never an error
        assert_eq!(unit_category("piece"), UnitCategory::Count);
        assert_eq!(unit_category("dozen"), UnitCategory::Count);
        assert_eq!(unit_category(""), UnitCategory::Count);
        assert_eq!(unit_category("???"), UnitCategory::Count);
    }

    #[test]
    fn test_lookup_factors() {
        assert_eq!(lookup("lb"), Some((UnitCategory::Weight, 453.592)));
        assert_eq!(lookup("cup"), Some((UnitCategory::Volume, 236.588)));
        assert_eq!(lookup("in"), Some((UnitCategory::Length, 2.54)));
        assert_eq!(lookup("piece"), None);
    }

    #[test]
    fn test_units_for_category() {
        let weight = units_for_category(UnitCategory::Weight);
        assert_eq!(weight, vec!["g", "kg", "mg", "lb", "oz"]);

        let count = units_for_category(UnitCategory::Count);
        assert!(count.contains(&"piece"));
        assert!(count.contains(&"dozen"));
    }

    #[test]
    fn test_category_metadata() {
        assert_eq!(unit_categories().len(), 4);
        let weight = category_info(UnitCategory::Weight);
        assert_eq!(weight.label, "Weight");
        assert_eq!(weight.common_units, &["g", "kg", "lb", "oz"]);
        assert_eq!(UnitCategory::Count.base_unit(), None);
        assert_eq!(UnitCategory::Volume.base_unit(), Some("ml"));
    }
}
