//! Quantity conversion between compatible units
//!
//! Two surfaces over the same math: [`convert_unit`] keeps the sentinel
//! contract the shopping-list frontends rely on (`None` for "no answer",
//! including the zero-as-missing quirk), and [`try_convert`] reports the
//! reason as a typed error and accepts a literal zero.

use serde::Serialize;
use thiserror::Error;

use super::catalog::{category_info, lookup, normalize_unit, unit_category, UnitCategory};

/// A candidate alternate unit for a quantity, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSuggestion {
    pub unit: String,
    pub value: f64,
    pub display_value: String,
}

/// Why a strict conversion failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unit is blank")]
    BlankUnit,

    #[error("'{unit}' is a count unit and cannot be converted")]
    NotConvertible { unit: String },

    #[error("cannot convert {from} ({from_category}) to {to} ({to_category})")]
    Incompatible {
        from: String,
        from_category: UnitCategory,
        to: String,
        to_category: UnitCategory,
    },
}

/// Round to 3 decimal places, half away from zero at the 3rd decimal
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert a quantity between two units.
///
/// Returns `None` when there is no answer: a missing value (`0.0` and NaN
/// both count as missing), a blank unit string, a count unit on either side,
/// or units from different categories. Identical units (after normalization)
/// return the value unchanged even when the unit is unrecognized. Results are
/// rounded to 3 decimal places.
pub fn convert_unit(value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    if value == 0.0 || value.is_nan() {
        return None;
    }
    if from_unit.is_empty() || to_unit.is_empty() {
        return None;
    }
    if normalize_unit(from_unit) == normalize_unit(to_unit) {
        return Some(value);
    }

    let (from_category, from_factor) = lookup(from_unit)?;
    let (to_category, to_factor) = lookup(to_unit)?;
    if from_category != to_category {
        return None;
    }

    let base = value * from_factor;
    Some(round3(base / to_factor))
}

/// Convert a quantity between two units, reporting failures as errors.
///
/// Unlike [`convert_unit`] a value of `0.0` is a real quantity here and
/// converts to `Ok(0.0)`. Identity and rounding semantics are otherwise the
/// same.
pub fn try_convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    let from_key = normalize_unit(from_unit);
    let to_key = normalize_unit(to_unit);
    if from_key.is_empty() || to_key.is_empty() {
        return Err(ConvertError::BlankUnit);
    }
    if from_key == to_key {
        return Ok(value);
    }

    let Some((from_category, from_factor)) = lookup(from_unit) else {
        return Err(ConvertError::NotConvertible { unit: from_key });
    };
    let Some((to_category, to_factor)) = lookup(to_unit) else {
        return Err(ConvertError::NotConvertible { unit: to_key });
    };
    if from_category != to_category {
        return Err(ConvertError::Incompatible {
            from: from_key,
            from_category,
            to: to_key,
            to_category,
        });
    }

    Ok(round3(value * from_factor / to_factor))
}

/// True iff the two units live in the same convertible category
pub fn can_convert(unit1: &str, unit2: &str) -> bool {
    match (lookup(unit1), lookup(unit2)) {
        (Some((category1, _)), Some((category2, _))) => category1 == category2,
        _ => false,
    }
}

/// "Also equals" suggestions for a quantity: the category's common units,
/// converted, minus failures and the value itself, capped at 3, in the fixed
/// table order. Count units get no suggestions.
pub fn conversion_suggestions(unit: &str, value: f64) -> Vec<ConversionSuggestion> {
    let category = unit_category(unit);
    if category == UnitCategory::Count {
        return Vec::new();
    }

    let mut suggestions = Vec::new();
    for &target in category_info(category).common_units {
        let Some(converted) = convert_unit(value, unit, target) else {
            continue;
        };
        // No self-suggestion: an identity conversion echoes the input value
        if converted == value {
            continue;
        }
        suggestions.push(ConversionSuggestion {
            unit: target.to_string(),
            value: converted,
            display_value: format!("{} {}", format_converted_value(converted), target),
        });
        if suggestions.len() == 3 {
            break;
        }
    }
    suggestions
}

/// Display formatting for converted values: no decimals from 1000 up, one
/// decimal from 1 up, two decimals below 1.
pub fn format_converted_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.0}", value)
    } else if value >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

// Name fragments that hint at how an item is usually measured
const WEIGHT_HINTS: &[&str] = &[
    "meat", "beef", "chicken", "pork", "fish", "cheese", "butter", "flour", "sugar", "rice",
];
const VOLUME_HINTS: &[&str] = &[
    "milk", "juice", "oil", "water", "broth", "sauce", "cream", "vinegar",
];
const COUNT_HINTS: &[&str] = &[
    "apple", "banana", "egg", "onion", "lemon", "lime", "tomato", "avocado", "pepper",
];

const WEIGHT_UNIT_SUGGESTIONS: &[&str] = &["lb", "kg", "oz"];
const VOLUME_UNIT_SUGGESTIONS: &[&str] = &["cup", "ml", "fl oz"];
const COUNT_UNIT_SUGGESTIONS: &[&str] = &["piece", "dozen", "bunch"];
const DEFAULT_UNIT_SUGGESTIONS: &[&str] = &["piece", "cup", "lb"];

/// Suggest up to 3 units for a free-text item name. The hint checks are
/// independent, so a name matching several lists accumulates all of them
/// before the cap; unmatched names fall back to a generic spread.
pub fn suggest_units_for_item(item_name: &str) -> Vec<&'static str> {
    let name = item_name.trim().to_lowercase();
    if name.is_empty() {
        return DEFAULT_UNIT_SUGGESTIONS.to_vec();
    }

    let mut suggestions: Vec<&'static str> = Vec::new();
    if WEIGHT_HINTS.iter().any(|hint| name.contains(hint)) {
        suggestions.extend_from_slice(WEIGHT_UNIT_SUGGESTIONS);
    }
    if VOLUME_HINTS.iter().any(|hint| name.contains(hint)) {
        suggestions.extend_from_slice(VOLUME_UNIT_SUGGESTIONS);
    }
    if COUNT_HINTS.iter().any(|hint| name.contains(hint)) {
        suggestions.extend_from_slice(COUNT_UNIT_SUGGESTIONS);
    }

    if suggestions.is_empty() {
        return DEFAULT_UNIT_SUGGESTIONS.to_vec();
    }
    suggestions.truncate(3);
    suggestions
}
