//! Unit conversion module
//!
//! Handles unit normalization, quantity conversion, and entry parsing.

pub mod catalog;
pub mod convert;
pub mod parse;

pub use catalog::{
    category_info, normalize_unit, unit_categories, unit_category, units_for_category,
    CategoryInfo, UnitCategory,
};
pub use convert::{
    can_convert, conversion_suggestions, convert_unit, format_converted_value,
    suggest_units_for_item, try_convert, ConversionSuggestion, ConvertError,
};
pub use parse::{parse_item_input, ItemInput};
