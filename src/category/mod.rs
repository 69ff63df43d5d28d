//! Store category detection module
//!
//! Maps free-text item names to store aisle categories.

pub mod detect;
pub mod keywords;

pub use detect::{
    batch_detect_categories, category_confidence, detect_category, suggest_categories,
    BatchCategoryGuess, CategoryGuess,
};
pub use keywords::{StoreCategory, CATEGORY_KEYWORDS};
