//! Duplicate detection module
//!
//! Fuzzy-matches new entries against the existing list.

pub mod detect;
pub mod similarity;

pub use detect::{find_duplicates, merge_quantities, DuplicateMatch, MergedQuantity, DEFAULT_THRESHOLD};
pub use similarity::{levenshtein_distance, name_similarity};
