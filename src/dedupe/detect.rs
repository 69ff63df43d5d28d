//! Duplicate detection against an existing list
//!
//! Scores a candidate name against every current entry and keeps the ones
//! similar enough to be the same thing, so the frontend can ask "merge or
//! add anyway?" before inserting.

use serde::Serialize;

use super::similarity::name_similarity;
use crate::models::ShoppingItem;
use crate::units::catalog::normalize_unit;
use crate::units::convert::{convert_unit, round3};

/// Similarity at or above which two names count as the same item
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// One probable duplicate of a candidate name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateMatch<'a> {
    pub item: &'a ShoppingItem,
    pub similarity: f64,
}

/// Combined quantity of two merged entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedQuantity {
    pub value: f64,
    pub unit: String,
}

/// Existing items whose names are at least `threshold`-similar to
/// `candidate_name`, most similar first.
///
/// A blank candidate matches nothing. Thresholds outside `[0.0, 1.0]` fall
/// back to [`DEFAULT_THRESHOLD`] with a warning rather than silently
/// matching everything or nothing.
pub fn find_duplicates<'a>(
    candidate_name: &str,
    items: &'a [ShoppingItem],
    threshold: f64,
) -> Vec<DuplicateMatch<'a>> {
    if candidate_name.trim().is_empty() {
        return Vec::new();
    }
    let threshold = if (0.0..=1.0).contains(&threshold) {
        threshold
    } else {
        tracing::warn!(
            "Similarity threshold {} out of range, using default {}",
            threshold,
            DEFAULT_THRESHOLD
        );
        DEFAULT_THRESHOLD
    };

    let mut matches: Vec<DuplicateMatch<'a>> = items
        .iter()
        .map(|item| DuplicateMatch {
            item,
            similarity: name_similarity(candidate_name, &item.name),
        })
        .filter(|candidate| candidate.similarity >= threshold)
        .collect();

    // Stable sort keeps list order for equal scores
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches
}

/// Combined quantity for merging entry `b` into entry `a`.
///
/// Same unit (after normalization) sums directly, which covers count units.
/// Different units must be convertible; the result stays in `a`'s unit.
/// Anything else, including the zero-as-missing conversion sentinel, yields
/// `None` and the caller keeps the entries separate.
pub fn merge_quantities(a: f64, a_unit: &str, b: f64, b_unit: &str) -> Option<MergedQuantity> {
    let unit = a_unit.trim().to_string();
    if normalize_unit(a_unit) == normalize_unit(b_unit) {
        return Some(MergedQuantity { value: round3(a + b), unit });
    }
    let converted = convert_unit(b, b_unit, a_unit)?;
    Some(MergedQuantity { value: round3(a + converted), unit })
}
