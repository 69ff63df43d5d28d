//! Duplicate detection MCP tools

use serde::Serialize;

use crate::dedupe::{find_duplicates, merge_quantities, MergedQuantity};
use crate::models::ShoppingItem;

/// One likely duplicate, with a merge preview when both entries carry
/// enough quantity information
#[derive(Debug, Serialize)]
pub struct DuplicateEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub similarity: f64,
    pub merged_quantity: Option<MergedQuantity>,
}

/// Response for find_duplicates
#[derive(Debug, Serialize)]
pub struct FindDuplicatesResponse {
    pub candidate: String,
    pub threshold: f64,
    pub matches: Vec<DuplicateEntry>,
    pub total: usize,
}

/// Existing entries similar enough to `candidate` to be the same item.
///
/// When the candidate carries a quantity and unit, each match also gets the
/// combined quantity the list would hold after a merge, or `None` when the
/// units do not line up.
pub fn find_duplicate_items(
    candidate: &str,
    quantity: Option<f64>,
    unit: Option<&str>,
    items: &[ShoppingItem],
    threshold: f64,
) -> Result<FindDuplicatesResponse, String> {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Err("candidate name cannot be empty".to_string());
    }

    let matches = find_duplicates(candidate, items, threshold)
        .into_iter()
        .map(|m| {
            let merged_quantity = match (m.item.quantity, m.item.unit.as_deref(), quantity, unit) {
                (Some(a), Some(a_unit), Some(b), Some(b_unit)) => {
                    merge_quantities(a, a_unit, b, b_unit)
                }
                _ => None,
            };
            DuplicateEntry {
                id: m.item.id.clone(),
                name: m.item.name.clone(),
                category: m.item.category.clone(),
                quantity: m.item.quantity,
                unit: m.item.unit.clone(),
                similarity: m.similarity,
                merged_quantity,
            }
        })
        .collect::<Vec<_>>();

    let total = matches.len();
    Ok(FindDuplicatesResponse {
        candidate: candidate.to_string(),
        threshold,
        matches,
        total,
    })
}
