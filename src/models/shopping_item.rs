//! Shopping item model
//!
//! The list entry as the frontends exchange it. Quantity and unit are
//! optional because plenty of entries are just a name ("napkins"), and a
//! quantity of `0` is treated as absent throughout the conversion layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "Other".to_string()
}

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShoppingItem {
    /// Bare entry with defaults everywhere but the identifying fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ShoppingItem {
            id: id.into(),
            name: name.into(),
            quantity: None,
            unit: None,
            category: default_category(),
            checked: false,
            note: None,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_minimal_fields() {
        let item: ShoppingItem = serde_json::from_str(r#"{"name": "milk"}"#).unwrap();
        assert_eq!(item.name, "milk");
        assert_eq!(item.id, "");
        assert_eq!(item.category, "Other");
        assert_eq!(item.quantity, None);
        assert!(!item.checked);
        assert_eq!(item.sort_order, 0);
    }

    #[test]
    fn test_round_trips_full_entry() {
        let item: ShoppingItem = serde_json::from_str(
            r#"{
                "id": "a1",
                "name": "ground beef",
                "quantity": 2.0,
                "unit": "lb",
                "category": "Meat & Seafood",
                "checked": true,
                "note": "for tacos",
                "sort_order": 4,
                "created_at": "2025-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(item.quantity, Some(2.0));
        assert_eq!(item.unit.as_deref(), Some("lb"));
        assert!(item.created_at.is_some());

        let json = serde_json::to_string(&item).unwrap();
        let back: ShoppingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
