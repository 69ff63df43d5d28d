//! Grocer status tool
//!
//! Runtime status information about the grocer service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::category::keywords::keyword_count;
use crate::category::CATEGORY_KEYWORDS;
use crate::units::catalog::known_unit_count;
use crate::units::unit_categories;

/// List-building instructions for AI assistants
pub const LIST_INSTRUCTIONS: &str = r#"
# Grocer Shopping-List Instructions

This guide explains how to build and maintain a shopping list using the
grocer tools.

## Overview

Grocer provides three pure helpers for list building:
1. **Units** - Convert quantities between compatible units and suggest
   sensible units for an item
2. **Categories** - Map free-text item names to store aisle categories
3. **Duplicates** - Catch near-duplicate entries before they land on the
   list, with a merged-quantity preview

All tools are stateless: grocer never stores the list. Always pass the
user's current list to `find_duplicates`.

---

## Adding an Item the User Typed

**Step 1: Parse the raw text**

```
parse_item(input: "2 lb ground beef")
```

Returns the split fields plus every suggestion the entry form needs:

```json
{
  "name": "ground beef",
  "quantity": 2.0,
  "unit": "lb",
  "category": "Meat & Seafood",
  "confidence": 0.36,
  "suggested_units": ["lb", "kg", "oz"],
  "suggested_categories": [{"category": "Meat & Seafood", "confidence": 0.36}, ...]
}
```

Fractions work too: "1/2 cup sugar" parses as quantity 0.5, unit "cup".
Text without a leading number ("napkins") is just a name.

**Step 2: Check for duplicates BEFORE inserting**

```
find_duplicates(
  name: "ground beef",
  quantity: 2.0,
  unit: "lb",
  items: [ ...current list... ]
)
```

Each match includes a `similarity` score (most similar first) and a
`merged_quantity` preview when both entries carry a quantity and the
units line up:

```json
{
  "matches": [
    {
      "id": "a1", "name": "Ground Beef", "quantity": 1.0, "unit": "lb",
      "similarity": 1.0,
      "merged_quantity": {"value": 3.0, "unit": "lb"}
    }
  ]
}
```

**Step 3: Offer merge or add**

- If a match looks like the same purchase, offer "merge" (use the
  `merged_quantity` preview) or "add anyway".
- `merged_quantity: null` means the units do not combine (e.g. "2 lb" into
  "1 bunch"); merging then means keeping one entry and noting the other.

---

## Categories

- `categorize_item` maps a name to one of 9 store categories: Produce,
  Meat & Seafood, Dairy & Eggs, Pantry & Dry Goods, Canned & Jarred,
  Frozen, Bakery, Beverages, Other.
- Matching is keyword-based and **first-match-wins**, not best-match.
  Compound names land on the first keyword hit ("ice cream" is
  Dairy & Eggs via "cream"). Use the `suggestions` array when the user
  should pick instead.
- Confidence is a heuristic in [0.1, 1.0], not a probability. 0.1 means
  "no signal"; only a name that IS a category name scores 1.0.
- Use `categorize_items` to categorize a whole list in one call:

```
categorize_items(items: ["milk", "bananas", "frozen peas"])
```

---

## Units and Conversion

`convert_quantity` converts between units of the same kind:

| Kind | Units |
|------|-------|
| Weight | g, kg, mg, lb, oz |
| Volume | ml, l, tsp, tbsp, fl oz, cup, pint, quart, gallon |
| Length | mm, cm, m, in, ft |
| Count | piece, dozen, bunch, pack, can (and anything unrecognized) |

```
convert_quantity(value: 2, from_unit: "lb", to_unit: "kg")
```

Returns `converted: 0.907` with a ready-to-display string ("0.91 kg").
Results are rounded to 3 decimal places. Long spellings and plurals are
accepted ("pounds", "cups", "fl oz", "FL-OZ").

**Hard limits (by design):**
- Count units never convert: there is no answer for "2 dozen in grams".
- Weight never converts to volume and vice versa. There is no density
  table; do NOT try to turn "2 cups flour" into grams with these tools.
- An incompatible request returns `{"error": ...}`, not a guess.

**Display helpers:**
- `suggest_conversions(unit, value)` returns up to 3 "also equals" values
  (e.g. 2 lb -> 907.2 g, 0.91 kg, 32.0 oz).
- `suggest_units(item_name)` proposes up to 3 sensible units for an item
  name (lb/kg/oz for meats, cup/ml/fl oz for liquids).
- `list_units` returns the full catalog, grouped by kind with labels.

---

## Quick Reference

| Task | Tool |
|------|------|
| Split raw entry text into fields | `parse_item` |
| Check for duplicates before insert | `find_duplicates` |
| Categorize one item | `categorize_item` |
| Categorize a whole list | `categorize_items` |
| Convert a quantity | `convert_quantity` |
| "Also equals" display values | `suggest_conversions` |
| Suggest units for an item | `suggest_units` |
| Full unit catalog | `list_units` |
| Service status | `grocer_status` |

## Common Scenarios

### User says "add 2 pounds of chicken"
1. `parse_item(input: "2 pounds chicken")` -> name "chicken", unit "pounds"
2. `find_duplicates(name: "chicken", quantity: 2, unit: "pounds", items: [...])`
3. No matches -> add with the suggested category (Meat & Seafood)

### User pastes a whole recipe ingredient list
1. `parse_item` each line to split quantities out of the names
2. `categorize_items` with all the parsed names in one call
3. `find_duplicates` per item against the growing list

### User asks "how much is that in metric?"
1. `convert_quantity(value: 2, from_unit: "lb", to_unit: "kg")` for a
   specific target, or
2. `suggest_conversions(unit: "lb", value: 2)` to show the spread

## Notes

- A quantity of 0 is treated as "no quantity" by the list frontends;
  omit the quantity instead of sending 0.
- Names are matched case-insensitively everywhere.
- Duplicate similarity ranges 0.0-1.0; the default cutoff is 0.7 and can
  be overridden per call with `threshold`.
- Category keyword matching is substring-based: "milkshake mix" contains
  "milk" and lands in Dairy & Eggs. Let the user correct categories; the
  detector is a pre-fill, not a verdict.
"#;

/// Runtime status of the grocer service
#[derive(Debug, Clone, Serialize)]
pub struct GrocerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Engine information
    pub known_units: usize,
    pub unit_categories: usize,
    pub store_categories: usize,
    pub category_keywords: usize,
    pub duplicate_threshold: f64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    duplicate_threshold: f64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(duplicate_threshold: f64) -> Self {
        Self {
            start_time: Instant::now(),
            duplicate_threshold,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> GrocerStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        GrocerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            known_units: known_unit_count(),
            unit_categories: unit_categories().len(),
            store_categories: CATEGORY_KEYWORDS.len() + 1,
            category_keywords: keyword_count(),
            duplicate_threshold: self.duplicate_threshold,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
