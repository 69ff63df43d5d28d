//! Free-text entry parsing
//!
//! The entry box accepts plain strings like `"2 lb ground beef"` or
//! `"1.5 cups milk"`. Splitting out the quantity and unit up front lets the
//! list pre-fill those fields instead of dumping the raw string into the name.

use serde::Serialize;

use super::catalog::{category_info, lookup, normalize_unit, UnitCategory};

/// Result of parsing a raw entry string. Total: parsing never fails, a
/// string with no recognizable quantity is just a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemInput {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Parse a leading number token: integer, decimal, or simple fraction `a/b`.
/// Only finite positive values count; `0` means "no quantity" everywhere
/// else in the app, so it does here too.
fn parse_quantity(token: &str) -> Option<f64> {
    let value = if let Some((numer, denom)) = token.split_once('/') {
        let numer: f64 = numer.parse().ok()?;
        let denom: f64 = denom.parse().ok()?;
        if denom == 0.0 {
            return None;
        }
        numer / denom
    } else {
        token.parse().ok()?
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

/// True if the token spells a count unit (`"can"`, `"packs"`, ...)
fn is_count_unit_spelling(token: &str) -> bool {
    let key = normalize_unit(token);
    category_info(UnitCategory::Count)
        .common_units
        .iter()
        .any(|&unit| key == unit || key.strip_suffix('s') == Some(unit))
}

/// True if the token (or token pair) names a unit the catalog knows
fn is_unit_token(token: &str) -> bool {
    lookup(token).is_some() || is_count_unit_spelling(token)
}

/// Split `"2 lb ground beef"` into quantity, unit, and name.
///
/// A unit is only recognized right after a leading quantity; two-word units
/// (`"fl oz"`) are tried before single tokens. The unit keeps the user's
/// spelling, lowercased. Without a leading number the whole trimmed input is
/// the name.
pub fn parse_item_input(input: &str) -> ItemInput {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((first, rest)) = tokens.split_first() else {
        return ItemInput { name: String::new(), quantity: None, unit: None };
    };

    let Some(quantity) = parse_quantity(first) else {
        return ItemInput { name: input.trim().to_string(), quantity: None, unit: None };
    };

    if rest.len() >= 2 {
        let pair = format!("{} {}", rest[0], rest[1]);
        if lookup(&pair).is_some() {
            return ItemInput {
                name: rest[2..].join(" "),
                quantity: Some(quantity),
                unit: Some(pair.to_lowercase()),
            };
        }
    }
    if let Some((unit, name_tokens)) = rest.split_first() {
        if is_unit_token(unit) {
            return ItemInput {
                name: name_tokens.join(" "),
                quantity: Some(quantity),
                unit: Some(unit.to_lowercase()),
            };
        }
    }

    ItemInput { name: rest.join(" "), quantity: Some(quantity), unit: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> (String, Option<f64>, Option<String>) {
        let item = parse_item_input(input);
        (item.name, item.quantity, item.unit)
    }

    #[test]
    fn test_quantity_unit_name() {
        assert_eq!(
            parsed("2 lb ground beef"),
            ("ground beef".to_string(), Some(2.0), Some("lb".to_string()))
        );
        assert_eq!(
            parsed("1.5 cups milk"),
            ("milk".to_string(), Some(1.5), Some("cups".to_string()))
        );
    }

    #[test]
    fn test_fraction_quantity() {
        assert_eq!(
            parsed("1/2 cup sugar"),
            ("sugar".to_string(), Some(0.5), Some("cup".to_string()))
        );
        assert_eq!(parsed("3/4 lb shrimp"), ("shrimp".to_string(), Some(0.75), Some("lb".to_string())));
    }

    #[test]
    fn test_two_word_unit() {
        assert_eq!(
            parsed("3 fl oz lime juice"),
            ("lime juice".to_string(), Some(3.0), Some("fl oz".to_string()))
        );
    }

    #[test]
    fn test_count_unit_spellings() {
        assert_eq!(
            parsed("2 cans crushed tomatoes"),
            ("crushed tomatoes".to_string(), Some(2.0), Some("cans".to_string()))
        );
        assert_eq!(parsed("1 bunch cilantro"), ("cilantro".to_string(), Some(1.0), Some("bunch".to_string())));
    }

    #[test]
    fn test_number_without_unit() {
        // "eggs" is not a unit, so it stays in the name
        assert_eq!(parsed("6 eggs"), ("eggs".to_string(), Some(6.0), None));
    }

    #[test]
    fn test_no_leading_number() {
        assert_eq!(parsed("milk"), ("milk".to_string(), None, None));
        assert_eq!(parsed("dozen eggs"), ("dozen eggs".to_string(), None, None));
        assert_eq!(parsed("  whole  milk  "), ("whole  milk".to_string(), None, None));
    }

    #[test]
    fn test_degenerate_numbers() {
        // Zero, negatives, and non-finite spellings are not quantities
        assert_eq!(parsed("0 lb beef"), ("0 lb beef".to_string(), None, None));
        assert_eq!(parsed("-2 lb beef"), ("-2 lb beef".to_string(), None, None));
        assert_eq!(parsed("inf lb beef"), ("inf lb beef".to_string(), None, None));
        assert_eq!(parsed("1/0 lb beef"), ("1/0 lb beef".to_string(), None, None));
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parsed(""), (String::new(), None, None));
        assert_eq!(parsed("   "), (String::new(), None, None));
    }

    #[test]
    fn test_quantity_only() {
        assert_eq!(parsed("2"), (String::new(), Some(2.0), None));
    }

    #[test]
    fn test_unit_spelling_preserved_lowercased() {
        assert_eq!(
            parsed("2 LBS chicken thighs"),
            ("chicken thighs".to_string(), Some(2.0), Some("lbs".to_string()))
        );
    }
}
