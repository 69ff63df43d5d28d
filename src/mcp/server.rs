//! Grocer MCP Server Implementation
//!
//! Implements the MCP server with all grocer tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::dedupe::DEFAULT_THRESHOLD;
use crate::models::ShoppingItem;
use crate::tools::category;
use crate::tools::dedupe;
use crate::tools::status::StatusTracker;
use crate::tools::units;

/// Grocer MCP Service
#[derive(Clone)]
pub struct GrocerService {
    status_tracker: Arc<StatusTracker>,
    duplicate_threshold: f64,
    tool_router: ToolRouter<GrocerService>,
}

impl GrocerService {
    pub fn new() -> Self {
        let duplicate_threshold = duplicate_threshold_from_env();
        Self {
            status_tracker: Arc::new(StatusTracker::new(duplicate_threshold)),
            duplicate_threshold,
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for GrocerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Default duplicate cutoff, overridable per deployment
fn duplicate_threshold_from_env() -> f64 {
    match std::env::var("GROCER_DUPLICATE_THRESHOLD") {
        Ok(raw) => match raw.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => value,
            _ => {
                tracing::warn!(
                    "Invalid GROCER_DUPLICATE_THRESHOLD '{}', using default {}",
                    raw,
                    DEFAULT_THRESHOLD
                );
                DEFAULT_THRESHOLD
            }
        },
        Err(_) => DEFAULT_THRESHOLD,
    }
}

// ============================================================================
// Unit Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertQuantityParams {
    /// Quantity to convert
    pub value: f64,
    /// Unit the quantity is in (e.g. "lb", "cups", "fl oz")
    pub from_unit: String,
    /// Unit to convert into
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestConversionsParams {
    /// Unit the quantity is in
    pub unit: String,
    /// Quantity to convert
    pub value: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SuggestUnitsParams {
    /// Item name to suggest units for (e.g. "ground beef")
    pub item_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseItemParams {
    /// Raw entry text (e.g. "2 lb ground beef")
    pub input: String,
}

// ============================================================================
// Category Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategorizeItemParams {
    /// Item name to categorize
    pub item_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CategorizeItemsParams {
    /// Item names to categorize
    pub items: Vec<String>,
}

// ============================================================================
// Duplicate Parameter Structs
// ============================================================================

/// A shopping-list entry as passed in by the caller
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ShoppingItemParam {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default = "default_item_category")]
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_item_category() -> String {
    "Other".to_string()
}

impl From<ShoppingItemParam> for ShoppingItem {
    fn from(p: ShoppingItemParam) -> Self {
        ShoppingItem {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            unit: p.unit,
            category: p.category,
            checked: p.checked,
            note: p.note,
            sort_order: p.sort_order,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindDuplicatesParams {
    /// Name of the entry about to be added
    pub name: String,
    /// Quantity of the new entry, for the merge preview
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit of the new entry, for the merge preview
    #[serde(default)]
    pub unit: Option<String>,
    /// Current list to check against
    pub items: Vec<ShoppingItemParam>,
    /// Similarity cutoff in [0, 1]; defaults to the service threshold
    #[serde(default)]
    pub threshold: Option<f64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl GrocerService {
    // --- Status ---

    #[tool(description = "Get the current status of the grocer service including build info, engine counts, and process information")]
    fn grocer_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for building a shopping list. Call this when starting a list-building session or when unsure how to use the grocer tools.")]
    fn list_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::LIST_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(LIST_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "Convert a quantity between two units of the same kind (weight, volume, or length). Count units like piece or dozen cannot be converted.")]
    fn convert_quantity(&self, Parameters(p): Parameters<ConvertQuantityParams>) -> Result<CallToolResult, McpError> {
        let json = match units::convert_quantity(p.value, &p.from_unit, &p.to_unit) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get up to 3 alternate-unit values for a quantity, ready for display (e.g. 2 lb also equals 907.2 g, 0.91 kg, 32.0 oz)")]
    fn suggest_conversions(&self, Parameters(p): Parameters<SuggestConversionsParams>) -> Result<CallToolResult, McpError> {
        let json = match units::suggest_conversions(&p.unit, p.value) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List every known unit, grouped by category (weight, volume, length, count) with display labels and icons")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        let result = units::list_units();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Suggest up to 3 sensible units for an item name (e.g. lb/kg/oz for meats, cup/ml for liquids)")]
    fn suggest_units(&self, Parameters(p): Parameters<SuggestUnitsParams>) -> Result<CallToolResult, McpError> {
        let json = match units::suggest_units(&p.item_name) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Parse a raw entry like '2 lb ground beef' into name, quantity, and unit, with category and unit suggestions for pre-filling the entry form")]
    fn parse_item(&self, Parameters(p): Parameters<ParseItemParams>) -> Result<CallToolResult, McpError> {
        let json = match units::parse_item(&p.input) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Categories ---

    #[tool(description = "Detect the store category for an item name (Produce, Meat & Seafood, Dairy & Eggs, ...) with a confidence score and ranked alternatives")]
    fn categorize_item(&self, Parameters(p): Parameters<CategorizeItemParams>) -> Result<CallToolResult, McpError> {
        let json = match category::categorize_item(&p.item_name) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Detect store categories for a whole list of item names in one call")]
    fn categorize_items(&self, Parameters(p): Parameters<CategorizeItemsParams>) -> Result<CallToolResult, McpError> {
        let json = match category::categorize_items(&p.items) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Duplicates ---

    #[tool(description = "Check a new entry name against the current list for likely duplicates before adding it. Matches include a merged-quantity preview when units line up.")]
    fn find_duplicates(&self, Parameters(p): Parameters<FindDuplicatesParams>) -> Result<CallToolResult, McpError> {
        let items: Vec<ShoppingItem> = p.items.into_iter().map(ShoppingItem::from).collect();
        let threshold = p.threshold.unwrap_or(self.duplicate_threshold);
        let json = match dedupe::find_duplicate_items(&p.name, p.quantity, p.unit.as_deref(), &items, threshold) {
            Ok(result) => serde_json::to_string_pretty(&result),
            Err(message) => Ok(format!(r#"{{"error": "{}"}}"#, message)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for GrocerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "grocer".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Grocer Shopping List Helper".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Grocer - Shopping-list helper for unit conversion, store categories, and duplicate detection. \
                 IMPORTANT: Call list_instructions when starting a list-building session. \
                 Units: convert_quantity/suggest_conversions/list_units/suggest_units. \
                 Entry parsing: parse_item splits '2 lb ground beef' into quantity/unit/name with suggestions. \
                 Categories: categorize_item/categorize_items. \
                 Duplicates: find_duplicates (pass the current list items; check before every insert). \
                 Status: grocer_status."
                    .into(),
            ),
        }
    }
}
