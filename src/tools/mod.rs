//! Grocer tools module
//!
//! MCP tool implementations for the grocer service.

pub mod category;
pub mod dedupe;
pub mod status;
pub mod units;
