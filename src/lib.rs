//! Grocer Library
//!
//! Core functionality for shopping-list unit conversion, store category
//! detection, and duplicate detection.

pub mod build_info;
pub mod category;
pub mod dedupe;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod units;
