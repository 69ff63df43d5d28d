//! Data models
//!
//! Rust structs for the entities the tools exchange.

mod shopping_item;

pub use shopping_item::ShoppingItem;
