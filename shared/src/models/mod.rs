//! Data models
//!
//! Shared between pearl-client and the console views.
//! The backend serializes JSON field names in camelCase, so every wire
//! type carries `#[serde(rename_all = "camelCase")]`.

pub mod dining_table;
pub mod menu_option;
pub mod promotion;

// Re-exports
pub use dining_table::*;
pub use menu_option::*;
pub use promotion::*;
