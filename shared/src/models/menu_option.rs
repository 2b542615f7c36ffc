//! Menu Option Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option group entity (e.g. "Size", "Toppings" for a menu item)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionGroup {
    pub id: i64,
    pub name: String,
    /// Maximum number of selectable options (0 = unlimited)
    pub max_selections: u32,
    pub is_required: bool,
    /// Embedded options, in backend display order
    pub options: Vec<MenuOption>,
}

/// Single option inside a group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOption {
    pub id: i64,
    pub name: String,
    /// Price surcharge in currency units (never negative)
    pub price: Decimal,
}
