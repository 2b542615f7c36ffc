//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Occupancy state of a dining table.
///
/// Transitions are owned by the backend; clients only display the current
/// value. A wire value outside the enumeration decodes to `Unknown` so a
/// bad payload degrades to the explicit fallback rendering instead of
/// rejecting the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Free,
    Reserved,
    Occupied,
    Combined,
    #[serde(other)]
    Unknown,
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: i64,
    pub number: i32,
    pub status: TableStatus,
    /// Always >= 1
    pub seats: u32,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_count: Option<u32>,
    /// Reservation or seating time, when applicable
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}
