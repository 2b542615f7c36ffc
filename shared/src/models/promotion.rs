//! Promotion Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Promotion entity (a bundled offer valid for a date window)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    /// Always >= start_date (backend invariant)
    pub end_date: DateTime<Utc>,
    /// Bundle price in currency units
    pub price: Decimal,
    /// Included items, in backend display order
    pub items: Vec<PromotionItem>,
}

/// Menu item line inside a promotion bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionItem {
    pub menu_item: MenuItemRef,
    /// Always >= 1
    pub quantity: u32,
}

/// Reference to a menu item by name, as embedded by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRef {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_promotions() {
        let body = r#"[{
            "id": 7,
            "name": "Lunch Combo",
            "description": "Weekday lunch deal",
            "startDate": "2026-08-01T00:00:00Z",
            "endDate": "2026-08-31T23:59:59Z",
            "price": 12.5,
            "items": [
                {"menuItem": {"name": "Burger"}, "quantity": 1},
                {"menuItem": {"name": "Fries"}, "quantity": 2}
            ]
        }]"#;

        let promotions: Vec<Promotion> = serde_json::from_str(body).unwrap();
        assert_eq!(promotions.len(), 1);

        let promo = &promotions[0];
        assert_eq!(promo.name, "Lunch Combo");
        assert_eq!(promo.description.as_deref(), Some("Weekday lunch deal"));
        assert!(promo.end_date >= promo.start_date);
        assert_eq!(promo.items.len(), 2);
        assert_eq!(promo.items[0].menu_item.name, "Burger");
        assert_eq!(promo.items[1].quantity, 2);
    }

    #[test]
    fn test_decode_promotion_without_description() {
        let body = r#"[{
            "id": 8,
            "name": "Happy Hour",
            "description": null,
            "startDate": "2026-08-01T16:00:00Z",
            "endDate": "2026-08-01T18:00:00Z",
            "price": 5,
            "items": []
        }]"#;

        let promotions: Vec<Promotion> = serde_json::from_str(body).unwrap();
        assert!(promotions[0].description.is_none());
        assert!(promotions[0].items.is_empty());
    }
}
