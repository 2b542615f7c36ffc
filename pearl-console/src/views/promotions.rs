//! Active promotions view
//!
//! One table row per bundled item, repeating the promotion's fields.

use pearl_client::FetchState;
use ratatui::prelude::*;
use shared::Promotion;

use super::list::{ListSpec, render_remote_list};

const LIST_SPEC: ListSpec = ListSpec {
    title: " Active Promotions ",
    idle_message: "Promotions not loaded",
    empty_message: "No active promotions available",
    header: &["Promotion", "Description", "Window", "Price", "Item", "Qty"],
    widths: &[
        Constraint::Percentage(18),
        Constraint::Percentage(24),
        Constraint::Length(23),
        Constraint::Length(8),
        Constraint::Percentage(20),
        Constraint::Length(4),
    ],
};

/// Flatten a promotion into one row per bundled item.
pub fn promotion_rows(promotion: &Promotion) -> Vec<Vec<String>> {
    let description = promotion.description.clone().unwrap_or_else(|| "-".into());
    let window = format!(
        "{} - {}",
        promotion.start_date.format("%Y-%m-%d"),
        promotion.end_date.format("%Y-%m-%d"),
    );
    promotion
        .items
        .iter()
        .map(|item| {
            vec![
                promotion.name.clone(),
                description.clone(),
                window.clone(),
                promotion.price.to_string(),
                item.menu_item.name.clone(),
                item.quantity.to_string(),
            ]
        })
        .collect()
}

pub fn render(f: &mut Frame, area: Rect, state: &FetchState<Vec<Promotion>>) {
    render_remote_list(f, area, &LIST_SPEC, state, promotion_rows);
}
