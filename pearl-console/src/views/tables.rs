//! Table status view
//!
//! Renders the dining floor as a card grid, one card per table, tinted
//! by occupancy state. The view never performs a state transition; the
//! action keys only invoke the externally supplied callbacks and the
//! backend decides what actually happens to the table.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use shared::DiningTable;

use super::theme::status_theme;

/// Externally supplied table-management callbacks.
///
/// The backend owns the occupancy cycle (free -> reserved -> occupied ->
/// free, plus combine and clear); these hooks forward the operator's
/// intent to whoever performs the mutation.
pub trait TableActions: Send + Sync {
    /// Book a free table or seat a reserved one
    fn on_table_action(&self, table: &DiningTable);
    /// Clear an occupied or combined table back to free
    fn on_clear_table(&self, table: &DiningTable);
    /// Merge this table into a combined group
    fn on_table_combine(&self, table: &DiningTable);
}

/// Cards per grid row
pub const GRID_COLS: usize = 4;

const CARD_HEIGHT: u16 = 6;

/// Text lines of one table card, status label first.
pub fn card_lines(table: &DiningTable) -> Vec<String> {
    let theme = status_theme(table.status);
    let mut lines = vec![
        theme.label_text.to_string(),
        format!("{} seats", table.seats),
    ];
    if let Some(name) = &table.customer_name {
        lines.push(name.clone());
    }
    if let Some(count) = table.customer_count {
        lines.push(format!("{} guests", count));
    }
    if let Some(time) = table.time {
        lines.push(time.format("%H:%M").to_string());
    }
    lines
}

pub fn render(f: &mut Frame, area: Rect, tables: &[DiningTable], selected: usize) {
    let block = Block::default().borders(Borders::ALL).title(" Tables ");

    if tables.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No tables configured",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let grid_rows = tables.len().div_ceil(GRID_COLS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); grid_rows])
        .split(inner);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLS as u32); GRID_COLS])
            .split(*row_area);

        for (col_idx, col_area) in col_areas.iter().enumerate() {
            let idx = row_idx * GRID_COLS + col_idx;
            let Some(table) = tables.get(idx) else {
                break;
            };
            render_card(f, *col_area, table, idx == selected);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, table: &DiningTable, selected: bool) {
    let theme = status_theme(table.status);

    let mut card = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.card)
        .title(format!(" T{} ", table.number));
    if selected {
        card = card
            .border_type(BorderType::Thick)
            .title_style(Style::default().add_modifier(Modifier::BOLD));
    }

    let lines: Vec<Line> = card_lines(table)
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            if i == 0 {
                Line::from(Span::styled(text, theme.label))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(card);
    f.render_widget(paragraph, area);
}
