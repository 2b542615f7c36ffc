//! Status styling
//!
//! Presentation attributes for table occupancy states. Rendering only;
//! transitions between states are owned by the backend.

use ratatui::style::{Color, Modifier, Style};
use shared::TableStatus;

/// Presentation attributes for one occupancy state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTheme {
    /// Card border tint
    pub card: Style,
    /// Status label tint
    pub label: Style,
    /// Short status label shown on the card
    pub label_text: &'static str,
}

/// Total mapping from occupancy state to presentation.
///
/// Each real status gets a distinct pair; `Unknown` takes an explicit
/// fallback theme rather than borrowing another status' look.
pub fn status_theme(status: TableStatus) -> StatusTheme {
    match status {
        TableStatus::Free => StatusTheme {
            card: Style::default().fg(Color::Green),
            label: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            label_text: "FREE",
        },
        TableStatus::Reserved => StatusTheme {
            card: Style::default().fg(Color::Yellow),
            label: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            label_text: "RESERVED",
        },
        TableStatus::Occupied => StatusTheme {
            card: Style::default().fg(Color::Red),
            label: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            label_text: "OCCUPIED",
        },
        TableStatus::Combined => StatusTheme {
            card: Style::default().fg(Color::Blue),
            label: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            label_text: "COMBINED",
        },
        TableStatus::Unknown => StatusTheme {
            card: Style::default().fg(Color::Magenta),
            label: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::REVERSED),
            label_text: "UNKNOWN",
        },
    }
}
