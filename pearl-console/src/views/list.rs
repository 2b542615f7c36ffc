//! Generic remote-list rendering
//!
//! Every fetched view goes through the same cycle: loading placeholder,
//! error banner, empty-state message, or a table with one row per leaf
//! element. Branch selection is a pure function so the cycle can be
//! tested without a terminal.

use pearl_client::FetchState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

/// The exclusive render branches of a remote list.
///
/// `Empty` applies only when the *outer* sequence is empty; a non-empty
/// sequence whose elements flatten to zero rows still renders as `Rows`
/// (a header-only table).
#[derive(Debug, PartialEq)]
pub enum ListBranch<'a, T> {
    /// No dependency key bound yet
    Idle,
    Loading,
    /// Holds the stored failure summary, shown verbatim
    Failed(&'a str),
    Empty,
    Rows(&'a [T]),
}

impl<'a, T> ListBranch<'a, T> {
    /// Select exactly one branch for a fetch state.
    pub fn of(state: &'a FetchState<Vec<T>>) -> Self {
        match state {
            FetchState::Idle => Self::Idle,
            FetchState::Loading => Self::Loading,
            FetchState::Failed(message) => Self::Failed(message.as_str()),
            FetchState::Loaded(items) if items.is_empty() => Self::Empty,
            FetchState::Loaded(items) => Self::Rows(items.as_slice()),
        }
    }
}

/// Static description of a view's table shape.
pub struct ListSpec {
    pub title: &'static str,
    pub idle_message: &'static str,
    pub empty_message: &'static str,
    pub header: &'static [&'static str],
    pub widths: &'static [Constraint],
}

/// Render a fetch state as a bordered table or placeholder.
///
/// `rows` flattens one source element into zero or more rows of cells,
/// repeating the element's shared fields per row; element and row order
/// are preserved as given.
pub fn render_remote_list<T>(
    f: &mut Frame,
    area: Rect,
    spec: &ListSpec,
    state: &FetchState<Vec<T>>,
    rows: impl Fn(&T) -> Vec<Vec<String>>,
) {
    let block = Block::default().borders(Borders::ALL).title(spec.title);

    match ListBranch::of(state) {
        ListBranch::Idle => {
            render_placeholder(f, area, block, spec.idle_message, hint_style());
        }
        ListBranch::Loading => {
            render_placeholder(f, area, block, "Loading...", loading_style());
        }
        ListBranch::Failed(message) => {
            render_placeholder(f, area, block, message, error_style());
        }
        ListBranch::Empty => {
            render_placeholder(f, area, block, spec.empty_message, hint_style());
        }
        ListBranch::Rows(items) => {
            let body: Vec<Row> = items
                .iter()
                .flat_map(|item| rows(item))
                .map(Row::new)
                .collect();
            let table = Table::new(body, spec.widths.iter().copied())
                .header(
                    Row::new(spec.header.iter().copied())
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .block(block)
                .column_spacing(1);
            f.render_widget(table, area);
        }
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, block: Block, message: &str, style: Style) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn loading_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
