//! Console application state
//!
//! Holds the active tab, the remote resources behind the fetched views,
//! the floor plan supplied by the shell, and the input/logger widget
//! state. Key handling lives here so the main loop stays a thin
//! poll-and-draw shell.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent};
use pearl_client::{FetchState, HttpClient, RemoteResource};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use shared::{DiningTable, OptionGroup, Promotion};
use tokio::sync::watch;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::views;
use crate::views::tables::{GRID_COLS, TableActions};

/// Active view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tables,
    Menu,
    Promotions,
}

impl Tab {
    fn next(self) -> Self {
        match self {
            Self::Tables => Self::Menu,
            Self::Menu => Self::Promotions,
            Self::Promotions => Self::Tables,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Tables => 0,
            Self::Menu => 1,
            Self::Promotions => 2,
        }
    }
}

/// Current input mode
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Default shell callbacks: forward the operator's intent to the log.
///
/// The real mutation belongs to the backend table-management endpoints;
/// a deployment embeds its own `TableActions` to call them.
pub struct LoggingTableActions;

impl TableActions for LoggingTableActions {
    fn on_table_action(&self, table: &DiningTable) {
        tracing::info!(table = table.number, status = ?table.status, "table action requested");
    }

    fn on_clear_table(&self, table: &DiningTable) {
        tracing::info!(table = table.number, "clear requested");
    }

    fn on_table_combine(&self, table: &DiningTable) {
        tracing::info!(table = table.number, "combine requested");
    }
}

pub struct App {
    pub tab: Tab,
    input: Input,
    input_mode: InputMode,
    menu_options: RemoteResource<i64, Vec<OptionGroup>>,
    menu_rx: watch::Receiver<FetchState<Vec<OptionGroup>>>,
    promotions: RemoteResource<(), Vec<Promotion>>,
    promotions_rx: watch::Receiver<FetchState<Vec<Promotion>>>,
    tables: Vec<DiningTable>,
    selected_table: usize,
    actions: Arc<dyn TableActions>,
    logger_state: TuiWidgetState,
}

impl App {
    /// Build the app and start the promotions fetch.
    ///
    /// The menu options resource stays idle until the operator enters a
    /// menu item id.
    pub fn new(
        client: HttpClient,
        tables: Vec<DiningTable>,
        actions: Arc<dyn TableActions>,
    ) -> Self {
        let menu_client = client.clone();
        let menu_options = RemoteResource::new("menu options", move |menu_item_id: i64| {
            let client = menu_client.clone();
            async move { client.menu_option_groups(menu_item_id).await }
        });
        let menu_rx = menu_options.subscribe();

        let promo_client = client;
        let mut promotions = RemoteResource::new("promotions", move |_key: ()| {
            let client = promo_client.clone();
            async move { client.active_promotions().await }
        });
        let promotions_rx = promotions.subscribe();
        promotions.set_key(Some(()));

        Self {
            tab: Tab::default(),
            input: Input::default(),
            input_mode: InputMode::default(),
            menu_options,
            menu_rx,
            promotions,
            promotions_rx,
            tables,
            selected_table: 0,
            actions,
            logger_state: TuiWidgetState::new(),
        }
    }

    /// The menu item id the options view is bound to, if any
    pub fn menu_item_id(&self) -> Option<i64> {
        self.menu_options.key().copied()
    }

    // ========== Input ==========

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => {
                self.handle_editing_key(key);
                false
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('1') => self.tab = Tab::Tables,
            KeyCode::Char('2') => self.tab = Tab::Menu,
            KeyCode::Char('3') => self.tab = Tab::Promotions,
            KeyCode::Char('r') => self.refetch_active(),
            KeyCode::Char('e') if self.tab == Tab::Menu => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
                if self.tab == Tab::Tables =>
            {
                self.move_selection(key.code);
            }
            KeyCode::Up => self.logger_state.transition(TuiWidgetEvent::UpKey),
            KeyCode::Down => self.logger_state.transition(TuiWidgetEvent::DownKey),
            KeyCode::Char('a') if self.tab == Tab::Tables => {
                if let Some(table) = self.tables.get(self.selected_table) {
                    self.actions.on_table_action(table);
                }
            }
            KeyCode::Char('c') if self.tab == Tab::Tables => {
                if let Some(table) = self.tables.get(self.selected_table) {
                    self.actions.on_clear_table(table);
                }
            }
            KeyCode::Char('m') if self.tab == Tab::Tables => {
                if let Some(table) = self.tables.get(self.selected_table) {
                    self.actions.on_table_combine(table);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let raw = self.input.value().trim().to_string();
                if raw.is_empty() {
                    self.menu_options.set_key(None);
                } else {
                    match raw.parse::<i64>() {
                        Ok(id) => self.menu_options.set_key(Some(id)),
                        Err(_) => tracing::warn!("Not a menu item id: {}", raw),
                    }
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn refetch_active(&mut self) {
        match self.tab {
            Tab::Tables => {
                tracing::info!("table list is supplied by the shell; nothing to refetch")
            }
            Tab::Menu => self.menu_options.refetch(),
            Tab::Promotions => self.promotions.refetch(),
        }
    }

    fn move_selection(&mut self, code: KeyCode) {
        if self.tables.is_empty() {
            return;
        }
        let last = self.tables.len() - 1;
        self.selected_table = match code {
            KeyCode::Left => self.selected_table.saturating_sub(1),
            KeyCode::Right => (self.selected_table + 1).min(last),
            KeyCode::Up => self.selected_table.saturating_sub(GRID_COLS),
            KeyCode::Down => (self.selected_table + GRID_COLS).min(last),
            _ => self.selected_table,
        };
    }

    // ========== Rendering ==========

    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(1),    // Active view
                Constraint::Length(8), // Logs
                Constraint::Length(3), // Input / hints
            ])
            .split(f.area());

        self.draw_tabs(f, chunks[0]);
        match self.tab {
            Tab::Tables => {
                views::tables::render(f, chunks[1], &self.tables, self.selected_table)
            }
            Tab::Menu => views::menu_options::render(f, chunks[1], &self.menu_rx.borrow()),
            Tab::Promotions => {
                views::promotions::render(f, chunks[1], &self.promotions_rx.borrow())
            }
        }
        self.draw_logs(f, chunks[2]);
        self.draw_input(f, chunks[3]);
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let tabs = Tabs::new(vec!["1 Tables", "2 Menu", "3 Promotions"])
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Pearl Front of House "),
            );
        f.render_widget(tabs, area);
    }

    fn draw_logs(&self, f: &mut Frame, area: Rect) {
        let logs = TuiLoggerWidget::default()
            .block(Block::default().borders(Borders::ALL).title(" Logs "))
            .output_separator('|')
            .output_timestamp(Some("%H:%M:%S".to_string()))
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .style(Style::default().fg(Color::White))
            .state(&self.logger_state);
        f.render_widget(logs, area);
    }

    fn draw_input(&self, f: &mut Frame, area: Rect) {
        let (title, style) = match (self.tab, self.input_mode) {
            (Tab::Menu, InputMode::Editing) => (
                " Menu Item Id (Enter to apply, Esc to cancel) ",
                Style::default().fg(Color::Yellow),
            ),
            (Tab::Menu, InputMode::Normal) => (
                " Menu Item Id ('e' to edit, 'r' to refetch) ",
                Style::default().fg(Color::Gray),
            ),
            (Tab::Tables, _) => (
                " arrows: select | a: book/seat | c: clear | m: combine ",
                Style::default().fg(Color::Gray),
            ),
            _ => (
                " 'r' to refetch | PgUp/PgDn: logs | 'q' to quit ",
                Style::default().fg(Color::Gray),
            ),
        };

        let block = Block::default().borders(Borders::ALL).title(title);
        let width = area.width.max(3) - 3;
        let scroll = self.input.visual_scroll(width as usize);
        let input = Paragraph::new(self.input.value())
            .style(style)
            .scroll((0, scroll as u16))
            .block(block);
        f.render_widget(input, area);

        if self.tab == Tab::Menu && self.input_mode == InputMode::Editing {
            f.set_cursor_position((
                area.x + ((self.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                area.y + 1,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pearl_client::ClientConfig;
    use shared::TableStatus;
    use std::sync::Mutex;

    struct RecordingActions {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingActions {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl TableActions for RecordingActions {
        fn on_table_action(&self, table: &DiningTable) {
            self.calls.lock().unwrap().push(format!("action:{}", table.number));
        }

        fn on_clear_table(&self, table: &DiningTable) {
            self.calls.lock().unwrap().push(format!("clear:{}", table.number));
        }

        fn on_table_combine(&self, table: &DiningTable) {
            self.calls.lock().unwrap().push(format!("combine:{}", table.number));
        }
    }

    fn floor() -> Vec<DiningTable> {
        (1..=6)
            .map(|n| DiningTable {
                id: n,
                number: n as i32,
                status: TableStatus::Free,
                seats: 4,
                customer_name: None,
                customer_count: None,
                time: None,
            })
            .collect()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app(actions: Arc<dyn TableActions>) -> App {
        let client = ClientConfig::new("http://127.0.0.1:1").build_http_client();
        App::new(client, floor(), actions)
    }

    #[tokio::test]
    async fn test_tab_switching() {
        let mut app = test_app(RecordingActions::new());
        assert_eq!(app.tab, Tab::Tables);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Menu);
        app.handle_key(press(KeyCode::Char('3')));
        assert_eq!(app.tab, Tab::Promotions);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Tables);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = test_app(RecordingActions::new());
        assert!(app.handle_key(press(KeyCode::Char('q'))));
        assert!(app.handle_key(press(KeyCode::Esc)));
        assert!(!app.handle_key(press(KeyCode::Char('x'))));
    }

    #[tokio::test]
    async fn test_selection_stays_in_bounds() {
        let mut app = test_app(RecordingActions::new());

        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.selected_table, 0);

        for _ in 0..10 {
            app.handle_key(press(KeyCode::Right));
        }
        assert_eq!(app.selected_table, 5);

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_table, 1);
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_table, 5);
    }

    #[tokio::test]
    async fn test_action_keys_invoke_callbacks_only() {
        let actions = RecordingActions::new();
        let mut app = test_app(actions.clone());

        app.handle_key(press(KeyCode::Char('a')));
        app.handle_key(press(KeyCode::Char('c')));
        app.handle_key(press(KeyCode::Char('m')));

        assert_eq!(actions.calls(), vec!["action:1", "clear:1", "combine:1"]);
        // Display state is untouched; the backend owns transitions
        assert_eq!(app.tables[0].status, TableStatus::Free);
    }

    #[tokio::test]
    async fn test_entering_menu_item_id_binds_the_key() {
        let mut app = test_app(RecordingActions::new());
        assert_eq!(app.menu_item_id(), None);

        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Char('4')));
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.menu_item_id(), Some(42));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_empty_menu_item_id_goes_idle() {
        let mut app = test_app(RecordingActions::new());

        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Char('e')));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.menu_item_id(), None);
        assert!(matches!(app.menu_options_state(), FetchState::Idle));
    }

    impl App {
        fn menu_options_state(&self) -> FetchState<Vec<OptionGroup>> {
            self.menu_rx.borrow().clone()
        }
    }
}
