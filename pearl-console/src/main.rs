//! Pearl Console - front-of-house terminal
//!
//! Run: cargo run --bin pearl-console

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use pearl_client::ClientConfig;
use ratatui::prelude::*;
use shared::{DiningTable, TableStatus};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod views;

use app::{App, LoggingTableActions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Route tracing into the in-UI log pane
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = ClientConfig::from_env();
    tracing::info!("Pearl console connecting to {}", config.base_url);
    if config.token.is_none() {
        tracing::warn!("PEARL_API_TOKEN not set; menu options require authentication");
    }
    let client = config.build_http_client();

    let tables = load_tables();
    let mut app = App::new(client, tables, Arc::new(LoggingTableActions));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let pressed = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
                if pressed && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Load the floor plan the shell hands to the table view.
///
/// `PEARL_TABLES_FILE` points at a JSON array of tables; without it the
/// console runs on the built-in demo floor.
fn load_tables() -> Vec<DiningTable> {
    let path = match std::env::var("PEARL_TABLES_FILE") {
        Ok(path) => path,
        Err(_) => return demo_floor(),
    };

    match std::fs::read_to_string(&path) {
        Ok(body) => match serde_json::from_str(&body) {
            Ok(tables) => tables,
            Err(e) => {
                tracing::error!("Invalid tables file {}: {}", path, e);
                demo_floor()
            }
        },
        Err(e) => {
            tracing::error!("Cannot read tables file {}: {}", path, e);
            demo_floor()
        }
    }
}

fn demo_floor() -> Vec<DiningTable> {
    let table = |id: i64, number: i32, status: TableStatus, seats: u32| DiningTable {
        id,
        number,
        status,
        seats,
        customer_name: None,
        customer_count: None,
        time: None,
    };

    let mut floor = vec![
        table(1, 1, TableStatus::Free, 4),
        table(2, 2, TableStatus::Reserved, 2),
        table(3, 3, TableStatus::Occupied, 6),
        table(4, 4, TableStatus::Free, 2),
        table(5, 5, TableStatus::Combined, 8),
        table(6, 6, TableStatus::Occupied, 4),
        table(7, 7, TableStatus::Free, 4),
        table(8, 8, TableStatus::Reserved, 6),
    ];
    floor[1].customer_name = Some("Rossi".to_string());
    floor[2].customer_name = Some("Chen".to_string());
    floor[2].customer_count = Some(5);
    floor
}
