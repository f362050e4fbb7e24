//! Activity marketplace terminal front end
//!
//! Run: cargo run -p market-tui
//! Configure with MARKETPLACE_API_URL (or a .env file).

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use market_client::HttpMarketClient;
use market_tui::app::App;
use market_tui::{Config, ViewController, ViewEvent, ui};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to the log pane, never to the terminal directly
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let config = Config::from_env();
    let client = HttpMarketClient::new(&config.client).context("failed to build HTTP client")?;
    let api_url = client.api_url().to_string();
    tracing::info!(api_url = %api_url, user_id = config.user_id, "Starting marketplace front end");

    let (controller, mut rx) = ViewController::new(Arc::new(client), config.user_id);
    let mut app = App::new(controller, api_url);
    app.controller.mount();

    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    let res = run_app(&mut terminal, &mut app, &mut rx).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

/// Enter raw mode and the alternate screen. Undone again if any step fails.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let terminal = execute!(stdout, EnterAlternateScreen)
        .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)));
    restore_on_error(terminal, || {
        let _ = restore_terminal();
    })
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<HttpMarketClient>,
    rx: &mut UnboundedReceiver<ViewEvent>,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Key input, with a short tick so completions show up promptly
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.on_key(key);
        }
        if app.should_quit {
            return Ok(());
        }

        while let Ok(event) = rx.try_recv() {
            app.on_event(event);
        }

        // Let spawned requests make progress between frames
        tokio::task::yield_now().await;
    }
}
