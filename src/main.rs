//! yt-lookup - terminal client for searching YouTube and looking up videos by URL.
//!
//! Main entry point and event loop for the application.

mod app;
mod browser;
mod config;
mod error;
mod format;
mod logging;
mod ui;
mod youtube;

use app::{App, Outcome, Tab, UiMode};
use browser::open_in_browser;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use youtube::YouTubeClient;

const HELP_TEXT: &str =
    "q quit | Tab switch tab | / edit | Enter submit/open | o open | j/k move";

/// Main application entry point.
///
/// # Details
/// Loads configuration, installs logging, resolves the API key and runs the
/// event loop. A missing API key is not fatal: it is reported in the error
/// banner when a lookup is attempted.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_config_path()?;
    let config = Config::load(Some(&config_path))?;
    logging::init(&config.log_file_path()?)?;

    if !config_path.exists() {
        let template = Config {
            api_key: config::PLACEHOLDER_API_KEY.to_string(),
            ..Config::default()
        };
        match template.save(Some(&config_path)) {
            Ok(()) => tracing::info!(path = %config_path.display(), "wrote config template"),
            Err(e) => tracing::warn!(error = %e, "failed to write config template"),
        }
    }

    let youtube_client = YouTubeClient::new(&config)?;
    let mut app = App::new();
    if !youtube_client.is_configured() {
        tracing::warn!("no API key configured");
        app.set_status(format!(
            "No API key configured. Edit {} or set {}",
            config_path.display(),
            config::API_KEY_ENV
        ));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, youtube_client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Split the frame into tabs, input, error banner, body and status bar.
fn layout(area: Rect, app: &App) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Tabs
            Constraint::Length(3),                          // Input
            Constraint::Length(ui::banner::banner_height(app)), // Error banner
            Constraint::Min(0),                             // Results
            Constraint::Length(3),                          // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Render the complete UI.
fn render_ui(f: &mut Frame, app: &App) {
    let [tabs, input, banner, body, status] = layout(f.area(), app);

    ui::render_tabs(app, tabs, f.buffer_mut());
    ui::render_input(app, input, f.buffer_mut());
    ui::render_banner(app, banner, f.buffer_mut());
    match app.active_tab {
        Tab::Search => ui::render_list(app, body, f.buffer_mut()),
        Tab::Url => ui::render_detail(app, body, f.buffer_mut()),
    }

    let status_text = app.status_message.as_deref().unwrap_or(HELP_TEXT);
    let status_bar = Paragraph::new(Line::from(status_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_bar, status);
}

/// Main event loop.
///
/// # Details
/// Polls input with a short timeout so finished lookups arriving on the
/// outcome channel are drawn promptly.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: YouTubeClient,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    loop {
        drain_outcomes(&mut rx, app);
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(key, app, &client, &tx) == Flow::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(
    key: KeyEvent,
    app: &mut App,
    client: &YouTubeClient,
    tx: &UnboundedSender<Outcome>,
) -> Flow {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Flow::Quit;
    }

    match app.mode {
        UiMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Tab | KeyCode::BackTab => app.toggle_tab(),
            KeyCode::Char('/') | KeyCode::Char('i') => app.mode = UiMode::Editing,
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Enter | KeyCode::Char('o') => open_selected(app),
            _ => {}
        },
        UiMode::Editing => match key.code {
            KeyCode::Enter => {
                app.mode = UiMode::Normal;
                submit(app, client, tx);
            }
            KeyCode::Esc => app.mode = UiMode::Normal,
            KeyCode::Tab | KeyCode::BackTab => app.toggle_tab(),
            KeyCode::Backspace => app.remove_input_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.clear_input()
            }
            KeyCode::Char(c) => app.add_input_char(c),
            _ => {}
        },
    }
    Flow::Continue
}

/// Start the lookup of the active tab on a background task.
///
/// # Details
/// The task reports back through `tx` with the sequence number handed out
/// by the app, so a superseded request cannot overwrite newer results.
fn submit(app: &mut App, client: &YouTubeClient, tx: &UnboundedSender<Outcome>) {
    let client = client.clone();
    let tx = tx.clone();

    match app.active_tab {
        Tab::Search => {
            let seq = app.begin_search();
            let query = app.search_query.clone();
            tracing::debug!(seq, "starting search");
            tokio::spawn(async move {
                let result = client.search_by_keyword(&query).await;
                let _ = tx.send(Outcome::Search { seq, result });
            });
        }
        Tab::Url => {
            let seq = app.begin_lookup();
            let url = app.url_query.clone();
            tracing::debug!(seq, "starting url lookup");
            tokio::spawn(async move {
                let result = client.lookup_by_url(&url).await;
                let _ = tx.send(Outcome::Lookup { seq, result });
            });
        }
    }
}

fn drain_outcomes(rx: &mut UnboundedReceiver<Outcome>, app: &mut App) {
    while let Ok(outcome) = rx.try_recv() {
        app.apply_outcome(outcome);
    }
}

fn open_selected(app: &mut App) {
    let Some(video) = app.selected_video() else {
        return;
    };
    let url = video.url();
    let title = video.snippet.title.clone();
    match open_in_browser(&url) {
        Ok(()) => app.set_status(format!("Opened: {}", title)),
        Err(e) => {
            tracing::warn!(error = %e, "failed to open browser");
            app.set_status(format!("Failed to open video: {}", e));
        }
    }
}

/// Handle mouse scroll over the result list.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App) {
    if app.mode != UiMode::Normal || app.active_tab != Tab::Search {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        _ => {}
    }
}
