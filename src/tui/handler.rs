//! Async event handler for the playground TUI.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::catalog::CatalogEntry;
use crate::config::Config;
use crate::engine::{self, ExecutionLimits};
use crate::utils::save_snippet;

use super::{
    app::{App, RunState, View},
    events::TuiEvent,
    ui::render_ui,
};

/// Run the playground TUI, optionally preloaded with a catalog entry.
/// `limits` already carries any CLI overrides on top of the config.
pub async fn run_playground(
    preload: Option<&CatalogEntry>,
    limits: ExecutionLimits,
    cfg: &Config,
) -> Result<()> {
    // Check if we're in a proper terminal environment
    if !io::IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!("TUI mode requires a proper terminal environment"));
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(preload, cfg.tab_width());
    let save_dir = cfg.snippet_save_path();

    // Create event channels
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TuiEvent>();

    // Main event loop
    let result = run_app(&mut terminal, &mut app, limits, save_dir, event_tx, event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    limits: ExecutionLimits,
    save_dir: Option<std::path::PathBuf>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    mut event_rx: mpsc::UnboundedReceiver<TuiEvent>,
) -> Result<()> {
    // Spawn input handler
    let input_tx = event_tx.clone();
    tokio::task::spawn_blocking(move || {
        loop {
            // Poll for keyboard events
            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if input_tx.send(TuiEvent::Key(key)).is_err() {
                        break; // Channel closed
                    }
                }
            }
        }
    });

    loop {
        // Render UI
        terminal.draw(|frame| render_ui(frame, app))?;

        // Handle events
        if let Ok(tui_event) = event_rx.try_recv() {
            match tui_event {
                TuiEvent::Key(key) => {
                    if handle_key_event(app, key, save_dir.as_deref(), event_tx.clone())? {
                        break; // Quit requested
                    }
                }
                TuiEvent::ExecuteSnippet(source) => {
                    // Evaluation can spin on user code, keep it off the
                    // event-loop thread.
                    let tx = event_tx.clone();
                    tokio::task::spawn_blocking(move || {
                        let outcome = engine::execute_with_limits(&source, &limits);
                        let _ = tx.send(TuiEvent::RunFinished(outcome));
                    });
                }
                TuiEvent::RunFinished(outcome) => {
                    app.finish_run(&outcome);
                }
                TuiEvent::Quit => break,
            }
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(16)).await; // ~60 FPS
    }

    Ok(())
}

/// Handle keyboard events. Returns true when the application should quit.
fn handle_key_event(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    save_dir: Option<&std::path::Path>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) -> Result<bool> {
    // Help overlay swallows every key except its own toggle
    if app.show_help && key.code != KeyCode::F(1) {
        app.toggle_help();
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.handle_ctrl_c() {
                return Ok(true);
            }
            return Ok(false);
        }
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(false);
        }
        _ => {}
    }

    match app.view {
        View::Library => handle_library_key(app, key),
        View::Editor => handle_editor_key(app, key, save_dir, event_tx),
    }

    Ok(false)
}

fn handle_library_key(app: &mut App, key: crossterm::event::KeyEvent) {
    match key.code {
        KeyCode::Up => app.prev_entry(),
        KeyCode::Down => app.next_entry(),
        KeyCode::Left => app.prev_section(),
        KeyCode::Right | KeyCode::Tab => app.next_section(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Esc => app.to_editor(),
        _ => {}
    }
}

fn handle_editor_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
    save_dir: Option<&std::path::Path>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('r') if ctrl => {
            if let Some(source) = app.begin_run() {
                let _ = event_tx.send(TuiEvent::ExecuteSnippet(source));
            }
        }
        KeyCode::Char('l') if ctrl => app.clear_output(),
        KeyCode::Char('s') if ctrl => match save_snippet(&app.source(), save_dir) {
            Ok(path) => app.status_message = format!("Saved to {}", path.display()),
            Err(e) => app.status_message = format!("Save failed: {}", e),
        },
        KeyCode::Esc => {
            if app.run_state == RunState::Idle {
                app.back_to_library();
            }
        }
        KeyCode::Enter => app.insert_newline(),
        KeyCode::Tab => app.insert_indent(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Up => app.move_cursor_up(),
        KeyCode::Down => app.move_cursor_down(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        KeyCode::Char(c) if !ctrl => app.insert_char(c),
        _ => {}
    }
}
