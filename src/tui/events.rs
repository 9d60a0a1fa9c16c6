//! Custom event types for the TUI application.

use crossterm::event::KeyEvent;

use crate::engine::ExecutionOutcome;

/// Events that can occur in the TUI application
#[derive(Debug)]
pub enum TuiEvent {
    /// User keyboard input
    Key(KeyEvent),
    /// Request to execute the given source in the sandbox
    ExecuteSnippet(String),
    /// Sandbox run completed
    RunFinished(ExecutionOutcome),
    /// Request to quit the application
    Quit,
}
