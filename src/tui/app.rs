//! TUI application state management.

use std::time::Instant;

use crate::catalog::{CatalogEntry, Section};
use crate::engine::ExecutionOutcome;

/// Which screen the application is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Catalog browser
    Library,
    /// Code editor with output pane
    Editor,
}

/// Run guard for the editor: a new run is ignored while one is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// A catalog entry handed off to the editor. Consumed exactly once so a
/// later return to the library does not resurrect stale code.
#[derive(Debug, Clone)]
pub struct Handoff {
    pub title: String,
    pub code: String,
}

/// Application state for the TUI
#[derive(Debug)]
pub struct App {
    /// Current screen
    pub view: View,
    /// Editor buffer, one string per line
    pub lines: Vec<String>,
    /// Cursor row into `lines`
    pub cursor_row: usize,
    /// Cursor column as a char offset into the current line
    pub cursor_col: usize,
    /// Run guard state
    pub run_state: RunState,
    /// Captured output from the last run
    pub output: Vec<String>,
    /// Title of the loaded catalog entry, if any
    pub entry_title: Option<String>,
    /// Pending handoff from the library or CLI, consumed on editor entry
    pub handoff: Option<Handoff>,
    /// Selected section index in the library
    pub section_index: usize,
    /// Selected entry index within the section
    pub entry_index: usize,
    /// Status message to display
    pub status_message: String,
    /// Whether to show help
    pub show_help: bool,
    /// Spaces inserted per Tab press
    pub tab_width: usize,
    /// Timestamp of last Ctrl+C press for double Ctrl+C detection
    pub last_ctrl_c_time: Option<Instant>,
}

impl App {
    pub fn new(preload: Option<&CatalogEntry>, tab_width: usize) -> Self {
        let handoff = preload.map(|entry| Handoff {
            title: entry.title.to_string(),
            code: entry.code.to_string(),
        });
        let view = if handoff.is_some() { View::Editor } else { View::Library };

        let mut app = Self {
            view,
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            run_state: RunState::Idle,
            output: Vec::new(),
            entry_title: None,
            handoff,
            section_index: 0,
            entry_index: 0,
            status_message: String::new(),
            show_help: false,
            tab_width: tab_width.max(1),
            last_ctrl_c_time: None,
        };
        app.consume_handoff();
        app.update_status_message();
        app
    }

    /// Apply and clear the pending handoff, if any. Read-once: a second
    /// call is a no-op.
    pub fn consume_handoff(&mut self) {
        if let Some(handoff) = self.handoff.take() {
            self.set_source(&handoff.code);
            self.entry_title = Some(handoff.title);
        }
    }

    /// Replace the editor buffer and reset cursor and output.
    pub fn set_source(&mut self, source: &str) {
        self.lines = if source.is_empty() {
            vec![String::new()]
        } else {
            source.split('\n').map(str::to_string).collect()
        };
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.output.clear();
    }

    /// The full buffer as one source string.
    pub fn source(&self) -> String {
        self.lines.join("\n")
    }

    /// Request a run. Returns the source to execute, or None when a run
    /// is already in flight.
    pub fn begin_run(&mut self) -> Option<String> {
        if self.run_state == RunState::Running {
            self.status_message = "A run is already in progress".to_string();
            return None;
        }
        self.output.clear();
        self.run_state = RunState::Running;
        self.status_message = "Running...".to_string();
        Some(self.source())
    }

    /// Record a finished run and release the guard.
    pub fn finish_run(&mut self, outcome: &ExecutionOutcome) {
        self.output = outcome.display_lines();
        self.run_state = RunState::Idle;
        self.update_status_message();
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    // ----- Editor buffer helpers -----

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map(|l| l.chars().count()).unwrap_or(0)
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let col = self.cursor_col;
        let line = &mut self.lines[self.cursor_row];
        let idx = Self::byte_index(line, col);
        line.insert(idx, c);
        self.cursor_col += 1;
    }

    /// Insert a fixed-width soft tab at the cursor.
    pub fn insert_indent(&mut self) {
        for _ in 0..self.tab_width {
            self.insert_char(' ');
        }
    }

    pub fn insert_newline(&mut self) {
        let col = self.cursor_col;
        let line = &mut self.lines[self.cursor_row];
        let idx = Self::byte_index(line, col);
        let rest = line.split_off(idx);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col - 1;
            let line = &mut self.lines[self.cursor_row];
            let idx = Self::byte_index(line, col);
            line.remove(idx);
            self.cursor_col = col;
        } else if self.cursor_row > 0 {
            // Merge with the previous line
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
            self.lines[self.cursor_row].push_str(&current);
        }
    }

    pub fn delete(&mut self) {
        let col = self.cursor_col;
        if col < self.line_len(self.cursor_row) {
            let line = &mut self.lines[self.cursor_row];
            let idx = Self::byte_index(line, col);
            line.remove(idx);
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_col = self.line_len(self.cursor_row);
    }

    // ----- Library navigation -----

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.section_index]
    }

    pub fn selected_entry(&self) -> &'static CatalogEntry {
        &self.selected_section().entries()[self.entry_index]
    }

    pub fn next_section(&mut self) {
        self.section_index = (self.section_index + 1) % Section::ALL.len();
        self.entry_index = 0;
    }

    pub fn prev_section(&mut self) {
        self.section_index = (self.section_index + Section::ALL.len() - 1) % Section::ALL.len();
        self.entry_index = 0;
    }

    pub fn next_entry(&mut self) {
        let count = self.selected_section().entries().len();
        if self.entry_index + 1 < count {
            self.entry_index += 1;
        }
    }

    pub fn prev_entry(&mut self) {
        if self.entry_index > 0 {
            self.entry_index -= 1;
        }
    }

    /// Load the selected entry into the editor via the handoff slot.
    pub fn open_selected(&mut self) {
        let entry = self.selected_entry();
        self.handoff = Some(Handoff {
            title: entry.title.to_string(),
            code: entry.code.to_string(),
        });
        self.view = View::Editor;
        self.consume_handoff();
        self.update_status_message();
    }

    pub fn back_to_library(&mut self) {
        self.view = View::Library;
        self.update_status_message();
    }

    pub fn to_editor(&mut self) {
        self.view = View::Editor;
        self.update_status_message();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    fn update_status_message(&mut self) {
        self.status_message = match self.view {
            View::Library => "Library: ↑/↓ select, ←/→ section, Enter open | F1 help".to_string(),
            View::Editor => {
                let base = "Editor: ctrl+r run, ctrl+l clear, ctrl+s save, Esc library | F1 help";
                match &self.entry_title {
                    Some(title) => format!("{} | {}", base, title),
                    None => base.to_string(),
                }
            }
        };
    }

    /// Handle Ctrl+C press and detect double press for quit.
    /// Returns true if should quit (double Ctrl+C), false otherwise.
    pub fn handle_ctrl_c(&mut self) -> bool {
        const DOUBLE_CTRL_C_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(500);

        let now = Instant::now();

        if let Some(last_time) = self.last_ctrl_c_time {
            if now.duration_since(last_time) <= DOUBLE_CTRL_C_TIMEOUT {
                self.last_ctrl_c_time = None;
                return true;
            }
        }

        self.status_message = "Press Ctrl+C again to quit".to_string();
        self.last_ctrl_c_time = Some(now);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(None, 2)
    }

    #[test]
    fn set_source_splits_lines_and_resets_cursor() {
        let mut app = app();
        app.cursor_row = 3;
        app.set_source("a\nb\nc");
        assert_eq!(app.lines, vec!["a", "b", "c"]);
        assert_eq!(app.cursor_row, 0);
        assert_eq!(app.source(), "a\nb\nc");
    }

    #[test]
    fn run_guard_blocks_second_run_until_finish() {
        let mut app = app();
        app.set_source("console.log(1)");
        assert!(app.begin_run().is_some());
        assert!(app.begin_run().is_none());
        app.finish_run(&ExecutionOutcome::Success(vec!["> 1".to_string()]));
        assert_eq!(app.run_state, RunState::Idle);
        assert!(app.begin_run().is_some());
    }

    #[test]
    fn insert_indent_inserts_tab_width_spaces() {
        let mut app = app();
        app.insert_char('x');
        app.move_cursor_home();
        app.insert_indent();
        assert_eq!(app.lines[0], "  x");
        assert_eq!(app.cursor_col, 2);
    }

    #[test]
    fn newline_splits_line_at_cursor() {
        let mut app = app();
        app.set_source("hello");
        app.cursor_col = 2;
        app.insert_newline();
        assert_eq!(app.lines, vec!["he", "llo"]);
        assert_eq!((app.cursor_row, app.cursor_col), (1, 0));
    }

    #[test]
    fn backspace_at_line_start_merges_lines() {
        let mut app = app();
        app.set_source("ab\ncd");
        app.cursor_row = 1;
        app.cursor_col = 0;
        app.backspace();
        assert_eq!(app.lines, vec!["abcd"]);
        assert_eq!((app.cursor_row, app.cursor_col), (0, 2));
    }

    #[test]
    fn handoff_is_consumed_once() {
        let entry = crate::catalog::find_entry("blank").unwrap().1;
        let mut app = App::new(Some(entry), 2);
        assert_eq!(app.view, View::Editor);
        assert_eq!(app.entry_title.as_deref(), Some("Blank Playground"));
        assert!(app.handoff.is_none());
        // A second consume is a no-op
        app.set_source("changed");
        app.consume_handoff();
        assert_eq!(app.source(), "changed");
    }

    #[test]
    fn library_navigation_wraps_sections() {
        let mut app = app();
        let first = app.selected_section();
        for _ in 0..Section::ALL.len() {
            app.next_section();
        }
        assert_eq!(app.selected_section(), first);
    }
}
